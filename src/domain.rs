//! Domains and their registrar state.

use std::fmt;

use chrono::{DateTime, FixedOffset};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::record::deserialize_to_i64;

/// A domain as returned by the API.
///
/// The API leaves out fields depending on the call, so everything defaults.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Domain {
    #[serde(rename = "domainname", deserialize_with = "null_as_default")]
    pub domain_name: String,
    #[serde(rename = "createtime")]
    pub create_time: Option<DateTime<FixedOffset>>,
    #[serde(rename = "displayname", deserialize_with = "null_as_default")]
    pub display_name: String,
    #[serde(rename = "recordcount", deserialize_with = "deserialize_to_i64")]
    pub record_count: i64,
    #[serde(rename = "registrarinfo")]
    pub registrar_info: Option<RegistrarInfo>,
}

/// Registration state of a domain registered through the provider.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct RegistrarInfo {
    #[serde(deserialize_with = "null_as_default")]
    pub state: String,
    #[serde(rename = "statedescription", deserialize_with = "null_as_default")]
    pub state_description: String,
    #[serde(deserialize_with = "null_as_default")]
    pub expire: String,
    #[serde(rename = "autorenew", deserialize_with = "deserialize_yes_no")]
    pub auto_renew: bool,
    #[serde(deserialize_with = "null_as_default")]
    pub tld: String,
    #[serde(rename = "invoicenumber")]
    pub invoice_number: Option<InvoiceNumber>,
}

/// The API sends invoice numbers as either numbers or strings.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum InvoiceNumber {
    Number(i64),
    Text(String),
}

impl fmt::Display for InvoiceNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InvoiceNumber::Number(n) => write!(f, "{n}"),
            InvoiceNumber::Text(s) => f.write_str(s),
        }
    }
}

/// Parameters for [DomainService::add_domain](crate::DomainService::add_domain).
///
/// The SOA values that aren't set are left to the API's defaults.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AddDomainParams {
    #[serde(rename = "domainname")]
    pub domain_name: String,
    #[serde(rename = "primarynameserver", skip_serializing_if = "Option::is_none")]
    pub primary_name_server: Option<String>,
    #[serde(rename = "responsibleperson", skip_serializing_if = "Option::is_none")]
    pub responsible_person: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ttl: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub refresh: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub retry: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expire: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub minimum: Option<i64>,
    /// Whether the API should create a default set of records for the domain.
    #[serde(rename = "createrecords", serialize_with = "serialize_bool_as_int")]
    pub create_records: bool,
}

impl AddDomainParams {
    pub fn new(domain_name: &str) -> Self {
        Self {
            domain_name: domain_name.to_string(),
            primary_name_server: None,
            responsible_person: None,
            ttl: None,
            refresh: None,
            retry: None,
            expire: None,
            minimum: None,
            create_records: false,
        }
    }

    pub fn primary_name_server(mut self, primary_name_server: &str) -> Self {
        self.primary_name_server = Some(primary_name_server.to_string());
        self
    }

    pub fn responsible_person(mut self, responsible_person: &str) -> Self {
        self.responsible_person = Some(responsible_person.to_string());
        self
    }

    pub fn ttl(mut self, ttl: i64) -> Self {
        self.ttl = Some(ttl);
        self
    }

    pub fn refresh(mut self, refresh: i64) -> Self {
        self.refresh = Some(refresh);
        self
    }

    pub fn retry(mut self, retry: i64) -> Self {
        self.retry = Some(retry);
        self
    }

    pub fn expire(mut self, expire: i64) -> Self {
        self.expire = Some(expire);
        self
    }

    pub fn minimum(mut self, minimum: i64) -> Self {
        self.minimum = Some(minimum);
        self
    }

    pub fn create_records(mut self, create_records: bool) -> Self {
        self.create_records = create_records;
        self
    }
}

/// Parameters for [DomainService::edit_domain](crate::DomainService::edit_domain).
///
/// Only the fields that are set are sent.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct EditDomainParams {
    #[serde(rename = "domainname", skip_serializing_if = "Option::is_none")]
    pub domain_name: Option<String>,
    #[serde(rename = "primarynameserver", skip_serializing_if = "Option::is_none")]
    pub primary_name_server: Option<String>,
    #[serde(rename = "responsibleperson", skip_serializing_if = "Option::is_none")]
    pub responsible_person: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ttl: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub refresh: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub retry: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expire: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub minimum: Option<i64>,
}

impl EditDomainParams {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn domain_name(mut self, domain_name: &str) -> Self {
        self.domain_name = Some(domain_name.to_string());
        self
    }

    pub fn primary_name_server(mut self, primary_name_server: &str) -> Self {
        self.primary_name_server = Some(primary_name_server.to_string());
        self
    }

    pub fn responsible_person(mut self, responsible_person: &str) -> Self {
        self.responsible_person = Some(responsible_person.to_string());
        self
    }

    pub fn ttl(mut self, ttl: i64) -> Self {
        self.ttl = Some(ttl);
        self
    }

    pub fn refresh(mut self, refresh: i64) -> Self {
        self.refresh = Some(refresh);
        self
    }

    pub fn retry(mut self, retry: i64) -> Self {
        self.retry = Some(retry);
        self
    }

    pub fn expire(mut self, expire: i64) -> Self {
        self.expire = Some(expire);
        self
    }

    pub fn minimum(mut self, minimum: i64) -> Self {
        self.minimum = Some(minimum);
        self
    }
}

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// Helper type for deserializing the API's `"yes"`/`"no"` flags.
#[derive(Deserialize)]
#[serde(untagged)]
enum BoolOrString {
    Bool(bool),
    String(String),
}

fn deserialize_yes_no<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    use serde::de::Error;

    Ok(match Option::<BoolOrString>::deserialize(deserializer)? {
        Some(BoolOrString::Bool(b)) => b,
        Some(BoolOrString::String(s)) => match s.to_ascii_lowercase().as_str() {
            "yes" | "true" | "1" => true,
            "no" | "false" | "0" | "" => false,
            _ => return Err(D::Error::custom(format!("expected yes or no, got {s:?}"))),
        },
        None => false,
    })
}

fn serialize_bool_as_int<S>(value: &bool, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    serializer.serialize_u8(u8::from(*value))
}
