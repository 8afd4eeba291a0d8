//! DNS records belonging to a domain.

use std::fmt;

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use strum_macros::{EnumString, IntoStaticStr};

/// Record types the API manages.
///
/// Types without a variant of their own, such as SOA or DS, are kept in `Other`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, IntoStaticStr, EnumString)]
#[strum(serialize_all = "UPPERCASE", ascii_case_insensitive)]
pub enum RecordType {
    A,
    Aaaa,
    Caa,
    Cname,
    Mx,
    Ns,
    Ptr,
    Srv,
    Txt,
    #[strum(default)]
    Other(String),
}

impl RecordType {
    /// Gets the string representation of the type.
    pub fn as_str(&self) -> &str {
        match self {
            RecordType::Other(type_) => type_,
            known => known.into(),
        }
    }
}

impl fmt::Display for RecordType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for RecordType {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for RecordType {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        use serde::de::Error;

        String::deserialize(deserializer)?
            .parse()
            .map_err(D::Error::custom)
    }
}

/// A DNS record as returned by the API.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct DomainRecord {
    #[serde(rename = "recordid", deserialize_with = "deserialize_to_i64")]
    pub record_id: i64,
    #[serde(rename = "domainname", default)]
    pub domain_name: String,
    #[serde(default)]
    pub host: String,
    #[serde(rename = "type")]
    pub record_type: RecordType,
    #[serde(default)]
    pub data: String,
    #[serde(default, deserialize_with = "deserialize_to_i64")]
    pub ttl: i64,
}

/// Parameters for creating a record with [DomainService::add_record](crate::DomainService::add_record).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AddDomainRecordParams {
    #[serde(rename = "domainname")]
    pub domain_name: String,
    pub host: String,
    #[serde(rename = "type")]
    pub record_type: RecordType,
    pub data: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ttl: Option<i64>,
}

impl AddDomainRecordParams {
    pub fn new(domain_name: &str, host: &str, record_type: RecordType, data: &str) -> Self {
        Self {
            domain_name: domain_name.to_string(),
            host: host.to_string(),
            record_type,
            data: data.to_string(),
            ttl: None,
        }
    }

    pub fn ttl(mut self, ttl: i64) -> Self {
        self.ttl = Some(ttl);
        self
    }
}

/// Parameters for [DomainService::update_record](crate::DomainService::update_record).
///
/// Only the fields that are set are sent, the rest of the record is left as is.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct UpdateDomainRecordParams {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub host: Option<String>,
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub record_type: Option<RecordType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ttl: Option<i64>,
}

impl UpdateDomainRecordParams {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn host(mut self, host: &str) -> Self {
        self.host = Some(host.to_string());
        self
    }

    pub fn record_type(mut self, record_type: RecordType) -> Self {
        self.record_type = Some(record_type);
        self
    }

    pub fn data(mut self, data: &str) -> Self {
        self.data = Some(data.to_string());
        self
    }

    pub fn ttl(mut self, ttl: i64) -> Self {
        self.ttl = Some(ttl);
        self
    }
}

/// Helper type for deserializing a string or an i64 to an i64.
#[derive(Deserialize)]
#[serde(untagged)]
enum StringOrI64 {
    I64(i64),
    String(String),
}

/// Deserializes a number that may come as a string, with null as zero.
pub(crate) fn deserialize_to_i64<'de, D>(deserializer: D) -> Result<i64, D::Error>
where
    D: Deserializer<'de>,
{
    use serde::de::Error;

    let string_or_i64 = Option::<StringOrI64>::deserialize(deserializer)?;
    Ok(match string_or_i64 {
        Some(StringOrI64::I64(i)) => i,
        Some(StringOrI64::String(s)) => s.parse().map_err(D::Error::custom)?,
        None => 0,
    })
}

#[cfg(test)]
mod tests;
