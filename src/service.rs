use serde::Deserialize;
use serde::de::DeserializeOwned;

use crate::domain::{AddDomainParams, Domain, EditDomainParams};
use crate::record::{AddDomainRecordParams, DomainRecord, UpdateDomainRecordParams};
use crate::utils::to_ascii;
use crate::{ClientError, Context, Payload, Transport};

/// Every response from the API is wrapped in a `response` object.
#[derive(Deserialize)]
struct Envelope<R> {
    response: R,
}

/// Unwraps the envelope of a response body.
fn decode<R: DeserializeOwned>(body: &str) -> Result<R, ClientError> {
    Ok(serde_json::from_str::<Envelope<R>>(body)?.response)
}

/// Manages the domains of an account and their DNS records.
///
/// Domain names are converted to their ASCII form before they are sent, so
/// internationalized names can be passed as is.
pub struct DomainService<'a, T: Transport + ?Sized> {
    transport: &'a T,
}

impl<'a, T: Transport + ?Sized> DomainService<'a, T> {
    pub fn new(transport: &'a T) -> Self {
        Self { transport }
    }

    /// Adds a domain to the account.
    ///
    /// # Errors
    ///
    /// Will return a `Domain` error if the domain name can't be converted to ASCII.
    pub fn add_domain(
        &self,
        ctx: &Context,
        mut params: AddDomainParams,
    ) -> Result<Domain, ClientError> {
        params.domain_name = to_ascii(&params.domain_name)?;
        let payload = Payload::from_params(&params)?;

        #[derive(Deserialize)]
        struct Response {
            domain: Domain,
        }

        let body = self.transport.post(ctx, "domain/add", &payload.into())?;
        Ok(decode::<Response>(&body)?.domain)
    }

    /// Adds a DNS record to a domain.
    pub fn add_record(
        &self,
        ctx: &Context,
        mut params: AddDomainRecordParams,
    ) -> Result<DomainRecord, ClientError> {
        params.domain_name = to_ascii(&params.domain_name)?;
        let payload = Payload::from_params(&params)?;

        #[derive(Deserialize)]
        struct Response {
            record: DomainRecord,
        }

        let body = self.transport.post(ctx, "domain/addrecord", &payload.into())?;
        Ok(decode::<Response>(&body)?.record)
    }

    /// Returns detailed information about one domain.
    pub fn details(&self, ctx: &Context, domain_name: &str) -> Result<Domain, ClientError> {
        let domain_name = to_ascii(domain_name)?;

        #[derive(Deserialize)]
        struct Response {
            domain: Domain,
        }

        let body = self
            .transport
            .get(ctx, &format!("domain/details/domainname/{domain_name}"))?;
        Ok(decode::<Response>(&body)?.domain)
    }

    /// Removes a domain, and all of its records, from the account.
    pub fn delete_domain(&self, ctx: &Context, domain_name: &str) -> Result<(), ClientError> {
        let payload = Payload::new().add("domainname", to_ascii(domain_name)?);
        self.transport.post(ctx, "domain/delete", &payload.into())?;
        Ok(())
    }

    pub fn delete_record(&self, ctx: &Context, record_id: i64) -> Result<(), ClientError> {
        let payload = Payload::new().add("recordid", record_id);
        self.transport
            .post(ctx, "domain/deleterecord", &payload.into())?;
        Ok(())
    }

    /// Changes the SOA settings of a domain.
    ///
    /// `domain_name` identifies the domain and is the only name sent. A name
    /// set in `params.domain_name` is never sent and can't rename the domain;
    /// it is only checked, so an invalid one still fails the call.
    pub fn edit_domain(
        &self,
        ctx: &Context,
        domain_name: &str,
        mut params: EditDomainParams,
    ) -> Result<Domain, ClientError> {
        let domain_name = to_ascii(domain_name)?;
        params.domain_name = params.domain_name.as_deref().map(to_ascii).transpose()?;
        let payload = Payload::from_params(&params)?.add("domainname", domain_name);

        #[derive(Deserialize)]
        struct Response {
            domain: Domain,
        }

        let body = self.transport.post(ctx, "domain/edit", &payload.into())?;
        Ok(decode::<Response>(&body)?.domain)
    }

    pub fn update_record(
        &self,
        ctx: &Context,
        record_id: i64,
        params: UpdateDomainRecordParams,
    ) -> Result<DomainRecord, ClientError> {
        let payload = Payload::from_params(&params)?.add("recordid", record_id);

        #[derive(Deserialize)]
        struct Response {
            record: DomainRecord,
        }

        let body = self
            .transport
            .post(ctx, "domain/updaterecord", &payload.into())?;
        Ok(decode::<Response>(&body)?.record)
    }

    /// Lists the domains of the account.
    pub fn list(&self, ctx: &Context) -> Result<Vec<Domain>, ClientError> {
        #[derive(Deserialize)]
        struct Response {
            #[serde(default)]
            domains: Vec<Domain>,
        }

        let body = self.transport.get(ctx, "domain/list")?;
        Ok(decode::<Response>(&body)?.domains)
    }

    /// Lists the DNS records of a domain.
    pub fn list_records(
        &self,
        ctx: &Context,
        domain_name: &str,
    ) -> Result<Vec<DomainRecord>, ClientError> {
        let payload = Payload::new().add("domainname", to_ascii(domain_name)?);

        #[derive(Deserialize)]
        struct Response {
            #[serde(default)]
            records: Vec<DomainRecord>,
        }

        let body = self
            .transport
            .post(ctx, "domain/listrecords", &payload.into())?;
        Ok(decode::<Response>(&body)?.records)
    }
}
