use reqwest::blocking::RequestBuilder;
use reqwest::header::{ACCEPT, USER_AGENT};
use serde_json::Value as JsonValue;
use url::Url;

use crate::{ApiError, ClientBuilderError, ClientError, Context, DomainService};

/// The endpoint used when none is given to the [ClientBuilder].
pub const DEFAULT_ENDPOINT: &str = "https://api.glesys.com/";

/// Executes requests against the API on behalf of the services.
///
/// Implementations take care of the base URL, authorization and status
/// handling, and hand back the raw response body. Every call must honour
/// the given [Context].
pub trait Transport {
    /// Sends a GET request to `path`, relative to the API endpoint.
    fn get(&self, ctx: &Context, path: &str) -> Result<String, ClientError>;

    /// Sends a POST request with a JSON body to `path`, relative to the API endpoint.
    fn post(&self, ctx: &Context, path: &str, body: &JsonValue) -> Result<String, ClientError>;
}

/// Builder for a [Client] that handles default values.
pub struct ClientBuilder {
    endpoint: Option<Url>,
    project: Option<String>,
    apikey: Option<String>,
    user_agent: Option<String>,
}

impl ClientBuilder {
    fn new() -> Self {
        Self {
            endpoint: None,
            project: None,
            apikey: None,
            user_agent: None,
        }
    }

    /// Sets the API endpoint to the one given.
    ///
    /// The endpoint should have a trailing slash, as per [Url]'s semantics.
    pub fn endpoint(mut self, endpoint: &Url) -> Self {
        self.endpoint = Some(endpoint.clone());
        self
    }

    /// In the case that `endpoint` is the Some variant, sets the API endpoint to it.
    ///
    /// The endpoint should have a trailing slash, as per [Url]'s semantics.
    pub fn endpoint_if_some(mut self, endpoint: Option<&Url>) -> Self {
        if let Some(endpoint) = endpoint {
            self.endpoint = Some(endpoint.clone());
        }
        self
    }

    /// Sets the project (account) the API key belongs to.
    pub fn project(mut self, project: &str) -> Self {
        self.project = Some(project.to_string());
        self
    }

    /// Sets the API key to the one given.
    pub fn apikey(mut self, apikey: &str) -> Self {
        self.apikey = Some(apikey.to_string());
        self
    }

    /// Prepends the given product token to the client's User-Agent.
    pub fn user_agent(mut self, user_agent: &str) -> Self {
        self.user_agent = Some(user_agent.to_string());
        self
    }

    /// Builds a [Client] from the builder.
    ///
    /// In the case that no API endpoint is set, [DEFAULT_ENDPOINT] is used.
    ///
    /// # Errors
    /// - `MissingField` if a required field isn't added to the builder.
    /// - `UrlParse` if the default API endpoint fails to parse. This shouldn't happen.
    pub fn build(self) -> Result<Client, ClientBuilderError> {
        let endpoint = match self.endpoint {
            Some(endpoint) => endpoint,
            None => DEFAULT_ENDPOINT.parse()?,
        };
        let project = self
            .project
            .ok_or_else(|| ClientBuilderError::MissingField("project".to_string()))?;
        let apikey = self
            .apikey
            .ok_or_else(|| ClientBuilderError::MissingField("apikey".to_string()))?;

        let mut client = Client::new(&endpoint, &project, &apikey);
        if let Some(prefix) = self.user_agent {
            client.user_agent = format!("{prefix} {}", client.user_agent);
        }
        Ok(client)
    }
}

/// API client.
pub struct Client {
    endpoint: Url,
    project: String,
    apikey: String,
    user_agent: String,
    client: reqwest::blocking::Client,
}

impl Client {
    /// Creates a new Client.
    pub fn new(endpoint: &Url, project: &str, apikey: &str) -> Self {
        Self {
            endpoint: endpoint.clone(),
            project: project.to_string(),
            apikey: apikey.to_string(),
            user_agent: concat!("glesys-rs/", env!("CARGO_PKG_VERSION")).to_string(),
            client: reqwest::blocking::Client::new(),
        }
    }

    /// Returns a builder for a Client.
    pub fn builder() -> ClientBuilder {
        ClientBuilder::new()
    }

    /// Returns the service for managing domains and their DNS records.
    pub fn domains(&self) -> DomainService<'_, Self> {
        DomainService::new(self)
    }

    /// Creates a [Url] from the endpoint and a relative path.
    fn build_url(&self, path: &str) -> Result<Url, url::ParseError> {
        self.endpoint.join(path)
    }

    /// Authorizes and sends the request, returning the body of a successful response.
    fn send_request(&self, ctx: &Context, request: RequestBuilder) -> Result<String, ClientError> {
        ctx.check()?;

        let mut request = request
            .basic_auth(&self.project, Some(&self.apikey))
            .header(USER_AGENT, self.user_agent.as_str())
            .header(ACCEPT, "application/json");
        if let Some(remaining) = ctx.remaining() {
            request = request.timeout(remaining);
        }

        let resp = request.send()?;
        let status = resp.status();
        log::debug!("response status: {status}");
        if !status.is_success() {
            let err = ApiError::from_response(resp);
            log::warn!("{err}");
            return Err(ClientError::Api(err));
        }
        Ok(resp.text()?)
    }
}

impl Transport for Client {
    fn get(&self, ctx: &Context, path: &str) -> Result<String, ClientError> {
        let url = self.build_url(path)?;
        log::debug!("GET {url}");
        self.send_request(ctx, self.client.get(url))
    }

    fn post(&self, ctx: &Context, path: &str, body: &JsonValue) -> Result<String, ClientError> {
        let url = self.build_url(path)?;
        log::debug!("POST {url}");
        self.send_request(ctx, self.client.post(url).json(body))
    }
}

#[cfg(test)]
mod tests;
