use reqwest::{StatusCode, blocking::Response};
use serde::Deserialize;
use thiserror::Error;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum DomainError {
    #[error("domain name is empty")]
    Empty,
    #[error("domain {domain:?} can't be converted to ASCII: {reason}")]
    Idna { domain: String, reason: String },
}

#[derive(Error, Debug)]
#[error("GleSYS API error: {status} - {message}")]
pub struct ApiError {
    status: StatusCode,
    message: String,
}

impl ApiError {
    pub(crate) fn from_response(resp: Response) -> Self {
        #[derive(Deserialize)]
        struct Status {
            text: String,
        }
        #[derive(Deserialize)]
        struct Inner {
            status: Status,
        }
        #[derive(Deserialize)]
        struct ErrorResp {
            response: Inner,
        }

        let status = resp.status();
        let text = resp
            .text()
            .unwrap_or_else(|e| format!("unable to read response body: {e}"));

        let message = serde_json::from_str::<ErrorResp>(&text).map_or_else(
            |e| format!("unable to get error message from {text:?}: {e}"),
            |r| r.response.status.text,
        );

        Self { status, message }
    }

    /// The HTTP status the API answered with.
    pub fn status(&self) -> StatusCode {
        self.status
    }

    /// The error text from the API's status envelope.
    pub fn message(&self) -> &str {
        &self.message
    }
}

#[derive(Error, Debug)]
pub enum ClientError {
    #[error(transparent)]
    Domain(#[from] DomainError),
    #[error(transparent)]
    Api(#[from] ApiError),
    #[error(transparent)]
    Reqwest(#[from] reqwest::Error),
    #[error(transparent)]
    UrlParse(#[from] url::ParseError),
    #[error(transparent)]
    Json(#[from] serde_json::Error),
    #[error("request was cancelled")]
    Cancelled,
    #[error("request deadline exceeded")]
    DeadlineExceeded,
}

#[derive(Error, Debug)]
pub enum ClientBuilderError {
    #[error("missing field: {0}")]
    MissingField(String),
    #[error(transparent)]
    UrlParse(#[from] url::ParseError),
}
