//! Error types for the Dinero client

use thiserror::Error;

use crate::client::Method;

/// Result type alias for Dinero operations
pub type Result<T> = std::result::Result<T, Error>;

/// Top-level error type for the library and CLI
#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Api(#[from] ApiError),

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// A resource call was given an entity without a field the API requires
    #[error("Missing parameter: {0}")]
    MissingParameter(String),

    /// Contact lookup for an invoice matched more than one contact
    #[error("Found {0} contacts while trying to resolve the invoice contact")]
    AmbiguousContact(usize),
}

/// Errors raised while talking to the Dinero API
#[derive(Debug, Error)]
pub enum ApiError {
    /// Token exchange answered without an `access_token`
    #[error("Failed obtaining access_token (HTTP {status}): {body}")]
    Authentication { status: u16, body: String },

    /// Transport failure or non-2xx answer on an authenticated call
    #[error("{method} {url} failed: {reason}")]
    Request {
        url: String,
        method: Method,
        status: Option<u16>,
        body: Option<String>,
        reason: String,
    },

    /// Response body could not be decoded into the expected shape
    #[error("Malformed response body from {url}: {reason}")]
    MalformedBody { url: String, reason: String },

    /// The underlying HTTP client could not be constructed
    #[error("Failed to build HTTP client: {0}")]
    Client(String),
}

impl ApiError {
    /// HTTP status associated with the error, when one is known.
    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::Authentication { status, .. } => Some(*status),
            ApiError::Request { status, .. } => *status,
            ApiError::MalformedBody { .. } | ApiError::Client(_) => None,
        }
    }

    /// Build a request error from a failed reqwest call.
    pub(crate) fn transport(url: &str, method: Method, err: reqwest::Error) -> Self {
        let reason = if err.is_timeout() {
            "Request timed out".to_string()
        } else if err.is_connect() {
            "Failed to connect to API".to_string()
        } else {
            err.to_string()
        };
        ApiError::Request {
            url: url.to_string(),
            method,
            status: err.status().map(|s| s.as_u16()),
            body: None,
            reason,
        }
    }
}

impl Error {
    /// HTTP status carried by an API error, if any.
    pub fn status(&self) -> Option<u16> {
        match self {
            Error::Api(api) => api.status(),
            _ => None,
        }
    }
}

/// Configuration-related errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Configuration file not found: {0}")]
    NotFound(String),

    #[error("Failed to parse configuration: {0}")]
    ParseError(String),

    #[error("Invalid configuration: {0}")]
    Invalid(String),

    #[error("Please specify '{0}' in your config file")]
    Missing(&'static str),
}

impl From<serde_yaml::Error> for ConfigError {
    fn from(err: serde_yaml::Error) -> Self {
        ConfigError::ParseError(err.to_string())
    }
}
