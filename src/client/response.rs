//! Response envelope returned by every transport call

use serde::de::DeserializeOwned;
use serde_json::Value;

use super::transport::Headers;
use crate::error::{ApiError, Result};

/// Key under which Dinero wraps list results
pub const COLLECTION_KEY: &str = "Collection";

/// Response body, parsed as far as possible
#[derive(Debug, Clone, PartialEq)]
pub enum Body {
    /// No content (or whitespace only)
    Empty,
    /// Valid JSON document
    Json(Value),
    /// Anything that is not JSON, kept verbatim
    Raw(Vec<u8>),
}

impl Body {
    /// Classify raw response bytes
    pub fn from_bytes(bytes: &[u8]) -> Self {
        if bytes.iter().all(u8::is_ascii_whitespace) {
            return Body::Empty;
        }
        match serde_json::from_slice(bytes) {
            Ok(value) => Body::Json(value),
            Err(_) => Body::Raw(bytes.to_vec()),
        }
    }

    pub fn is_empty(&self) -> bool {
        matches!(self, Body::Empty)
    }

    pub fn as_json(&self) -> Option<&Value> {
        match self {
            Body::Json(value) => Some(value),
            _ => None,
        }
    }

    /// Text rendering for diagnostics and error messages
    pub fn to_text(&self) -> String {
        match self {
            Body::Empty => String::new(),
            Body::Json(value) => value.to_string(),
            Body::Raw(bytes) => String::from_utf8_lossy(bytes).into_owned(),
        }
    }
}

/// HTTP response: status, body and headers
#[derive(Debug, Clone)]
pub struct Response {
    /// URL the request was sent to
    pub url: String,
    pub status: u16,
    pub body: Body,
    /// Response headers; names as reported by the transport
    pub headers: Headers,
}

impl Response {
    pub fn new(url: impl Into<String>, status: u16, body: Body, headers: Headers) -> Self {
        Self {
            url: url.into(),
            status,
            body,
            headers,
        }
    }

    /// Whether the status is 2xx
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }

    /// Look up a header by name, ignoring case
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(k, _)| k.eq_ignore_ascii_case(name))
            .map(|(_, v)| v.as_str())
    }

    /// Borrow the body as JSON, failing if it is empty or not JSON
    pub fn json(&self) -> Result<&Value> {
        match &self.body {
            Body::Json(value) => Ok(value),
            Body::Empty => Err(self.malformed("expected a JSON body, got an empty one")),
            Body::Raw(_) => Err(self.malformed("body is not valid JSON")),
        }
    }

    /// Decode the whole body into `T`
    pub fn parse<T: DeserializeOwned>(&self) -> Result<T> {
        let value = self.json()?;
        T::deserialize(value).map_err(|e| self.malformed(&e.to_string()))
    }

    /// Decode a single top-level field of an object body into `T`
    pub fn parse_field<T: DeserializeOwned>(&self, key: &str) -> Result<T> {
        let field = self
            .json()?
            .get(key)
            .ok_or_else(|| self.malformed(&format!("missing field '{}'", key)))?;
        T::deserialize(field).map_err(|e| self.malformed(&format!("field '{}': {}", key, e)))
    }

    /// Decode the `Collection` list of a listing response
    pub fn collection<T: DeserializeOwned>(&self) -> Result<Vec<T>> {
        self.parse_field(COLLECTION_KEY)
    }

    fn malformed(&self, reason: &str) -> crate::error::Error {
        ApiError::MalformedBody {
            url: self.url.clone(),
            reason: reason.to_string(),
        }
        .into()
    }
}
