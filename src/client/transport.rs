//! HTTP transport boundary
//!
//! [`Transport`] performs exactly one HTTP exchange and knows nothing about
//! tokens or the Dinero URL layout. [`ReqwestTransport`] is the production
//! implementation; tests substitute a recording double.

use std::collections::BTreeMap;
use std::fmt;
use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client as HttpClient;

use super::response::{Body, Response};
use crate::error::{ApiError, Result};

/// Request headers, keyed by header name
pub type Headers = BTreeMap<String, String>;

/// HTTP methods used by the Dinero API
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Method {
    Get,
    Post,
    Put,
    Delete,
}

impl Method {
    /// All supported methods
    pub const ALL: [Method; 4] = [Method::Get, Method::Post, Method::Put, Method::Delete];

    /// Upper-case wire name
    pub fn as_str(&self) -> &'static str {
        match self {
            Method::Get => "GET",
            Method::Post => "POST",
            Method::Put => "PUT",
            Method::Delete => "DELETE",
        }
    }
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<Method> for reqwest::Method {
    fn from(method: Method) -> Self {
        match method {
            Method::Get => reqwest::Method::GET,
            Method::Post => reqwest::Method::POST,
            Method::Put => reqwest::Method::PUT,
            Method::Delete => reqwest::Method::DELETE,
        }
    }
}

/// A single HTTP exchange
#[async_trait]
pub trait Transport: Send + Sync {
    /// Send one request and return the response, whatever its status.
    ///
    /// Only failures to complete the exchange (connect, timeout, reading the
    /// body) are errors; non-2xx answers are returned as normal responses.
    async fn send(
        &self,
        url: &str,
        method: Method,
        body: &str,
        headers: &Headers,
        timeout: Duration,
    ) -> Result<Response>;
}

/// [`Transport`] over a shared reqwest client
#[derive(Debug, Clone)]
pub struct ReqwestTransport {
    http: HttpClient,
}

impl ReqwestTransport {
    /// Create a transport with a fresh connection pool
    pub fn new() -> Result<Self> {
        let http = HttpClient::builder()
            .user_agent(concat!("dinero-rs/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| ApiError::Client(e.to_string()))?;

        Ok(Self { http })
    }

    /// Wrap an existing reqwest client
    pub fn with_client(http: HttpClient) -> Self {
        Self { http }
    }
}

#[async_trait]
impl Transport for ReqwestTransport {
    async fn send(
        &self,
        url: &str,
        method: Method,
        body: &str,
        headers: &Headers,
        timeout: Duration,
    ) -> Result<Response> {
        let mut request = self.http.request(method.into(), url).timeout(timeout);
        for (name, value) in headers {
            request = request.header(name.as_str(), value.as_str());
        }
        if !body.is_empty() {
            request = request.body(body.to_string());
        }

        let response = request
            .send()
            .await
            .map_err(|e| ApiError::transport(url, method, e))?;

        let status = response.status().as_u16();
        let response_headers: Headers = response
            .headers()
            .iter()
            .filter_map(|(name, value)| {
                value
                    .to_str()
                    .ok()
                    .map(|v| (name.as_str().to_string(), v.to_string()))
            })
            .collect();

        let bytes = response
            .bytes()
            .await
            .map_err(|e| ApiError::transport(url, method, e))?;

        Ok(Response::new(
            url,
            status,
            Body::from_bytes(&bytes),
            response_headers,
        ))
    }
}
