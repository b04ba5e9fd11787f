//! Dinero API client implementation

use std::sync::Arc;
use std::time::Duration;

use log::debug;
use serde_json::{Map, Value};

use super::api::{Contacts, Invoices, Organizations};
use super::response::Response;
use super::token::{Credentials, TokenManager};
use super::transport::{Headers, Method, ReqwestTransport, Transport};
use super::{API_BASE_URL, DEFAULT_TIMEOUT};
use crate::config::ClientConfig;
use crate::error::{ApiError, Result};

/// Dinero API client
///
/// Every call to the API goes through [`Dinero::send`], which attaches a
/// current bearer token obtained from the [`TokenManager`].
pub struct Dinero {
    tokens: TokenManager,
    transport: Arc<dyn Transport>,
    organization_id: String,
    email_settings: Map<String, Value>,
}

impl Dinero {
    /// Create a client backed by the reqwest transport
    pub fn new(config: ClientConfig) -> Result<Self> {
        config.validate()?;
        let transport = Arc::new(ReqwestTransport::new()?);
        Self::with_transport(config, transport)
    }

    /// Create a client over any transport
    pub fn with_transport(config: ClientConfig, transport: Arc<dyn Transport>) -> Result<Self> {
        config.validate()?;

        Ok(Self {
            tokens: TokenManager::new(Credentials::from(&config), transport.clone()),
            transport,
            organization_id: config.organization_id,
            email_settings: config.email_settings,
        })
    }

    /// Organization every resource path is scoped to
    pub fn organization_id(&self) -> &str {
        &self.organization_id
    }

    /// Default settings merged into invoice email requests
    pub fn email_settings(&self) -> &Map<String, Value> {
        &self.email_settings
    }

    /// Get a valid access token, refreshing it if needed
    pub async fn access_token(&self) -> Result<String> {
        Ok(self.tokens.get_access_token().await?.token)
    }

    pub fn contacts(&self) -> Contacts<'_> {
        Contacts::new(self)
    }

    pub fn invoices(&self) -> Invoices<'_> {
        Invoices::new(self)
    }

    pub fn organizations(&self) -> Organizations<'_> {
        Organizations::new(self)
    }

    /// Send an authenticated request with default headers and timeout
    pub async fn send(&self, path: &str, method: Method, body: &str) -> Result<Response> {
        self.send_with(path, method, body, &Headers::new(), DEFAULT_TIMEOUT)
            .await
    }

    /// Send an authenticated request.
    ///
    /// `path` is relative to the API base URL unless it is an absolute
    /// `http(s)://` URL. `extra_headers` are layered over the defaults
    /// (`Authorization`, `Content-Type`) and replace them on a name match.
    /// Non-2xx answers become [`ApiError::Request`].
    pub async fn send_with(
        &self,
        path: &str,
        method: Method,
        body: &str,
        extra_headers: &Headers,
        timeout: Duration,
    ) -> Result<Response> {
        let token = self.tokens.get_access_token().await?;
        let url = resolve_url(path);
        let headers = merge_headers(&token.token, extra_headers);

        debug!("{} {}", method, url);
        let response = self
            .transport
            .send(&url, method, body, &headers, timeout)
            .await?;
        debug!("{} {} -> {}", method, url, response.status);

        if !response.is_success() {
            return Err(ApiError::Request {
                reason: failure_reason(&response),
                status: Some(response.status),
                body: Some(response.body.to_text()),
                url,
                method,
            }
            .into());
        }

        Ok(response)
    }

    /// `/{organization_id}/{suffix}`
    pub(crate) fn org_path(&self, suffix: &str) -> String {
        format!("/{}/{}", self.organization_id, suffix.trim_start_matches('/'))
    }
}

fn resolve_url(path: &str) -> String {
    if path.starts_with("http://") || path.starts_with("https://") {
        path.to_string()
    } else if path.starts_with('/') {
        format!("{}{}", API_BASE_URL, path)
    } else {
        format!("{}/{}", API_BASE_URL, path)
    }
}

fn merge_headers(token: &str, extra: &Headers) -> Headers {
    let mut headers = Headers::new();
    headers.insert("Authorization".to_string(), format!("Bearer {}", token));
    headers.insert("Content-Type".to_string(), "application/json".to_string());

    for (name, value) in extra {
        headers.retain(|existing, _| !existing.eq_ignore_ascii_case(name));
        headers.insert(name.clone(), value.clone());
    }
    headers
}

/// Prefer the API's own error message over a bare status code
fn failure_reason(response: &Response) -> String {
    response
        .body
        .as_json()
        .and_then(|v| v.get("message").or_else(|| v.get("Message")))
        .and_then(Value::as_str)
        .map(|msg| format!("HTTP {}: {}", response.status, msg))
        .unwrap_or_else(|| format!("HTTP {}", response.status))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::client::OAUTH_URL;
    use crate::client::mock::MockTransport;
    use crate::error::{ConfigError, Error};
    use serde_json::json;

    const TOKEN_PATH: &str = "/dineroapi/oauth/token";
    const TOKEN_BODY: &str = r#"{"access_token":"tok1","expires_in":3600}"#;

    fn config() -> ClientConfig {
        ClientConfig::new("a", "b", "k", "42")
    }

    fn client(mock: &Arc<MockTransport>) -> Dinero {
        Dinero::with_transport(config(), mock.clone()).unwrap()
    }

    #[test]
    fn test_construction_rejects_each_missing_field() {
        let blanks: [(&str, ClientConfig); 4] = [
            ("client_id", ClientConfig::new("", "b", "k", "42")),
            ("client_secret", ClientConfig::new("a", "", "k", "42")),
            ("api_key", ClientConfig::new("a", "b", "", "42")),
            ("organization_id", ClientConfig::new("a", "b", "k", "")),
        ];

        for (field, config) in blanks {
            let mock = Arc::new(MockTransport::new());
            match Dinero::with_transport(config.clone(), mock.clone()) {
                Err(Error::Config(ConfigError::Missing(name))) => assert_eq!(name, field),
                Err(other) => panic!("expected Missing({field}), got {other:?}"),
                Ok(_) => panic!("expected Missing({field}), got a client"),
            }
            assert!(matches!(
                Dinero::new(config),
                Err(Error::Config(ConfigError::Missing(_)))
            ));
            assert_eq!(mock.call_count(), 0);
        }
    }

    #[test]
    fn test_resolve_url() {
        assert_eq!(
            resolve_url("/42/contacts"),
            "https://api.dinero.dk/v1/42/contacts"
        );
        assert_eq!(resolve_url("organizations"), "https://api.dinero.dk/v1/organizations");
        assert_eq!(resolve_url(OAUTH_URL), OAUTH_URL);
    }

    #[test]
    fn test_org_path() {
        let mock = Arc::new(MockTransport::new());
        let dinero = client(&mock);
        assert_eq!(dinero.org_path("contacts"), "/42/contacts");
        assert_eq!(dinero.org_path("/invoices/abc"), "/42/invoices/abc");
    }

    #[test]
    fn test_extra_headers_override_defaults() {
        let mut extra = Headers::new();
        extra.insert("content-type".to_string(), "text/plain".to_string());
        extra.insert("X-Trace".to_string(), "1".to_string());

        let headers = merge_headers("tok", &extra);
        assert_eq!(headers.get("Authorization").map(String::as_str), Some("Bearer tok"));
        assert_eq!(headers.get("content-type").map(String::as_str), Some("text/plain"));
        assert!(!headers.contains_key("Content-Type"));
        assert_eq!(headers.get("X-Trace").map(String::as_str), Some("1"));
    }

    #[tokio::test]
    async fn test_send_sets_default_headers_for_every_method() {
        let mut mock = MockTransport::new().with_json(Method::Post, TOKEN_PATH, TOKEN_BODY);
        for method in Method::ALL {
            mock = mock.with_json(method, "/42/things", "{}");
        }
        let mock = Arc::new(mock);
        let dinero = client(&mock);

        for method in Method::ALL {
            dinero.send("/42/things", method, "").await.unwrap();
        }

        let requests: Vec<_> = mock
            .requests()
            .into_iter()
            .filter(|r| r.url.ends_with("/42/things"))
            .collect();
        assert_eq!(requests.len(), 4);
        for request in requests {
            assert_eq!(request.header("Authorization"), Some("Bearer tok1"));
            assert_eq!(request.header("Content-Type"), Some("application/json"));
            assert_eq!(request.timeout, DEFAULT_TIMEOUT);
        }
        assert_eq!(mock.calls_to(TOKEN_PATH), 1);
    }

    #[tokio::test]
    async fn test_send_round_trips_json_body() {
        let payload = json!({"Collection": [{"Name": "Acme", "Tags": [1, 2]}], "Page": {"Total": 1}});
        let mock = Arc::new(
            MockTransport::new()
                .with_json(Method::Post, TOKEN_PATH, TOKEN_BODY)
                .with_json(Method::Get, "/42/echo", &payload.to_string()),
        );

        let response = client(&mock).send("/42/echo", Method::Get, "").await.unwrap();
        assert_eq!(response.body.as_json(), Some(&payload));
    }

    #[tokio::test]
    async fn test_send_passes_body_and_custom_timeout() {
        let mock = Arc::new(
            MockTransport::new()
                .with_json(Method::Post, TOKEN_PATH, TOKEN_BODY)
                .with_status(Method::Put, "/42/contacts/abc", 204, ""),
        );

        let response = client(&mock)
            .send_with(
                "/42/contacts/abc",
                Method::Put,
                r#"{"Name":"New"}"#,
                &Headers::new(),
                Duration::from_secs(30),
            )
            .await
            .unwrap();

        assert!(response.body.is_empty());
        let put = mock.requests().pop().unwrap();
        assert_eq!(put.body, r#"{"Name":"New"}"#);
        assert_eq!(put.timeout, Duration::from_secs(30));
    }

    #[tokio::test]
    async fn test_non_success_status_is_request_error() {
        let mock = Arc::new(
            MockTransport::new()
                .with_json(Method::Post, TOKEN_PATH, TOKEN_BODY)
                .with_status(
                    Method::Get,
                    "/42/invoices/missing",
                    404,
                    r#"{"code":52,"message":"Invoice not found"}"#,
                ),
        );

        match client(&mock).send("/42/invoices/missing", Method::Get, "").await {
            Err(Error::Api(ApiError::Request {
                url,
                method,
                status,
                body,
                reason,
            })) => {
                assert_eq!(url, "https://api.dinero.dk/v1/42/invoices/missing");
                assert_eq!(method, Method::Get);
                assert_eq!(status, Some(404));
                assert!(body.unwrap().contains("\"code\":52"));
                assert!(reason.contains("Invoice not found"));
            }
            other => panic!("expected Request error, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_transport_failure_is_not_retried() {
        let mock = Arc::new(
            MockTransport::new()
                .with_json(Method::Post, TOKEN_PATH, TOKEN_BODY)
                .with_failure(Method::Get, "/42/contacts", "Failed to connect to API"),
        );

        let err = client(&mock)
            .send("/42/contacts", Method::Get, "")
            .await
            .unwrap_err();
        assert!(err.to_string().contains("Failed to connect"));
        assert_eq!(mock.calls_to("/42/contacts"), 1);
    }

    #[tokio::test]
    async fn test_authentication_failure_stops_before_dispatch() {
        let mock = Arc::new(MockTransport::new().with_json(
            Method::Post,
            TOKEN_PATH,
            r#"{"error":"invalid_client"}"#,
        ));

        let err = client(&mock)
            .send("/42/contacts", Method::Get, "")
            .await
            .unwrap_err();
        assert!(matches!(
            err,
            Error::Api(ApiError::Authentication { status: 401, .. })
        ));
        assert_eq!(mock.call_count(), 1);
    }
}
