//! Mock transport for testing
//!
//! Provides a scripted [`Transport`] that records every request so tests can
//! count calls and inspect URLs, headers and bodies without network access.

use std::collections::VecDeque;
use std::sync::Mutex;
use std::time::Duration;

use async_trait::async_trait;

use super::response::{Body, Response};
use super::transport::{Headers, Method, Transport};
use crate::error::{ApiError, Result};

/// Mock transport for testing.
///
/// Register replies per method and URL fragment, then hand the mock to a
/// client as `Arc<dyn Transport>`.
///
/// # Example
/// ```ignore
/// let mock = Arc::new(
///     MockTransport::new()
///         .with_json(Method::Post, "/oauth/token", r#"{"access_token":"t","expires_in":60}"#),
/// );
/// ```
#[derive(Default)]
pub struct MockTransport {
    routes: Mutex<Vec<Route>>,
    captured: Mutex<Vec<CapturedRequest>>,
    latency: Option<Duration>,
}

struct Route {
    method: Method,
    url_fragment: String,
    /// Replies are consumed in order; the last one repeats
    replies: VecDeque<Reply>,
}

#[derive(Clone)]
enum Reply {
    Status(u16, String),
    Failure(String),
}

/// A captured request for test assertions.
#[derive(Debug, Clone)]
pub struct CapturedRequest {
    pub url: String,
    pub method: Method,
    pub body: String,
    pub headers: Headers,
    pub timeout: Duration,
}

impl CapturedRequest {
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(k, _)| k.eq_ignore_ascii_case(name))
            .map(|(_, v)| v.as_str())
    }
}

impl MockTransport {
    pub fn new() -> Self {
        Self::default()
    }

    /// Reply 200 with `body` to requests matching `method` and `url_fragment`.
    pub fn with_json(self, method: Method, url_fragment: &str, body: &str) -> Self {
        self.with_status(method, url_fragment, 200, body)
    }

    /// Reply with an arbitrary status and body.
    pub fn with_status(self, method: Method, url_fragment: &str, status: u16, body: &str) -> Self {
        self.push(method, url_fragment, Reply::Status(status, body.to_string()))
    }

    /// Fail the exchange at the transport level.
    pub fn with_failure(self, method: Method, url_fragment: &str, reason: &str) -> Self {
        self.push(method, url_fragment, Reply::Failure(reason.to_string()))
    }

    /// Delay every reply, to force concurrent callers to overlap.
    pub fn with_latency(mut self, latency: Duration) -> Self {
        self.latency = Some(latency);
        self
    }

    fn push(self, method: Method, url_fragment: &str, reply: Reply) -> Self {
        {
            let mut routes = self.routes.lock().unwrap();
            match routes
                .iter_mut()
                .find(|r| r.method == method && r.url_fragment == url_fragment)
            {
                Some(route) => route.replies.push_back(reply),
                None => routes.push(Route {
                    method,
                    url_fragment: url_fragment.to_string(),
                    replies: VecDeque::from([reply]),
                }),
            }
        }
        self
    }

    /// All requests seen so far, in order.
    pub fn requests(&self) -> Vec<CapturedRequest> {
        self.captured.lock().unwrap().clone()
    }

    /// Total number of requests seen.
    pub fn call_count(&self) -> usize {
        self.captured.lock().unwrap().len()
    }

    /// Number of requests whose URL contains `fragment`.
    pub fn calls_to(&self, fragment: &str) -> usize {
        self.captured
            .lock()
            .unwrap()
            .iter()
            .filter(|r| r.url.contains(fragment))
            .count()
    }

    fn next_reply(&self, url: &str, method: Method) -> Option<Reply> {
        let mut routes = self.routes.lock().unwrap();
        // Most specific fragment wins, so "/invoices/x/book" beats "/invoices".
        let route = routes
            .iter_mut()
            .filter(|r| r.method == method && url.contains(&r.url_fragment))
            .max_by_key(|r| r.url_fragment.len())?;
        if route.replies.len() > 1 {
            route.replies.pop_front()
        } else {
            route.replies.front().cloned()
        }
    }
}

#[async_trait]
impl Transport for MockTransport {
    async fn send(
        &self,
        url: &str,
        method: Method,
        body: &str,
        headers: &Headers,
        timeout: Duration,
    ) -> Result<Response> {
        self.captured.lock().unwrap().push(CapturedRequest {
            url: url.to_string(),
            method,
            body: body.to_string(),
            headers: headers.clone(),
            timeout,
        });

        if let Some(latency) = self.latency {
            tokio::time::sleep(latency).await;
        }

        match self.next_reply(url, method) {
            Some(Reply::Status(status, body)) => Ok(Response::new(
                url,
                status,
                Body::from_bytes(body.as_bytes()),
                Headers::new(),
            )),
            Some(Reply::Failure(reason)) => Err(ApiError::Request {
                url: url.to_string(),
                method,
                status: None,
                body: None,
                reason,
            }
            .into()),
            None => Ok(Response::new(
                url,
                404,
                Body::from_bytes(br#"{"message":"no mock route"}"#),
                Headers::new(),
            )),
        }
    }
}
