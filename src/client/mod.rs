//! Dinero API client
//!
//! Layers, leaves first: [`Transport`] performs single HTTP exchanges,
//! [`TokenManager`] keeps the bearer token fresh, and [`Dinero`] dispatches
//! authenticated calls for the resource clients in [`api`].

use std::time::Duration;

pub mod api;
pub mod dinero;
#[cfg(test)]
pub mod mock;
pub mod models;
pub mod response;
pub mod token;
pub mod transport;

pub use api::{Contacts, InvoiceQuery, Invoices, Organizations, QueryFilter};
pub use dinero::Dinero;
pub use response::{Body, Response};
pub use token::{AccessToken, Credentials, TokenManager};
pub use transport::{Headers, Method, ReqwestTransport, Transport};

/// Dinero API base URL
pub const API_BASE_URL: &str = "https://api.dinero.dk/v1";

/// OAuth token endpoint
pub const OAUTH_URL: &str = "https://authz.dinero.dk/dineroapi/oauth/token";

/// Timeout applied when the caller does not pass one
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);
