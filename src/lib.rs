//! Client library for the Dinero accounting API
//!
//! ```ignore
//! let dinero = Dinero::new(ClientConfig::new(client_id, client_secret, api_key, "42"))?;
//! let contacts = dinero.contacts().find(&QueryFilter::new().eq("Name", "Acme")).await?;
//! ```

pub mod client;
pub mod config;
pub mod error;

pub use client::models::{Contact, Invoice, InvoiceLine, InvoiceSummary, Organization};
pub use client::{Dinero, InvoiceQuery, Method, QueryFilter, Response, Transport};
pub use config::ClientConfig;
pub use error::{ApiError, ConfigError, Error, Result};
