//! Resource clients
//!
//! Each resource borrows the [`Dinero`](super::Dinero) client and routes its
//! calls through [`Dinero::send`](super::Dinero::send):
//! - [`Contacts`] - contact lookup and creation
//! - [`Invoices`] - invoice lookup, creation, booking and email
//! - [`Organizations`] - organizations visible to the API key

mod contacts;
mod invoices;
mod organizations;
mod query;

pub use contacts::Contacts;
pub use invoices::Invoices;
pub use organizations::Organizations;
pub use query::{InvoiceQuery, QueryFilter};
