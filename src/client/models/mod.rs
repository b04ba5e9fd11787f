//! Dinero API data models
//!
//! Entities map to the API's PascalCase wire format through serde renames.

mod contact;
mod invoice;
mod org;

pub use contact::{CONTACT_FIELDS, Contact};
pub use invoice::{INVOICE_FIELDS, Invoice, InvoiceLine, InvoiceSummary};
pub use org::{ORGANIZATION_FIELDS, Organization};
