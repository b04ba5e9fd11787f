//! Invoices resource

use log::debug;
use serde::Deserialize;
use serde_json::{Map, Value, json};

use super::query::{InvoiceQuery, QueryFilter, listing_endpoint, path_segment};
use crate::client::Dinero;
use crate::client::models::{Contact, INVOICE_FIELDS, Invoice, InvoiceSummary};
use crate::client::transport::Method;
use crate::error::{ApiError, Error, Result};

/// Invoice operations for the current organization
pub struct Invoices<'a> {
    dinero: &'a Dinero,
}

/// Body of a successful invoice creation
#[derive(Debug, Deserialize)]
#[serde(rename_all = "PascalCase")]
struct CreatedInvoice {
    guid: String,
    time_stamp: String,
}

impl<'a> Invoices<'a> {
    pub(crate) fn new(dinero: &'a Dinero) -> Self {
        Self { dinero }
    }

    /// Fetch a single invoice.
    pub async fn find_by_guid(&self, guid: &str) -> Result<Invoice> {
        let path = self
            .dinero
            .org_path(&format!("invoices/{}", path_segment(guid)?));
        let response = self.dinero.send(&path, Method::Get, "").await?;
        response.parse()
    }

    /// List invoices matching `filter`, narrowed by `query` options.
    pub async fn find(
        &self,
        filter: &QueryFilter,
        query: &InvoiceQuery,
    ) -> Result<Vec<InvoiceSummary>> {
        let path = self.dinero.org_path("invoices");
        let endpoint = listing_endpoint(&path, &query.to_query_params(), filter, INVOICE_FIELDS);

        let response = self.dinero.send(&endpoint, Method::Get, "").await?;
        let invoices: Vec<InvoiceSummary> = response.collection()?;
        debug!("Found {} invoices", invoices.len());
        Ok(invoices)
    }

    /// Create an invoice, optionally booking it right away.
    ///
    /// The invoice needs a contact: either `contact_guid` on the invoice or a
    /// `contact` entity. A contact without a guid is looked up by its known
    /// fields and created when no match exists.
    pub async fn create(
        &self,
        invoice: &Invoice,
        contact: Option<&Contact>,
        book: bool,
    ) -> Result<Invoice> {
        let mut invoice = invoice.clone();

        match contact {
            Some(contact) => {
                let guid = match &contact.contact_guid {
                    Some(guid) => guid.clone(),
                    None => self.resolve_contact(contact).await?,
                };
                invoice.contact_guid = Some(guid);
            }
            None if invoice.contact_guid.is_none() => {
                return Err(Error::MissingParameter(
                    "Invoice requires a 'Contact'. Specify either a contact guid or pass a Contact"
                        .to_string(),
                ));
            }
            None => {}
        }

        if let Some(field) = invoice.product_lines.iter().find_map(|l| l.missing_field()) {
            return Err(Error::MissingParameter(format!(
                "InvoiceLine requires a '{}'",
                field
            )));
        }

        let path = self.dinero.org_path("invoices");
        let body = serde_json::to_string(&invoice)?;
        let created: CreatedInvoice = self
            .dinero
            .send(&path, Method::Post, &body)
            .await?
            .parse()?;
        debug!("Created invoice {}", created.guid);

        if book {
            let book_path = format!("{}/{}/book", path, path_segment(&created.guid)?);
            let book_body = json!({ "Timestamp": created.time_stamp }).to_string();
            self.dinero.send(&book_path, Method::Post, &book_body).await?;
            debug!("Booked invoice {}", created.guid);
        }

        Ok(invoice.with_guid(created.guid))
    }

    /// Email an invoice. `settings` override the configured email defaults.
    pub async fn send_email(&self, guid: &str, settings: &Map<String, Value>) -> Result<()> {
        let path = self
            .dinero
            .org_path(&format!("invoices/{}/email", path_segment(guid)?));

        let mut merged = self.dinero.email_settings().clone();
        for (key, value) in settings {
            merged.insert(key.clone(), value.clone());
        }

        let body = Value::Object(merged).to_string();
        self.dinero.send(&path, Method::Post, &body).await?;
        Ok(())
    }

    /// Find the guid of an existing contact matching `contact`, creating
    /// the contact when none matches.
    async fn resolve_contact(&self, contact: &Contact) -> Result<String> {
        let filter = QueryFilter::new()
            .eq_opt("ExternalReference", contact.external_reference.as_deref())
            .eq_opt("Name", contact.name.as_deref())
            .eq_opt("VatNumber", contact.vat_number.as_deref())
            .eq_opt("EanNumber", contact.ean_number.as_deref())
            .eq_opt("IsPerson", contact.is_person)
            .eq_opt("Email", contact.email.as_deref());
        if filter.is_empty() {
            return Err(Error::MissingParameter(
                "Contact lookup requires at least one known field".to_string(),
            ));
        }

        let mut matches = self.dinero.contacts().find(&filter).await?;
        let resolved = match matches.len() {
            0 => self.dinero.contacts().create(contact).await?,
            1 => matches.remove(0),
            n => return Err(Error::AmbiguousContact(n)),
        };

        resolved.contact_guid.ok_or_else(|| {
            ApiError::MalformedBody {
                url: self.dinero.org_path("contacts"),
                reason: "contact without ContactGuid".to_string(),
            }
            .into()
        })
    }
}
