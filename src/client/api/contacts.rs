//! Contacts resource

use log::debug;

use super::query::{QueryFilter, listing_endpoint};
use crate::client::Dinero;
use crate::client::models::{CONTACT_FIELDS, Contact};
use crate::client::transport::Method;
use crate::error::{Error, Result};

/// Contact operations for the current organization
pub struct Contacts<'a> {
    dinero: &'a Dinero,
}

impl<'a> Contacts<'a> {
    pub(crate) fn new(dinero: &'a Dinero) -> Self {
        Self { dinero }
    }

    /// List contacts matching `filter` (all contacts when empty).
    pub async fn find(&self, filter: &QueryFilter) -> Result<Vec<Contact>> {
        let path = self.dinero.org_path("contacts");
        let endpoint = listing_endpoint(&path, &[], filter, CONTACT_FIELDS);

        let response = self.dinero.send(&endpoint, Method::Get, "").await?;
        let contacts: Vec<Contact> = response.collection()?;
        debug!("Found {} contacts", contacts.len());
        Ok(contacts)
    }

    /// Create a contact and return it with the guid Dinero assigned.
    ///
    /// Requires `Name`, `IsPerson` and `CountryKey`.
    pub async fn create(&self, contact: &Contact) -> Result<Contact> {
        if contact.name.as_deref().is_none_or(str::is_empty) {
            return Err(missing("Name"));
        }
        if contact.is_person.is_none() {
            return Err(missing("IsPerson"));
        }
        if contact.country_key.as_deref().is_none_or(str::is_empty) {
            return Err(missing("CountryKey"));
        }

        let body = serde_json::to_string(contact)?;
        let response = self
            .dinero
            .send(&self.dinero.org_path("contacts"), Method::Post, &body)
            .await?;

        let guid: String = response.parse_field("ContactGuid")?;
        Ok(contact.clone().with_contact_guid(guid))
    }
}

fn missing(field: &str) -> Error {
    Error::MissingParameter(format!("Create Contact requires a '{}'", field))
}
