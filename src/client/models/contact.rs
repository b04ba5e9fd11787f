//! Contact models

use serde::{Deserialize, Serialize};

/// Fields requested when listing contacts
pub const CONTACT_FIELDS: &[&str] = &[
    "Name",
    "ContactGuid",
    "ExternalReference",
    "IsPerson",
    "Street",
    "Zipcode",
    "City",
    "CountryKey",
    "Phone",
    "Email",
    "Webpage",
    "AttPerson",
    "VatNumber",
    "EanNumber",
    "PaymentConditionType",
    "PaymentConditionNumberOfDays",
    "UpdatedAt",
];

/// Contact resource (customer or supplier)
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Contact {
    /// Assigned by Dinero; absent until the contact is created
    #[serde(skip_serializing_if = "Option::is_none")]
    pub contact_guid: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub external_reference: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_person: Option<bool>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub street: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub zipcode: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub city: Option<String>,

    /// ISO 3166 country code, e.g. `DK`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub country_key: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub webpage: Option<String>,

    /// Attention person
    #[serde(skip_serializing_if = "Option::is_none")]
    pub att_person: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub vat_number: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub ean_number: Option<String>,

    /// Netto, NettoCash, CurrentMonthOut, Paid
    #[serde(skip_serializing_if = "Option::is_none")]
    pub payment_condition_type: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub payment_condition_number_of_days: Option<u32>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<String>,
}

impl Contact {
    /// Create a contact with the fields Dinero requires for creation.
    pub fn new(name: impl Into<String>, country_key: impl Into<String>, is_person: bool) -> Self {
        Self {
            name: Some(name.into()),
            country_key: Some(country_key.into()),
            is_person: Some(is_person),
            ..Self::default()
        }
    }

    pub fn with_contact_guid(mut self, guid: impl Into<String>) -> Self {
        self.contact_guid = Some(guid.into());
        self
    }

    pub fn with_email(mut self, email: impl Into<String>) -> Self {
        self.email = Some(email.into());
        self
    }

    pub fn with_external_reference(mut self, reference: impl Into<String>) -> Self {
        self.external_reference = Some(reference.into());
        self
    }

    pub fn with_vat_number(mut self, vat_number: impl Into<String>) -> Self {
        self.vat_number = Some(vat_number.into());
        self
    }
}
