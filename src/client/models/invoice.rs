//! Invoice models

use serde::{Deserialize, Serialize};

/// Fields requested when listing invoices
pub const INVOICE_FIELDS: &[&str] = &[
    "Number",
    "Guid",
    "ContactName",
    "Date",
    "PaymentDate",
    "Description",
    "Currency",
    "Status",
    "MailOutStatus",
    "TotalExclVatInDkk",
    "TotalInclVatInDkk",
    "TotalExclVat",
    "TotalInclVat",
    "CreatedAt",
    "UpdatedAt",
    "DeletedAt",
];

/// Full invoice, as created and as returned by a guid lookup
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Invoice {
    /// Assigned by Dinero; absent until the invoice is created
    #[serde(skip_serializing_if = "Option::is_none")]
    pub guid: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub contact_guid: Option<String>,

    /// Invoice date, `YYYY-MM-DD`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub currency: Option<String>,

    /// `da-DK` or `en-GB`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub external_reference: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub comment: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub payment_condition_number_of_days: Option<u32>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub payment_condition_type: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub show_lines_incl_vat: Option<bool>,

    #[serde(default)]
    pub product_lines: Vec<InvoiceLine>,
}

impl Invoice {
    pub fn new(contact_guid: impl Into<String>) -> Self {
        Self {
            contact_guid: Some(contact_guid.into()),
            ..Self::default()
        }
    }

    pub fn with_guid(mut self, guid: impl Into<String>) -> Self {
        self.guid = Some(guid.into());
        self
    }

    pub fn with_line(mut self, line: InvoiceLine) -> Self {
        self.product_lines.push(line);
        self
    }
}

/// One product line on an invoice
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct InvoiceLine {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub product_guid: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub comments: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub quantity: Option<f64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub account_number: Option<u32>,

    /// hours, parts, km, day, week, month, kilogram, ...
    #[serde(skip_serializing_if = "Option::is_none")]
    pub unit: Option<String>,

    /// Discount in percent
    #[serde(skip_serializing_if = "Option::is_none")]
    pub discount: Option<f64>,

    /// `Product` or `Text`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub line_type: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub base_amount_value: Option<f64>,
}

impl InvoiceLine {
    /// Line with every field invoice creation requires.
    pub fn new(
        description: impl Into<String>,
        quantity: f64,
        unit: impl Into<String>,
        base_amount_value: f64,
        account_number: u32,
    ) -> Self {
        Self {
            description: Some(description.into()),
            quantity: Some(quantity),
            unit: Some(unit.into()),
            base_amount_value: Some(base_amount_value),
            account_number: Some(account_number),
            ..Self::default()
        }
    }

    /// Name of the first required field that is unset, if any.
    pub fn missing_field(&self) -> Option<&'static str> {
        let blank = |s: &Option<String>| s.as_deref().is_none_or(|v| v.trim().is_empty());

        if blank(&self.unit) {
            Some("Unit")
        } else if self.quantity.is_none() {
            Some("Quantity")
        } else if blank(&self.description) {
            Some("Description")
        } else if self.base_amount_value.is_none() {
            Some("BaseAmountValue")
        } else if self.account_number.is_none() {
            Some("AccountNumber")
        } else {
            None
        }
    }
}

/// Compressed invoice row returned by invoice listings
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct InvoiceSummary {
    pub guid: String,

    #[serde(default)]
    pub number: Option<u64>,

    #[serde(default)]
    pub contact_name: Option<String>,

    #[serde(default)]
    pub date: Option<String>,

    #[serde(default)]
    pub payment_date: Option<String>,

    #[serde(default)]
    pub description: Option<String>,

    #[serde(default)]
    pub currency: Option<String>,

    /// Draft, Booked, Paid, OverPaid, Overdue
    #[serde(default)]
    pub status: Option<String>,

    #[serde(default)]
    pub mail_out_status: Option<String>,

    #[serde(default)]
    pub total_excl_vat_in_dkk: Option<f64>,

    #[serde(default)]
    pub total_incl_vat_in_dkk: Option<f64>,

    #[serde(default)]
    pub total_excl_vat: Option<f64>,

    #[serde(default)]
    pub total_incl_vat: Option<f64>,

    #[serde(default)]
    pub created_at: Option<String>,

    #[serde(default)]
    pub updated_at: Option<String>,

    #[serde(default)]
    pub deleted_at: Option<String>,
}
