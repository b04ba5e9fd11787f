//! Organization models

use serde::{Deserialize, Serialize};

/// Fields requested when listing organizations
pub const ORGANIZATION_FIELDS: &[&str] = &["Name", "Id", "IsPro", "IsPayingPro"];

/// Organization resource
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Organization {
    /// Organization ID
    pub id: u64,

    /// Organization name
    #[serde(default)]
    pub name: String,

    /// Whether the organization has Dinero Pro access
    #[serde(default)]
    pub is_pro: bool,

    /// Whether the organization pays for Dinero Pro
    #[serde(default)]
    pub is_paying_pro: bool,
}
