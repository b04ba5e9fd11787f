//! JSON output formatting

use chrono::Utc;
use serde::Serialize;

/// Envelope around every JSON result
#[derive(Debug, Serialize)]
pub struct JsonOutput<'a, T: ?Sized> {
    pub data: &'a T,
    pub meta: Metadata,
}

#[derive(Debug, Serialize)]
pub struct Metadata {
    /// RFC 3339 time the result was rendered
    pub timestamp: String,

    /// CLI version
    pub version: String,

    /// Organization the data belongs to; absent for cross-organization lists
    #[serde(skip_serializing_if = "Option::is_none")]
    pub organization_id: Option<String>,
}

impl<'a, T: ?Sized> JsonOutput<'a, T> {
    pub fn new(data: &'a T, organization_id: Option<&str>) -> Self {
        Self {
            data,
            meta: Metadata {
                timestamp: Utc::now().to_rfc3339(),
                version: env!("CARGO_PKG_VERSION").to_string(),
                organization_id: organization_id.map(str::to_string),
            },
        }
    }
}

/// Pretty-print `data` inside the envelope.
pub fn format_json<T: Serialize + ?Sized>(
    data: &T,
    organization_id: Option<&str>,
) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(&JsonOutput::new(data, organization_id))
}
