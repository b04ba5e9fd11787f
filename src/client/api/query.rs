//! Query string helpers for listing endpoints
//!
//! Dinero listings take a `queryFilter` of `Field eq 'value'` predicates
//! joined by `;`, a `fields` projection, and endpoint-specific options.

use std::fmt;

use crate::error::{Error, Result};

/// Server-side filter made of equality predicates
///
/// # Example
/// ```ignore
/// let filter = QueryFilter::new().eq("Name", "Acme").eq("IsPerson", false);
/// assert_eq!(filter.to_string(), "Name eq 'Acme';IsPerson eq 'false'");
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct QueryFilter {
    predicates: Vec<(String, String)>,
}

impl QueryFilter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a `field eq 'value'` predicate.
    pub fn eq(mut self, field: impl Into<String>, value: impl fmt::Display) -> Self {
        self.predicates.push((field.into(), value.to_string()));
        self
    }

    /// Add a predicate only when a value is present.
    pub fn eq_opt<V: fmt::Display>(self, field: impl Into<String>, value: Option<V>) -> Self {
        match value {
            Some(v) => self.eq(field, v),
            None => self,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.predicates.is_empty()
    }
}

impl fmt::Display for QueryFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, (field, value)) in self.predicates.iter().enumerate() {
            if i > 0 {
                f.write_str(";")?;
            }
            write!(f, "{} eq '{}'", field, value)?;
        }
        Ok(())
    }
}

/// Listing options for invoices
#[derive(Debug, Clone, Default)]
pub struct InvoiceQuery {
    /// `YYYY-MM-DD`, inclusive
    pub start_date: Option<String>,
    /// `YYYY-MM-DD`, inclusive
    pub end_date: Option<String>,
    /// Only invoices changed since this UTC timestamp
    pub changes_since: Option<String>,
    /// Zero-based page index
    pub page: Option<u32>,
    pub page_size: Option<u32>,
    /// Comma separated field list; prefix `-` for descending
    pub sort: Option<String>,
}

impl InvoiceQuery {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn date_range(mut self, start: impl Into<String>, end: impl Into<String>) -> Self {
        self.start_date = Some(start.into());
        self.end_date = Some(end.into());
        self
    }

    pub fn changes_since(mut self, timestamp: impl Into<String>) -> Self {
        self.changes_since = Some(timestamp.into());
        self
    }

    pub fn page(mut self, page: u32) -> Self {
        self.page = Some(page);
        self
    }

    pub fn page_size(mut self, size: u32) -> Self {
        self.page_size = Some(size);
        self
    }

    pub fn sort(mut self, sort: impl Into<String>) -> Self {
        self.sort = Some(sort.into());
        self
    }

    /// Convert to query string parameters, in Dinero's parameter names.
    pub fn to_query_params(&self) -> Vec<(&'static str, String)> {
        let mut params = Vec::new();

        if let Some(ref start) = self.start_date {
            params.push(("startDate", start.clone()));
        }
        if let Some(ref end) = self.end_date {
            params.push(("endDate", end.clone()));
        }
        if let Some(ref since) = self.changes_since {
            params.push(("changesSince", since.clone()));
        }
        if let Some(page) = self.page {
            params.push(("page", page.to_string()));
        }
        if let Some(size) = self.page_size {
            params.push(("pageSize", size.to_string()));
        }
        if let Some(ref sort) = self.sort {
            params.push(("sort", sort.clone()));
        }

        params
    }
}

/// `path?options&queryFilter=..&fields=..`, form-encoded.
pub(crate) fn listing_endpoint(
    path: &str,
    options: &[(&str, String)],
    filter: &QueryFilter,
    fields: &[&str],
) -> String {
    let mut query = url::form_urlencoded::Serializer::new(String::new());
    for (key, value) in options {
        query.append_pair(key, value);
    }
    if !filter.is_empty() {
        query.append_pair("queryFilter", &filter.to_string());
    }
    query.append_pair("fields", &fields.join(","));

    format!("{}?{}", path, query.finish())
}

/// Encode a caller-supplied id as exactly one path segment.
pub(crate) fn path_segment(value: &str) -> Result<String> {
    if matches!(value.trim(), "" | "." | "..") {
        return Err(Error::MissingParameter(format!(
            "'{}' is not a valid guid",
            value
        )));
    }
    Ok(url::form_urlencoded::byte_serialize(value.as_bytes()).collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_filter_rendering() {
        let filter = QueryFilter::new()
            .eq("Name", "Acme")
            .eq("IsPerson", false)
            .eq_opt("Email", None::<&str>)
            .eq_opt("VatNumber", Some("DK1"));

        assert_eq!(
            filter.to_string(),
            "Name eq 'Acme';IsPerson eq 'false';VatNumber eq 'DK1'"
        );
        assert!(QueryFilter::new().is_empty());
    }

    #[test]
    fn test_invoice_query_params() {
        let params = InvoiceQuery::new()
            .date_range("2024-01-01", "2024-12-31")
            .page(2)
            .page_size(100)
            .to_query_params();

        assert_eq!(
            params,
            vec![
                ("startDate", "2024-01-01".to_string()),
                ("endDate", "2024-12-31".to_string()),
                ("page", "2".to_string()),
                ("pageSize", "100".to_string()),
            ]
        );
        assert!(InvoiceQuery::new().to_query_params().is_empty());
    }

    #[test]
    fn test_listing_endpoint_encoding() {
        let endpoint = listing_endpoint(
            "/42/contacts",
            &[],
            &QueryFilter::new().eq("Name", "Ann & Bo"),
            &["Name", "ContactGuid"],
        );

        assert_eq!(
            endpoint,
            "/42/contacts?queryFilter=Name+eq+%27Ann+%26+Bo%27&fields=Name%2CContactGuid"
        );
    }

    #[test]
    fn test_listing_endpoint_without_filter() {
        let endpoint = listing_endpoint(
            "/organizations",
            &[("page", "0".to_string())],
            &QueryFilter::new(),
            &["Id"],
        );
        assert_eq!(endpoint, "/organizations?page=0&fields=Id");
    }

    #[test]
    fn test_path_segment_escapes_separators() {
        assert_eq!(path_segment("b1d4-77").unwrap(), "b1d4-77");
        assert_eq!(
            path_segment("../../organizations?x=").unwrap(),
            "..%2F..%2Forganizations%3Fx%3D"
        );
        assert_eq!(path_segment("a#b").unwrap(), "a%23b");
        assert!(matches!(path_segment(".."), Err(Error::MissingParameter(_))));
        assert!(matches!(path_segment(" "), Err(Error::MissingParameter(_))));
    }
}
