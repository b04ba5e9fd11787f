//! Organizations resource

use super::query::{QueryFilter, listing_endpoint};
use crate::client::Dinero;
use crate::client::models::{ORGANIZATION_FIELDS, Organization};
use crate::client::transport::Method;
use crate::error::Result;

/// Organizations the API key has access to
pub struct Organizations<'a> {
    dinero: &'a Dinero,
}

impl<'a> Organizations<'a> {
    pub(crate) fn new(dinero: &'a Dinero) -> Self {
        Self { dinero }
    }

    /// List organizations matching `filter`.
    ///
    /// Not scoped to the configured organization; the answer is a bare list.
    pub async fn find(&self, filter: &QueryFilter) -> Result<Vec<Organization>> {
        let endpoint = listing_endpoint("/organizations", &[], filter, ORGANIZATION_FIELDS);
        self.dinero
            .send(&endpoint, Method::Get, "")
            .await?
            .parse()
    }
}
