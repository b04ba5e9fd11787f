//! Contact command implementations

use dinero::{Contact, QueryFilter, Result};
use log::debug;
use tabled::Tabled;

use crate::cli::args::GlobalOptions;
use crate::cli::{CommandContext, ContactFilterArgs, OutputFormat};
use crate::output::{json, table};

/// Contact for table display
#[derive(Tabled)]
struct ContactDisplay {
    #[tabled(rename = "GUID")]
    guid: String,
    #[tabled(rename = "NAME")]
    name: String,
    #[tabled(rename = "TYPE")]
    kind: String,
    #[tabled(rename = "EMAIL")]
    email: String,
    #[tabled(rename = "COUNTRY")]
    country: String,
}

impl From<Contact> for ContactDisplay {
    fn from(contact: Contact) -> Self {
        let kind = match contact.is_person {
            Some(true) => "Person",
            Some(false) => "Company",
            None => "--",
        };

        Self {
            guid: contact.contact_guid.unwrap_or_else(|| "--".to_string()),
            name: contact.name.unwrap_or_default(),
            kind: kind.to_string(),
            email: contact.email.unwrap_or_else(|| "--".to_string()),
            country: contact.country_key.unwrap_or_else(|| "--".to_string()),
        }
    }
}

/// Build the server-side filter from CLI flags.
fn build_filter(filters: &ContactFilterArgs) -> QueryFilter {
    QueryFilter::new()
        .eq_opt("Name", filters.name.as_deref())
        .eq_opt("Email", filters.email.as_deref())
        .eq_opt("IsPerson", filters.person)
}

/// Run the contacts list command
pub async fn list(opts: &GlobalOptions, filters: &ContactFilterArgs) -> Result<()> {
    let ctx = CommandContext::new(opts)?;
    let filter = build_filter(filters);
    debug!("Listing contacts with filter '{}'", filter);

    let contacts = ctx.client.contacts().find(&filter).await?;

    match ctx.format {
        OutputFormat::Table => {
            let rows: Vec<ContactDisplay> =
                contacts.into_iter().map(ContactDisplay::from).collect();
            println!("{}", table::format_table(&rows, "contacts"));
        }
        OutputFormat::Json => {
            println!("{}", json::format_json(&contacts, Some(ctx.client.organization_id()))?);
        }
    }

    Ok(())
}
