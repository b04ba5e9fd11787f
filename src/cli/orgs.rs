//! Organization command implementations

use dinero::{Organization, QueryFilter, Result};
use tabled::Tabled;

use crate::cli::args::GlobalOptions;
use crate::cli::{CommandContext, OutputFormat};
use crate::output::{json, table};

/// Organization for table display
#[derive(Tabled)]
struct OrgDisplay {
    #[tabled(rename = "ORG ID")]
    id: u64,
    #[tabled(rename = "NAME")]
    name: String,
    #[tabled(rename = "PRO")]
    pro: String,
}

impl From<Organization> for OrgDisplay {
    fn from(org: Organization) -> Self {
        let pro = match (org.is_pro, org.is_paying_pro) {
            (true, true) => "paying",
            (true, false) => "yes",
            _ => "no",
        };

        Self {
            id: org.id,
            name: org.name,
            pro: pro.to_string(),
        }
    }
}

/// Run the orgs list command
pub async fn list(opts: &GlobalOptions, name: Option<&str>) -> Result<()> {
    let ctx = CommandContext::new(opts)?;
    let filter = QueryFilter::new().eq_opt("Name", name);

    let orgs = ctx.client.organizations().find(&filter).await?;

    match ctx.format {
        OutputFormat::Table => {
            let rows: Vec<OrgDisplay> = orgs.into_iter().map(OrgDisplay::from).collect();
            println!("{}", table::format_table(&rows, "organizations"));
        }
        OutputFormat::Json => {
            println!("{}", json::format_json(&orgs, None)?);
        }
    }

    Ok(())
}
