//! Invoice command implementations

use colored::Colorize;
use dinero::{Invoice, InvoiceLine, InvoiceQuery, InvoiceSummary, QueryFilter, Result};
use tabled::Tabled;

use crate::cli::args::GlobalOptions;
use crate::cli::{CommandContext, InvoiceFilterArgs, OutputFormat};
use crate::output::{json, table};

/// Invoice listing row for table display
#[derive(Tabled)]
struct InvoiceDisplay {
    #[tabled(rename = "GUID")]
    guid: String,
    #[tabled(rename = "NUMBER")]
    number: String,
    #[tabled(rename = "CONTACT")]
    contact: String,
    #[tabled(rename = "DATE")]
    date: String,
    #[tabled(rename = "STATUS")]
    status: String,
    #[tabled(rename = "TOTAL")]
    total: String,
}

impl From<InvoiceSummary> for InvoiceDisplay {
    fn from(invoice: InvoiceSummary) -> Self {
        let total = match (invoice.total_incl_vat, invoice.currency.as_deref()) {
            (Some(total), Some(currency)) => format!("{:.2} {}", total, currency),
            (Some(total), None) => format!("{:.2}", total),
            _ => "--".to_string(),
        };

        Self {
            guid: invoice.guid,
            number: invoice
                .number
                .map(|n| n.to_string())
                .unwrap_or_else(|| "--".to_string()),
            contact: invoice.contact_name.unwrap_or_else(|| "--".to_string()),
            date: invoice.date.unwrap_or_else(|| "--".to_string()),
            status: invoice.status.unwrap_or_else(|| "--".to_string()),
            total,
        }
    }
}

/// Product line for table display
#[derive(Tabled)]
struct LineDisplay {
    #[tabled(rename = "DESCRIPTION")]
    description: String,
    #[tabled(rename = "QTY")]
    quantity: String,
    #[tabled(rename = "UNIT")]
    unit: String,
    #[tabled(rename = "AMOUNT")]
    amount: String,
    #[tabled(rename = "ACCOUNT")]
    account: String,
}

impl From<InvoiceLine> for LineDisplay {
    fn from(line: InvoiceLine) -> Self {
        let or_dash = |v: Option<String>| v.unwrap_or_else(|| "--".to_string());

        Self {
            description: or_dash(line.description),
            quantity: or_dash(line.quantity.map(|q| q.to_string())),
            unit: or_dash(line.unit),
            amount: or_dash(line.base_amount_value.map(|a| format!("{:.2}", a))),
            account: or_dash(line.account_number.map(|a| a.to_string())),
        }
    }
}

fn build_filter(filters: &InvoiceFilterArgs) -> QueryFilter {
    QueryFilter::new().eq_opt("Status", filters.status.as_deref())
}

fn build_query(filters: &InvoiceFilterArgs) -> InvoiceQuery {
    InvoiceQuery {
        start_date: filters.from.clone(),
        end_date: filters.to.clone(),
        page: filters.page,
        page_size: filters.page_size,
        ..InvoiceQuery::default()
    }
}

/// Run the invoices list command
pub async fn list(opts: &GlobalOptions, filters: &InvoiceFilterArgs) -> Result<()> {
    let ctx = CommandContext::new(opts)?;

    let invoices = ctx
        .client
        .invoices()
        .find(&build_filter(filters), &build_query(filters))
        .await?;

    match ctx.format {
        OutputFormat::Table => {
            let rows: Vec<InvoiceDisplay> =
                invoices.into_iter().map(InvoiceDisplay::from).collect();
            println!("{}", table::format_table(&rows, "invoices"));
        }
        OutputFormat::Json => {
            println!("{}", json::format_json(&invoices, Some(ctx.client.organization_id()))?);
        }
    }

    Ok(())
}

/// Run the invoices get command
pub async fn get(opts: &GlobalOptions, guid: &str) -> Result<()> {
    let ctx = CommandContext::new(opts)?;
    let invoice = ctx.client.invoices().find_by_guid(guid).await?;

    match ctx.format {
        OutputFormat::Table => print_invoice(invoice),
        OutputFormat::Json => println!(
            "{}",
            json::format_json(&invoice, Some(ctx.client.organization_id()))?
        ),
    }

    Ok(())
}

fn print_invoice(invoice: Invoice) {
    let field = |v: &Option<String>| v.clone().unwrap_or_else(|| "--".to_string());

    println!("{} {}", "Invoice".bold(), field(&invoice.guid).cyan());
    println!(
        "{}\n",
        table::format_details(&[
            ("Contact", field(&invoice.contact_guid)),
            ("Date", field(&invoice.date)),
            ("Currency", field(&invoice.currency)),
            ("Description", field(&invoice.description)),
        ])
    );

    let lines: Vec<LineDisplay> = invoice
        .product_lines
        .into_iter()
        .map(LineDisplay::from)
        .collect();
    println!("{}", table::format_table(&lines, "product lines"));
}
