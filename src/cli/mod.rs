//! CLI command definitions and handlers

use clap::{Args, Parser, Subcommand};

pub mod args;
pub mod contacts;
pub mod context;
pub mod invoices;
pub mod orgs;
pub mod status;

pub use args::OutputFormat;
pub use context::CommandContext;

/// dinero CLI - command-line companion for the Dinero accounting API
#[derive(Parser, Debug)]
#[command(name = "dinero")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,

    /// Output format (table, json)
    #[arg(
        long,
        global = true,
        env = "DINERO_FORMAT",
        default_value = "table",
        hide_env = true
    )]
    pub format: OutputFormat,

    /// Override config file location
    #[arg(long, global = true, env = "DINERO_CONFIG", hide_env = true)]
    pub config: Option<String>,

    /// Override the configured organization
    #[arg(long, global = true, env = "DINERO_ORGANIZATION_ID", hide_env = true)]
    pub org: Option<String>,

    /// OAuth client id
    #[arg(long, global = true, env = "DINERO_CLIENT_ID", hide_env = true)]
    pub client_id: Option<String>,

    /// OAuth client secret
    #[arg(
        long,
        global = true,
        env = "DINERO_CLIENT_SECRET",
        hide_env = true,
        hide_env_values = true
    )]
    pub client_secret: Option<String>,

    /// Organization API key
    #[arg(
        long,
        global = true,
        env = "DINERO_API_KEY",
        hide_env = true,
        hide_env_values = true
    )]
    pub api_key: Option<String>,

    /// Enable debug logging
    #[arg(long, global = true, env = "DINERO_DEBUG", hide_env = true)]
    pub debug: bool,
}

/// Available CLI commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Show configuration status
    Status,

    /// Display version information
    Version,

    /// Look up contacts
    #[command(subcommand)]
    Contacts(ContactCommands),

    /// Look up invoices
    #[command(subcommand)]
    Invoices(InvoiceCommands),

    /// List organizations available to the API key
    #[command(subcommand)]
    Orgs(OrgCommands),
}

/// Contact subcommands
#[derive(Subcommand, Debug)]
pub enum ContactCommands {
    /// List contacts in the current organization
    List {
        #[command(flatten)]
        filters: ContactFilterArgs,
    },
}

/// Invoice subcommands
#[derive(Subcommand, Debug)]
pub enum InvoiceCommands {
    /// List invoices in the current organization
    List {
        #[command(flatten)]
        filters: InvoiceFilterArgs,
    },

    /// Show a single invoice
    Get {
        /// Invoice guid
        guid: String,
    },
}

/// Organization subcommands
#[derive(Subcommand, Debug)]
pub enum OrgCommands {
    /// List all accessible organizations
    List {
        /// Filter by exact organization name
        #[arg(long)]
        name: Option<String>,
    },
}

/// Contact list filters, sent to Dinero as a query filter
#[derive(Debug, Clone, Args, Default)]
pub struct ContactFilterArgs {
    /// Exact contact name
    #[arg(long)]
    pub name: Option<String>,

    /// Exact email address
    #[arg(long)]
    pub email: Option<String>,

    /// Only persons (true) or only companies (false)
    #[arg(long)]
    pub person: Option<bool>,
}

/// Invoice list filters and paging
#[derive(Debug, Clone, Args, Default)]
pub struct InvoiceFilterArgs {
    /// Invoice status (Draft, Booked, Paid, OverPaid, Overdue)
    #[arg(long)]
    pub status: Option<String>,

    /// Start date, YYYY-MM-DD
    #[arg(long)]
    pub from: Option<String>,

    /// End date, YYYY-MM-DD
    #[arg(long)]
    pub to: Option<String>,

    /// Page index (0-based)
    #[arg(long)]
    pub page: Option<u32>,

    /// Page size
    #[arg(long)]
    pub page_size: Option<u32>,
}
