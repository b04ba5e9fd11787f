//! dinero CLI - command-line companion for the Dinero accounting API

use clap::Parser;

mod cli;
mod output;

use cli::args::GlobalOptions;
use cli::{Cli, Commands, ContactCommands, InvoiceCommands, OrgCommands};
use dinero::Result;

#[tokio::main]
async fn main() {
    if let Err(err) = run().await {
        eprintln!("Error: {}", err);
        std::process::exit(1);
    }
}

async fn run() -> Result<()> {
    let cli = Cli::parse();

    let level = if cli.debug { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level)).init();

    let opts = GlobalOptions::from_cli(&cli);

    match cli.command {
        Commands::Status => cli::status::run(&opts),
        Commands::Version => {
            println!("dinero version {}", env!("CARGO_PKG_VERSION"));
            Ok(())
        }
        Commands::Contacts(cmd) => match cmd {
            ContactCommands::List { filters } => cli::contacts::list(&opts, &filters).await,
        },
        Commands::Invoices(cmd) => match cmd {
            InvoiceCommands::List { filters } => cli::invoices::list(&opts, &filters).await,
            InvoiceCommands::Get { guid } => cli::invoices::get(&opts, &guid).await,
        },
        Commands::Orgs(cmd) => match cmd {
            OrgCommands::List { name } => cli::orgs::list(&opts, name.as_deref()).await,
        },
    }
}
