//! Status command implementation

use colored::Colorize;
use dinero::{ClientConfig, Result};

use crate::cli::args::GlobalOptions;
use crate::cli::context::resolve_config;

/// Run the status command to display configuration status
pub fn run(opts: &GlobalOptions) -> Result<()> {
    println!("{}\n", "Dinero Configuration Status".bold());

    let config_path = ClientConfig::resolve_path(opts.config_ref())?;
    if config_path.exists() {
        println!("Config file: {}", config_path.display().to_string().cyan());
    } else {
        println!(
            "Config file: {} {}",
            config_path.display().to_string().cyan(),
            "(not found)".dimmed()
        );
    }

    let config = match resolve_config(opts) {
        Ok(config) => config,
        Err(err) => {
            println!("{} {}", "✗".red(), err);
            println!("  → Create {} or pass credentials as flags", config_path.display());
            return Ok(());
        }
    };

    println!();

    let secrets = [
        ("Client id", &config.client_id),
        ("Client secret", &config.client_secret),
        ("API key", &config.api_key),
    ];
    for (label, value) in secrets {
        if value.trim().is_empty() {
            println!("{} {} not configured", "✗".red(), label);
        } else {
            println!("{} {} configured", "✓".green(), label);
        }
    }

    if config.organization_id.trim().is_empty() {
        println!("{} No organization set", "✗".red());
    } else {
        println!("{} Organization: {}", "✓".green(), config.organization_id);
    }

    println!("{} Scope: {}", "○".dimmed(), config.scope);

    if !config.email_settings.is_empty() {
        let keys: Vec<&str> = config.email_settings.keys().map(String::as_str).collect();
        println!("{} Email defaults: {}", "○".dimmed(), keys.join(", "));
    }

    if let Err(err) = config.validate() {
        println!("\n{}", err.to_string().yellow());
    }

    Ok(())
}
