//! Command execution context
//!
//! Resolves configuration (file, then flag/env overrides) and builds the API
//! client once for every command that talks to Dinero.

use dinero::error::{ConfigError, Error};
use dinero::{ClientConfig, Dinero, Result};

use crate::cli::OutputFormat;
use crate::cli::args::GlobalOptions;

/// Context for command execution containing the client and output format.
pub struct CommandContext {
    pub client: Dinero,
    pub format: OutputFormat,
}

impl CommandContext {
    /// Load config, apply overrides, and build the client.
    ///
    /// # Errors
    /// Returns a configuration error if a required field is missing after
    /// overrides are applied.
    pub fn new(opts: &GlobalOptions) -> Result<Self> {
        let config = resolve_config(opts)?;
        let client = Dinero::new(config)?;

        Ok(Self {
            client,
            format: opts.format,
        })
    }
}

/// An explicit `--config` must exist; the default file is optional when
/// credentials come from flags or the environment.
pub fn resolve_config(opts: &GlobalOptions) -> Result<ClientConfig> {
    let loaded = match ClientConfig::load_at(opts.config_ref()) {
        Ok(config) => config,
        Err(Error::Config(ConfigError::NotFound(_)))
            if opts.config.is_none() && opts.has_overrides() =>
        {
            ClientConfig::default()
        }
        Err(err) => return Err(err),
    };

    Ok(opts.apply(loaded))
}
