//! Global CLI options shared across all commands

use dinero::ClientConfig;

use crate::cli::{Cli, OutputFormat};

/// Global CLI options passed to all command handlers.
///
/// # Precedence
///
/// CLI flag > environment variable > config file > default. This struct
/// captures the CLI/env layer; [`GlobalOptions::apply`] layers it over a
/// loaded config.
#[derive(Debug, Clone, Default)]
pub struct GlobalOptions {
    /// Output format (table, json)
    pub format: OutputFormat,

    /// Custom config file path (defaults to ~/.dinero/config.yaml)
    pub config: Option<String>,

    /// Organization override
    pub org: Option<String>,

    pub client_id: Option<String>,
    pub client_secret: Option<String>,
    pub api_key: Option<String>,
}

impl GlobalOptions {
    /// Create GlobalOptions from a parsed CLI struct.
    pub fn from_cli(cli: &Cli) -> Self {
        Self {
            format: cli.format,
            config: cli.config.clone(),
            org: cli.org.clone(),
            client_id: cli.client_id.clone(),
            client_secret: cli.client_secret.clone(),
            api_key: cli.api_key.clone(),
        }
    }

    /// Get config path as `Option<&str>`.
    pub fn config_ref(&self) -> Option<&str> {
        self.config.as_deref()
    }

    /// Whether any credential was supplied by flag or environment.
    pub fn has_overrides(&self) -> bool {
        self.org.is_some()
            || self.client_id.is_some()
            || self.client_secret.is_some()
            || self.api_key.is_some()
    }

    /// Overlay flag/env values on a loaded config.
    pub fn apply(&self, mut config: ClientConfig) -> ClientConfig {
        if let Some(ref v) = self.client_id {
            config.client_id = v.clone();
        }
        if let Some(ref v) = self.client_secret {
            config.client_secret = v.clone();
        }
        if let Some(ref v) = self.api_key {
            config.api_key = v.clone();
        }
        if let Some(ref v) = self.org {
            config.organization_id = v.clone();
        }
        config
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_apply_overrides_only_given_fields() {
        let opts = GlobalOptions {
            org: Some("99".to_string()),
            api_key: Some("env-key".to_string()),
            ..GlobalOptions::default()
        };
        let config = opts.apply(ClientConfig::new("a", "b", "file-key", "42"));

        assert_eq!(config.client_id, "a");
        assert_eq!(config.client_secret, "b");
        assert_eq!(config.api_key, "env-key");
        assert_eq!(config.organization_id, "99");
        assert!(opts.has_overrides());
    }

    #[test]
    fn test_no_overrides() {
        let opts = GlobalOptions::default();
        assert!(!opts.has_overrides());
        assert_eq!(opts.config_ref(), None);
        assert_eq!(opts.format, OutputFormat::Table);
    }
}
