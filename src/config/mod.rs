//! Configuration management for the Dinero client

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};
use std::path::PathBuf;

use crate::error::{ConfigError, Result};

/// Scope requested when none is configured
pub const DEFAULT_SCOPE: &str = "read write";

/// Client configuration
///
/// The four credential fields are required and must be non-empty; see
/// [`ClientConfig::validate`].
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClientConfig {
    /// OAuth client identifier
    #[serde(default)]
    pub client_id: String,

    /// OAuth client secret
    #[serde(default)]
    pub client_secret: String,

    /// Organization API key, sent as both username and password
    #[serde(default)]
    pub api_key: String,

    /// Organization every resource path is scoped to
    #[serde(default, deserialize_with = "string_or_number")]
    pub organization_id: String,

    /// Requested OAuth scope
    #[serde(default = "default_scope")]
    pub scope: String,

    /// Defaults merged into every invoice email request
    #[serde(default, skip_serializing_if = "Map::is_empty")]
    pub email_settings: Map<String, Value>,
}

fn default_scope() -> String {
    DEFAULT_SCOPE.to_string()
}

/// Organization ids are numeric in Dinero, so accept `42` as well as `"42"`.
fn string_or_number<'de, D>(deserializer: D) -> std::result::Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum StringOrNumber {
        String(String),
        Number(i64),
    }

    Ok(match StringOrNumber::deserialize(deserializer)? {
        StringOrNumber::String(s) => s,
        StringOrNumber::Number(n) => n.to_string(),
    })
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            client_id: String::new(),
            client_secret: String::new(),
            api_key: String::new(),
            organization_id: String::new(),
            scope: default_scope(),
            email_settings: Map::new(),
        }
    }
}

impl ClientConfig {
    /// Create a configuration from the four required credentials.
    pub fn new(
        client_id: impl Into<String>,
        client_secret: impl Into<String>,
        api_key: impl Into<String>,
        organization_id: impl Into<String>,
    ) -> Self {
        Self {
            client_id: client_id.into(),
            client_secret: client_secret.into(),
            api_key: api_key.into(),
            organization_id: organization_id.into(),
            ..Self::default()
        }
    }

    /// Override the requested scope.
    pub fn with_scope(mut self, scope: impl Into<String>) -> Self {
        self.scope = scope.into();
        self
    }

    /// Set default invoice email settings.
    pub fn with_email_settings(mut self, settings: Map<String, Value>) -> Self {
        self.email_settings = settings;
        self
    }

    /// Validate that every required field is present and non-empty.
    pub fn validate(&self) -> std::result::Result<(), ConfigError> {
        let required = [
            ("client_id", &self.client_id),
            ("client_secret", &self.client_secret),
            ("api_key", &self.api_key),
            ("organization_id", &self.organization_id),
        ];

        for (name, value) in required {
            if value.trim().is_empty() {
                return Err(ConfigError::Missing(name));
            }
        }

        Ok(())
    }

    /// Get the default config file path
    pub fn default_path() -> Result<PathBuf> {
        let home = dirs::home_dir().ok_or(ConfigError::Invalid(
            "Could not determine home directory".to_string(),
        ))?;

        Ok(home.join(".dinero").join("config.yaml"))
    }

    /// Resolve an optional override to a concrete config path.
    pub fn resolve_path(path: Option<&str>) -> Result<PathBuf> {
        match path {
            Some(p) => Ok(PathBuf::from(p)),
            None => Self::default_path(),
        }
    }

    /// Load configuration from an optional path, falling back to the default.
    pub fn load_at(path: Option<&str>) -> Result<Self> {
        Self::load_from(Self::resolve_path(path)?)
    }

    /// Load configuration from a specific path
    pub fn load_from(path: PathBuf) -> Result<Self> {
        if !path.exists() {
            return Err(ConfigError::NotFound(path.display().to_string()).into());
        }

        let contents = std::fs::read_to_string(&path)?;
        let config: ClientConfig = serde_yaml::from_str(&contents).map_err(ConfigError::from)?;

        Ok(config)
    }
}
