//! Secrets configuration module.
//!
//! Supports loading secrets from a config file (TOML, JSON, or YAML). The
//! file path comes from the `SLATE_SECRETS` environment variable, falling
//! back to `.slate/secrets.toml` in the working directory.
//!
//! A missing file is not an error: hosts without secrets run with features
//! like the login redirect disabled. The loaded handle is passed explicitly
//! to callers; there is no process-wide singleton.

use std::collections::HashMap;
use std::path::Path;

use serde::{Deserialize, Serialize};

/// Default secrets file location relative to the app working directory.
pub const DEFAULT_SECRETS_PATH: &str = ".slate/secrets.toml";

/// Environment variable overriding the secrets file location.
pub const SECRETS_PATH_ENV: &str = "SLATE_SECRETS";

/// Secrets available to the running app.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Secrets {
    /// OAuth client settings used for the login redirect
    pub auth: Option<AuthSecrets>,
    /// Any other top-level secrets, kept as raw values
    #[serde(flatten)]
    pub extra: HashMap<String, serde_json::Value>,
}

/// OAuth client settings (`[auth]` section).
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AuthSecrets {
    /// Redirect URI registered with the OAuth provider
    pub redirect_uri: Option<String>,
    /// OAuth client id
    pub client_id: Option<String>,
}

impl Secrets {
    /// Load secrets from the configured location.
    /// Returns `Ok(None)` when no secrets file exists.
    pub fn load() -> anyhow::Result<Option<Self>> {
        let path = std::env::var(SECRETS_PATH_ENV).unwrap_or_else(|_| DEFAULT_SECRETS_PATH.to_string());
        if !Path::new(&path).exists() {
            tracing::debug!("No secrets file at {}, running without secrets", path);
            return Ok(None);
        }
        let secrets = Self::from_file(&path)?;
        tracing::info!("Loaded secrets from: {}", path);
        Ok(Some(secrets))
    }

    /// Load secrets from a file (supports TOML, JSON, YAML).
    pub fn from_file<P: AsRef<Path>>(path: P) -> anyhow::Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)?;

        let extension = path.extension().and_then(|e| e.to_str()).unwrap_or("");
        let secrets: Secrets = match extension {
            "toml" => toml::from_str(&content)?,
            "json" => serde_json::from_str(&content)?,
            "yaml" | "yml" => serde_yaml::from_str(&content)?,
            _ => {
                // Try to detect format
                if content.trim().starts_with('{') {
                    serde_json::from_str(&content)?
                } else if content.contains("---") || content.contains(": ") {
                    serde_yaml::from_str(&content)?
                } else {
                    toml::from_str(&content)?
                }
            }
        };

        Ok(secrets)
    }

    /// The `[auth]` section, if configured.
    pub fn auth(&self) -> Option<&AuthSecrets> {
        self.auth.as_ref()
    }

    /// Look up a non-section secret by key.
    pub fn get(&self, key: &str) -> Option<&serde_json::Value> {
        self.extra.get(key)
    }
}
