use std::path::PathBuf;

use anyhow::{anyhow, Context};
use serde::Deserialize;

const DEFAULT_ENV: &str = "local";
const ENV_VAR_NAME: &str = "BOOKBUD_ENV";
const CONFIG_DIR_ENV: &str = "BOOKBUD_CONFIG_DIR";

/// Deployment environment the application is running in.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    #[default]
    Local,
    Staging,
    Production,
}

/// Top-level configuration structure loaded from layered sources.
#[derive(Debug, Clone, Deserialize, Default)]
pub struct Settings {
    #[serde(default)]
    pub environment: Environment,
    #[serde(default)]
    pub catalog: CatalogSettings,
    #[serde(default)]
    pub auth: AuthSettings,
    #[serde(default)]
    pub telemetry: TelemetrySettings,
}

impl Settings {
    /// Load configuration by layering `.env`, base file, and environment overlay.
    pub fn load() -> anyhow::Result<Self> {
        // Allow missing `.env` files without failing.
        let _ = dotenvy::dotenv();

        let environment = std::env::var(ENV_VAR_NAME).unwrap_or_else(|_| DEFAULT_ENV.to_string());
        let config_dir = std::env::var(CONFIG_DIR_ENV)
            .map(PathBuf::from)
            .unwrap_or_else(|_| {
                // Default to repo root `config` directory.
                std::env::current_dir()
                    .map(|cwd| cwd.join("config"))
                    .expect("unable to resolve current directory")
            });

        let base_path = config_dir.join("base.toml");
        let environment_filename = format!("{}.toml", environment);
        let environment_path = config_dir.join(environment_filename);

        let builder = config::Config::builder()
            .add_source(config::File::from(base_path).required(false))
            .add_source(config::File::from(environment_path).required(false))
            .add_source(config::Environment::with_prefix("BOOKBUD").separator("_"));

        let cfg = builder
            .build()
            .with_context(|| "failed to build configuration")?;

        let mut settings: Settings = cfg
            .try_deserialize()
            .with_context(|| "failed to deserialize configuration")?;

        // Override environment field with parsed enum variant.
        settings.environment = match environment.as_str() {
            "local" => Environment::Local,
            "staging" => Environment::Staging,
            "production" => Environment::Production,
            other => {
                return Err(anyhow!(
                    "unsupported environment '{}'; expected local/staging/production",
                    other
                ));
            }
        };

        Ok(settings)
    }
}

/// Connection parameters for the remote book catalog, plus the browse
/// screen's defining query.
#[derive(Debug, Clone, Deserialize)]
pub struct CatalogSettings {
    #[serde(default = "CatalogSettings::default_base_url")]
    pub base_url: String,
    /// API key sent with every catalog request; may be empty for
    /// unauthenticated quota.
    #[serde(default)]
    pub api_key: String,
    #[serde(default = "CatalogSettings::default_request_timeout_ms")]
    pub request_timeout_ms: u64,
    #[serde(default = "CatalogSettings::default_browse_query")]
    pub browse_query: String,
    #[serde(default = "CatalogSettings::default_browse_page_size")]
    pub browse_page_size: u32,
}

impl CatalogSettings {
    fn default_base_url() -> String {
        "https://www.googleapis.com/books/v1".to_string()
    }

    fn default_request_timeout_ms() -> u64 {
        15000
    }

    fn default_browse_query() -> String {
        "fiction".to_string()
    }

    fn default_browse_page_size() -> u32 {
        20
    }
}

impl Default for CatalogSettings {
    fn default() -> Self {
        Self {
            base_url: Self::default_base_url(),
            api_key: String::new(),
            request_timeout_ms: Self::default_request_timeout_ms(),
            browse_query: Self::default_browse_query(),
            browse_page_size: Self::default_browse_page_size(),
        }
    }
}

/// Endpoints for the hosted identity service and profile document store.
#[derive(Debug, Clone, Deserialize)]
pub struct AuthSettings {
    #[serde(default = "AuthSettings::default_identity_url")]
    pub identity_url: String,
    #[serde(default = "AuthSettings::default_profile_url")]
    pub profile_url: String,
    #[serde(default)]
    pub api_key: String,
    #[serde(default = "AuthSettings::default_request_timeout_ms")]
    pub request_timeout_ms: u64,
}

impl AuthSettings {
    fn default_identity_url() -> String {
        "https://identitytoolkit.googleapis.com/v1".to_string()
    }

    fn default_profile_url() -> String {
        "http://127.0.0.1:8080/api/profiles".to_string()
    }

    fn default_request_timeout_ms() -> u64 {
        15000
    }
}

impl Default for AuthSettings {
    fn default() -> Self {
        Self {
            identity_url: Self::default_identity_url(),
            profile_url: Self::default_profile_url(),
            api_key: String::new(),
            request_timeout_ms: Self::default_request_timeout_ms(),
        }
    }
}

#[derive(Debug, Clone, Deserialize, Default)]
pub struct TelemetrySettings {
    #[serde(default)]
    pub log_format: LogFormat,
}

#[derive(Debug, Clone, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    #[default]
    Pretty,
    Json,
}
