use config::{Config, Environment};
use serde::Deserialize;

const DEFAULT_API_URL: &str = "https://api.firecrawl.dev/v1";

/// Runtime settings, read from FIRECRAWL_* environment variables.
#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    /// API key for the extraction service. Empty when unset; the service
    /// rejects unauthenticated requests with its own error message.
    #[serde(default)]
    pub api_key: String,

    /// Base URL of the extraction service.
    #[serde(default = "default_api_url")]
    pub api_url: String,
}

fn default_api_url() -> String {
    DEFAULT_API_URL.to_string()
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            api_key: String::new(),
            api_url: default_api_url(),
        }
    }
}

/// Load settings from the environment. Missing or unreadable values fall
/// back to defaults rather than aborting startup.
pub fn load() -> Settings {
    let cfg = Config::builder()
        .add_source(Environment::with_prefix("FIRECRAWL"))
        .build()
        .unwrap_or_default();
    cfg.try_deserialize().unwrap_or_default()
}
