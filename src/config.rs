//! Command-line and environment configuration.
//!
//! Every flag can also come from the environment, and a `.env` file in the working
//! directory is read first.

use crate::api::{DEFAULT_REFRESH_PATH, DEFAULT_TIMEOUT};
use crate::model::Role;
use clap::Parser;
use std::time::Duration;

pub const DEFAULT_API_URL: &str = "https://planchon.pythonanywhere.com/api/";

#[derive(Debug, Clone, Parser)]
#[command(name = "krazz", version, about = "Krazz Ice storefront client")]
pub struct ClientConfig {
    /// Base URL of the REST API.
    #[arg(long, env = "KRAZZ_API_URL", default_value = DEFAULT_API_URL)]
    pub api_url: String,

    /// Base URL for relative product image paths. Defaults to the API host.
    #[arg(long, env = "KRAZZ_MEDIA_URL")]
    pub media_url: Option<String>,

    #[arg(long, env = "KRAZZ_TIMEOUT_SECS", default_value_t = DEFAULT_TIMEOUT.as_secs())]
    pub timeout_secs: u64,

    /// Access token.
    #[arg(long, env = "KRAZZ_TOKEN", hide_env_values = true)]
    pub token: Option<String>,

    #[arg(long, env = "KRAZZ_REFRESH_TOKEN", hide_env_values = true)]
    pub refresh_token: Option<String>,

    #[arg(long, env = "KRAZZ_REFRESH_PATH", default_value = DEFAULT_REFRESH_PATH)]
    pub refresh_path: String,

    #[arg(long, env = "KRAZZ_ROLE", value_enum, default_value_t = Role::Customer)]
    pub role: Role,

    /// Poll interval in seconds. Defaults per role.
    #[arg(long, env = "KRAZZ_POLL_SECS")]
    pub poll_secs: Option<u64>,
}

impl ClientConfig {
    /// Reads `.env` if present, then parses the process arguments.
    pub fn load() -> Self {
        dotenvy::dotenv().ok();
        Self::parse()
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs.max(1))
    }

    pub fn poll_interval(&self) -> Duration {
        self.poll_secs
            .filter(|secs| *secs > 0)
            .map(Duration::from_secs)
            .unwrap_or_else(|| self.role.default_poll_interval())
    }

    /// Media base URL, falling back to the API origin.
    pub fn media_base(&self) -> String {
        self.media_url.clone().unwrap_or_else(|| {
            let api = self.api_url.trim_end_matches('/');
            api.strip_suffix("/api").unwrap_or(api).to_string()
        })
    }
}
