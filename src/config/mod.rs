use serde::Deserialize;
use std::time::Duration;

#[derive(Debug, Deserialize)]
pub struct AppConfig {
    /// Server bind address (e.g., "0.0.0.0:3000")
    #[serde(default = "default_bind_addr")]
    pub bind_addr: String,

    /// Delay applied by the simulated quote submitter, in milliseconds
    #[serde(default = "default_submit_delay_ms")]
    pub quote_submit_delay_ms: u64,

    /// Endpoint that receives quote requests as JSON. When unset, quotes
    /// are only logged.
    #[serde(default)]
    pub quote_webhook_url: Option<String>,

    /// Request timeout for the quote webhook, in seconds
    #[serde(default = "default_webhook_timeout_secs")]
    pub quote_webhook_timeout_secs: u64,
}

fn default_bind_addr() -> String {
    "0.0.0.0:3000".to_string()
}

fn default_submit_delay_ms() -> u64 {
    2000
}

fn default_webhook_timeout_secs() -> u64 {
    10
}

impl AppConfig {
    pub fn from_env() -> Result<Self, envy::Error> {
        dotenvy::dotenv().ok();
        envy::from_env()
    }

    pub fn submit_delay(&self) -> Duration {
        Duration::from_millis(self.quote_submit_delay_ms)
    }

    pub fn webhook_timeout(&self) -> Duration {
        Duration::from_secs(self.quote_webhook_timeout_secs)
    }
}
