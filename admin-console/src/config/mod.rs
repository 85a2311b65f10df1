use crate::models::Capabilities;
use admin_core::error::AppError;
use secrecy::Secret;
use serde::Deserialize;

#[derive(Deserialize, Clone)]
pub struct Settings {
    pub server: ServerSettings,
    pub invoice_api: InvoiceApiSettings,
    #[serde(default)]
    pub capabilities: Vec<String>,
    #[serde(default)]
    pub telemetry: TelemetrySettings,
}

#[derive(Deserialize, Clone)]
pub struct ServerSettings {
    pub host: String,
    pub port: u16,
}

#[derive(Deserialize, Clone)]
pub struct InvoiceApiSettings {
    /// Base URL of the student-management API, without the trailing endpoint.
    pub base_url: String,
    /// Bearer token attached to every call.
    pub token: Secret<String>,
    #[serde(default = "default_timeout_seconds")]
    pub timeout_seconds: u64,
}

fn default_timeout_seconds() -> u64 {
    30
}

#[derive(Deserialize, Clone)]
pub struct TelemetrySettings {
    #[serde(default = "default_log_level")]
    pub log_level: String,
    /// OTLP collector endpoint; spans are only exported when set.
    pub otlp_endpoint: Option<String>,
}

impl Default for TelemetrySettings {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
            otlp_endpoint: None,
        }
    }
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Settings {
    /// Permission flags for the granted capability keys.
    pub fn capabilities(&self) -> Capabilities {
        Capabilities::from_keys(self.capabilities.iter().map(String::as_str))
    }
}

pub fn get_configuration() -> Result<Settings, AppError> {
    admin_core::config::load_configuration("admin-console")
}
