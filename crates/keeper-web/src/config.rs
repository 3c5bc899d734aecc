//! Configuration loaded from environment variables.

use std::env;

/// Web adapter configuration.
#[derive(Debug, Clone)]
pub struct WebConfig {
    /// Service name attached to log output.
    pub service_name: String,
    /// Emit JSON logs instead of the pretty format.
    pub json_logs: bool,
    /// Keep template arguments in 5xx response bodies.
    ///
    /// Off by default: internal causes can carry details clients should not see.
    pub expose_internal_errors: bool,
}

impl Default for WebConfig {
    fn default() -> Self {
        Self {
            service_name: "keeper".to_string(),
            json_logs: false,
            expose_internal_errors: false,
        }
    }
}

impl WebConfig {
    /// Load configuration from the environment, reading `.env` first if present.
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();

        let defaults = Self::default();
        Self {
            service_name: env::var("SERVICE_NAME").unwrap_or(defaults.service_name),
            json_logs: env::var("LOG_FORMAT")
                .map(|v| v.eq_ignore_ascii_case("json"))
                .unwrap_or(defaults.json_logs),
            expose_internal_errors: env::var("EXPOSE_INTERNAL_ERRORS")
                .ok()
                .and_then(|v| parse_flag(&v))
                .unwrap_or(defaults.expose_internal_errors),
        }
    }
}

fn parse_flag(value: &str) -> Option<bool> {
    match value.trim().to_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}
