//! Application configuration loaded from environment variables.

use serde::Deserialize;

/// Application configuration loaded from environment variables.
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    // === Server Configuration ===
    /// Address the HTTP server binds to.
    #[serde(default = "default_host")]
    pub host: String,

    /// HTTP server port.
    #[serde(default = "default_port")]
    pub port: u16,

    /// Deployment environment name (development, production, ...).
    #[serde(default = "default_app_env")]
    pub app_env: String,

    // === Portal Content ===
    /// Locality shown under the brand in the sidebar.
    #[serde(default = "default_site_locality")]
    pub site_locality: String,

    /// Upstream fetched by the diagnostic error page.
    #[serde(default = "default_diagnostic_upstream_url")]
    pub diagnostic_upstream_url: String,

    // === Logging ===
    /// Log level (trace, debug, info, warn, error).
    #[serde(default = "default_log_level")]
    pub rust_log: String,

    /// Log output format: pretty or json.
    #[serde(default = "default_log_format")]
    pub log_format: String,

    /// Enable verbose logging.
    #[serde(default)]
    pub verbose: bool,

    // === Monitoring ===
    /// Install the Prometheus recorder at startup.
    #[serde(default = "default_true")]
    pub metrics_enabled: bool,

    /// OpenTelemetry log level, reported by the health endpoint.
    #[serde(default)]
    pub otel_log_level: Option<String>,

    /// OpenTelemetry service name, reported by the health endpoint.
    #[serde(default)]
    pub otel_service_name: Option<String>,

    /// OTLP exporter endpoint. Its presence marks OTEL as configured.
    #[serde(default)]
    pub otel_exporter_otlp_endpoint: Option<String>,

    /// Loki host, reported by the health endpoint.
    #[serde(default)]
    pub loki_host: Option<String>,
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    3000
}

fn default_app_env() -> String {
    "development".to_string()
}

fn default_site_locality() -> String {
    "San Luis".to_string()
}

fn default_diagnostic_upstream_url() -> String {
    "https://httpbin.org/status/500".to_string()
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_log_format() -> String {
    "pretty".to_string()
}

fn default_true() -> bool {
    true
}

impl Default for Config {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            app_env: default_app_env(),
            site_locality: default_site_locality(),
            diagnostic_upstream_url: default_diagnostic_upstream_url(),
            rust_log: default_log_level(),
            log_format: default_log_format(),
            verbose: false,
            metrics_enabled: default_true(),
            otel_log_level: None,
            otel_service_name: None,
            otel_exporter_otlp_endpoint: None,
            loki_host: None,
        }
    }
}

impl Config {
    /// Load configuration from environment, reading .env file first.
    pub fn load() -> Result<Self, envy::Error> {
        dotenvy::dotenv().ok();
        envy::from_env()
    }

    /// Check if the configuration is valid.
    pub fn validate(&self) -> Result<(), String> {
        if self.port == 0 {
            return Err("PORT must be greater than 0".to_string());
        }

        if self.host.trim().is_empty() {
            return Err("HOST must not be empty".to_string());
        }

        if !matches!(self.log_format.to_lowercase().as_str(), "pretty" | "json") {
            return Err(format!(
                "LOG_FORMAT must be pretty or json, got {}",
                self.log_format
            ));
        }

        if !is_http_url(&self.diagnostic_upstream_url) {
            return Err("DIAGNOSTIC_UPSTREAM_URL must be an http(s) URL".to_string());
        }

        if let Some(endpoint) = &self.otel_exporter_otlp_endpoint {
            if !is_http_url(endpoint) {
                return Err("OTEL_EXPORTER_OTLP_ENDPOINT must be an http(s) URL".to_string());
            }
        }

        if let Some(host) = &self.loki_host {
            if !is_http_url(host) {
                return Err("LOKI_HOST must be an http(s) URL".to_string());
            }
        }

        Ok(())
    }

    /// Whether logs should be emitted as JSON.
    pub fn json_logs(&self) -> bool {
        self.log_format.eq_ignore_ascii_case("json")
    }

    /// Whether an OTLP exporter endpoint is configured.
    pub fn otel_configured(&self) -> bool {
        self.otel_exporter_otlp_endpoint
            .as_deref()
            .is_some_and(|endpoint| !endpoint.is_empty())
    }

    /// Socket address string for the HTTP listener.
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// `http(s)://` followed by a non-empty host.
fn is_http_url(value: &str) -> bool {
    value
        .strip_prefix("http://")
        .or_else(|| value.strip_prefix("https://"))
        .is_some_and(|rest| !rest.is_empty() && !rest.starts_with('/'))
}
