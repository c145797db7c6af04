//! Process-wide logging and metrics bootstrap.
//!
//! [`init`] installs the tracing subscriber and the Prometheus recorder once;
//! later calls return the same [`Telemetry`]. Handlers read it through
//! [`crate::api::AppState`].

use std::fmt;

use metrics_exporter_prometheus::{PrometheusBuilder, PrometheusHandle};
use once_cell::sync::OnceCell;
use tracing::{info, warn};
use tracing_subscriber::{fmt as log_fmt, prelude::*, EnvFilter};

use crate::config::Config;
use crate::error::PortalError;
use crate::metrics;

static TELEMETRY: OnceCell<Telemetry> = OnceCell::new();

/// Installed observability components.
#[derive(Clone, Default)]
pub struct Telemetry {
    metrics: Option<PrometheusHandle>,
    logger: bool,
}

impl fmt::Debug for Telemetry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Telemetry")
            .field("metrics", &self.metrics.is_some())
            .field("logger", &self.logger)
            .finish()
    }
}

impl Telemetry {
    /// Wrap already-built components.
    pub fn new(metrics: Option<PrometheusHandle>, logger: bool) -> Self {
        Self { metrics, logger }
    }

    /// No logger, no registry.
    pub fn disabled() -> Self {
        Self::default()
    }

    /// Whether a metrics registry is installed.
    pub fn has_metrics(&self) -> bool {
        self.metrics.is_some()
    }

    /// Whether a structured logger is installed.
    pub fn has_logger(&self) -> bool {
        self.logger
    }

    /// Prometheus text exposition, if a registry is installed.
    pub fn render_metrics(&self) -> Option<String> {
        self.metrics.as_ref().map(PrometheusHandle::render)
    }
}

/// Install logging and metrics once. Subsequent calls return the first result.
pub fn init(config: &Config) -> Result<&'static Telemetry, PortalError> {
    TELEMETRY.get_or_try_init(|| install(config))
}

fn install(config: &Config) -> Result<Telemetry, PortalError> {
    let logger = install_logger(config);

    let handle = if config.metrics_enabled {
        let handle = PrometheusBuilder::new()
            .install_recorder()
            .map_err(|e| PortalError::Telemetry(format!("prometheus recorder: {e}")))?;
        metrics::init_metrics();
        Some(handle)
    } else {
        None
    };

    info!(
        metrics = handle.is_some(),
        logger,
        otel = config.otel_configured(),
        "Telemetry initialized"
    );

    Ok(Telemetry::new(handle, logger))
}

/// Returns whether this process now owns the global subscriber.
fn install_logger(config: &Config) -> bool {
    let filter = if config.verbose {
        EnvFilter::new("municipal_portal=debug,info")
    } else {
        EnvFilter::try_new(&config.rust_log).unwrap_or_else(|_| EnvFilter::new("info"))
    };

    let registry = tracing_subscriber::registry().with(filter);
    let result = if config.json_logs() {
        registry.with(log_fmt::layer().json()).try_init()
    } else {
        registry.with(log_fmt::layer()).try_init()
    };

    match result {
        Ok(()) => true,
        Err(e) => {
            // Another subscriber owns the global default; events still go there.
            warn!(error = %e, "Tracing subscriber already installed");
            false
        }
    }
}
