//! HTTP API handlers.

use std::sync::Arc;
use std::time::Instant;

use axum::{
    extract::{MatchedPath, Request, State},
    http::{header, StatusCode},
    middleware::Next,
    response::{Html, IntoResponse, Response},
    Json,
};
use serde::Serialize;
use time::format_description::well_known::Rfc3339;
use time::OffsetDateTime;
use tracing::{debug, error, info};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::config::Config;
use crate::error::{PortalError, RouteError};
use crate::metrics;
use crate::routes::RouteTree;
use crate::telemetry::Telemetry;
use crate::views::pages::{self, Page, SIGN_IN_PAGE, SIGN_UP_PAGE};
use crate::views::Shell;

use super::boundary;

/// Application state shared with handlers.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Route tree, built once at startup.
    pub routes: Arc<RouteTree>,
    /// Loaded configuration.
    pub config: Arc<Config>,
    /// Installed logging and metrics.
    pub telemetry: Telemetry,
    /// Client for the diagnostic upstream.
    pub http: reqwest::Client,
}

impl AppState {
    /// Create new app state.
    pub fn new(routes: RouteTree, config: Config, telemetry: Telemetry) -> Self {
        Self {
            routes: Arc::new(routes),
            config: Arc::new(config),
            telemetry,
            http: reqwest::Client::new(),
        }
    }

    /// Wrap a page in the shell for the given request path.
    pub(crate) fn shell_document(&self, current_path: &str, page: &Page) -> String {
        Shell::new(&self.routes, current_path, &self.config.site_locality)
            .render(page.title.as_deref(), &page.body)
    }
}

fn render_page<F>(state: &AppState, path: &str, name: &'static str, build: F) -> Response
where
    F: FnOnce(&RouteTree) -> Result<Page, RouteError>,
{
    let _timer = metrics::timer_page_render(name);
    match build(&state.routes) {
        Ok(page) => {
            metrics::inc_pages_rendered(name);
            debug!(page = name, path, "Rendered page");
            Html(state.shell_document(path, &page)).into_response()
        }
        Err(err) => {
            metrics::inc_route_not_found();
            boundary::page_error(state, path, err.into())
        }
    }
}

// === Pages ===

/// Landing page.
pub async fn home(State(state): State<AppState>) -> Response {
    render_page(&state, "/", "home", pages::home)
}

/// Author page.
pub async fn about_author(State(state): State<AppState>) -> Response {
    render_page(&state, "/about-author", "about_author", pages::about_author)
}

/// Project page.
pub async fn about_project(State(state): State<AppState>) -> Response {
    render_page(&state, "/about-project", "about_project", pages::about_project)
}

/// Sign-in placeholder.
pub async fn sign_in(State(state): State<AppState>) -> Response {
    render_page(&state, SIGN_IN_PAGE.uri, "sign_in", |tree| {
        pages::auth(tree, &SIGN_IN_PAGE)
    })
}

/// Sign-up placeholder.
pub async fn sign_up(State(state): State<AppState>) -> Response {
    render_page(&state, SIGN_UP_PAGE.uri, "sign_up", |tree| {
        pages::auth(tree, &SIGN_UP_PAGE)
    })
}

/// Area listing page for a fixed URI.
pub async fn area(state: AppState, uri: String) -> Response {
    render_page(&state, &uri, "area", |tree| pages::area_grid(tree, &uri))
}

const ROUTE_WITH_ERROR: &str = "/route-with-error";

/// Fetches the diagnostic upstream; its failure reaches the error boundary.
pub async fn route_with_error(State(state): State<AppState>) -> Response {
    match fetch_upstream(&state).await {
        Ok(data) => {
            let page = pages::upstream_data(&data);
            metrics::inc_pages_rendered("route_with_error");
            Html(state.shell_document(ROUTE_WITH_ERROR, &page)).into_response()
        }
        Err(err) => boundary::page_error(&state, ROUTE_WITH_ERROR, err),
    }
}

async fn fetch_upstream(state: &AppState) -> Result<serde_json::Value, PortalError> {
    debug!(upstream = %state.config.diagnostic_upstream_url, "Fetching diagnostic upstream");
    let data = state
        .http
        .get(&state.config.diagnostic_upstream_url)
        .send()
        .await?
        .error_for_status()?
        .json()
        .await?;
    Ok(data)
}

/// Fallback for paths with no page.
pub async fn not_found(State(state): State<AppState>, request: Request) -> impl IntoResponse {
    let path = request.uri().path().to_string();
    debug!(path = %path, "No page for path");
    let page = pages::not_found();
    (StatusCode::NOT_FOUND, Html(state.shell_document(&path, &page)))
}

// === Monitoring ===

/// Health check response.
#[derive(Debug, Serialize, ToSchema)]
pub struct HealthResponse {
    /// Status: "OK".
    pub status: String,
    /// Current time, RFC 3339.
    pub timestamp: String,
    /// Installed monitoring components.
    pub monitoring: MonitoringStatus,
    /// Monitoring-related configuration.
    pub env: EnvStatus,
}

/// Installed monitoring components.
#[derive(Debug, Serialize, ToSchema)]
pub struct MonitoringStatus {
    /// Prometheus registry installed.
    pub metrics: bool,
    /// Structured logger installed.
    pub logger: bool,
    /// OTLP exporter endpoint configured.
    pub otel: bool,
}

/// Monitoring-related configuration values.
#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct EnvStatus {
    pub otel_log_level: Option<String>,
    pub otel_service_name: Option<String>,
    pub otel_exporter_otlp_endpoint: Option<String>,
    pub loki_host: Option<String>,
    pub app_env: String,
}

/// Simple message response.
#[derive(Debug, Serialize, ToSchema)]
pub struct MessageResponse {
    pub message: String,
}

/// Error payload.
#[derive(Debug, Serialize, ToSchema)]
pub struct ErrorResponse {
    pub error: String,
}

/// Health check handler - always returns 200.
#[utoipa::path(
    get,
    path = "/api/health",
    responses((status = 200, description = "Process status", body = HealthResponse))
)]
pub async fn health(State(state): State<AppState>) -> impl IntoResponse {
    let now = OffsetDateTime::now_utc();
    let timestamp = now
        .format(&Rfc3339)
        .unwrap_or_else(|_| now.unix_timestamp().to_string());
    let config = &state.config;

    Json(HealthResponse {
        status: "OK".to_string(),
        timestamp,
        monitoring: MonitoringStatus {
            metrics: state.telemetry.has_metrics(),
            logger: state.telemetry.has_logger(),
            otel: config.otel_configured(),
        },
        env: EnvStatus {
            otel_log_level: config.otel_log_level.clone(),
            otel_service_name: config.otel_service_name.clone(),
            otel_exporter_otlp_endpoint: config.otel_exporter_otlp_endpoint.clone(),
            loki_host: config.loki_host.clone(),
            app_env: config.app_env.clone(),
        },
    })
}

/// Prometheus exposition - 503 when no registry is installed.
#[utoipa::path(
    get,
    path = "/api/metrics",
    responses(
        (status = 200, description = "Prometheus text exposition", content_type = "text/plain"),
        (status = 503, description = "Metrics Unavailable", content_type = "text/plain")
    )
)]
pub async fn metrics_endpoint(State(state): State<AppState>) -> Response {
    match state.telemetry.render_metrics() {
        Some(body) => (
            [(header::CONTENT_TYPE, "text/plain; version=0.0.4")],
            body,
        )
            .into_response(),
        None => (
            StatusCode::SERVICE_UNAVAILABLE,
            [(header::CONTENT_TYPE, "text/plain")],
            "Metrics Unavailable",
        )
            .into_response(),
    }
}

/// Sample endpoint emitting a structured info event.
#[utoipa::path(
    get,
    path = "/api/hello-world",
    responses((status = 200, description = "Greeting", body = MessageResponse))
)]
pub async fn hello_world() -> impl IntoResponse {
    let request_id = Uuid::new_v4();
    info!(
        %request_id,
        extra = "This is some extra information that you can add to the meta",
        "Successful request handled"
    );
    Json(MessageResponse {
        message: "Hello world".to_string(),
    })
}

/// Sample endpoint emitting a structured error event.
#[utoipa::path(
    get,
    path = "/api/something-is-wrong",
    responses((status = 500, description = "Always fails", body = ErrorResponse))
)]
pub async fn something_is_wrong() -> impl IntoResponse {
    error!(
        error = "Something is fundamentally wrong with this API endpoint",
        "An error message here"
    );
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(ErrorResponse {
            error: "Internal Server Error".to_string(),
        }),
    )
}

/// Count and time every routed request, labelled by matched route.
pub async fn track_metrics(request: Request, next: Next) -> Response {
    let start = Instant::now();
    let route = request
        .extensions()
        .get::<MatchedPath>()
        .map(|path| path.as_str().to_string())
        .unwrap_or_else(|| "unmatched".to_string());

    let response = next.run(request).await;
    metrics::record_http_request(start, &route, response.status().as_u16());
    response
}
