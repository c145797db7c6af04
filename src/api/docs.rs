//! OpenAPI description of the monitoring endpoints.

use axum::Json;
use utoipa::OpenApi;

use super::handlers::{
    self, EnvStatus, ErrorResponse, HealthResponse, MessageResponse, MonitoringStatus,
};

#[derive(OpenApi)]
#[openapi(
    info(title = "Municipal Services Portal API"),
    paths(
        handlers::health,
        handlers::metrics_endpoint,
        handlers::hello_world,
        handlers::something_is_wrong
    ),
    components(schemas(HealthResponse, MonitoringStatus, EnvStatus, MessageResponse, ErrorResponse)),
    tags((name = "monitoring", description = "Health and metrics probes"))
)]
pub struct ApiDoc;

/// Serve the OpenAPI document.
pub async fn openapi() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn document_lists_monitoring_paths() {
        let doc = ApiDoc::openapi();
        for path in [
            "/api/health",
            "/api/metrics",
            "/api/hello-world",
            "/api/something-is-wrong",
        ] {
            assert!(doc.paths.paths.contains_key(path), "missing {path}");
        }
    }
}
