//! Full router behaviour: pages, error boundary and monitoring endpoints.

use axum::body::Body;
use axum::http::{header, Request, StatusCode};
use axum::Router;
use metrics_exporter_prometheus::PrometheusBuilder;
use tokio::net::TcpListener;
use tower::ServiceExt;

use municipal_portal::api::{create_router, AppState};
use municipal_portal::routes::portal_routes;
use municipal_portal::telemetry::Telemetry;
use municipal_portal::Config;

fn app_with(config: Config, telemetry: Telemetry) -> Router {
    create_router(AppState::new(
        portal_routes().expect("portal route tree builds"),
        config,
        telemetry,
    ))
}

fn app() -> Router {
    app_with(Config::default(), Telemetry::disabled())
}

async fn get(app: Router, uri: &str) -> (StatusCode, Option<String>, String) {
    let response = app
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();
    let status = response.status();
    let content_type = response
        .headers()
        .get(header::CONTENT_TYPE)
        .and_then(|value| value.to_str().ok())
        .map(str::to_string);
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    (status, content_type, String::from_utf8(bytes.to_vec()).unwrap())
}

/// Serve a router that answers every request with 500, like a broken upstream.
async fn failing_upstream() -> String {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let upstream = Router::new().fallback(|| async { StatusCode::INTERNAL_SERVER_ERROR });
    tokio::spawn(async move {
        axum::serve(listener, upstream).await.unwrap();
    });
    format!("http://{addr}/status/500")
}

#[tokio::test]
async fn static_pages_render_inside_shell() {
    for (uri, expected) in [
        ("/", "Municipal Services"),
        ("/about-author", "About the Author"),
        ("/about-project", "About this Project"),
        ("/sign-in", "Welcome Back"),
        ("/sign-up", "Get Started"),
        ("/areas", "Explore different areas of the municipal platform"),
        ("/areas/gov/justice", "Misdemeanor Court"),
    ] {
        let (status, content_type, body) = get(app(), uri).await;
        assert_eq!(status, StatusCode::OK, "{uri}");
        assert!(content_type.unwrap().starts_with("text/html"));
        assert!(body.contains(expected), "{uri} missing {expected}");
        assert!(body.contains(r#"<aside class="sidebar""#), "{uri} missing sidebar");
        assert!(body.contains(r#"<footer class="app-footer"#), "{uri} missing footer");
    }
}

#[tokio::test]
async fn current_page_is_active_in_sidebar() {
    let (_, _, body) = get(app(), "/about-project").await;
    assert!(body.contains(r#"<a href="/about-project" class="sidebar-menu-button" data-active="true">"#));
    assert!(body.contains(r#"<a href="/about-author" class="sidebar-menu-button" data-active="false">"#));
}

#[tokio::test]
async fn unknown_url_returns_404_page() {
    let (status, _, body) = get(app(), "/permits/renew").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert!(body.contains("Page Not Found"));
    assert!(body.contains(r#"<aside class="sidebar""#));
}

#[tokio::test]
async fn failing_upstream_reaches_error_boundary() {
    let config = Config {
        diagnostic_upstream_url: failing_upstream().await,
        ..Config::default()
    };

    let (status, _, body) = get(app_with(config, Telemetry::disabled()), "/route-with-error").await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert!(body.contains("Something went wrong"));
    assert!(body.contains("Error Reference: "));
    assert!(body.contains(r#"href="/""#));
    assert!(body.contains(r#"<aside class="sidebar""#));
    assert!(body.contains(r#"<footer class="app-footer"#));
    assert!(body.contains(r#"<a href="/about-author" class="sidebar-menu-button" data-active="false">"#));
}

#[tokio::test]
async fn health_reports_monitoring_and_env() {
    let config = Config {
        app_env: "production".to_string(),
        otel_service_name: Some("municipal-portal".to_string()),
        otel_exporter_otlp_endpoint: Some("http://localhost:4318".to_string()),
        loki_host: Some("http://localhost:3100".to_string()),
        ..Config::default()
    };
    let handle = PrometheusBuilder::new().build_recorder().handle();

    let (status, _, body) = get(app_with(config, Telemetry::new(Some(handle), true)), "/api/health").await;
    assert_eq!(status, StatusCode::OK);

    let json: serde_json::Value = serde_json::from_str(&body).unwrap();
    assert_eq!(json["status"], "OK");
    assert!(json["timestamp"].as_str().unwrap().contains('T'));
    assert_eq!(
        json["monitoring"],
        serde_json::json!({ "metrics": true, "logger": true, "otel": true })
    );
    assert_eq!(json["env"]["otelServiceName"], "municipal-portal");
    assert_eq!(json["env"]["otelExporterOtlpEndpoint"], "http://localhost:4318");
    assert_eq!(json["env"]["lokiHost"], "http://localhost:3100");
    assert_eq!(json["env"]["otelLogLevel"], serde_json::Value::Null);
    assert_eq!(json["env"]["appEnv"], "production");
}

#[tokio::test]
async fn metrics_served_as_text_when_registry_installed() {
    let handle = PrometheusBuilder::new().build_recorder().handle();
    let (status, content_type, _) = get(
        app_with(Config::default(), Telemetry::new(Some(handle), true)),
        "/api/metrics",
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert!(content_type.unwrap().starts_with("text/plain"));
}

#[tokio::test]
async fn metrics_unavailable_without_registry() {
    let (status, content_type, body) = get(app(), "/api/metrics").await;
    assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
    assert_eq!(content_type.as_deref(), Some("text/plain"));
    assert_eq!(body, "Metrics Unavailable");
}

#[tokio::test]
async fn openapi_document_is_served() {
    let (status, _, body) = get(app(), "/api/openapi.json").await;
    assert_eq!(status, StatusCode::OK);

    let json: serde_json::Value = serde_json::from_str(&body).unwrap();
    assert!(json["paths"]["/api/health"].is_object());
    assert!(json["paths"]["/api/metrics"].is_object());
}
