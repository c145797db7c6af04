//! HTTP route definitions.

use axum::{extract::State, middleware, routing::get, Router};
use tower_http::{catch_panic::CatchPanicLayer, trace::TraceLayer};

use crate::routes::RouteTree;

use super::boundary;
use super::docs::openapi;
use super::handlers::{
    self, about_author, about_project, health, hello_world, home, metrics_endpoint, not_found,
    route_with_error, sign_in, sign_up, something_is_wrong, track_metrics, AppState,
};

/// Create the portal router: pages, monitoring API, fallback and the
/// global panic boundary.
pub fn create_router(state: AppState) -> Router {
    let mut router = Router::new()
        // Pages
        .route("/", get(home))
        .route("/about-author", get(about_author))
        .route("/about-project", get(about_project))
        .route("/sign-in", get(sign_in))
        .route("/sign-up", get(sign_up))
        .route("/route-with-error", get(route_with_error))
        // Monitoring
        .route("/api/health", get(health))
        .route("/api/metrics", get(metrics_endpoint))
        .route("/api/hello-world", get(hello_world))
        .route("/api/something-is-wrong", get(something_is_wrong))
        .route("/api/openapi.json", get(openapi));

    for uri in area_uris(&state.routes) {
        let path = uri.clone();
        router = router.route(
            &path,
            get(move |State(state): State<AppState>| handlers::area(state, uri)),
        );
    }

    router
        .route_layer(middleware::from_fn(track_metrics))
        .fallback(not_found)
        .layer(TraceLayer::new_for_http())
        .layer(CatchPanicLayer::custom(boundary::global_error))
        .with_state(state)
}

/// URIs served by area listing pages: the main navigation root and
/// everything below it.
pub fn area_uris(tree: &RouteTree) -> Vec<String> {
    tree.main_root()
        .map(|root| root.iter().map(|node| node.uri().to_string()).collect())
        .unwrap_or_default()
}
