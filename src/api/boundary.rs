//! Error boundaries.
//!
//! A failed page renders the generic error page inside the shell for the
//! request path. A panic anywhere below the router falls through to the
//! global boundary, which renders the same page without the shell.

use std::any::Any;

use axum::{
    http::StatusCode,
    response::{Html, IntoResponse, Response},
};
use tracing::error;
use uuid::Uuid;

use crate::error::PortalError;
use crate::metrics;
use crate::views::{pages, shell};

use super::handlers::AppState;

/// Log the failure under a fresh reference and count it.
fn report(cause: &dyn std::fmt::Display) -> String {
    let reference = Uuid::new_v4().simple().to_string();
    error!(%reference, error = %cause, "Rendering error boundary");
    metrics::inc_error_boundary();
    reference
}

/// 500 error page inside the shell for `current_path`.
pub fn page_error(state: &AppState, current_path: &str, err: PortalError) -> Response {
    let reference = report(&err);
    let page = pages::error(&reference);
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Html(state.shell_document(current_path, &page)),
    )
        .into_response()
}

/// Bare 500 error page for panics caught by `CatchPanicLayer`.
pub fn global_error(panic: Box<dyn Any + Send + 'static>) -> Response {
    let message = panic
        .downcast_ref::<String>()
        .map(String::as_str)
        .or_else(|| panic.downcast_ref::<&str>().copied())
        .unwrap_or("unknown panic");
    let reference = report(&message);

    let page = pages::error(&reference);
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Html(shell::document(page.title.as_deref(), &page.body)),
    )
        .into_response()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use crate::error::RouteError;
    use crate::routes::portal_routes;
    use crate::telemetry::Telemetry;

    async fn body_of(response: Response) -> String {
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
        String::from_utf8(bytes.to_vec()).unwrap()
    }

    #[tokio::test]
    async fn page_error_renders_inside_shell() {
        let state = AppState::new(portal_routes().unwrap(), Config::default(), Telemetry::disabled());
        let response = page_error(
            &state,
            "/areas/missing",
            RouteError::not_found("/areas/missing").into(),
        );
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

        let body = body_of(response).await;
        assert!(body.contains("Something went wrong"));
        assert!(body.contains("Error Reference: "));
        assert!(body.contains(r#"<aside class="sidebar""#));
        assert!(body.contains(r#"<footer class="app-footer"#));
        // The requested URI is logged, never shown.
        assert!(!body.contains("/areas/missing"));
    }

    #[tokio::test]
    async fn global_error_renders_without_shell() {
        let response = global_error(Box::new("layout exploded"));
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

        let body = body_of(response).await;
        assert!(body.contains("Something went wrong"));
        assert!(!body.contains(r#"<aside class="sidebar""#));
        assert!(!body.contains("layout exploded"));
    }
}
