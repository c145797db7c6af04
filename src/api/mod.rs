//! HTTP surface: portal pages, monitoring endpoints and the error boundary.

pub mod boundary;
pub mod docs;
pub mod handlers;
pub mod routes;

pub use handlers::AppState;
pub use routes::create_router;
