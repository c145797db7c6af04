//! Integration tests for the municipal portal.
//!
//! `routes` exercises the public route tree API against the portal
//! configuration; `http` drives the full axum router in-process.

mod http;
mod routes;
