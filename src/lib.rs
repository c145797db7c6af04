//! Municipal services portal.
//!
//! A server-rendered page shell (sidebar, header, footer) around a handful of
//! content pages, driven by a static route tree, plus health and metrics
//! endpoints.
//!
//! # Route tree
//!
//! Every navigable location is a [`routes::RouteNode`]. The tree is built once
//! at startup and shared read-only:
//!
//! ```text
//! /                       Municipal Services
//! /about-author           NAV_SECONDARY_ITEM
//! /about-project          NAV_SECONDARY_ITEM
//! /areas                  NAV_MAIN_ROOT
//! ├── /areas/admin        NAV_MAIN_ITEM
//! ├── /areas/gov          NAV_MAIN_ITEM (+ 8 departments)
//! └── /areas/personal     NAV_MAIN_ITEM (+ profile, notifications)
//! /sign-in, /sign-up
//! ```
//!
//! # Modules
//!
//! - [`config`]: Configuration loading from environment
//! - [`error`]: Unified error types
//! - [`routes`]: Route tree, resolver and navigation projections
//! - [`views`]: HTML rendering of the shell and pages
//! - [`api`]: HTTP router, handlers and error boundary
//! - [`telemetry`]: One-time logging and metrics bootstrap
//! - [`metrics`]: Metric names and recording helpers
//! - [`utils`]: Utility functions

pub mod api;
pub mod config;
pub mod error;
pub mod metrics;
pub mod routes;
pub mod telemetry;
pub mod utils;
pub mod views;

pub use config::Config;
pub use error::{PortalError, Result, RouteError};
pub use routes::{portal_routes, RouteNode, RouteTree};
