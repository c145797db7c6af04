//! Unified error types for the portal.

use thiserror::Error;

/// Unified error type for the portal.
#[derive(Error, Debug)]
pub enum PortalError {
    /// Configuration loading error.
    #[error("configuration error: {0}")]
    Config(#[from] envy::Error),

    /// Configuration loaded but failed validation.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    /// Route lookup error.
    #[error("route error: {0}")]
    Route(#[from] RouteError),

    /// Route tree construction error.
    #[error("route tree error: {0}")]
    Tree(#[from] TreeError),

    /// Upstream HTTP request error.
    #[error("upstream error: {0}")]
    Upstream(#[from] reqwest::Error),

    /// Logging or metrics bootstrap error.
    #[error("telemetry error: {0}")]
    Telemetry(String),
}

/// Route resolution errors.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RouteError {
    /// No node is registered at the requested URI.
    #[error("Route node not found for URI: {uri}")]
    NotFound {
        /// The URI exactly as it was requested.
        uri: String,
    },
}

impl RouteError {
    /// Build a not-found error for the given URI.
    pub fn not_found(uri: impl Into<String>) -> Self {
        RouteError::NotFound { uri: uri.into() }
    }
}

/// Errors raised while building a route tree.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TreeError {
    /// A segment was empty or contained a slash.
    #[error("invalid path segment {segment:?} under {parent}")]
    InvalidSegment {
        /// Parent URI.
        parent: String,
        /// Offending segment.
        segment: String,
    },

    /// Two siblings share a segment.
    #[error("duplicate route {uri}")]
    DuplicateRoute {
        /// The URI registered twice.
        uri: String,
    },

    /// More than one node is tagged as the main navigation root.
    #[error("multiple main navigation roots: {first} and {second}")]
    MultipleMainRoots {
        /// First tagged URI.
        first: String,
        /// Second tagged URI.
        second: String,
    },

    /// The root node was given children.
    #[error("root node cannot have children")]
    RootWithChildren,
}

/// Convenient Result type alias.
pub type Result<T> = std::result::Result<T, PortalError>;
