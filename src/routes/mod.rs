//! Route tree: the portal's navigable locations.
//!
//! This module handles:
//! - Route node types and tree construction
//! - URI resolution
//! - Navigation projections for the sidebar
//! - The static portal configuration

pub mod catalog;
pub mod navigation;
pub mod resolver;
pub mod tree;

pub use catalog::portal_routes;
pub use navigation::{is_active, NavItem, NavMainGroup, NavSubItem};
pub use tree::{Icon, RouteNode, RouteTree, SidebarPlacement};
