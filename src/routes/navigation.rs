//! Navigation projections used by the sidebar.

use serde::Serialize;

use super::tree::{Icon, RouteNode, RouteTree, SidebarPlacement};

/// The primary navigation group.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NavMainGroup {
    /// Title of the main root node.
    pub label: Option<String>,
    /// Tagged children of the main root.
    pub items: Vec<NavItem>,
}

/// One navigation entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NavItem {
    pub title: String,
    pub uri: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub icon: Option<Icon>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub sub_items: Vec<NavSubItem>,
}

/// A nested entry under a [`NavItem`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NavSubItem {
    pub title: String,
    pub uri: String,
}

impl RouteTree {
    /// Project the primary navigation group.
    ///
    /// Returns `None` when no node is tagged as the main root.
    pub fn nav_main(&self) -> Option<NavMainGroup> {
        let root = self.main_root()?;

        let items = tagged_children(root, SidebarPlacement::NavMainItem)
            .map(|(child, title)| NavItem {
                title: title.to_string(),
                uri: child.uri().to_string(),
                icon: child.icon(),
                sub_items: tagged_children(child, SidebarPlacement::NavMainItem)
                    .map(|(grandchild, title)| NavSubItem {
                        title: title.to_string(),
                        uri: grandchild.uri().to_string(),
                    })
                    .collect(),
            })
            .collect();

        Some(NavMainGroup {
            label: root.title().map(str::to_string),
            items,
        })
    }

    /// Every titled node tagged as a secondary item, in pre-order.
    pub fn nav_secondary(&self) -> Vec<NavItem> {
        self.iter()
            .filter(|node| node.is_placed(SidebarPlacement::NavSecondaryItem))
            .filter_map(|node| {
                node.title().map(|title| NavItem {
                    title: title.to_string(),
                    uri: node.uri().to_string(),
                    icon: node.icon(),
                    sub_items: Vec::new(),
                })
            })
            .collect()
    }
}

fn tagged_children<'a>(
    node: &'a RouteNode,
    placement: SidebarPlacement,
) -> impl Iterator<Item = (&'a RouteNode, &'a str)> + 'a {
    node.children()
        .iter()
        .filter(move |child| child.is_placed(placement))
        .filter_map(|child| child.title().map(|title| (child, title)))
}

/// Whether a nav entry is the page being viewed. Exact string match.
pub fn is_active(current_path: &str, uri: &str) -> bool {
    current_path == uri
}
