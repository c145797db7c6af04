//! Route tree types and construction.
//!
//! Nodes are declared by their relative path segment only. [`RouteTree::new`]
//! derives every node's absolute URI from its parent chain, so a node's URI
//! can never disagree with its position in the tree.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};
use strum::{AsRefStr, Display, EnumString};

use crate::error::TreeError;

/// Where a node appears in the navigation chrome.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumString, AsRefStr,
)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
pub enum SidebarPlacement {
    /// Parent of the primary navigation group. At most one per tree.
    NavMainRoot,
    /// Entry (or sub-entry) of the primary navigation group.
    NavMainItem,
    /// Entry of the secondary navigation list.
    NavSecondaryItem,
}

/// Symbolic glyph identifier attached to a node.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumString, AsRefStr,
)]
#[serde(rename_all = "kebab-case")]
#[strum(serialize_all = "kebab-case")]
pub enum Icon {
    Bell,
    Building,
    Bus,
    FileText,
    Gavel,
    Landmark,
    LogIn,
    Scale,
    User,
    UserPlus,
    Users,
}

/// One navigable location in the portal.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RouteNode {
    #[serde(skip)]
    segment: String,
    uri: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    subtitle: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    icon: Option<Icon>,
    #[serde(skip_serializing_if = "Option::is_none")]
    sidebar_placement: Option<SidebarPlacement>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    children: Vec<RouteNode>,
}

impl RouteNode {
    /// Declare a node at the given path segment (e.g. `"areas"`).
    pub fn new(segment: impl Into<String>) -> Self {
        Self {
            segment: segment.into(),
            uri: String::new(),
            title: None,
            subtitle: None,
            icon: None,
            sidebar_placement: None,
            children: Vec::new(),
        }
    }

    /// Declare the root node (`/`).
    pub fn root() -> Self {
        Self::new("")
    }

    /// Set the display title.
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Set the secondary display text.
    pub fn with_subtitle(mut self, subtitle: impl Into<String>) -> Self {
        self.subtitle = Some(subtitle.into());
        self
    }

    /// Set the glyph.
    pub fn with_icon(mut self, icon: Icon) -> Self {
        self.icon = Some(icon);
        self
    }

    /// Tag the node for the navigation chrome.
    pub fn with_placement(mut self, placement: SidebarPlacement) -> Self {
        self.sidebar_placement = Some(placement);
        self
    }

    /// Append a child. Children keep insertion order.
    pub fn with_child(mut self, child: RouteNode) -> Self {
        self.children.push(child);
        self
    }

    /// Absolute URI of this node.
    pub fn uri(&self) -> &str {
        &self.uri
    }

    /// Path segment relative to the parent.
    pub fn segment(&self) -> &str {
        &self.segment
    }

    pub fn title(&self) -> Option<&str> {
        self.title.as_deref()
    }

    pub fn subtitle(&self) -> Option<&str> {
        self.subtitle.as_deref()
    }

    pub fn icon(&self) -> Option<Icon> {
        self.icon
    }

    pub fn sidebar_placement(&self) -> Option<SidebarPlacement> {
        self.sidebar_placement
    }

    /// Whether the node carries the given tag.
    pub fn is_placed(&self, placement: SidebarPlacement) -> bool {
        self.sidebar_placement == Some(placement)
    }

    /// Children in insertion order.
    pub fn children(&self) -> &[RouteNode] {
        &self.children
    }

    pub fn has_children(&self) -> bool {
        !self.children.is_empty()
    }

    /// Direct child with the given segment.
    pub fn child(&self, segment: &str) -> Option<&RouteNode> {
        self.children.iter().find(|child| child.segment == segment)
    }

    /// Pre-order traversal of this node and its descendants.
    pub fn iter(&self) -> Iter<'_> {
        Iter { stack: vec![self] }
    }
}

/// Immutable route tree. Built once, then shared read-only.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouteTree {
    root: Option<RouteNode>,
    top_level: Vec<RouteNode>,
}

impl RouteTree {
    /// Build a tree from an optional root node and the top-level nodes.
    ///
    /// Derives every URI and rejects invalid or duplicate segments, a root
    /// with children, and more than one [`SidebarPlacement::NavMainRoot`].
    pub fn new(root: Option<RouteNode>, mut top_level: Vec<RouteNode>) -> Result<Self, TreeError> {
        let root = match root {
            Some(mut node) => {
                if node.has_children() {
                    return Err(TreeError::RootWithChildren);
                }
                node.segment.clear();
                node.uri = "/".to_string();
                Some(node)
            }
            None => None,
        };

        attach_level(&mut top_level, "")?;

        let tree = Self { root, top_level };
        tree.check_single_main_root()?;
        Ok(tree)
    }

    /// The `/` node, if configured.
    pub fn root(&self) -> Option<&RouteNode> {
        self.root.as_ref()
    }

    /// Nodes directly below `/`, in insertion order.
    pub fn top_level(&self) -> &[RouteNode] {
        &self.top_level
    }

    /// Pre-order traversal: root first, then each top-level subtree.
    pub fn iter(&self) -> Iter<'_> {
        let mut stack: Vec<&RouteNode> = self.top_level.iter().rev().collect();
        if let Some(root) = &self.root {
            stack.push(root);
        }
        Iter { stack }
    }

    /// Number of nodes in the tree.
    pub fn len(&self) -> usize {
        self.iter().count()
    }

    pub fn is_empty(&self) -> bool {
        self.root.is_none() && self.top_level.is_empty()
    }

    /// The node tagged [`SidebarPlacement::NavMainRoot`], if any.
    pub fn main_root(&self) -> Option<&RouteNode> {
        self.iter()
            .find(|node| node.is_placed(SidebarPlacement::NavMainRoot))
    }

    fn check_single_main_root(&self) -> Result<(), TreeError> {
        let mut roots = self
            .iter()
            .filter(|node| node.is_placed(SidebarPlacement::NavMainRoot));

        if let (Some(first), Some(second)) = (roots.next(), roots.next()) {
            return Err(TreeError::MultipleMainRoots {
                first: first.uri.clone(),
                second: second.uri.clone(),
            });
        }
        Ok(())
    }
}

fn attach_level(nodes: &mut [RouteNode], parent: &str) -> Result<(), TreeError> {
    let mut seen = HashSet::new();

    for node in nodes.iter_mut() {
        if node.segment.is_empty() || node.segment.contains('/') {
            return Err(TreeError::InvalidSegment {
                parent: if parent.is_empty() { "/" } else { parent }.to_string(),
                segment: node.segment.clone(),
            });
        }

        node.uri = format!("{}/{}", parent, node.segment);

        if !seen.insert(node.segment.clone()) {
            return Err(TreeError::DuplicateRoute {
                uri: node.uri.clone(),
            });
        }

        attach_level(&mut node.children, &node.uri)?;
    }

    Ok(())
}

/// Pre-order iterator over route nodes.
#[derive(Debug)]
pub struct Iter<'a> {
    stack: Vec<&'a RouteNode>,
}

impl<'a> Iterator for Iter<'a> {
    type Item = &'a RouteNode;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        self.stack.extend(node.children.iter().rev());
        Some(node)
    }
}
