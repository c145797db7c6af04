//! Exact-path lookup over a [`RouteTree`].

use crate::error::RouteError;

use super::tree::{RouteNode, RouteTree};

impl RouteTree {
    /// Resolve a URI to the node registered at that path.
    ///
    /// `/` returns the root node. Any other URI is split into non-empty
    /// segments and walked one level per segment; intermediate nodes are
    /// valid targets. Every failure, malformed input included, is
    /// [`RouteError::NotFound`] carrying `uri` verbatim.
    pub fn resolve(&self, uri: &str) -> Result<&RouteNode, RouteError> {
        if uri == "/" {
            return self.root().ok_or_else(|| RouteError::not_found(uri));
        }

        let mut level = self.top_level();
        let mut segments = uri.split('/').filter(|segment| !segment.is_empty()).peekable();

        while let Some(segment) = segments.next() {
            let node = level
                .iter()
                .find(|node| node.segment() == segment)
                .ok_or_else(|| RouteError::not_found(uri))?;

            if segments.peek().is_none() {
                return Ok(node);
            }
            level = node.children();
        }

        Err(RouteError::not_found(uri))
    }

    /// Whether `uri` resolves.
    pub fn contains(&self, uri: &str) -> bool {
        self.resolve(uri).is_ok()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::routes::tree::SidebarPlacement;

    fn tree() -> RouteTree {
        RouteTree::new(
            Some(RouteNode::root().with_title("Root")),
            vec![
                RouteNode::new("docs").with_title("Docs"),
                RouteNode::new("areas")
                    .with_placement(SidebarPlacement::NavMainRoot)
                    .with_child(
                        RouteNode::new("gov")
                            .with_child(RouteNode::new("finance").with_title("Finance")),
                    ),
            ],
        )
        .unwrap()
    }

    #[test]
    fn resolves_root_as_special_case() {
        let tree = tree();
        let root = tree.resolve("/").unwrap();
        assert!(std::ptr::eq(root, tree.root().unwrap()));
    }

    #[test]
    fn missing_root_is_not_found() {
        let tree = RouteTree::new(None, vec![RouteNode::new("docs")]).unwrap();
        assert_eq!(tree.resolve("/"), Err(RouteError::not_found("/")));
    }

    #[test]
    fn resolves_nested_and_intermediate_nodes() {
        let tree = tree();
        let areas = &tree.top_level()[1];
        let gov = &areas.children()[0];
        let finance = &gov.children()[0];

        assert!(std::ptr::eq(tree.resolve("/areas/gov").unwrap(), gov));
        assert!(std::ptr::eq(tree.resolve("/areas/gov/finance").unwrap(), finance));
    }

    #[test]
    fn empty_segments_are_collapsed() {
        let tree = tree();
        assert_eq!(tree.resolve("/areas//gov/").unwrap().uri(), "/areas/gov");
    }

    #[test]
    fn leaf_with_more_segments_is_not_found() {
        let tree = tree();
        assert_eq!(
            tree.resolve("/docs/more"),
            Err(RouteError::not_found("/docs/more"))
        );
    }

    #[test]
    fn input_without_segments_is_not_found() {
        let tree = tree();
        assert!(tree.resolve("").is_err());
        assert!(tree.resolve("//").is_err());
    }

    #[test]
    fn malformed_uri_reports_original_input() {
        let err = tree().resolve("invalid-uri").unwrap_err();
        assert_eq!(err.to_string(), "Route node not found for URI: invalid-uri");
    }

    #[test]
    fn contains_mirrors_resolve() {
        let tree = tree();
        assert!(tree.contains("/areas/gov/finance"));
        assert!(!tree.contains("/areas/personal"));
    }
}
