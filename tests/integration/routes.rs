//! Route tree resolution and navigation over the portal configuration.

use pretty_assertions::assert_eq;

use municipal_portal::routes::{portal_routes, RouteNode, RouteTree, SidebarPlacement};
use municipal_portal::RouteError;

fn tree() -> RouteTree {
    portal_routes().expect("portal route tree builds")
}

#[test]
fn every_node_resolves_to_itself() {
    let tree = tree();
    for node in tree.iter() {
        let resolved = tree.resolve(node.uri()).unwrap();
        assert!(
            std::ptr::eq(resolved, node),
            "{} resolved to a different node",
            node.uri()
        );
    }
}

#[test]
fn root_resolves_to_configured_root() {
    let tree = tree();
    let root = tree.resolve("/").unwrap();
    assert!(std::ptr::eq(root, tree.root().unwrap()));
    assert_eq!(root.title(), Some("Municipal Services"));
}

#[test]
fn nested_nodes_resolve_through_parents() {
    let tree = tree();
    let areas = tree.resolve("/areas").unwrap();
    let admin = areas.child("admin").unwrap();
    let finance = areas.child("gov").and_then(|gov| gov.child("finance")).unwrap();

    assert!(std::ptr::eq(tree.resolve("/areas/admin").unwrap(), admin));
    assert!(std::ptr::eq(tree.resolve("/areas/gov/finance").unwrap(), finance));
}

#[test]
fn intermediate_node_is_a_valid_target() {
    let tree = tree();
    let gov = tree.resolve("/areas/gov").unwrap();
    assert_eq!(gov.title(), Some("Government Area"));
    assert_eq!(gov.children().len(), 8);
}

#[test]
fn unknown_uris_fail_with_original_uri() {
    let tree = tree();
    for uri in ["/non-existent", "/areas/non-existent", "invalid-uri"] {
        let err = tree.resolve(uri).unwrap_err();
        assert_eq!(err, RouteError::not_found(uri));
        assert_eq!(err.to_string(), format!("Route node not found for URI: {uri}"));
    }
}

#[test]
fn main_navigation_lists_area_items() {
    let group = tree().nav_main().unwrap();
    assert_eq!(group.label.as_deref(), Some("Areas"));

    let titles: Vec<&str> = group.items.iter().map(|item| item.title.as_str()).collect();
    assert_eq!(titles, vec!["Administration", "Government Area", "Personal Area"]);

    let personal: Vec<&str> = group.items[2]
        .sub_items
        .iter()
        .map(|sub| sub.uri.as_str())
        .collect();
    assert_eq!(
        personal,
        vec!["/areas/personal/profile", "/areas/personal/notifications"]
    );
    assert!(group.items[0].sub_items.is_empty());
    assert_eq!(group.items[1].sub_items.len(), 8);
}

#[test]
fn secondary_navigation_lists_about_pages() {
    let uris: Vec<String> = tree().nav_secondary().into_iter().map(|item| item.uri).collect();
    assert_eq!(uris, vec!["/about-author", "/about-project"]);
}

#[test]
fn grandchildren_with_other_tags_are_skipped() {
    let tree = RouteTree::new(
        None,
        vec![RouteNode::new("areas")
            .with_title("Areas")
            .with_placement(SidebarPlacement::NavMainRoot)
            .with_child(
                RouteNode::new("child")
                    .with_title("Child")
                    .with_placement(SidebarPlacement::NavMainItem)
                    .with_child(
                        RouteNode::new("included")
                            .with_title("Included")
                            .with_placement(SidebarPlacement::NavMainItem),
                    )
                    .with_child(
                        RouteNode::new("excluded")
                            .with_title("Excluded")
                            .with_placement(SidebarPlacement::NavSecondaryItem),
                    ),
            )],
    )
    .unwrap();

    let group = tree.nav_main().unwrap();
    let sub_titles: Vec<&str> = group.items[0]
        .sub_items
        .iter()
        .map(|sub| sub.title.as_str())
        .collect();
    assert_eq!(sub_titles, vec!["Included"]);
    assert_eq!(tree.nav_secondary().len(), 1);
}

#[test]
fn every_menu_entry_resolves() {
    let tree = tree();
    let group = tree.nav_main().unwrap();

    let mut uris: Vec<String> = Vec::new();
    for item in &group.items {
        uris.push(item.uri.clone());
        uris.extend(item.sub_items.iter().map(|sub| sub.uri.clone()));
    }
    uris.extend(tree.nav_secondary().into_iter().map(|item| item.uri));

    assert_eq!(uris.len(), 15);
    for uri in uris {
        assert!(tree.resolve(&uri).is_ok(), "dangling menu entry {uri}");
    }
}
