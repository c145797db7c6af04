//! The portal's static route configuration.

use crate::error::TreeError;

use super::tree::{Icon, RouteNode, RouteTree, SidebarPlacement};

/// URI of the landing page.
pub const HOME: &str = "/";
/// URI of the author page.
pub const ABOUT_AUTHOR: &str = "/about-author";
/// URI of the project page.
pub const ABOUT_PROJECT: &str = "/about-project";
/// URI of the sign-in placeholder.
pub const SIGN_IN: &str = "/sign-in";
/// URI of the sign-up placeholder.
pub const SIGN_UP: &str = "/sign-up";
/// URI guests are sent to from the landing page.
pub const GUEST_ENTRY: &str = "/areas/gov";

/// Build the portal's route tree.
pub fn portal_routes() -> Result<RouteTree, TreeError> {
    use SidebarPlacement::*;

    let root = RouteNode::root()
        .with_title("Municipal Services")
        .with_subtitle("Your Digital Gateway to Local Government Services");

    let gov = RouteNode::new("gov")
        .with_title("Government Area")
        .with_subtitle("View and manage government-related areas and their information")
        .with_icon(Icon::Building)
        .with_placement(NavMainItem)
        .with_child(department(
            "finance",
            "Finance, Infrastructure & Planning",
            "Managing municipal finances, infrastructure development, and urban planning initiatives",
            Icon::Building,
        ))
        .with_child(department(
            "public-services",
            "Public Services & Urban Mobility",
            "Overseeing public utilities, maintenance services, and urban transportation systems",
            Icon::Bus,
        ))
        .with_child(department(
            "community",
            "Community Engagement",
            "Fostering connections with residents and promoting neighborhood participation",
            Icon::Users,
        ))
        .with_child(department(
            "general",
            "General Secretariat",
            "Coordinating administrative functions and supporting overall municipal operations",
            Icon::FileText,
        ))
        .with_child(department(
            "legal",
            "Legal & Institutional Affairs",
            "Providing legal counsel and managing institutional relationships",
            Icon::Scale,
        ))
        .with_child(department(
            "council",
            "Deliberative Council",
            "Legislative body responsible for policy-making and municipal governance",
            Icon::Landmark,
        ))
        .with_child(department(
            "accounts",
            "Court of Accounts",
            "Overseeing municipal finances and ensuring proper use of public funds",
            Icon::FileText,
        ))
        .with_child(department(
            "justice",
            "Misdemeanor Court",
            "Handling minor legal infractions and maintaining local order",
            Icon::Gavel,
        ));

    let personal = RouteNode::new("personal")
        .with_title("Personal Area")
        .with_subtitle("Manage your personal information and private data")
        .with_icon(Icon::User)
        .with_placement(NavMainItem)
        .with_child(
            RouteNode::new("profile")
                .with_title("Profile")
                .with_icon(Icon::User)
                .with_placement(NavMainItem),
        )
        .with_child(
            RouteNode::new("notifications")
                .with_title("Notifications")
                .with_icon(Icon::Bell)
                .with_placement(NavMainItem),
        );

    let areas = RouteNode::new("areas")
        .with_title("Areas")
        .with_subtitle("Explore different areas of the municipal platform")
        .with_icon(Icon::Building)
        .with_placement(NavMainRoot)
        .with_child(
            RouteNode::new("admin")
                .with_title("Administration")
                .with_subtitle("Administrative tools")
                .with_icon(Icon::Users)
                .with_placement(NavMainItem),
        )
        .with_child(gov)
        .with_child(personal);

    RouteTree::new(
        Some(root),
        vec![
            RouteNode::new("about-author")
                .with_title("About the Author")
                .with_subtitle("Meet the developer behind this project")
                .with_icon(Icon::User)
                .with_placement(NavSecondaryItem),
            RouteNode::new("about-project")
                .with_title("About this Project")
                .with_subtitle("Building better software for municipal services")
                .with_icon(Icon::FileText)
                .with_placement(NavSecondaryItem),
            areas,
            RouteNode::new("sign-in")
                .with_title("Welcome Back")
                .with_subtitle("Sign in to your account to continue")
                .with_icon(Icon::LogIn),
            RouteNode::new("sign-up")
                .with_title("Get Started")
                .with_subtitle("Create an account to continue")
                .with_icon(Icon::UserPlus),
        ],
    )
}

fn department(segment: &str, title: &str, subtitle: &str, icon: Icon) -> RouteNode {
    RouteNode::new(segment)
        .with_title(title)
        .with_subtitle(subtitle)
        .with_icon(icon)
        .with_placement(SidebarPlacement::NavMainItem)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn portal_tree_builds() {
        let tree = portal_routes().unwrap();
        assert_eq!(tree.len(), 19);
        assert_eq!(tree.root().and_then(RouteNode::title), Some("Municipal Services"));
    }

    #[test]
    fn top_level_routes_in_order() {
        let tree = portal_routes().unwrap();
        let uris: Vec<&str> = tree.top_level().iter().map(RouteNode::uri).collect();
        assert_eq!(
            uris,
            vec![ABOUT_AUTHOR, ABOUT_PROJECT, "/areas", SIGN_IN, SIGN_UP]
        );
    }

    #[test]
    fn placements_match_navigation_roles() {
        let tree = portal_routes().unwrap();
        let placement = |uri: &str| tree.resolve(uri).unwrap().sidebar_placement();

        assert_eq!(placement(ABOUT_AUTHOR), Some(SidebarPlacement::NavSecondaryItem));
        assert_eq!(placement(ABOUT_PROJECT), Some(SidebarPlacement::NavSecondaryItem));
        assert_eq!(placement("/areas"), Some(SidebarPlacement::NavMainRoot));
        assert_eq!(placement(SIGN_IN), None);
        assert_eq!(placement(HOME), None);
    }

    #[test]
    fn government_area_lists_eight_departments() {
        let tree = portal_routes().unwrap();
        let gov = tree.resolve(GUEST_ENTRY).unwrap();
        let segments: Vec<&str> = gov.children().iter().map(RouteNode::segment).collect();
        assert_eq!(
            segments,
            vec![
                "finance",
                "public-services",
                "community",
                "general",
                "legal",
                "council",
                "accounts",
                "justice",
            ]
        );
    }
}
