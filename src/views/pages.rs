//! Page bodies. Each page that describes a route node resolves it first and
//! lets a missing node propagate to the caller.

use crate::error::RouteError;
use crate::routes::catalog::{ABOUT_AUTHOR, ABOUT_PROJECT, GUEST_ENTRY, HOME, SIGN_IN, SIGN_UP};
use crate::routes::{RouteNode, RouteTree};

use super::html::{escape, icon, link};
use super::layout::{card, grid, illustration, page, two_column, PageHeader};

/// Rendered page: document title plus body markup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Page {
    pub title: Option<String>,
    pub body: String,
}

impl Page {
    fn new(node: &RouteNode, body: String) -> Self {
        Self {
            title: node.title().map(str::to_string),
            body,
        }
    }
}

/// Configuration of an auth placeholder page.
#[derive(Debug, Clone, Copy)]
pub struct AuthPage {
    pub uri: &'static str,
    pub image_src: &'static str,
    pub alt_text: &'static str,
    pub placeholder_text: &'static str,
}

/// Sign-in placeholder.
pub const SIGN_IN_PAGE: AuthPage = AuthPage {
    uri: SIGN_IN,
    image_src: "/undraw_login_weas.svg",
    alt_text: "Login",
    placeholder_text: "Sign-in component will be implemented in future iterations",
};

/// Sign-up placeholder.
pub const SIGN_UP_PAGE: AuthPage = AuthPage {
    uri: SIGN_UP,
    image_src: "/undraw_hello_ccwj.svg",
    alt_text: "Welcome",
    placeholder_text: "Sign-up component will be implemented in future iterations",
};

/// Landing page.
pub fn home(tree: &RouteTree) -> Result<Page, RouteError> {
    let node = tree.resolve(HOME)?;

    let left = format!(
        r#"{}<div class="flex flex-col sm:flex-row gap-4">{}{}</div><p class="text-sm text-muted-foreground max-w-md">Note: Some administrative processes require a registered account and may not be available to guests.</p>"#,
        PageHeader::from_node(node)
            .with_description(
                "Access municipal services, submit requests, and manage your civic obligations through our secure online platform."
            )
            .render(),
        link(SIGN_IN, "Sign In to Your Account", "button"),
        link(GUEST_ENTRY, "Continue Without Signing In", "button button-outline"),
    );
    let right = illustration("/undraw_city-life_l74x.svg", "City life illustration");

    Ok(Page::new(node, page(&two_column(&left, &right))))
}

/// Author page.
pub fn about_author(tree: &RouteTree) -> Result<Page, RouteError> {
    let node = tree.resolve(ABOUT_AUTHOR)?;

    let profile = card(
        "Franco Exequiel Becvort",
        &format!(
            r#"<img src="/profile.png" alt="Franco Exequiel Becvort" width="192" height="192" class="rounded-xl"><p class="text-center">Based in Lisbon, Portugal</p><p>{}</p><p>{}</p>"#,
            link("https://pollito.dev/", "pollito.dev", "hover:underline"),
            link("https://linkedin.com/in/franco-becvort", "LinkedIn Profile", "hover:underline"),
        ),
    );
    let story = [
        card(
            "Hey there!",
            "<p>A software developer originally from Argentina who now calls Lisbon home, known online as \"Pollito\". Passionate about clean code and user-friendly experiences, and about building things that make life easier for people.</p>",
        ),
        card(
            "My Journey",
            "<p>From a background in Natural Sciences to government digital services in Argentina and fintech solutions for major banks, including one of the country's first QR-based payment systems and several solutions for the city of San Luis.</p>",
        ),
        card(
            "What I Do",
            "<ul><li>Backend development and microservices</li><li>Cloud solutions</li><li>Full-stack web development</li></ul>",
        ),
    ]
    .concat();

    let body = format!(
        r#"{}<div class="grid grid-cols-1 lg:grid-cols-3 gap-8"><div class="lg:col-span-1">{profile}</div><div class="lg:col-span-2 space-y-6">{story}</div></div>"#,
        PageHeader::from_node(node).render(),
    );

    Ok(Page::new(node, page(&body)))
}

/// Project page.
pub fn about_project(tree: &RouteTree) -> Result<Page, RouteError> {
    let node = tree.resolve(ABOUT_PROJECT)?;

    let sections = [
        card(
            "Our Philosophy",
            "<p>Good code has two requirements:</p><ul><li>It solves the problem</li><li>It doesn't suck to read</li></ul><p>The most sophisticated design choice is often simplicity: things that are easy to understand, easy to change, and easy to deploy.</p>",
        ),
        card(
            "What We're Building",
            r#"<p>This project is inspired by <a href="https://sigem.sanluislaciudad.gob.ar/">SIGEM (Sistema de Gestión Municipal)</a>, a municipal management platform developed for the city of San Luis, Argentina. It included:</p><ul><li>Citizen portal for permits, payments, and public services</li><li>Administrative backend for city employees</li><li>Financial modules for billing and payment processing</li><li>Document management for permits and records</li><li>Reporting dashboards for city management</li></ul>"#,
        ),
        card(
            "Tech Stack & Approach",
            "<ul><li>Monolith-first approach with one repo and deploy target</li><li>Vertical slices instead of layered architecture</li><li>Single relational database as source of truth</li><li>Optimizing for the realistic 80% use case</li></ul>",
        ),
        card(
            "The Vision",
            "<p>Large software doesn't have to mean complicated software. Choosing simplicity and proven technologies keeps systems maintainable and a joy to work with.</p>",
        ),
    ]
    .concat();

    let body = format!(
        r#"{}<div class="space-y-6">{sections}</div>"#,
        PageHeader::from_node(node).render()
    );

    Ok(Page::new(node, page(&body)))
}

/// Listing page for a node: header plus one card per child.
pub fn area_grid(tree: &RouteTree, uri: &str) -> Result<Page, RouteError> {
    let node = tree.resolve(uri)?;

    let mut body = PageHeader::from_node(node).render();
    if node.has_children() {
        let cards: Vec<String> = node.children().iter().map(area_card).collect();
        body.push_str(&grid(&cards));
    }

    Ok(Page::new(node, page(&body)))
}

/// Link card for one child area.
pub fn area_card(node: &RouteNode) -> String {
    let glyph = match node.icon() {
        Some(glyph) => icon(glyph, "w-8 h-8 text-primary-foreground"),
        None => r#"<div class="w-12 h-12 bg-primary/20 rounded-full"></div>"#.to_string(),
    };
    let title = node
        .title()
        .map(|t| format!(r#"<h3 class="font-semibold text-lg mb-1">{}</h3>"#, escape(t)))
        .unwrap_or_default();
    let subtitle = node
        .subtitle()
        .map(|s| format!(r#"<p class="text-sm text-muted-foreground mt-1">{}</p>"#, escape(s)))
        .unwrap_or_default();

    format!(
        r#"<a href="{}" class="area-card"><div class="card"><div class="flex gap-4 items-start"><div class="w-16 h-16 bg-primary rounded-full flex items-center justify-center">{glyph}</div><div class="flex-1 min-w-0">{title}{subtitle}</div></div></div></a>"#,
        escape(node.uri())
    )
}

/// Sign-in / sign-up placeholder page.
pub fn auth(tree: &RouteTree, config: &AuthPage) -> Result<Page, RouteError> {
    let node = tree.resolve(config.uri)?;

    let left = format!(
        r#"{}<div class="mt-8 p-6 bg-muted rounded-lg border"><p class="text-center text-muted-foreground">{}</p></div>"#,
        PageHeader::from_node(node).render(),
        escape(config.placeholder_text)
    );
    let right = format!(
        r#"<div class="w-full max-w-md"><img src="{}" alt="{}" width="500" height="400" class="w-full h-auto"></div>"#,
        escape(config.image_src),
        escape(config.alt_text)
    );

    Ok(Page::new(node, page(&two_column(&left, &right))))
}

/// Diagnostic page showing data fetched from an upstream.
pub fn upstream_data(data: &serde_json::Value) -> Page {
    Page {
        title: Some("Upstream Data".to_string()),
        body: format!(
            r#"<div class="flex flex-col gap-4"><p>The data is: <strong>{}</strong></p></div>"#,
            escape(&data.to_string())
        ),
    }
}

/// Body for URLs that match no page.
pub fn not_found() -> Page {
    let left = card(
        "Page Not Found",
        r#"<p class="card-description">We are sorry, but the page you are looking for does not exist.</p><p>The link you followed may be broken, or the page may have been removed.</p><a href="/" class="button">Go to Homepage</a>"#,
    );
    let right = illustration("/undraw_void_wez2.svg", "Page not found illustration");

    Page {
        title: Some("Page Not Found".to_string()),
        body: page(&two_column(&left, &right)),
    }
}

/// Generic failure body with an error reference.
pub fn error(reference: &str) -> Page {
    let header = PageHeader {
        title: Some(super::shell::SITE_NAME),
        subtitle: Some("Your Digital Gateway to Local Government Services"),
        ..PageHeader::default()
    };
    let left = card(
        "Something went wrong",
        &format!(
            r#"<p class="card-description">We are sorry, but something unexpected happened.</p><p class="text-destructive">Error Reference: {}</p><a href="/" class="button button-secondary">Go to Home</a>"#,
            escape(reference)
        ),
    );
    let right = illustration("/undraw_connection-lost_am29.svg", "Connection lost illustration");

    Page {
        title: Some("Something went wrong".to_string()),
        body: page(&format!("{}{}", header.render(), two_column(&left, &right))),
    }
}
