//! Page shell: sidebar, header and footer around every page.

use crate::routes::{is_active, NavItem, NavMainGroup, RouteTree};

use super::html::{escape, icon};

/// Site name shown in the document title and the sidebar brand.
pub const SITE_NAME: &str = "Municipal Services";

const SITE_DESCRIPTION: &str = "Access municipal services, submit requests, and manage your civic obligations through our secure online platform.";

/// Everything the chrome needs to render around a page body.
#[derive(Debug, Clone, Copy)]
pub struct Shell<'a> {
    pub tree: &'a RouteTree,
    pub current_path: &'a str,
    pub locality: &'a str,
}

impl<'a> Shell<'a> {
    pub fn new(tree: &'a RouteTree, current_path: &'a str, locality: &'a str) -> Self {
        Self {
            tree,
            current_path,
            locality,
        }
    }

    /// Wrap a page body in the full document with navigation chrome.
    pub fn render(&self, page_title: Option<&str>, body: &str) -> String {
        let chrome = format!(
            r#"<div class="sidebar-provider">{}<div class="sidebar-inset">{}<main class="flex flex-1 flex-col gap-4 p-4 pt-0">{body}</main>{}</div></div>"#,
            self.sidebar(),
            header(),
            footer(),
        );
        document(page_title, &chrome)
    }

    fn sidebar(&self) -> String {
        let mut out = String::from(r#"<aside class="sidebar" data-variant="inset">"#);

        out.push_str(&format!(
            r#"<div class="sidebar-header"><a href="/" class="sidebar-brand"><img src="/government-fill.svg" alt="Government" class="size-4 invert"><span class="truncate font-medium">{}</span><span class="truncate text-xs">{}</span></a></div>"#,
            SITE_NAME,
            escape(self.locality)
        ));

        out.push_str(r#"<div class="sidebar-content">"#);
        if let Some(group) = self.tree.nav_main() {
            out.push_str(&nav_main(&group, self.current_path));
        }
        out.push_str(&nav_secondary(&self.tree.nav_secondary(), self.current_path));
        out.push_str("</div>");

        out.push_str(&format!(
            r#"<div class="sidebar-footer px-4 py-2 text-xs">Version {}</div>"#,
            env!("CARGO_PKG_VERSION")
        ));
        out.push_str("</aside>");
        out
    }
}

/// Primary navigation group with collapsible sub-items.
pub fn nav_main(group: &NavMainGroup, current_path: &str) -> String {
    let mut out = String::from(r#"<nav class="sidebar-group nav-main">"#);
    if let Some(label) = &group.label {
        out.push_str(&format!(
            r#"<div class="sidebar-group-label">{}</div>"#,
            escape(label)
        ));
    }
    out.push_str(r#"<ul class="sidebar-menu">"#);

    for item in &group.items {
        out.push_str(r#"<li class="sidebar-menu-item">"#);
        out.push_str(&nav_link(item, current_path));

        if !item.sub_items.is_empty() {
            out.push_str(r#"<details class="sidebar-menu-sub"><summary class="sidebar-menu-action"><span class="sr-only">Toggle</span></summary><ul>"#);
            for sub in &item.sub_items {
                out.push_str(&format!(
                    r#"<li class="sidebar-menu-sub-item"><a href="{}" data-active="{}"><span title="{}">{}</span></a></li>"#,
                    escape(&sub.uri),
                    is_active(current_path, &sub.uri),
                    escape(&sub.title),
                    escape(&sub.title)
                ));
            }
            out.push_str("</ul></details>");
        }
        out.push_str("</li>");
    }

    out.push_str("</ul></nav>");
    out
}

/// Flat secondary navigation list.
pub fn nav_secondary(items: &[NavItem], current_path: &str) -> String {
    let mut out = String::from(r#"<nav class="sidebar-group nav-secondary mt-auto"><ul class="sidebar-menu">"#);
    for item in items {
        out.push_str(r#"<li class="sidebar-menu-item">"#);
        out.push_str(&nav_link(item, current_path));
        out.push_str("</li>");
    }
    out.push_str("</ul></nav>");
    out
}

fn nav_link(item: &NavItem, current_path: &str) -> String {
    let glyph = item.icon.map(|i| icon(i, "size-4")).unwrap_or_default();
    format!(
        r#"<a href="{}" class="sidebar-menu-button" data-active="{}">{glyph}<span title="{}">{}</span></a>"#,
        escape(&item.uri),
        is_active(current_path, &item.uri),
        escape(&item.title),
        escape(&item.title)
    )
}

fn header() -> String {
    r#"<header class="app-header flex h-16 shrink-0 items-center gap-2"><button type="button" class="sidebar-trigger" aria-label="Toggle Sidebar"></button><div class="separator" role="separator"></div></header>"#.to_string()
}

fn footer() -> String {
    r#"<footer class="app-footer py-4 border-t"><div class="text-center text-sm text-muted-foreground">Made by <a href="/about-author" class="text-foreground hover:underline">🐤</a> with Rust and ❤️</div></footer>"#.to_string()
}

/// Full HTML document around already-rendered content.
pub fn document(page_title: Option<&str>, content: &str) -> String {
    let title = match page_title {
        Some(title) if title != SITE_NAME => format!("{} | {}", escape(title), SITE_NAME),
        _ => SITE_NAME.to_string(),
    };
    format!(
        r#"<!DOCTYPE html><html lang="en"><head><meta charset="utf-8"><meta name="viewport" content="width=device-width, initial-scale=1"><title>{title}</title><meta name="description" content="{SITE_DESCRIPTION}"></head><body class="antialiased">{content}</body></html>"#
    )
}
