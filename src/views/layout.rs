//! Page layout primitives: container, header, two-column split, grid.

use crate::routes::{Icon, RouteNode};

use super::html::{escape, icon};

/// Text shown at the top of a page.
#[derive(Debug, Clone, Copy, Default)]
pub struct PageHeader<'a> {
    pub title: Option<&'a str>,
    pub subtitle: Option<&'a str>,
    pub description: Option<&'a str>,
    pub icon: Option<Icon>,
}

impl<'a> PageHeader<'a> {
    /// Header populated from a route node.
    pub fn from_node(node: &'a RouteNode) -> Self {
        Self {
            title: node.title(),
            subtitle: node.subtitle(),
            description: None,
            icon: node.icon(),
        }
    }

    pub fn with_description(mut self, description: &'a str) -> Self {
        self.description = Some(description);
        self
    }

    pub fn render(&self) -> String {
        let mut out = String::from(r#"<div class="page-header mb-12">"#);
        if let Some(title) = self.title {
            out.push_str(r#"<div class="flex items-center gap-4">"#);
            if let Some(glyph) = self.icon {
                out.push_str(&icon(glyph, "w-12 h-12"));
            }
            out.push_str(&format!(
                r#"<h1 class="text-4xl md:text-6xl font-bold">{}</h1></div>"#,
                escape(title)
            ));
        }
        if let Some(subtitle) = self.subtitle {
            out.push_str(&format!(
                r#"<p class="subtitle text-xl md:text-2xl text-muted-foreground mt-2 mb-4">{}</p>"#,
                escape(subtitle)
            ));
        }
        if let Some(description) = self.description {
            out.push_str(&format!(r#"<p class="text-lg">{}</p>"#, escape(description)));
        }
        out.push_str("</div>");
        out
    }
}

/// Full-height page container.
pub fn page(content: &str) -> String {
    format!(
        r#"<div class="page min-h-screen bg-background text-foreground"><div class="py-16 md:py-24"><div class="max-w-7xl mx-auto px-4">{content}</div></div></div>"#
    )
}

/// Two-column section.
pub fn two_column(left: &str, right: &str) -> String {
    format!(
        r#"<div class="grid md:grid-cols-2 gap-12 items-center"><div class="space-y-6">{left}</div><div class="flex justify-center md:justify-end">{right}</div></div>"#
    )
}

/// Responsive card grid, up to four columns wide.
pub fn grid(cells: &[String]) -> String {
    format!(
        r#"<div class="grid gap-6 grid-cols-1 sm:grid-cols-2 lg:grid-cols-4">{}</div>"#,
        cells.concat()
    )
}

/// Illustration image.
pub fn illustration(src: &str, alt: &str) -> String {
    format!(
        r#"<img src="{}" alt="{}" width="600" height="400" class="w-full max-w-lg">"#,
        escape(src),
        escape(alt)
    )
}

/// Card with a title and pre-rendered body.
pub fn card(title: &str, body: &str) -> String {
    format!(
        r#"<section class="card"><header class="card-header"><h2 class="card-title">{}</h2></header><div class="card-content">{body}</div></section>"#,
        escape(title)
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn header_omits_missing_parts() {
        let html = PageHeader {
            subtitle: Some("Only subtitle"),
            ..PageHeader::default()
        }
        .render();
        assert!(!html.contains("<h1"));
        assert!(html.contains("Only subtitle"));
    }

    #[test]
    fn header_renders_icon_next_to_title() {
        let html = PageHeader {
            title: Some("Areas"),
            icon: Some(Icon::Building),
            ..PageHeader::default()
        }
        .with_description("More")
        .render();
        assert!(html.contains(r#"data-icon="building""#));
        assert!(html.contains(">Areas</h1>"));
        assert!(html.contains(">More</p>"));
    }

    #[test]
    fn grid_wraps_cells() {
        let html = grid(&["<a></a>".to_string(), "<b></b>".to_string()]);
        assert!(html.contains("lg:grid-cols-4"));
        assert!(html.contains("<a></a><b></b>"));
    }
}
