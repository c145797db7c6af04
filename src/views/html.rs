//! Markup helpers shared by every view.

use crate::routes::Icon;

/// Escape text for use in element content and quoted attribute values.
pub fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(ch),
        }
    }
    out
}

/// Glyph marker for an icon. The stylesheet maps `data-icon` to artwork.
pub fn icon(icon: Icon, class: &str) -> String {
    format!(
        r#"<i class="icon {}" data-icon="{}" aria-hidden="true"></i>"#,
        escape(class),
        icon.as_ref()
    )
}

/// Anchor with escaped href and label.
pub fn link(href: &str, label: &str, class: &str) -> String {
    format!(
        r#"<a href="{}" class="{}">{}</a>"#,
        escape(href),
        escape(class),
        escape(label)
    )
}
