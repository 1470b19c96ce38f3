//! Tag emission helpers.

use crate::attrs::HtmlAttrs;
use crate::escape::escape;

/// Elements that never carry content or a closing tag.
const VOID_ELEMENTS: &[&str] = &[
    "area", "base", "br", "col", "embed", "hr", "img", "input", "link", "meta", "param", "source",
    "track", "wbr",
];

fn is_void(name: &str) -> bool {
    VOID_ELEMENTS.contains(&name)
}

/// Renders an opening tag.
pub fn begin_tag(name: &str, attrs: &HtmlAttrs) -> String {
    if attrs.is_empty() {
        format!("<{name}>")
    } else {
        format!("<{name} {}>", attrs.to_html())
    }
}

/// Renders a closing tag.
pub fn end_tag(name: &str) -> String {
    format!("</{name}>")
}

/// Renders a complete element.
///
/// `content` is emitted verbatim; escape it first when it is plain text.
/// Void elements ignore `content` and render as a single tag.
pub fn tag(name: &str, content: &str, attrs: &HtmlAttrs) -> String {
    if is_void(name) {
        begin_tag(name, attrs)
    } else {
        format!("{}{content}{}", begin_tag(name, attrs), end_tag(name))
    }
}

/// Renders an anchor element. Text and href are escaped.
pub fn a(text: &str, href: &str, attrs: &HtmlAttrs) -> String {
    let mut attrs = attrs.clone();
    attrs.set("href", href);
    tag("a", &escape(text), &attrs)
}

/// Renders a submit input element.
pub fn submit_input(title: &str, attrs: &HtmlAttrs) -> String {
    let mut attrs = attrs.clone();
    attrs.set("type", "submit");
    attrs.set("value", title);
    begin_tag("input", &attrs)
}

/// Renders a submit button element.
pub fn submit_button(title: &str, attrs: &HtmlAttrs) -> String {
    let mut attrs = attrs.clone();
    attrs.set("type", "submit");
    tag("button", &escape(title), &attrs)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_begin_end_tag() {
        let attrs = HtmlAttrs::new().with("class", "form-group");
        assert_eq!(begin_tag("div", &attrs), r#"<div class="form-group">"#);
        assert_eq!(begin_tag("div", &HtmlAttrs::new()), "<div>");
        assert_eq!(end_tag("div"), "</div>");
    }

    #[test]
    fn test_tag_with_content() {
        let html = tag("span", "hello", &HtmlAttrs::new());
        assert_eq!(html, "<span>hello</span>");
    }

    #[test]
    fn test_void_element_has_no_closing_tag() {
        let html = tag("input", "ignored", &HtmlAttrs::new().with("type", "text"));
        assert_eq!(html, r#"<input type="text">"#);
    }

    #[test]
    fn test_anchor() {
        let html = a("Cancel", "/posts?page=1&sort=asc", &HtmlAttrs::new().with("class", "btn"));
        assert!(html.starts_with("<a "));
        assert!(html.contains(r#"href="/posts?page=1&amp;sort=asc""#));
        assert!(html.contains(r#"class="btn""#));
        assert!(html.ends_with(">Cancel</a>"));
    }

    #[test]
    fn test_submit_input() {
        let html = submit_input("Create", &HtmlAttrs::new().with("class", "btn btn-success"));
        assert!(html.contains(r#"type="submit""#));
        assert!(html.contains(r#"value="Create""#));
        assert!(html.contains(r#"class="btn btn-success""#));
        assert!(!html.contains("</input>"));
    }

    #[test]
    fn test_submit_button() {
        let html = submit_button("Save & Close", &HtmlAttrs::new());
        assert!(html.contains(r#"<button type="submit">"#));
        assert!(html.contains("Save &amp; Close</button>"));
    }
}
