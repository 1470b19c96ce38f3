//! HTML attribute maps.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::escape::escape;

/// An ordered set of HTML attributes.
///
/// Attributes render in key order, so output is deterministic. Values are
/// escaped when rendered, not when stored.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct HtmlAttrs {
    attrs: BTreeMap<String, String>,
}

impl HtmlAttrs {
    /// Creates an empty attribute set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets an attribute, replacing any existing value.
    pub fn set(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.attrs.insert(key.into(), value.into());
    }

    /// Gets an attribute value.
    pub fn get(&self, key: &str) -> Option<&String> {
        self.attrs.get(key)
    }

    /// Removes an attribute, returning its value if present.
    pub fn remove(&mut self, key: &str) -> Option<String> {
        self.attrs.remove(key)
    }

    /// Builder method to set an attribute.
    #[must_use]
    pub fn with(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.set(key, value);
        self
    }

    /// Copies every attribute from `other` into this set; `other` wins on
    /// conflicts.
    pub fn merge(&mut self, other: &Self) {
        for (key, value) in &other.attrs {
            self.attrs.insert(key.clone(), value.clone());
        }
    }

    /// Appends a CSS class to the `class` attribute.
    ///
    /// Creates the attribute when absent; a class already present is not
    /// added twice.
    pub fn add_css_class(&mut self, class: &str) {
        match self.attrs.get_mut("class") {
            Some(existing) => {
                if !existing.split_whitespace().any(|c| c == class) {
                    existing.push(' ');
                    existing.push_str(class);
                }
            }
            None => {
                self.attrs.insert("class".to_string(), class.to_string());
            }
        }
    }

    /// Returns whether the set is empty.
    pub fn is_empty(&self) -> bool {
        self.attrs.is_empty()
    }

    /// Iterates over the attributes in key order.
    pub fn iter(&self) -> impl Iterator<Item = (&String, &String)> {
        self.attrs.iter()
    }

    /// Renders the attributes as an HTML attribute string.
    pub fn to_html(&self) -> String {
        self.attrs
            .iter()
            .map(|(k, v)| format!(r#"{k}="{}""#, escape(v)))
            .collect::<Vec<_>>()
            .join(" ")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_get_with() {
        let attrs = HtmlAttrs::new()
            .with("class", "form-control")
            .with("id", "my-input");
        assert_eq!(attrs.get("class"), Some(&"form-control".to_string()));
        assert_eq!(attrs.get("id"), Some(&"my-input".to_string()));
        assert_eq!(attrs.get("name"), None);
    }

    #[test]
    fn test_to_html_is_ordered_and_escaped() {
        let attrs = HtmlAttrs::new()
            .with("id", "x")
            .with("class", "a \"b\"");
        assert_eq!(attrs.to_html(), r#"class="a &quot;b&quot;" id="x""#);
    }

    #[test]
    fn test_add_css_class_injects() {
        let mut attrs = HtmlAttrs::new();
        attrs.add_css_class("form-group");
        assert_eq!(attrs.get("class"), Some(&"form-group".to_string()));
    }

    #[test]
    fn test_add_css_class_appends_once() {
        let mut attrs = HtmlAttrs::new().with("class", "row");
        attrs.add_css_class("form-group");
        attrs.add_css_class("form-group");
        assert_eq!(attrs.get("class"), Some(&"row form-group".to_string()));
    }

    #[test]
    fn test_merge_other_wins() {
        let mut attrs = HtmlAttrs::new().with("class", "a").with("id", "x");
        attrs.merge(&HtmlAttrs::new().with("class", "b"));
        assert_eq!(attrs.get("class"), Some(&"b".to_string()));
        assert_eq!(attrs.get("id"), Some(&"x".to_string()));
    }

    #[test]
    fn test_deserialize_from_map() {
        let attrs: HtmlAttrs =
            serde_json::from_str(r#"{"class": "btn", "data-role": "submit"}"#).unwrap();
        assert_eq!(attrs.get("class"), Some(&"btn".to_string()));
        assert_eq!(attrs.get("data-role"), Some(&"submit".to_string()));
    }
}
