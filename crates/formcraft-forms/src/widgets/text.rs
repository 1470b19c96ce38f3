//! Text-flavored input widgets.

use formcraft_html::{begin_tag, escape, tag, HtmlAttrs};

use super::{input_id, Widget};

/// An `<input>` widget with a configurable type attribute.
///
/// Covers the text, hidden, file, password and generic-input field kinds.
#[derive(Debug, Clone)]
pub struct TextInput {
    /// The HTML input type.
    pub input_type: String,
}

impl Default for TextInput {
    fn default() -> Self {
        Self {
            input_type: "text".to_string(),
        }
    }
}

impl TextInput {
    /// Creates a text input.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a password input.
    pub fn password() -> Self {
        Self::typed("password")
    }

    /// Creates a hidden input.
    pub fn hidden() -> Self {
        Self::typed("hidden")
    }

    /// Creates a file input.
    pub fn file() -> Self {
        Self::typed("file")
    }

    /// Creates an input with the given type attribute.
    pub fn typed(input_type: impl Into<String>) -> Self {
        Self {
            input_type: input_type.into(),
        }
    }
}

impl Widget for TextInput {
    fn render(&self, name: &str, value: Option<&str>, attrs: &HtmlAttrs) -> String {
        let id = input_id(name, attrs);
        let mut attrs = attrs.clone();
        attrs.set("type", &self.input_type);
        attrs.set("name", name);
        attrs.set("id", id);

        // File inputs never echo a value back.
        if self.input_type != "file" {
            if let Some(value) = value {
                attrs.set("value", value);
            }
        }

        begin_tag("input", &attrs)
    }

    fn input_type(&self) -> &str {
        &self.input_type
    }
}

/// A `<textarea>` widget.
#[derive(Debug, Clone)]
pub struct Textarea {
    /// Number of rows.
    pub rows: usize,
}

impl Default for Textarea {
    fn default() -> Self {
        Self { rows: 4 }
    }
}

impl Textarea {
    /// Creates a textarea with the given number of rows.
    pub fn new(rows: usize) -> Self {
        Self { rows }
    }
}

impl Widget for Textarea {
    fn render(&self, name: &str, value: Option<&str>, attrs: &HtmlAttrs) -> String {
        let id = input_id(name, attrs);
        let mut attrs = attrs.clone();
        attrs.set("name", name);
        attrs.set("id", id);
        if attrs.get("rows").is_none() {
            attrs.set("rows", self.rows.to_string());
        }

        let content = value.map(escape).unwrap_or_default();
        tag("textarea", &content, &attrs)
    }

    fn input_type(&self) -> &str {
        "textarea"
    }
}
