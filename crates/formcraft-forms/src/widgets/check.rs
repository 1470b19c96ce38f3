//! Toggle input widgets.

use formcraft_html::{begin_tag, escape, HtmlAttrs};

use super::{input_id, is_truthy, Widget};

/// A single checkbox widget.
///
/// Emits a hidden companion input carrying `0` before the checkbox, so an
/// unchecked box still submits a value for the attribute.
#[derive(Debug, Clone, Default)]
pub struct Checkbox {
    /// Label text enclosing the checkbox.
    pub label: Option<String>,
}

impl Checkbox {
    /// Creates a checkbox.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the enclosing label text.
    #[must_use]
    pub fn label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }
}

impl Widget for Checkbox {
    fn render(&self, name: &str, value: Option<&str>, attrs: &HtmlAttrs) -> String {
        let id = input_id(name, attrs);
        let hidden = begin_tag(
            "input",
            &HtmlAttrs::new()
                .with("type", "hidden")
                .with("name", name)
                .with("value", "0"),
        );

        let mut attrs = attrs.clone();
        attrs.set("type", "checkbox");
        attrs.set("name", name);
        attrs.set("id", id);
        attrs.set("value", "1");
        if is_truthy(value) {
            attrs.set("checked", "checked");
        }
        let input = begin_tag("input", &attrs);

        match &self.label {
            Some(label) => format!("{hidden}<label>{input} {}</label>", escape(label)),
            None => format!("{hidden}{input}"),
        }
    }

    fn input_type(&self) -> &str {
        "checkbox"
    }
}

/// A single radio input widget.
#[derive(Debug, Clone)]
pub struct Radio {
    /// Label text for the radio.
    pub label: Option<String>,
    /// Whether the input is enclosed by its label.
    pub enclosed_by_label: bool,
}

impl Default for Radio {
    fn default() -> Self {
        Self {
            label: None,
            enclosed_by_label: true,
        }
    }
}

impl Radio {
    /// Creates a radio input.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the label text.
    #[must_use]
    pub fn label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    /// Controls whether the input is enclosed by its label.
    #[must_use]
    pub fn enclosed_by_label(mut self, enclosed: bool) -> Self {
        self.enclosed_by_label = enclosed;
        self
    }
}

impl Widget for Radio {
    fn render(&self, name: &str, value: Option<&str>, attrs: &HtmlAttrs) -> String {
        let id = input_id(name, attrs);
        let mut attrs = attrs.clone();
        attrs.set("type", "radio");
        attrs.set("name", name);
        attrs.set("id", id);
        attrs.set("value", "1");
        if is_truthy(value) {
            attrs.set("checked", "checked");
        }
        let input = begin_tag("input", &attrs);

        match &self.label {
            Some(label) if self.enclosed_by_label => {
                format!("<label>{input} {}</label>", escape(label))
            }
            _ => input,
        }
    }

    fn input_type(&self) -> &str {
        "radio"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_checkbox_has_hidden_companion() {
        let html = Checkbox::new().render("active", None, &HtmlAttrs::new());
        assert!(html.starts_with(r#"<input name="active" type="hidden" value="0">"#));
        assert!(html.contains(r#"type="checkbox""#));
        assert!(!html.contains("checked"));
    }

    #[test]
    fn test_checkbox_checked_and_labeled() {
        let html = Checkbox::new()
            .label("Active")
            .render("active", Some("1"), &HtmlAttrs::new());
        assert!(html.contains(r#"checked="checked""#));
        assert!(html.contains("<label>"));
        assert!(html.contains("Active</label>"));
    }

    #[test]
    fn test_radio_enclosed_by_label() {
        let html = Radio::new()
            .label("Yes")
            .render("confirm", Some("1"), &HtmlAttrs::new());
        assert!(html.starts_with("<label>"));
        assert!(html.contains(r#"type="radio""#));
        assert!(html.contains(r#"checked="checked""#));
        assert!(html.ends_with("Yes</label>"));
    }

    #[test]
    fn test_radio_bare() {
        let html = Radio::new()
            .label("Yes")
            .enclosed_by_label(false)
            .render("confirm", None, &HtmlAttrs::new());
        assert!(!html.contains("<label>"));
        assert!(html.contains(r#"type="radio""#));
    }
}
