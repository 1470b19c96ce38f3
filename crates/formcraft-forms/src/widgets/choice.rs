//! Choice widgets driven by an ordered item list.

use formcraft_html::{begin_tag, escape, tag, HtmlAttrs};

use super::{input_id, Widget};

/// Default row count for list-box selects.
const LIST_BOX_SIZE: usize = 4;

/// A `<select>` widget.
///
/// Choices render in the order given. Covers both the drop-down and the
/// list-box field kinds; [`Select::list_box`] switches to the multi-row
/// presentation.
#[derive(Debug, Clone, Default)]
pub struct Select {
    /// Ordered `(value, label)` choices.
    pub choices: Vec<(String, String)>,
    /// Optional blank option rendered first.
    pub prompt: Option<String>,
    /// Explicit `size` attribute (list-box mode).
    pub size: Option<usize>,
}

impl Select {
    /// Creates a select with the given choices.
    pub fn new(choices: Vec<(String, String)>) -> Self {
        Self {
            choices,
            prompt: None,
            size: None,
        }
    }

    /// Adds a blank option with the given label before the choices.
    #[must_use]
    pub fn prompt(mut self, label: impl Into<String>) -> Self {
        self.prompt = Some(label.into());
        self
    }

    /// Switches to list-box presentation.
    #[must_use]
    pub fn list_box(mut self) -> Self {
        self.size = Some(LIST_BOX_SIZE);
        self
    }
}

impl Widget for Select {
    fn render(&self, name: &str, value: Option<&str>, attrs: &HtmlAttrs) -> String {
        let id = input_id(name, attrs);
        let mut attrs = attrs.clone();
        attrs.set("name", name);
        attrs.set("id", id);
        if let Some(size) = self.size {
            if attrs.get("size").is_none() {
                attrs.set("size", size.to_string());
            }
        }

        let mut options = String::new();
        if let Some(prompt) = &self.prompt {
            options.push_str(&tag(
                "option",
                &escape(prompt),
                &HtmlAttrs::new().with("value", ""),
            ));
        }
        for (choice, label) in &self.choices {
            let mut option_attrs = HtmlAttrs::new().with("value", choice);
            if value == Some(choice.as_str()) {
                option_attrs.set("selected", "selected");
            }
            options.push_str(&tag("option", &escape(label), &option_attrs));
        }

        tag("select", &options, &attrs)
    }

    fn input_type(&self) -> &str {
        "select"
    }
}

/// A group of radio inputs, one per choice.
#[derive(Debug, Clone, Default)]
pub struct RadioGroup {
    /// Ordered `(value, label)` choices.
    pub choices: Vec<(String, String)>,
}

impl RadioGroup {
    /// Creates a radio group with the given choices.
    pub fn new(choices: Vec<(String, String)>) -> Self {
        Self { choices }
    }
}

impl Widget for RadioGroup {
    fn render(&self, name: &str, value: Option<&str>, attrs: &HtmlAttrs) -> String {
        render_group("radio", name, name, value, &self.choices, attrs)
    }

    fn input_type(&self) -> &str {
        "radio"
    }
}

/// A group of checkboxes, one per choice.
///
/// Inputs are named `{name}[]` so every checked value submits.
#[derive(Debug, Clone, Default)]
pub struct CheckboxGroup {
    /// Ordered `(value, label)` choices.
    pub choices: Vec<(String, String)>,
}

impl CheckboxGroup {
    /// Creates a checkbox group with the given choices.
    pub fn new(choices: Vec<(String, String)>) -> Self {
        Self { choices }
    }
}

impl Widget for CheckboxGroup {
    fn render(&self, name: &str, value: Option<&str>, attrs: &HtmlAttrs) -> String {
        let input_name = format!("{name}[]");
        render_group("checkbox", name, &input_name, value, &self.choices, attrs)
    }

    fn input_type(&self) -> &str {
        "checkbox"
    }
}

// Shared attrs apply to every generated input; the per-item id, value and
// checked state always win.
fn render_group(
    input_type: &str,
    name: &str,
    input_name: &str,
    value: Option<&str>,
    choices: &[(String, String)],
    attrs: &HtmlAttrs,
) -> String {
    let mut html = String::new();
    for (i, (choice, label)) in choices.iter().enumerate() {
        let mut attrs = attrs.clone();
        attrs.set("type", input_type);
        attrs.set("name", input_name);
        attrs.set("id", format!("id_{name}_{i}"));
        attrs.set("value", choice);
        attrs.remove("checked");
        if value == Some(choice.as_str()) {
            attrs.set("checked", "checked");
        }
        html.push_str(&format!(
            "<label>{} {}</label>\n",
            begin_tag("input", &attrs),
            escape(label)
        ));
    }
    html
}
