//! Field rendering.
//!
//! [`FieldRenderer`] is the seam between the assembler and whatever turns a
//! field spec into markup. [`HtmlFieldRenderer`] is the built-in
//! implementation: it resolves the record value, dispatches on the field
//! kind, and wraps the input with its label and hint block.

use ironhtml::html;
use ironhtml_elements::Div;
use tracing::debug;

use crate::error::{FormError, Result};
use crate::fields::{FieldKind, FieldSpec, LabelMode};
use crate::model::{humanize, FormModel};
use crate::widgets::{Checkbox, CheckboxGroup, Radio, RadioGroup, Select, TextInput, Textarea, Widget};

/// Turns one field specification into markup bound to a record attribute.
pub trait FieldRenderer {
    /// Renders a single field.
    fn render_field(&self, model: &dyn FormModel, spec: &FieldSpec) -> Result<String>;
}

/// The built-in HTML field renderer.
#[derive(Debug, Clone, Copy, Default)]
pub struct HtmlFieldRenderer;

impl HtmlFieldRenderer {
    /// Creates a renderer.
    pub fn new() -> Self {
        Self
    }

    fn label_text(model: &dyn FormModel, spec: &FieldSpec) -> Option<String> {
        match &spec.label {
            LabelMode::Hidden => None,
            LabelMode::Text(text) => Some(text.clone()),
            LabelMode::Auto => Some(
                model
                    .attribute_label(&spec.name)
                    .unwrap_or_else(|| humanize(&spec.name)),
            ),
        }
    }

    /// Renders the input element for a spec.
    ///
    /// Returns the markup plus whether the widget already carries the label
    /// (toggle inputs enclose it; the wrapper must not repeat it).
    fn input_html(
        spec: &FieldSpec,
        value: Option<&str>,
        label: Option<&str>,
    ) -> Result<(String, bool)> {
        let mut input_options = spec.input_options.clone();

        let rendered = match spec.kind {
            FieldKind::Widget => {
                let widget = spec.widget.as_ref().ok_or_else(|| FormError::MissingWidget {
                    field: spec.name.clone(),
                })?;
                return Ok((widget.render(&spec.name, value, &spec.widget_options), false));
            }
            FieldKind::DropDownList | FieldKind::ListBox => {
                let mut select = Select::new(spec.items.clone());
                if let Some(prompt) = input_options.remove("prompt") {
                    select = select.prompt(prompt);
                }
                if spec.kind == FieldKind::ListBox {
                    select = select.list_box();
                }
                select.render(&spec.name, value, &input_options)
            }
            FieldKind::RadioList => {
                RadioGroup::new(spec.items.clone()).render(&spec.name, value, &input_options)
            }
            FieldKind::CheckboxList => {
                CheckboxGroup::new(spec.items.clone()).render(&spec.name, value, &input_options)
            }
            FieldKind::Radio => {
                let mut radio = Radio::new().enclosed_by_label(spec.enclosed_by_label);
                if let Some(label) = label {
                    radio = radio.label(label);
                }
                let enclosed = spec.enclosed_by_label && label.is_some();
                let html = radio.render(&spec.name, value, &input_options);
                return Ok((html, enclosed));
            }
            FieldKind::Checkbox => {
                let mut checkbox = Checkbox::new();
                if let Some(label) = label {
                    checkbox = checkbox.label(label);
                }
                let enclosed = label.is_some();
                let html = checkbox.render(&spec.name, value, &input_options);
                return Ok((html, enclosed));
            }
            FieldKind::Input => TextInput::typed(spec.input_type.as_deref().unwrap_or("text"))
                .render(&spec.name, value, &input_options),
            FieldKind::Text => TextInput::new().render(&spec.name, value, &input_options),
            FieldKind::Textarea => Textarea::default().render(&spec.name, value, &input_options),
            FieldKind::HiddenInput => {
                TextInput::hidden().render(&spec.name, value, &input_options)
            }
            FieldKind::FileInput => TextInput::file().render(&spec.name, value, &input_options),
            FieldKind::PasswordInput => {
                TextInput::password().render(&spec.name, value, &input_options)
            }
        };

        Ok((rendered, false))
    }
}

impl FieldRenderer for HtmlFieldRenderer {
    fn render_field(&self, model: &dyn FormModel, spec: &FieldSpec) -> Result<String> {
        debug!(field = %spec.name, kind = spec.kind.name(), "rendering field");

        let value = model
            .attribute(&spec.name)
            .ok_or_else(|| FormError::UnknownAttribute {
                field: spec.name.clone(),
            })?;

        let label = Self::label_text(model, spec);
        let (input_html, label_in_input) =
            Self::input_html(spec, Some(value.as_str()), label.as_deref())?;

        // Custom widgets render from widget_options, so the label id must
        // come from there too.
        let id_options = if spec.kind == FieldKind::Widget {
            &spec.widget_options
        } else {
            &spec.input_options
        };
        let id = id_options
            .get("id")
            .cloned()
            .unwrap_or_else(|| format!("id_{}", spec.name));

        let label_html = match &label {
            Some(text) if !label_in_input => {
                let label_text = text.clone();
                html! { label.for_(#id).class("control-label") { #label_text } }.render()
            }
            _ => String::new(),
        };

        let hint = spec.hint.as_ref();
        let hint_content = hint.map(|h| h.content.clone()).unwrap_or_default();
        let hint_class = hint
            .and_then(|h| h.options.get("class").cloned())
            .unwrap_or_else(|| "hint-block".to_string());
        let hint_attrs = hint.map(|h| h.options.clone()).unwrap_or_default();

        let wrapper_class = spec
            .attribute_options
            .get("class")
            .cloned()
            .unwrap_or_else(|| "form-group".to_string());

        let mut block = html! { div.class(#wrapper_class) };
        for (key, value) in spec.attribute_options.iter() {
            if key != "class" {
                block = block.attr(key.clone(), value.clone());
            }
        }

        let rendered = block
            .raw(&label_html)
            .raw(&input_html)
            .when(hint.is_some(), |d| {
                d.child::<Div, _>(|h| {
                    let mut h = h.class(hint_class.as_str());
                    for (key, value) in hint_attrs.iter() {
                        if key != "class" {
                            h = h.attr(key.clone(), value.clone());
                        }
                    }
                    h.text(hint_content.as_str())
                })
            })
            .render();

        Ok(rendered)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fields::Hint;
    use formcraft_html::HtmlAttrs;

    struct Account {
        name: String,
        role: String,
        active: String,
    }

    impl FormModel for Account {
        fn attribute(&self, name: &str) -> Option<String> {
            match name {
                "name" => Some(self.name.clone()),
                "role" => Some(self.role.clone()),
                "active" => Some(self.active.clone()),
                _ => None,
            }
        }

        fn attribute_label(&self, name: &str) -> Option<String> {
            (name == "role").then(|| "Account Role".to_string())
        }

        fn is_new_record(&self) -> bool {
            true
        }
    }

    fn account() -> Account {
        Account {
            name: "Ada".to_string(),
            role: "b".to_string(),
            active: "1".to_string(),
        }
    }

    #[test]
    fn test_text_field_with_auto_label() {
        let html = HtmlFieldRenderer::new()
            .render_field(&account(), &FieldSpec::new("name"))
            .unwrap();
        assert!(html.contains("form-group"));
        assert!(html.contains(">Name</label>"));
        assert!(html.contains(r#"value="Ada""#));
    }

    #[test]
    fn test_model_label_wins_over_humanized() {
        let html = HtmlFieldRenderer::new()
            .render_field(
                &account(),
                &FieldSpec::new("role")
                    .kind(FieldKind::DropDownList)
                    .items(vec![("a", "Admin"), ("b", "User")]),
            )
            .unwrap();
        assert!(html.contains("Account Role"));
        assert!(html.contains(r#"selected="selected""#));
    }

    #[test]
    fn test_explicit_label_and_no_label() {
        let renderer = HtmlFieldRenderer::new();

        let html = renderer
            .render_field(&account(), &FieldSpec::new("name").label("Full name"))
            .unwrap();
        assert!(html.contains(">Full name</label>"));

        let html = renderer
            .render_field(&account(), &FieldSpec::new("name").no_label())
            .unwrap();
        assert!(!html.contains("<label"));
    }

    #[test]
    fn test_hint_block() {
        let html = HtmlFieldRenderer::new()
            .render_field(
                &account(),
                &FieldSpec::new("name").hint(Hint::new("Shown on the profile")),
            )
            .unwrap();
        assert!(html.contains("hint-block"));
        assert!(html.contains("Shown on the profile"));
    }

    #[test]
    fn test_no_hint_no_block() {
        let html = HtmlFieldRenderer::new()
            .render_field(&account(), &FieldSpec::new("name"))
            .unwrap();
        assert!(!html.contains("hint-block"));
    }

    #[test]
    fn test_unknown_attribute_errors() {
        let err = HtmlFieldRenderer::new()
            .render_field(&account(), &FieldSpec::new("missing"))
            .unwrap_err();
        assert!(matches!(err, FormError::UnknownAttribute { field } if field == "missing"));
    }

    #[test]
    fn test_widget_kind_without_widget_errors() {
        let err = HtmlFieldRenderer::new()
            .render_field(&account(), &FieldSpec::new("name").kind(FieldKind::Widget))
            .unwrap_err();
        assert!(matches!(err, FormError::MissingWidget { field } if field == "name"));
    }

    #[test]
    fn test_attached_widget_renders() {
        struct Stamp;
        impl Widget for Stamp {
            fn render(&self, name: &str, _value: Option<&str>, attrs: &HtmlAttrs) -> String {
                format!("<x-stamp name=\"{name}\" {}></x-stamp>", attrs.to_html())
            }
        }

        let html = HtmlFieldRenderer::new()
            .render_field(
                &account(),
                &FieldSpec::new("name")
                    .widget(Stamp)
                    .widget_option("data-tone", "loud"),
            )
            .unwrap();
        assert!(html.contains("<x-stamp"));
        assert!(html.contains(r#"data-tone="loud""#));
    }

    #[test]
    fn test_widget_label_points_at_widget_id() {
        struct Stamp;
        impl Widget for Stamp {
            fn render(&self, name: &str, _value: Option<&str>, attrs: &HtmlAttrs) -> String {
                format!("<x-stamp name=\"{name}\" {}></x-stamp>", attrs.to_html())
            }
        }

        let html = HtmlFieldRenderer::new()
            .render_field(
                &account(),
                &FieldSpec::new("name")
                    .widget(Stamp)
                    .widget_option("id", "stamp-name"),
            )
            .unwrap();
        assert!(html.contains(r#"id="stamp-name""#));
        assert!(html.contains(r#"for="stamp-name""#));
        assert!(!html.contains("id_name"));
    }

    #[test]
    fn test_wrapper_and_hint_carry_extra_attributes() {
        let html = HtmlFieldRenderer::new()
            .render_field(
                &account(),
                &FieldSpec::new("name")
                    .attribute_option("data-field", "name")
                    .hint(Hint::new("Shown on the profile").option("data-role", "hint")),
            )
            .unwrap();
        assert!(html.contains(r#"data-field="name""#));
        assert!(html.contains(r#"data-role="hint""#));
    }

    #[test]
    fn test_unrecognized_kind_matches_text() {
        let renderer = HtmlFieldRenderer::new();
        let fallback = renderer
            .render_field(
                &account(),
                &FieldSpec::new("name").kind(FieldKind::from_name("holographicInput")),
            )
            .unwrap();
        let text = renderer
            .render_field(&account(), &FieldSpec::new("name"))
            .unwrap();
        assert_eq!(fallback, text);
    }

    #[test]
    fn test_checkbox_label_moves_into_widget() {
        let html = HtmlFieldRenderer::new()
            .render_field(&account(), &FieldSpec::new("active").kind(FieldKind::Checkbox))
            .unwrap();
        assert!(html.contains("<label>"));
        assert!(!html.contains("control-label"));
        assert!(html.contains(r#"checked="checked""#));
    }

    #[test]
    fn test_generic_input_type() {
        let html = HtmlFieldRenderer::new()
            .render_field(
                &account(),
                &FieldSpec::new("name").kind(FieldKind::Input).input_type("date"),
            )
            .unwrap();
        assert!(html.contains(r#"type="date""#));
    }

    #[test]
    fn test_prompt_option_becomes_blank_choice() {
        let html = HtmlFieldRenderer::new()
            .render_field(
                &account(),
                &FieldSpec::new("role")
                    .kind(FieldKind::DropDownList)
                    .items(vec![("a", "Admin"), ("b", "User")])
                    .input_option("prompt", "Choose role"),
            )
            .unwrap();
        assert!(html.contains(r#"<option value="">Choose role</option>"#));
        assert!(!html.contains(r#"prompt="#));
    }
}
