//! Form assembly.

use std::cell::OnceCell;
use std::sync::Arc;

use serde::{Deserialize, Deserializer};
use tracing::{debug, warn};

use formcraft_html::{begin_tag, end_tag, HtmlAttrs};

use crate::buttons::{ButtonWrapper, CancelButton, SubmitButtonOptions, UrlResolver, VerbatimUrls};
use crate::error::{FormError, Result};
use crate::fields::FieldSpec;
use crate::model::FormModel;
use crate::renderer::FieldRenderer;
use crate::template::{substitute, Fragments, DEFAULT_TEMPLATE};

/// The overall form layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FormLayout {
    /// A single flat list of fields.
    #[default]
    Simple,
    /// Declared but not implemented; selecting it always fails.
    Tab,
}

impl FormLayout {
    /// Resolves a layout from its configuration name.
    ///
    /// Unrecognized names fall back to [`FormLayout::Simple`].
    pub fn from_name(name: &str) -> Self {
        match name {
            "simple" => Self::Simple,
            "tab" => Self::Tab,
            other => {
                warn!(layout = other, "unrecognized form layout, falling back to simple");
                Self::Simple
            }
        }
    }

    /// Returns the configuration name of this layout.
    pub fn name(self) -> &'static str {
        match self {
            Self::Simple => "simple",
            Self::Tab => "tab",
        }
    }
}

impl<'de> Deserialize<'de> for FormLayout {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let name = String::deserialize(deserializer)?;
        Ok(Self::from_name(&name))
    }
}

/// Options for the `<form>` element itself.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct FormOptions {
    /// The form action URL.
    pub action: String,
    /// The form method.
    pub method: String,
    /// Additional HTML attributes for the `<form>` tag.
    pub options: HtmlAttrs,
}

impl Default for FormOptions {
    fn default() -> Self {
        Self {
            action: String::new(),
            method: "post".to_string(),
            options: HtmlAttrs::new().with("enctype", "multipart/form-data"),
        }
    }
}

impl FormOptions {
    /// Creates the default options.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the action URL.
    #[must_use]
    pub fn action(mut self, action: impl Into<String>) -> Self {
        self.action = action.into();
        self
    }

    /// Sets the method.
    #[must_use]
    pub fn method(mut self, method: impl Into<String>) -> Self {
        self.method = method.into();
        self
    }

    /// Sets an HTML attribute on the `<form>` tag.
    #[must_use]
    pub fn option(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.options.set(key, value);
        self
    }
}

/// Immutable configuration for one form render.
///
/// Holds the field specs, layout and button configuration, and produces the
/// assembled HTML with [`FormDefinition::render`]. The definition itself
/// never changes during a render; memoization lives in [`CachedForm`].
pub struct FormDefinition {
    fields: Vec<FieldSpec>,
    layout: FormLayout,
    form_options: FormOptions,
    submit_buttons: SubmitButtonOptions,
    cancel_button: CancelButton,
    wrapper: ButtonWrapper,
    template: String,
    resolver: Arc<dyn UrlResolver>,
}

impl std::fmt::Debug for FormDefinition {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FormDefinition")
            .field("fields", &self.fields)
            .field("layout", &self.layout)
            .field("form_options", &self.form_options)
            .field("template", &self.template)
            .finish_non_exhaustive()
    }
}

impl Default for FormDefinition {
    fn default() -> Self {
        Self {
            fields: Vec::new(),
            layout: FormLayout::default(),
            form_options: FormOptions::default(),
            submit_buttons: SubmitButtonOptions::default(),
            cancel_button: CancelButton::default(),
            wrapper: ButtonWrapper::default(),
            template: DEFAULT_TEMPLATE.to_string(),
            resolver: Arc::new(VerbatimUrls),
        }
    }
}

impl FormDefinition {
    /// Creates an empty definition with default options.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a field.
    #[must_use]
    pub fn field(mut self, spec: impl Into<FieldSpec>) -> Self {
        self.fields.push(spec.into());
        self
    }

    /// Appends several fields, preserving their order.
    #[must_use]
    pub fn fields<I, S>(mut self, specs: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<FieldSpec>,
    {
        self.fields.extend(specs.into_iter().map(Into::into));
        self
    }

    /// Sets the layout.
    #[must_use]
    pub fn layout(mut self, layout: FormLayout) -> Self {
        self.layout = layout;
        self
    }

    /// Sets the `<form>` element options.
    #[must_use]
    pub fn form_options(mut self, options: FormOptions) -> Self {
        self.form_options = options;
        self
    }

    /// Sets the submit button pair.
    #[must_use]
    pub fn submit_buttons(mut self, buttons: SubmitButtonOptions) -> Self {
        self.submit_buttons = buttons;
        self
    }

    /// Sets the cancel link.
    #[must_use]
    pub fn cancel_button(mut self, cancel: CancelButton) -> Self {
        self.cancel_button = cancel;
        self
    }

    /// Sets the button block wrapper.
    #[must_use]
    pub fn wrapper(mut self, wrapper: ButtonWrapper) -> Self {
        self.wrapper = wrapper;
        self
    }

    /// Sets the layout template.
    #[must_use]
    pub fn template(mut self, template: impl Into<String>) -> Self {
        self.template = template.into();
        self
    }

    /// Sets the URL resolver used for the cancel link.
    #[must_use]
    pub fn resolver(mut self, resolver: impl UrlResolver + 'static) -> Self {
        self.resolver = Arc::new(resolver);
        self
    }

    /// Assembles the form for the given record.
    ///
    /// Fields render strictly in the order they were added. Any field error
    /// aborts the whole render; nothing partial is returned.
    pub fn render(&self, model: &dyn FormModel, renderer: &dyn FieldRenderer) -> Result<String> {
        if self.layout == FormLayout::Tab {
            return Err(FormError::UnsupportedLayout(self.layout.name().to_string()));
        }

        debug!(fields = self.fields.len(), "assembling form");

        let mut items = String::new();
        for spec in &self.fields {
            items.push_str(&renderer.render_field(model, spec)?);
        }

        let fragments = Fragments {
            items,
            begin_block_buttons: self.wrapper.begin(),
            end_block_buttons: self.wrapper.end(),
            submit_button: self.submit_buttons.for_record(model).render(),
            cancel_button: self.cancel_button.render(self.resolver.as_ref()),
        };

        let mut form_attrs = self.form_options.options.clone();
        form_attrs.set("action", &self.form_options.action);
        form_attrs.set("method", &self.form_options.method);

        let mut html = begin_tag("form", &form_attrs);
        html.push_str(&substitute(&self.template, &fragments));
        html.push_str(&end_tag("form"));
        Ok(html)
    }
}

/// A form definition plus its memoized render result.
///
/// The first call to [`CachedForm::html`] renders; every later call returns
/// the identical cached string without touching the field renderer again.
/// Rendering is request-scoped and single-threaded; the cache is a
/// [`OnceCell`], so the type is deliberately not `Sync`.
#[derive(Debug)]
pub struct CachedForm {
    definition: FormDefinition,
    rendered: OnceCell<String>,
}

impl CachedForm {
    /// Wraps a definition.
    pub fn new(definition: FormDefinition) -> Self {
        Self {
            definition,
            rendered: OnceCell::new(),
        }
    }

    /// Returns the wrapped definition.
    pub fn definition(&self) -> &FormDefinition {
        &self.definition
    }

    /// Returns the assembled form, rendering at most once.
    pub fn html(&self, model: &dyn FormModel, renderer: &dyn FieldRenderer) -> Result<&str> {
        if let Some(html) = self.rendered.get() {
            return Ok(html);
        }
        let html = self.definition.render(model, renderer)?;
        Ok(self.rendered.get_or_init(|| html))
    }
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;

    use super::*;
    use crate::fields::FieldKind;
    use crate::renderer::HtmlFieldRenderer;

    struct Account {
        name: String,
        role: String,
        saved: bool,
    }

    impl FormModel for Account {
        fn attribute(&self, name: &str) -> Option<String> {
            match name {
                "name" => Some(self.name.clone()),
                "role" => Some(self.role.clone()),
                _ => None,
            }
        }

        fn is_new_record(&self) -> bool {
            !self.saved
        }
    }

    fn new_account() -> Account {
        Account {
            name: "Ada".to_string(),
            role: String::new(),
            saved: false,
        }
    }

    fn saved_account() -> Account {
        Account {
            saved: true,
            ..new_account()
        }
    }

    fn name_and_role() -> FormDefinition {
        FormDefinition::new().field("name").field(
            FieldSpec::new("role")
                .kind(FieldKind::DropDownList)
                .items(vec![("a", "Admin"), ("b", "User")]),
        )
    }

    #[test]
    fn test_scenario_text_then_select_then_buttons() {
        let html = name_and_role()
            .render(&new_account(), &HtmlFieldRenderer::new())
            .unwrap();

        let name_input = html.find(r#"name="name""#).unwrap();
        let select = html.find("<select").unwrap();
        let submit = html.find(r#"type="submit""#).unwrap();
        assert!(name_input < select);
        assert!(select < submit);
        assert!(html.contains(">Admin</option>"));
        assert!(html.contains(">User</option>"));
        assert!(html.starts_with("<form"));
        assert!(html.ends_with("</form>"));
    }

    #[test]
    fn test_form_tag_defaults() {
        let html = FormDefinition::new()
            .form_options(FormOptions::new().action("/accounts").method("post"))
            .render(&new_account(), &HtmlFieldRenderer::new())
            .unwrap();
        assert!(html.contains(r#"action="/accounts""#));
        assert!(html.contains(r#"method="post""#));
        assert!(html.contains(r#"enctype="multipart/form-data""#));
    }

    #[test]
    fn test_submit_selection_by_record_state() {
        let renderer = HtmlFieldRenderer::new();
        let definition = FormDefinition::new();

        let html = definition.render(&new_account(), &renderer).unwrap();
        assert!(html.contains(r#"value="Create""#));

        let html = definition.render(&saved_account(), &renderer).unwrap();
        assert!(html.contains(r#"value="Update""#));
    }

    #[test]
    fn test_wrapper_suppressed() {
        let html = FormDefinition::new()
            .wrapper(ButtonWrapper::new().none())
            .render(&new_account(), &HtmlFieldRenderer::new())
            .unwrap();
        assert!(!html.contains("form-group"));
        assert!(html.contains(r#"value="Create""#));
    }

    #[test]
    fn test_cancel_suppressed() {
        let html = FormDefinition::new()
            .cancel_button(CancelButton::new().hidden())
            .render(&new_account(), &HtmlFieldRenderer::new())
            .unwrap();
        assert!(!html.contains("<a "));
    }

    #[test]
    fn test_tab_layout_unsupported() {
        let err = FormDefinition::new()
            .layout(FormLayout::Tab)
            .render(&new_account(), &HtmlFieldRenderer::new())
            .unwrap_err();
        assert!(matches!(err, FormError::UnsupportedLayout(name) if name == "tab"));
    }

    #[test]
    fn test_layout_deserialize_falls_back_to_simple() {
        let layout: FormLayout = serde_json::from_str(r#""tab""#).unwrap();
        assert_eq!(layout, FormLayout::Tab);

        let layout: FormLayout = serde_json::from_str(r#""wizard""#).unwrap();
        assert_eq!(layout, FormLayout::Simple);
    }

    #[test]
    fn test_field_error_aborts_whole_render() {
        let err = name_and_role()
            .field(FieldSpec::new("name").kind(FieldKind::Widget))
            .render(&new_account(), &HtmlFieldRenderer::new())
            .unwrap_err();
        assert!(matches!(err, FormError::MissingWidget { .. }));
    }

    struct CountingRenderer {
        calls: Cell<usize>,
    }

    impl FieldRenderer for CountingRenderer {
        fn render_field(&self, _model: &dyn FormModel, spec: &FieldSpec) -> Result<String> {
            self.calls.set(self.calls.get() + 1);
            Ok(format!("[{}]", spec.name))
        }
    }

    #[test]
    fn test_cached_form_renders_once() {
        let form = CachedForm::new(name_and_role());
        let renderer = CountingRenderer {
            calls: Cell::new(0),
        };
        let model = new_account();

        let first = form.html(&model, &renderer).unwrap().to_string();
        let second = form.html(&model, &renderer).unwrap().to_string();

        assert_eq!(first, second);
        assert_eq!(renderer.calls.get(), 2);
    }

    #[test]
    fn test_custom_template() {
        let renderer = CountingRenderer {
            calls: Cell::new(0),
        };
        let html = FormDefinition::new()
            .field("name")
            .template("{items}{submitButton}")
            .render(&new_account(), &renderer)
            .unwrap();
        assert_eq!(
            html,
            format!(
                "{}[name]{}{}",
                r#"<form action="" enctype="multipart/form-data" method="post">"#,
                r#"<input class="btn btn-success" type="submit" value="Create">"#,
                "</form>"
            )
        );
    }
}
