//! Button block configuration.
//!
//! All option structs carry explicit defaults; overrides are per-field, so
//! a caller setting only the title keeps the default tag and classes.

use serde::Deserialize;

use formcraft_html::{a, begin_tag, end_tag, submit_button, submit_input, HtmlAttrs};

use crate::model::FormModel;

/// The element used for the submit control.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ButtonTag {
    /// `<input type="submit">`.
    #[default]
    Input,
    /// `<button type="submit">`.
    Button,
}

/// One submit button option set.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubmitButton {
    /// Button title.
    pub title: String,
    /// Element used for the control.
    pub tag: ButtonTag,
    /// HTML attributes.
    pub options: HtmlAttrs,
}

impl SubmitButton {
    /// The defaults used when the record is new.
    pub fn create_defaults() -> Self {
        Self {
            title: "Create".to_string(),
            tag: ButtonTag::Input,
            options: HtmlAttrs::new().with("class", "btn btn-success"),
        }
    }

    /// The defaults used when the record already exists.
    pub fn update_defaults() -> Self {
        Self {
            title: "Update".to_string(),
            tag: ButtonTag::Input,
            options: HtmlAttrs::new().with("class", "btn btn-primary"),
        }
    }

    /// Sets the title.
    #[must_use]
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    /// Sets the element used for the control.
    #[must_use]
    pub fn tag(mut self, tag: ButtonTag) -> Self {
        self.tag = tag;
        self
    }

    /// Sets an HTML attribute.
    #[must_use]
    pub fn option(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.options.set(key, value);
        self
    }

    /// Applies a partial override; set fields win, unset fields stay.
    #[must_use]
    pub fn merged(mut self, overrides: SubmitButtonOverride) -> Self {
        if let Some(title) = overrides.title {
            self.title = title;
        }
        if let Some(tag) = overrides.tag {
            self.tag = tag;
        }
        if let Some(options) = overrides.options {
            self.options = options;
        }
        self
    }

    pub(crate) fn render(&self) -> String {
        match self.tag {
            ButtonTag::Input => submit_input(&self.title, &self.options),
            ButtonTag::Button => submit_button(&self.title, &self.options),
        }
    }
}

/// A partial override for a submit button option set.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SubmitButtonOverride {
    /// Replacement title.
    #[serde(default)]
    pub title: Option<String>,
    /// Replacement element.
    #[serde(default)]
    pub tag: Option<ButtonTag>,
    /// Replacement HTML attributes.
    #[serde(default)]
    pub options: Option<HtmlAttrs>,
}

/// The create/update submit button pair.
///
/// Which one renders is keyed solely on whether the record is new.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubmitButtonOptions {
    /// Button used for unsaved records.
    pub create: SubmitButton,
    /// Button used for existing records.
    pub update: SubmitButton,
}

impl Default for SubmitButtonOptions {
    fn default() -> Self {
        Self {
            create: SubmitButton::create_defaults(),
            update: SubmitButton::update_defaults(),
        }
    }
}

impl SubmitButtonOptions {
    /// Creates the default pair.
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the create button options.
    #[must_use]
    pub fn create(mut self, button: SubmitButton) -> Self {
        self.create = button;
        self
    }

    /// Replaces the update button options.
    #[must_use]
    pub fn update(mut self, button: SubmitButton) -> Self {
        self.update = button;
        self
    }

    /// Selects the button for the given record.
    pub fn for_record(&self, model: &dyn FormModel) -> &SubmitButton {
        if model.is_new_record() {
            &self.create
        } else {
            &self.update
        }
    }
}

/// Resolves a route or action name into an href.
pub trait UrlResolver {
    /// Returns the href for an action name.
    fn url_for(&self, action: &str) -> String;
}

/// Resolver that uses the action string as the href unchanged.
#[derive(Debug, Clone, Copy, Default)]
pub struct VerbatimUrls;

impl UrlResolver for VerbatimUrls {
    fn url_for(&self, action: &str) -> String {
        action.to_string()
    }
}

/// Cancel link configuration.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct CancelButton {
    /// Whether the link renders at all.
    pub show: bool,
    /// Link text.
    pub title: String,
    /// Action name resolved through the form's [`UrlResolver`].
    pub action: String,
    /// HTML attributes.
    pub options: HtmlAttrs,
}

impl Default for CancelButton {
    fn default() -> Self {
        Self {
            show: true,
            title: "Cancel".to_string(),
            action: "index".to_string(),
            options: HtmlAttrs::new().with("class", "btn btn-default"),
        }
    }
}

impl CancelButton {
    /// Creates the default cancel link.
    pub fn new() -> Self {
        Self::default()
    }

    /// Suppresses the link.
    #[must_use]
    pub fn hidden(mut self) -> Self {
        self.show = false;
        self
    }

    /// Sets the link text.
    #[must_use]
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    /// Sets the target action name.
    #[must_use]
    pub fn action(mut self, action: impl Into<String>) -> Self {
        self.action = action.into();
        self
    }

    /// Sets an HTML attribute.
    #[must_use]
    pub fn option(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.options.set(key, value);
        self
    }

    pub(crate) fn render(&self, resolver: &dyn UrlResolver) -> String {
        if !self.show {
            return String::new();
        }
        a(&self.title, &resolver.url_for(&self.action), &self.options)
    }
}

/// Wrapper element around the button block.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ButtonWrapper {
    /// Wrapper tag name; `None` suppresses the wrapper entirely.
    pub tag: Option<String>,
    /// HTML attributes for the wrapper tag.
    pub options: HtmlAttrs,
}

impl Default for ButtonWrapper {
    fn default() -> Self {
        Self {
            tag: Some("div".to_string()),
            options: HtmlAttrs::new(),
        }
    }
}

impl ButtonWrapper {
    /// Creates the default wrapper.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the wrapper tag name.
    #[must_use]
    pub fn tag(mut self, tag: impl Into<String>) -> Self {
        self.tag = Some(tag.into());
        self
    }

    /// Suppresses the wrapper.
    #[must_use]
    pub fn none(mut self) -> Self {
        self.tag = None;
        self
    }

    /// Sets an HTML attribute on the wrapper tag.
    #[must_use]
    pub fn option(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.options.set(key, value);
        self
    }

    pub(crate) fn begin(&self) -> String {
        let Some(tag) = &self.tag else {
            return String::new();
        };
        let mut options = self.options.clone();
        if options.get("class").is_none() {
            options.add_css_class("form-group");
        }
        begin_tag(tag, &options)
    }

    pub(crate) fn end(&self) -> String {
        match &self.tag {
            Some(tag) => end_tag(tag),
            None => String::new(),
        }
    }
}
