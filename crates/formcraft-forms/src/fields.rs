//! Field specifications.
//!
//! A [`FieldSpec`] is the declarative description of one form field: which
//! record attribute it binds to, how it renders, and the per-field options.
//! Specs can be built in code or deserialized from configuration; a bare
//! string entry is shorthand for a text field on that attribute.

use std::sync::Arc;

use serde::{Deserialize, Deserializer};
use tracing::warn;

use formcraft_html::HtmlAttrs;

use crate::widgets::Widget;

/// The rendering kind of a form field.
///
/// The set is closed; configuration names outside it degrade to
/// [`FieldKind::Text`] rather than erroring.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FieldKind {
    /// Plain text input.
    #[default]
    Text,
    /// Multi-line text input.
    Textarea,
    /// Single checkbox.
    Checkbox,
    /// Group of checkboxes driven by `items`.
    CheckboxList,
    /// Select element driven by `items`.
    DropDownList,
    /// A caller-supplied [`Widget`].
    Widget,
    /// Generic input with a caller-chosen `type` attribute.
    Input,
    /// Hidden input.
    HiddenInput,
    /// File input.
    FileInput,
    /// Password input.
    PasswordInput,
    /// Multi-row select element driven by `items`.
    ListBox,
    /// Single radio input.
    Radio,
    /// Group of radio inputs driven by `items`.
    RadioList,
}

impl FieldKind {
    /// Resolves a kind from its configuration name.
    ///
    /// Unrecognized names fall back to [`FieldKind::Text`].
    pub fn from_name(name: &str) -> Self {
        match name {
            "text" | "textInput" => Self::Text,
            "textarea" => Self::Textarea,
            "checkbox" => Self::Checkbox,
            "checkboxList" => Self::CheckboxList,
            "dropDownList" => Self::DropDownList,
            "widget" => Self::Widget,
            "input" => Self::Input,
            "hiddenInput" => Self::HiddenInput,
            "fileInput" => Self::FileInput,
            "passwordInput" => Self::PasswordInput,
            "listBox" => Self::ListBox,
            "radio" => Self::Radio,
            "radioList" => Self::RadioList,
            other => {
                warn!(kind = other, "unrecognized field kind, falling back to text");
                Self::Text
            }
        }
    }

    /// Returns the configuration name of this kind.
    pub fn name(self) -> &'static str {
        match self {
            Self::Text => "text",
            Self::Textarea => "textarea",
            Self::Checkbox => "checkbox",
            Self::CheckboxList => "checkboxList",
            Self::DropDownList => "dropDownList",
            Self::Widget => "widget",
            Self::Input => "input",
            Self::HiddenInput => "hiddenInput",
            Self::FileInput => "fileInput",
            Self::PasswordInput => "passwordInput",
            Self::ListBox => "listBox",
            Self::Radio => "radio",
            Self::RadioList => "radioList",
        }
    }
}

impl<'de> Deserialize<'de> for FieldKind {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let name = String::deserialize(deserializer)?;
        Ok(Self::from_name(&name))
    }
}

/// How the field label is produced.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum LabelMode {
    /// Use the record's label for the attribute, humanizing the attribute
    /// name when the record has none.
    #[default]
    Auto,
    /// Render no label.
    Hidden,
    /// Render the given text.
    Text(String),
}

impl<'de> Deserialize<'de> for LabelMode {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Raw {
            Flag(bool),
            Text(String),
        }

        Ok(match Option::<Raw>::deserialize(deserializer)? {
            None | Some(Raw::Flag(true)) => Self::Auto,
            Some(Raw::Flag(false)) => Self::Hidden,
            Some(Raw::Text(text)) => Self::Text(text),
        })
    }
}

/// A hint block attached to a field.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Hint {
    /// Hint text.
    pub content: String,
    /// HTML attributes for the hint block.
    pub options: HtmlAttrs,
}

impl Hint {
    /// Creates a hint with the given text.
    pub fn new(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
            options: HtmlAttrs::new(),
        }
    }

    /// Sets an HTML attribute on the hint block.
    #[must_use]
    pub fn option(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.options.set(key, value);
        self
    }
}

impl From<&str> for Hint {
    fn from(content: &str) -> Self {
        Self::new(content)
    }
}

impl From<String> for Hint {
    fn from(content: String) -> Self {
        Self::new(content)
    }
}

impl<'de> Deserialize<'de> for Hint {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Raw {
            Content(String),
            Full {
                content: String,
                #[serde(default)]
                options: HtmlAttrs,
            },
        }

        Ok(match Raw::deserialize(deserializer)? {
            Raw::Content(content) => Self::new(content),
            Raw::Full { content, options } => Self { content, options },
        })
    }
}

fn default_true() -> bool {
    true
}

/// Declarative description of one form field.
#[derive(Clone, Deserialize)]
pub struct FieldSpec {
    /// The record attribute this field binds to.
    pub name: String,
    /// The rendering kind.
    #[serde(rename = "type", default)]
    pub kind: FieldKind,
    /// Label behavior.
    #[serde(default)]
    pub label: LabelMode,
    /// Optional hint block rendered below the input.
    #[serde(default)]
    pub hint: Option<Hint>,
    /// HTML attributes for the field wrapper block.
    #[serde(default)]
    pub attribute_options: HtmlAttrs,
    /// HTML attributes for the input element.
    #[serde(default)]
    pub input_options: HtmlAttrs,
    /// Ordered `(value, label)` choices for list kinds.
    #[serde(default)]
    pub items: Vec<(String, String)>,
    /// The `type` attribute for [`FieldKind::Input`]; defaults to `text`.
    #[serde(default)]
    pub input_type: Option<String>,
    /// Whether a [`FieldKind::Radio`] input is enclosed by its label.
    #[serde(default = "default_true")]
    pub enclosed_by_label: bool,
    /// The widget for [`FieldKind::Widget`]; must be attached in code.
    #[serde(skip)]
    pub widget: Option<Arc<dyn Widget>>,
    /// HTML attributes passed to the widget.
    #[serde(default)]
    pub widget_options: HtmlAttrs,
}

impl std::fmt::Debug for FieldSpec {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FieldSpec")
            .field("name", &self.name)
            .field("kind", &self.kind)
            .field("label", &self.label)
            .field("hint", &self.hint)
            .field("items", &self.items)
            .finish_non_exhaustive()
    }
}

impl FieldSpec {
    /// Creates a text field spec for the named attribute.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            kind: FieldKind::default(),
            label: LabelMode::default(),
            hint: None,
            attribute_options: HtmlAttrs::new(),
            input_options: HtmlAttrs::new(),
            items: Vec::new(),
            input_type: None,
            enclosed_by_label: true,
            widget: None,
            widget_options: HtmlAttrs::new(),
        }
    }

    /// Sets the rendering kind.
    #[must_use]
    pub fn kind(mut self, kind: FieldKind) -> Self {
        self.kind = kind;
        self
    }

    /// Sets an explicit label text.
    #[must_use]
    pub fn label(mut self, text: impl Into<String>) -> Self {
        self.label = LabelMode::Text(text.into());
        self
    }

    /// Suppresses the label.
    #[must_use]
    pub fn no_label(mut self) -> Self {
        self.label = LabelMode::Hidden;
        self
    }

    /// Attaches a hint block.
    #[must_use]
    pub fn hint(mut self, hint: impl Into<Hint>) -> Self {
        self.hint = Some(hint.into());
        self
    }

    /// Sets an HTML attribute on the field wrapper block.
    #[must_use]
    pub fn attribute_option(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.attribute_options.set(key, value);
        self
    }

    /// Sets an HTML attribute on the input element.
    #[must_use]
    pub fn input_option(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.input_options.set(key, value);
        self
    }

    /// Sets the ordered choices for list kinds.
    #[must_use]
    pub fn items<V, L>(mut self, items: Vec<(V, L)>) -> Self
    where
        V: Into<String>,
        L: Into<String>,
    {
        self.items = items
            .into_iter()
            .map(|(value, label)| (value.into(), label.into()))
            .collect();
        self
    }

    /// Sets the `type` attribute used by [`FieldKind::Input`].
    #[must_use]
    pub fn input_type(mut self, input_type: impl Into<String>) -> Self {
        self.input_type = Some(input_type.into());
        self
    }

    /// Controls whether a radio input is enclosed by its label.
    #[must_use]
    pub fn enclosed_by_label(mut self, enclosed: bool) -> Self {
        self.enclosed_by_label = enclosed;
        self
    }

    /// Attaches a widget and switches the kind to [`FieldKind::Widget`].
    #[must_use]
    pub fn widget(mut self, widget: impl Widget + 'static) -> Self {
        self.kind = FieldKind::Widget;
        self.widget = Some(Arc::new(widget));
        self
    }

    /// Sets an HTML attribute passed to the widget.
    #[must_use]
    pub fn widget_option(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.widget_options.set(key, value);
        self
    }
}

impl From<&str> for FieldSpec {
    fn from(name: &str) -> Self {
        Self::new(name)
    }
}

impl From<String> for FieldSpec {
    fn from(name: String) -> Self {
        Self::new(name)
    }
}

/// A configuration entry: a bare attribute name or a full spec.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum FieldEntry {
    /// Shorthand for a text field on the named attribute.
    Name(String),
    /// A full field specification.
    Spec(FieldSpec),
}

impl From<FieldEntry> for FieldSpec {
    fn from(entry: FieldEntry) -> Self {
        match entry {
            FieldEntry::Name(name) => Self::new(name),
            FieldEntry::Spec(spec) => spec,
        }
    }
}
