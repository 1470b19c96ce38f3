//! Form input widgets.
//!
//! A widget turns one bound input into markup. The built-in set covers the
//! recognized field kinds; custom widgets implement [`Widget`] and are
//! attached to a spec with [`crate::FieldSpec::widget`].

mod check;
mod choice;
mod text;

pub use check::{Checkbox, Radio};
pub use choice::{CheckboxGroup, RadioGroup, Select};
pub use text::{TextInput, Textarea};

use formcraft_html::HtmlAttrs;

/// Trait for widgets that render a single bound input as HTML.
pub trait Widget: Send + Sync {
    /// Renders the widget.
    ///
    /// # Arguments
    /// * `name` - the field name (used for the name attribute)
    /// * `value` - the current record value (if any)
    /// * `attrs` - additional HTML attributes
    fn render(&self, name: &str, value: Option<&str>, attrs: &HtmlAttrs) -> String;

    /// Returns the HTML input type this widget produces.
    fn input_type(&self) -> &str {
        "text"
    }
}

/// Returns the element id for a field, honoring an explicit `id` attribute.
pub(crate) fn input_id(name: &str, attrs: &HtmlAttrs) -> String {
    attrs
        .get("id")
        .cloned()
        .unwrap_or_else(|| format!("id_{name}"))
}

/// Returns whether a record value means "checked" for toggle inputs.
pub(crate) fn is_truthy(value: Option<&str>) -> bool {
    value.is_some_and(|v| v == "1" || v == "true" || v == "on")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_input_id_default() {
        assert_eq!(input_id("email", &HtmlAttrs::new()), "id_email");
    }

    #[test]
    fn test_input_id_explicit() {
        let attrs = HtmlAttrs::new().with("id", "custom");
        assert_eq!(input_id("email", &attrs), "custom");
    }

    #[test]
    fn test_is_truthy() {
        assert!(is_truthy(Some("1")));
        assert!(is_truthy(Some("true")));
        assert!(is_truthy(Some("on")));
        assert!(!is_truthy(Some("0")));
        assert!(!is_truthy(None));
    }
}
