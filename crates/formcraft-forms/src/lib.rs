//! # formcraft-forms
//!
//! Declarative, model-bound HTML form assembly.
//!
//! A form is described as a list of field specifications over a record's
//! attributes plus button and layout configuration. Rendering walks the
//! specs in order, asks a field renderer for each field's markup, and
//! splices the result into a token template together with the submit and
//! cancel controls.
//!
//! This crate provides:
//! - [`FieldSpec`] / [`FieldKind`] - declarative field descriptions
//! - [`FormModel`] - the seam to the record being edited
//! - [`HtmlFieldRenderer`] and the [`widgets`] it dispatches to
//! - [`FormDefinition`] - the assembler, plus [`CachedForm`] memoization
//!
//! ## Quick Start
//!
//! ```rust
//! use formcraft_forms::{FieldKind, FieldSpec, FormDefinition, FormModel, HtmlFieldRenderer};
//!
//! struct Account {
//!     name: String,
//!     role: String,
//! }
//!
//! impl FormModel for Account {
//!     fn attribute(&self, name: &str) -> Option<String> {
//!         match name {
//!             "name" => Some(self.name.clone()),
//!             "role" => Some(self.role.clone()),
//!             _ => None,
//!         }
//!     }
//!
//!     fn is_new_record(&self) -> bool {
//!         true
//!     }
//! }
//!
//! let form = FormDefinition::new()
//!     .field("name")
//!     .field(
//!         FieldSpec::new("role")
//!             .kind(FieldKind::DropDownList)
//!             .items(vec![("a", "Admin"), ("b", "User")]),
//!     );
//!
//! let account = Account {
//!     name: "Ada".to_string(),
//!     role: "a".to_string(),
//! };
//! let html = form.render(&account, &HtmlFieldRenderer::new()).unwrap();
//! assert!(html.starts_with("<form"));
//! assert!(html.contains(r#"value="Ada""#));
//! assert!(html.contains(">Admin</option>"));
//! ```
//!
//! ## Configuration-driven forms
//!
//! Field lists deserialize from configuration; a bare string entry is
//! shorthand for a text field on that attribute:
//!
//! ```rust
//! use formcraft_forms::{FieldEntry, FieldSpec, FormDefinition};
//!
//! let entries: Vec<FieldEntry> = serde_json::from_str(
//!     r#"["name", {"name": "role", "type": "dropDownList", "items": [["a", "Admin"]]}]"#,
//! )
//! .unwrap();
//! let form = FormDefinition::new().fields(entries.into_iter().map(FieldSpec::from));
//! ```

mod buttons;
mod error;
mod fields;
mod form;
mod model;
mod renderer;
mod template;
pub mod widgets;

pub use buttons::{
    ButtonTag, ButtonWrapper, CancelButton, SubmitButton, SubmitButtonOptions,
    SubmitButtonOverride, UrlResolver, VerbatimUrls,
};
pub use error::{FormError, Result};
pub use fields::{FieldEntry, FieldKind, FieldSpec, Hint, LabelMode};
pub use form::{CachedForm, FormDefinition, FormLayout, FormOptions};
pub use model::{humanize, FormModel};
pub use renderer::{FieldRenderer, HtmlFieldRenderer};
pub use template::{substitute, Fragments, DEFAULT_TEMPLATE};
