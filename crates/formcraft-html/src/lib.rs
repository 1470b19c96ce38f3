//! # formcraft-html
//!
//! Low-level HTML emission helpers shared by the formcraft crates.
//!
//! This crate provides:
//! - [`HtmlAttrs`] - an ordered HTML attribute map
//! - [`escape`] - HTML entity escaping
//! - Tag helpers: [`begin_tag`], [`end_tag`], [`tag`]
//! - Control helpers: [`a`], [`submit_input`], [`submit_button`]
//!
//! Everything here assembles plain strings; there is no document model and
//! no output buffering. Attribute values and user-visible text are escaped,
//! element content passed to [`tag`] is emitted verbatim (the caller decides
//! whether it is markup or text).
//!
//! ## Quick Start
//!
//! ```rust
//! use formcraft_html::{begin_tag, end_tag, HtmlAttrs};
//!
//! let attrs = HtmlAttrs::new().with("class", "form-group");
//! let html = format!("{}Hello{}", begin_tag("div", &attrs), end_tag("div"));
//! assert_eq!(html, r#"<div class="form-group">Hello</div>"#);
//! ```

mod attrs;
mod escape;
mod tags;

pub use attrs::HtmlAttrs;
pub use escape::escape;
pub use tags::{a, begin_tag, end_tag, submit_button, submit_input, tag};
