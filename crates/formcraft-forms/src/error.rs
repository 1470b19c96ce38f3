//! Error types for form assembly.

use thiserror::Error;

/// Errors raised while assembling a form.
///
/// Malformed but recognizable input never errors; it degrades to documented
/// defaults. Only the cases below are fatal to a render.
#[derive(Debug, Error)]
pub enum FormError {
    /// A field with kind `widget` has no widget attached.
    #[error("field `{field}` has kind `widget` but no widget was attached")]
    MissingWidget {
        /// The offending field name.
        field: String,
    },

    /// The attribute name does not resolve on the target record.
    #[error("attribute `{field}` does not exist on the target record")]
    UnknownAttribute {
        /// The offending field name.
        field: String,
    },

    /// The requested form layout is declared but not supported.
    #[error("form layout `{0}` is not supported")]
    UnsupportedLayout(String),
}

/// Result type alias for form operations.
pub type Result<T> = std::result::Result<T, FormError>;
