//! The target record seam.

/// A record a form can be bound to.
///
/// This is the assembler's only view of the data being edited: named,
/// readable attributes plus a flag telling whether the record has been
/// persisted. The flag selects between the create and update submit
/// buttons.
pub trait FormModel {
    /// Returns the current value of the named attribute.
    ///
    /// `None` means the record has no such attribute; an empty but present
    /// attribute returns `Some(String::new())`.
    fn attribute(&self, name: &str) -> Option<String>;

    /// Returns an explicit display label for the attribute.
    ///
    /// The default returns `None`, which makes the renderer fall back to
    /// [`humanize`] on the attribute name.
    fn attribute_label(&self, _name: &str) -> Option<String> {
        None
    }

    /// Returns whether the record has not been persisted yet.
    fn is_new_record(&self) -> bool;
}

/// Turns an attribute name into a display label.
///
/// Splits on underscores, hyphens and camelCase boundaries and capitalizes
/// each word: `created_at` becomes `Created At`, `firstName` becomes
/// `First Name`.
pub fn humanize(name: &str) -> String {
    let mut words: Vec<String> = Vec::new();
    let mut current = String::new();

    for ch in name.chars() {
        if ch == '_' || ch == '-' {
            if !current.is_empty() {
                words.push(std::mem::take(&mut current));
            }
        } else if ch.is_uppercase() && !current.is_empty() {
            words.push(std::mem::take(&mut current));
            current.push(ch);
        } else {
            current.push(ch);
        }
    }
    if !current.is_empty() {
        words.push(current);
    }

    words
        .iter()
        .map(|word| {
            let mut chars = word.chars();
            chars.next().map_or_else(String::new, |first| {
                first.to_uppercase().collect::<String>() + chars.as_str()
            })
        })
        .collect::<Vec<_>>()
        .join(" ")
}
