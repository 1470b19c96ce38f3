//! Form template substitution.

/// The default layout template.
pub const DEFAULT_TEMPLATE: &str =
    "{items}{beginBlockButtons}{submitButton}{cancelButton}{endBlockButtons}";

/// The fragments substituted into a form template.
#[derive(Debug, Clone, Default)]
pub struct Fragments {
    /// Concatenated field markup, in input order.
    pub items: String,
    /// Opening tag of the button block wrapper.
    pub begin_block_buttons: String,
    /// Closing tag of the button block wrapper.
    pub end_block_buttons: String,
    /// Submit control markup.
    pub submit_button: String,
    /// Cancel link markup.
    pub cancel_button: String,
}

/// Replaces the placeholder tokens in `template`.
///
/// Substitution is a single left-to-right pass: replaced content is emitted
/// verbatim, so tokens appearing inside it are never expanded again.
/// Unknown `{...}` sequences pass through unchanged.
pub fn substitute(template: &str, fragments: &Fragments) -> String {
    let pairs: [(&str, &str); 5] = [
        ("{items}", fragments.items.as_str()),
        ("{beginBlockButtons}", fragments.begin_block_buttons.as_str()),
        ("{endBlockButtons}", fragments.end_block_buttons.as_str()),
        ("{submitButton}", fragments.submit_button.as_str()),
        ("{cancelButton}", fragments.cancel_button.as_str()),
    ];

    let mut out = String::with_capacity(template.len());
    let mut rest = template;
    'scan: while let Some(open) = rest.find('{') {
        out.push_str(&rest[..open]);
        let tail = &rest[open..];
        for (token, replacement) in &pairs {
            if let Some(after) = tail.strip_prefix(token) {
                out.push_str(replacement);
                rest = after;
                continue 'scan;
            }
        }
        out.push('{');
        rest = &tail[1..];
    }
    out.push_str(rest);
    out
}
