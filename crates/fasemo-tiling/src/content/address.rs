//! Address-field normalisation.

/// Schemes that are written without `//`.
const OPAQUE_SCHEMES: &[&str] = &["about:", "data:", "file:", "mailto:"];

/// Whether `text` already starts with a URL scheme.
pub fn has_scheme(text: &str) -> bool {
    let lower = text.to_ascii_lowercase();
    if OPAQUE_SCHEMES.iter().any(|s| lower.starts_with(s)) {
        return true;
    }
    match text.split_once("://") {
        Some((scheme, _)) => {
            let mut chars = scheme.chars();
            chars.next().is_some_and(|c| c.is_ascii_alphabetic())
                && chars.all(|c| c.is_ascii_alphanumeric() || matches!(c, '+' | '-' | '.'))
        }
        None => false,
    }
}

/// Turn address-field input into a navigable address.
///
/// Input is trimmed; empty input yields `None` (nothing to navigate to).
/// Input without a scheme gets `default_scheme://` prefixed.
pub fn normalize_address(input: &str, default_scheme: &str) -> Option<String> {
    let text = input.trim();
    if text.is_empty() {
        return None;
    }
    if has_scheme(text) {
        Some(text.to_string())
    } else {
        Some(format!("{default_scheme}://{text}"))
    }
}
