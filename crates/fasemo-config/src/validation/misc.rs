//! Startup and toolbar validation.

use crate::schema::FasemoConfig;

use super::helpers::validate_range;

pub(crate) fn validate_startup(errors: &mut Vec<String>, config: &FasemoConfig) {
    let startup = &config.startup;
    if startup.default_address.trim().is_empty() {
        errors.push("startup.default_address must not be empty".into());
    }
    let scheme = &startup.default_scheme;
    let well_formed = scheme
        .chars()
        .next()
        .is_some_and(|c| c.is_ascii_alphabetic())
        && scheme
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || matches!(c, '+' | '-' | '.'));
    if !well_formed {
        errors.push(format!(
            "startup.default_scheme = {scheme:?} is not a valid URL scheme"
        ));
    }
}

pub(crate) fn validate_toolbar(errors: &mut Vec<String>, config: &FasemoConfig) {
    validate_range(errors, "toolbar.icon_size", config.toolbar.icon_size, 8, 256);
    validate_range(
        errors,
        "toolbar.pane_icon_size",
        config.toolbar.pane_icon_size,
        8,
        256,
    );
}
