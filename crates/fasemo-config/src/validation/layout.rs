//! Strip geometry validation.

use crate::schema::FasemoConfig;

use super::helpers::validate_range_f64;

pub(crate) fn validate_layout(errors: &mut Vec<String>, config: &FasemoConfig) {
    let layout = &config.layout;
    validate_range_f64(
        errors,
        "layout.min_pane_width",
        layout.min_pane_width,
        100.0,
        2000.0,
    );
    if layout.default_pane_width < layout.min_pane_width {
        errors.push(format!(
            "layout.default_pane_width = {} is below layout.min_pane_width = {}",
            layout.default_pane_width, layout.min_pane_width
        ));
    }
    validate_range_f64(
        errors,
        "layout.separator_width",
        layout.separator_width,
        1.0,
        100.0,
    );
    validate_range_f64(
        errors,
        "layout.indicator_width",
        layout.indicator_width,
        1.0,
        20.0,
    );
}
