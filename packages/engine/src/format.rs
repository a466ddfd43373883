/// Format a value for display: at most four decimal places, no trailing zeros.
///
/// `14.0` → `14`, `1/3` → `0.3333`, `2.5` → `2.5`. Negative zero is shown as `0`.
pub fn format_value(value: f64) -> String {
    if !value.is_finite() {
        return value.to_string();
    }

    let formatted = format!("{:.4}", value);
    let trimmed = formatted.trim_end_matches('0').trim_end_matches('.');

    if trimmed == "-0" {
        "0".to_string()
    } else {
        trimmed.to_string()
    }
}
