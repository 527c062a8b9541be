//! Shared range-validation helpers used by all section validators.

/// Push an error if `value` is outside `[min, max]` (integer).
pub(crate) fn validate_range(errors: &mut Vec<String>, name: &str, value: u64, min: u64, max: u64) {
    if value < min || value > max {
        errors.push(format!("{name} = {value} is out of range [{min}, {max}]"));
    }
}

/// Push an error unless `0.0 < value <= 1.0`. Used for opacity steps.
pub(crate) fn validate_step(errors: &mut Vec<String>, name: &str, value: f64) {
    if !(value > 0.0 && value <= 1.0) {
        errors.push(format!("{name} = {value} is out of range (0.0, 1.0]"));
    }
}
