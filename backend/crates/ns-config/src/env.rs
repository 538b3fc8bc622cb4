//! Environment variable overrides. Unset variables leave the target alone.

use std::env;
use std::str::FromStr;

/// Replace `target` with the raw value of `var`.
pub(crate) fn string(var: &str, target: &mut String) {
    if let Ok(value) = env::var(var) {
        *target = value;
    }
}

/// Set `target` to the raw value of `var`.
pub(crate) fn optional(var: &str, target: &mut Option<String>) {
    if let Ok(value) = env::var(var) {
        *target = Some(value);
    }
}

/// Parse `var` into `target`; unparseable values are ignored.
pub(crate) fn parsed<T: FromStr>(var: &str, target: &mut T) {
    if let Some(value) = env::var(var).ok().and_then(|v| v.trim().parse().ok()) {
        *target = value;
    }
}

/// "true", "1" and "yes" enable; anything else disables.
pub(crate) fn flag(var: &str, target: &mut bool) {
    if let Ok(value) = env::var(var) {
        *target = matches!(value.trim().to_ascii_lowercase().as_str(), "true" | "1" | "yes");
    }
}
