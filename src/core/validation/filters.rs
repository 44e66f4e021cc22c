//! Reusable value filters
//!
//! These filters normalize raw payment field values before rules see them

/// Filter: remove every space character
///
/// Only U+0020 is removed; tabs and other whitespace are left in place so
/// that format rules still see them.
pub fn strip_spaces(value: &str) -> String {
    value.replace(' ', "")
}

/// Filter: trim surrounding whitespace and convert to ASCII uppercase
pub fn uppercase(value: &str) -> String {
    value.trim().to_ascii_uppercase()
}
