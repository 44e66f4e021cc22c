//! Reusable field validators
//!
//! These validators are used by the rules in [`crate::rules`]. Each one is
//! called with a display name for the field and the normalized value, and
//! returns a human-readable message on failure.

use regex::Regex;
use std::sync::OnceLock;

/// A validator stored behind a box, as held by rules
pub type FieldCheck = Box<dyn Fn(&str, &str) -> Result<(), String> + Send + Sync>;

/// Validator: character count must be one of `allowed`
pub fn length_one_of(
    allowed: Vec<usize>,
) -> impl Fn(&str, &str) -> Result<(), String> + Send + Sync + Clone {
    move |field: &str, value: &str| {
        let len = value.chars().count();
        if allowed.contains(&len) {
            Ok(())
        } else {
            Err(format!(
                "{} must be {} characters (actual: {})",
                field,
                join_alternatives(&allowed),
                len
            ))
        }
    }
}

/// Validator: character count must be within `min..=max`
pub fn length_between(
    min: usize,
    max: usize,
) -> impl Fn(&str, &str) -> Result<(), String> + Send + Sync + Clone {
    move |field: &str, value: &str| {
        let len = value.chars().count();
        if len < min {
            Err(format!(
                "{} must have at least {} characters (actual: {})",
                field, min, len
            ))
        } else if len > max {
            Err(format!(
                "{} must not exceed {} characters (actual: {})",
                field, max, len
            ))
        } else {
            Ok(())
        }
    }
}

/// Validator: value must match `pattern`
pub fn matches(
    pattern: &'static Regex,
    expected: &'static str,
) -> impl Fn(&str, &str) -> Result<(), String> + Send + Sync + Clone {
    move |field: &str, value: &str| {
        if pattern.is_match(value) {
            Ok(())
        } else {
            Err(format!(
                "{} must be {} (actual: '{}')",
                field, expected, value
            ))
        }
    }
}

/// Validator: value must be in allowed list
pub fn in_list(
    allowed: Vec<String>,
) -> impl Fn(&str, &str) -> Result<(), String> + Send + Sync + Clone {
    move |field: &str, value: &str| {
        if allowed.iter().any(|a| a == value) {
            Ok(())
        } else {
            Err(format!(
                "{} must be one of: {} (actual: '{}')",
                field,
                allowed.join(", "),
                value
            ))
        }
    }
}

/// Validator: ISO 13616 mod-97 check digits must be correct
///
/// Only the electronic format is accepted: upper-case letters and digits.
pub fn iban_checksum() -> impl Fn(&str, &str) -> Result<(), String> + Send + Sync + Clone {
    |field: &str, value: &str| match iban_remainder(value) {
        Some(1) => Ok(()),
        Some(_) => Err(format!("{} check digits are incorrect", field)),
        None => Err(format!(
            "{} must contain only upper-case letters and digits",
            field
        )),
    }
}

/// Regex for a BIC: institution, country, location, optional branch
pub fn bic_pattern() -> &'static Regex {
    static BIC_REGEX: OnceLock<Regex> = OnceLock::new();
    BIC_REGEX.get_or_init(|| {
        Regex::new(r"^[A-Z]{4}[A-Z]{2}[A-Z0-9]{2}([A-Z0-9]{3})?$").unwrap()
    })
}

/// Remainder of the rearranged IBAN modulo 97, `None` if it is malformed
fn iban_remainder(iban: &str) -> Option<u32> {
    let electronic = |c: char| c.is_ascii_digit() || c.is_ascii_uppercase();
    if iban.len() < 4 || !iban.chars().all(electronic) {
        return None;
    }
    let (head, tail) = iban.split_at(4);

    let mut remainder: u32 = 0;
    for c in tail.chars().chain(head.chars()) {
        let digits = c.to_digit(36)?;
        // letters expand to two digits (A = 10 .. Z = 35)
        remainder = if digits < 10 {
            (remainder * 10 + digits) % 97
        } else {
            (remainder * 100 + digits) % 97
        };
    }
    Some(remainder)
}

fn join_alternatives(values: &[usize]) -> String {
    match values {
        [] => String::new(),
        [only] => only.to_string(),
        [init @ .., last] => {
            let init: Vec<String> = init.iter().map(|v| v.to_string()).collect();
            format!("{} or {}", init.join(", "), last)
        }
    }
}
