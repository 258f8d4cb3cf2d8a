//! Built-in validation strategies
//!
//! A validation strategy compares one measurement against whatever the
//! operator supplied and concludes with a [`Verdict`]. Checks with more
//! exotic needs supply their own strategy; these two cover the common
//! cases of a number against thresholds and a string against a pattern.

use regex::RegexBuilder;

use crate::core::models::{Status, Threshold, Verdict};

/// Validate a numeric measurement against warning and critical ranges.
///
/// The measurement text is coerced to a number only if it round-trips
/// losslessly as an integer or float; anything else concludes
/// [`Status::Unknown`] carrying the original text. The critical range is
/// checked before the warning range, so a value outside both reports
/// critical. An absent range is skipped, never treated as a violation.
#[must_use]
pub fn numeric(value: &str, warn: Option<&Threshold>, crit: Option<&Threshold>) -> Verdict {
    let Some(number) = coerce(value) else {
        return Verdict::new(Status::Unknown, value);
    };

    if let Some(crit) = crit {
        if !crit.contains(number) {
            return Verdict::new(Status::Critical, value);
        }
    }
    if let Some(warn) = warn {
        if !warn.contains(number) {
            return Verdict::new(Status::Warning, value);
        }
    }
    Verdict::new(Status::Ok, value)
}

/// Validate a string measurement against a case-insensitive pattern.
///
/// A match concludes [`Status::Ok`] carrying the measurement; a miss
/// concludes [`Status::Critical`] with a diagnostic naming both sides.
/// A pattern the regex engine rejects concludes [`Status::Unknown`], so
/// the check still emits a well-formed line.
#[must_use]
pub fn string_match(value: &str, pattern: &str) -> Verdict {
    match RegexBuilder::new(pattern).case_insensitive(true).build() {
        Ok(re) if re.is_match(value) => Verdict::new(Status::Ok, value),
        Ok(_) => Verdict::new(
            Status::Critical,
            format!("{value} does not match /{pattern}/i"),
        ),
        Err(err) => Verdict::new(Status::Unknown, format!("invalid pattern /{pattern}/i: {err}")),
    }
}

/// Numeric coercion with the lossless round-trip rule: the parsed number
/// must print back to the exact input text.
#[allow(clippy::cast_precision_loss)]
fn coerce(value: &str) -> Option<f64> {
    if let Ok(integer) = value.parse::<i64>() {
        if integer.to_string() == value {
            return Some(integer as f64);
        }
    }
    if let Ok(float) = value.parse::<f64>() {
        if float.is_finite() && float.to_string() == value {
            return Some(float);
        }
    }
    None
}
