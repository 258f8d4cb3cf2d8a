//! Threshold range parsing
//!
//! Operators hand checks an acceptable-value range in a compact colon
//! syntax. A value inside the range is fine; a value outside it fires
//! the alert the range was bound to.
//!
//! | Spec     | Acceptable values | Alert if                 |
//! |----------|-------------------|--------------------------|
//! | `10`     | 0 to 10           | value < 0 or value > 10  |
//! | `10:`    | 10 and above      | value < 10               |
//! | `~:10`   | 10 and below      | value > 10               |
//! | `10:20`  | 10 to 20          | value < 10 or value > 20 |
//!
//! A bare number deliberately means "0 to N is acceptable", not "N and
//! below": operator scripts depend on that exact reading.

use thiserror::Error;

/// An inclusive numeric range with possibly-infinite bounds.
///
/// # Example
///
/// ```
/// use vigil::Threshold;
///
/// let threshold = Threshold::parse("10:20")?;
/// assert!(threshold.contains(10.0));
/// assert!(threshold.contains(20.0));
/// assert!(!threshold.contains(25.0));
/// # Ok::<(), vigil::InvalidThreshold>(())
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Threshold {
    low: f64,
    high: f64,
}

/// A threshold specification that fails the range grammar
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InvalidThreshold {
    /// A side of the range is non-empty, non-numeric, and not `~`
    #[error("threshold '{spec}': value '{value}' must be an integer or float")]
    NotNumeric {
        /// The threshold text as the operator wrote it
        spec: String,
        /// The side that failed to parse
        value: String,
    },
    /// The lower bound is above the upper bound, so no value could pass
    #[error("threshold '{spec}': lower bound exceeds upper bound")]
    Inverted {
        /// The threshold text as the operator wrote it
        spec: String,
    },
}

impl Threshold {
    /// Parse the compact range syntax.
    ///
    /// A spec without a `:` is read as `:<spec>`; the text before the
    /// first `:` is the lower bound, the rest the upper bound. Each side
    /// must be an integer or float that round-trips losslessly, the
    /// literal `~` (unbounded in that direction), or empty. An empty
    /// lower bound is 0, an empty upper bound is unbounded.
    pub fn parse(spec: &str) -> Result<Self, InvalidThreshold> {
        let (low_text, high_text) = match spec.split_once(':') {
            Some(sides) => sides,
            None => ("", spec),
        };

        let low = match parse_bound(low_text, spec)? {
            // ~ on the low side means open toward negative infinity
            Some(bound) if bound == f64::INFINITY => f64::NEG_INFINITY,
            Some(bound) => bound,
            None => 0.0,
        };
        let high = match parse_bound(high_text, spec)? {
            Some(bound) if bound.is_finite() => bound,
            _ => f64::INFINITY,
        };

        if low > high {
            return Err(InvalidThreshold::Inverted {
                spec: spec.to_owned(),
            });
        }
        Ok(Self { low, high })
    }

    /// Whether `value` is acceptable. Inclusive on both ends.
    #[must_use]
    pub fn contains(self, value: f64) -> bool {
        self.low <= value && value <= self.high
    }

    /// The lower bound (possibly negative infinity).
    #[must_use]
    pub const fn low(self) -> f64 {
        self.low
    }

    /// The upper bound (possibly positive infinity).
    #[must_use]
    pub const fn high(self) -> f64 {
        self.high
    }
}

impl std::str::FromStr for Threshold {
    type Err = InvalidThreshold;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

/// Re-emits the canonical compact syntax, e.g. `0:10`, `10:`, `~:10`.
impl std::fmt::Display for Threshold {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.low == f64::NEG_INFINITY {
            f.write_str("~")?;
        } else {
            write!(f, "{}", self.low)?;
        }
        f.write_str(":")?;
        if self.high != f64::INFINITY {
            write!(f, "{}", self.high)?;
        }
        Ok(())
    }
}

/// Parse one side of a threshold spec.
///
/// `Ok(None)` means the side was empty and the caller's default applies.
/// Numeric text must round-trip losslessly, so `007` or `1e3` are
/// rejected rather than silently normalized.
fn parse_bound(text: &str, spec: &str) -> Result<Option<f64>, InvalidThreshold> {
    if text.is_empty() {
        return Ok(None);
    }
    if text == "~" {
        return Ok(Some(f64::INFINITY));
    }
    if let Ok(integer) = text.parse::<i64>() {
        if integer.to_string() == text {
            #[allow(clippy::cast_precision_loss)]
            return Ok(Some(integer as f64));
        }
    }
    if let Ok(float) = text.parse::<f64>() {
        if float.is_finite() && float.to_string() == text {
            return Ok(Some(float));
        }
    }
    Err(InvalidThreshold::NotNumeric {
        spec: spec.to_owned(),
        value: text.to_owned(),
    })
}
