//! Input validation at the UI boundary.
//!
//! The engine accepts any `i64` key and any non-zero size; validated front
//! ends layer stricter rules on top (magnitude bound, leading-zero
//! rejection, sign policy). Those rules are configuration, not engine
//! behavior, so they live here as a plain limits struct consumed by
//! [`Session`](crate::Session).
//!
//! Malformed input is always converted to an [`InputViolation`], never
//! silently coerced: a non-numeric key is rejected, not parsed as 0.

use std::fmt;

/// Why a raw input string was rejected.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[non_exhaustive]
pub enum InputViolation {
    /// Input was empty after trimming.
    Empty,
    /// Input contains non-digit characters or a bare sign.
    NotNumeric,
    /// Redundant leading zeros are rejected by the active policy.
    LeadingZeros,
    /// A negative value where the policy or the operation forbids one.
    NegativeNotAllowed,
    /// Zero is not a valid table size.
    Zero,
    /// Magnitude exceeds the policy bound.
    OutOfRange { limit: i64 },
}

impl fmt::Display for InputViolation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "input is empty"),
            Self::NotNumeric => write!(f, "not a valid integer"),
            Self::LeadingZeros => write!(f, "leading zeros are not accepted"),
            Self::NegativeNotAllowed => write!(f, "negative values are not accepted here"),
            Self::Zero => write!(f, "table size must be at least 1"),
            Self::OutOfRange { limit } => {
                write!(f, "magnitude exceeds the configured limit: {limit}")
            }
        }
    }
}

impl std::error::Error for InputViolation {}

/// Formatting and magnitude rules for raw key/size input.
///
/// The bounds bound what a teaching session accepts, not what the engine can
/// represent; exceeding a bound surfaces as an error rather than silent
/// truncation.
#[derive(Clone, Copy, Debug)]
pub struct InputPolicy {
    /// Maximum absolute value accepted for keys and sizes.
    pub max_magnitude: i64,
    /// Reject digit strings with redundant leading zeros (`"007"`).
    pub reject_leading_zeros: bool,
    /// Accept negative keys. Sizes are never negative regardless.
    pub allow_negative_keys: bool,
}

impl InputPolicy {
    /// The validated-variant rules: small magnitudes, strict formatting.
    pub const DEFAULT: Self = Self {
        max_magnitude: 126,
        reject_leading_zeros: true,
        allow_negative_keys: true,
    };

    /// Anything the engine itself can represent.
    pub const RELAXED: Self = Self {
        max_magnitude: i64::MAX,
        reject_leading_zeros: false,
        allow_negative_keys: true,
    };

    /// Validates that the policy is internally consistent.
    ///
    /// # Panics
    ///
    /// Panics if the policy is invalid (indicates a configuration bug).
    #[track_caller]
    pub const fn validate(&self) {
        assert!(self.max_magnitude >= 1, "must accept at least magnitude 1");
    }

    /// Parses a key per this policy.
    pub fn parse_key(&self, raw: &str) -> Result<i64, InputViolation> {
        let raw = raw.trim();
        if raw.is_empty() {
            return Err(InputViolation::Empty);
        }
        let (negative, digits) = match raw.strip_prefix('-') {
            Some(rest) => (true, rest),
            None => (false, raw),
        };
        if negative && !self.allow_negative_keys {
            return Err(InputViolation::NegativeNotAllowed);
        }
        let magnitude = self.parse_magnitude(digits)?;
        Ok(if negative { -magnitude } else { magnitude })
    }

    /// Parses a table size per this policy. Negative sizes are rejected
    /// outright and zero is never a valid size.
    pub fn parse_size(&self, raw: &str) -> Result<usize, InputViolation> {
        let raw = raw.trim();
        if raw.is_empty() {
            return Err(InputViolation::Empty);
        }
        if raw.starts_with('-') {
            return Err(InputViolation::NegativeNotAllowed);
        }
        let magnitude = self.parse_magnitude(raw)?;
        if magnitude == 0 {
            return Err(InputViolation::Zero);
        }
        Ok(magnitude as usize)
    }

    fn parse_magnitude(&self, digits: &str) -> Result<i64, InputViolation> {
        if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
            return Err(InputViolation::NotNumeric);
        }
        if self.reject_leading_zeros && digits.len() > 1 && digits.starts_with('0') {
            return Err(InputViolation::LeadingZeros);
        }
        let value: i64 = digits.parse().map_err(|_| InputViolation::OutOfRange {
            limit: self.max_magnitude,
        })?;
        if value > self.max_magnitude {
            return Err(InputViolation::OutOfRange {
                limit: self.max_magnitude,
            });
        }
        Ok(value)
    }
}

impl Default for InputPolicy {
    fn default() -> Self {
        Self::DEFAULT
    }
}

const _: () = InputPolicy::DEFAULT.validate();
const _: () = InputPolicy::RELAXED.validate();

#[cfg(test)]
mod tests {
    use super::{InputPolicy, InputViolation};

    #[test]
    fn default_policy_valid() {
        InputPolicy::DEFAULT.validate();
    }

    #[test]
    fn relaxed_policy_valid() {
        InputPolicy::RELAXED.validate();
    }

    #[test]
    fn parse_key_accepts_signed_integers() {
        let p = InputPolicy::DEFAULT;
        assert_eq!(p.parse_key("7"), Ok(7));
        assert_eq!(p.parse_key("-7"), Ok(-7));
        assert_eq!(p.parse_key(" 126 "), Ok(126));
        assert_eq!(p.parse_key("0"), Ok(0));
    }

    #[test]
    fn parse_key_rejects_garbage() {
        let p = InputPolicy::DEFAULT;
        assert_eq!(p.parse_key(""), Err(InputViolation::Empty));
        assert_eq!(p.parse_key("   "), Err(InputViolation::Empty));
        assert_eq!(p.parse_key("abc"), Err(InputViolation::NotNumeric));
        assert_eq!(p.parse_key("1.5"), Err(InputViolation::NotNumeric));
        assert_eq!(p.parse_key("-"), Err(InputViolation::NotNumeric));
        assert_eq!(p.parse_key("1 2"), Err(InputViolation::NotNumeric));
    }

    #[test]
    fn parse_key_enforces_magnitude_bound() {
        let p = InputPolicy::DEFAULT;
        assert_eq!(
            p.parse_key("127"),
            Err(InputViolation::OutOfRange { limit: 126 })
        );
        // Far beyond i64 range still surfaces as out-of-range, not a panic.
        assert_eq!(
            p.parse_key("99999999999999999999999"),
            Err(InputViolation::OutOfRange { limit: 126 })
        );
    }

    #[test]
    fn parse_key_leading_zero_policy() {
        let strict = InputPolicy::DEFAULT;
        assert_eq!(strict.parse_key("007"), Err(InputViolation::LeadingZeros));
        assert_eq!(strict.parse_key("00"), Err(InputViolation::LeadingZeros));

        let relaxed = InputPolicy::RELAXED;
        assert_eq!(relaxed.parse_key("007"), Ok(7));
    }

    #[test]
    fn parse_key_negative_policy() {
        let no_neg = InputPolicy {
            allow_negative_keys: false,
            ..InputPolicy::DEFAULT
        };
        assert_eq!(no_neg.parse_key("-3"), Err(InputViolation::NegativeNotAllowed));
        assert_eq!(no_neg.parse_key("3"), Ok(3));
    }

    #[test]
    fn parse_size_rules() {
        let p = InputPolicy::DEFAULT;
        assert_eq!(p.parse_size("5"), Ok(5));
        assert_eq!(p.parse_size("126"), Ok(126));
        assert_eq!(p.parse_size("0"), Err(InputViolation::Zero));
        assert_eq!(p.parse_size("-5"), Err(InputViolation::NegativeNotAllowed));
        assert_eq!(
            p.parse_size("127"),
            Err(InputViolation::OutOfRange { limit: 126 })
        );
        assert_eq!(p.parse_size("05"), Err(InputViolation::LeadingZeros));
        assert_eq!(p.parse_size("five"), Err(InputViolation::NotNumeric));
    }
}
