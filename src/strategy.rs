//! Collision-resolution strategies.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Probe-offset rule applied when the home slot collides.
///
/// Offsets are a function of the attempt number only; the probe sequence for
/// a `(key, strategy, size)` triple is fully deterministic.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProbeStrategy {
    /// Offset grows by 1 per attempt.
    Linear,
    /// Offset is the square of the attempt number.
    Quadratic,
}

impl ProbeStrategy {
    /// Probe offset for the given attempt.
    ///
    /// Computed in `u128` so `attempt * attempt` cannot overflow for any
    /// attempt below a `usize` table size.
    pub(crate) fn offset(self, attempt: usize) -> u128 {
        match self {
            Self::Linear => attempt as u128,
            Self::Quadratic => attempt as u128 * attempt as u128,
        }
    }
}

impl fmt::Display for ProbeStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Linear => write!(f, "linear"),
            Self::Quadratic => write!(f, "quadratic"),
        }
    }
}

/// The strategy name was not recognized.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct UnknownStrategy;

impl fmt::Display for UnknownStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown strategy (expected 'linear' or 'quadratic')")
    }
}

impl std::error::Error for UnknownStrategy {}

impl FromStr for ProbeStrategy {
    type Err = UnknownStrategy;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "linear" => Ok(Self::Linear),
            "quadratic" => Ok(Self::Quadratic),
            _ => Err(UnknownStrategy),
        }
    }
}
