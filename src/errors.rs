//! Error types for the table operations.
//!
//! Errors are operation-specific to keep diagnostics precise and avoid a
//! single monolithic error enum. All enums are `#[non_exhaustive]` to allow
//! adding variants without breaking callers; consumers should include a
//! fallback match arm.
//!
//! # Design Notes
//! - Every error is recoverable and local: a failed operation leaves the
//!   slot array unchanged and the caller surfaces the `Display` text.
//! - `InvalidKey` / `InvalidSize` only arise at the raw-string boundary
//!   ([`Session`](crate::Session)); the typed engine API cannot produce them.

use std::fmt;

use crate::input::InputViolation;

/// Errors from table initialization.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[non_exhaustive]
pub enum InitError {
    /// Size is zero, non-numeric, or outside the configured bound.
    InvalidSize(InputViolation),
}

impl fmt::Display for InitError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidSize(violation) => write!(f, "invalid table size: {violation}"),
        }
    }
}

impl std::error::Error for InitError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::InvalidSize(violation) => Some(violation),
        }
    }
}

/// Errors from insertion.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[non_exhaustive]
pub enum InsertError {
    /// The table has not been initialized.
    NotReady,
    /// No collision-resolution strategy has been chosen.
    StrategyUnset,
    /// All `size` probe attempts were exhausted without a landing slot.
    TableFull,
    /// Key is outside the accepted input domain.
    InvalidKey(InputViolation),
}

impl fmt::Display for InsertError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotReady => write!(f, "table is not initialized"),
            Self::StrategyUnset => write!(f, "no probing strategy selected"),
            Self::TableFull => write!(f, "table is full along this key's probe path"),
            Self::InvalidKey(violation) => write!(f, "invalid key: {violation}"),
        }
    }
}

impl std::error::Error for InsertError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::InvalidKey(violation) => Some(violation),
            _ => None,
        }
    }
}

/// Errors from key lookup.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[non_exhaustive]
pub enum SearchError {
    /// The table has not been initialized.
    NotReady,
    /// No collision-resolution strategy has been chosen.
    StrategyUnset,
    /// The walk reached an empty slot or exhausted all attempts.
    NotFound,
    /// Key is outside the accepted input domain.
    InvalidKey(InputViolation),
}

impl fmt::Display for SearchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotReady => write!(f, "table is not initialized"),
            Self::StrategyUnset => write!(f, "no probing strategy selected"),
            Self::NotFound => write!(f, "key not found"),
            Self::InvalidKey(violation) => write!(f, "invalid key: {violation}"),
        }
    }
}

impl std::error::Error for SearchError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::InvalidKey(violation) => Some(violation),
            _ => None,
        }
    }
}

/// Errors from key removal.
///
/// Removal walks exactly like search; the same termination rule applies.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[non_exhaustive]
pub enum RemoveError {
    /// The table has not been initialized.
    NotReady,
    /// No collision-resolution strategy has been chosen.
    StrategyUnset,
    /// The walk reached an empty slot or exhausted all attempts.
    NotFound,
    /// Key is outside the accepted input domain.
    InvalidKey(InputViolation),
}

impl fmt::Display for RemoveError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotReady => write!(f, "table is not initialized"),
            Self::StrategyUnset => write!(f, "no probing strategy selected"),
            Self::NotFound => write!(f, "key not found"),
            Self::InvalidKey(violation) => write!(f, "invalid key: {violation}"),
        }
    }
}

impl std::error::Error for RemoveError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::InvalidKey(violation) => Some(violation),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn init_error_display() {
        let err = InitError::InvalidSize(InputViolation::Zero);
        let msg = format!("{err}");
        assert!(msg.contains("size"));
    }

    #[test]
    fn insert_error_display() {
        assert_eq!(
            format!("{}", InsertError::TableFull),
            "table is full along this key's probe path"
        );
        let msg = format!(
            "{}",
            InsertError::InvalidKey(InputViolation::OutOfRange { limit: 126 })
        );
        assert!(msg.contains("126"));
    }

    #[test]
    fn search_error_display() {
        assert_eq!(format!("{}", SearchError::NotFound), "key not found");
        assert_eq!(
            format!("{}", SearchError::NotReady),
            "table is not initialized"
        );
    }

    #[test]
    fn invalid_key_preserves_source() {
        use std::error::Error as _;
        let err = RemoveError::InvalidKey(InputViolation::NotNumeric);
        assert!(err.source().is_some());
        assert!(RemoveError::NotFound.source().is_none());
    }
}
