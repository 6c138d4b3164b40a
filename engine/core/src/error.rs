//! Core Errors
//!
//! Every failure the core can report. Only [`CalcError::InvalidArgument`] is
//! meant for the user; it is stored on the session and rendered on the result
//! screen. The other variants mean an invariant was broken somewhere between
//! the registry, the field collector and the navigator.

use thiserror::Error;

/// Errors raised by the registry, the field collector and the navigator
#[derive(Clone, Debug, Error, PartialEq)]
pub enum CalcError {
    /// A selection resolved to no calculator in the catalog
    #[error("no calculator for {selection}")]
    NotFound {
        /// Human-readable description of the failed selection
        selection: String,
    },

    /// A field index past the end of the field sequence
    #[error("field index {index} out of range (fields: {len})")]
    IndexOutOfRange {
        /// The offending index
        index: usize,
        /// Number of fields at the time of the call
        len: usize,
    },

    /// A raw field value failed to parse or validate against its spec
    #[error("{label}: {reason}")]
    InvalidArgument {
        /// Label of the field that failed
        label: String,
        /// Why it failed
        reason: String,
    },

    /// Evaluation called with the wrong number of values
    #[error("calculator expects {expected} values, got {actual}")]
    ProgrammerContract {
        /// Number of field specs on the calculator
        expected: usize,
        /// Number of values supplied
        actual: usize,
    },

    /// The catalog handed to the registry builder is unusable
    #[error("invalid catalog: {0}")]
    InvalidCatalog(String),
}

impl CalcError {
    /// Shorthand for an [`CalcError::InvalidArgument`]
    pub fn invalid(label: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidArgument {
            label: label.into(),
            reason: reason.into(),
        }
    }

    /// Whether this error may be shown to the user.
    ///
    /// Everything else is a defect and must not be swallowed.
    #[must_use]
    pub fn is_user_facing(&self) -> bool {
        matches!(self, Self::InvalidArgument { .. })
    }

    /// Label of the offending field, for argument errors
    #[must_use]
    pub fn field_label(&self) -> Option<&str> {
        match self {
            Self::InvalidArgument { label, .. } => Some(label),
            _ => None,
        }
    }
}
