//! Error types for condition validation

use serde_json::Value;
use thiserror::Error;

/// Condition validation error
///
/// Every variant is a permanent user-input failure; there is no transient
/// failure mode. The display string is the user-facing message template.
/// Variants that reference a condition always carry the original, unmodified
/// input (never a partially-consumed remainder) so users can correlate
/// failures with their source JSON.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ConditionError {
    /// Top-level value is neither an array nor an object
    #[error("Condition must be array or dictionary: {condition}")]
    InvalidShape { condition: Value },

    /// An array element is not a string or number
    #[error("Values in condition arrays should be numbers or strings")]
    ElementType,

    /// Array was empty before operator/key extraction
    #[error("Not enough values in condition array: {condition}")]
    NotEnoughValues { condition: Value },

    /// No element left to serve as the key
    #[error("Missing key in condition array: {condition}")]
    MissingKey { condition: Value },

    /// Key does not start with `$`
    #[error("Key in condition array should start with $: {key}")]
    KeyFormat { key: String },

    /// No value left after removing operator and key
    #[error("Missing values in condition array: {condition}")]
    MissingValues { condition: Value },

    /// More than two values remain after operator and key
    #[error("Too many values in condition array: {condition}")]
    TooManyValues { condition: Value },
}

/// Failure taxonomy for condition validation
///
/// Coarser than the error variants: the empty-array and no-values-after-key
/// failures render different messages but belong to the same kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    InvalidConditionShape,
    InvalidElementType,
    MissingValues,
    MissingKey,
    InvalidKeyFormat,
    TooManyValues,
}

impl ConditionError {
    /// The taxonomy kind of this error
    pub fn kind(&self) -> ErrorKind {
        match self {
            ConditionError::InvalidShape { .. } => ErrorKind::InvalidConditionShape,
            ConditionError::ElementType => ErrorKind::InvalidElementType,
            ConditionError::NotEnoughValues { .. } | ConditionError::MissingValues { .. } => {
                ErrorKind::MissingValues
            }
            ConditionError::MissingKey { .. } => ErrorKind::MissingKey,
            ConditionError::KeyFormat { .. } => ErrorKind::InvalidKeyFormat,
            ConditionError::TooManyValues { .. } => ErrorKind::TooManyValues,
        }
    }

    /// The original condition input this error refers to, when it carries one
    pub fn condition(&self) -> Option<&Value> {
        match self {
            ConditionError::InvalidShape { condition }
            | ConditionError::NotEnoughValues { condition }
            | ConditionError::MissingKey { condition }
            | ConditionError::MissingValues { condition }
            | ConditionError::TooManyValues { condition } => Some(condition),
            ConditionError::ElementType | ConditionError::KeyFormat { .. } => None,
        }
    }

    /// The offending key, for key-format failures
    pub fn key(&self) -> Option<&str> {
        match self {
            ConditionError::KeyFormat { key } => Some(key),
            _ => None,
        }
    }
}

/// Result type for condition validation
pub type Result<T> = std::result::Result<T, ConditionError>;
