//! Postpolicy Core - condition validation for S3 POST upload policies
//!
//! A POST upload policy is a JSON document (expiration + conditions list)
//! that constrains browser-based direct uploads to object storage. This crate
//! provides the per-condition piece: parsing one decoded condition entry into
//! a strongly-typed [`Condition`] record, rejecting malformed input with
//! specific, user-facing error messages.
//!
//! Policy assembly (expiration handling, signing, aggregating per-condition
//! errors) is left to the caller.

pub mod condition;
pub mod error;

// Re-export commonly used types
pub use condition::{Condition, ConditionOperator, ConditionParser, ConditionValue};
pub use error::{ConditionError, ErrorKind, Result};
