//! Condition array parser
//!
//! Parses decoded condition entries like:
//! - `["eq", "$acl", "public-read"]`
//! - `["starts-with", "$key", "user/eric/"]`
//! - `["content-length-range", 1048579, 10485760]`

use super::types::{Condition, ConditionOperator, ConditionValue};
use crate::error::{ConditionError, Result};
use serde_json::Value;

/// The one condition name the policy grammar writes without a `$` sigil.
const CONTENT_LENGTH_RANGE: &str = "content-length-range";

/// Parser for single condition entries of a POST policy document
///
/// Stateless; invoked once per element of a policy's `conditions` array by
/// the policy assembler. Safe to share across any number of callers.
#[derive(Debug, Default)]
pub struct ConditionParser;

impl ConditionParser {
    /// Create a new parser
    pub fn new() -> Self {
        Self
    }

    /// Parse one decoded condition entry.
    ///
    /// Array-shaped conditions produce a [`Condition`]. Dictionary-shaped
    /// conditions (`{"bucket": "name-of-bucket"}`) are a recognized shape with
    /// no implemented semantics and yield `Ok(None)`. Any other shape fails
    /// with the offending value in the message.
    pub fn parse(&self, raw: &Value) -> Result<Option<Condition>> {
        match raw {
            Value::Array(items) => self.parse_list(items).map(Some),
            Value::Object(_) => {
                log::debug!("skipping dictionary-shaped condition: {raw}");
                Ok(None)
            }
            other => Err(ConditionError::InvalidShape { condition: other.clone() }),
        }
    }

    /// Parse an array-shaped condition.
    ///
    /// The caller's data is never mutated; extraction walks a typed working
    /// copy. Errors always reference the full original array, never the
    /// remainder left after operator/key extraction.
    pub fn parse_list(&self, items: &[Value]) -> Result<Condition> {
        let scalars = Self::check_elements(items)?;
        let original = || Value::Array(items.to_vec());

        let mut rest = scalars.as_slice();

        // The first element is an operator only if it matches one of the two
        // operator literals; otherwise it is left in place for the key.
        let operator = match rest.first() {
            None => return Err(ConditionError::NotEnoughValues { condition: original() }),
            Some(ConditionValue::String(s)) => match ConditionOperator::from_literal(s) {
                Some(op) => {
                    rest = &rest[1..];
                    Some(op)
                }
                None => None,
            },
            Some(ConditionValue::Number(_)) => None,
        };

        let key = match rest.first() {
            None => return Err(ConditionError::MissingKey { condition: original() }),
            Some(element) => {
                let key = Self::check_key(element)?;
                rest = &rest[1..];
                key
            }
        };

        match rest {
            [] => Err(ConditionError::MissingValues { condition: original() }),
            [value] => Ok(Condition {
                operator,
                key,
                value: Some(value.clone()),
                value_range: None,
            }),
            [low, high] => Ok(Condition {
                operator,
                key,
                value: None,
                value_range: Some([low.clone(), high.clone()]),
            }),
            _ => Err(ConditionError::TooManyValues { condition: original() }),
        }
    }

    /// Validate every element up front: strings and numbers only.
    fn check_elements(items: &[Value]) -> Result<Vec<ConditionValue>> {
        items
            .iter()
            .map(|item| match item {
                Value::String(s) => Ok(ConditionValue::String(s.clone())),
                Value::Number(n) => n
                    .as_f64()
                    .map(ConditionValue::Number)
                    .ok_or(ConditionError::ElementType),
                _ => Err(ConditionError::ElementType),
            })
            .collect()
    }

    /// Validate the key element and strip exactly one leading `$`.
    ///
    /// `content-length-range` is the single condition name written without
    /// the sigil and is accepted as-is.
    fn check_key(element: &ConditionValue) -> Result<String> {
        let key = match element {
            ConditionValue::String(s) => s.as_str(),
            ConditionValue::Number(n) => {
                return Err(ConditionError::KeyFormat { key: n.to_string() });
            }
        };

        if let Some(stripped) = key.strip_prefix('$') {
            Ok(stripped.to_string())
        } else if key == CONTENT_LENGTH_RANGE {
            Ok(key.to_string())
        } else {
            Err(ConditionError::KeyFormat { key: key.to_string() })
        }
    }
}
