//! Condition types for POST policy parsing

use serde::{Deserialize, Serialize};
use std::fmt;

/// Comparison mode for a condition
///
/// An absent operator means the exact-match-by-position convention used
/// elsewhere in the policy grammar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ConditionOperator {
    /// Exact match
    #[serde(rename = "eq")]
    Eq,
    /// Prefix match
    #[serde(rename = "starts-with")]
    StartsWith,
}

impl ConditionOperator {
    /// The literal as it appears in the policy document
    pub fn as_str(&self) -> &'static str {
        match self {
            ConditionOperator::Eq => "eq",
            ConditionOperator::StartsWith => "starts-with",
        }
    }

    /// Recognize an operator literal, `None` for anything else
    pub fn from_literal(s: &str) -> Option<Self> {
        match s {
            "eq" => Some(ConditionOperator::Eq),
            "starts-with" => Some(ConditionOperator::StartsWith),
            _ => None,
        }
    }
}

impl fmt::Display for ConditionOperator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single scalar allowed inside a condition array
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ConditionValue {
    /// String value
    String(String),
    /// Number value (f64 covers both int and float policy values)
    Number(f64),
}

impl ConditionValue {
    /// String contents, if this is a string
    pub fn as_str(&self) -> Option<&str> {
        match self {
            ConditionValue::String(s) => Some(s),
            ConditionValue::Number(_) => None,
        }
    }

    /// Numeric contents, if this is a number
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            ConditionValue::Number(n) => Some(*n),
            ConditionValue::String(_) => None,
        }
    }
}

impl fmt::Display for ConditionValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConditionValue::String(s) => f.write_str(s),
            ConditionValue::Number(n) => write!(f, "{n}"),
        }
    }
}

impl From<&str> for ConditionValue {
    fn from(s: &str) -> Self {
        ConditionValue::String(s.to_string())
    }
}

impl From<f64> for ConditionValue {
    fn from(n: f64) -> Self {
        ConditionValue::Number(n)
    }
}

/// One parsed constraint entry from a policy's `conditions` list
///
/// Exactly one of `value` / `value_range` is set, or neither is. Which one is
/// determined solely by how many elements remained after operator and key
/// extraction, never by later validation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Condition {
    /// Comparison mode, present only when the array led with an operator literal
    #[serde(skip_serializing_if = "Option::is_none")]
    pub operator: Option<ConditionOperator>,
    /// Constrained field name, leading `$` sigil stripped
    pub key: String,
    /// Single constraint value
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<ConditionValue>,
    /// Two-element [low, high] bound, in input order
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value_range: Option<[ConditionValue; 2]>,
}

impl Condition {
    /// Whether this condition carries a [low, high] range
    pub fn is_range(&self) -> bool {
        self.value_range.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_operator_literals() {
        assert_eq!(ConditionOperator::from_literal("eq"), Some(ConditionOperator::Eq));
        assert_eq!(
            ConditionOperator::from_literal("starts-with"),
            Some(ConditionOperator::StartsWith)
        );
        assert_eq!(ConditionOperator::from_literal("content-length-range"), None);
        assert_eq!(ConditionOperator::from_literal("EQ"), None);

        assert_eq!(ConditionOperator::Eq.to_string(), "eq");
        assert_eq!(ConditionOperator::StartsWith.to_string(), "starts-with");
    }

    #[test]
    fn test_value_accessors() {
        let s = ConditionValue::from("user/eric/");
        assert_eq!(s.as_str(), Some("user/eric/"));
        assert_eq!(s.as_f64(), None);

        let n = ConditionValue::from(1024.0);
        assert_eq!(n.as_str(), None);
        assert_eq!(n.as_f64(), Some(1024.0));
    }

    #[test]
    fn test_value_untagged_serde() {
        let s: ConditionValue = serde_json::from_str(r#""user/eric/""#).unwrap();
        assert_eq!(s, ConditionValue::String("user/eric/".to_string()));

        let n: ConditionValue = serde_json::from_str("1048579").unwrap();
        assert_eq!(n, ConditionValue::Number(1048579.0));
    }

    #[test]
    fn test_condition_serialize_skips_unset() {
        let condition = Condition {
            operator: Some(ConditionOperator::StartsWith),
            key: "key".to_string(),
            value: Some(ConditionValue::from("user/eric/")),
            value_range: None,
        };

        let json = serde_json::to_string(&condition).unwrap();
        assert_eq!(json, r#"{"operator":"starts-with","key":"key","value":"user/eric/"}"#);

        let range = Condition {
            operator: None,
            key: "content-length-range".to_string(),
            value: None,
            value_range: Some([ConditionValue::from(1.0), ConditionValue::from(10.0)]),
        };
        assert!(range.is_range());

        let json = serde_json::to_string(&range).unwrap();
        assert_eq!(json, r#"{"key":"content-length-range","value_range":[1.0,10.0]}"#);
    }
}
