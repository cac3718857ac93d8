use std::fmt;

use serde::{Deserialize, Serialize};

/// One element of a heterogeneous input sequence.
///
/// Serialized untagged, so a JSON array such as `["apple", 123, 4.5]` maps
/// directly onto `Vec<Item>`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Item {
    Integer(i64),
    Float(f64),
    Text(String),
}

impl Item {
    /// Classify a command-line token.
    ///
    /// Integer literals become [`Item::Integer`], finite float literals become
    /// [`Item::Float`], and everything else is kept verbatim as text.
    pub fn parse_arg(token: &str) -> Self {
        if let Ok(value) = token.parse::<i64>() {
            return Self::Integer(value);
        }
        match token.parse::<f64>() {
            Ok(value) if value.is_finite() => Self::Float(value),
            _ => Self::Text(token.to_string()),
        }
    }

    pub fn is_numeric(&self) -> bool {
        matches!(self, Self::Integer(_) | Self::Float(_))
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(text) => Some(text),
            _ => None,
        }
    }

    pub fn kind(&self) -> &'static str {
        match self {
            Self::Integer(_) => "integer",
            Self::Float(_) => "float",
            Self::Text(_) => "text",
        }
    }
}

impl fmt::Display for Item {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Integer(value) => write!(f, "{value}"),
            Self::Float(value) => write!(f, "{value}"),
            Self::Text(text) => write!(f, "{text:?}"),
        }
    }
}

impl From<i32> for Item {
    fn from(value: i32) -> Self {
        Self::Integer(i64::from(value))
    }
}

impl From<i64> for Item {
    fn from(value: i64) -> Self {
        Self::Integer(value)
    }
}

impl From<f64> for Item {
    fn from(value: f64) -> Self {
        Self::Float(value)
    }
}

impl From<&str> for Item {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<String> for Item {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_arg_classifies_tokens() {
        assert_eq!(Item::parse_arg("123"), Item::Integer(123));
        assert_eq!(Item::parse_arg("-7"), Item::Integer(-7));
        assert_eq!(Item::parse_arg("4.5"), Item::Float(4.5));
        assert_eq!(Item::parse_arg("apple"), Item::from("apple"));
        // Non-finite spellings stay text.
        assert_eq!(Item::parse_arg("NaN"), Item::from("NaN"));
        assert_eq!(Item::parse_arg("inf"), Item::from("inf"));
        assert_eq!(Item::parse_arg(""), Item::from(""));
    }

    #[test]
    fn json_array_deserializes_untagged() {
        let items: Vec<Item> =
            serde_json::from_str(r#"["apple", 123, 4.5, -2]"#).expect("parse items");
        assert_eq!(
            items,
            vec![
                Item::from("apple"),
                Item::Integer(123),
                Item::Float(4.5),
                Item::Integer(-2),
            ]
        );
    }

    #[test]
    fn json_rejects_unsupported_values() {
        assert!(serde_json::from_str::<Vec<Item>>("[true]").is_err());
        assert!(serde_json::from_str::<Vec<Item>>("[null]").is_err());
        assert!(serde_json::from_str::<Vec<Item>>(r#"[{"id": 2}]"#).is_err());
    }

    #[test]
    fn accessors() {
        assert!(Item::from(3).is_numeric());
        assert!(!Item::from("3").is_numeric());
        assert_eq!(Item::from("x").as_text(), Some("x"));
        assert_eq!(Item::from(1.0).kind(), "float");
    }
}
