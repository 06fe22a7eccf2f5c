//! Values crossing a non-JSON boundary (config files, UI text fields)

use std::fmt;

use serde::{Deserialize, Serialize};

/// A raw value handed to or produced by the bridge
///
/// Deserializes untagged, so a config entry of `10` reads as `Int`,
/// `10.5` as `Double` and `"10.5"` as `Text`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ExternalValue {
    Bool(bool),
    Int(i32),
    Double(f64),
    Text(String),
}

/// Discriminant of `ExternalValue`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ValueKind {
    Text,
    Double,
    Int,
    Bool,
}

impl ExternalValue {
    pub fn kind(&self) -> ValueKind {
        match self {
            ExternalValue::Text(_) => ValueKind::Text,
            ExternalValue::Double(_) => ValueKind::Double,
            ExternalValue::Int(_) => ValueKind::Int,
            ExternalValue::Bool(_) => ValueKind::Bool,
        }
    }

    // ========== Safe Accessors (never panic) ==========

    pub fn as_text(&self) -> Option<&str> {
        match self {
            ExternalValue::Text(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_double(&self) -> Option<f64> {
        match self {
            ExternalValue::Double(d) => Some(*d),
            _ => None,
        }
    }

    pub fn as_int(&self) -> Option<i32> {
        match self {
            ExternalValue::Int(i) => Some(*i),
            _ => None,
        }
    }
}

impl ValueKind {
    pub fn name(self) -> &'static str {
        match self {
            ValueKind::Text => "Text",
            ValueKind::Double => "Double",
            ValueKind::Int => "Int",
            ValueKind::Bool => "Bool",
        }
    }
}

impl fmt::Display for ValueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl From<&str> for ExternalValue {
    fn from(s: &str) -> Self {
        ExternalValue::Text(s.to_string())
    }
}

impl From<String> for ExternalValue {
    fn from(s: String) -> Self {
        ExternalValue::Text(s)
    }
}

impl From<f64> for ExternalValue {
    fn from(d: f64) -> Self {
        ExternalValue::Double(d)
    }
}

impl From<i32> for ExternalValue {
    fn from(i: i32) -> Self {
        ExternalValue::Int(i)
    }
}

impl From<bool> for ExternalValue {
    fn from(b: bool) -> Self {
        ExternalValue::Bool(b)
    }
}
