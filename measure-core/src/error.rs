//! Structured errors for unit parsing, encoding and conversion
//!
//! Every fallible operation in the workspace returns `UnitError`. Each
//! variant carries a machine-readable code alongside its message.

use thiserror::Error;

/// Standard error codes (machine-readable)
pub mod codes {
    pub const PARSE_ERROR: &str = "PARSE_ERROR";
    pub const FORMAT_ERROR: &str = "FORMAT_ERROR";
    pub const UNSUPPORTED_CONVERSION: &str = "UNSUPPORTED_CONVERSION";
    pub const UNKNOWN_UNIT: &str = "UNKNOWN_UNIT";
}

/// Error type for unit operations
#[derive(Debug, Clone, PartialEq, Error)]
pub enum UnitError {
    /// Text is not a valid invariant float literal
    #[error("Invalid {unit} value: '{text}'")]
    Parse { unit: &'static str, text: String },

    /// Malformed JSON token, or a magnitude the active JSON mode cannot encode
    #[error("Invalid JSON: {0}")]
    Format(String),

    /// The external-format bridge has no route for this kind pair
    #[error("Cannot convert {unit} from {from} to {to}")]
    UnsupportedConversion {
        unit: &'static str,
        from: String,
        to: String,
    },

    /// No bridge is registered under this name
    #[error("Unknown unit: {name}{}", format_suggestions(.suggestions))]
    UnknownUnit {
        name: String,
        suggestions: Vec<String>,
    },
}

fn format_suggestions(suggestions: &[String]) -> String {
    if suggestions.is_empty() {
        String::new()
    } else {
        format!(" (similar: {})", suggestions.join(", "))
    }
}

impl UnitError {
    pub fn parse(unit: &'static str, text: impl Into<String>) -> Self {
        Self::Parse { unit, text: text.into() }
    }

    pub fn format(details: impl Into<String>) -> Self {
        Self::Format(details.into())
    }

    pub fn unsupported(unit: &'static str, from: impl Into<String>, to: impl Into<String>) -> Self {
        Self::UnsupportedConversion {
            unit,
            from: from.into(),
            to: to.into(),
        }
    }

    pub fn unknown_unit(name: impl Into<String>, suggestions: Vec<String>) -> Self {
        Self::UnknownUnit {
            name: name.into(),
            suggestions,
        }
    }

    /// Machine-readable code for this error
    pub fn code(&self) -> &'static str {
        match self {
            UnitError::Parse { .. } => codes::PARSE_ERROR,
            UnitError::Format(_) => codes::FORMAT_ERROR,
            UnitError::UnsupportedConversion { .. } => codes::UNSUPPORTED_CONVERSION,
            UnitError::UnknownUnit { .. } => codes::UNKNOWN_UNIT,
        }
    }
}

impl From<serde_json::Error> for UnitError {
    fn from(err: serde_json::Error) -> Self {
        Self::Format(err.to_string())
    }
}
