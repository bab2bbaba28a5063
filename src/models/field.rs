use serde::Serialize;

/// Metadata used when an AI code is not in the table
pub const UNKNOWN: &str = "Unknown";

/// One decoded `{code, value}` pair with its display metadata
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ParsedField {
    /// AI prefix actually consumed
    pub code: String,
    /// Field content without the trailing separator
    pub value: String,
    /// Display name, or "Unknown"
    pub name: String,
    /// Display description, or "Unknown"
    pub description: String,
}

impl ParsedField {
    /// Check if the code resolved against the AI table
    pub fn is_known(&self) -> bool {
        !(self.name == UNKNOWN && self.description == UNKNOWN)
    }
}

/// Decoded payload: a plain string for EAN/QR/unknown input, fields for DataMatrix
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum ParsedResult {
    /// Pass-through text (EAN digits, QR payload or raw unknown input)
    Text(String),
    /// Ordered GS1 fields from a DataMatrix payload
    Fields(Vec<ParsedField>),
}

impl ParsedResult {
    /// Text payload, if this is not a field list
    pub fn as_text(&self) -> Option<&str> {
        match self {
            ParsedResult::Text(text) => Some(text.as_str()),
            ParsedResult::Fields(_) => None,
        }
    }

    /// Field list, if this came from a DataMatrix payload
    pub fn fields(&self) -> Option<&[ParsedField]> {
        match self {
            ParsedResult::Text(_) => None,
            ParsedResult::Fields(fields) => Some(fields.as_slice()),
        }
    }

    /// First field with the given AI code
    pub fn field(&self, code: &str) -> Option<&ParsedField> {
        self.fields()?.iter().find(|f| f.code == code)
    }
}
