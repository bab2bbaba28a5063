use super::config::DecoderConfig;
use super::tables::AiTable;
use super::tokenizer::{Segment, tokenize};
use crate::detector::symbology::MARKER_LEN;
use crate::error::ParseError;
use crate::models::{ParsedField, ParsedResult, Symbology, UNKNOWN};
use crate::utils::text::split_chars;

/// Build a field by exact code lookup against the table
pub fn resolve_field(code: &str, value: &str, table: &AiTable) -> ParsedField {
    let (name, description) = table
        .lookup(code)
        .map_or((UNKNOWN, UNKNOWN), |def| (def.name, def.description));
    ParsedField {
        code: code.to_string(),
        value: value.to_string(),
        name: name.to_string(),
        description: description.to_string(),
    }
}

/// Resolve tokenizer segments into display fields.
///
/// Metadata comes from a fresh exact-code lookup, not from whatever entry the
/// tokenizer matched, so the table stays the single source of names.
pub fn assemble(segments: &[Segment<'_>], table: &AiTable) -> Vec<ParsedField> {
    segments
        .iter()
        .map(|segment| resolve_field(segment.code, segment.value, table))
        .collect()
}

/// Turn a classified raw scan into its final result.
///
/// EAN and QR scans lose their 3-character marker, DataMatrix payloads are
/// tokenized and assembled, unknown input is returned unchanged.
pub fn assemble_result(
    kind: Option<Symbology>,
    raw: &str,
    table: &AiTable,
    config: &DecoderConfig,
) -> Result<ParsedResult, ParseError> {
    let (_, payload) = split_chars(raw, MARKER_LEN);
    let result = match kind {
        Some(Symbology::Ean13 | Symbology::Ean14 | Symbology::Qr) => {
            ParsedResult::Text(payload.to_string())
        }
        Some(Symbology::DataMatrix) => {
            let segments = tokenize(payload, table, config)?;
            ParsedResult::Fields(assemble(&segments, table))
        }
        None => ParsedResult::Text(raw.to_string()),
    };
    Ok(result)
}
