//! GS1 Application Identifier tokenizer
//!
//! Splits a concatenated AI payload (reader-prefix marker already removed)
//! into `{code, value}` segments:
//! - Known fixed-length AIs take exactly `length` characters, code included
//! - Known variable-length AIs run up to and including the next separator
//! - Unknown codes fall back to a 2-character AI with variable-length rules

use crate::decoder::config::DecoderConfig;
use crate::decoder::tables::AiTable;
use crate::error::ParseError;
use crate::models::AiDefinition;
use crate::utils::text::{char_offset, strip_trailing};

/// Characters assumed for an AI code that is not in the table
pub const FALLBACK_CODE_LEN: usize = 2;

/// One raw tokenizer step, borrowing from the payload
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Segment<'a> {
    /// AI prefix consumed (known code or 2-character fallback)
    pub code: &'a str,
    /// Value with a trailing separator stripped
    pub value: &'a str,
    /// Table entry that matched, `None` for the fallback
    pub definition: Option<&'static AiDefinition>,
}

impl Segment<'_> {
    /// Check if this segment matched a table entry
    pub fn is_known(&self) -> bool {
        self.definition.is_some()
    }
}

/// Byte length of a variable-length field whose value starts at `value_start`.
/// Includes the terminating separator when there is one.
fn variable_span(rest: &str, value_start: usize, separator: char) -> usize {
    rest[value_start..]
        .find(separator)
        .map_or(rest.len(), |i| value_start + i + separator.len_utf8())
}

/// Tokenize a DataMatrix payload into ordered segments.
///
/// An empty payload yields no segments. Fixed-length fields running past the
/// end of input are truncated to what is available. Fails with
/// [`ParseError::TokenizationLimitExceeded`] once `config.max_iterations`
/// steps have run and input remains; no partial result is returned.
pub fn tokenize<'a>(
    payload: &'a str,
    table: &AiTable,
    config: &DecoderConfig,
) -> Result<Vec<Segment<'a>>, ParseError> {
    let separator = config.separator;
    let mut segments = Vec::new();
    let mut rest = payload;
    let mut iterations = 0usize;

    while !rest.is_empty() {
        if iterations >= config.max_iterations {
            tracing::warn!(
                limit = config.max_iterations,
                remaining = rest.len(),
                "tokenizer iteration limit reached"
            );
            return Err(ParseError::TokenizationLimitExceeded {
                limit: config.max_iterations,
            });
        }
        iterations += 1;

        let definition = table.match_prefix(rest);
        let (code_len, span) = match definition {
            Some(def) => {
                let span = match def.length {
                    Some(length) => char_offset(rest, length),
                    None => variable_span(rest, def.code.len(), separator),
                };
                (def.code.len(), span)
            }
            None => {
                let code_len = char_offset(rest, FALLBACK_CODE_LEN);
                tracing::debug!(code = &rest[..code_len], "unknown AI, using 2-character fallback");
                (code_len, variable_span(rest, code_len, separator))
            }
        };

        let (field, tail) = rest.split_at(span);
        // A fixed length shorter than its own code leaves no room for a value.
        let value_start = code_len.min(field.len());
        let segment = Segment {
            code: &rest[..code_len],
            value: strip_trailing(&field[value_start..], separator),
            definition,
        };
        tracing::trace!(
            code = segment.code,
            value = segment.value,
            known = segment.is_known(),
            "segment"
        );
        segments.push(segment);
        rest = tail;
    }

    Ok(segments)
}
