//! gs1_scan - GS1 scanner payload decoding
//!
//! Turns raw scanner strings (reader-prefix marker included) into typed records:
//! symbology detection, EAN check digit validation and GS1 Application
//! Identifier parsing for DataMatrix payloads.

#![warn(missing_docs)]
#![allow(clippy::missing_docs_in_private_items)]

/// Payload decoding (AI table, tokenizer, result assembly)
pub mod decoder;
/// Scan classification (EAN validation, symbology markers)
pub mod detector;
/// Error taxonomy
pub mod error;
/// Core data structures (ParsedField, ParsedResult, Symbology, etc.)
pub mod models;
/// Debounced keyboard-wedge scan sessions
pub mod session;
/// Scan-list loading for the CLI and benchmarks
pub mod tools;
/// Utility functions (char-safe slicing, keystroke translation)
pub mod utils;

use std::sync::OnceLock;

use rayon::prelude::*;
use serde::Serialize;

pub use decoder::{AiTable, DecoderConfig, Gs1Date};
pub use detector::{EanValidator, SymbologyDetector};
pub use error::ParseError;
pub use models::{AiDefinition, KeyEvent, ParsedField, ParsedResult, Symbology};
pub use session::{ScanSession, SessionUpdate};
pub use utils::keys::check_invisible_chars;

use decoder::assembler::assemble_result;

/// Classified and decoded scan
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Scan {
    /// Detected symbology, `None` if unknown
    pub symbology: Option<Symbology>,
    /// Decoded payload
    pub result: ParsedResult,
}

impl Scan {
    /// Check if the scan was a QR code
    pub fn is_qr(&self) -> bool {
        self.symbology == Some(Symbology::Qr)
    }
}

/// Decoder with its own AI table and configuration
#[derive(Debug, Clone)]
pub struct Decoder {
    table: AiTable,
    config: DecoderConfig,
}

impl Decoder {
    /// Create a decoder with the GS1 table and environment-derived config
    pub fn new() -> Self {
        Self::with_config(decoder::config::global().clone())
    }

    /// Create a decoder with explicit configuration
    pub fn with_config(config: DecoderConfig) -> Self {
        Self {
            table: AiTable::gs1(),
            config,
        }
    }

    /// Replace the AI table
    pub fn with_table(mut self, table: AiTable) -> Self {
        self.table = table;
        self
    }

    /// Active configuration
    pub fn config(&self) -> &DecoderConfig {
        &self.config
    }

    /// Active AI table
    pub fn table(&self) -> &AiTable {
        &self.table
    }

    /// Detect and decode a raw scan
    ///
    /// # Errors
    /// * [`ParseError::InvalidInput`] if `raw` is empty or whitespace only
    /// * [`ParseError::TokenizationLimitExceeded`] for runaway DataMatrix payloads
    pub fn decode(&self, raw: &str) -> Result<Scan, ParseError> {
        if raw.trim().is_empty() {
            return Err(ParseError::InvalidInput);
        }
        let symbology = SymbologyDetector::detect(raw);
        let result = assemble_result(symbology, raw, &self.table, &self.config)?;
        Ok(Scan { symbology, result })
    }

    /// Decode a raw scan, keeping only the payload
    pub fn parse(&self, raw: &str) -> Result<ParsedResult, ParseError> {
        self.decode(raw).map(|scan| scan.result)
    }

    /// Parse many scans in parallel, preserving input order
    pub fn parse_batch<S: AsRef<str> + Sync>(
        &self,
        raws: &[S],
    ) -> Vec<Result<ParsedResult, ParseError>> {
        raws.par_iter().map(|raw| self.parse(raw.as_ref())).collect()
    }
}

impl Default for Decoder {
    fn default() -> Self {
        Self::new()
    }
}

static DEFAULT_DECODER: OnceLock<Decoder> = OnceLock::new();

fn default_decoder() -> &'static Decoder {
    DEFAULT_DECODER.get_or_init(Decoder::new)
}

/// Decode a raw scanner string
///
/// # Arguments
/// * `raw` - Scanner output including its reader-prefix marker
///
/// # Returns
/// Field list for DataMatrix, bare payload for EAN/QR, `raw` itself otherwise
///
/// # Example
/// ```
/// let result = gs1_scan::parse("]d2011234567890123417250101").unwrap();
/// let gtin = result.field("01").unwrap();
/// assert_eq!(gtin.value, "12345678901234");
/// ```
pub fn parse(raw: &str) -> Result<ParsedResult, ParseError> {
    default_decoder().parse(raw)
}

/// Detect the symbology of a raw scan without decoding it
pub fn detect_type(raw: &str) -> Option<Symbology> {
    SymbologyDetector::detect(raw)
}

/// Parse many raw scans in parallel with the default decoder
pub fn parse_batch<S: AsRef<str> + Sync>(raws: &[S]) -> Vec<Result<ParsedResult, ParseError>> {
    default_decoder().parse_batch(raws)
}
