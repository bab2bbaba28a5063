//! Payload decoding
//!
//! Everything that happens after a scan has been classified:
//! - AI table and tokenizer for GS1 DataMatrix payloads
//! - Result assembly (metadata lookup, marker stripping)
//! - GS1 date interpretation

/// Result assembly for every symbology
pub mod assembler;
/// Decoder configuration and environment overrides
pub mod config;
/// GS1 `YYMMDD` dates
pub mod dates;
/// Known Application Identifiers
pub mod tables;
/// AI payload tokenizer
pub mod tokenizer;

pub use assembler::{assemble, assemble_result};
pub use config::DecoderConfig;
pub use dates::Gs1Date;
pub use tables::AiTable;
pub use tokenizer::{Segment, tokenize};
