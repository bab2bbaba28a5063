//! Scan classification
//!
//! - EAN-13 / EAN-14 check digit validation
//! - Symbology detection from reader-prefix markers

/// Mod-10 check digit validation
pub mod ean;
/// Reader-prefix marker classification
pub mod symbology;

pub use ean::EanValidator;
pub use symbology::SymbologyDetector;
