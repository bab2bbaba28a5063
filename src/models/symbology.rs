use std::fmt;

use serde::Serialize;

/// Symbology recognised from a scanner's reader-prefix marker
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Symbology {
    /// EAN-13 with valid check digit
    #[serde(rename = "EAN-13")]
    Ean13,
    /// EAN-14 (GTIN-14) with valid check digit
    #[serde(rename = "EAN-14")]
    Ean14,
    /// GS1 DataMatrix
    DataMatrix,
    /// QR code
    #[serde(rename = "QR")]
    Qr,
}

impl Symbology {
    /// Display label as shown to users
    pub fn as_str(&self) -> &'static str {
        match self {
            Symbology::Ean13 => "EAN-13",
            Symbology::Ean14 => "EAN-14",
            Symbology::DataMatrix => "DataMatrix",
            Symbology::Qr => "QR",
        }
    }

    /// Check if this is one of the EAN family
    pub fn is_ean(&self) -> bool {
        matches!(self, Symbology::Ean13 | Symbology::Ean14)
    }
}

impl fmt::Display for Symbology {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
