use super::ean::EanValidator;
use crate::models::Symbology;

/// Reader-prefix marker for EAN symbologies
pub const EAN_MARKER: &str = "]E0";
/// Reader-prefix markers for GS1 DataMatrix
pub const DATAMATRIX_MARKERS: &[&str] = &["]d2", "]d1"];
/// Reader-prefix marker for QR (modifier character follows)
pub const QR_MARKER: &str = "]Q";
/// Characters stripped from the front of a recognised scan
pub const MARKER_LEN: usize = 3;

/// Classifies raw scanner strings by reader-prefix marker
pub struct SymbologyDetector;

impl SymbologyDetector {
    /// Detect the symbology of a raw scan.
    ///
    /// Checks run in order (EAN-13, EAN-14, DataMatrix, QR) and the first
    /// match wins. `None` means unknown: treat the input as opaque.
    pub fn detect(raw: &str) -> Option<Symbology> {
        let kind = if EanValidator::is_valid_ean13(raw) {
            Some(Symbology::Ean13)
        } else if EanValidator::is_valid_ean14(raw) {
            Some(Symbology::Ean14)
        } else if Self::has_datamatrix_marker(raw) {
            Some(Symbology::DataMatrix)
        } else if raw.starts_with(QR_MARKER) {
            Some(Symbology::Qr)
        } else {
            None
        };
        tracing::debug!(kind = kind.map_or("unknown", |k| k.as_str()), "symbology detected");
        kind
    }

    /// Check if the raw scan starts with any DataMatrix marker
    pub fn has_datamatrix_marker(raw: &str) -> bool {
        DATAMATRIX_MARKERS.iter().any(|m| raw.starts_with(m))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_detect_ean() {
        assert_eq!(SymbologyDetector::detect("]E04006381333931"), Some(Symbology::Ean13));
        assert_eq!(SymbologyDetector::detect("]E004006381333937"), Some(Symbology::Ean14));
    }

    #[test]
    fn test_invalid_ean_is_unknown() {
        assert_eq!(SymbologyDetector::detect("]E04006381333932"), None);
        assert_eq!(SymbologyDetector::detect("]E0123"), None);
    }

    #[test]
    fn test_detect_datamatrix() {
        assert_eq!(
            SymbologyDetector::detect("]d20112345678901234"),
            Some(Symbology::DataMatrix)
        );
        assert_eq!(SymbologyDetector::detect("]d110ABC"), Some(Symbology::DataMatrix));
        assert_eq!(SymbologyDetector::detect("]d2"), Some(Symbology::DataMatrix));
    }

    #[test]
    fn test_detect_qr() {
        assert_eq!(SymbologyDetector::detect("]Q1https://example.com"), Some(Symbology::Qr));
        assert_eq!(SymbologyDetector::detect("]Q"), Some(Symbology::Qr));
    }

    #[test]
    fn test_markers_are_literal_prefixes() {
        assert_eq!(SymbologyDetector::detect("x]d2010"), None);
        assert_eq!(SymbologyDetector::detect("]D2010"), None);
        assert_eq!(SymbologyDetector::detect("]q1abc"), None);
        assert_eq!(SymbologyDetector::detect(""), None);
    }
}
