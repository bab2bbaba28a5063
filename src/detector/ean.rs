use super::symbology::EAN_MARKER;

/// Digits in an EAN-13 body (12 data digits + check digit)
pub const EAN13_LEN: usize = 13;
/// Digits in an EAN-14 body (13 data digits + check digit)
pub const EAN14_LEN: usize = 14;

/// Mod-10 check digit validation for EAN-13 / EAN-14
pub struct EanValidator;

impl EanValidator {
    /// Compute the weighted mod-10 check digit.
    ///
    /// Weights alternate 1, 3, 1, 3, ... starting with 1 at index 0. Returns
    /// `None` if any character is not an ASCII digit.
    pub fn compute_check_digit(digits: &str) -> Option<u8> {
        let mut sum = 0u32;
        for (i, b) in digits.bytes().enumerate() {
            if !b.is_ascii_digit() {
                return None;
            }
            let weight = if i % 2 == 0 { 1 } else { 3 };
            sum += u32::from(b - b'0') * weight;
        }
        Some(((10 - sum % 10) % 10) as u8)
    }

    /// Validate `]E0` followed by exactly `len` digits with a matching check digit
    pub fn is_valid(raw: &str, len: usize) -> bool {
        let Some(body) = raw.strip_prefix(EAN_MARKER) else {
            return false;
        };
        if len == 0 || body.len() != len || !body.bytes().all(|b| b.is_ascii_digit()) {
            return false;
        }
        let (data, check) = body.split_at(len - 1);
        let expected = check.as_bytes()[0] - b'0';
        Self::compute_check_digit(data) == Some(expected)
    }

    /// Validate a scanned EAN-13 (`]E0` + 13 digits)
    pub fn is_valid_ean13(raw: &str) -> bool {
        Self::is_valid(raw, EAN13_LEN)
    }

    /// Validate a scanned EAN-14 (`]E0` + 14 digits)
    ///
    /// Weights are left-aligned (1 at index 0), unlike GS1's right-aligned
    /// GTIN-14 weighting, so some standard GTIN-14s do not validate.
    pub fn is_valid_ean14(raw: &str) -> bool {
        Self::is_valid(raw, EAN14_LEN)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_check_digit_known_ean13() {
        assert_eq!(EanValidator::compute_check_digit("400638133393"), Some(1));
        assert_eq!(EanValidator::compute_check_digit("590123412345"), Some(7));
    }

    #[test]
    fn test_check_digit_multiple_of_ten_maps_to_zero() {
        // 1 + 9*3 + 2 = 30
        assert_eq!(EanValidator::compute_check_digit("192"), Some(0));
        assert_eq!(EanValidator::compute_check_digit("000000000000"), Some(0));
    }

    #[test]
    fn test_check_digit_rejects_non_digits() {
        assert_eq!(EanValidator::compute_check_digit("40063813339X"), None);
    }

    #[test]
    fn test_ean13() {
        assert!(EanValidator::is_valid_ean13("]E04006381333931"));
        assert!(EanValidator::is_valid_ean13("]E05901234123457"));
        assert!(!EanValidator::is_valid_ean13("]E04006381333932"));
        assert!(!EanValidator::is_valid_ean13("4006381333931"));
        assert!(!EanValidator::is_valid_ean13("]E0400638133393"));
        assert!(!EanValidator::is_valid_ean13("]E040063813339310"));
    }

    #[test]
    fn test_non_digit_check_position_is_invalid() {
        assert!(!EanValidator::is_valid_ean13("]E0400638133393X"));
        assert!(!EanValidator::is_valid_ean13("]E040063813339é"));
        assert!(!EanValidator::is_valid_ean14("]E0040063813339+"));
    }

    #[test]
    fn test_ean14() {
        // 0*1 + 4*3 + 0 + 0 + 6 + 3*3 + 8 + 1*3 + 3 + 3*3 + 3 + 9*3 + 3 = 83
        assert!(EanValidator::is_valid_ean14("]E004006381333937"));
        assert!(!EanValidator::is_valid_ean14("]E004006381333938"));
        assert!(!EanValidator::is_valid_ean14("]E04006381333931"));
    }

    #[test]
    fn test_ean14_weighting_is_left_aligned() {
        // Valid under GS1's right-aligned GTIN-14 weights, not under index-0 weight 1.
        assert!(!EanValidator::is_valid_ean14("]E010614141000415"));
        assert_eq!(EanValidator::compute_check_digit("1061414100041"), Some(3));
        assert!(EanValidator::is_valid_ean14("]E010614141000413"));
    }
}
