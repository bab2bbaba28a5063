//! Property-based tests for check digits and AI tokenization.
//!
//! These use proptest to generate digit strings and AI payloads and verify:
//! 1. Check digits are deterministic and always a single digit
//! 2. Valid EAN-13 scans stay valid only while untampered
//! 3. Payloads assembled from known AIs tokenize back to the same pairs

#![allow(clippy::unwrap_used, clippy::expect_used, reason = "Tests can panic")]

use gs1_scan::EanValidator;
use gs1_scan::decoder::{AiTable, DecoderConfig, tokenize};
use gs1_scan::utils::text::strip_trailing;
use proptest::prelude::*;

// -- Strategies --

/// One `(code, value)` pair for a known AI, with a value valid for its length policy.
fn ai_field_strategy() -> impl Strategy<Value = (&'static str, String)> {
    prop_oneof![
        "[0-9]{14}".prop_map(|v| ("01", v)),
        "[0-9]{6}".prop_map(|v| ("11", v)),
        "[0-9]{6}".prop_map(|v| ("17", v)),
        "[A-Z0-9-]{1,20}".prop_map(|v| ("10", v)),
        "[A-Z0-9-]{1,20}".prop_map(|v| ("21", v)),
        "[A-Z0-9-]{1,20}".prop_map(|v| ("712", v)),
    ]
}

fn assemble_payload(fields: &[(&str, String)]) -> String {
    let mut payload = String::new();
    for (code, value) in fields {
        payload.push_str(code);
        payload.push_str(value);
        if !matches!(*code, "01" | "11" | "17") {
            payload.push('+');
        }
    }
    payload
}

proptest! {
    #[test]
    fn check_digit_is_single_digit_and_deterministic(digits in "[0-9]{12}") {
        let first = EanValidator::compute_check_digit(&digits).unwrap();
        prop_assert!(first <= 9);
        prop_assert_eq!(EanValidator::compute_check_digit(&digits), Some(first));
    }

    #[test]
    fn generated_ean13_is_valid(digits in "[0-9]{12}") {
        let check = EanValidator::compute_check_digit(&digits).unwrap();
        let raw = format!("]E0{digits}{check}");
        prop_assert!(EanValidator::is_valid_ean13(&raw));
    }

    #[test]
    fn tampered_ean13_is_invalid(digits in "[0-9]{12}", delta in 1u8..=9) {
        let check = EanValidator::compute_check_digit(&digits).unwrap();
        let tampered = (check + delta) % 10;
        let tampered_raw = format!("]E0{digits}{tampered}");
        let unmarked_raw = format!("{digits}{check}");
        let too_long_raw = format!("]E0{digits}{check}0");
        let too_short_raw = format!("]E0{}{check}", &digits[1..]);
        prop_assert!(!EanValidator::is_valid_ean13(&tampered_raw));
        prop_assert!(!EanValidator::is_valid_ean13(&unmarked_raw));
        prop_assert!(!EanValidator::is_valid_ean13(&too_long_raw));
        prop_assert!(!EanValidator::is_valid_ean13(&too_short_raw));
    }

    #[test]
    fn known_ai_payload_round_trips(fields in prop::collection::vec(ai_field_strategy(), 0..12)) {
        let payload = assemble_payload(&fields);
        let segments = tokenize(&payload, &AiTable::gs1(), &DecoderConfig::default()).unwrap();

        prop_assert_eq!(segments.len(), fields.len());
        for (segment, (code, value)) in segments.iter().zip(&fields) {
            prop_assert_eq!(segment.code, *code);
            prop_assert_eq!(segment.value, value.as_str());
            prop_assert_eq!(strip_trailing(segment.value, '+'), segment.value);
        }
    }

    #[test]
    fn truncated_gtin_never_panics(len in 0usize..16) {
        let full = "0112345678901234";
        let payload = &full[..len];
        let segments = tokenize(payload, &AiTable::gs1(), &DecoderConfig::default()).unwrap();
        if len >= 2 {
            prop_assert_eq!(segments.len(), 1);
            prop_assert_eq!(segments[0].value, &full[2..len]);
        }
    }

    #[test]
    fn arbitrary_payload_tokenizes(payload in "\\PC{0,300}") {
        let segments = tokenize(&payload, &AiTable::gs1(), &DecoderConfig::default()).unwrap();
        prop_assert!(segments.len() <= payload.chars().count());
    }
}
