//! Property-based integration tests for the IBAN validator and money text.
//!
//! These tests verify that universal properties hold across all valid inputs,
//! using the `proptest` crate for random test case generation.

use proptest::prelude::*;
use rust_decimal::Decimal;
use yardimci_core::convert::to_decimal;
use yardimci_core::iban::{is_valid_iban, validate_iban, IbanError};
use yardimci_core::money::money_to_words;

// =============================================================================
// Generators
// =============================================================================

/// Builds a 26-character IBAN with correct check digits for any account part.
fn with_check_digits(country: &str, account: &str) -> String {
    let rearranged = format!("{}{}00", account, country);
    let mut remainder: u32 = 0;
    for c in rearranged.chars() {
        let digits = if c.is_ascii_uppercase() {
            (c as u32 - 55).to_string()
        } else {
            c.to_string()
        };
        for d in digits.chars() {
            remainder = (remainder * 10 + d.to_digit(10).unwrap()) % 97;
        }
    }
    format!("{}{:02}{}", country, 98 - remainder, account)
}

/// Generates a random valid IBAN (reserved check digits excluded).
fn arb_valid_iban() -> impl Strategy<Value = String> {
    ("[A-Z]{2}", "[0-9]{5}", "[A-Z0-9]{17}")
        .prop_map(|(country, bank, rest)| with_check_digits(&country, &format!("{}{}", bank, rest)))
        .prop_filter("reserved check digits", |iban| {
            !matches!(&iban[2..4], "00" | "01" | "99")
        })
}

/// Generates a monetary amount with two fraction digits.
fn arb_amount() -> impl Strategy<Value = Decimal> {
    (0u64..1_000_000_000_000, 0u32..100)
        .prop_map(|(lira, kurus)| Decimal::from(lira) + Decimal::new(i64::from(kurus), 2))
}

// =============================================================================
// Property Tests
// =============================================================================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    /// Anything whose normalized length is not 26 is rejected.
    #[test]
    fn prop_wrong_length_is_rejected(text in "[A-Za-z0-9 ]{0,40}") {
        let normalized: String = text.chars().filter(|c| !c.is_whitespace()).collect();
        prop_assume!(normalized.len() != 26);
        prop_assert!(!is_valid_iban(&text));
    }

    /// Generated IBANs with correct check digits validate, with or without spacing.
    #[test]
    fn prop_generated_ibans_validate(iban in arb_valid_iban()) {
        prop_assert!(is_valid_iban(&iban));
        let spaced: String = iban
            .chars()
            .collect::<Vec<_>>()
            .chunks(4)
            .map(|chunk| chunk.iter().collect::<String>())
            .collect::<Vec<_>>()
            .join(" ");
        prop_assert!(is_valid_iban(&spaced.to_lowercase()));
    }

    /// Changing one account digit always breaks the checksum.
    #[test]
    fn prop_single_digit_change_is_detected(
        iban in arb_valid_iban(),
        position in 4usize..9,
        delta in 1u32..10,
    ) {
        let mut chars: Vec<char> = iban.chars().collect();
        let digit = chars[position].to_digit(10).unwrap();
        chars[position] = char::from_digit((digit + delta) % 10, 10).unwrap();
        let mutated: String = chars.into_iter().collect();
        prop_assert!(matches!(validate_iban(&mutated), Err(IbanError::ChecksumMismatch(_))));
    }

    /// Reserved check digits are rejected whatever follows them.
    #[test]
    fn prop_reserved_check_digits_rejected(
        digits in prop_oneof![Just("00"), Just("01"), Just("99")],
        account in "[0-9]{5}[A-Z0-9]{17}",
    ) {
        let candidate = format!("TR{}{}", digits, account);
        prop_assert_eq!(
            validate_iban(&candidate),
            Err(IbanError::ReservedCheckDigits(digits.to_string()))
        );
    }

    /// The lira marker appears exactly when the integer part is nonzero,
    /// the kuruş marker exactly when the fraction is nonzero.
    #[test]
    fn prop_money_markers_follow_parts(amount in arb_amount()) {
        let text = money_to_words(amount);
        let has_lira = amount.trunc() != Decimal::ZERO;
        let has_kurus = amount.fract() != Decimal::ZERO;
        prop_assert_eq!(text.contains(" TL "), has_lira);
        prop_assert_eq!(text.ends_with(" Kuruş"), has_kurus);
        prop_assert!(!text.contains("BirYüz"));
        prop_assert!(!text.starts_with("BirBin"));
    }

    /// Text coercion of a formatted amount renders the same words.
    #[test]
    fn prop_money_text_matches_decimal(amount in arb_amount()) {
        let coerced = to_decimal(&amount.to_string());
        prop_assert!(coerced.is_parsed());
        prop_assert_eq!(money_to_words(coerced.into_value()), money_to_words(amount));
    }
}
