//! Tests for the IBAN validator.

#[cfg(test)]
mod tests {
    use crate::iban::{is_valid_iban, validate_iban, IbanError};

    const VALID_IBAN: &str = "TR330006100519786457841326";

    #[test]
    fn test_accepts_known_valid_iban() {
        assert!(is_valid_iban(VALID_IBAN));
        assert!(is_valid_iban("TR320010009999901234567890"));
    }

    #[test]
    fn test_ignores_whitespace_and_case() {
        assert!(is_valid_iban("TR33 0006 1005 1978 6457 8413 26"));
        assert!(is_valid_iban("tr33 0006 1005 1978 6457 8413 26"));
        assert!(is_valid_iban("\tTR33\n0006100519786457841326  "));
    }

    #[test]
    fn test_rejects_checksum_mismatch() {
        assert_eq!(
            validate_iban("TR330006100519786457841327"),
            Err(IbanError::ChecksumMismatch(28))
        );
        assert_eq!(
            validate_iban("TR340006100519786457841326"),
            Err(IbanError::ChecksumMismatch(2))
        );
    }

    #[test]
    fn test_rejects_every_single_digit_mutation() {
        for (i, c) in VALID_IBAN.char_indices().skip(4) {
            let original = c.to_digit(10).unwrap();
            for replacement in (0..10).filter(|d| *d != original) {
                let mut mutated = VALID_IBAN.to_string();
                mutated.replace_range(i..=i, &replacement.to_string());
                assert!(!is_valid_iban(&mutated), "accepted mutation {}", mutated);
            }
        }
    }

    #[test]
    fn test_rejects_non_alphanumeric() {
        assert_eq!(
            validate_iban("TR33-0006-1005-1978-6457-8413-26"),
            Err(IbanError::InvalidCharacter)
        );
        assert_eq!(
            validate_iban("TR33_0006100519786457841326"),
            Err(IbanError::InvalidCharacter)
        );
        assert_eq!(
            validate_iban("TR33Ş006100519786457841326"),
            Err(IbanError::InvalidCharacter)
        );
    }

    #[test]
    fn test_rejects_letters_that_expand_when_uppercased() {
        // "ß" uppercases to "SS", which would make this 25-character input 26.
        assert_eq!(
            validate_iban("TR6400061000000000000000ß"),
            Err(IbanError::InvalidCharacter)
        );
        assert!(!is_valid_iban("TR6400061000000000000000ß"));
        assert!(!is_valid_iban("TR640006100000000000000\u{fb00}"));
        assert_eq!(
            validate_iban("TR640006100000000000000\u{fb00}"),
            Err(IbanError::InvalidCharacter)
        );
    }

    #[test]
    fn test_rejects_turkish_dotted_and_dotless_i() {
        assert_eq!(
            validate_iban("tr33 0006 1005 1978 6457 8413 2ı"),
            Err(IbanError::InvalidCharacter)
        );
        assert_eq!(
            validate_iban("İR330006100519786457841326"),
            Err(IbanError::InvalidCharacter)
        );
        assert_eq!(
            validate_iban("ＴR330006100519786457841326"),
            Err(IbanError::InvalidCharacter)
        );
    }

    #[test]
    fn test_rejects_malformed_prefix() {
        assert_eq!(
            validate_iban("1R330006100519786457841326"),
            Err(IbanError::MalformedPrefix)
        );
        assert_eq!(
            validate_iban("TRA30006100519786457841326"),
            Err(IbanError::MalformedPrefix)
        );
        assert_eq!(validate_iban("TR33"), Err(IbanError::MalformedPrefix));
    }

    #[test]
    fn test_rejects_reserved_check_digits() {
        for digits in ["00", "01", "99"] {
            let candidate = format!("TR{}0006100519786457841326", digits);
            assert_eq!(
                validate_iban(&candidate),
                Err(IbanError::ReservedCheckDigits(digits.to_string()))
            );
        }
    }

    #[test]
    fn test_rejects_wrong_length() {
        assert_eq!(
            validate_iban("TR33000610051978645784132"),
            Err(IbanError::InvalidLength {
                expected: 26,
                actual: 25
            })
        );
        // A valid German IBAN is still rejected: only the 26-character layout is accepted.
        assert!(!is_valid_iban("DE89370400440532013000"));
    }

    #[test]
    fn test_rejects_letters_in_bank_code() {
        assert_eq!(
            validate_iban("TR3300A6100519786457841326"),
            Err(IbanError::MalformedAccount)
        );
    }

    #[test]
    fn test_empty_input() {
        assert!(!is_valid_iban(""));
        assert!(!is_valid_iban("   "));
    }

    #[test]
    fn test_repeated_calls_agree() {
        for _ in 0..3 {
            assert!(is_valid_iban(VALID_IBAN));
            assert!(!is_valid_iban("TR330006100519786457841327"));
        }
    }
}
