//! Tests for the lira-to-words converter.

#[cfg(test)]
mod tests {
    use crate::money::{money_to_words, money_to_words_lossy};
    use rust_decimal::Decimal;
    use rust_decimal_macros::dec;

    #[test]
    fn test_zero_is_empty() {
        assert_eq!(money_to_words(Decimal::ZERO), "");
        assert_eq!(money_to_words(dec!(0.001)), "");
    }

    #[test]
    fn test_one_lira() {
        assert_eq!(money_to_words(dec!(1)), "Bir TL ");
    }

    #[test]
    fn test_hundred_drops_bir() {
        assert_eq!(money_to_words(dec!(100)), "Yüz TL ");
        assert_eq!(money_to_words(dec!(115)), "YüzOnBeş TL ");
        assert_eq!(money_to_words(dec!(200)), "İkiYüz TL ");
    }

    #[test]
    fn test_thousand_drops_bir() {
        assert_eq!(money_to_words(dec!(1000)), "Bin TL ");
        assert_eq!(money_to_words(dec!(2000)), "İkiBin TL ");
        assert_eq!(money_to_words(dec!(101000)), "YüzBirBin TL ");
        assert_eq!(money_to_words(dec!(11000)), "OnBirBin TL ");
    }

    #[test]
    fn test_reference_amount() {
        assert_eq!(
            money_to_words(dec!(1234.56)),
            "BinİkiYüzOtuzDört TL ElliAltı Kuruş"
        );
    }

    #[test]
    fn test_fraction_only() {
        assert_eq!(money_to_words(dec!(0.50)), "Elli Kuruş");
        assert_eq!(money_to_words(dec!(0.07)), "Yedi Kuruş");
        assert_eq!(money_to_words(dec!(0.99)), "DoksanDokuz Kuruş");
    }

    #[test]
    fn test_rounds_to_two_digits_away_from_zero() {
        assert_eq!(money_to_words(dec!(0.125)), "OnÜç Kuruş");
        assert_eq!(money_to_words(dec!(0.994)), "DoksanDokuz Kuruş");
        assert_eq!(money_to_words(dec!(0.995)), "Bir TL ");
    }

    #[test]
    fn test_large_scales() {
        assert_eq!(money_to_words(dec!(1000000)), "BirMilyon TL ");
        assert_eq!(money_to_words(dec!(2500000000)), "İkiMilyarBeşYüzMilyon TL ");
        assert_eq!(money_to_words(dec!(3000000000000)), "ÜçTrilyon TL ");
        assert_eq!(
            money_to_words(dec!(999999999999999999.99)),
            "DokuzYüzDoksanDokuzKatrilyonDokuzYüzDoksanDokuzTrilyon\
             DokuzYüzDoksanDokuzMilyarDokuzYüzDoksanDokuzMilyon\
             DokuzYüzDoksanDokuzBinDokuzYüzDoksanDokuz TL DoksanDokuz Kuruş"
        );
    }

    #[test]
    fn test_negative_uses_absolute_value() {
        assert_eq!(money_to_words(dec!(-42.10)), "Kırkİki TL On Kuruş");
    }

    #[test]
    fn test_more_than_eighteen_digits_keeps_low_digits() {
        assert_eq!(money_to_words(dec!(1000000000000000005)), "Beş TL ");
    }

    #[test]
    fn test_lossy_coerces_invalid_input_to_zero() {
        assert_eq!(money_to_words_lossy("abc"), "");
        assert_eq!(money_to_words_lossy(""), "");
        assert_eq!(money_to_words_lossy(" 12.30 "), "Onİki TL Otuz Kuruş");
    }

    #[test]
    fn test_is_deterministic() {
        let first = money_to_words(dec!(987654.32));
        for _ in 0..3 {
            assert_eq!(money_to_words(dec!(987654.32)), first);
        }
    }
}
