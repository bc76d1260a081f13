//! Turkish lira amounts rendered as words.
//!
//! Words are concatenated without separators, the way they are printed on
//! cheques and receipts: `1234.56` becomes `"BinİkiYüzOtuzDört TL ElliAltı Kuruş"`.

use rust_decimal::{Decimal, RoundingStrategy};

use crate::constants::{MONEY_DECIMAL_PRECISION, MONEY_GROUP_COUNT};
use crate::convert::to_decimal;

/// Words for the digits 0-9 in the ones position.
pub const ONES: [&str; 10] = [
    "", "Bir", "İki", "Üç", "Dört", "Beş", "Altı", "Yedi", "Sekiz", "Dokuz",
];

/// Words for the digits 0-9 in the tens position.
pub const TENS: [&str; 10] = [
    "", "On", "Yirmi", "Otuz", "Kırk", "Elli", "Altmış", "Yetmiş", "Seksen", "Doksan",
];

/// Scale words, most significant group first.
const SCALES: [&str; MONEY_GROUP_COUNT] = ["Katrilyon", "Trilyon", "Milyar", "Milyon", "Bin", ""];

const HUNDRED: &str = "Yüz";
const THOUSAND: &str = "Bin";
const LIRA_SUFFIX: &str = " TL ";
const KURUS_SUFFIX: &str = " Kuruş";

/// Renders `amount` as Turkish words with `TL` and `Kuruş` markers.
///
/// The amount is rounded to two fraction digits (midpoint away from zero).
/// Zero renders as an empty string; negative amounts render their absolute
/// value. Lira parts longer than eighteen digits keep their eighteen least
/// significant digits.
pub fn money_to_words(amount: Decimal) -> String {
    let (lira, kurus) = split_amount(amount);

    let mut text: String = lira
        .chunks(3)
        .zip(SCALES)
        .map(|(group, scale)| group_to_words(group, scale))
        .collect();

    if !text.is_empty() {
        text.push_str(LIRA_SUFFIX);
    }

    let kurus_text = format!("{}{}", tens_word(kurus[0]), ones_word(kurus[1]));
    if !kurus_text.is_empty() {
        text.push_str(&kurus_text);
        text.push_str(KURUS_SUFFIX);
    }

    text
}

/// Coerces `input` to a decimal (zero on failure) and renders it as words.
pub fn money_to_words_lossy(input: &str) -> String {
    money_to_words(to_decimal(input).into_value())
}

/// Splits an amount into 18 lira digits and 2 kuruş digits.
fn split_amount(amount: Decimal) -> ([u8; MONEY_GROUP_COUNT * 3], [u8; 2]) {
    let rounded = amount
        .abs()
        .round_dp_with_strategy(MONEY_DECIMAL_PRECISION, RoundingStrategy::MidpointAwayFromZero);
    let formatted = format!("{:.2}", rounded);
    let (integer_part, fraction_part) = formatted
        .split_once('.')
        .unwrap_or((formatted.as_str(), "00"));

    let mut lira = [0u8; MONEY_GROUP_COUNT * 3];
    for (slot, b) in lira.iter_mut().rev().zip(integer_part.bytes().rev()) {
        *slot = b - b'0';
    }

    let mut kurus = [0u8; 2];
    for (slot, b) in kurus.iter_mut().zip(fraction_part.bytes()) {
        *slot = b - b'0';
    }

    (lira, kurus)
}

/// Renders one three-digit group followed by its scale word.
fn group_to_words(group: &[u8], scale: &str) -> String {
    let (hundreds, tens, ones) = (group[0], group[1], group[2]);

    let mut text = String::new();
    match hundreds {
        0 => {}
        1 => text.push_str(HUNDRED),
        d => {
            text.push_str(ones_word(d));
            text.push_str(HUNDRED);
        }
    }
    text.push_str(tens_word(tens));
    text.push_str(ones_word(ones));

    if text.is_empty() {
        return text;
    }

    // "Bir Bin" is spoken as plain "Bin".
    if scale == THOUSAND && hundreds == 0 && tens == 0 && ones == 1 {
        return THOUSAND.to_string();
    }

    text.push_str(scale);
    text
}

fn ones_word(digit: u8) -> &'static str {
    digit_word(&ONES, digit)
}

fn tens_word(digit: u8) -> &'static str {
    digit_word(&TENS, digit)
}

fn digit_word(table: &[&'static str; 10], digit: u8) -> &'static str {
    assert!(digit < 10, "digit out of range: {}", digit);
    table[usize::from(digit)]
}
