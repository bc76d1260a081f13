//! Money module - Turkish lira amounts as text.

mod money_words;

#[cfg(test)]
mod money_words_tests;

pub use money_words::{money_to_words, money_to_words_lossy, ONES, TENS};
