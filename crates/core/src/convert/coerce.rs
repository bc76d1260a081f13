//! Default-on-failure coercion from text.
//!
//! Every coercion returns a [`Coerced`] value: callers that only want "a
//! number, or zero" use [`Coerced::into_value`], callers that need to tell a
//! real zero from a failed parse match on the variant.

use std::str::FromStr;

use rust_decimal::Decimal;

/// Outcome of coercing text into a typed value.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Coerced<T> {
    /// The input parsed cleanly.
    Parsed(T),
    /// The input could not be parsed; the type's default was substituted.
    Defaulted(T),
}

impl<T> Coerced<T> {
    pub fn value(&self) -> &T {
        match self {
            Coerced::Parsed(v) | Coerced::Defaulted(v) => v,
        }
    }

    pub fn into_value(self) -> T {
        match self {
            Coerced::Parsed(v) | Coerced::Defaulted(v) => v,
        }
    }

    pub fn is_parsed(&self) -> bool {
        matches!(self, Coerced::Parsed(_))
    }

    pub fn is_defaulted(&self) -> bool {
        matches!(self, Coerced::Defaulted(_))
    }

    /// The parsed value, or `None` when the default was substituted.
    pub fn ok(self) -> Option<T> {
        match self {
            Coerced::Parsed(v) => Some(v),
            Coerced::Defaulted(_) => None,
        }
    }

    pub fn map<U, F: FnOnce(T) -> U>(self, f: F) -> Coerced<U> {
        match self {
            Coerced::Parsed(v) => Coerced::Parsed(f(v)),
            Coerced::Defaulted(v) => Coerced::Defaulted(f(v)),
        }
    }
}

/// Types that can be coerced from text with a fallback value.
pub trait Coerce: Sized {
    /// Value substituted when parsing fails.
    fn default_value() -> Self;

    /// Attempts a strict parse of already-trimmed text.
    fn parse_text(text: &str) -> Option<Self>;

    fn coerce(input: &str) -> Coerced<Self> {
        match Self::parse_text(input.trim()) {
            Some(value) => Coerced::Parsed(value),
            None => {
                log::debug!(
                    "Could not coerce '{}' to {}, using default",
                    input,
                    std::any::type_name::<Self>()
                );
                Coerced::Defaulted(Self::default_value())
            }
        }
    }
}

macro_rules! impl_coerce_from_str {
    ($($ty:ty => $default:expr),* $(,)?) => {
        $(
            impl Coerce for $ty {
                fn default_value() -> Self {
                    $default
                }

                fn parse_text(text: &str) -> Option<Self> {
                    <$ty>::from_str(text).ok()
                }
            }
        )*
    };
}

impl_coerce_from_str! {
    i16 => 0,
    i32 => 0,
    i64 => 0,
    u8 => 0,
}

impl Coerce for f32 {
    fn default_value() -> Self {
        0.0
    }

    fn parse_text(text: &str) -> Option<Self> {
        f32::from_str(text).ok().filter(|v| v.is_finite())
    }
}

impl Coerce for f64 {
    fn default_value() -> Self {
        0.0
    }

    fn parse_text(text: &str) -> Option<Self> {
        f64::from_str(text).ok().filter(|v| v.is_finite())
    }
}

impl Coerce for Decimal {
    fn default_value() -> Self {
        Decimal::ZERO
    }

    fn parse_text(text: &str) -> Option<Self> {
        Decimal::from_str(text)
            .or_else(|_| Decimal::from_scientific(text))
            .ok()
    }
}

impl Coerce for bool {
    fn default_value() -> Self {
        false
    }

    fn parse_text(text: &str) -> Option<Self> {
        if text.eq_ignore_ascii_case("true") {
            Some(true)
        } else if text.eq_ignore_ascii_case("false") {
            Some(false)
        } else {
            None
        }
    }
}

impl Coerce for char {
    fn default_value() -> Self {
        ' '
    }

    fn parse_text(text: &str) -> Option<Self> {
        let mut chars = text.chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) => Some(c),
            _ => None,
        }
    }
}

pub fn to_int(input: &str) -> Coerced<i32> {
    i32::coerce(input)
}

pub fn to_long(input: &str) -> Coerced<i64> {
    i64::coerce(input)
}

pub fn to_short(input: &str) -> Coerced<i16> {
    i16::coerce(input)
}

pub fn to_byte(input: &str) -> Coerced<u8> {
    u8::coerce(input)
}

pub fn to_float(input: &str) -> Coerced<f32> {
    f32::coerce(input)
}

pub fn to_double(input: &str) -> Coerced<f64> {
    f64::coerce(input)
}

pub fn to_decimal(input: &str) -> Coerced<Decimal> {
    Decimal::coerce(input)
}

pub fn to_bool(input: &str) -> Coerced<bool> {
    bool::coerce(input)
}

/// Like [`to_bool`], but a missing input yields `default` instead of `false`.
pub fn to_bool_or(input: Option<&str>, default: bool) -> bool {
    match input {
        Some(text) => to_bool(text).into_value(),
        None => default,
    }
}

/// A single character; whitespace-only input keeps its one character.
pub fn to_char(input: &str) -> Coerced<char> {
    // Trimming would turn " " into nothing, so chars are parsed untrimmed.
    match char::parse_text(input) {
        Some(c) => Coerced::Parsed(c),
        None => char::coerce(input),
    }
}
