//! Convert module - text to typed values with explicit fallbacks.

mod coerce;


pub use coerce::{
    to_bool, to_bool_or, to_byte, to_char, to_decimal, to_double, to_float, to_int, to_long,
    to_short, Coerce, Coerced,
};
