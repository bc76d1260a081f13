//! Enums module - display names and name/value lookups for fieldless enums.

mod display_enum;


pub use display_enum::DisplayEnum;
