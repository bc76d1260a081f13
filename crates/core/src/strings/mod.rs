//! Strings module - text formatting, validation and conversion helpers.

mod json;
mod slug;
mod text;
mod validators;


pub use json::{from_json_string, to_json_string, turkish_datetime};
pub use slug::to_url_slug;
pub use text::{
    bytes_to_string, clear_text, fix_chars, from_base64, generate_guid, int_array_contains,
    split_safe, to_base64, to_capitalize, to_int_array, to_safe,
};
pub use validators::{
    is_alpha, is_alpha_numeric, is_culture_code, is_guid, is_numeric, is_valid_email,
    is_valid_ip_address, is_web_url,
};
