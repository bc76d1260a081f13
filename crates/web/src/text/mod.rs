//! Text module - query-string editing and HTML/plain-text conversion.

mod html_text;
mod query_string;


pub use html_text::{
    convert_html_to_plain_text, convert_plain_text_to_html, convert_plain_text_to_paragraph,
    html_decode, replace_anchor_tags, strip_tags,
};
pub use query_string::{modify_query_string, remove_query_string};
