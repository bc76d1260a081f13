//! HTML module - tag emission for scripts, styles and enum drop-downs.

mod enum_select;
mod html_string;
mod tags;


pub use enum_select::{enum_display_name, enum_select_list};
pub use html_string::{escape_html, HtmlString};
pub use tags::{favicon_tag, picture_tag, recreate_path, script_tag, style_tag};
