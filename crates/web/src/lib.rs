//! Yardımcı Web - markup, cookie, query-string and request helpers for server-rendered pages.
//!
//! Nothing here touches a live request; callers pass header values and
//! paths in, and get strings or [`html::HtmlString`] markup back.

pub mod cookies;
pub mod html;
pub mod request;
pub mod text;

pub use html::HtmlString;
