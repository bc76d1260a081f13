//! `<script>`, `<link>` and `<img>` tags for application-relative asset paths.

use super::{escape_html, HtmlString};

/// Normalizes an asset path for use in `src`/`href`.
///
/// `~` is dropped, absolute `http:`/`https:` URLs become protocol-relative,
/// backslashes become slashes and a leading `/` is ensured.
///
/// ```
/// use yardimci_web::html::recreate_path;
///
/// assert_eq!(recreate_path("~/Scripts/site.js"), "/Scripts/site.js");
/// assert_eq!(recreate_path("https://cdn.example.com/a.js"), "//cdn.example.com/a.js");
/// ```
pub fn recreate_path(path: &str) -> String {
    let mut new_path = path.trim().replace('~', "");

    for scheme in ["https:", "http:"] {
        if new_path.len() >= scheme.len()
            && new_path.is_char_boundary(scheme.len())
            && new_path[..scheme.len()].eq_ignore_ascii_case(scheme)
        {
            new_path = new_path[scheme.len()..].to_string();
            break;
        }
    }

    let mut new_path = new_path.replace('\\', "/");
    if !new_path.starts_with('/') {
        new_path.insert(0, '/');
    }
    new_path
}

pub fn script_tag(path: &str, is_async: bool) -> HtmlString {
    HtmlString::from_trusted(format!(
        "<script src=\"{}\"{}></script>",
        escape_html(&recreate_path(path)),
        if is_async { " async" } else { "" }
    ))
}

pub fn style_tag(path: &str) -> HtmlString {
    HtmlString::from_trusted(format!(
        "<link rel=\"stylesheet\" href=\"{}\" />",
        escape_html(&recreate_path(path))
    ))
}

pub fn favicon_tag(path: &str) -> HtmlString {
    HtmlString::from_trusted(format!(
        "<link rel=\"shortcut icon\" href=\"{}\" />",
        escape_html(&recreate_path(path))
    ))
}

pub fn picture_tag(path: &str, alt: &str) -> HtmlString {
    HtmlString::from_trusted(format!(
        "<img src=\"{}\" alt=\"{}\" />",
        escape_html(&recreate_path(path)),
        escape_html(alt)
    ))
}
