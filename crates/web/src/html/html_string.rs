use std::fmt;

/// Markup that is already safe to write into a page as-is.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct HtmlString(String);

impl HtmlString {
    /// Wraps markup without escaping it.
    pub fn from_trusted(markup: impl Into<String>) -> Self {
        HtmlString(markup.into())
    }

    /// Escapes plain text so it renders literally.
    pub fn from_text(text: &str) -> Self {
        HtmlString(escape_html(text))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

impl fmt::Display for HtmlString {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Escapes `&`, `<`, `>` and both quote characters, which makes the result
/// safe in text and in quoted attribute values.
pub fn escape_html(text: &str) -> String {
    html_escape::encode_quoted_attribute(text).into_owned()
}
