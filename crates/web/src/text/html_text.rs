use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    static ref NEWLINES_BETWEEN_TAGS: Regex =
        Regex::new(r"(>)(\r|\n)*(<)").expect("Invalid regex pattern");
    static ref TAG_WITH_TEXT: Regex =
        Regex::new(r"(<[^>]*>)([^<]*)").expect("Invalid regex pattern");
    static ref STRIPPED_ENTITY: Regex = Regex::new(
        r"(&#x?[0-9]{2,4};|&quot;|&amp;|&nbsp;|&lt;|&gt;|&euro;|&copy;|&reg;|&permil;|&Dagger;|&dagger;|&lsaquo;|&rsaquo;|&bdquo;|&rdquo;|&ldquo;|&sbquo;|&rsquo;|&lsquo;|&mdash;|&ndash;|&rlm;|&lrm;|&zwj;|&zwnj;|&thinsp;|&emsp;|&ensp;|&tilde;|&circ;|&Yuml;|&scaron;|&Scaron;)"
    )
    .expect("Invalid regex pattern");
    static ref ANCHOR_TAG: Regex =
        Regex::new(r"(?is)<a\b[^>]+>(.*?)</a>").expect("Invalid regex pattern");
    static ref PARAGRAPH_START: Regex = Regex::new(r"(?i)<p>").expect("Invalid regex pattern");
    static ref PARAGRAPH_END: Regex = Regex::new(r"(?i)</p>").expect("Invalid regex pattern");
}

/// Removes every tag and replaces common character entities with `@`.
pub fn strip_tags(text: &str) -> String {
    if text.is_empty() {
        return String::new();
    }
    let text = NEWLINES_BETWEEN_TAGS.replace_all(text, "><");
    let text = TAG_WITH_TEXT.replace_all(&text, "$2");
    STRIPPED_ENTITY.replace_all(&text, "@").into_owned()
}

/// Replaces each `<a ...>label</a>` with its label.
pub fn replace_anchor_tags(text: &str) -> String {
    if text.is_empty() {
        return String::new();
    }
    ANCHOR_TAG.replace_all(text, "$1").into_owned()
}

/// Line breaks become `<br />`, tabs and double spaces become `&nbsp;&nbsp;`.
pub fn convert_plain_text_to_html(text: &str) -> String {
    text.replace("\r\n", "<br />")
        .replace('\r', "<br />")
        .replace('\n', "<br />")
        .replace('\t', "&nbsp;&nbsp;")
        .replace("  ", "&nbsp;&nbsp;")
}

/// Reverses [`convert_plain_text_to_html`]: `<br>` variants become newlines
/// and `&nbsp;&nbsp;` becomes a tab.
///
/// With `decode`, entities are decoded first. With `replace_anchors`, links
/// are reduced to their labels.
pub fn convert_html_to_plain_text(text: &str, decode: bool, replace_anchors: bool) -> String {
    if text.is_empty() {
        return String::new();
    }

    let text = if decode {
        html_decode(text)
    } else {
        text.to_string()
    };
    let text = text
        .replace("<br>", "\n")
        .replace("<br >", "\n")
        .replace("<br />", "\n")
        .replace("&nbsp;&nbsp;", "\t");

    if replace_anchors {
        replace_anchor_tags(&text)
    } else {
        text
    }
}

/// Wraps every non-blank line in `<p>...</p>`, one paragraph per line.
///
/// Existing `<p>` tags are removed first and `</p>` counts as a line break.
///
/// ```
/// use yardimci_web::text::convert_plain_text_to_paragraph;
///
/// assert_eq!(
///     convert_plain_text_to_paragraph("Birinci\r\n\r\nİkinci"),
///     "<p>Birinci</p>\n<p>İkinci</p>\n"
/// );
/// ```
pub fn convert_plain_text_to_paragraph(text: &str) -> String {
    if text.is_empty() {
        return String::new();
    }

    let text = PARAGRAPH_START.replace_all(text, "");
    let text = PARAGRAPH_END.replace_all(&text, "\n");
    let text = text.replace("\r\n", "\n").replace('\r', "\n");
    let text = format!("{}\n\n", text).replace("\n\n", "\n");

    text.split('\n')
        .filter(|line| !line.trim().is_empty())
        .map(|line| format!("<p>{}</p>\n", line))
        .collect()
}

/// Decodes numeric character references and every HTML5 named entity.
/// Unknown entities are left untouched.
pub fn html_decode(text: &str) -> String {
    html_escape::decode_html_entities(text).into_owned()
}
