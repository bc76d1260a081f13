use yardimci_core::enums::DisplayEnum;

use super::{escape_html, HtmlString};

/// Renders a `<select>` with one option per enum variant.
///
/// Option values are variant names and option texts are display names. The
/// `selected` variant is marked; `option_label` adds a leading empty option.
/// `attributes` are written onto the `<select>` after `id` and `name`.
pub fn enum_select_list<E: DisplayEnum>(
    name: &str,
    selected: Option<E>,
    option_label: Option<&str>,
    attributes: &[(&str, &str)],
) -> HtmlString {
    let name = escape_html(name);
    let attributes: String = attributes
        .iter()
        .map(|(key, value)| format!(" {}=\"{}\"", escape_html(key), escape_html(value)))
        .collect();

    let mut lines = vec![format!(
        "<select id=\"{}\" name=\"{}\"{}>",
        name, name, attributes
    )];

    if let Some(label) = option_label {
        lines.push(format!("<option value=\"\">{}</option>", escape_html(label)));
    }

    lines.extend(E::variants().iter().map(|variant| {
        let marker = if selected == Some(*variant) {
            " selected=\"selected\""
        } else {
            ""
        };
        format!(
            "<option value=\"{}\"{}>{}</option>",
            escape_html(variant.name()),
            marker,
            escape_html(variant.display_name())
        )
    }));

    lines.push("</select>".to_string());
    HtmlString::from_trusted(lines.join("\n"))
}

/// The escaped display name of `value`.
pub fn enum_display_name<E: DisplayEnum>(value: E) -> HtmlString {
    HtmlString::from_text(value.display_name())
}
