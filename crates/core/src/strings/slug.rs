use lazy_static::lazy_static;
use regex::Regex;

/// Characters dropped outright, so `a.b` becomes `ab` rather than `a-b`.
const DROPPED_CHARS: [char; 10] = ['?', '/', '.', '\'', '#', '%', '*', '!', '@', '+'];

lazy_static! {
    static ref AMPERSAND_REGEX: Regex = Regex::new(r"&+").expect("Invalid regex pattern");
    static ref INVALID_CHARS_REGEX: Regex =
        Regex::new(r"[^a-z0-9]").expect("Invalid regex pattern");
    static ref DASH_RUN_REGEX: Regex = Regex::new(r"-+").expect("Invalid regex pattern");
}

/// Builds a lowercase ASCII URL slug, folding Turkish letters.
///
/// ```
/// use yardimci_core::strings::to_url_slug;
///
/// assert_eq!(to_url_slug("Çok Güzel Şeyler!"), "cok-guzel-seyler");
/// assert_eq!(to_url_slug("Kitap & Defter"), "kitap-and-defter");
/// ```
pub fn to_url_slug(text: &str) -> String {
    let folded: String = text
        .trim()
        .chars()
        .filter(|c| !DROPPED_CHARS.contains(c))
        .map(fold_turkish)
        .flat_map(char::to_lowercase)
        .collect();

    let slug = AMPERSAND_REGEX.replace_all(&folded, "and");
    let slug = INVALID_CHARS_REGEX.replace_all(&slug, "-");
    let slug = DASH_RUN_REGEX.replace_all(&slug, "-");

    slug.trim_matches('-').to_string()
}

fn fold_turkish(c: char) -> char {
    match c {
        'ş' | 'Ş' => 's',
        'ı' | 'İ' | 'I' => 'i',
        'ö' | 'Ö' => 'o',
        'ü' | 'Ü' => 'u',
        'ç' | 'Ç' => 'c',
        'ğ' | 'Ğ' => 'g',
        other => other,
    }
}
