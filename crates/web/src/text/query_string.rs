//! Query-string editing for lower-cased application URLs.

/// Query parameters in first-seen order. A `None` value is a bare key (`?flag`).
#[derive(Debug, Default)]
struct QueryParams {
    entries: Vec<(String, Option<String>)>,
}

impl QueryParams {
    fn position(&self, key: &str) -> Option<usize> {
        self.entries.iter().position(|(k, _)| k == key)
    }

    fn set(&mut self, key: &str, value: Option<&str>) {
        let value = value.map(str::to_string);
        match self.position(key) {
            Some(index) => self.entries[index].1 = value,
            None => self.entries.push((key.to_string(), value)),
        }
    }

    fn set_if_absent(&mut self, key: &str, value: Option<&str>) {
        if self.position(key).is_none() {
            self.entries.push((key.to_string(), value.map(str::to_string)));
        }
    }

    fn remove(&mut self, key: &str) {
        self.entries.retain(|(k, _)| k != key);
    }

    /// Applies each `key=value` or bare `key` segment of `query`.
    /// A segment with more than one `=` is kept whole as a bare key.
    fn apply(&mut self, query: &str, keep_existing_values: bool) {
        for part in query.split('&').filter(|p| !p.is_empty()) {
            let pieces: Vec<&str> = part.split('=').collect();
            if let [key, value] = pieces.as_slice() {
                if keep_existing_values {
                    self.set_if_absent(key, Some(value));
                } else {
                    self.set(key, Some(value));
                }
            } else {
                self.set(part, None);
            }
        }
    }

    fn render(&self) -> String {
        self.entries
            .iter()
            .map(|(key, value)| match value {
                Some(value) => format!("{}={}", key, value),
                None => key.clone(),
            })
            .collect::<Vec<_>>()
            .join("&")
    }
}

/// Splits `text` at the first `separator`, dropping the separator.
fn split_once_or_all(text: &str, separator: char) -> (&str, &str) {
    text.split_once(separator).unwrap_or((text, ""))
}

/// Merges `modification` into the query string of `url` and optionally sets
/// a new `#anchor`.
///
/// Everything is lower-cased. Existing keys keep their position; keys from
/// `modification` overwrite values or are appended.
///
/// ```
/// use yardimci_web::text::modify_query_string;
///
/// assert_eq!(
///     modify_query_string("/Urunler?page=1&sort=name", "page=2", ""),
///     "/urunler?page=2&sort=name"
/// );
/// ```
pub fn modify_query_string(url: &str, modification: &str, anchor: &str) -> String {
    let url = url.to_lowercase();
    let modification = modification.to_lowercase();
    let anchor = anchor.to_lowercase();

    let (url, mut fragment) = split_once_or_all(&url, '#');
    let (path, query) = split_once_or_all(url, '?');
    let mut query = query.to_string();

    if !modification.is_empty() {
        if query.is_empty() {
            query = modification;
        } else {
            let mut params = QueryParams::default();
            params.apply(&query, true);
            params.apply(&modification, false);
            query = params.render();
        }
    }

    if !anchor.is_empty() {
        fragment = &anchor;
    }

    let mut result = path.to_string();
    if !query.is_empty() {
        result.push('?');
        result.push_str(&query);
    }
    if !fragment.is_empty() {
        result.push('#');
        result.push_str(fragment);
    }
    result
}

/// Removes `key` from the query string of `url`, keeping any `#anchor`.
///
/// Everything is lower-cased. When a key repeats, its last value is the one
/// that would have been kept.
pub fn remove_query_string(url: &str, key: &str) -> String {
    let url = url.to_lowercase();
    let key = key.to_lowercase();

    let (url, fragment) = split_once_or_all(&url, '#');
    let (path, query) = split_once_or_all(url, '?');
    let mut query = query.to_string();

    if !key.is_empty() && !query.is_empty() {
        let mut params = QueryParams::default();
        params.apply(&query, false);
        params.remove(&key);
        query = params.render();
    }

    let mut result = path.to_string();
    if !query.is_empty() {
        result.push('?');
        result.push_str(&query);
    }
    if !fragment.is_empty() {
        result.push('#');
        result.push_str(fragment);
    }
    result
}
