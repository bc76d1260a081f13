use cookie::{Cookie, CookieJar};
use time::{Duration, OffsetDateTime};

use crate::html::escape_html;

const COOKIE_PATH: &str = "/";

/// Cookies sent with a request plus the changes to send back.
///
/// Parse the request's `Cookie` header with [`CookieStore::from_header`],
/// change cookies, then write every value of
/// [`CookieStore::set_cookie_headers`] as a `Set-Cookie` response header.
#[derive(Debug, Default)]
pub struct CookieStore {
    jar: CookieJar,
}

impl CookieStore {
    /// Reads a `Cookie` request header. Malformed pairs are skipped.
    pub fn from_header(header: Option<&str>) -> Self {
        let mut jar = CookieJar::new();
        for parsed in Cookie::split_parse(header.unwrap_or_default().to_string()) {
            match parsed {
                Ok(cookie) => jar.add_original(cookie.into_owned()),
                Err(e) => log::debug!("Skipping malformed cookie: {}", e),
            }
        }
        Self { jar }
    }

    /// Sets `key` to `value`, expiring `days` days from now.
    pub fn set(&mut self, key: &str, value: &str, days: i64) {
        let cookie = Cookie::build((key.to_string(), value.to_string()))
            .path(COOKIE_PATH)
            .expires(OffsetDateTime::now_utc() + Duration::days(days))
            .build();
        self.jar.add(cookie);
    }

    /// The HTML-escaped, trimmed value of `key`, or an empty string.
    pub fn get(&self, key: &str) -> String {
        self.jar
            .get(key)
            .map(|cookie| escape_html(cookie.value()).trim().to_string())
            .unwrap_or_default()
    }

    pub fn exists(&self, key: &str) -> bool {
        self.jar.get(key).is_some()
    }

    /// Expires `key` on the client. Does nothing when the cookie is absent.
    pub fn delete(&mut self, key: &str) {
        if !self.exists(key) {
            return;
        }
        let removal = Cookie::build((key.to_string(), String::new()))
            .path(COOKIE_PATH)
            .build();
        self.jar.remove(removal);
    }

    /// Expires every cookie the store currently holds.
    pub fn remove_all(&mut self) {
        let names: Vec<String> = self.jar.iter().map(|c| c.name().to_string()).collect();
        for name in names {
            self.delete(&name);
        }
    }

    /// `Set-Cookie` header values for every cookie set or deleted.
    pub fn set_cookie_headers(&self) -> Vec<String> {
        self.jar.delta().map(|cookie| cookie.to_string()).collect()
    }
}
