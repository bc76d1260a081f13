//! Cookies module - reading request cookies and emitting `Set-Cookie` values.

mod cookie_store;


pub use cookie_store::CookieStore;
