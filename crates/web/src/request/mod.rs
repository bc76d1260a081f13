//! Request module - static asset, device and client address checks.

mod request_info;

#[cfg(test)]
mod request_tests;

pub use request_info::{client_ip, is_mobile_browser, is_static_resource};
