//! Tests for request classification.

#[cfg(test)]
mod tests {
    use crate::request::*;

    const IPHONE: &str = "Mozilla/5.0 (iPhone; CPU iPhone OS 17_4 like Mac OS X) AppleWebKit/605.1.15 (KHTML, like Gecko) Version/17.4 Mobile/15E148 Safari/604.1";
    const ANDROID: &str = "Mozilla/5.0 (Linux; Android 14; Pixel 8) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/124.0 Mobile Safari/537.36";
    const DESKTOP: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/124.0 Safari/537.36";

    #[test]
    fn test_is_static_resource() {
        assert!(is_static_resource("/Content/site.CSS"));
        assert!(is_static_resource("/fonts/icons.woff2?v=4.7"));
        assert!(is_static_resource("/bundle.js.map"));
        assert!(!is_static_resource("/urunler/detay"));
        assert!(!is_static_resource("/api/data.php"));
        assert!(!is_static_resource("/v1.2/list"));
        assert!(!is_static_resource("/dosya."));
        assert!(!is_static_resource(""));
    }

    #[test]
    fn test_is_mobile_browser() {
        assert!(is_mobile_browser(IPHONE));
        assert!(is_mobile_browser(ANDROID));
        assert!(!is_mobile_browser(DESKTOP));
        assert!(!is_mobile_browser(""));
    }

    #[test]
    fn test_is_mobile_browser_by_vendor_prefix() {
        assert!(is_mobile_browser("SAMSUNG-SGH-E250/1.0"));
        assert!(is_mobile_browser("Nokia6300/2.0"));
        assert!(!is_mobile_browser("curl/8.4.0"));
        assert!(!is_mobile_browser("abc"));
    }

    #[test]
    fn test_client_ip_prefers_socket_address() {
        assert_eq!(client_ip(Some("203.0.113.5"), Some("6.6.6.6")), "203.0.113.5");
        assert_eq!(client_ip(Some("10.0.0.5"), Some("  ")), "10.0.0.5");
        assert_eq!(client_ip(Some("10.0.0.5"), None), "10.0.0.5");
    }

    #[test]
    fn test_client_ip_falls_back_to_forwarded_for() {
        assert_eq!(
            client_ip(None, Some("203.0.113.7, 10.0.0.1")),
            "203.0.113.7"
        );
        assert_eq!(client_ip(Some(""), Some("198.51.100.2")), "198.51.100.2");
    }

    #[test]
    fn test_client_ip_loopback_and_missing() {
        assert_eq!(client_ip(Some("::1"), None), "127.0.0.1");
        assert_eq!(client_ip(None, Some("[::1]")), "127.0.0.1");
        assert_eq!(client_ip(Some("2001:db8::1"), None), "2001:db8::1");
        assert_eq!(client_ip(None, None), "");
    }
}
