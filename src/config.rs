//! Site Configuration
//!
//! Resolved once per page load from compile-time settings and the page host.

use std::net::IpAddr;

/// API origin used while developing against a local backend
pub const LOCAL_API_BASE: &str = "http://localhost:5000/api";
/// Same-origin API path used when deployed
pub const RELATIVE_API_BASE: &str = "/api";

/// Hosted form service used for the contact form
pub const FORM_SERVICE_URL: &str = "https://formspree.io/f";
pub const FORM_SERVICE_ID: &str = "xkgppawd";
/// Set to false to send contact messages to the API instead
pub const USE_FORM_SERVICE: bool = true;

const PLACEHOLDER_FORM_ID: &str = "YOUR_FORM_ID";

/// Where contact messages go
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ContactBackendKind {
    /// Hosted form service, posting to the given endpoint
    FormService { endpoint: String },
    /// `POST {api_base}/contact`
    Api,
}

impl ContactBackendKind {
    pub fn resolve(use_form_service: bool, form_id: &str) -> Self {
        if use_form_service && !form_id.is_empty() && form_id != PLACEHOLDER_FORM_ID {
            ContactBackendKind::FormService {
                endpoint: format!("{}/{}", FORM_SERVICE_URL, form_id),
            }
        } else {
            ContactBackendKind::Api
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SiteConfig {
    pub api_base: String,
    pub contact: ContactBackendKind,
}

impl SiteConfig {
    /// Read the page host and build the configuration
    pub fn load() -> Self {
        let host = web_sys::window()
            .and_then(|w| w.location().hostname().ok())
            .unwrap_or_default();
        let config = Self::for_host(&host);
        web_sys::console::log_1(
            &format!(
                "[CONFIG] host={:?} api_base={} contact={:?}",
                host, config.api_base, config.contact
            )
            .into(),
        );
        config
    }

    pub fn for_host(host: &str) -> Self {
        let api_base = if is_loopback(host) {
            LOCAL_API_BASE
        } else {
            RELATIVE_API_BASE
        };
        Self {
            api_base: api_base.to_string(),
            contact: ContactBackendKind::resolve(USE_FORM_SERVICE, FORM_SERVICE_ID),
        }
    }

    pub fn endpoint(&self, path: &str) -> String {
        format!("{}/{}", self.api_base.trim_end_matches('/'), path.trim_start_matches('/'))
    }
}

/// True for hosts that only resolve to this machine
pub fn is_loopback(host: &str) -> bool {
    let host = host.trim_start_matches('[').trim_end_matches(']');
    if host.eq_ignore_ascii_case("localhost") || host.to_ascii_lowercase().ends_with(".localhost") {
        return true;
    }
    host.parse::<IpAddr>().map(|ip| ip.is_loopback()).unwrap_or(false)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_loopback_hosts() {
        assert!(is_loopback("localhost"));
        assert!(is_loopback("app.localhost"));
        assert!(is_loopback("127.0.0.1"));
        assert!(is_loopback("127.1.2.3"));
        assert!(is_loopback("[::1]"));
        assert!(!is_loopback("example.com"));
        assert!(!is_loopback("192.168.1.10"));
        assert!(!is_loopback(""));
    }

    #[test]
    fn test_api_base_by_host() {
        assert_eq!(SiteConfig::for_host("localhost").api_base, LOCAL_API_BASE);
        assert_eq!(SiteConfig::for_host("me.dev").api_base, RELATIVE_API_BASE);
    }

    #[test]
    fn test_endpoint_join() {
        let config = SiteConfig::for_host("me.dev");
        assert_eq!(config.endpoint("projects"), "/api/projects");
        assert_eq!(config.endpoint("/contact"), "/api/contact");
    }

    #[test]
    fn test_placeholder_form_id_falls_back_to_api() {
        assert_eq!(ContactBackendKind::resolve(true, "YOUR_FORM_ID"), ContactBackendKind::Api);
        assert_eq!(ContactBackendKind::resolve(false, "abc"), ContactBackendKind::Api);
        assert_eq!(
            ContactBackendKind::resolve(true, "abc"),
            ContactBackendKind::FormService { endpoint: "https://formspree.io/f/abc".into() }
        );
    }
}
