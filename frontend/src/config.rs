use log::debug;

/// Port the device API listens on, on the same host that served the page.
pub const API_PORT: u16 = 8080;

/// How long a notification stays visible.
pub const HIDE_DELAY_MS: u32 = 2_000;

/// Text the notification store starts with.
pub const DEFAULT_MESSAGE: &str = "Configuration Saved Successfully";

/// Base URL of the device API, resolved once at startup.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EndpointConfig {
    base_url: String,
}

impl EndpointConfig {
    /// Builds `http://<host>:8080`. The host is used verbatim.
    pub fn for_host(host: &str) -> Self {
        Self {
            base_url: format!("http://{}:{}", host, API_PORT),
        }
    }

    /// Resolves against `window.location.hostname`.
    ///
    /// Outside a browser there is no location; the host is then empty and
    /// requests fail at the HTTP layer.
    pub fn from_window() -> Self {
        let host = web_sys::window()
            .and_then(|window| window.location().hostname().ok())
            .unwrap_or_default();
        let config = Self::for_host(&host);
        debug!("Resolved API base URL: {}", config.base_url);
        config
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn url(&self, path: &str) -> String {
        if path.starts_with('/') {
            format!("{}{}", self.base_url, path)
        } else {
            format!("{}/{}", self.base_url, path)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    #[test]
    fn test_base_url_for_host() {
        assert_eq!(
            EndpointConfig::for_host("example.com").base_url(),
            "http://example.com:8080"
        );
    }

    #[rstest]
    #[case("localhost", "http://localhost:8080")]
    #[case("192.168.1.42", "http://192.168.1.42:8080")]
    #[case("ringring.local", "http://ringring.local:8080")]
    fn test_base_url_uses_fixed_scheme_and_port(#[case] host: &str, #[case] expected: &str) {
        assert_eq!(EndpointConfig::for_host(host).base_url(), expected);
    }

    #[rstest]
    #[case("/api/status")]
    #[case("api/status")]
    fn test_url_joins_path(#[case] path: &str) {
        let endpoint = EndpointConfig::for_host("example.com");
        assert_eq!(endpoint.url(path), "http://example.com:8080/api/status");
    }

    #[test]
    fn test_resolution_is_stable() {
        let first = EndpointConfig::for_host("example.com");
        let second = EndpointConfig::for_host("example.com");
        assert_eq!(first, second);
    }
}
