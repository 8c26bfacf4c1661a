//! API base URL resolution

use std::fmt;

/// Port used when the page origin does not name one
pub const DEFAULT_API_PORT: u16 = 8000;

/// Scheme, host and port every API path is resolved against.
///
/// Resolved once at start-up and shared by the API client and the auth
/// forms.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BaseUrl {
    scheme: &'static str,
    host: String,
    port: String,
}

impl BaseUrl {
    /// Build from the components of a page location.
    ///
    /// `protocol` is in `window.location` form (`"https:"`); anything other
    /// than `https:` selects plain http. An empty hostname falls back to
    /// `127.0.0.1` and an empty or missing port to `default_port`.
    pub fn from_origin(protocol: &str, hostname: &str, port: Option<&str>, default_port: u16) -> Self {
        let scheme = if protocol.trim_end_matches(':') == "https" {
            "https"
        } else {
            "http"
        };
        let host = if hostname.is_empty() {
            "127.0.0.1".to_string()
        } else {
            hostname.to_string()
        };
        let port = match port.map(str::trim) {
            Some(p) if !p.is_empty() => p.to_string(),
            _ => default_port.to_string(),
        };

        Self { scheme, host, port }
    }

    /// Parse an origin string such as `https://example.com:8443`.
    ///
    /// Any path after the authority is ignored. Returns `None` when the
    /// string has no `scheme://` prefix.
    pub fn parse_origin(origin: &str, default_port: u16) -> Option<Self> {
        let (scheme, rest) = origin.trim().split_once("://")?;
        let authority = rest.split('/').next().unwrap_or("");
        let (host, port) = match authority.rsplit_once(':') {
            Some((host, port)) if !port.is_empty() && port.chars().all(|c| c.is_ascii_digit()) => {
                (host, Some(port))
            }
            _ => (authority, None),
        };
        Some(Self::from_origin(scheme, host, port, default_port))
    }

    pub fn scheme(&self) -> &str {
        self.scheme
    }

    pub fn host(&self) -> &str {
        &self.host
    }

    pub fn port(&self) -> &str {
        &self.port
    }

    /// Join an absolute API path (`/api/...`) onto the base
    pub fn join(&self, path: &str) -> String {
        if path.starts_with('/') {
            format!("{}{}", self, path)
        } else {
            format!("{}/{}", self, path)
        }
    }
}

impl fmt::Display for BaseUrl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}://{}:{}", self.scheme, self.host, self.port)
    }
}
