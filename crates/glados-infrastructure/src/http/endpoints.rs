use reqwest::header::{self, HeaderMap, HeaderValue};

use glados_domain::shared::DomainError;

pub const USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/120.0.0.0 Safari/537.36";

pub const CHECK_IN_PATH: &str = "/api/user/checkin";
pub const STATUS_PATH: &str = "/api/user/status";
pub const POINTS_PATH: &str = "/api/user/points";
pub const REFERER_PATH: &str = "/console/checkin";
pub const CHECK_IN_TOKEN: &str = "glados.cloud";

/// Mirrors tried in order when none are configured
pub const DEFAULT_MIRRORS: &[&str] = &[
    "https://glados.cloud",
    "https://glados.rocks",
    "https://glados.network",
];

/// Immutable description of where and how to reach the service
#[derive(Debug, Clone)]
pub struct EndpointConfig {
    mirrors: Vec<String>,
    headers: HeaderMap,
    referer_path: String,
    check_in_token: String,
}

impl EndpointConfig {
    /// Build a configuration for the given mirror base URLs.
    ///
    /// Every mirror must be an absolute http(s) URL; the list must not be
    /// empty. Trailing slashes are dropped.
    pub fn new<I, S>(mirrors: I) -> Result<Self, DomainError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut normalized = Vec::new();
        for mirror in mirrors {
            let mirror = mirror.as_ref().trim().trim_end_matches('/');
            if mirror.is_empty() {
                continue;
            }
            let parsed = url::Url::parse(mirror).map_err(|e| {
                DomainError::Configuration(format!("Invalid mirror URL '{}': {}", mirror, e))
            })?;
            if !matches!(parsed.scheme(), "http" | "https") {
                return Err(DomainError::Configuration(format!(
                    "Mirror URL '{}' must use http or https",
                    mirror
                )));
            }
            normalized.push(mirror.to_string());
        }

        if normalized.is_empty() {
            return Err(DomainError::Configuration(
                "At least one mirror URL is required".to_string(),
            ));
        }

        Ok(Self {
            mirrors: normalized,
            headers: default_headers(),
            referer_path: REFERER_PATH.to_string(),
            check_in_token: CHECK_IN_TOKEN.to_string(),
        })
    }

    pub fn mirrors(&self) -> &[String] {
        &self.mirrors
    }

    /// Headers shared by every request, before per-mirror injection
    pub fn header_template(&self) -> &HeaderMap {
        &self.headers
    }

    pub fn referer_path(&self) -> &str {
        &self.referer_path
    }

    pub fn check_in_token(&self) -> &str {
        &self.check_in_token
    }
}

impl Default for EndpointConfig {
    fn default() -> Self {
        Self {
            mirrors: DEFAULT_MIRRORS.iter().map(|m| m.to_string()).collect(),
            headers: default_headers(),
            referer_path: REFERER_PATH.to_string(),
            check_in_token: CHECK_IN_TOKEN.to_string(),
        }
    }
}

fn default_headers() -> HeaderMap {
    let mut headers = HeaderMap::new();
    headers.insert(
        header::CONTENT_TYPE,
        HeaderValue::from_static("application/json;charset=UTF-8"),
    );
    headers.insert(
        header::ACCEPT,
        HeaderValue::from_static("application/json, text/plain, */*"),
    );
    headers.insert(header::USER_AGENT, HeaderValue::from_static(USER_AGENT));
    headers
}

/// Extract domain from URL (including port if present)
pub fn extract_domain(url: &str) -> Result<String, DomainError> {
    let parsed = url::Url::parse(url)
        .map_err(|e| DomainError::InvalidInput(format!("Invalid URL '{}': {}", url, e)))?;
    let host = parsed.host_str().unwrap_or("");

    if let Some(port) = parsed.port() {
        Ok(format!("{}://{}:{}", parsed.scheme(), host, port))
    } else {
        Ok(format!("{}://{}", parsed.scheme(), host))
    }
}
