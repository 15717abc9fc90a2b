use serde::Deserialize;
use std::path::{Path, PathBuf};
use std::str::FromStr;
use std::time::Duration;

use glados_domain::notification::{PushChannelConfig, PushTemplate};
use glados_domain::shared::DomainError;

use super::log_level::LogLevel;
use super::timeouts::TimeoutConfig;
use crate::http::EndpointConfig;

pub const ENV_SENDKEY: &str = "SENDKEY";
pub const ENV_COOKIES: &str = "COOKIES";
pub const ENV_MIRRORS: &str = "GLADOS_MIRRORS";
pub const ENV_PUSH_TEMPLATE: &str = "PUSH_TEMPLATE";
pub const ENV_TIMEOUT_SECS: &str = "CHECKIN_TIMEOUT_SECS";
pub const ENV_PAUSE_MIN_MS: &str = "CHECKIN_PAUSE_MIN_MS";
pub const ENV_PAUSE_MAX_MS: &str = "CHECKIN_PAUSE_MAX_MS";
pub const ENV_CONFIG_FILE: &str = "CHECKIN_CONFIG";
pub const ENV_LOG_LEVEL: &str = "LOG_LEVEL";
pub const ENV_LOG_DIR: &str = "LOG_DIR";

/// Optional JSON configuration file; every field may be omitted
#[derive(Debug, Clone, Default, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct FileConfig {
    pub mirrors: Option<Vec<String>>,
    pub push_template: Option<PushTemplate>,
    pub timeout_secs: Option<u64>,
    pub pause_min_ms: Option<u64>,
    pub pause_max_ms: Option<u64>,
    pub log_level: Option<LogLevel>,
}

impl FileConfig {
    pub fn load(path: &Path) -> Result<Self, DomainError> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            DomainError::Configuration(format!(
                "Failed to read config file {}: {}",
                path.display(),
                e
            ))
        })?;

        serde_json::from_str(&content).map_err(|e| {
            DomainError::Deserialization(format!(
                "Failed to parse config file {}: {}",
                path.display(),
                e
            ))
        })
    }
}

/// Everything a run needs, resolved once at startup.
///
/// Resolution never fails: an invalid value is reported in `warnings` and the
/// default is used instead, so the run still happens and still reports.
#[derive(Debug, Clone)]
pub struct Settings {
    pub push: PushChannelConfig,
    pub raw_cookies: String,
    pub endpoints: EndpointConfig,
    pub timeouts: TimeoutConfig,
    pub log_level: LogLevel,
    pub log_dir: Option<PathBuf>,
    pub warnings: Vec<String>,
}

impl Settings {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Resolve settings from an arbitrary key lookup. Environment values
    /// override the file named by `CHECKIN_CONFIG`.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| {
            lookup(key)
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
        };
        let mut warnings = Vec::new();

        let file = match get(ENV_CONFIG_FILE) {
            Some(path) => FileConfig::load(Path::new(&path)).unwrap_or_else(|e| {
                warnings.push(e.to_string());
                FileConfig::default()
            }),
            None => FileConfig::default(),
        };

        let template = match get(ENV_PUSH_TEMPLATE) {
            Some(raw) => PushTemplate::from_str(&raw).unwrap_or_else(|e| {
                warnings.push(e.to_string());
                file.push_template.unwrap_or_default()
            }),
            None => file.push_template.unwrap_or_default(),
        };

        let log_level = match get(ENV_LOG_LEVEL) {
            Some(raw) => LogLevel::from_str(&raw).unwrap_or_else(|e| {
                warnings.push(e.to_string());
                file.log_level.unwrap_or_default()
            }),
            None => file.log_level.unwrap_or_default(),
        };

        let endpoints = {
            let mirrors: Option<Vec<String>> = get(ENV_MIRRORS)
                .map(|raw| raw.split(',').map(str::to_string).collect())
                .or_else(|| file.mirrors.clone());
            match mirrors {
                Some(mirrors) => EndpointConfig::new(mirrors).unwrap_or_else(|e| {
                    warnings.push(e.to_string());
                    EndpointConfig::default()
                }),
                None => EndpointConfig::default(),
            }
        };

        let defaults = TimeoutConfig::default();
        let timeout_secs = parse_number(get(ENV_TIMEOUT_SECS), ENV_TIMEOUT_SECS, &mut warnings)
            .or(file.timeout_secs);
        let pause_min_ms = parse_number(get(ENV_PAUSE_MIN_MS), ENV_PAUSE_MIN_MS, &mut warnings)
            .or(file.pause_min_ms);
        let pause_max_ms = parse_number(get(ENV_PAUSE_MAX_MS), ENV_PAUSE_MAX_MS, &mut warnings)
            .or(file.pause_max_ms);

        let timeouts = TimeoutConfig::new(
            timeout_secs
                .map(Duration::from_secs)
                .unwrap_or(defaults.http_request),
            pause_min_ms
                .map(Duration::from_millis)
                .unwrap_or(defaults.pause_min),
            pause_max_ms
                .map(Duration::from_millis)
                .unwrap_or(defaults.pause_max),
        )
        .unwrap_or_else(|e| {
            warnings.push(e.to_string());
            defaults
        });

        Self {
            push: PushChannelConfig::new(get(ENV_SENDKEY).unwrap_or_default(), template),
            raw_cookies: lookup(ENV_COOKIES).unwrap_or_default(),
            endpoints,
            timeouts,
            log_level,
            log_dir: get(ENV_LOG_DIR).map(PathBuf::from),
            warnings,
        }
    }
}

fn parse_number(raw: Option<String>, key: &str, warnings: &mut Vec<String>) -> Option<u64> {
    let raw = raw?;
    match raw.parse::<u64>() {
        Ok(value) => Some(value),
        Err(e) => {
            warnings.push(format!("Ignoring {}='{}': {}", key, raw, e));
            None
        }
    }
}
