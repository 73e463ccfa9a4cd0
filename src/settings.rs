// settings
use std::env;
use std::time::Duration;
use tracing::info;

use crate::error::SettingsError;

const DEFAULT_HOST: &str = "0.0.0.0";
const DEFAULT_PORT: u16 = 5000;
const DEFAULT_LRCLIB_URL: &str = "https://lrclib.net";
const DEFAULT_ITUNES_SEARCH_URL: &str = "https://itunes.apple.com/search";
const DEFAULT_LYRICS_TIMEOUT_SECS: u64 = 10;
const DEFAULT_COVER_TIMEOUT_SECS: u64 = 5;

/// Environment variables read at startup
pub struct EnvVars;

impl EnvVars {
    pub const HOST: &'static str = "HOST";
    pub const PORT: &'static str = "PORT";
    pub const LRCLIB_URL: &'static str = "LRCLIB_URL";
    pub const ITUNES_SEARCH_URL: &'static str = "ITUNES_SEARCH_URL";
    pub const LYRICS_TIMEOUT_SECS: &'static str = "LYRICS_TIMEOUT_SECS";
    pub const COVER_TIMEOUT_SECS: &'static str = "COVER_TIMEOUT_SECS";
    pub const LYRICS_SYNCED_ONLY: &'static str = "LYRICS_SYNCED_ONLY";

    const ALL: [&'static str; 7] = [
        Self::HOST,
        Self::PORT,
        Self::LRCLIB_URL,
        Self::ITUNES_SEARCH_URL,
        Self::LYRICS_TIMEOUT_SECS,
        Self::COVER_TIMEOUT_SECS,
        Self::LYRICS_SYNCED_ONLY,
    ];
}

#[derive(Debug, Clone, PartialEq)]
pub struct Settings {
    pub host: String,
    pub port: u16,
    pub lrclib_url: String,
    pub itunes_search_url: String,
    pub lyrics_timeout: Duration,
    pub cover_timeout: Duration,
    pub synced_only: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Settings {
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
            lrclib_url: DEFAULT_LRCLIB_URL.to_string(),
            itunes_search_url: DEFAULT_ITUNES_SEARCH_URL.to_string(),
            lyrics_timeout: Duration::from_secs(DEFAULT_LYRICS_TIMEOUT_SECS),
            cover_timeout: Duration::from_secs(DEFAULT_COVER_TIMEOUT_SECS),
            synced_only: false,
        }
    }
}

impl Settings {
    pub fn from_env() -> Result<Self, SettingsError> {
        let settings = Self::from_lookup(|key| env::var(key).ok())?;

        // Log which variables are set, not their values
        let configured: Vec<&str> = EnvVars::ALL
            .iter()
            .copied()
            .filter(|key| env::var(key).is_ok_and(|v| !v.trim().is_empty()))
            .collect();
        info!("Settings configured from environment: {:?}", configured);

        Ok(settings)
    }

    /// Build settings from an arbitrary key lookup. Blank values fall back to defaults.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, SettingsError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| {
            lookup(key)
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
        };
        let defaults = Settings::default();

        let host = get(EnvVars::HOST).unwrap_or(defaults.host);

        let port = match get(EnvVars::PORT) {
            Some(raw) => raw.parse::<u16>().map_err(|_| SettingsError::InvalidValue {
                var: EnvVars::PORT,
                value: raw,
            })?,
            None => defaults.port,
        };

        let lrclib_url = match get(EnvVars::LRCLIB_URL) {
            Some(raw) => parse_url(EnvVars::LRCLIB_URL, &raw)?,
            None => defaults.lrclib_url,
        };
        let itunes_search_url = match get(EnvVars::ITUNES_SEARCH_URL) {
            Some(raw) => parse_url(EnvVars::ITUNES_SEARCH_URL, &raw)?,
            None => defaults.itunes_search_url,
        };

        let lyrics_timeout = match get(EnvVars::LYRICS_TIMEOUT_SECS) {
            Some(raw) => parse_timeout(EnvVars::LYRICS_TIMEOUT_SECS, raw)?,
            None => defaults.lyrics_timeout,
        };
        let cover_timeout = match get(EnvVars::COVER_TIMEOUT_SECS) {
            Some(raw) => parse_timeout(EnvVars::COVER_TIMEOUT_SECS, raw)?,
            None => defaults.cover_timeout,
        };

        let synced_only = match get(EnvVars::LYRICS_SYNCED_ONLY) {
            Some(raw) => match raw.to_lowercase().as_str() {
                "true" | "1" | "yes" | "on" => true,
                "false" | "0" | "no" | "off" => false,
                _ => {
                    return Err(SettingsError::InvalidValue {
                        var: EnvVars::LYRICS_SYNCED_ONLY,
                        value: raw,
                    });
                }
            },
            None => defaults.synced_only,
        };

        Ok(Settings {
            host,
            port,
            lrclib_url,
            itunes_search_url,
            lyrics_timeout,
            cover_timeout,
            synced_only,
        })
    }

    pub fn listen_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

fn parse_url(var: &'static str, raw: &str) -> Result<String, SettingsError> {
    let parsed = url::Url::parse(raw).map_err(|e| SettingsError::InvalidUrl {
        var,
        reason: e.to_string(),
    })?;
    match parsed.scheme() {
        "http" | "https" => Ok(raw.trim_end_matches('/').to_string()),
        other => Err(SettingsError::InvalidUrl {
            var,
            reason: format!("unsupported scheme {}", other),
        }),
    }
}

fn parse_timeout(var: &'static str, raw: String) -> Result<Duration, SettingsError> {
    match raw.parse::<u64>() {
        Ok(secs) if secs > 0 => Ok(Duration::from_secs(secs)),
        _ => Err(SettingsError::InvalidValue { var, value: raw }),
    }
}
