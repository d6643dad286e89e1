use std::env;
use std::time::Duration;

use thiserror::Error;
use url::Url;

pub const DEFAULT_BASE_URL: &str = "http://localhost:8000";
pub const DEFAULT_FEEDBACK_REVEAL_DELAY: Duration = Duration::from_secs(5);
pub const DEFAULT_TOAST_DURATION: Duration = Duration::from_secs(5);

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum ConfigError {
    #[error("invalid tutor API base URL {raw:?}: {reason}")]
    InvalidBaseUrl { raw: String, reason: String },
    #[error("invalid {name} value {raw:?}: expected milliseconds")]
    InvalidMillis { name: &'static str, raw: String },
}

/// Runtime settings shared by the UI and the terminal quiz.
///
/// Both endpoints hang off one base URL: `{base_url}/questions` and
/// `{base_url}/submit`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TutorConfig {
    base_url: Url,
    feedback_reveal_delay: Duration,
    toast_duration: Duration,
}

impl Default for TutorConfig {
    fn default() -> Self {
        Self {
            base_url: Url::parse(DEFAULT_BASE_URL).expect("default base URL should parse"),
            feedback_reveal_delay: DEFAULT_FEEDBACK_REVEAL_DELAY,
            toast_duration: DEFAULT_TOAST_DURATION,
        }
    }
}

impl TutorConfig {
    /// Reads `TUTOR_API_BASE_URL`, `TUTOR_FEEDBACK_REVEAL_MS` and `TUTOR_TOAST_MS`.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` when a variable is set but cannot be parsed.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Same as `from_env` with an injectable variable source.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` when a value is set but cannot be parsed.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let mut config = Self::default();
        if let Some(raw) = non_blank(lookup("TUTOR_API_BASE_URL")) {
            config = config.with_base_url(&raw)?;
        }
        if let Some(raw) = non_blank(lookup("TUTOR_FEEDBACK_REVEAL_MS")) {
            config.feedback_reveal_delay = parse_millis("TUTOR_FEEDBACK_REVEAL_MS", &raw)?;
        }
        if let Some(raw) = non_blank(lookup("TUTOR_TOAST_MS")) {
            config.toast_duration = parse_millis("TUTOR_TOAST_MS", &raw)?;
        }
        Ok(config)
    }

    /// # Errors
    ///
    /// Returns `ConfigError::InvalidBaseUrl` unless `raw` is an absolute http(s) URL.
    pub fn with_base_url(mut self, raw: &str) -> Result<Self, ConfigError> {
        let url = Url::parse(raw.trim()).map_err(|err| ConfigError::InvalidBaseUrl {
            raw: raw.to_string(),
            reason: err.to_string(),
        })?;
        if !matches!(url.scheme(), "http" | "https") {
            return Err(ConfigError::InvalidBaseUrl {
                raw: raw.to_string(),
                reason: format!("unsupported scheme {}", url.scheme()),
            });
        }
        self.base_url = url;
        Ok(self)
    }

    #[must_use]
    pub fn with_feedback_reveal_delay(mut self, delay: Duration) -> Self {
        self.feedback_reveal_delay = delay;
        self
    }

    #[must_use]
    pub fn with_toast_duration(mut self, duration: Duration) -> Self {
        self.toast_duration = duration;
        self
    }

    #[must_use]
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Joins a path suffix onto the base URL, keeping any base path prefix.
    #[must_use]
    pub fn endpoint(&self, path: &str) -> String {
        format!(
            "{}/{}",
            self.base_url.as_str().trim_end_matches('/'),
            path.trim_start_matches('/')
        )
    }

    #[must_use]
    pub fn feedback_reveal_delay(&self) -> Duration {
        self.feedback_reveal_delay
    }

    #[must_use]
    pub fn toast_duration(&self) -> Duration {
        self.toast_duration
    }
}

/// Parses a millisecond count as used by the env vars and CLI flags.
///
/// # Errors
///
/// Returns `ConfigError::InvalidMillis` for anything but a non-negative integer.
pub fn parse_millis(name: &'static str, raw: &str) -> Result<Duration, ConfigError> {
    raw.trim()
        .parse::<u64>()
        .map(Duration::from_millis)
        .map_err(|_| ConfigError::InvalidMillis {
            name,
            raw: raw.to_string(),
        })
}

fn non_blank(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}
