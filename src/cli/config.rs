use anyhow::Context;
use serde::Deserialize;
use std::{
    collections::HashMap,
    path::Path,
    time::Duration,
};
use tracing_subscriber::filter::LevelFilter;
use url::Url;

const DEFAULT_USER_AGENT: &str = "hubble-rs";
const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// The CLI config
#[derive(Deserialize, Debug, Default)]
pub struct Config {
    /// The api base url
    base_url: Option<Url>,

    /// The user agent to send
    user_agent: Option<String>,

    /// The request timeout, in seconds
    timeout_secs: Option<u64>,

    /// The default log level
    log_level: Option<String>,

    #[serde(flatten)]
    extra: HashMap<String, toml::Value>,
}

impl Config {
    pub fn base_url(&self) -> Option<&Url> {
        self.base_url.as_ref()
    }

    pub fn user_agent(&self) -> &str {
        self.user_agent.as_deref().unwrap_or(DEFAULT_USER_AGENT)
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs.unwrap_or(DEFAULT_TIMEOUT_SECS))
    }

    /// Get the log level, if it is set and valid.
    pub fn log_level(&self) -> Option<LevelFilter> {
        self.log_level.as_deref()?.parse().ok()
    }

    /// Load a config from a path
    pub fn load_from_path(path: &Path) -> anyhow::Result<Self> {
        std::fs::read_to_string(path)
            .with_context(|| format!("failed to read config from '{}'", path.display()))
            .and_then(|s| Self::load_from_str(&s))
    }

    /// Load a config from a str
    pub fn load_from_str(s: &str) -> anyhow::Result<Self> {
        toml::from_str(s).context("failed to parse config")
    }

    /// Validate a config
    pub fn validate(&self) -> Vec<ValidationMessage> {
        let mut errors = Vec::new();

        if self.timeout_secs == Some(0) {
            errors.push(ValidationMessage {
                severity: Severity::Error,
                error: ValidationError::ZeroTimeout,
            });
        }

        if let Some(log_level) = self.log_level.as_deref() {
            if log_level.parse::<LevelFilter>().is_err() {
                errors.push(ValidationMessage {
                    severity: Severity::Warn,
                    error: ValidationError::InvalidLogLevel(log_level.into()),
                });
            }
        }

        if let Some(base_url) = self.base_url.as_ref() {
            if base_url.cannot_be_a_base() {
                errors.push(ValidationMessage {
                    severity: Severity::Error,
                    error: ValidationError::InvalidBaseUrl(base_url.as_str().into()),
                });
            }
        }

        let mut unknown_keys: Vec<_> = self.extra.keys().collect();
        unknown_keys.sort();
        for key in unknown_keys {
            errors.push(ValidationMessage {
                severity: Severity::Warn,
                error: ValidationError::UnknownKey(key.as_str().into()),
            });
        }

        errors
    }

    /// Build an api client from this config
    pub fn build_client(&self) -> anyhow::Result<hubble::Client> {
        let client = reqwest::Client::builder()
            .connect_timeout(Duration::from_secs(10))
            .timeout(self.timeout())
            .user_agent(self.user_agent())
            .build()
            .context("failed to build http client")?;
        let base_url = match self.base_url() {
            Some(base_url) => base_url.clone(),
            None => Url::parse(hubble::API_BASE_URL)?,
        };

        Ok(hubble::Client::from_reqwest(client, base_url))
    }
}

#[derive(Debug)]
pub struct ValidationMessage {
    severity: Severity,
    error: ValidationError,
}

impl ValidationMessage {
    pub fn severity(&self) -> Severity {
        self.severity
    }

    pub fn error(&self) -> &ValidationError {
        &self.error
    }
}

#[derive(Debug)]
pub enum ValidationError {
    ZeroTimeout,
    InvalidLogLevel(Box<str>),
    InvalidBaseUrl(Box<str>),
    UnknownKey(Box<str>),
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::ZeroTimeout => write!(f, "the timeout must not be 0"),
            Self::InvalidLogLevel(level) => write!(f, "invalid log level \"{level}\""),
            Self::InvalidBaseUrl(url) => write!(f, "the base url \"{url}\" cannot be a base"),
            Self::UnknownKey(key) => write!(f, "unknown config key \"{key}\""),
        }
    }
}

impl std::error::Error for ValidationError {}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Severity {
    Warn,
    Error,
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn parse() {
        let config = Config::load_from_str(
            r#"
base_url = "http://localhost:8080/api/v3/"
user_agent = "test"
timeout_secs = 5
log_level = "debug"
"#,
        )
        .expect("failed to parse config");

        assert_eq!(
            config.base_url().map(Url::as_str),
            Some("http://localhost:8080/api/v3/")
        );
        assert_eq!(config.user_agent(), "test");
        assert_eq!(config.timeout(), Duration::from_secs(5));
        assert_eq!(config.log_level(), Some(LevelFilter::DEBUG));
        assert!(config.validate().is_empty());
    }

    #[test]
    fn defaults() {
        let config = Config::load_from_str("").expect("failed to parse config");
        assert!(config.base_url().is_none());
        assert_eq!(config.user_agent(), DEFAULT_USER_AGENT);
        assert_eq!(config.timeout(), Duration::from_secs(DEFAULT_TIMEOUT_SECS));
        assert!(config.validate().is_empty());
        assert_eq!(
            config.build_client().expect("failed to build client").base_url().as_str(),
            hubble::API_BASE_URL
        );
    }

    #[test]
    fn validate() {
        let config = Config::load_from_str(
            r#"
base_url = "mailto:hubble@example.com"
timeout_secs = 0
log_level = "loud"
colour = true
"#,
        )
        .expect("failed to parse config");

        let messages = config.validate();
        let severities: Vec<_> = messages.iter().map(|message| message.severity()).collect();
        assert_eq!(
            severities,
            [
                Severity::Error,
                Severity::Warn,
                Severity::Error,
                Severity::Warn
            ]
        );
        assert!(config.log_level().is_none());
    }
}
