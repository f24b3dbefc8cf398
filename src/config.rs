use crate::host::{Host, InvalidHost};
use std::env;
use std::num::ParseIntError;
use std::time::Duration;

pub const BASE_URL_VAR: &str = "ACCOUNT_API_BASE_URL";
pub const TIMEOUT_SECS_VAR: &str = "ACCOUNT_API_TIMEOUT_SECS";

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("{} is not set", BASE_URL_VAR)]
    MissingBaseUrl,
    #[error("invalid base url: {0}")]
    InvalidHost(#[from] InvalidHost),
    #[error("invalid {}: {}", TIMEOUT_SECS_VAR, .0)]
    InvalidTimeout(#[from] ParseIntError),
}

/// Where the account API lives and how long a single call may take.
#[serde_with::serde_as]
#[derive(Clone, Debug, PartialEq, Eq, serde::Deserialize)]
pub struct Config {
    #[serde_as(as = "serde_with::DisplayFromStr")]
    pub base_url: Host,
    // `serde_as` makes this field default to `None` when absent
    #[serde_as(as = "Option<serde_with::DurationSeconds<u64>>")]
    pub timeout: Option<Duration>,
}

impl Config {
    pub fn new(base_url: Host) -> Self {
        Self {
            base_url,
            timeout: None,
        }
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    pub fn from_env() -> Result<Self, ConfigError> {
        let base_url = env::var(BASE_URL_VAR).map_err(|_| ConfigError::MissingBaseUrl)?;
        let timeout = match env::var(TIMEOUT_SECS_VAR) {
            Ok(secs) => Some(Duration::from_secs(secs.trim().parse()?)),
            Err(_) => None,
        };
        Ok(Self {
            base_url: base_url.parse()?,
            timeout,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::Config;
    use std::time::Duration;

    #[test]
    fn test_deserialize() {
        {
            let config: Config =
                serde_json::from_str(r#"{"base_url": "http://localhost:8080/"}"#).unwrap();
            assert_eq!(config.base_url.to_string(), "http://localhost:8080");
            assert_eq!(config.timeout, None);
        }
        {
            let config: Config = serde_json::from_str(
                r#"{"base_url": "https://api.example.com", "timeout": 30}"#,
            )
            .unwrap();
            assert_eq!(config.timeout, Some(Duration::from_secs(30)));
        }
        {
            assert!(serde_json::from_str::<Config>(r#"{"base_url": "/relative"}"#).is_err());
        }
    }

    #[test]
    fn test_with_timeout() {
        let config = Config::new("http://localhost:8080".parse().unwrap())
            .with_timeout(Duration::from_secs(5));
        assert_eq!(config.timeout, Some(Duration::from_secs(5)));
    }
}
