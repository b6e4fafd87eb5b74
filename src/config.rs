use std::time::Duration;

use url::Url;

const DEFAULT_GITHUB_API_URL: &str = "https://api.github.com";
const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 30;

#[derive(thiserror::Error, Debug)]
pub enum ConfigError {
    #[error("Malformed GitHub API URL: '{0}'. Make sure you entered an absolute URL.")]
    MalformedGitHubApiUrl(String),
    #[error("Malformed request timeout: '{0}'. Make sure you entered a positive number of seconds.")]
    MalformedRequestTimeout(String),
}

#[derive(Debug, Clone)]
pub struct Config {
    telemetry_url: Option<String>,
    github_api_url: String,
    request_timeout: Duration,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        let request_timeout = match env_to_str("GHA_REQUEST_TIMEOUT") {
            Some(value) => parse_timeout(&value)?,
            None => Duration::from_secs(DEFAULT_REQUEST_TIMEOUT_SECS),
        };

        Ok(Self {
            telemetry_url: env_to_str("GHA_TELEMETRY_URL"),
            github_api_url: env_to_str("GHA_GITHUB_API_URL")
                .unwrap_or_else(|| DEFAULT_GITHUB_API_URL.into()),
            request_timeout,
        })
    }

    pub fn empty() -> Self {
        Self {
            telemetry_url: None,
            github_api_url: "".into(),
            request_timeout: Duration::from_secs(DEFAULT_REQUEST_TIMEOUT_SECS),
        }
    }

    pub fn github_api_url(&self) -> &str {
        &self.github_api_url
    }

    pub fn telemetry_url(&self) -> Option<&str> {
        self.telemetry_url.as_deref()
    }

    pub fn request_timeout(&self) -> Duration {
        self.request_timeout
    }

    pub fn set_github_api_url<T: Into<String>>(&mut self, value: T) {
        self.github_api_url = value.into();
    }

    pub fn set_telemetry_url<T: Into<String>>(&mut self, value: T) {
        self.telemetry_url = Some(value.into());
    }

    pub fn set_request_timeout(&mut self, value: Duration) {
        self.request_timeout = value;
    }

    pub fn validate_configuration(&self) -> Result<(), ConfigError> {
        let url = Url::parse(&self.github_api_url)
            .map_err(|_| ConfigError::MalformedGitHubApiUrl(self.github_api_url.clone()))?;
        if url.cannot_be_a_base() {
            return Err(ConfigError::MalformedGitHubApiUrl(
                self.github_api_url.clone(),
            ));
        }

        if self.request_timeout.is_zero() {
            return Err(ConfigError::MalformedRequestTimeout("0".into()));
        }

        Ok(())
    }
}

fn env_to_str(env_key: &str) -> Option<String> {
    std::env::var(env_key).ok().filter(|s| !s.is_empty())
}

fn parse_timeout(value: &str) -> Result<Duration, ConfigError> {
    value
        .trim()
        .parse::<u64>()
        .map(Duration::from_secs)
        .map_err(|_| ConfigError::MalformedRequestTimeout(value.into()))
}
