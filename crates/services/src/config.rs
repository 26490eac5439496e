use std::env;

use quiz_core::time::{DEFAULT_QUESTION_COUNT, DEFAULT_TIME_LIMIT_SECS};
use url::Url;

use crate::error::ConfigError;

/// Environment variable overriding the question source endpoint.
pub const ENDPOINT_ENV: &str = "QUIZ_API_URL";

pub const DEFAULT_ENDPOINT: &str = "https://opentdb.com/api.php";

/// Upper bound the Open Trivia DB accepts for `amount`.
pub const MAX_QUESTION_COUNT: u8 = 50;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct QuizConfig {
    endpoint: Url,
    question_count: u8,
    time_limit_secs: u32,
}

impl QuizConfig {
    /// Configuration with the default batch size and time limit.
    #[must_use]
    pub fn new(endpoint: Url) -> Self {
        Self {
            endpoint,
            question_count: DEFAULT_QUESTION_COUNT,
            time_limit_secs: DEFAULT_TIME_LIMIT_SECS,
        }
    }

    /// Read the endpoint from `QUIZ_API_URL`, falling back to the public API.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidEndpoint` if the variable is set but not a URL.
    pub fn from_env() -> Result<Self, ConfigError> {
        match env::var(ENDPOINT_ENV) {
            Ok(raw) if !raw.trim().is_empty() => Ok(Self::new(parse_endpoint(&raw)?)),
            _ => Ok(Self::default()),
        }
    }

    /// # Errors
    ///
    /// Returns `ConfigError::InvalidQuestionCount` for 0 or more than 50.
    pub fn with_question_count(mut self, count: u8) -> Result<Self, ConfigError> {
        if count == 0 || count > MAX_QUESTION_COUNT {
            return Err(ConfigError::InvalidQuestionCount(count));
        }
        self.question_count = count;
        Ok(self)
    }

    /// # Errors
    ///
    /// Returns `ConfigError::ZeroTimeLimit` for a zero limit.
    pub fn with_time_limit_secs(mut self, secs: u32) -> Result<Self, ConfigError> {
        if secs == 0 {
            return Err(ConfigError::ZeroTimeLimit);
        }
        self.time_limit_secs = secs;
        Ok(self)
    }

    #[must_use]
    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }

    #[must_use]
    pub fn question_count(&self) -> u8 {
        self.question_count
    }

    #[must_use]
    pub fn time_limit_secs(&self) -> u32 {
        self.time_limit_secs
    }

    /// Endpoint with `amount` set to the configured batch size.
    ///
    /// Any `amount` already present on the endpoint is replaced; other query
    /// parameters (category, difficulty, ...) are kept.
    #[must_use]
    pub fn request_url(&self) -> Url {
        let mut url = self.endpoint.clone();
        let kept: Vec<(String, String)> = url
            .query_pairs()
            .filter(|(key, _)| key != "amount")
            .map(|(key, value)| (key.into_owned(), value.into_owned()))
            .collect();
        url.query_pairs_mut()
            .clear()
            .append_pair("amount", &self.question_count.to_string())
            .extend_pairs(kept);
        url
    }
}

impl Default for QuizConfig {
    /// Public Open Trivia DB endpoint with default batch size and time limit.
    ///
    /// # Panics
    ///
    /// Panics if `DEFAULT_ENDPOINT` cannot be parsed.
    fn default() -> Self {
        let endpoint = Url::parse(DEFAULT_ENDPOINT).expect("default endpoint should be valid");
        Self::new(endpoint)
    }
}

/// # Errors
///
/// Returns `ConfigError::InvalidEndpoint` if `raw` is not an absolute URL.
pub fn parse_endpoint(raw: &str) -> Result<Url, ConfigError> {
    Url::parse(raw.trim()).map_err(|source| ConfigError::InvalidEndpoint {
        raw: raw.to_string(),
        source,
    })
}
