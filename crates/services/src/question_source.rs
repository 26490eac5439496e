use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use tracing::debug;
use url::Url;

use quiz_core::model::Question;

use crate::config::QuizConfig;
use crate::error::FetchError;

/// Where question batches come from.
#[async_trait]
pub trait QuestionSource: Send + Sync {
    /// Retrieve one batch of questions.
    ///
    /// # Errors
    ///
    /// Returns `FetchError` for transport failures, non-success statuses,
    /// a non-zero response code, or an empty batch.
    async fn fetch(&self) -> Result<Vec<Question>, FetchError>;
}

//
// ─── OPEN TRIVIA DB ────────────────────────────────────────────────────────────
//

/// HTTP source backed by the Open Trivia DB (`GET api.php?amount=N`).
#[derive(Clone, Debug)]
pub struct OpenTriviaSource {
    client: Client,
    url: Url,
}

impl OpenTriviaSource {
    #[must_use]
    pub fn new(config: &QuizConfig) -> Self {
        Self::with_client(Client::new(), config)
    }

    #[must_use]
    pub fn with_client(client: Client, config: &QuizConfig) -> Self {
        Self {
            client,
            url: config.request_url(),
        }
    }

    #[must_use]
    pub fn url(&self) -> &Url {
        &self.url
    }
}

#[async_trait]
impl QuestionSource for OpenTriviaSource {
    async fn fetch(&self) -> Result<Vec<Question>, FetchError> {
        debug!(url = %self.url, "requesting question batch");
        let response = self.client.get(self.url.clone()).send().await?;

        if !response.status().is_success() {
            return Err(FetchError::HttpStatus(response.status()));
        }

        let body = response.bytes().await?;
        decode_batch(&body)
    }
}

#[derive(Debug, Deserialize)]
struct TriviaResponse {
    response_code: i64,
    #[serde(default)]
    results: Vec<Question>,
}

/// Decode an Open Trivia DB payload into its questions.
///
/// # Errors
///
/// Returns `FetchError::Decode` for malformed JSON, `FetchError::ResponseCode`
/// when `response_code` is not 0, and `FetchError::EmptyBatch` when no
/// questions came back.
pub fn decode_batch(body: &[u8]) -> Result<Vec<Question>, FetchError> {
    let payload: TriviaResponse = serde_json::from_slice(body)?;
    if payload.response_code != 0 {
        return Err(FetchError::ResponseCode(payload.response_code));
    }
    if payload.results.is_empty() {
        return Err(FetchError::EmptyBatch);
    }
    Ok(payload.results)
}

//
// ─── IN-MEMORY ────────────────────────────────────────────────────────────────
//

/// Fixed batch source for tests and offline runs.
///
/// Can be told to fail with a response code and to wait before answering,
/// and counts how many times it was asked.
#[derive(Debug, Default)]
pub struct StaticQuestionSource {
    questions: Vec<Question>,
    fail_with: Option<i64>,
    delay: Option<Duration>,
    calls: AtomicUsize,
}

impl StaticQuestionSource {
    #[must_use]
    pub fn new(questions: Vec<Question>) -> Self {
        Self {
            questions,
            ..Self::default()
        }
    }

    /// A source whose every fetch fails with the given response code.
    #[must_use]
    pub fn failing(response_code: i64) -> Self {
        Self {
            fail_with: Some(response_code),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = Some(delay);
        self
    }

    /// Number of `fetch` calls so far.
    #[must_use]
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::Acquire)
    }
}

#[async_trait]
impl QuestionSource for StaticQuestionSource {
    async fn fetch(&self) -> Result<Vec<Question>, FetchError> {
        self.calls.fetch_add(1, Ordering::AcqRel);
        if let Some(delay) = self.delay {
            tokio::time::sleep(delay).await;
        }
        if let Some(code) = self.fail_with {
            return Err(FetchError::ResponseCode(code));
        }
        if self.questions.is_empty() {
            return Err(FetchError::EmptyBatch);
        }
        Ok(self.questions.clone())
    }
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//

#[cfg(test)]
mod tests {
    use quiz_core::model::Difficulty;

    use super::*;

    const PAYLOAD: &str = r#"{
        "response_code": 0,
        "results": [
            {
                "category": "Entertainment: Video Games",
                "type": "boolean",
                "difficulty": "easy",
                "question": "Pac-Man was released in 1980.",
                "correct_answer": "True",
                "incorrect_answers": ["False"]
            },
            {
                "category": "Geography",
                "type": "multiple",
                "difficulty": "hard",
                "question": "What is the capital of Australia?",
                "correct_answer": "Canberra",
                "incorrect_answers": ["Sydney", "Melbourne", "Perth"]
            }
        ]
    }"#;

    #[test]
    fn decodes_successful_batch() {
        let questions = decode_batch(PAYLOAD.as_bytes()).unwrap();
        assert_eq!(questions.len(), 2);
        assert_eq!(questions[1].correct_answer, "Canberra");
        assert_eq!(questions[1].difficulty, Difficulty::Hard);
        assert_eq!(questions[0].incorrect_answers, vec!["False".to_string()]);
    }

    #[test]
    fn non_zero_response_code_is_a_failure() {
        let err = decode_batch(br#"{"response_code": 5, "results": []}"#).unwrap_err();
        assert!(matches!(err, FetchError::ResponseCode(5)));

        let err = decode_batch(br#"{"response_code": 1}"#).unwrap_err();
        assert!(matches!(err, FetchError::ResponseCode(1)));
    }

    #[test]
    fn empty_results_are_a_failure() {
        let err = decode_batch(br#"{"response_code": 0, "results": []}"#).unwrap_err();
        assert!(matches!(err, FetchError::EmptyBatch));
    }

    #[test]
    fn malformed_payload_is_a_decode_error() {
        let err = decode_batch(b"<html>busy</html>").unwrap_err();
        assert!(matches!(err, FetchError::Decode(_)));
    }

    #[test]
    fn open_trivia_source_uses_request_url() {
        let source = OpenTriviaSource::new(&QuizConfig::default());
        assert_eq!(source.url().query(), Some("amount=15"));
    }

    #[tokio::test]
    async fn static_source_counts_calls() {
        let source = StaticQuestionSource::new(decode_batch(PAYLOAD.as_bytes()).unwrap());
        assert_eq!(source.fetch().await.unwrap().len(), 2);
        assert_eq!(source.fetch().await.unwrap().len(), 2);
        assert_eq!(source.calls(), 2);

        let failing = StaticQuestionSource::failing(2);
        assert!(matches!(failing.fetch().await, Err(FetchError::ResponseCode(2))));
    }
}
