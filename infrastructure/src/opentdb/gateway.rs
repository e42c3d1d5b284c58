//! HTTP gateway to the Open Trivia DB

use super::decode::decode_entities;
use super::protocol::{QuestionResponse, RawQuestion, TokenResponse};
use crate::config::FileApiConfig;
use async_trait::async_trait;
use reqwest::StatusCode;
use serde::de::DeserializeOwned;
use std::time::Duration;
use tracing::debug;
use trivia_application::{BankError, QuestionBank, QuestionRequest};
use trivia_domain::{Difficulty, QuestionDraft, SessionToken};

pub const DEFAULT_BASE_URL: &str = "https://opentdb.com";
pub const DEFAULT_USER_AGENT: &str = concat!("trivia-quiz/", env!("CARGO_PKG_VERSION"));
const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

/// [`QuestionBank`] backed by the Open Trivia DB REST API
pub struct OpenTdbQuestionBank {
    client: reqwest::Client,
    base_url: String,
}

impl OpenTdbQuestionBank {
    /// Gateway against `base_url` with default timeout and user agent.
    pub fn new(base_url: impl Into<String>) -> Result<Self, BankError> {
        Self::with_options(base_url, DEFAULT_TIMEOUT, DEFAULT_USER_AGENT)
    }

    pub fn with_options(
        base_url: impl Into<String>,
        timeout: Duration,
        user_agent: &str,
    ) -> Result<Self, BankError> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .user_agent(user_agent)
            .build()
            .map_err(|e| BankError::Transport(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        })
    }

    /// Build from the `[api]` config section.
    pub fn from_config(config: &FileApiConfig) -> Result<Self, BankError> {
        Self::with_options(
            config.base_url.clone(),
            Duration::from_secs(config.timeout_seconds),
            &config.user_agent,
        )
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// GET `{base_url}/{path}` and decode the JSON body.
    ///
    /// HTTP 429 maps to [`BankError::RateLimited`]; the bank's own
    /// `response_code` is left for the caller.
    async fn get_json<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, String)],
    ) -> Result<T, BankError> {
        let url = format!("{}/{}", self.base_url, path);
        let response = self
            .client
            .get(&url)
            .query(query)
            .send()
            .await
            .map_err(|e| BankError::Transport(e.to_string()))?;

        let status = response.status();
        if status == StatusCode::TOO_MANY_REQUESTS {
            return Err(BankError::RateLimited);
        }
        if !status.is_success() {
            return Err(BankError::HttpStatus(status.as_u16()));
        }

        let body = response
            .text()
            .await
            .map_err(|e| BankError::Transport(e.to_string()))?;
        serde_json::from_str(&body).map_err(|e| BankError::MalformedResponse(e.to_string()))
    }

    async fn token_call(&self, query: &[(&str, String)]) -> Result<SessionToken, BankError> {
        let response: TokenResponse = self.get_json("api_token.php", query).await?;
        if let Some(error) = response.response_code.into_error() {
            return Err(error);
        }
        match response.token {
            Some(token) if !token.is_empty() => Ok(SessionToken::new(token)),
            _ => Err(BankError::MalformedResponse(
                "token response without a token".to_string(),
            )),
        }
    }
}

#[async_trait]
impl QuestionBank for OpenTdbQuestionBank {
    async fn request_token(&self) -> Result<SessionToken, BankError> {
        debug!("Requesting session token from {}", self.base_url);
        self.token_call(&[("command", "request".to_string())])
            .await
    }

    async fn reset_token(&self, token: &SessionToken) -> Result<SessionToken, BankError> {
        debug!("Resetting session token");
        self.token_call(&[
            ("command", "reset".to_string()),
            ("token", token.as_str().to_string()),
        ])
        .await
    }

    async fn fetch_question(&self, request: &QuestionRequest) -> Result<QuestionDraft, BankError> {
        let mut query = vec![
            ("amount", "1".to_string()),
            ("type", "multiple".to_string()),
            ("difficulty", request.difficulty.as_str().to_string()),
            ("token", request.token.as_str().to_string()),
        ];
        if let Some(category) = request.category {
            query.push(("category", category.to_string()));
        }

        let response: QuestionResponse = self.get_json("api.php", &query).await?;
        if let Some(error) = response.response_code.into_error() {
            return Err(error);
        }

        let raw = response
            .results
            .into_iter()
            .next()
            .ok_or_else(|| BankError::MalformedResponse("empty results".to_string()))?;
        into_draft(raw, request.difficulty)
    }
}

/// Decode a wire question into a draft for domain validation.
fn into_draft(raw: RawQuestion, requested: Difficulty) -> Result<QuestionDraft, BankError> {
    if raw.kind != "multiple" {
        return Err(BankError::MalformedResponse(format!(
            "expected a multiple choice question, got '{}'",
            raw.kind
        )));
    }

    Ok(QuestionDraft {
        category: decode_entities(&raw.category),
        text: decode_entities(&raw.question),
        correct_answer: decode_entities(&raw.correct_answer),
        incorrect_answers: raw
            .incorrect_answers
            .iter()
            .map(|a| decode_entities(a))
            .collect(),
        difficulty: raw.difficulty.parse().unwrap_or(requested),
    })
}
