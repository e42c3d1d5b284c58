//! Wire types for the Open Trivia DB API.

use serde::Deserialize;
use trivia_application::BankError;

/// Bank-level status carried in every JSON body, independent of HTTP status.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResponseCode {
    Success,
    NoResults,
    InvalidParameter,
    TokenNotFound,
    TokenEmpty,
    RateLimit,
    Unknown(u8),
}

impl ResponseCode {
    /// Map a non-success code onto the port error. `None` for success.
    pub fn into_error(self) -> Option<BankError> {
        match self {
            ResponseCode::Success => None,
            ResponseCode::NoResults => Some(BankError::NoResults),
            ResponseCode::InvalidParameter => Some(BankError::InvalidParameter),
            ResponseCode::TokenNotFound => Some(BankError::TokenNotFound),
            ResponseCode::TokenEmpty => Some(BankError::TokenExhausted),
            ResponseCode::RateLimit => Some(BankError::RateLimited),
            ResponseCode::Unknown(code) => Some(BankError::MalformedResponse(format!(
                "unknown response_code {}",
                code
            ))),
        }
    }
}

impl From<u8> for ResponseCode {
    fn from(code: u8) -> Self {
        match code {
            0 => ResponseCode::Success,
            1 => ResponseCode::NoResults,
            2 => ResponseCode::InvalidParameter,
            3 => ResponseCode::TokenNotFound,
            4 => ResponseCode::TokenEmpty,
            5 => ResponseCode::RateLimit,
            other => ResponseCode::Unknown(other),
        }
    }
}

impl<'de> Deserialize<'de> for ResponseCode {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        u8::deserialize(deserializer).map(ResponseCode::from)
    }
}

/// `api_token.php` response (both `request` and `reset`)
#[derive(Debug, Clone, Deserialize)]
pub struct TokenResponse {
    pub response_code: ResponseCode,
    #[serde(default)]
    pub token: Option<String>,
}

/// `api.php` response
#[derive(Debug, Clone, Deserialize)]
pub struct QuestionResponse {
    pub response_code: ResponseCode,
    #[serde(default)]
    pub results: Vec<RawQuestion>,
}

/// One question as sent on the wire (still entity-encoded)
#[derive(Debug, Clone, Deserialize)]
pub struct RawQuestion {
    pub category: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub difficulty: String,
    pub question: String,
    pub correct_answer: String,
    pub incorrect_answers: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_question_response() {
        let json = r#"{
            "response_code": 0,
            "results": [{
                "type": "multiple",
                "difficulty": "medium",
                "category": "Science: Computers",
                "question": "What does &quot;CPU&quot; stand for?",
                "correct_answer": "Central Processing Unit",
                "incorrect_answers": ["Central Process Unit", "Computer Personal Unit", "Central Processor Unit"]
            }]
        }"#;

        let response: QuestionResponse = serde_json::from_str(json).unwrap();
        assert_eq!(response.response_code, ResponseCode::Success);
        assert_eq!(response.results.len(), 1);
        assert_eq!(response.results[0].kind, "multiple");
        assert_eq!(response.results[0].incorrect_answers.len(), 3);
    }

    #[test]
    fn test_deserialize_token_response() {
        let json = r#"{"response_code":0,"response_message":"Token Generated Successfully!","token":"abc123"}"#;
        let response: TokenResponse = serde_json::from_str(json).unwrap();
        assert_eq!(response.response_code, ResponseCode::Success);
        assert_eq!(response.token.as_deref(), Some("abc123"));
    }

    #[test]
    fn test_response_code_mapping() {
        assert_eq!(ResponseCode::from(0).into_error(), None);
        assert_eq!(
            ResponseCode::from(1).into_error(),
            Some(BankError::NoResults)
        );
        assert_eq!(
            ResponseCode::from(3).into_error(),
            Some(BankError::TokenNotFound)
        );
        assert_eq!(
            ResponseCode::from(4).into_error(),
            Some(BankError::TokenExhausted)
        );
        assert_eq!(
            ResponseCode::from(5).into_error(),
            Some(BankError::RateLimited)
        );
        assert!(matches!(
            ResponseCode::from(42).into_error(),
            Some(BankError::MalformedResponse(_))
        ));
    }

    #[test]
    fn test_missing_results_defaults_to_empty() {
        let response: QuestionResponse = serde_json::from_str(r#"{"response_code":1}"#).unwrap();
        assert_eq!(response.response_code, ResponseCode::NoResults);
        assert!(response.results.is_empty());
    }
}
