//! Session token manager.
//!
//! Lazily obtains the question bank's deduplication token on first need and
//! hands out the cached copy afterwards. One manager belongs to one session;
//! the controller installs a fresh manager on every session reset.

use crate::ports::question_bank::{BankError, QuestionBank};
use std::sync::Arc;
use tokio::sync::Mutex;
use tracing::{debug, info, warn};
use trivia_domain::SessionToken;

pub struct TokenManager {
    bank: Arc<dyn QuestionBank>,
    /// Held across the token request so concurrent callers share one round trip.
    token: Mutex<Option<SessionToken>>,
}

impl TokenManager {
    pub fn new(bank: Arc<dyn QuestionBank>) -> Self {
        Self {
            bank,
            token: Mutex::new(None),
        }
    }

    /// Return the session token, requesting one if none is cached.
    ///
    /// On failure nothing is cached, so a later call tries again.
    pub async fn ensure_token(&self) -> Result<SessionToken, BankError> {
        let mut slot = self.token.lock().await;
        if let Some(token) = slot.as_ref() {
            return Ok(token.clone());
        }

        match self.bank.request_token().await {
            Ok(token) => {
                info!("Obtained session token");
                *slot = Some(token.clone());
                Ok(token)
            }
            Err(e) => {
                warn!("Token acquisition failed: {}", e);
                Err(e)
            }
        }
    }

    /// The cached token, if any. Never touches the network.
    pub async fn current(&self) -> Option<SessionToken> {
        self.token.lock().await.clone()
    }

    /// Drop the cached token (e.g. the bank no longer recognises it).
    pub async fn invalidate(&self) {
        if self.token.lock().await.take().is_some() {
            debug!("Session token invalidated");
        }
    }

    /// Ask the bank to reset an exhausted token.
    ///
    /// With no cached token this behaves like [`ensure_token`](Self::ensure_token).
    /// If the reset fails the token is dropped so the next fetch requests a new one.
    pub async fn reset(&self) -> Result<SessionToken, BankError> {
        let mut slot = self.token.lock().await;
        let Some(current) = slot.clone() else {
            drop(slot);
            return self.ensure_token().await;
        };

        match self.bank.reset_token(&current).await {
            Ok(token) => {
                info!("Session token reset");
                *slot = Some(token.clone());
                Ok(token)
            }
            Err(e) => {
                warn!("Token reset failed, discarding token: {}", e);
                *slot = None;
                Err(e)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ports::question_bank::QuestionRequest;
    use async_trait::async_trait;
    use std::collections::VecDeque;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use trivia_domain::QuestionDraft;

    struct TokenOnlyBank {
        tokens: std::sync::Mutex<VecDeque<Result<SessionToken, BankError>>>,
        token_requests: AtomicUsize,
        resets: AtomicUsize,
    }

    impl TokenOnlyBank {
        fn new(tokens: Vec<Result<SessionToken, BankError>>) -> Self {
            Self {
                tokens: std::sync::Mutex::new(VecDeque::from(tokens)),
                token_requests: AtomicUsize::new(0),
                resets: AtomicUsize::new(0),
            }
        }
    }

    #[async_trait]
    impl QuestionBank for TokenOnlyBank {
        async fn request_token(&self) -> Result<SessionToken, BankError> {
            self.token_requests.fetch_add(1, Ordering::SeqCst);
            self.tokens
                .lock()
                .unwrap()
                .pop_front()
                .unwrap_or_else(|| Err(BankError::Transport("no more tokens".to_string())))
        }

        async fn reset_token(&self, token: &SessionToken) -> Result<SessionToken, BankError> {
            self.resets.fetch_add(1, Ordering::SeqCst);
            Ok(token.clone())
        }

        async fn fetch_question(
            &self,
            _request: &QuestionRequest,
        ) -> Result<QuestionDraft, BankError> {
            Err(BankError::NoResults)
        }
    }

    #[tokio::test]
    async fn test_token_requested_once_and_reused() {
        let bank = Arc::new(TokenOnlyBank::new(vec![Ok(SessionToken::new("abc"))]));
        let manager = TokenManager::new(bank.clone());

        assert_eq!(manager.ensure_token().await.unwrap().as_str(), "abc");
        assert_eq!(manager.ensure_token().await.unwrap().as_str(), "abc");
        assert_eq!(manager.current().await, Some(SessionToken::new("abc")));
        assert_eq!(bank.token_requests.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_failure_leaves_session_tokenless() {
        let bank = Arc::new(TokenOnlyBank::new(vec![
            Err(BankError::HttpStatus(500)),
            Ok(SessionToken::new("second")),
        ]));
        let manager = TokenManager::new(bank.clone());

        assert_eq!(
            manager.ensure_token().await,
            Err(BankError::HttpStatus(500))
        );
        assert!(manager.current().await.is_none());

        assert_eq!(manager.ensure_token().await.unwrap().as_str(), "second");
        assert_eq!(bank.token_requests.load(Ordering::SeqCst), 2);
    }

    #[tokio::test]
    async fn test_invalidate_forces_new_request() {
        let bank = Arc::new(TokenOnlyBank::new(vec![
            Ok(SessionToken::new("one")),
            Ok(SessionToken::new("two")),
        ]));
        let manager = TokenManager::new(bank.clone());

        manager.ensure_token().await.unwrap();
        manager.invalidate().await;
        assert!(manager.current().await.is_none());
        assert_eq!(manager.ensure_token().await.unwrap().as_str(), "two");
    }

    #[tokio::test]
    async fn test_reset_uses_bank_reset() {
        let bank = Arc::new(TokenOnlyBank::new(vec![Ok(SessionToken::new("one"))]));
        let manager = TokenManager::new(bank.clone());

        manager.ensure_token().await.unwrap();
        assert_eq!(manager.reset().await.unwrap().as_str(), "one");
        assert_eq!(bank.resets.load(Ordering::SeqCst), 1);
        assert_eq!(bank.token_requests.load(Ordering::SeqCst), 1);
    }
}
