//! Quiz Controller
//!
//! Drives the fetch / retry / difficulty / scoring state machine for one
//! player. The host (a terminal front-end, a GUI, a test) calls
//! [`start_session`](QuizController::start_session),
//! [`submit_answer`](QuizController::submit_answer) and
//! [`end_session`](QuizController::end_session), renders
//! [`QuizEvent`]s from the channel, and may read a
//! [`SessionSnapshot`] at any time.
//!
//! # State machine
//!
//! ```text
//! Idle ──start──▶ Loading ──ok──▶ Ready ──correct──▶ Loading …
//!                  │  ▲                  └─wrong───▶ Ended
//!                  │  └─ 429, retry budget left (backoff)
//!                  └─ other failure ──▶ Idle ──fetch_question──▶ Loading
//! ```
//!
//! # Generations
//!
//! Every background continuation (the fetch task, retry backoff, the
//! feedback pause) is tagged with the session generation it was spawned for
//! and raced against that generation's [`CancellationToken`]. Resetting the
//! session cancels the token and bumps the generation, so late results from
//! an earlier session are dropped instead of applied.

use crate::config::QuizParams;
use crate::ports::question_bank::{BankError, QuestionBank, QuestionRequest};
use crate::ports::quiz_event::{FetchError, QuizEvent};
use crate::use_cases::token_manager::TokenManager;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use tokio::sync::mpsc;
use tokio_util::sync::CancellationToken;
use tracing::{debug, info, warn};
use trivia_domain::{
    AnswerError, AnswerVerdict, Difficulty, QuestionDraft, Session, SessionPhase,
    SessionSnapshot, SessionToken,
};

/// Mutable controller state, guarded by one lock that is never held across `.await`.
struct ControllerState {
    session: Session,
    tokens: Arc<TokenManager>,
    cancellation: CancellationToken,
    /// A fetch task for the current generation is outstanding
    fetch_in_flight: bool,
    rng: StdRng,
}

impl ControllerState {
    /// Results for `generation` may still be applied.
    fn accepts(&self, generation: u64) -> bool {
        self.session.is_current(generation) && self.session.phase() != SessionPhase::Ended
    }
}

struct ControllerInner {
    bank: Arc<dyn QuestionBank>,
    params: QuizParams,
    state: Mutex<ControllerState>,
    tx: mpsc::UnboundedSender<QuizEvent>,
}

/// Outcome of one request to the bank, before it is applied to the session.
enum Attempt {
    Loaded(QuestionDraft),
    Retry,
    Failed(FetchError),
}

/// Adaptive fetch controller for a single player
///
/// Cheap to clone; clones share the same session.
#[derive(Clone)]
pub struct QuizController {
    inner: Arc<ControllerInner>,
}

impl QuizController {
    /// Create a controller with an OS-seeded random source.
    pub fn new(
        bank: Arc<dyn QuestionBank>,
        params: QuizParams,
        tx: mpsc::UnboundedSender<QuizEvent>,
    ) -> Self {
        Self::with_rng(bank, params, tx, StdRng::from_entropy())
    }

    /// Create a controller whose difficulty draws and shuffles are reproducible.
    pub fn with_seed(
        bank: Arc<dyn QuestionBank>,
        params: QuizParams,
        tx: mpsc::UnboundedSender<QuizEvent>,
        seed: u64,
    ) -> Self {
        Self::with_rng(bank, params, tx, StdRng::seed_from_u64(seed))
    }

    fn with_rng(
        bank: Arc<dyn QuestionBank>,
        params: QuizParams,
        tx: mpsc::UnboundedSender<QuizEvent>,
        rng: StdRng,
    ) -> Self {
        let state = ControllerState {
            session: Session::new(),
            tokens: Arc::new(TokenManager::new(bank.clone())),
            cancellation: CancellationToken::new(),
            fetch_in_flight: false,
            rng,
        };
        Self {
            inner: Arc::new(ControllerInner {
                bank,
                params,
                state: Mutex::new(state),
                tx,
            }),
        }
    }

    /// Current session state for rendering.
    pub fn snapshot(&self) -> SessionSnapshot {
        self.inner.state().session.snapshot()
    }

    /// The session's token, if one has been obtained.
    pub async fn current_token(&self) -> Option<SessionToken> {
        let tokens = self.inner.state().tokens.clone();
        tokens.current().await
    }

    /// Begin a fresh session and fetch its first question.
    ///
    /// Any work still pending from a previous session is invalidated.
    /// Must be called from within a Tokio runtime.
    pub fn start_session(&self) {
        let generation = self.inner.reset_session();
        info!("Session {} started", generation);
        self.inner.emit(QuizEvent::SessionStarted { generation });
        self.inner.spawn_fetch(None);
    }

    /// Fetch a question for an idle session, e.g. after a failed fetch.
    ///
    /// Returns `false` without doing anything unless the session is idle:
    /// a question on screen, a fetch in flight, the feedback pause and an
    /// ended session all refuse.
    pub fn fetch_question(&self) -> bool {
        self.inner.spawn_fetch(None)
    }

    /// Record the player's choice.
    ///
    /// After the feedback delay a correct answer triggers the next fetch and
    /// a wrong one ends the session.
    ///
    /// # Errors
    ///
    /// Returns [`AnswerError`] when no question is ready or it was already
    /// answered; the session is left untouched.
    pub fn submit_answer(&self, choice: &str) -> Result<AnswerVerdict, AnswerError> {
        let (verdict, snapshot, generation, cancellation) = {
            let mut state = self.inner.state();
            let verdict = state
                .session
                .record_answer(choice, &self.inner.params.step)?;
            (
                verdict,
                state.session.snapshot(),
                state.session.generation(),
                state.cancellation.clone(),
            )
        };

        if verdict.correct {
            info!(
                "Correct answer, score {} ({})",
                verdict.score, snapshot.weights
            );
        } else {
            info!("Wrong answer, final score {}", verdict.score);
        }
        self.inner
            .emit(QuizEvent::AnswerRecorded { verdict, snapshot });

        let inner = self.inner.clone();
        let delay = inner.params.feedback_delay;
        tokio::spawn(async move {
            tokio::select! {
                _ = cancellation.cancelled() => {
                    debug!("Feedback timer for generation {} cancelled", generation);
                }
                _ = tokio::time::sleep(delay) => {
                    inner.after_feedback(generation, verdict.correct);
                }
            }
        });

        Ok(verdict)
    }

    /// Tear the session down without fetching. Inert until the next start.
    pub fn end_session(&self) {
        let generation = self.inner.reset_session();
        info!("Session closed (now generation {})", generation);
        self.inner.emit(QuizEvent::SessionClosed);
    }
}

impl ControllerInner {
    fn state(&self) -> MutexGuard<'_, ControllerState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn emit(&self, event: QuizEvent) {
        // A dropped receiver just means nobody is rendering
        let _ = self.tx.send(event);
    }

    /// Cancel outstanding work and start a new generation.
    fn reset_session(&self) -> u64 {
        let mut state = self.state();
        state.cancellation.cancel();
        state.cancellation = CancellationToken::new();
        state.tokens = Arc::new(TokenManager::new(self.bank.clone()));
        state.fetch_in_flight = false;
        state.session.reset()
    }

    /// Mark the session loading and spawn the fetch task.
    ///
    /// `expected` pins the call to a generation; a stale caller is ignored.
    /// Without one the session must be idle.
    fn spawn_fetch(self: &Arc<Self>, expected: Option<u64>) -> bool {
        let (generation, cancellation, tokens) = {
            let mut state = self.state();
            if expected.is_some_and(|g| !state.session.is_current(g)) {
                debug!("Ignoring fetch request from stale generation");
                return false;
            }
            if state.fetch_in_flight {
                debug!("Fetch already in flight, request superseded");
                return false;
            }
            match (expected, state.session.phase()) {
                (_, SessionPhase::Ended) => {
                    debug!("Session has ended, not fetching");
                    return false;
                }
                (None, phase) if phase != SessionPhase::Idle => {
                    debug!("Session is {}, not fetching", phase);
                    return false;
                }
                _ => {}
            }
            state.fetch_in_flight = true;
            state.session.begin_loading();
            (
                state.session.generation(),
                state.cancellation.clone(),
                state.tokens.clone(),
            )
        };

        self.emit(QuizEvent::Loading);

        let inner = self.clone();
        tokio::spawn(async move {
            tokio::select! {
                _ = cancellation.cancelled() => {
                    debug!("Fetch for generation {} cancelled", generation);
                }
                _ = inner.run_fetch(generation, tokens) => {}
            }
        });
        true
    }

    /// Fetch loop for one generation: token, draw, request, retry on 429.
    async fn run_fetch(&self, generation: u64, tokens: Arc<TokenManager>) {
        loop {
            let token = match tokens.ensure_token().await {
                Ok(token) => token,
                Err(e) => {
                    self.abandon(generation, FetchError::TokenAcquisition(e));
                    return;
                }
            };

            let Some(difficulty) = self.draw_difficulty(generation) else {
                return;
            };
            let request =
                QuestionRequest::new(difficulty, token).with_category(self.params.category);
            debug!("Requesting {} question", difficulty);

            let attempt = match self.bank.fetch_question(&request).await {
                Ok(draft) => Attempt::Loaded(draft),
                Err(BankError::RateLimited) => Attempt::Retry,
                Err(e @ BankError::TokenNotFound) => {
                    tokens.invalidate().await;
                    Attempt::Failed(FetchError::Bank(e))
                }
                Err(e @ BankError::TokenExhausted) => {
                    if let Err(reset_err) = tokens.reset().await {
                        warn!("Could not reset exhausted token: {}", reset_err);
                    }
                    Attempt::Failed(FetchError::Bank(e))
                }
                Err(e) => Attempt::Failed(FetchError::Bank(e)),
            };

            match attempt {
                Attempt::Loaded(draft) => {
                    self.complete(generation, draft);
                    return;
                }
                Attempt::Failed(error) => {
                    self.abandon(generation, error);
                    return;
                }
                Attempt::Retry => {
                    let Some(delay) = self.schedule_retry(generation) else {
                        return;
                    };
                    tokio::time::sleep(delay).await;
                }
            }
        }
    }

    /// Weighted draw for the next question; `None` if the generation is stale.
    fn draw_difficulty(&self, generation: u64) -> Option<Difficulty> {
        let mut state = self.state();
        if !state.accepts(generation) {
            return None;
        }
        let draw = state.rng.gen_range(0.0..100.0);
        let difficulty = state.session.weights().select(draw);
        debug!(
            "Difficulty draw {:.2} against [{}] -> {}",
            draw,
            state.session.weights(),
            difficulty
        );
        Some(difficulty)
    }

    /// Consume a retry and return its backoff, or give up when the budget is spent.
    fn schedule_retry(&self, generation: u64) -> Option<std::time::Duration> {
        let attempt = {
            let mut state = self.state();
            if !state.accepts(generation) {
                return None;
            }
            state.session.record_retry(self.params.max_retries)
        };

        match attempt {
            Some(attempt) => {
                let delay = self.params.backoff_delay(attempt);
                warn!(
                    "Rate limited, retry {}/{} in {:?}",
                    attempt, self.params.max_retries, delay
                );
                self.emit(QuizEvent::RetryScheduled { attempt, delay });
                Some(delay)
            }
            None => {
                self.abandon(
                    generation,
                    FetchError::RetriesExhausted(self.params.max_retries),
                );
                None
            }
        }
    }

    fn complete(&self, generation: u64, draft: QuestionDraft) {
        let snapshot = {
            let mut guard = self.state();
            let state = &mut *guard;
            if !state.accepts(generation) {
                debug!("Discarding question from stale generation {}", generation);
                return;
            }

            let rng = &mut state.rng;
            match draft.validate(|choices| choices.shuffle(rng)) {
                Ok(question) => {
                    debug!("Question ready: {}", question);
                    state.session.question_loaded(question);
                    state.fetch_in_flight = false;
                    state.session.snapshot()
                }
                Err(e) => {
                    drop(guard);
                    self.abandon(generation, FetchError::Malformed(e.to_string()));
                    return;
                }
            }
        };
        self.emit(QuizEvent::QuestionReady(snapshot));
    }

    fn abandon(&self, generation: u64, error: FetchError) {
        {
            let mut state = self.state();
            if !state.accepts(generation) {
                debug!("Discarding failure from stale generation {}", generation);
                return;
            }
            state.session.fetch_abandoned();
            state.fetch_in_flight = false;
        }
        warn!("Fetch abandoned: {}", error);
        self.emit(QuizEvent::FetchFailed(error));
    }

    fn after_feedback(self: &Arc<Self>, generation: u64, correct: bool) {
        if correct {
            self.spawn_fetch(Some(generation));
            return;
        }

        let final_score = {
            let mut state = self.state();
            if !state.session.is_current(generation) {
                return;
            }
            state.fetch_in_flight = false;
            state.session.end()
        };
        info!("Session ended with score {}", final_score);
        self.emit(QuizEvent::SessionEnded { final_score });
    }
}
