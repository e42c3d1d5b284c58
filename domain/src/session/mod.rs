//! Play session domain.
//!
//! - [`entities::Session`] — score, weights, retry budget and current question
//! - [`entities::SessionPhase`] — Idle / Loading / Ready / Ended
//! - [`snapshot::SessionSnapshot`] — immutable view handed to renderers

pub mod entities;
pub mod snapshot;
