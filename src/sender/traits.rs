//! Trait abstraction for the delivery backend to enable mocking in tests

use crate::state::FormSnapshot;
use async_trait::async_trait;
use thiserror::Error;

/// Submission-layer errors.
///
/// Never shown verbatim to the user: the controller logs the detail and
/// surfaces one generic failure notice.
#[derive(Debug, Error)]
pub enum SendError {
    #[error("network error: {0}")]
    Network(String),
    #[error("submission rejected: {0}")]
    Rejected(String),
}

/// Delivery backend for accepted submissions.
///
/// The shipped implementation is [`super::SimulatedSender`]; a real
/// transport plugs in behind the same seam. Called at most once per
/// accepted submission.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ContactSender: Send + Sync {
    /// Deliver one form snapshot. Latency is unspecified; the caller owns
    /// all user-facing feedback for both outcomes.
    async fn send(&mut self, snapshot: &FormSnapshot) -> Result<(), SendError>;
}
