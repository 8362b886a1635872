//! Cooperative cancellation for analysis sessions.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use thiserror::Error;

/// A cloneable cancellation flag shared between a host and running analyses.
///
/// Hosts typically hand one token to the engine and keep a clone; flipping
/// the flag asks every analysis to stop at its next checkpoint. Analyses
/// poll the token at statement boundaries, so cancellation is prompt but
/// never preemptive.
#[derive(Clone, Debug, Default)]
pub struct CancelToken {
    flag: Arc<AtomicBool>,
}

impl CancelToken {
    /// Creates a token that has not been cancelled.
    pub fn new() -> Self {
        Self::default()
    }

    /// Requests cancellation. All clones of this token observe the request.
    pub fn cancel(&self) {
        self.flag.store(true, Ordering::Relaxed);
    }

    /// Returns `true` if cancellation has been requested.
    pub fn is_cancelled(&self) -> bool {
        self.flag.load(Ordering::Relaxed)
    }

    /// Returns `Err(Cancelled)` if cancellation has been requested, for use
    /// with the `?` operator at loop checkpoints.
    pub fn check(&self) -> Result<(), Cancelled> {
        if self.is_cancelled() {
            Err(Cancelled)
        } else {
            Ok(())
        }
    }
}

/// Error produced when an operation stops early because its [`CancelToken`]
/// was triggered. Partial results accumulated before the checkpoint remain
/// valid.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Error)]
#[error("analysis cancelled")]
pub struct Cancelled;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fresh_token_is_live() {
        let token = CancelToken::new();
        assert!(!token.is_cancelled());
        assert!(token.check().is_ok());
    }

    #[test]
    fn cancel_is_visible_to_clones() {
        let token = CancelToken::new();
        let clone = token.clone();
        token.cancel();
        assert!(clone.is_cancelled());
        assert_eq!(clone.check(), Err(Cancelled));
    }

    #[test]
    fn cancel_is_visible_across_threads() {
        let token = CancelToken::new();
        let clone = token.clone();
        std::thread::spawn(move || clone.cancel())
            .join()
            .unwrap();
        assert!(token.is_cancelled());
    }
}
