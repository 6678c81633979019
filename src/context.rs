//! Flush context handed to the consuming sink
//!
//! Every sink invocation receives a [`FlushContext`], whether the flush was
//! triggered implicitly by reaching the batch size or explicitly by the
//! caller. The batching core never reads the context; it plumbs the exact
//! value through unchanged. Honoring cancellation or the deadline is
//! entirely the sink's responsibility.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Instant;

/// Cancellation and deadline carrier for flush operations
///
/// Cloning is cheap and clones share the same cancellation flag, so a
/// context retained by the caller can cancel work observed inside the sink.
///
/// # Example
///
/// ```rust
/// use batchbuf::FlushContext;
///
/// let ctx = FlushContext::new();
/// let observer = ctx.clone();
///
/// assert!(!observer.is_canceled());
/// ctx.cancel();
/// assert!(observer.is_canceled());
/// ```
#[derive(Clone, Debug, Default)]
pub struct FlushContext {
    canceled: Arc<AtomicBool>,
    deadline: Option<Instant>,
}

impl FlushContext {
    /// Creates a context with no deadline and cancellation unset
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a context carrying a deadline
    ///
    /// The batcher does not enforce the deadline; it is advisory
    /// information for the sink.
    pub fn with_deadline(deadline: Instant) -> Self {
        Self {
            canceled: Arc::new(AtomicBool::new(false)),
            deadline: Some(deadline),
        }
    }

    /// Returns the deadline, if one was set
    pub fn deadline(&self) -> Option<Instant> {
        self.deadline
    }

    /// Requests cancellation
    ///
    /// Visible to every clone of this context. Idempotent.
    pub fn cancel(&self) {
        self.canceled.store(true, Ordering::Relaxed);
    }

    /// Checks whether cancellation has been requested
    pub fn is_canceled(&self) -> bool {
        self.canceled.load(Ordering::Relaxed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[test]
    fn test_fresh_context_is_not_canceled() {
        let ctx = FlushContext::new();
        assert!(!ctx.is_canceled());
        assert_eq!(ctx.deadline(), None);
    }

    #[test]
    fn test_clones_share_cancellation() {
        let ctx = FlushContext::new();
        let clone = ctx.clone();

        clone.cancel();
        assert!(ctx.is_canceled());
        assert!(clone.is_canceled());
    }

    #[test]
    fn test_deadline_is_carried() {
        let deadline = Instant::now() + Duration::from_secs(5);
        let ctx = FlushContext::with_deadline(deadline);
        assert_eq!(ctx.deadline(), Some(deadline));
    }
}
