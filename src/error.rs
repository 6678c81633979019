//! Error handling for batching operations
//!
//! The batching core never fails on its own: accumulation, threshold
//! detection and reset are all infallible. Every [`BatchError`] value
//! originates in the user-supplied sink. The batcher latches the first
//! error it sees and hands it back, clone-equal, from every subsequent
//! `push` and `flush` call until the instance is reset.
//!
//! # Example
//!
//! ```rust
//! use batchbuf::{BatchError, Batcher, FlushContext};
//!
//! let ctx = FlushContext::new();
//! let mut batcher = Batcher::<u32>::new(2, |_ctx, _batch| {
//!     Err(BatchError::sink("downstream unavailable"))
//! });
//!
//! batcher.push(&ctx, 1).unwrap();
//! let err = batcher.push(&ctx, 2).unwrap_err();
//! assert_eq!(err, BatchError::sink("downstream unavailable"));
//!
//! // The same error is returned until reset, without invoking the sink.
//! assert_eq!(batcher.flush(&ctx).unwrap_err(), err);
//! ```

use thiserror::Error;

/// Result type for batching operations
pub type BatchResult<T> = Result<T, BatchError>;

/// Errors surfaced through the batching API
///
/// All variants are produced by the consuming sink, never by the batcher
/// itself. The type derives `Clone` and `PartialEq` so a latched error can
/// be returned verbatim from repeated calls and compared by callers.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BatchError {
    /// The sink rejected a delivered batch
    #[error("sink failed: {reason}")]
    SinkFailed {
        /// Failure description produced by the sink
        reason: String,
    },

    /// The sink observed cancellation on the flush context and gave up
    #[error("sink canceled by flush context")]
    Canceled,
}

impl BatchError {
    /// Shorthand for [`BatchError::SinkFailed`] with the given reason
    pub fn sink(reason: impl Into<String>) -> Self {
        BatchError::SinkFailed {
            reason: reason.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sink_shorthand() {
        let err = BatchError::sink("broken pipe");
        assert_eq!(
            err,
            BatchError::SinkFailed {
                reason: "broken pipe".to_string()
            }
        );
    }

    #[test]
    fn test_display_messages() {
        assert_eq!(
            BatchError::sink("timeout").to_string(),
            "sink failed: timeout"
        );
        assert_eq!(
            BatchError::Canceled.to_string(),
            "sink canceled by flush context"
        );
    }

    #[test]
    fn test_clone_equality() {
        // Latching relies on a clone comparing equal to the original.
        let err = BatchError::sink("disk full");
        assert_eq!(err.clone(), err);
    }
}
