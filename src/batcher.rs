//! Push/flush state machine for size-triggered batching
//!
//! [`Batcher`] owns one accumulation buffer, a configured batch size, a
//! consuming sink and an optional latched error. Values are appended until
//! the batch size is reached, at which point the full batch is handed to
//! the sink in a single synchronous call.
//!
//! # State Machine
//!
//! The batcher has two states, `Clean` and `Failed`:
//!
//! ```text
//!            sink returns Err
//!   Clean ───────────────────────▶ Failed
//!     ▲                              │
//!     └──────────── reset ───────────┘
//! ```
//!
//! In `Failed`, every `push` and `flush` returns the latched error without
//! touching the buffer or invoking the sink. There is no retry and no
//! partial recovery; the caller must acknowledge the failure with
//! [`Batcher::reset`] before batching can resume.

use core::fmt::Debug;

use tracing::{debug, trace};

use crate::buffer::BatchBuf;
use crate::context::FlushContext;
use crate::error::{BatchError, BatchResult};

/// Batch size substituted when a batcher is constructed with size zero
pub const DEFAULT_BATCH_SIZE: usize = 64;

/// Boxed consuming sink invoked with one batch per flush
///
/// The slice is valid only for the duration of the call: the same backing
/// storage is cleared and reused for the next accumulation cycle, which the
/// borrow makes impossible to observe after the sink returns.
pub type SinkFn<T> = Box<dyn FnMut(&FlushContext, &[T]) -> BatchResult<()> + Send>;

/// Size-triggered batching buffer
///
/// Accumulates pushed values and delivers them to a sink in batches of a
/// fixed size, similar to a buffered writer parameterized over an arbitrary
/// consuming operation instead of a byte stream.
///
/// All operations are synchronous and run on the caller's thread; a call
/// returns only after the sink (if invoked) has completed. The `&mut self`
/// receivers make concurrent use of one instance a compile error, so no
/// internal locking is needed or provided.
///
/// # Example
///
/// ```rust
/// use batchbuf::{Batcher, FlushContext};
///
/// # fn main() -> batchbuf::BatchResult<()> {
/// let ctx = FlushContext::new();
/// let mut batcher = Batcher::<u32>::new(4, |_ctx, batch| {
///     println!("{batch:?}");
///     Ok(())
/// });
///
/// for i in 0..15 {
///     batcher.push(&ctx, i)?;
/// }
/// // Three full batches of four were already delivered; this delivers
/// // the remaining [12, 13, 14].
/// batcher.flush(&ctx)?;
/// # Ok(())
/// # }
/// ```
pub struct Batcher<T> {
    /// Effective batch size, never zero
    size: usize,
    buf: BatchBuf<T>,
    latched: Option<BatchError>,
    sink: SinkFn<T>,
}

impl<T> Debug for Batcher<T> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Batcher")
            .field("size", &self.size)
            .field("len", &self.buf.len())
            .field("latched", &self.latched)
            .field("sink", &"<fn>")
            .finish()
    }
}

impl<T> Batcher<T> {
    /// Creates a batcher with the given batch size and sink
    ///
    /// A `size` of zero is replaced by [`DEFAULT_BATCH_SIZE`]. The internal
    /// buffer is pre-sized for one full batch, so steady-state batching
    /// performs no allocation.
    pub fn new<F>(size: usize, sink: F) -> Self
    where
        F: FnMut(&FlushContext, &[T]) -> BatchResult<()> + Send + 'static,
    {
        let size = if size == 0 { DEFAULT_BATCH_SIZE } else { size };
        Self {
            size,
            buf: BatchBuf::with_capacity(size),
            latched: None,
            sink: Box::new(sink),
        }
    }

    /// Appends a value, flushing if the batch size is reached
    ///
    /// When the buffer fills to the configured size the accumulated batch
    /// is delivered immediately through the sink and this call returns the
    /// flush outcome. Exactly one flush happens per threshold crossing;
    /// there is never more than one pending batch.
    ///
    /// # Errors
    ///
    /// Returns the latched error without appending `value` if a previous
    /// sink invocation failed, or the sink's error if this push triggered a
    /// flush that failed.
    pub fn push(&mut self, ctx: &FlushContext, value: T) -> BatchResult<()> {
        if let Some(err) = &self.latched {
            return Err(err.clone());
        }
        self.buf.push(value);
        if self.buf.len() < self.size {
            return Ok(());
        }
        self.flush(ctx)
    }

    /// Delivers the accumulated batch to the sink and clears the buffer
    ///
    /// The sink is invoked exactly once, synchronously, with `ctx` and the
    /// full accumulated slice. A flush on an empty buffer still invokes the
    /// sink with an empty slice; callers relying on "no pushes, no
    /// callback" must guard externally.
    ///
    /// The buffer is cleared unconditionally after the sink returns. A
    /// failed batch is not retried or preserved.
    ///
    /// # Errors
    ///
    /// Returns the latched error without invoking the sink if a previous
    /// invocation failed. Otherwise relays the sink's error, if any, and
    /// latches it for all subsequent calls.
    pub fn flush(&mut self, ctx: &FlushContext) -> BatchResult<()> {
        if let Some(err) = &self.latched {
            return Err(err.clone());
        }
        trace!(len = self.buf.len(), "delivering batch to sink");
        let outcome = (self.sink)(ctx, self.buf.as_slice());
        // Consume-then-clear: the sink sees the batch before it is wiped,
        // and the clear happens even when the sink failed.
        self.buf.reset();
        if let Err(err) = &outcome {
            debug!(%err, "sink failed, latching error");
            self.latched = Some(err.clone());
        }
        outcome
    }

    /// Clears the buffer and latched error and installs a new sink
    ///
    /// Never invokes either the old or the new sink, even when accumulated
    /// values are discarded. The buffer allocation is retained. Safe to
    /// call in either state, including on an empty buffer.
    pub fn reset<F>(&mut self, sink: F)
    where
        F: FnMut(&FlushContext, &[T]) -> BatchResult<()> + Send + 'static,
    {
        trace!(dropped = self.buf.len(), "resetting batcher");
        self.buf.reset();
        self.latched = None;
        self.sink = Box::new(sink);
    }

    /// Returns the effective batch size
    ///
    /// This is the configured size (with zero replaced by
    /// [`DEFAULT_BATCH_SIZE`]), not the current fill level; it is constant
    /// for the lifetime of the batcher.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Returns the number of values currently accumulated
    ///
    /// Always strictly less than [`Batcher::size`] after a successful
    /// `push` or `flush`.
    pub fn len(&self) -> usize {
        self.buf.len()
    }

    /// Checks whether no values are currently accumulated
    pub fn is_empty(&self) -> bool {
        self.buf.is_empty()
    }

    /// Returns the latched error, if the batcher is in the failed state
    ///
    /// Allows inspecting the failure without spending a `push` or `flush`
    /// call. Cleared by [`Batcher::reset`].
    pub fn last_error(&self) -> Option<&BatchError> {
        self.latched.as_ref()
    }
}
