//! # batchbuf
//!
//! Size-triggered batching buffer: pushed values are accumulated in an
//! internal buffer until a configured batch size is reached, then the whole
//! batch is handed to a user-supplied sink in one synchronous call. Similar
//! to a buffered writer, but parameterized over an arbitrary consuming
//! operation instead of a byte stream — the sink decides what a batch means
//! (disk write, network send, database insert).
//!
//! ## Overview
//!
//! - **[`Batcher`]**: the push/flush state machine. Owns the buffer, the
//!   batch size, the sink and the latched error.
//! - **[`FlushContext`]**: cancellation/deadline carrier passed through to
//!   the sink on every invocation, uninterpreted by the core.
//! - **[`BatchError`] / [`BatchResult`]**: the error surface. Errors only
//!   ever originate in the sink; the first one is latched and returned from
//!   every subsequent call until [`Batcher::reset`].
//!
//! ## Quick Start
//!
//! ```rust
//! use batchbuf::{Batcher, FlushContext};
//!
//! # fn main() -> batchbuf::BatchResult<()> {
//! let ctx = FlushContext::new();
//! let mut batcher = Batcher::<u64>::new(4, |_ctx, batch| {
//!     // Deliver one batch downstream. Runs once per full batch and once
//!     // per explicit flush.
//!     println!("batch: {batch:?}");
//!     Ok(())
//! });
//!
//! for i in 0..10 {
//!     batcher.push(&ctx, i)?;
//! }
//! // Two batches of four were delivered above; flush the trailing two.
//! batcher.flush(&ctx)?;
//! # Ok(())
//! # }
//! ```
//!
//! ## Failure Semantics
//!
//! A sink error moves the batcher into a failed state: every later `push`
//! and `flush` returns the same error without invoking the sink or touching
//! the buffer. There is deliberately no retry or partial recovery — one
//! failure blocks the instance until the caller acknowledges it with
//! [`Batcher::reset`], which clears the buffer and the error and installs a
//! new sink. This guarantees the sink is called exactly once per batch and
//! that nothing is silently dropped or double-delivered after a failure.
//!
//! ## Threading Model
//!
//! No internal concurrency: no threads, tasks or locks. All operations run
//! synchronously on the caller's thread and return only after the sink (if
//! invoked) has completed. A `Batcher` is accessed through `&mut self`, so
//! sharing one instance across threads requires external synchronization;
//! the borrow checker rejects unsynchronized concurrent use at compile
//! time.
//!
//! ## Batch Lifetime
//!
//! The sink receives the batch as `&[T]` backed by the internal buffer,
//! which is cleared and reused after the call returns. The slice lifetime
//! ends with the sink invocation, so stale views over reused storage cannot
//! be observed.

#![warn(missing_docs)]
#![warn(clippy::all)]

mod batcher;
mod buffer;
mod context;
mod error;

pub use batcher::{Batcher, SinkFn, DEFAULT_BATCH_SIZE};
pub use context::FlushContext;
pub use error::{BatchError, BatchResult};
