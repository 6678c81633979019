//! Internal accumulation buffer
//!
//! `BatchBuf` is the leaf component under [`crate::Batcher`]: an
//! append-only ordered sequence that retains its allocation across flush
//! cycles so steady-state batching does not reallocate. It knows nothing
//! about thresholds or sinks; all flush decisions live in the batcher.

/// Growable ordered buffer with allocation reuse across cycles
pub(crate) struct BatchBuf<T> {
    items: Vec<T>,
}

impl<T> BatchBuf<T> {
    /// Creates a buffer pre-sized for one full batch
    pub(crate) fn with_capacity(size: usize) -> Self {
        Self {
            items: Vec::with_capacity(size),
        }
    }

    pub(crate) fn push(&mut self, value: T) {
        self.items.push(value);
    }

    pub(crate) fn len(&self) -> usize {
        self.items.len()
    }

    pub(crate) fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// The accumulated batch, in insertion order
    pub(crate) fn as_slice(&self) -> &[T] {
        &self.items
    }

    /// Truncates to length zero, keeping the allocation
    ///
    /// Every populated element is dropped here, so no previously pushed
    /// value survives in the reusable region. No-op on an empty buffer.
    pub(crate) fn reset(&mut self) {
        if self.items.is_empty() {
            return;
        }
        self.items.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_push_preserves_order() {
        let mut buf = BatchBuf::with_capacity(4);
        for i in 0..4 {
            buf.push(i);
        }
        assert_eq!(buf.as_slice(), &[0, 1, 2, 3]);
        assert_eq!(buf.len(), 4);
    }

    #[test]
    fn test_reset_clears_but_keeps_capacity() {
        let mut buf = BatchBuf::with_capacity(8);
        for i in 0..8 {
            buf.push(i);
        }
        let cap = buf.items.capacity();

        buf.reset();
        assert!(buf.is_empty());
        assert_eq!(buf.items.capacity(), cap);

        // The next cycle reuses the same storage.
        for i in 0..8 {
            buf.push(i * 10);
        }
        assert_eq!(buf.items.capacity(), cap);
        assert_eq!(buf.as_slice(), &[0, 10, 20, 30, 40, 50, 60, 70]);
    }

    #[test]
    fn test_reset_on_empty_is_noop() {
        let mut buf = BatchBuf::<String>::with_capacity(4);
        buf.reset();
        assert!(buf.is_empty());
    }

    #[test]
    fn test_growth_past_initial_capacity() {
        let mut buf = BatchBuf::with_capacity(2);
        for i in 0..10 {
            buf.push(i);
        }
        assert_eq!(buf.len(), 10);
    }
}
