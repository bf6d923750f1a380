//! Bounded, cursor-tracking views over caller-owned buffers.
//!
//! A transform call reads from a [`ReadWindow`] and writes into a
//! [`WriteWindow`]; the cursors are the only state a transform leaves
//! behind, which is what makes decode/encode resumable. A caller that
//! receives `Underflow` appends more input, rebuilds the windows and calls
//! again; one that receives `Overflow` drains the target and retries.

/// A read-only view over a slice with a cursor advancing toward the limit.
///
/// The loop may read up to `remaining()` items and leaves the cursor at the
/// first unconsumed item on every exit.
#[derive(Debug)]
pub struct ReadWindow<'a, T> {
    slice: &'a [T],
    pos: usize,
}

impl<'a, T: Copy> ReadWindow<'a, T> {
    /// Creates a window over `slice` with the cursor at the start.
    #[must_use]
    pub fn new(slice: &'a [T]) -> Self {
        Self { slice, pos: 0 }
    }

    /// The cursor: how many items have been consumed so far.
    #[must_use]
    pub fn position(&self) -> usize {
        self.pos
    }

    /// Items left between the cursor and the limit.
    #[must_use]
    pub fn remaining(&self) -> usize {
        self.slice.len() - self.pos
    }

    /// Returns `true` if the cursor has reached the limit.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.pos == self.slice.len()
    }

    /// The item `offset` places past the cursor, without consuming anything.
    ///
    /// Peeking is how the loops examine a whole multi-item sequence before
    /// deciding whether to consume it (on success or malformed input) or to
    /// leave it untouched (on underflow/overflow).
    #[must_use]
    pub fn peek(&self, offset: usize) -> Option<T> {
        self.slice.get(self.pos + offset).copied()
    }

    /// Advances the cursor by `n` items.
    ///
    /// Callers check `remaining()` first; consuming past the limit is a bug.
    pub fn consume(&mut self, n: usize) {
        debug_assert!(n <= self.remaining());
        self.pos += n;
    }

    /// The unread tail, from the cursor to the limit.
    #[must_use]
    pub fn as_slice(&self) -> &'a [T] {
        &self.slice[self.pos..]
    }
}

/// A writable view over a slice with a cursor advancing toward the limit.
///
/// The loop may write up to `remaining()` items and leaves the cursor just
/// past the last written item.
#[derive(Debug)]
pub struct WriteWindow<'a, T> {
    slice: &'a mut [T],
    pos: usize,
}

impl<'a, T: Copy> WriteWindow<'a, T> {
    /// Creates a window over `slice` with the cursor at the start.
    #[must_use]
    pub fn new(slice: &'a mut [T]) -> Self {
        Self { slice, pos: 0 }
    }

    /// The cursor: how many items have been written so far.
    #[must_use]
    pub fn position(&self) -> usize {
        self.pos
    }

    /// Free items left between the cursor and the limit.
    #[must_use]
    pub fn remaining(&self) -> usize {
        self.slice.len() - self.pos
    }

    /// Returns `true` if no more items can be written.
    #[must_use]
    pub fn is_full(&self) -> bool {
        self.pos == self.slice.len()
    }

    /// Writes one item and advances the cursor.
    ///
    /// Callers check `remaining()` first; writing past the limit is a bug.
    pub fn push(&mut self, item: T) {
        debug_assert!(!self.is_full());
        self.slice[self.pos] = item;
        self.pos += 1;
    }

    /// The written prefix, from the start to the cursor.
    #[must_use]
    pub fn written(&self) -> &[T] {
        &self.slice[..self.pos]
    }
}
