/// Outcome of a single bounded transform call.
///
/// Both loops return one of these four tags. `Underflow` and `Overflow` are
/// expected, resumable conditions; `Malformed` signals invalid input bytes
/// that have already been consumed from the source window.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CoderResult {
    /// More input is needed to complete a pending unit, or the source was
    /// fully consumed. The source cursor sits at the first byte/unit of the
    /// incomplete item (or at the limit on normal completion).
    Underflow,
    /// The target window has no room for the next unit. Neither cursor moved
    /// past the unit that did not fit, so the same unit is retried on the
    /// next call once space is available.
    Overflow,
    /// The next `n` bytes examined formed an invalid sequence. Those `n`
    /// bytes have already been consumed from the source window; no output
    /// was written for them.
    Malformed(usize),
    /// Reserved. Neither direction of this codec produces it: every 16-bit
    /// code unit has a defined encoding.
    Unmappable(usize),
}

impl CoderResult {
    /// Returns `true` if the result is [`Underflow`].
    ///
    /// [`Underflow`]: CoderResult::Underflow
    #[must_use]
    pub fn is_underflow(self) -> bool {
        matches!(self, Self::Underflow)
    }

    /// Returns `true` if the result is [`Overflow`].
    ///
    /// [`Overflow`]: CoderResult::Overflow
    #[must_use]
    pub fn is_overflow(self) -> bool {
        matches!(self, Self::Overflow)
    }

    /// Returns `true` if the result reports invalid or unrepresentable
    /// input.
    #[must_use]
    pub fn is_error(self) -> bool {
        matches!(self, Self::Malformed(_) | Self::Unmappable(_))
    }

    /// The byte length of a malformed sequence, if this result is
    /// [`Malformed`].
    ///
    /// [`Malformed`]: CoderResult::Malformed
    #[must_use]
    pub fn malformed_len(self) -> Option<usize> {
        match self {
            Self::Malformed(len) => Some(len),
            _ => None,
        }
    }
}
