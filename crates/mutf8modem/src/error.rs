//! Error values for call sites that turn a `Malformed` result into a hard
//! failure.
//!
//! The transform loops themselves never construct these; they report
//! malformed input through [`CoderResult`](crate::CoderResult). The wrapper
//! here is policy for whole-buffer drivers and similar callers.

use alloc::boxed::Box;

use thiserror::Error;

/// Boxed underlying cause of an [`InvalidMutf8Error`].
pub type BoxError = Box<dyn core::error::Error + Send + Sync>;

/// Invalid Modified UTF-8 was encountered where a hard failure was wanted.
///
/// Holds an optional underlying cause, recorded at construction and
/// immutable afterwards. An absent cause means "no specific cause
/// recorded". There is deliberately no setter and no captured backtrace;
/// these errors are raised in bulk decode paths where both would be noise.
#[derive(Debug, Error, Default)]
#[error("invalid modified UTF-8")]
pub struct InvalidMutf8Error {
    #[source]
    cause: Option<BoxError>,
}

impl InvalidMutf8Error {
    /// An error with no specific cause recorded.
    #[must_use]
    pub fn new() -> Self {
        Self { cause: None }
    }

    /// An error wrapping `cause`.
    #[must_use]
    pub fn with_cause(cause: impl Into<BoxError>) -> Self {
        Self {
            cause: Some(cause.into()),
        }
    }

    /// The underlying cause, if one was recorded at construction.
    #[must_use]
    pub fn cause(&self) -> Option<&(dyn core::error::Error + Send + Sync)> {
        self.cause.as_deref()
    }
}

/// A malformed byte sequence reported by the decoder.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
#[error("malformed sequence of {len} byte(s) at offset {pos}")]
pub struct MalformedInput {
    /// Byte offset of the first malformed byte.
    pub pos: usize,
    /// Number of malformed bytes, as reported by `Malformed(n)`.
    pub len: usize,
}

/// Input ended in the middle of a multi-byte sequence.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
#[error("truncated sequence at offset {pos}")]
pub struct TruncatedInput {
    /// Byte offset of the leading byte of the incomplete sequence.
    pub pos: usize,
}

/// A decoded code unit stream contained a surrogate half with no partner.
///
/// Only the string-building driver reports this; the loops pass lone
/// surrogates through unmodified.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
#[error("unpaired surrogate 0x{unit:04X}")]
pub struct UnpairedSurrogate {
    /// The surrogate code unit.
    pub unit: u16,
}
