//! The codec descriptor: canonical name, containment relation, expansion
//! ratios, and the decoder/encoder factory.

use crate::{decoder::Mutf8Decoder, encoder::Mutf8Encoder};

/// Identity of a character set known to this crate's containment relation
/// and registry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Charset {
    /// Modified UTF-8, the set this crate transcodes.
    ModifiedUtf8,
    /// Standard UTF-8, full Unicode.
    Utf8,
    /// 7-bit ASCII.
    UsAscii,
}

impl Charset {
    /// Canonical, case-sensitive registry name.
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::ModifiedUtf8 => Mutf8Charset::CANONICAL_NAME,
            Self::Utf8 => "UTF-8",
            Self::UsAscii => "US-ASCII",
        }
    }

    /// Whether every string representable in `other` is representable in
    /// `self`.
    ///
    /// A set contains itself. Modified UTF-8 additionally contains UTF-8
    /// and, transitively, everything UTF-8 contains: it can represent every
    /// 16-bit code unit. No claim is made about unrelated sets.
    #[must_use]
    pub fn contains(self, other: Charset) -> bool {
        if self == other {
            return true;
        }
        match self {
            Self::ModifiedUtf8 => other == Self::Utf8 || Self::Utf8.contains(other),
            Self::Utf8 => other == Self::UsAscii,
            Self::UsAscii => false,
        }
    }
}

/// Descriptor and factory for the Modified UTF-8 codec.
///
/// The descriptor itself is stateless; all per-stream state lives in the
/// windows handed to the decoder/encoder instances it produces.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Mutf8Charset;

impl Mutf8Charset {
    /// Canonical name used for registry lookup, case-sensitive.
    pub const CANONICAL_NAME: &'static str = "x-modified-utf-8";

    /// Expected code units produced per input byte, for sizing decode
    /// targets.
    pub const AVERAGE_CHARS_PER_BYTE: f32 = 1.0;
    /// Worst-case code units per input byte: one, for a 1-byte sequence.
    pub const MAX_CHARS_PER_BYTE: f32 = 1.0;
    /// Expected bytes produced per input code unit, for sizing encode
    /// targets.
    pub const AVERAGE_BYTES_PER_CHAR: f32 = 2.0;
    /// Worst-case bytes per input code unit: three.
    pub const MAX_BYTES_PER_CHAR: f32 = 3.0;

    /// This codec's identity in the containment relation.
    #[must_use]
    pub fn id(self) -> Charset {
        Charset::ModifiedUtf8
    }

    /// Canonical name of this codec.
    #[must_use]
    pub fn name(self) -> &'static str {
        Self::CANONICAL_NAME
    }

    /// Whether this codec can represent every string representable in
    /// `other`. See [`Charset::contains`].
    #[must_use]
    pub fn contains(self, other: Charset) -> bool {
        self.id().contains(other)
    }

    /// Produces a fresh decoder. Each call returns a new, independent
    /// instance; separate streams never share state.
    #[must_use]
    pub fn new_decoder(self) -> Mutf8Decoder {
        Mutf8Decoder::new()
    }

    /// Produces a fresh encoder. Each call returns a new, independent
    /// instance.
    #[must_use]
    pub fn new_encoder(self) -> Mutf8Encoder {
        Mutf8Encoder::new()
    }
}
