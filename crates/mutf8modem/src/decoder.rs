//! The bytes-to-code-units transform loop.

use crate::{
    CoderResult,
    window::{ReadWindow, WriteWindow},
};

/// Expected total length of a sequence, classified from its leading byte, or
/// `None` when the byte cannot lead a sequence (`10xxxxxx` continuation,
/// `1111xxxx` four-byte form).
fn sequence_len(b0: u8) -> Option<usize> {
    match b0 {
        0x00..=0x7F => Some(1),
        0xC0..=0xDF => Some(2),
        0xE0..=0xEF => Some(3),
        _ => None,
    }
}

fn is_continuation(byte: u8) -> bool {
    byte & 0xC0 == 0x80
}

/// Streaming decoder from Modified UTF-8 bytes to UTF-16 code units.
///
/// The decoder holds no state of its own: everything a resumed call needs is
/// recorded in the window cursors, so a partial multi-byte sequence left in
/// the source after `Underflow` is simply presented again (with more bytes
/// appended) on the next call.
///
/// # Examples
///
/// ```rust
/// use mutf8modem::{CoderResult, Mutf8Decoder, ReadWindow, WriteWindow};
///
/// let mut decoder = Mutf8Decoder::new();
/// let bytes = [0xC0, 0x80, b'A'];
/// let mut units = [0u16; 4];
///
/// let mut source = ReadWindow::new(&bytes);
/// let mut target = WriteWindow::new(&mut units);
/// assert_eq!(decoder.decode(&mut source, &mut target), CoderResult::Underflow);
/// assert_eq!(target.written(), &[0x0000, 0x0041]);
/// ```
#[derive(Debug, Default)]
pub struct Mutf8Decoder {
    _private: (),
}

impl Mutf8Decoder {
    /// Creates a fresh decoder, independent of any other instance.
    #[must_use]
    pub fn new() -> Self {
        Self { _private: () }
    }

    /// Decodes sequences from `source` into `target` until one side runs
    /// out or a malformed sequence is found.
    ///
    /// Returns:
    /// - `Underflow` when the source is exhausted, or ends mid-sequence. A
    ///   partial trailing sequence is left unconsumed so that a later call
    ///   with the remaining bytes appended resumes correctly.
    /// - `Overflow` when the target cannot fit the next unit. The source
    ///   cursor stays at the start of that sequence.
    /// - `Malformed(n)` when the next `n` bytes do not form a valid
    ///   sequence; those bytes are consumed before returning.
    ///
    /// A standalone `0x00` byte decodes to code unit 0, as does the
    /// canonical `0xC0 0x80` form. Sequences are not checked for
    /// minimal-length encoding beyond the leading-byte class, and lone
    /// surrogate halves pass through like any other 3-byte value.
    pub fn decode(
        &mut self,
        source: &mut ReadWindow<'_, u8>,
        target: &mut WriteWindow<'_, u16>,
    ) -> CoderResult {
        loop {
            let Some(b0) = source.peek(0) else {
                return CoderResult::Underflow;
            };
            if target.is_full() {
                // Checked before consuming anything, so the sequence that
                // did not fit is retried on the next call.
                return CoderResult::Overflow;
            }
            let Some(len) = sequence_len(b0) else {
                source.consume(1);
                return CoderResult::Malformed(1);
            };
            if source.remaining() < len {
                return CoderResult::Underflow;
            }
            // At least `len` unread bytes from here on.
            let seq = source.as_slice();
            // Validate continuation bytes before touching the cursor. A
            // mismatch at 1-indexed position k consumes exactly k bytes.
            for k in 1..len {
                if !is_continuation(seq[k]) {
                    source.consume(k + 1);
                    return CoderResult::Malformed(k + 1);
                }
            }
            let unit = match len {
                1 => u16::from(b0),
                2 => (u16::from(b0) & 0x1F) << 6 | (u16::from(seq[1]) & 0x3F),
                _ => {
                    (u16::from(b0) & 0x0F) << 12
                        | (u16::from(seq[1]) & 0x3F) << 6
                        | (u16::from(seq[2]) & 0x3F)
                }
            };
            source.consume(len);
            target.push(unit);
        }
    }
}
