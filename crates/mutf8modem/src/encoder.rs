//! The code-units-to-bytes transform loop.
#![allow(clippy::cast_possible_truncation)] // low-byte extraction is intended

use crate::{
    CoderResult,
    window::{ReadWindow, WriteWindow},
};

/// Streaming encoder from UTF-16 code units to Modified UTF-8 bytes.
///
/// This direction is total: every 16-bit value has a defined encoding, so
/// the loop never reports `Malformed` or `Unmappable`. Code unit 0 is
/// always written in its overlong `C0 80` form so the output never contains
/// an embedded zero byte.
///
/// # Examples
///
/// ```rust
/// use mutf8modem::{CoderResult, Mutf8Encoder, ReadWindow, WriteWindow};
///
/// let mut encoder = Mutf8Encoder::new();
/// let units = [0x0000u16, 0x0041];
/// let mut bytes = [0u8; 8];
///
/// let mut source = ReadWindow::new(&units);
/// let mut target = WriteWindow::new(&mut bytes);
/// assert_eq!(encoder.encode(&mut source, &mut target), CoderResult::Underflow);
/// assert_eq!(target.written(), &[0xC0, 0x80, 0x41]);
/// ```
#[derive(Debug, Default)]
pub struct Mutf8Encoder {
    _private: (),
}

impl Mutf8Encoder {
    /// Creates a fresh encoder, independent of any other instance.
    #[must_use]
    pub fn new() -> Self {
        Self { _private: () }
    }

    /// Encodes code units from `source` into `target` until the source is
    /// exhausted (`Underflow`, both cursors fully advanced) or the target
    /// lacks room for the next unit's full encoding (`Overflow`, neither
    /// cursor moved for that unit).
    ///
    /// Capacity for the whole 1-, 2- or 3-byte form is checked before any
    /// byte is written, so the target never receives a partial sequence.
    pub fn encode(
        &mut self,
        source: &mut ReadWindow<'_, u16>,
        target: &mut WriteWindow<'_, u8>,
    ) -> CoderResult {
        while let Some(unit) = source.peek(0) {
            match unit {
                0x0001..=0x007F => {
                    if target.remaining() < 1 {
                        return CoderResult::Overflow;
                    }
                    target.push(unit as u8);
                }
                // NUL takes the overlong two-byte form alongside the
                // ordinary two-byte range.
                0x0000 | 0x0080..=0x07FF => {
                    if target.remaining() < 2 {
                        return CoderResult::Overflow;
                    }
                    target.push(0xC0 | (unit >> 6) as u8);
                    target.push(0x80 | (unit & 0x3F) as u8);
                }
                0x0800..=0xFFFF => {
                    if target.remaining() < 3 {
                        return CoderResult::Overflow;
                    }
                    target.push(0xE0 | (unit >> 12) as u8);
                    target.push(0x80 | (unit >> 6 & 0x3F) as u8);
                    target.push(0x80 | (unit & 0x3F) as u8);
                }
            }
            source.consume(1);
        }
        CoderResult::Underflow
    }
}
