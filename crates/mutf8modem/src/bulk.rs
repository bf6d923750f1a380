//! Whole-buffer conveniences layered over the transform loops.
//!
//! These drivers own the retry policy the loops deliberately do not have:
//! a `Malformed` result becomes a hard [`InvalidMutf8Error`], and targets
//! are sized from the worst-case expansion ratios so `Overflow` cannot
//! occur. Loop semantics are untouched; callers that need replace-or-skip
//! behavior drive the loops themselves.

use alloc::{string::String, vec, vec::Vec};

use crate::{
    CoderResult, Mutf8Charset,
    error::{InvalidMutf8Error, MalformedInput, TruncatedInput, UnpairedSurrogate},
    window::{ReadWindow, WriteWindow},
};

/// Decodes a complete Modified UTF-8 buffer into UTF-16 code units.
///
/// # Errors
///
/// Returns [`InvalidMutf8Error`] wrapping a [`MalformedInput`] cause for an
/// invalid sequence, or a [`TruncatedInput`] cause when the buffer ends in
/// the middle of a multi-byte sequence.
pub fn decode_to_units(bytes: &[u8]) -> Result<Vec<u16>, InvalidMutf8Error> {
    // One unit per byte is the worst case, so a single pass always fits.
    let mut out = vec![0u16; bytes.len()];
    let mut decoder = Mutf8Charset.new_decoder();
    let mut source = ReadWindow::new(bytes);
    let mut target = WriteWindow::new(&mut out);
    let result = decoder.decode(&mut source, &mut target);
    let written = target.position();
    drop(target);
    match result {
        CoderResult::Underflow if source.is_empty() => {
            out.truncate(written);
            Ok(out)
        }
        CoderResult::Underflow => Err(InvalidMutf8Error::with_cause(TruncatedInput {
            pos: source.position(),
        })),
        CoderResult::Malformed(len) => Err(InvalidMutf8Error::with_cause(MalformedInput {
            pos: source.position() - len,
            len,
        })),
        CoderResult::Overflow | CoderResult::Unmappable(_) => unreachable!(),
    }
}

/// Decodes a complete Modified UTF-8 buffer into a `String`.
///
/// # Errors
///
/// As [`decode_to_units`], plus an [`UnpairedSurrogate`] cause when the
/// decoded unit sequence is not valid UTF-16.
pub fn decode_to_string(bytes: &[u8]) -> Result<String, InvalidMutf8Error> {
    let units = decode_to_units(bytes)?;
    let mut out = String::with_capacity(units.len());
    for decoded in char::decode_utf16(units.iter().copied()) {
        match decoded {
            Ok(c) => out.push(c),
            Err(e) => {
                return Err(InvalidMutf8Error::with_cause(UnpairedSurrogate {
                    unit: e.unpaired_surrogate(),
                }));
            }
        }
    }
    Ok(out)
}

/// Encodes a complete code-unit buffer into Modified UTF-8. Infallible:
/// every 16-bit value has an encoding.
#[must_use]
pub fn encode_units(units: &[u16]) -> Vec<u8> {
    // Three bytes per unit is the worst case.
    let mut out = vec![0u8; units.len() * 3];
    let mut encoder = Mutf8Charset.new_encoder();
    let mut source = ReadWindow::new(units);
    let mut target = WriteWindow::new(&mut out);
    let result = encoder.encode(&mut source, &mut target);
    debug_assert!(result.is_underflow());
    let written = target.position();
    drop(target);
    out.truncate(written);
    out
}

/// Encodes a string's UTF-16 form into Modified UTF-8.
#[must_use]
pub fn encode_str(s: &str) -> Vec<u8> {
    let units: Vec<u16> = s.encode_utf16().collect();
    encode_units(&units)
}
