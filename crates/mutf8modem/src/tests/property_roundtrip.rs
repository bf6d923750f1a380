use alloc::{vec, vec::Vec};

use quickcheck::QuickCheck;

use crate::{
    CoderResult, Mutf8Charset, Mutf8Decoder, ReadWindow, WriteWindow, decode_to_units,
    encode_units,
};

fn test_count() -> u64 {
    #[cfg(not(miri))]
    {
        if is_ci::cached() { 10_000 } else { 1_000 }
    }
    #[cfg(miri)]
    {
        10
    }
}

/// Feeds `pending` to the decoder and moves any unconsumed tail back for
/// the next round, the way a caller resuming on underflow would.
fn drain_into(decoder: &mut Mutf8Decoder, pending: &mut Vec<u8>, decoded: &mut Vec<u16>) {
    let mut out = vec![0u16; pending.len()];
    let mut source = ReadWindow::new(pending);
    let mut target = WriteWindow::new(&mut out);
    let result = decoder.decode(&mut source, &mut target);
    assert!(result.is_underflow());
    decoded.extend_from_slice(target.written());
    let tail = source.as_slice().to_vec();
    *pending = tail;
}

/// Decodes `bytes` in arbitrarily sized chunks derived from `splits`.
fn decode_chunked(bytes: &[u8], splits: &[usize]) -> Vec<u16> {
    let mut decoder = Mutf8Charset.new_decoder();
    let mut pending: Vec<u8> = Vec::new();
    let mut decoded: Vec<u16> = Vec::new();
    let mut idx = 0;
    let mut remaining = bytes.len();

    for s in splits {
        if remaining == 0 {
            break;
        }
        let size = 1 + (s % remaining);
        pending.extend_from_slice(&bytes[idx..idx + size]);
        idx += size;
        remaining -= size;
        drain_into(&mut decoder, &mut pending, &mut decoded);
    }
    if remaining > 0 {
        pending.extend_from_slice(&bytes[idx..]);
        drain_into(&mut decoder, &mut pending, &mut decoded);
    }
    assert!(pending.is_empty(), "valid input left a dangling tail");
    decoded
}

/// Encodes `units` through deliberately tiny targets, collecting output
/// across overflow retries.
fn encode_throttled(units: &[u16], caps: &[usize]) -> Vec<u8> {
    let mut encoder = Mutf8Charset.new_encoder();
    let mut source = ReadWindow::new(units);
    let mut encoded: Vec<u8> = Vec::new();
    let mut caps_iter = caps.iter().cycle();
    let mut stuck = false;
    loop {
        // A 1- or 2-byte target can be too small for the next unit; after a
        // zero-progress overflow, offer the worst-case three bytes.
        let capacity = if stuck {
            3
        } else {
            caps_iter.next().map_or(3, |c| 1 + c % 3)
        };
        let mut buf = vec![0u8; capacity];
        let mut target = WriteWindow::new(&mut buf);
        let result = encoder.encode(&mut source, &mut target);
        encoded.extend_from_slice(target.written());
        match result {
            CoderResult::Underflow => break,
            CoderResult::Overflow => stuck = target.position() == 0,
            CoderResult::Malformed(_) | CoderResult::Unmappable(_) => {
                panic!("encode direction is total")
            }
        }
    }
    encoded
}

/// Property: encode then decode is lossless for every code-unit sequence,
/// including NUL and lone surrogate halves.
#[test]
fn roundtrip_quickcheck() {
    fn prop(units: Vec<u16>) -> bool {
        decode_to_units(&encode_units(&units)).unwrap() == units
    }

    QuickCheck::new()
        .tests(test_count())
        .quickcheck(prop as fn(Vec<u16>) -> bool);
}

/// Property: splitting the byte stream at arbitrary points, including
/// inside multi-byte sequences, never loses or duplicates data.
#[test]
fn partition_roundtrip_quickcheck() {
    fn prop(units: Vec<u16>, splits: Vec<usize>) -> bool {
        let bytes = encode_units(&units);
        decode_chunked(&bytes, &splits) == units
    }

    QuickCheck::new()
        .tests(test_count())
        .quickcheck(prop as fn(Vec<u16>, Vec<usize>) -> bool);
}

/// Property: overflow retries against tiny targets produce the same bytes
/// as a single unbounded pass.
#[test]
fn throttled_encode_quickcheck() {
    fn prop(units: Vec<u16>, caps: Vec<usize>) -> bool {
        encode_throttled(&units, &caps) == encode_units(&units)
    }

    QuickCheck::new()
        .tests(test_count())
        .quickcheck(prop as fn(Vec<u16>, Vec<usize>) -> bool);
}

/// Property: over arbitrary (mostly invalid) bytes the decoder never
/// panics, every malformed report is 1 to 3 bytes, and cursor accounting
/// stays exact.
#[test]
fn arbitrary_bytes_quickcheck() {
    fn prop(bytes: Vec<u8>) -> bool {
        let mut decoder = Mutf8Charset.new_decoder();
        let mut out = vec![0u16; bytes.len()];
        let mut source = ReadWindow::new(&bytes);
        let mut target = WriteWindow::new(&mut out);
        loop {
            let entry = source.position();
            match decoder.decode(&mut source, &mut target) {
                CoderResult::Underflow => {
                    // Either done, or a truncated trailing sequence remains.
                    return source.remaining() <= 2;
                }
                CoderResult::Malformed(n) => {
                    if !(1..=3).contains(&n) || source.position() < entry + n {
                        return false;
                    }
                }
                CoderResult::Overflow | CoderResult::Unmappable(_) => return false,
            }
        }
    }

    QuickCheck::new()
        .tests(test_count())
        .quickcheck(prop as fn(Vec<u8>) -> bool);
}

/// Decoding is many-to-one for NUL: a bare zero byte and the canonical
/// `C0 80` form decode alike, but encoding always re-emits the canonical
/// form, so encode(decode(B)) may differ from B.
#[test]
fn nul_decoding_is_many_to_one_and_encoding_canonical() {
    let from_bare = decode_to_units(&[0x00]).unwrap();
    let from_overlong = decode_to_units(&[0xC0, 0x80]).unwrap();
    assert_eq!(from_bare, from_overlong);
    assert_eq!(encode_units(&from_bare), vec![0xC0, 0x80]);
}
