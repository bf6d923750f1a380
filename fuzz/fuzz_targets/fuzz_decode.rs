#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use mutf8modem::{CoderResult, Mutf8Charset, ReadWindow, WriteWindow, decode_to_units, encode_units};

#[derive(Debug, Arbitrary)]
struct Input {
    bytes: Vec<u8>,
    splits: Vec<usize>,
}

/// Drives one decode pass over `bytes`, skipping malformed sequences, and
/// checks the cursor invariants the loop promises.
fn check_decode(bytes: &[u8]) {
    let mut decoder = Mutf8Charset.new_decoder();
    let mut out = vec![0u16; bytes.len()];
    let mut source = ReadWindow::new(bytes);
    let mut target = WriteWindow::new(&mut out);
    loop {
        let entry = source.position();
        match decoder.decode(&mut source, &mut target) {
            CoderResult::Underflow => {
                // At most a truncated multi-byte tail may remain.
                assert!(source.remaining() <= 2);
                break;
            }
            CoderResult::Malformed(n) => {
                assert!((1..=3).contains(&n));
                assert!(source.position() >= entry + n);
            }
            CoderResult::Overflow | CoderResult::Unmappable(_) => {
                unreachable!("target is sized for the worst case")
            }
        }
    }
    assert!(target.position() <= bytes.len());
}

/// Re-reads `bytes` as code units and checks the lossless round trip,
/// decoding back through chunks cut at the `splits` offsets.
fn check_roundtrip(bytes: &[u8], splits: &[usize]) {
    let units: Vec<u16> = bytes
        .chunks_exact(2)
        .map(|pair| u16::from_le_bytes([pair[0], pair[1]]))
        .collect();
    let encoded = encode_units(&units);
    assert_eq!(decode_to_units(&encoded).unwrap(), units);

    // The same stream split anywhere, including mid-sequence, must agree.
    let mut decoder = Mutf8Charset.new_decoder();
    let mut pending: Vec<u8> = Vec::new();
    let mut decoded: Vec<u16> = Vec::new();
    let mut idx = 0;
    let mut remaining = encoded.len();
    let mut splits_iter = splits.iter();
    while remaining > 0 {
        let size = splits_iter.next().map_or(remaining, |s| 1 + s % remaining);
        pending.extend_from_slice(&encoded[idx..idx + size]);
        idx += size;
        remaining -= size;

        let mut out = vec![0u16; pending.len()];
        let mut source = ReadWindow::new(&pending);
        let mut step_target = WriteWindow::new(&mut out);
        assert!(decoder.decode(&mut source, &mut step_target).is_underflow());
        decoded.extend_from_slice(step_target.written());
        let tail = source.as_slice().to_vec();
        pending = tail;
    }
    assert!(pending.is_empty());
    assert_eq!(decoded, units);
}

fuzz_target!(|input: Input| {
    check_decode(&input.bytes);
    check_roundtrip(&input.bytes, &input.splits);
});
