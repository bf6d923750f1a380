mod property_roundtrip;

use alloc::vec::Vec;

use crate::{CoderResult, Mutf8Charset, ReadWindow, WriteWindow};

/// Runs a single decode call against a target of `capacity` units.
///
/// Returns the result, the units written, and the unread source tail.
fn decode_step(bytes: &[u8], capacity: usize) -> (CoderResult, Vec<u16>, Vec<u8>) {
    let mut decoder = Mutf8Charset.new_decoder();
    let mut out = alloc::vec![0u16; capacity];
    let mut source = ReadWindow::new(bytes);
    let mut target = WriteWindow::new(&mut out);
    let result = decoder.decode(&mut source, &mut target);
    (result, target.written().to_vec(), source.as_slice().to_vec())
}

/// Runs a single encode call against a target of `capacity` bytes.
///
/// Returns the result, the bytes written, and the unread source tail.
fn encode_step(units: &[u16], capacity: usize) -> (CoderResult, Vec<u8>, Vec<u16>) {
    let mut encoder = Mutf8Charset.new_encoder();
    let mut out = alloc::vec![0u8; capacity];
    let mut source = ReadWindow::new(units);
    let mut target = WriteWindow::new(&mut out);
    let result = encoder.encode(&mut source, &mut target);
    (result, target.written().to_vec(), source.as_slice().to_vec())
}
