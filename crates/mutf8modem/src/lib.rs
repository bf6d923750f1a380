//! A streaming transcoder between UTF-16 code units and Modified UTF-8,
//! the 1–3-byte encoding used by binary formats that forbid embedded zero
//! bytes and never use 4-byte UTF-8 sequences.
//!
//! The core is a pair of resumable transform loops over caller-owned
//! windows: [`Mutf8Decoder`] (bytes to code units) and [`Mutf8Encoder`]
//! (code units to bytes). Both leave all their state in the window cursors,
//! so a transform interrupted by exhausted input or a full target picks up
//! exactly where it stopped when called again. The codec operates per
//! 16-bit code unit: lone surrogate halves pass through unmodified.

#![no_std]
#![allow(missing_docs)]
extern crate alloc;

#[cfg(test)]
extern crate std;

mod bulk;
mod charset;
mod coder_result;
mod decoder;
mod encoder;
mod error;
mod registry;
mod window;

#[cfg(test)]
mod tests;

pub use bulk::{decode_to_string, decode_to_units, encode_str, encode_units};
pub use charset::{Charset, Mutf8Charset};
pub use coder_result::CoderResult;
pub use decoder::Mutf8Decoder;
pub use encoder::Mutf8Encoder;
pub use error::{BoxError, InvalidMutf8Error, MalformedInput, TruncatedInput, UnpairedSurrogate};
pub use registry::{charsets, lookup};
pub use window::{ReadWindow, WriteWindow};
