//! Name-based lookup of the codec this crate provides.

use crate::charset::Mutf8Charset;

/// Looks up a charset by its canonical, case-sensitive name.
///
/// Unknown, empty, or syntactically invalid names yield `None`; a lookup
/// never fails with an error.
#[must_use]
pub fn lookup(name: &str) -> Option<Mutf8Charset> {
    (name == Mutf8Charset::CANONICAL_NAME).then_some(Mutf8Charset)
}

/// Iterates over the charsets this crate provides. Each call yields a fresh
/// iterator.
pub fn charsets() -> impl Iterator<Item = Mutf8Charset> {
    core::iter::once(Mutf8Charset)
}
