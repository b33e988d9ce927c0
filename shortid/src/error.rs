//! Top-level error type for the shortid library
//!

/// Errors reported while constructing a [`Codec`](crate::Codec).
///
/// Construction is the only fallible operation in the library: encoding is
/// total over all `i64` inputs, and decoding degrades to an empty result on
/// malformed input instead of returning an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// The supplied alphabet has too few distinct characters to derive the
    /// digit, separator and guard classes from.
    #[error(
        "alphabet must contain at least {min} unique characters, found {0}",
        min = crate::codec::MIN_ALPHABET_LENGTH
    )]
    AlphabetTooShort(usize),

    /// The supplied alphabet contains a space, which is reserved as an
    /// internal sentinel during decoding.
    #[error("alphabet must not contain spaces")]
    AlphabetContainsSpace,
}
