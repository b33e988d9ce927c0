//! # Salted Short-ID Codec
//!
//! Reversible encoding of integer sequences into short alphanumeric strings.
//! The codec derives three disjoint character classes (digits, separators
//! and guards) from a salt and a base alphabet, and drives every encoding step
//! through a deterministic, salt-seeded permutation, so two codecs built from
//! the same configuration always agree on the wire format while codecs with
//! different salts produce unrelated strings.
//!
//! ## Usage Example
//!
//! ```
//! use shortid::Codec;
//!
//! let codec = Codec::builder()
//!     .salt("my salt")
//!     .min_hash_length(8)
//!     .build()?;
//!
//! let hash = codec.encode(&[5]);
//! assert!(hash.len() >= 8);
//! assert_eq!(codec.decode(&hash), vec![5]);
//! # Ok::<(), shortid::Error>(())
//! ```
//!
//! ## Architecture
//!
//! * **Alphabet derivation**: carves the base alphabet into digit, separator
//!   and guard classes at construction time
//! * **Consistent shuffle**: deterministic salt-driven permutation used by
//!   every other component
//! * **Radix conversion**: single-value conversion against the current digit
//!   alphabet
//! * **Encoder / Decoder**: sequence-level orchestration, grouping and the
//!   round-trip validation that rejects malformed input

use crate::error::Error;

mod alphabet;
mod decoder;
mod encoder;
mod radix;
mod shuffle;


/// Largest value the group encoding covers directly (2^53). Values outside
/// `[0, MAX_NUMBER]` are split into in-range components and flagged with
/// [`LARGE_NUMBER_MARKER`] on the wire.
pub const MAX_NUMBER: i64 = 9_007_199_254_740_992;

/// Alphabet used when no custom alphabet is configured.
pub const DEFAULT_ALPHABET: &str =
    "abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ1234567890";

/// Minimum number of unique characters a base alphabet must provide.
pub const MIN_ALPHABET_LENGTH: usize = 16;

/// Joins independently encoded groups within one hash. Reserved: it is never
/// part of the derived character classes for the default alphabet.
pub const GROUP_SEPARATOR: char = '-';

/// Suffix flagging a group that carries the split components of a value
/// outside `[0, MAX_NUMBER]`.
pub const LARGE_NUMBER_MARKER: char = '=';

/// A configured short-ID codec.
///
/// All state is derived once at construction and never mutated afterwards;
/// [`encode`](Codec::encode) and [`decode`](Codec::decode) are pure functions
/// of that state, so a `Codec` can be shared freely across threads.
#[derive(Debug, Clone)]
pub struct Codec {
    salt: Vec<char>,
    min_hash_length: usize,
    alphabet: Vec<char>,
    separators: Vec<char>,
    guards: Vec<char>,
}

impl Codec {
    /// Creates a codec from a salt, a minimum hash length and a base
    /// alphabet.
    ///
    /// The salt seeds every permutation; an empty salt disables shuffling.
    /// Hashes shorter than `min_hash_length` are padded with guard and
    /// alphabet characters. The alphabet must contain at least
    /// [`MIN_ALPHABET_LENGTH`] unique characters and no spaces.
    ///
    /// ## Errors
    /// * [`Error::AlphabetTooShort`] - fewer than 16 unique characters remain
    ///   after deduplication
    /// * [`Error::AlphabetContainsSpace`] - the alphabet contains a space
    pub fn new(salt: &str, min_hash_length: usize, alphabet: &str) -> Result<Self, Error> {
        let salt: Vec<char> = salt.chars().collect();
        let sets = alphabet::derive(&salt, alphabet)?;

        tracing::trace!(
            alphabet = sets.alphabet.len(),
            separators = sets.separators.len(),
            guards = sets.guards.len(),
            "derived codec character classes"
        );

        Ok(Self {
            salt,
            min_hash_length,
            alphabet: sets.alphabet,
            separators: sets.separators,
            guards: sets.guards,
        })
    }

    /// Returns a builder preloaded with the defaults: empty salt, no minimum
    /// length and [`DEFAULT_ALPHABET`].
    pub fn builder() -> CodecBuilder {
        CodecBuilder::default()
    }

    /// The configured minimum hash length.
    pub fn min_hash_length(&self) -> usize {
        self.min_hash_length
    }
}

/// Builder for [`Codec`] configuration.
///
/// Every field has a sensible default, so only the deviations need to be
/// spelled out:
///
/// ```
/// let codec = shortid::Codec::builder().salt("great korea").build()?;
/// assert_eq!(codec.encode(&[2]), "n9");
/// # Ok::<(), shortid::Error>(())
/// ```
#[derive(Debug, Clone)]
pub struct CodecBuilder {
    salt: String,
    min_hash_length: usize,
    alphabet: String,
}

impl Default for CodecBuilder {
    fn default() -> Self {
        Self {
            salt: String::new(),
            min_hash_length: 0,
            alphabet: DEFAULT_ALPHABET.to_owned(),
        }
    }
}

impl CodecBuilder {
    /// Sets the salt seeding all permutations.
    pub fn salt(mut self, salt: impl Into<String>) -> Self {
        self.salt = salt.into();
        self
    }

    /// Sets the minimum length of encoded hashes.
    pub fn min_hash_length(mut self, length: usize) -> Self {
        self.min_hash_length = length;
        self
    }

    /// Replaces the base alphabet.
    pub fn alphabet(mut self, alphabet: impl Into<String>) -> Self {
        self.alphabet = alphabet.into();
        self
    }

    /// Derives the character classes and builds the codec.
    ///
    /// ## Errors
    /// Same conditions as [`Codec::new`].
    pub fn build(self) -> Result<Codec, Error> {
        Codec::new(&self.salt, self.min_hash_length, &self.alphabet)
    }
}
