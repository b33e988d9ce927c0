//! Derivation of the digit, separator and guard character classes.
//!
//! Construction carves the deduplicated base alphabet into three disjoint
//! ordered sets:
//!
//! 1. Candidate separators (`cfhistuCFHISTU`) present in the alphabet are
//!    pulled out and shuffled with the salt.
//! 2. When separators are missing or the alphabet outnumbers them by more
//!    than `3.5:1`, the separator set is rebalanced (either borrowing
//!    characters from the front of the alphabet or truncating the surplus)
//!    before the remaining alphabet is shuffled with the salt.
//! 3. A twelfth of the alphabet is carved off as guards. Alphabets that came
//!    out of step 2 with fewer than three characters cannot donate guards
//!    without starving the radix conversion, so guards are taken from the
//!    separators instead.
//!
//! The union of the three sets is always a fixed permutation of the
//! deduplicated base alphabet, which keeps every encoded character
//! attributable to exactly one class during decoding.

use crate::error::Error;

use super::shuffle::consistent_shuffle;
use super::MIN_ALPHABET_LENGTH;

/// Characters eligible to separate numbers within one hash, in candidate
/// order. Chosen upstream to avoid building accidental English words in
/// generated hashes.
const SEPARATOR_CANDIDATES: &str = "cfhistuCFHISTU";

/// Desired maximum ratio of alphabet characters to separator characters.
const SEPARATOR_DIV: f64 = 3.5;

/// One guard character is reserved per this many alphabet characters.
const GUARD_DIV: usize = 12;

/// The three disjoint character classes derived from a base alphabet.
#[derive(Debug)]
pub(super) struct DerivedSets {
    pub(super) alphabet: Vec<char>,
    pub(super) separators: Vec<char>,
    pub(super) guards: Vec<char>,
}

/// Splits the deduplicated base alphabet into digit, separator and guard
/// classes, shuffled by `salt`.
///
/// ## Errors
/// * [`Error::AlphabetTooShort`] - fewer than [`MIN_ALPHABET_LENGTH`] unique
///   characters remain after deduplication
/// * [`Error::AlphabetContainsSpace`] - the alphabet contains a space
pub(super) fn derive(salt: &[char], base_alphabet: &str) -> Result<DerivedSets, Error> {
    let mut unique: Vec<char> = Vec::with_capacity(base_alphabet.len());
    for c in base_alphabet.chars() {
        if !unique.contains(&c) {
            unique.push(c);
        }
    }

    if unique.len() < MIN_ALPHABET_LENGTH {
        return Err(Error::AlphabetTooShort(unique.len()));
    }
    if unique.contains(&' ') {
        return Err(Error::AlphabetContainsSpace);
    }

    let mut separators: Vec<char> = SEPARATOR_CANDIDATES
        .chars()
        .filter(|c| unique.contains(c))
        .collect();
    let mut alphabet: Vec<char> = unique
        .iter()
        .copied()
        .filter(|c| !separators.contains(c))
        .collect();
    consistent_shuffle(&mut separators, salt);

    if separators.is_empty() || alphabet.len() as f64 / separators.len() as f64 > SEPARATOR_DIV {
        let mut target = (alphabet.len() as f64 / SEPARATOR_DIV).ceil() as usize;
        if target == 1 {
            target = 2;
        }

        if target > separators.len() {
            // Not enough candidates survived; promote alphabet characters.
            let borrowed = target - separators.len();
            separators.extend_from_slice(&alphabet[..borrowed]);
            alphabet.drain(..borrowed);
        } else {
            separators.truncate(target);
        }
    }
    consistent_shuffle(&mut alphabet, salt);

    let guard_count = alphabet.len().div_ceil(GUARD_DIV);
    if alphabet.len() < 3 {
        let guards = separators[..guard_count].to_vec();
        separators.drain(..guard_count);
        Ok(DerivedSets { alphabet, separators, guards })
    } else {
        let guards = alphabet[..guard_count].to_vec();
        alphabet.drain(..guard_count);
        Ok(DerivedSets { alphabet, separators, guards })
    }
}
