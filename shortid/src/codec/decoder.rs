//! Sequence decoding with mandatory round-trip validation.
//!
//! Decoding mirrors the encoder: strip guards, recover the lottery
//! character, replay the per-value alphabet reshuffles and convert each
//! digit segment back to a value. Because the wire format carries no
//! checksum, the decoder's single authoritative correctness check is to
//! re-encode the recovered values and compare byte-for-byte against the
//! input; any mismatch anywhere in the hash makes the whole decode return
//! an empty result. Malformed input of any shape degrades to that same
//! empty result; the decoder never panics and never returns partial data.

use super::radix;
use super::shuffle::consistent_shuffle;
use super::{Codec, GROUP_SEPARATOR, LARGE_NUMBER_MARKER, MAX_NUMBER};

/// Recombines the 1-3 split components of a flagged group back into the
/// original value, the inverse of the encoder's splitting rule.
///
/// Widens through `i128` so that `i64::MIN`, whose magnitude is exactly
/// `1024 * MAX_NUMBER`, recombines without overflowing; anything that does
/// not fit an `i64` is a decode failure.
fn combine_components(components: &[u64]) -> Option<i64> {
    match *components {
        [value] => i64::try_from(value).ok(),
        [remainder, quotient] => {
            let value = i128::from(quotient) * i128::from(MAX_NUMBER) + i128::from(remainder);
            i64::try_from(value).ok()
        }
        [remainder, _, quotient] => {
            let value = -(i128::from(quotient) * i128::from(MAX_NUMBER) + i128::from(remainder));
            i64::try_from(value).ok()
        }
        _ => None,
    }
}

impl Codec {
    /// Decodes a hash back into the sequence of integers it was built from.
    ///
    /// Total over all inputs: the empty string decodes to an empty vector,
    /// and any malformed, truncated or tampered hash decodes to an empty
    /// vector as well. A non-empty result is guaranteed to re-encode to an
    /// equivalent hash.
    pub fn decode(&self, hash: &str) -> Vec<i64> {
        let mut numbers: Vec<i64> = Vec::new();

        for group in hash.split(GROUP_SEPARATOR) {
            match self.decode_group_or_marker(group) {
                Some(decoded) => numbers.extend(decoded),
                None => {
                    tracing::debug!(group, "hash failed round-trip validation");
                    return Vec::new();
                }
            }
        }

        numbers
    }

    /// Decodes a hash produced by [`encode_hex`](Codec::encode_hex) back
    /// into its hexadecimal string, lowercased. Malformed input yields the
    /// empty string.
    pub fn decode_hex(&self, hash: &str) -> String {
        let mut hex = String::new();
        for number in self.decode(hash) {
            let digits = format!("{number:x}");
            // Drop the sentinel nibble added by encode_hex.
            hex.push_str(&digits[1..]);
        }
        hex
    }

    fn decode_group_or_marker(&self, group: &str) -> Option<Vec<i64>> {
        if let Some(prefix) = group.strip_suffix(LARGE_NUMBER_MARKER) {
            let components = self.decode_group(prefix)?;
            return Some(vec![combine_components(&components)?]);
        }

        let numbers = self.decode_group(group)?;
        // Validated components are within [0, MAX_NUMBER], so the cast holds.
        Some(numbers.into_iter().map(|n| n as i64).collect())
    }

    /// Decodes one group and validates it by replaying the encoder.
    fn decode_group(&self, group: &str) -> Option<Vec<u64>> {
        if group.is_empty() {
            return Some(Vec::new());
        }

        // Guards bound the value-carrying piece; with two or three pieces the
        // payload sits in the middle, otherwise it is the whole string.
        let unguarded: String = group
            .chars()
            .map(|c| if self.guards.contains(&c) { ' ' } else { c })
            .collect();
        let pieces: Vec<&str> = unguarded.split(' ').collect();
        let index = usize::from(pieces.len() == 2 || pieces.len() == 3);

        let mut payload = pieces[index].chars();
        let lottery = payload.next()?;
        let body: String = payload
            .map(|c| if self.separators.contains(&c) { ' ' } else { c })
            .collect();

        let mut alphabet = self.alphabet.clone();
        let mut shuffle_salt: Vec<char> = Vec::with_capacity(alphabet.len());
        let mut numbers: Vec<u64> = Vec::new();

        for segment in body.split(' ') {
            shuffle_salt.clear();
            shuffle_salt.push(lottery);
            shuffle_salt.extend_from_slice(&self.salt);
            shuffle_salt.extend_from_slice(&alphabet);
            shuffle_salt.truncate(alphabet.len());
            consistent_shuffle(&mut alphabet, &shuffle_salt);

            numbers.push(radix::unhash(segment, &alphabet)?);
        }

        // The authoritative check: only sequences that re-encode to exactly
        // this group are accepted.
        if !numbers.iter().all(|&n| n <= MAX_NUMBER as u64) {
            return None;
        }
        if self.encode_group(&numbers) != group {
            return None;
        }

        Some(numbers)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn combines_component_shapes() {
        assert_eq!(combine_components(&[42]), Some(42));
        assert_eq!(combine_components(&[100, 1]), Some(MAX_NUMBER + 100));
        assert_eq!(combine_components(&[3, 0, 0]), Some(-3));
        assert_eq!(combine_components(&[0, 0, 1024]), Some(i64::MIN));
        assert_eq!(
            combine_components(&[9_007_199_254_740_991, 1023]),
            Some(i64::MAX)
        );
    }

    #[test]
    fn rejects_unrepresentable_components() {
        // One component past i64::MAX in either direction.
        assert_eq!(combine_components(&[9_007_199_254_740_992, 1023]), None);
        assert_eq!(combine_components(&[1, 0, 1024]), None);
        // Component counts the splitting rule never produces.
        assert_eq!(combine_components(&[]), None);
        assert_eq!(combine_components(&[1, 2, 3, 4]), None);
    }
}
