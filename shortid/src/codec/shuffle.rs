//! Deterministic salt-driven permutation.
//!
//! This is a Fisher-Yates-style shuffle whose swap positions come from a
//! rolling checksum over the salt characters rather than a random source.
//! Identical `(sequence, salt)` pairs always produce the identical
//! permutation, which is what makes encodings reproducible across processes
//! and across independent implementations of the same scheme. The exact
//! arithmetic below is part of the wire format and must not be reinterpreted.

/// Permutes `chars` in place, driven by `salt`.
///
/// An empty salt leaves the sequence untouched. The walk runs from the last
/// position down to index 1, accumulating salt character codes into a
/// checksum that feeds each swap index.
pub(super) fn consistent_shuffle(chars: &mut [char], salt: &[char]) {
    if salt.is_empty() {
        return;
    }

    let mut cumulative: usize = 0;
    let mut salt_index: usize = 0;

    for position in (1..chars.len()).rev() {
        salt_index %= salt.len();
        let code = salt[salt_index] as usize;
        cumulative += code;
        let swap_index = (code + salt_index + cumulative) % position;
        chars.swap(swap_index, position);
        salt_index += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn shuffled(sequence: &str, salt: &str) -> String {
        let mut chars: Vec<char> = sequence.chars().collect();
        let salt: Vec<char> = salt.chars().collect();
        consistent_shuffle(&mut chars, &salt);
        chars.into_iter().collect()
    }

    #[test]
    fn empty_salt_is_identity() {
        assert_eq!(shuffled("abcdefghij", ""), "abcdefghij");
    }

    #[test]
    fn known_permutation() {
        assert_eq!(shuffled("abcdefghij", "salt"), "iajecbhdgf");
    }

    #[test]
    fn shuffle_is_deterministic() {
        let first = shuffled(crate::codec::DEFAULT_ALPHABET, "this is my salt");
        let second = shuffled(crate::codec::DEFAULT_ALPHABET, "this is my salt");
        assert_eq!(first, second);
    }

    #[test]
    fn different_salts_diverge() {
        assert_ne!(shuffled("abcdefghij", "salt a"), shuffled("abcdefghij", "salt b"));
    }

    #[test]
    fn shuffle_is_a_permutation() {
        let mut original: Vec<char> = "abcdefghijklmnop".chars().collect();
        let shuffled = shuffled("abcdefghijklmnop", "some salt");
        let mut shuffled: Vec<char> = shuffled.chars().collect();
        original.sort_unstable();
        shuffled.sort_unstable();
        assert_eq!(original, shuffled);
    }

    #[test]
    fn short_sequences_are_untouched() {
        assert_eq!(shuffled("", "salt"), "");
        assert_eq!(shuffled("a", "salt"), "a");
    }
}
