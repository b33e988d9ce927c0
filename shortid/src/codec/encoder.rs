//! Sequence encoding: integers in, obfuscated string out.
//!
//! A run of values inside `[0, MAX_NUMBER]` becomes one *group*: a lottery
//! character chosen from a cheap hash over the values, followed by each
//! value's digits against a per-value reshuffled alphabet, with separator
//! characters between them. Values outside that range are split into 1-3
//! in-range components, encoded as their own group and flagged with
//! [`LARGE_NUMBER_MARKER`](super::LARGE_NUMBER_MARKER); groups are joined
//! with [`GROUP_SEPARATOR`](super::GROUP_SEPARATOR). Short results are
//! padded with guard and alphabet characters up to the configured minimum
//! length.

use super::radix;
use super::shuffle::consistent_shuffle;
use super::{Codec, GROUP_SEPARATOR, LARGE_NUMBER_MARKER, MAX_NUMBER};

/// Whether the group encoding covers `number` directly.
pub(super) fn directly_encodable(number: i64) -> bool {
    (0..=MAX_NUMBER).contains(&number)
}

/// Splits an out-of-range value into in-range components.
///
/// Positive overflow becomes `[remainder, quotient]`; negative values become
/// `[-remainder, 0, -quotient]`, carrying the sign in the component count
/// rather than a flag. The arithmetic stays inside `i64` even for
/// `i64::MIN`, because both quotient and remainder magnitudes are far below
/// the negation boundary.
pub(super) fn split_oversized(number: i64) -> Vec<u64> {
    let quotient = number / MAX_NUMBER;
    let remainder = number % MAX_NUMBER;

    if number > 0 {
        vec![remainder as u64, quotient as u64]
    } else {
        vec![(-remainder) as u64, 0, (-quotient) as u64]
    }
}

impl Codec {
    /// Encodes a sequence of integers into a single hash string.
    ///
    /// Total over all inputs: any `i64` is representable through the
    /// splitting scheme, and the empty slice encodes to the empty string.
    /// For non-empty input the result is never shorter than the configured
    /// minimum hash length.
    pub fn encode(&self, numbers: &[i64]) -> String {
        if numbers.is_empty() {
            return String::new();
        }
        if numbers.len() == 1 {
            return self.encode_single(numbers[0]);
        }
        if numbers.iter().copied().all(directly_encodable) {
            let group: Vec<u64> = numbers.iter().map(|&n| n as u64).collect();
            return self.encode_group(&group);
        }

        // Mixed input: runs of in-range values stay grouped, everything else
        // is split out into its own flagged group.
        let mut parts: Vec<String> = Vec::new();
        let mut run: Vec<u64> = Vec::new();
        for &number in numbers {
            if directly_encodable(number) {
                run.push(number as u64);
            } else {
                if !run.is_empty() {
                    parts.push(self.encode_group(&run));
                    run.clear();
                }
                parts.push(self.encode_single(number));
            }
        }
        if !run.is_empty() {
            parts.push(self.encode_group(&run));
        }

        let mut hash = String::new();
        for (index, part) in parts.iter().enumerate() {
            if index > 0 {
                hash.push(GROUP_SEPARATOR);
            }
            hash.push_str(part);
        }
        hash
    }

    /// Encodes the contents of a hexadecimal string.
    ///
    /// The input is cut into chunks of at most 12 hex digits and each chunk
    /// is prefixed with a sentinel `1` nibble before conversion, so leading
    /// zeros survive the round trip through [`decode_hex`](Codec::decode_hex).
    /// Anything but `[0-9a-fA-F]+` yields the empty string.
    pub fn encode_hex(&self, hex: &str) -> String {
        if hex.is_empty() || !hex.bytes().all(|b| b.is_ascii_hexdigit()) {
            return String::new();
        }

        let mut numbers: Vec<i64> = Vec::with_capacity(hex.len().div_ceil(12));
        for chunk in hex.as_bytes().chunks(12) {
            let parsed = std::str::from_utf8(chunk)
                .ok()
                .and_then(|chunk| u64::from_str_radix(chunk, 16).ok());
            let Some(parsed) = parsed else {
                return String::new();
            };
            let sentinel = 1u64 << (4 * chunk.len() as u32);
            numbers.push((sentinel | parsed) as i64);
        }

        self.encode(&numbers)
    }

    fn encode_single(&self, number: i64) -> String {
        if directly_encodable(number) {
            return self.encode_group(&[number as u64]);
        }
        let mut hash = self.encode_group(&split_oversized(number));
        hash.push(LARGE_NUMBER_MARKER);
        hash
    }

    /// Encodes one group of in-range values. Also the reference encoding the
    /// decoder replays to validate recovered values.
    pub(super) fn encode_group(&self, numbers: &[u64]) -> String {
        let numbers_hash: u64 = numbers
            .iter()
            .enumerate()
            .map(|(index, &number)| number % (index as u64 + 100))
            .sum();
        let lottery = self.alphabet[(numbers_hash % self.alphabet.len() as u64) as usize];
        tracing::trace!(numbers_hash, %lottery, "seeded group encoding");

        let mut alphabet = self.alphabet.clone();
        let mut out: Vec<char> = vec![lottery];
        let mut shuffle_salt: Vec<char> = Vec::with_capacity(alphabet.len());

        for (index, &number) in numbers.iter().enumerate() {
            reseed(&mut shuffle_salt, lottery, &self.salt, &alphabet);
            consistent_shuffle(&mut alphabet, &shuffle_salt);
            let digits = radix::hash(number, &alphabet);
            out.extend_from_slice(&digits);

            if index + 1 < numbers.len() {
                let separator_index = match digits.first() {
                    Some(&first) => {
                        (number % (first as u64 + index as u64)) % self.separators.len() as u64
                    }
                    None => 0,
                };
                out.push(self.separators[separator_index as usize]);
            }
        }

        self.apply_guards(&mut out, numbers_hash);
        self.pad_to_min_length(&mut out, &mut alphabet);
        out.into_iter().collect()
    }

    /// Wraps a too-short hash in up to two guard characters, picked from
    /// positions derived from the numbers hash and the hash content.
    fn apply_guards(&self, out: &mut Vec<char>, numbers_hash: u64) {
        if out.len() >= self.min_hash_length {
            return;
        }

        let index = (numbers_hash + out[0] as u64) % self.guards.len() as u64;
        out.insert(0, self.guards[index as usize]);

        if out.len() < self.min_hash_length {
            // A lone zero leaves only guard + lottery; anchor on the last
            // character then so the selection stays within bounds.
            let anchor = if out.len() > 2 { out[2] } else { out[out.len() - 1] };
            let index = (numbers_hash + anchor as u64) % self.guards.len() as u64;
            out.push(self.guards[index as usize]);
        }
    }

    /// Grows the hash symmetrically with halves of the freshly reshuffled
    /// alphabet until the minimum length is met, trimming any overshoot
    /// evenly from both ends.
    fn pad_to_min_length(&self, out: &mut Vec<char>, alphabet: &mut Vec<char>) {
        let half = self.alphabet.len() / 2;

        while out.len() < self.min_hash_length {
            let shuffle_salt = alphabet.clone();
            consistent_shuffle(alphabet, &shuffle_salt);

            let mut padded: Vec<char> = Vec::with_capacity(alphabet.len() + out.len());
            padded.extend_from_slice(&alphabet[half..]);
            padded.append(out);
            padded.extend_from_slice(&alphabet[..half]);

            let excess = padded.len().saturating_sub(self.min_hash_length);
            if excess > 0 {
                let start = excess / 2;
                *out = padded[start..start + self.min_hash_length].to_vec();
            } else {
                *out = padded;
            }
        }
    }
}

/// Rebuilds the per-value shuffle salt: lottery, then the codec salt, then
/// the current alphabet, truncated to the alphabet length.
fn reseed(shuffle_salt: &mut Vec<char>, lottery: char, salt: &[char], alphabet: &[char]) {
    shuffle_salt.clear();
    shuffle_salt.push(lottery);
    shuffle_salt.extend_from_slice(salt);
    shuffle_salt.extend_from_slice(alphabet);
    shuffle_salt.truncate(alphabet.len());
}
