//! Deterministic selection seeds.
//!
//! Every generated value is derived from the MD5 digest of a seed string,
//! rendered as 32 lowercase hex characters. Selections read integer values
//! off hex slices of that digest, so the same seed list always produces
//! the same fixture set.

use md5::{Digest, Md5};
use std::ops::Range;

/// MD5-backed selection seed.
#[derive(Debug, Clone)]
pub struct Seed {
    hex: String,
}

impl Seed {
    pub fn new(input: &str) -> Self {
        let digest = Md5::digest(input.as_bytes());
        Self {
            hex: hex::encode(digest),
        }
    }

    /// The full 32-character lowercase hex digest.
    pub fn hex(&self) -> &str {
        &self.hex
    }

    /// Integer value of a hex slice. Ranges are capped at 8 characters,
    /// which covers every selection the generators make.
    pub fn slice(&self, range: Range<usize>) -> u64 {
        debug_assert!(range.end - range.start <= 8);
        u64::from_str_radix(&self.hex[range], 16).unwrap_or(0)
    }

    /// Table selection off a hex slice.
    pub fn pick<'a, T>(&self, range: Range<usize>, options: &'a [T]) -> &'a T {
        &options[self.slice(range) as usize % options.len()]
    }

    /// First `n` hex characters, used for derived resource ids.
    pub fn prefix(&self, n: usize) -> &str {
        &self.hex[..n]
    }

    /// Last `n` hex characters, used for MRN/member/plan codes.
    pub fn last(&self, n: usize) -> &str {
        &self.hex[self.hex.len() - n..]
    }

    /// A decimal digit string of length `n`, one digit per hex character.
    pub fn digits(&self, n: usize) -> String {
        self.hex
            .chars()
            .take(n)
            .map(|c| {
                let d = c.to_digit(16).unwrap_or(0) % 10;
                char::from_digit(d, 10).unwrap_or('0')
            })
            .collect()
    }
}

/// Derived resource id: prefix plus the first 20 hex characters of the
/// seed digest (`eCond...`, `eEnc...`, `eObs...`).
pub fn resource_id(prefix: &str, seed: &str) -> String {
    format!("{prefix}{}", Seed::new(seed).prefix(20))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn digest_is_stable_and_lowercase() {
        // md5("abc") is a published reference value
        let seed = Seed::new("abc");
        assert_eq!(seed.hex(), "900150983cd24fb0d6963f7d28e17f72");
    }

    #[test]
    fn slice_reads_hex_ranges() {
        let seed = Seed::new("abc");
        assert_eq!(seed.slice(0..2), 0x90);
        assert_eq!(seed.slice(2..4), 0x01);
        assert_eq!(seed.slice(0..4), 0x9001);
    }

    #[test]
    fn pick_is_deterministic() {
        let seed = Seed::new("ePt123");
        let options = ["a", "b", "c"];
        assert_eq!(seed.pick(0..2, &options), seed.pick(0..2, &options));
    }

    #[test]
    fn resource_id_has_prefix_and_20_hex_chars() {
        let id = resource_id("eCond", "p1_0");
        assert!(id.starts_with("eCond"));
        assert_eq!(id.len(), 5 + 20);
        assert_eq!(id, resource_id("eCond", "p1_0"));
    }

    #[test]
    fn digits_maps_hex_to_decimal() {
        let digits = Seed::new("abc").digits(10);
        assert_eq!(digits.len(), 10);
        assert!(digits.chars().all(|c| c.is_ascii_digit()));
    }
}
