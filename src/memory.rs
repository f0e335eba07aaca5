//! An in-process [`LexiconOracle`] implementation.
//!
//! `spec.md` §1 puts "the relational store that persists the lexicon" out
//! of scope, treating it only as "a lookup oracle exposing exact-set,
//! pattern-prefix, and trigram-similarity queries." This module is a real,
//! usable implementation of that oracle contract with no database behind
//! it — grounded directly on the teacher crate's own trigram machinery
//! (`trigrams()`/`similarity_from_sets()` and its sequential/`rayon`
//! crossover at [`PARALLEL_THRESHOLD`]) plus the Soundex/Double Metaphone
//! encoders in [`crate::phonetic`].
//!
//! It is what this crate's own tests, doctests, and `demos/lookup.rs` run
//! against; it is not a mock of a database, it is a standalone store.

use crate::error::OracleError;
use crate::oracle::{LexiconOracle, PhoneticCodec, ScoredMatch, WildcardPattern};
use crate::phonetic::{double_metaphone, soundex};
use once_cell::sync::Lazy;
use rayon::prelude::*;
use regex::Regex;
use rustc_hash::FxHashSet;
use std::collections::HashSet;
use std::error::Error as StdError;
use std::sync::RwLock;

/// Mirrors the teacher crate's own crossover point for sequential vs.
/// `rayon`-parallel scoring: below this many candidates, thread
/// coordination overhead outweighs the benefit of parallelism.
const PARALLEL_THRESHOLD: usize = 250;

static WORD_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"[\p{L}\p{N}]+").unwrap());

/// An in-memory lexicon oracle backed by a `Vec<String>`.
///
/// Construction deduplicates while preserving first-occurrence order,
/// mirroring how `taxonomy_upload/fuzzy_match/process_genus_names.py`
/// builds its `genera` list from CSV rows ("if row['standardGenus'] not in
/// genera: genera.append(...)").
pub struct MemoryOracle {
    lexicon: Vec<String>,
    index: FxHashSet<String>,
    trigram_limit: RwLock<f64>,
}

impl MemoryOracle {
    pub fn new() -> Self {
        MemoryOracle {
            lexicon: Vec::new(),
            index: FxHashSet::default(),
            trigram_limit: RwLock::new(0.3),
        }
    }

    /// Builds an oracle from an iterator of lexicon strings, deduplicating
    /// while preserving first-occurrence order.
    pub fn from_iter<I, S>(values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut oracle = MemoryOracle::new();
        for v in values {
            oracle.insert(v.into());
        }
        oracle
    }

    /// Inserts a lexicon member if not already present. Returns `true` if
    /// it was newly inserted.
    pub fn insert(&mut self, value: String) -> bool {
        if self.index.contains(&value) {
            false
        } else {
            self.index.insert(value.clone());
            self.lexicon.push(value);
            true
        }
    }

    pub fn len(&self) -> usize {
        self.lexicon.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lexicon.is_empty()
    }

    fn trigrams(text: &str) -> FxHashSet<[u8; 3]> {
        let normalized = pg_style_downcase(text);
        let capacity = (normalized.len() / 3).max(16);
        let mut set = FxHashSet::with_capacity_and_hasher(capacity, Default::default());
        let mut buf: Vec<char> = Vec::with_capacity(64);

        for mat in WORD_RE.find_iter(&normalized) {
            buf.clear();
            buf.extend([' ', ' ']);
            buf.extend(mat.as_str().chars());
            buf.push(' ');

            for window in buf.windows(3) {
                set.insert(compact_trigram(window[0], window[1], window[2]));
            }
        }
        set
    }

    fn similarity(a: &str, b: &str) -> f64 {
        let a_set = Self::trigrams(a);
        let b_set = Self::trigrams(b);
        similarity_from_sets(&a_set, &b_set)
    }
}

impl Default for MemoryOracle {
    fn default() -> Self {
        Self::new()
    }
}

impl LexiconOracle for MemoryOracle {
    fn lookup_exact(&self, s: &str) -> Result<bool, Box<dyn StdError + Send + Sync>> {
        Ok(self.index.contains(s))
    }

    fn lookup_set(
        &self,
        candidates: &[String],
    ) -> Result<HashSet<String>, Box<dyn StdError + Send + Sync>> {
        Ok(candidates
            .iter()
            .filter(|c| self.index.contains(*c))
            .cloned()
            .collect())
    }

    fn lookup_patterns(
        &self,
        patterns: &[WildcardPattern],
    ) -> Result<HashSet<String>, Box<dyn StdError + Send + Sync>> {
        let mut matches = HashSet::new();
        for pattern in patterns {
            let pat_chars: Vec<char> = pattern.as_str().chars().collect();
            for candidate in &self.lexicon {
                if matches_wildcard(&pat_chars, candidate) {
                    matches.insert(candidate.clone());
                }
            }
        }
        Ok(matches)
    }

    fn set_trigram_limit(&self, cutoff: f64) -> Result<(), Box<dyn StdError + Send + Sync>> {
        if !(0.0..=1.0).contains(&cutoff) {
            return Err(Box::new(OracleError(format!(
                "trigram limit {cutoff} out of range [0,1]"
            ))));
        }
        *self.trigram_limit.write().unwrap() = cutoff;
        Ok(())
    }

    fn lookup_trigram(
        &self,
        s: &str,
    ) -> Result<Vec<ScoredMatch>, Box<dyn StdError + Send + Sync>> {
        let cutoff = *self.trigram_limit.read().unwrap();

        let score_one = |candidate: &String| -> Option<ScoredMatch> {
            let score = Self::similarity(s, candidate);
            if score >= cutoff {
                Some(ScoredMatch {
                    value: candidate.clone(),
                    score,
                })
            } else {
                None
            }
        };

        let results: Vec<ScoredMatch> = if self.lexicon.len() < PARALLEL_THRESHOLD {
            self.lexicon.iter().filter_map(score_one).collect()
        } else {
            self.lexicon.par_iter().filter_map(score_one).collect()
        };

        Ok(results)
    }

    fn lookup_phonetic(
        &self,
        s: &str,
        codec: PhoneticCodec,
    ) -> Result<HashSet<String>, Box<dyn StdError + Send + Sync>> {
        let target = match codec {
            PhoneticCodec::Soundex => soundex(s),
            PhoneticCodec::DMetaphonePrimary => double_metaphone(s).primary,
            PhoneticCodec::DMetaphoneAlternate => {
                let code = double_metaphone(s);
                code.alternate.unwrap_or(code.primary)
            }
        };

        let matches = self
            .lexicon
            .iter()
            .filter(|candidate| {
                let candidate_code = match codec {
                    PhoneticCodec::Soundex => soundex(candidate),
                    PhoneticCodec::DMetaphonePrimary => double_metaphone(candidate).primary,
                    PhoneticCodec::DMetaphoneAlternate => {
                        let code = double_metaphone(candidate);
                        code.alternate.unwrap_or(code.primary)
                    }
                };
                candidate_code == target
            })
            .cloned()
            .collect();

        Ok(matches)
    }
}

fn matches_wildcard(pattern: &[char], candidate: &str) -> bool {
    let candidate_chars: Vec<char> = candidate.chars().collect();
    if pattern.len() != candidate_chars.len() {
        return false;
    }
    pattern
        .iter()
        .zip(candidate_chars.iter())
        .all(|(p, c)| *p == '_' || p.to_ascii_lowercase() == c.to_ascii_lowercase())
}

fn similarity_from_sets(a: &FxHashSet<[u8; 3]>, b: &FxHashSet<[u8; 3]>) -> f64 {
    let shared = a.intersection(b).count() as f64;
    let total = (a.len() + b.len()) as f64 - shared;
    if total == 0.0 {
        0.0
    } else {
        shared / total
    }
}

fn pg_style_downcase(text: &str) -> String {
    let mut result = String::with_capacity(text.len());
    for c in text.chars() {
        for lc in c.to_lowercase() {
            if lc != '\u{0307}' {
                result.push(lc);
            }
        }
    }
    result
}

fn compact_trigram(a: char, b: char, c: char) -> [u8; 3] {
    if a.is_ascii() && b.is_ascii() && c.is_ascii() {
        [a as u8, b as u8, c as u8]
    } else {
        let mut buf = [0u8; 12];
        let mut len = 0;
        for ch in [a, b, c] {
            let mut tmp = [0u8; 4];
            let encoded = ch.encode_utf8(&mut tmp);
            buf[len..len + encoded.len()].copy_from_slice(encoded.as_bytes());
            len += encoded.len();
        }
        let crc = crc32(&buf[..len]);
        let bytes = crc.to_le_bytes();
        [bytes[0], bytes[1], bytes[2]]
    }
}

fn crc32(bytes: &[u8]) -> u32 {
    // Small, dependency-free CRC32 for the rare multi-byte-trigram path;
    // only needs to be a consistent hash, not bit-for-bit identical to any
    // particular CRC32 variant.
    let mut crc: u32 = 0xFFFF_FFFF;
    for &byte in bytes {
        crc ^= byte as u32;
        for _ in 0..8 {
            let mask = (crc & 1).wrapping_neg();
            crc = (crc >> 1) ^ (0xEDB8_8320 & mask);
        }
    }
    !crc
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exact_lookup_roundtrip() {
        let oracle = MemoryOracle::from_iter(["Tyto", "Tytoalba", "Strix"]);
        assert!(oracle.lookup_exact("Tyto").unwrap());
        assert!(!oracle.lookup_exact("Bubo").unwrap());
    }

    #[test]
    fn dedups_preserving_first_occurrence_order() {
        let oracle =
            MemoryOracle::from_iter(["Anas", "Anis", "Anas", "Anaconda"]);
        assert_eq!(oracle.len(), 3);
    }

    #[test]
    fn wildcard_pattern_matches_single_position() {
        let oracle = MemoryOracle::from_iter(["Ictalurus"]);
        let pattern = WildcardPattern("Ictalur_s".to_string());
        let found = oracle.lookup_patterns(&[pattern]).unwrap();
        assert!(found.contains("Ictalurus"));
    }

    #[test]
    fn trigram_similarity_excludes_dissimilar_strings() {
        let oracle = MemoryOracle::from_iter(["Anas", "Anis", "Anaconda"]);
        oracle.set_trigram_limit(0.4).unwrap();
        let results = oracle.lookup_trigram("Anas").unwrap();
        let names: Vec<&str> = results.iter().map(|m| m.value.as_str()).collect();
        assert!(names.contains(&"Anas"));
        assert!(!names.contains(&"Anaconda"));
    }

    #[test]
    fn phonetic_lookup_groups_same_soundex_code() {
        let oracle = MemoryOracle::from_iter(["Robert", "Rupert", "Rubin"]);
        let matches = oracle
            .lookup_phonetic("Robert", PhoneticCodec::Soundex)
            .unwrap();
        assert!(matches.contains("Robert"));
        assert!(matches.contains("Rupert"));
    }
}
