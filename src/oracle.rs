use crate::error::OracleBoxError;
use std::collections::HashSet;

/// The phonetic codec a `lookup_phonetic` call should use.
///
/// `spec.md` §4.A: "one of {soundex, dmetaphone_primary, dmetaphone_alternate}".
/// Codec identity is the critical contract — the oracle must encode both the
/// stored lexicon and the query with the *same* algorithm, so the codec is
/// named rather than the matcher computing and transmitting a code itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PhoneticCodec {
    Soundex,
    DMetaphonePrimary,
    DMetaphoneAlternate,
}

/// A single-wildcard pattern: a string where exactly one character position
/// holds the wildcard token (`spec.md` §3 "Wildcard pattern", §6). Anchored —
/// no implicit prefix/suffix wildcarding.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct WildcardPattern(pub String);

impl WildcardPattern {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// A lexicon member paired with its trigram similarity score
/// (`spec.md` §3 "Similarity score").
#[derive(Debug, Clone, PartialEq)]
pub struct ScoredMatch {
    pub value: String,
    pub score: f64,
}

/// Abstracts the dictionary store the matchers search against
/// (`spec.md` §4.A). Implementations may be backed by a database, an
/// in-memory collection (see [`crate::memory::MemoryOracle`]), or any other
/// store capable of the five verbs below. All lookups are pure with respect
/// to a snapshot of the lexicon at call time.
pub trait LexiconOracle {
    /// Returns whether `s` is a member of the lexicon.
    fn lookup_exact(&self, s: &str) -> Result<bool, OracleBoxError>;

    /// Batched exact lookup: returns the subset of `candidates` that are
    /// lexicon members. Semantically equivalent to mapping `lookup_exact`
    /// over `candidates`.
    fn lookup_set(&self, candidates: &[String]) -> Result<HashSet<String>, OracleBoxError>;

    /// Returns all lexicon members matching any of `patterns`. Each pattern
    /// contains at most one wildcard position.
    fn lookup_patterns(
        &self,
        patterns: &[WildcardPattern],
    ) -> Result<HashSet<String>, OracleBoxError>;

    /// Sets the oracle's internal trigram-similarity threshold ("limit").
    /// Idempotent; callers must set this before calling `lookup_trigram` and
    /// must re-apply it whenever the handle is rebound to a new matcher
    /// (`spec.md` Design Note N2).
    fn set_trigram_limit(&self, cutoff: f64) -> Result<(), OracleBoxError>;

    /// Returns lexicon members whose trigram similarity to `s` is at least
    /// the currently configured limit, paired with their scores.
    fn lookup_trigram(&self, s: &str) -> Result<Vec<ScoredMatch>, OracleBoxError>;

    /// Returns lexicon members whose phonetic code under `codec` equals
    /// that of `s`.
    fn lookup_phonetic(
        &self,
        s: &str,
        codec: PhoneticCodec,
    ) -> Result<HashSet<String>, OracleBoxError>;
}
