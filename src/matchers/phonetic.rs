//! Phonetic matching (`spec.md` §4.F): `SoundexMatcher` and
//! `DoubleMetaphoneMatcher`.
//!
//! Neither matcher computes a phonetic code itself — codec identity is the
//! contract (see [`crate::phonetic`]'s module doc), so both simply name a
//! [`PhoneticCodec`] and delegate entirely to the oracle.

use crate::error::MatchError;
use crate::matchers::{dedup_preserve_order, ApproxMatcher};
use crate::oracle::{LexiconOracle, PhoneticCodec};
use crate::query::validate_query;
use std::sync::Arc;

pub struct SoundexMatcher<O: LexiconOracle> {
    oracle: Arc<O>,
}

impl<O: LexiconOracle> SoundexMatcher<O> {
    pub fn new(oracle: Arc<O>) -> Self {
        SoundexMatcher { oracle }
    }
}

impl<O: LexiconOracle> ApproxMatcher for SoundexMatcher<O> {
    fn match_query(&self, query: &str) -> Result<Vec<String>, MatchError> {
        validate_query(query)?;
        let found = self
            .oracle
            .lookup_phonetic(query, PhoneticCodec::Soundex)
            .map_err(MatchError::Oracle)?;
        Ok(found.into_iter().collect())
    }
}

/// Unions the primary and alternate Double Metaphone codec lookups,
/// deduplicated, since an ambiguous word matches either reading (`spec.md`
/// §4.F, §GLOSSARY: "a candidate matches if either its primary or alternate
/// code equals either of the query's codes").
pub struct DoubleMetaphoneMatcher<O: LexiconOracle> {
    oracle: Arc<O>,
}

impl<O: LexiconOracle> DoubleMetaphoneMatcher<O> {
    pub fn new(oracle: Arc<O>) -> Self {
        DoubleMetaphoneMatcher { oracle }
    }
}

impl<O: LexiconOracle> ApproxMatcher for DoubleMetaphoneMatcher<O> {
    fn match_query(&self, query: &str) -> Result<Vec<String>, MatchError> {
        validate_query(query)?;
        let primary = self
            .oracle
            .lookup_phonetic(query, PhoneticCodec::DMetaphonePrimary)
            .map_err(MatchError::Oracle)?;
        let alternate = self
            .oracle
            .lookup_phonetic(query, PhoneticCodec::DMetaphoneAlternate)
            .map_err(MatchError::Oracle)?;
        Ok(dedup_preserve_order(primary.into_iter().chain(alternate)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::memory::MemoryOracle;

    #[test]
    fn soundex_matcher_groups_similar_sounding_names() {
        // S5: L = {"Robert","Rupert","Rubin"}, Q = "Robert" (soundex R163).
        let oracle = Arc::new(MemoryOracle::from_iter(["Robert", "Rupert", "Rubin"]));
        let matcher = SoundexMatcher::new(oracle);
        let mut results = matcher.match_query("Robert").unwrap();
        results.sort();
        assert_eq!(results, vec!["Robert".to_string(), "Rupert".to_string()]);
    }

    #[test]
    fn double_metaphone_matcher_unions_primary_and_alternate() {
        let oracle = Arc::new(MemoryOracle::from_iter(["Smith", "Schmidt"]));
        let matcher = DoubleMetaphoneMatcher::new(oracle);
        let results = matcher.match_query("Smith").unwrap();
        assert!(results.contains(&"Smith".to_string()));
    }

    #[test]
    fn rejects_empty_query() {
        let oracle = Arc::new(MemoryOracle::new());
        let matcher = SoundexMatcher::new(oracle);
        assert!(matcher.match_query("").is_err());
    }
}
