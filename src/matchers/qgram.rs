//! Q-gram (trigram) matching (`spec.md` §4.D).

use crate::error::MatchError;
use crate::matchers::ApproxMatcher;
use crate::oracle::LexiconOracle;
use crate::query::validate_query;
use log::debug;
use std::sync::Arc;

/// Default similarity cutoff, carried over from `approxmatch.py`'s
/// `QgramMatcher.__init__` (`self.simcutoff = 0.4`).
pub const DEFAULT_CUTOFF: f64 = 0.4;

pub struct QgramMatcher<O: LexiconOracle> {
    oracle: Arc<O>,
    cutoff: f64,
}

impl<O: LexiconOracle> QgramMatcher<O> {
    pub fn new(oracle: Arc<O>, cutoff: f64) -> Result<Self, MatchError> {
        if !(0.0..=1.0).contains(&cutoff) {
            return Err(MatchError::invalid_config(format!(
                "q-gram cutoff {cutoff} is outside [0, 1]"
            )));
        }
        let matcher = QgramMatcher { oracle, cutoff };
        matcher.apply_cutoff()?;
        Ok(matcher)
    }

    pub fn with_default_cutoff(oracle: Arc<O>) -> Result<Self, MatchError> {
        Self::new(oracle, DEFAULT_CUTOFF)
    }

    pub fn cutoff(&self) -> f64 {
        self.cutoff
    }

    /// Re-binds the matcher to a new oracle handle, re-applying the
    /// current cutoff (Design Note N2: the oracle's similarity-limit
    /// register is per-handle mutable state, so rebinding must reapply it).
    pub fn set_oracle(&mut self, oracle: Arc<O>) -> Result<(), MatchError> {
        self.oracle = oracle;
        self.apply_cutoff()
    }

    fn apply_cutoff(&self) -> Result<(), MatchError> {
        debug!("qgram matcher: setting oracle trigram limit to {}", self.cutoff);
        self.oracle
            .set_trigram_limit(self.cutoff)
            .map_err(MatchError::Oracle)
    }
}

impl<O: LexiconOracle> ApproxMatcher for QgramMatcher<O> {
    fn match_query(&self, query: &str) -> Result<Vec<String>, MatchError> {
        validate_query(query)?;
        self.apply_cutoff()?;
        let scored = self.oracle.lookup_trigram(query).map_err(MatchError::Oracle)?;
        Ok(scored.into_iter().map(|m| m.value).collect())
    }
}

impl<O: LexiconOracle> QgramMatcher<O> {
    /// Returns matches with their trigram scores, per the "open question" in
    /// Design Note §9: "An implementation may expose a richer `match_scored`
    /// returning `(string, score)` for q-gram, provided plain `match`
    /// remains projection-equivalent."
    pub fn match_scored(
        &self,
        query: &str,
    ) -> Result<Vec<crate::oracle::ScoredMatch>, MatchError> {
        validate_query(query)?;
        self.apply_cutoff()?;
        self.oracle.lookup_trigram(query).map_err(MatchError::Oracle)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::memory::MemoryOracle;

    #[test]
    fn cutoff_excludes_dissimilar_candidates() {
        // S3: L = {"Anas","Anis","Anaconda"}, Q = "Anas". Under this oracle's
        // pg_trgm-style trigram counting, similarity("Anas","Anis") = 0.25
        // and similarity("Anas","Anaconda") ~= 0.27, so at the default
        // cutoff (0.4) only the exact match clears the bar; "Anis" needs a
        // lower cutoff to be pulled in, and any cutoff low enough for that
        // also admits "Anaconda" (0.27 > 0.25).
        let oracle = Arc::new(MemoryOracle::from_iter(["Anas", "Anis", "Anaconda"]));

        let matcher = QgramMatcher::with_default_cutoff(Arc::clone(&oracle)).unwrap();
        let results = matcher.match_query("Anas").unwrap();
        assert!(results.contains(&"Anas".to_string()));
        assert!(!results.contains(&"Anis".to_string()));
        assert!(!results.contains(&"Anaconda".to_string()));

        let loose = QgramMatcher::new(oracle, 0.25).unwrap();
        let loose_results = loose.match_query("Anas").unwrap();
        assert!(loose_results.contains(&"Anis".to_string()));
    }

    #[test]
    fn match_scored_is_projection_equivalent_to_match() {
        let oracle = Arc::new(MemoryOracle::from_iter(["Anas", "Anis", "Anaconda"]));
        let matcher = QgramMatcher::with_default_cutoff(oracle).unwrap();
        let plain = matcher.match_query("Anas").unwrap();
        let scored = matcher.match_scored("Anas").unwrap();
        let scored_values: Vec<String> = scored.into_iter().map(|m| m.value).collect();
        let mut plain_sorted = plain.clone();
        let mut scored_sorted = scored_values.clone();
        plain_sorted.sort();
        scored_sorted.sort();
        assert_eq!(plain_sorted, scored_sorted);
    }

    #[test]
    fn rejects_cutoff_out_of_range() {
        let oracle = Arc::new(MemoryOracle::new());
        assert!(QgramMatcher::new(oracle, 1.5).is_err());
    }
}
