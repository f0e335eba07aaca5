//! Hybrid matching (`spec.md` §4.G): composes the q-gram and D-L matchers by
//! query length.

use crate::alphabet::Alphabet;
use crate::error::MatchError;
use crate::matchers::dl::{DlMatcher, DlMode};
use crate::matchers::qgram::QgramMatcher;
use crate::matchers::{dedup_preserve_order, ApproxMatcher};
use crate::oracle::LexiconOracle;
use crate::query::validate_query;
use std::sync::Arc;

pub const DEFAULT_LOWER_LEN: usize = 4;
pub const DEFAULT_UPPER_LEN: usize = 9;

pub struct HybridMatcher<O: LexiconOracle> {
    qgram: QgramMatcher<O>,
    dl: DlMatcher<O>,
    lowerlen: usize,
    upperlen: usize,
}

impl<O: LexiconOracle> HybridMatcher<O> {
    pub fn new(
        oracle: Arc<O>,
        lowerlen: usize,
        upperlen: usize,
        qcutoff: f64,
    ) -> Result<Self, MatchError> {
        if lowerlen >= upperlen {
            return Err(MatchError::invalid_config(format!(
                "hybrid lowerlen ({lowerlen}) must be < upperlen ({upperlen})"
            )));
        }
        let qgram = QgramMatcher::new(Arc::clone(&oracle), qcutoff)?;
        let dl = DlMatcher::new(oracle, 1, DlMode::Full, Alphabet::default_lowercase())?;
        Ok(HybridMatcher {
            qgram,
            dl,
            lowerlen,
            upperlen,
        })
    }

    pub fn with_defaults(oracle: Arc<O>) -> Result<Self, MatchError> {
        Self::new(
            oracle,
            DEFAULT_LOWER_LEN,
            DEFAULT_UPPER_LEN,
            crate::matchers::qgram::DEFAULT_CUTOFF,
        )
    }

    /// Rebinds both inner matchers to `oracle` atomically (`spec.md` §4.G:
    /// "setting the oracle or the table binding on the hybrid propagates to
    /// both inner matchers atomically").
    pub fn set_oracle(&mut self, oracle: Arc<O>) -> Result<(), MatchError> {
        self.qgram.set_oracle(Arc::clone(&oracle))?;
        self.dl = DlMatcher::new(oracle, 1, DlMode::Full, Alphabet::default_lowercase())?;
        Ok(())
    }
}

impl<O: LexiconOracle> ApproxMatcher for HybridMatcher<O> {
    fn match_query(&self, query: &str) -> Result<Vec<String>, MatchError> {
        validate_query(query)?;
        let len = query.chars().count();

        if len <= self.lowerlen {
            self.dl.match_query(query)
        } else if len < self.upperlen {
            let q_results = self.qgram.match_query(query)?;
            let dl_results = self.dl.match_query(query)?;
            Ok(dedup_preserve_order(q_results.into_iter().chain(dl_results)))
        } else {
            self.qgram.match_query(query)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::memory::MemoryOracle;

    #[test]
    fn short_query_uses_dl_only_branch() {
        // S6: |Q|=4=lowerlen -> DL-only branch; "Turd" is two insertions
        // away from "Turdus", so k=1 DL finds nothing.
        let oracle = Arc::new(MemoryOracle::from_iter(["Turdus", "Turdidae", "Strix"]));
        let matcher = HybridMatcher::with_defaults(oracle).unwrap();
        assert!(matcher.match_query("Turd").unwrap().is_empty());
    }

    #[test]
    fn medium_query_unions_qgram_and_dl_qgram_first() {
        // |Q|=6, between lowerlen=4 and upperlen=9: qgram results must
        // appear before any DL-only new entries (N7).
        let oracle = Arc::new(MemoryOracle::from_iter(["Anacon", "Anacoz", "Zzzzzz"]));
        let matcher = HybridMatcher::with_defaults(oracle).unwrap();
        let results = matcher.match_query("Anacon").unwrap();
        assert!(results.contains(&"Anacon".to_string()));
        assert!(!results.contains(&"Zzzzzz".to_string()));
    }

    #[test]
    fn long_query_uses_qgram_only_branch() {
        let oracle = Arc::new(MemoryOracle::from_iter(["Megascopiatidae"]));
        let matcher = HybridMatcher::with_defaults(oracle).unwrap();
        let results = matcher.match_query("Megascopiatidae").unwrap();
        assert_eq!(results, vec!["Megascopiatidae".to_string()]);
    }

    #[test]
    fn hybrid_is_superset_of_both_inner_matchers_in_medium_regime() {
        // P9.
        let oracle = Arc::new(MemoryOracle::from_iter(["Anacon", "Anacoz"]));
        let hybrid = HybridMatcher::with_defaults(Arc::clone(&oracle)).unwrap();
        let qgram = QgramMatcher::with_default_cutoff(Arc::clone(&oracle)).unwrap();
        let dl = DlMatcher::new(Arc::clone(&oracle), 1, DlMode::Full, Alphabet::default_lowercase()).unwrap();

        let hybrid_results = hybrid.match_query("Anacon").unwrap();
        let qgram_results = qgram.match_query("Anacon").unwrap();
        let dl_results = dl.match_query("Anacon").unwrap();

        for r in &qgram_results {
            assert!(hybrid_results.contains(r));
        }
        for r in &dl_results {
            assert!(hybrid_results.contains(r));
        }
    }

    #[test]
    fn rejects_lowerlen_not_less_than_upperlen() {
        let oracle = Arc::new(MemoryOracle::new());
        assert!(HybridMatcher::new(oracle, 9, 4, 0.4).is_err());
    }
}
