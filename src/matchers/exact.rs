//! Exact matching (`spec.md` §4.C): `match(Q) = { s ∈ L : s = Q }`.

use crate::error::MatchError;
use crate::matchers::ApproxMatcher;
use crate::oracle::LexiconOracle;
use crate::query::validate_query;
use std::sync::Arc;

pub struct ExactMatcher<O: LexiconOracle> {
    oracle: Arc<O>,
}

impl<O: LexiconOracle> ExactMatcher<O> {
    pub fn new(oracle: Arc<O>) -> Self {
        ExactMatcher { oracle }
    }
}

impl<O: LexiconOracle> ApproxMatcher for ExactMatcher<O> {
    fn match_query(&self, query: &str) -> Result<Vec<String>, MatchError> {
        validate_query(query)?;
        let found = self
            .oracle
            .lookup_set(std::slice::from_ref(&query.to_string()))
            .map_err(MatchError::Oracle)?;
        Ok(found.into_iter().collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::memory::MemoryOracle;

    #[test]
    fn matches_only_exact_member() {
        // S1: L = {"Tyto","Tytoalba","Strix"}, Q = "Tyto" -> ["Tyto"].
        let oracle = Arc::new(MemoryOracle::from_iter(["Tyto", "Tytoalba", "Strix"]));
        let matcher = ExactMatcher::new(oracle);
        assert_eq!(matcher.match_query("Tyto").unwrap(), vec!["Tyto".to_string()]);
    }

    #[test]
    fn round_trip_property() {
        // P8: ExactMatcher.match(Q) returns {Q} iff Q in L, else {}.
        let oracle = Arc::new(MemoryOracle::from_iter(["Tyto"]));
        let matcher = ExactMatcher::new(oracle);
        assert_eq!(matcher.match_query("Tyto").unwrap(), vec!["Tyto".to_string()]);
        assert!(matcher.match_query("Strix").unwrap().is_empty());
    }

    #[test]
    fn rejects_empty_query() {
        let oracle = Arc::new(MemoryOracle::new());
        let matcher = ExactMatcher::new(oracle);
        assert!(matcher.match_query("").is_err());
    }
}
