//! Damerau-Levenshtein (neighborhood) matching (`spec.md` §4.E).

use crate::alphabet::Alphabet;
use crate::error::MatchError;
use crate::matchers::ApproxMatcher;
use crate::neighborhood::{generate_full, generate_k1_partial_wildcard, generate_k1_wildcard};
use crate::oracle::{LexiconOracle, WildcardPattern};
use std::sync::Arc;

/// Which neighborhood strategy a [`DlMatcher`] uses. A sum type rather than
/// a rebindable `match` function, per Design Note N3.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DlMode {
    /// Exact SQL-style matching against the full k-neighborhood. Supports
    /// any `k >= 1`.
    Full,
    /// Reduced wildcard neighborhood with pattern matching. Only
    /// available for `k = 1`.
    Wildcard { partial: bool },
}

pub struct DlMatcher<O: LexiconOracle> {
    oracle: Arc<O>,
    k: u32,
    mode: DlMode,
    alphabet: Alphabet,
}

impl<O: LexiconOracle> DlMatcher<O> {
    /// Constructs a full-neighborhood matcher at the given `k` (default 1
    /// via [`DlMatcher::full`]).
    pub fn new(oracle: Arc<O>, k: u32, mode: DlMode, alphabet: Alphabet) -> Result<Self, MatchError> {
        if matches!(mode, DlMode::Wildcard { .. }) && k != 1 {
            return Err(MatchError::invalid_config(
                "wildcard D-L matching only supports k = 1",
            ));
        }
        if alphabet.is_empty() {
            return Err(MatchError::invalid_config("alphabet must not be empty"));
        }
        Ok(DlMatcher {
            oracle,
            k,
            mode,
            alphabet,
        })
    }

    pub fn full(oracle: Arc<O>, k: u32) -> Result<Self, MatchError> {
        Self::new(oracle, k, DlMode::Full, Alphabet::default_lowercase())
    }

    pub fn wildcard(oracle: Arc<O>, partial: bool) -> Result<Self, MatchError> {
        Self::new(oracle, 1, DlMode::Wildcard { partial }, Alphabet::default_lowercase())
    }

    pub fn k(&self) -> u32 {
        self.k
    }

    pub fn mode(&self) -> DlMode {
        self.mode
    }
}

impl<O: LexiconOracle> ApproxMatcher for DlMatcher<O> {
    fn match_query(&self, query: &str) -> Result<Vec<String>, MatchError> {
        match self.mode {
            DlMode::Full => {
                let neighborhood = generate_full(query, self.k, &self.alphabet)?;
                let found = self
                    .oracle
                    .lookup_set(&neighborhood)
                    .map_err(MatchError::Oracle)?;
                Ok(found.into_iter().collect())
            }
            DlMode::Wildcard { partial } => {
                let (exact, wc) = if partial {
                    generate_k1_partial_wildcard(query, &self.alphabet)?
                } else {
                    generate_k1_wildcard(query, &self.alphabet)?
                };

                let mut found: Vec<String> = self
                    .oracle
                    .lookup_set(&exact)
                    .map_err(MatchError::Oracle)?
                    .into_iter()
                    .collect();

                let patterns: Vec<WildcardPattern> =
                    wc.into_iter().map(WildcardPattern).collect();
                let wc_found = self
                    .oracle
                    .lookup_patterns(&patterns)
                    .map_err(MatchError::Oracle)?;

                for s in wc_found {
                    if !found.contains(&s) {
                        found.push(s);
                    }
                }
                Ok(found)
            }
        }
    }
}
