//! Matcher Factory / Configuration (`spec.md` §4.H, §6).
//!
//! A single entry point constructs any matcher from a string tag plus
//! parameters, uniformly returning `Box<dyn ApproxMatcher>` so callers hold
//! one handle type regardless of which concrete matcher was built. `table`
//! and `column` are accepted per `spec.md` §6 as opaque identifiers the
//! oracle routes internally; this crate's oracles are not table/column
//! addressed (see `src/memory.rs`), so they are recorded on the config for
//! oracle implementations that care, but otherwise unused here.

use crate::alphabet::Alphabet;
use crate::error::MatchError;
use crate::matchers::dl::{DlMatcher, DlMode};
use crate::matchers::exact::ExactMatcher;
use crate::matchers::hybrid::{HybridMatcher, DEFAULT_LOWER_LEN, DEFAULT_UPPER_LEN};
use crate::matchers::phonetic::{DoubleMetaphoneMatcher, SoundexMatcher};
use crate::matchers::qgram::{QgramMatcher, DEFAULT_CUTOFF};
use crate::matchers::ApproxMatcher;
use crate::oracle::LexiconOracle;
use std::sync::Arc;

/// Opaque store-routing identifiers a real oracle implementation may use to
/// select a table/column; unused by the in-memory reference oracle.
#[derive(Debug, Clone)]
pub struct TableBinding {
    pub table: String,
    pub column: String,
}

impl TableBinding {
    pub fn new(table: impl Into<String>, column: impl Into<String>) -> Result<Self, MatchError> {
        let table = table.into();
        let column = column.into();
        if table.is_empty() || column.is_empty() {
            return Err(MatchError::invalid_config(
                "table and column bindings must not be empty",
            ));
        }
        Ok(TableBinding { table, column })
    }
}

/// Per-tag construction parameters (`spec.md` §6's options table).
#[derive(Debug, Clone)]
pub enum MatcherConfig {
    Exact,
    Qgram {
        cutoff: f64,
    },
    Neighbor {
        k: u32,
        alphabet: Alphabet,
    },
    WcNeighbor {
        partial: bool,
        alphabet: Alphabet,
    },
    Soundex,
    DMetaphone,
    Hybrid {
        lowerlen: usize,
        upperlen: usize,
        qcutoff: f64,
    },
}

impl MatcherConfig {
    pub fn qgram_default() -> Self {
        MatcherConfig::Qgram { cutoff: DEFAULT_CUTOFF }
    }

    pub fn neighbor_default() -> Self {
        MatcherConfig::Neighbor {
            k: 1,
            alphabet: Alphabet::default_lowercase(),
        }
    }

    pub fn wcneighbor_default() -> Self {
        MatcherConfig::WcNeighbor {
            partial: false,
            alphabet: Alphabet::default_lowercase(),
        }
    }

    pub fn hybrid_default() -> Self {
        MatcherConfig::Hybrid {
            lowerlen: DEFAULT_LOWER_LEN,
            upperlen: DEFAULT_UPPER_LEN,
            qcutoff: DEFAULT_CUTOFF,
        }
    }
}

/// Builds a matcher for `tag` against `oracle`, per `spec.md` §4.H: "a
/// single factory constructs any matcher by a string tag ... Unknown tags
/// fail with an InvalidConfig error."
pub fn build_matcher<O>(
    tag: &str,
    oracle: Arc<O>,
    binding: TableBinding,
    config: MatcherConfig,
) -> Result<Box<dyn ApproxMatcher>, MatchError>
where
    O: LexiconOracle + 'static,
{
    let _ = binding;

    match (tag, config) {
        ("exact", MatcherConfig::Exact) => Ok(Box::new(ExactMatcher::new(oracle))),

        ("qgram", MatcherConfig::Qgram { cutoff }) => {
            Ok(Box::new(QgramMatcher::new(oracle, cutoff)?))
        }

        ("neighbor", MatcherConfig::Neighbor { k, alphabet }) => {
            Ok(Box::new(DlMatcher::new(oracle, k, DlMode::Full, alphabet)?))
        }

        ("wcneighbor", MatcherConfig::WcNeighbor { partial, alphabet }) => Ok(Box::new(
            DlMatcher::new(oracle, 1, DlMode::Wildcard { partial }, alphabet)?,
        )),

        ("soundex", MatcherConfig::Soundex) => Ok(Box::new(SoundexMatcher::new(oracle))),

        ("dmetaphone", MatcherConfig::DMetaphone) => {
            Ok(Box::new(DoubleMetaphoneMatcher::new(oracle)))
        }

        ("hybrid", MatcherConfig::Hybrid { lowerlen, upperlen, qcutoff }) => Ok(Box::new(
            HybridMatcher::new(oracle, lowerlen, upperlen, qcutoff)?,
        )),

        (other, _) if !KNOWN_TAGS.contains(&other) => Err(MatchError::invalid_config(format!(
            "unknown matcher tag {other:?}"
        ))),

        (tag, _) => Err(MatchError::invalid_config(format!(
            "configuration does not match tag {tag:?}"
        ))),
    }
}

const KNOWN_TAGS: &[&str] = &[
    "exact",
    "qgram",
    "neighbor",
    "wcneighbor",
    "dmetaphone",
    "soundex",
    "hybrid",
];
