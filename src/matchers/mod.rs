//! Concrete matcher implementations (`spec.md` §4.C–§4.G).
//!
//! Each matcher implements [`ApproxMatcher`], a trait rather than a
//! rebindable function pointer: Design Note N3 explicitly calls for
//! "a sum type over matcher variants or a thin dispatch on mode" instead of
//! the original's `self.match = self._matchFullNhood` style rebinding, with
//! behavior observable only through the result of `match`. `DlMatcher`
//! follows this with an internal `DlMode` enum matched over at call time;
//! the factory (`src/factory.rs`) returns `Box<dyn ApproxMatcher>` so
//! callers hold one uniform handle regardless of which concrete matcher
//! they built.

pub mod dl;
pub mod exact;
pub mod hybrid;
pub mod phonetic;
pub mod qgram;

use crate::error::MatchError;

/// Implemented by every concrete matcher. `match_query` is synchronous
/// end-to-end (`spec.md` §5: "each `match` call is synchronous
/// end-to-end"); the returned `Vec<String>` contains each matched lexicon
/// entry at most once (`spec.md` §6).
pub trait ApproxMatcher {
    fn match_query(&self, query: &str) -> Result<Vec<String>, MatchError>;
}

/// Deduplicates `items` while preserving first-occurrence order. Used by
/// the hybrid matcher's union step (`spec.md` §4.G, Design Note N7) where
/// union order is an observable part of the contract.
pub(crate) fn dedup_preserve_order(items: impl IntoIterator<Item = String>) -> Vec<String> {
    let mut seen = rustc_hash::FxHashSet::default();
    let mut out = Vec::new();
    for item in items {
        if seen.insert(item.clone()) {
            out.push(item);
        }
    }
    out
}
