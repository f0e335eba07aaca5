//! Fuzzy matching of biological genus names against a curated lexicon.
//!
//! The engine is a set of composable matchers — exact, q-gram, Damerau-
//! Levenshtein neighborhood (full and wildcard), Soundex, Double
//! Metaphone, and a length-gated hybrid of q-gram and D-L — each built
//! against a [`LexiconOracle`] that abstracts away wherever the lexicon
//! itself actually lives. [`factory::build_matcher`] is the single
//! construction entry point; [`memory::MemoryOracle`] is a real, in-process
//! oracle implementation usable without any external store.

pub mod alphabet;
pub mod error;
pub mod factory;
pub mod matchers;
pub mod memory;
pub mod neighborhood;
pub mod oracle;
pub mod phonetic;
pub mod query;

pub use alphabet::Alphabet;
pub use error::{MatchError, OracleBoxError, OracleError};
pub use factory::{build_matcher, MatcherConfig, TableBinding};
pub use matchers::dl::{DlMatcher, DlMode};
pub use matchers::exact::ExactMatcher;
pub use matchers::hybrid::HybridMatcher;
pub use matchers::phonetic::{DoubleMetaphoneMatcher, SoundexMatcher};
pub use matchers::qgram::QgramMatcher;
pub use matchers::ApproxMatcher;
pub use memory::MemoryOracle;
pub use neighborhood::{
    generate_full, generate_full_capped, generate_k1_full, generate_k1_partial_wildcard,
    generate_k1_wildcard,
};
pub use oracle::{LexiconOracle, PhoneticCodec, ScoredMatch, WildcardPattern};
pub use phonetic::{double_metaphone, soundex, DoubleMetaphoneCode};
