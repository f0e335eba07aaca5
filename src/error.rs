use std::error::Error as StdError;
use std::fmt;

/// A boxed oracle-side error, opaque to the engine.
///
/// `LexiconOracle` implementations report failures (transport, auth, schema
/// faults) through this type; the engine never inspects or downcasts it, it
/// only propagates (see `spec.md` §7).
pub type OracleBoxError = Box<dyn StdError + Send + Sync + 'static>;

/// Errors the matching engine can report.
///
/// Mirrors `spec.md` §7 exactly: `InvalidConfig`, `EmptyQuery`, `Oracle`,
/// `ResourceExhausted`. Construction-time failures and neighborhood
/// generation failures both surface as `InvalidConfig`/`ResourceExhausted`
/// and are always raised before any oracle call is issued.
#[derive(thiserror::Error, Debug)]
pub enum MatchError {
    /// An unknown matcher tag, an out-of-range parameter, or an
    /// incompatible mode/parameter combination (e.g. wildcard D-L matching
    /// requested with k > 1).
    #[error("invalid matcher configuration: {0}")]
    InvalidConfig(String),

    /// `match("")` was called. Returned as an explicit error rather than
    /// silently producing an empty result set.
    #[error("query string must not be empty")]
    EmptyQuery,

    /// The lexicon oracle reported a failure; propagated unchanged.
    #[error("lexicon oracle error: {0}")]
    Oracle(#[source] OracleBoxError),

    /// Neighborhood generation was asked to exceed its configured cap.
    #[error("neighborhood generation refused: {0}")]
    ResourceExhausted(String),
}

impl MatchError {
    pub fn oracle<E>(err: E) -> Self
    where
        E: StdError + Send + Sync + 'static,
    {
        MatchError::Oracle(Box::new(err))
    }

    pub fn invalid_config(msg: impl Into<String>) -> Self {
        MatchError::InvalidConfig(msg.into())
    }
}

/// A minimal string-only error for the in-memory oracle, which has no real
/// transport to fail. Kept distinct from `MatchError` so oracle
/// implementations stay decoupled from the engine's error type, per the
/// `LexiconOracle` contract in `spec.md` §4.A.
#[derive(Debug, Clone)]
pub struct OracleError(pub String);

impl fmt::Display for OracleError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl StdError for OracleError {}
