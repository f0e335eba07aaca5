use once_cell::sync::Lazy;

/// The ordered set of characters the neighborhood generator enumerates over
/// for insertions and substitutions (`spec.md` §3, "Alphabet").
///
/// Order matters: `spec.md` §4.B fixes the enumeration order of generated
/// neighbors ("for each c in alphabet order...") so that tests can assert
/// enumeration faithfully (§4.B, P1/P4). An `Alphabet` is just the ordered
/// character list plus that invariant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Alphabet {
    chars: Vec<char>,
}

/// The default 26 lowercase ASCII letters, in `a..=z` order.
pub static LOWERCASE_ASCII: Lazy<Alphabet> =
    Lazy::new(|| Alphabet::new(('a'..='z').collect::<Vec<_>>()).expect("static alphabet is valid"));

impl Alphabet {
    /// Builds a custom alphabet. Returns `None` for an empty input — callers
    /// map that to `MatchError::InvalidConfig` (`spec.md` §7: "empty
    /// alphabet" is a config error).
    pub fn new(chars: Vec<char>) -> Option<Self> {
        if chars.is_empty() {
            None
        } else {
            Some(Alphabet { chars })
        }
    }

    pub fn default_lowercase() -> Self {
        LOWERCASE_ASCII.clone()
    }

    pub fn chars(&self) -> &[char] {
        &self.chars
    }

    pub fn len(&self) -> usize {
        self.chars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.chars.is_empty()
    }
}

impl Default for Alphabet {
    fn default() -> Self {
        Self::default_lowercase()
    }
}
