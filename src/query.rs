use crate::error::MatchError;

/// The wildcard token reserved by the engine (`spec.md` §3, §6).
pub const WILDCARD_TOKEN: char = '_';

/// Validates a raw query string before any neighborhood generation or
/// oracle call, per `spec.md` §7: "Neighborhood-generation errors are
/// raised before any oracle call."
///
/// Design Note N4 leaves undefined whether queries containing the wildcard
/// token are rejected or escape-encoded; this engine takes option (a) and
/// rejects them, since the domain (scientific genus names) never contains
/// `_` and silently producing undefined wildcard-pattern results would be
/// worse than a clear config error.
pub fn validate_query(q: &str) -> Result<(), MatchError> {
    if q.is_empty() {
        return Err(MatchError::EmptyQuery);
    }
    if q.contains(WILDCARD_TOKEN) {
        return Err(MatchError::invalid_config(format!(
            "query {q:?} contains the reserved wildcard token '{WILDCARD_TOKEN}'"
        )));
    }
    Ok(())
}

/// Uppercases the first character of `s`, leaving the rest untouched
/// (`spec.md` I5: "emitted neighborhood members are lowercase except
/// position 0 which is uppercased").
pub fn capitalize_first(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_empty_query() {
        assert!(matches!(validate_query(""), Err(MatchError::EmptyQuery)));
    }

    #[test]
    fn rejects_wildcard_token() {
        assert!(matches!(
            validate_query("an_as"),
            Err(MatchError::InvalidConfig(_))
        ));
    }

    #[test]
    fn accepts_ordinary_query() {
        assert!(validate_query("Anas").is_ok());
    }

    #[test]
    fn capitalizes_only_first_char() {
        assert_eq!(capitalize_first("anas"), "Anas");
        assert_eq!(capitalize_first("a"), "A");
        assert_eq!(capitalize_first(""), "");
    }
}
