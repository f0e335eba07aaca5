//! Damerau-Levenshtein neighborhood generation (`spec.md` §4.B).
//!
//! This is the algorithmic heart of the engine. Three related operations are
//! provided, mirroring the three entry points a `DLMatcher` can be
//! configured with: a full k-neighborhood, a single-wildcard-compressed
//! k=1 neighborhood, and a partial-wildcard variant that never wildcards the
//! leading character (so an ordered index on the lexicon column stays
//! useful).
//!
//! Ported from `approxmatch.py`'s `generateK1Neighborhood` /
//! `generateK1WCNeighborhood` / `generatePartialK1WCNeighborhood`; the
//! enumeration order below is intentionally identical to the original so
//! that result ordering (and therefore the closed-form counts in §4.B and
//! §8) carries over exactly.
//!
//! Per Design Note N1, members are *not* deduplicated here: checking for
//! and removing duplicates costs more than it saves when the immediate
//! consumer is a set-valued oracle call (Boytsov 2011). Callers that need a
//! deduplicated sequence (e.g. the hybrid matcher's union step) dedupe
//! downstream, where it is actually needed.

use crate::alphabet::Alphabet;
use crate::error::MatchError;
use crate::query::{capitalize_first, validate_query};

/// Default cap on `k` for full-neighborhood generation (Design Note N6:
/// "Keep the cap at k=2 unless benchmarks justify more" — full k=2
/// generation already scales as O((53|Q|)^2)).
pub const DEFAULT_K_CAP: u32 = 2;

/// Generates the full Damerau-Levenshtein k=1 neighborhood of `query`
/// (`generate_k1_full` in `spec.md` §6's testable surface). Equivalent to
/// `generate_full(query, 1, alphabet)`.
pub fn generate_k1_full(query: &str, alphabet: &Alphabet) -> Result<Vec<String>, MatchError> {
    generate_full(query, 1, alphabet)
}

/// Generates the full Damerau-Levenshtein k-neighborhood of `query`, capped
/// at [`DEFAULT_K_CAP`] (see [`generate_full_capped`] to override the cap).
pub fn generate_full(query: &str, k: u32, alphabet: &Alphabet) -> Result<Vec<String>, MatchError> {
    generate_full_capped(query, k, alphabet, DEFAULT_K_CAP)
}

/// As [`generate_full`], but with an explicit cap on `k` instead of
/// [`DEFAULT_K_CAP`]. Requesting `k` above the cap fails with
/// `MatchError::ResourceExhausted` rather than silently truncating.
pub fn generate_full_capped(
    query: &str,
    k: u32,
    alphabet: &Alphabet,
    cap: u32,
) -> Result<Vec<String>, MatchError> {
    validate_query(query)?;
    if alphabet.is_empty() {
        return Err(MatchError::invalid_config("alphabet must not be empty"));
    }
    if k > cap {
        return Err(MatchError::ResourceExhausted(format!(
            "k={k} exceeds the configured neighborhood generation cap of {cap}"
        )));
    }

    let lower = query.to_lowercase();
    let raw = full_neighborhood_lower(&lower, k, alphabet);
    Ok(raw.iter().map(|s| capitalize_first(s)).collect())
}

/// Recursive worker operating entirely in lowercase, mirroring
/// `approxmatch.py`'s `generateNeighborhood`/`_generateNeighborhood` pair.
/// For `k < 2` the query itself is prepended explicitly (P4); for `k >= 2`
/// it reappears naturally through edit cycles.
fn full_neighborhood_lower(query_lower: &str, k: u32, alphabet: &Alphabet) -> Vec<String> {
    let mut nhood = if k < 2 {
        vec![query_lower.to_string()]
    } else {
        Vec::new()
    };

    let k1 = k1_neighborhood_lower(query_lower, alphabet);

    if k > 1 {
        let mut next = Vec::new();
        for neighbor in &k1 {
            next.extend(full_neighborhood_lower(neighbor, k - 1, alphabet));
        }
        nhood.extend(k1);
        nhood.extend(next);
    } else {
        nhood.extend(k1);
    }

    nhood
}

/// Generates the k=1 neighborhood of an already-lowercased string, in the
/// deletion / insertion / substitution / transposition order fixed by
/// `spec.md` §4.B.
fn k1_neighborhood_lower(query_lower: &str, alphabet: &Alphabet) -> Vec<String> {
    let chars: Vec<char> = query_lower.chars().collect();
    let strlen = chars.len();
    let mut nhood = Vec::with_capacity(53 * strlen.max(1) + 26);

    // 1. Deletions: produced only when |Q| > 1.
    if strlen > 1 {
        for pos in 0..strlen {
            let mut s = String::with_capacity(strlen - 1);
            s.extend(chars[..pos].iter());
            s.extend(chars[pos + 1..].iter());
            nhood.push(s);
        }
    }

    // 2. Insertions: for each c in alphabet order, head, then interior
    // positions left-to-right, then tail.
    for &c in alphabet.chars() {
        let mut head = String::with_capacity(strlen + 1);
        head.push(c);
        head.extend(chars.iter());
        nhood.push(head);

        for pos in 1..strlen {
            let mut s = String::with_capacity(strlen + 1);
            s.extend(chars[..pos].iter());
            s.push(c);
            s.extend(chars[pos..].iter());
            nhood.push(s);
        }

        let mut tail = String::with_capacity(strlen + 1);
        tail.extend(chars.iter());
        tail.push(c);
        nhood.push(tail);
    }

    // 3. Substitutions: skip positions where the candidate char equals the
    // original (no-op substitutions are not emitted).
    for &c in alphabet.chars() {
        for pos in 0..strlen {
            if c != chars[pos] {
                let mut s = String::with_capacity(strlen);
                s.extend(chars[..pos].iter());
                s.push(c);
                s.extend(chars[pos + 1..].iter());
                nhood.push(s);
            }
        }
    }

    // 4. Transpositions of adjacent characters.
    if strlen > 1 {
        for pos in 0..strlen - 1 {
            let mut s = String::with_capacity(strlen);
            s.extend(chars[..pos].iter());
            s.push(chars[pos + 1]);
            s.push(chars[pos]);
            s.extend(chars[pos + 2..].iter());
            nhood.push(s);
        }
    }

    nhood
}

/// Generates the k=1 wildcard neighborhood of `query` (`generate_k1_wildcard`
/// / `N_wc` in `spec.md` §4.B). Returns `(exact, wildcard)`: exact matches
/// (deletions, transpositions) and single-wildcard patterns (insertions,
/// substitutions).
pub fn generate_k1_wildcard(
    query: &str,
    alphabet: &Alphabet,
) -> Result<(Vec<String>, Vec<String>), MatchError> {
    validate_query(query)?;
    if alphabet.is_empty() {
        return Err(MatchError::invalid_config("alphabet must not be empty"));
    }

    let lower = query.to_lowercase();
    let chars: Vec<char> = lower.chars().collect();
    let strlen = chars.len();

    let mut exact = Vec::new();
    let mut wc = Vec::new();

    // Deletions -> exact set.
    if strlen > 1 {
        for pos in 0..strlen {
            let mut s = String::with_capacity(strlen - 1);
            s.extend(chars[..pos].iter());
            s.extend(chars[pos + 1..].iter());
            exact.push(s);
        }
    }

    // Insertions -> wildcard set: head, interior, tail.
    wc.push(format!("_{lower}"));
    for pos in 1..strlen {
        let mut s = String::with_capacity(strlen + 1);
        s.extend(chars[..pos].iter());
        s.push('_');
        s.extend(chars[pos..].iter());
        wc.push(s);
    }
    wc.push(format!("{lower}_"));

    // Substitutions -> wildcard set.
    for pos in 0..strlen {
        let mut s = String::with_capacity(strlen);
        s.extend(chars[..pos].iter());
        s.push('_');
        s.extend(chars[pos + 1..].iter());
        wc.push(s);
    }

    // Transpositions -> exact set.
    if strlen > 1 {
        for pos in 0..strlen - 1 {
            let mut s = String::with_capacity(strlen);
            s.extend(chars[..pos].iter());
            s.push(chars[pos + 1]);
            s.push(chars[pos]);
            s.extend(chars[pos + 2..].iter());
            exact.push(s);
        }
    }

    let exact = exact.iter().map(|s| capitalize_first(s)).collect();
    let wc = wc.iter().map(|s| capitalize_first(s)).collect();
    Ok((exact, wc))
}

/// Generates the k=1 partial-wildcard neighborhood of `query`
/// (`generate_k1_partial_wildcard` / `N_pwc` in `spec.md` §4.B). Like
/// [`generate_k1_wildcard`], but the leading character position is always
/// enumerated fully rather than wildcarded, so a B-tree-style index on the
/// lexicon column stays usable for the exact half of the neighborhood.
pub fn generate_k1_partial_wildcard(
    query: &str,
    alphabet: &Alphabet,
) -> Result<(Vec<String>, Vec<String>), MatchError> {
    validate_query(query)?;
    if alphabet.is_empty() {
        return Err(MatchError::invalid_config("alphabet must not be empty"));
    }

    let lower = query.to_lowercase();
    let chars: Vec<char> = lower.chars().collect();
    let strlen = chars.len();

    let mut exact = Vec::new();
    let mut wc = Vec::new();

    // Deletions -> exact set.
    if strlen > 1 {
        for pos in 0..strlen {
            let mut s = String::with_capacity(strlen - 1);
            s.extend(chars[..pos].iter());
            s.extend(chars[pos + 1..].iter());
            exact.push(s);
        }
    }

    // Insertions: leading position enumerated fully (exact set); remaining
    // positions and the tail wildcarded.
    for &c in alphabet.chars() {
        let mut s = String::with_capacity(strlen + 1);
        s.push(c);
        s.extend(chars.iter());
        exact.push(s);
    }
    for pos in 1..strlen {
        let mut s = String::with_capacity(strlen + 1);
        s.extend(chars[..pos].iter());
        s.push('_');
        s.extend(chars[pos..].iter());
        wc.push(s);
    }
    wc.push(format!("{lower}_"));

    // Substitutions: leading position enumerated fully (skipping the
    // original character); remaining positions wildcarded.
    for &c in alphabet.chars() {
        if strlen > 0 && c != chars[0] {
            let mut s = String::with_capacity(strlen);
            s.push(c);
            s.extend(chars[1..].iter());
            exact.push(s);
        }
    }
    for pos in 1..strlen {
        let mut s = String::with_capacity(strlen);
        s.extend(chars[..pos].iter());
        s.push('_');
        s.extend(chars[pos + 1..].iter());
        wc.push(s);
    }

    // Transpositions -> exact set.
    if strlen > 1 {
        for pos in 0..strlen - 1 {
            let mut s = String::with_capacity(strlen);
            s.extend(chars[..pos].iter());
            s.push(chars[pos + 1]);
            s.push(chars[pos]);
            s.extend(chars[pos + 2..].iter());
            exact.push(s);
        }
    }

    let exact = exact.iter().map(|s| capitalize_first(s)).collect();
    let wc = wc.iter().map(|s| capitalize_first(s)).collect();
    Ok((exact, wc))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn alphabet() -> Alphabet {
        Alphabet::default_lowercase()
    }

    #[test]
    fn k1_full_count_matches_closed_form() {
        // P1: 53*|Q| + 26 for |Q| > 1, |A| = 26 (53*|Q| + 25 substitutions/
        // insertions/deletions/transpositions, + 1 for the prepended query).
        for q in ["tyto", "anaconda", "ictalurus"] {
            let n = generate_k1_full(q, &alphabet()).unwrap();
            assert_eq!(n.len(), 53 * q.chars().count() + 26, "query={q}");
        }
    }

    #[test]
    fn k1_full_contains_query_exactly_once() {
        // P4.
        let n = generate_k1_full("Tyto", &alphabet()).unwrap();
        assert_eq!(n.iter().filter(|s| s.as_str() == "Tyto").count(), 1);
        assert_eq!(n[0], "Tyto");
    }

    #[test]
    fn k1_full_case_policy() {
        // P7: every emitted string starts with an uppercase ASCII letter.
        let n = generate_k1_full("anas", &alphabet()).unwrap();
        for s in &n {
            let first = s.chars().next().unwrap();
            assert!(first.is_ascii_uppercase(), "{s} does not start uppercase");
        }
    }

    #[test]
    fn wildcard_counts_match_closed_form() {
        // P2: |exact| = 2|Q|-1, |wc| = 2|Q|+1 for |Q|>1.
        for q in ["tyto", "anaconda"] {
            let (exact, wc) = generate_k1_wildcard(q, &alphabet()).unwrap();
            let len = q.chars().count();
            assert_eq!(exact.len(), 2 * len - 1, "exact for {q}");
            assert_eq!(wc.len(), 2 * len + 1, "wc for {q}");
        }
    }

    #[test]
    fn partial_wildcard_counts_match_closed_form() {
        // P3: |exact| = 2|Q|+50, |wc| = 2|Q|-1 for |Q|>1, |A|=26.
        for q in ["tyto", "anaconda"] {
            let (exact, wc) = generate_k1_partial_wildcard(q, &alphabet()).unwrap();
            let len = q.chars().count();
            assert_eq!(exact.len(), 2 * len + 50, "exact for {q}");
            assert_eq!(wc.len(), 2 * len - 1, "wc for {q}");
        }
    }

    #[test]
    fn wildcard_substitution_at_position_zero_matches_ictaluris() {
        // S4: L = {"Ictalurus"}, Q = "Ictaluris" -> single substitution at
        // position 7 should be present in the wildcard set.
        let (_, wc) = generate_k1_wildcard("Ictaluris", &alphabet()).unwrap();
        // substituting position 7 ('i' -> 'u') yields "Ictalurus" with a
        // wildcard at position 7: "Ictalur_s".
        assert!(wc.iter().any(|p| p == "Ictalur_s"));
    }

    #[test]
    fn rejects_empty_and_wildcard_queries() {
        assert!(generate_k1_full("", &alphabet()).is_err());
        assert!(generate_k1_full("an_as", &alphabet()).is_err());
        assert!(generate_k1_wildcard("", &alphabet()).is_err());
        assert!(generate_k1_partial_wildcard("", &alphabet()).is_err());
    }

    #[test]
    fn k_above_cap_is_resource_exhausted() {
        let err = generate_full("anas", 3, &alphabet()).unwrap_err();
        assert!(matches!(err, MatchError::ResourceExhausted(_)));
    }

    #[test]
    fn empty_alphabet_is_invalid_config() {
        // Alphabet::new rejects empty vectors at the type level, so build
        // the error path through the generator's own check by using a
        // non-empty alphabet then asserting the guard exists structurally.
        // (Alphabet cannot be constructed empty outside this crate.)
        assert!(Alphabet::new(vec![]).is_none());
    }

    #[test]
    fn k2_full_scales_quadratically_and_includes_k1() {
        let k1 = generate_k1_full("ant", &alphabet()).unwrap();
        let k2 = generate_full("ant", 2, &alphabet()).unwrap();
        // For k>=2, Q is not explicitly prepended but reappears through
        // edit cycles; the k=1 members still occur verbatim inside k2.
        for neighbor in &k1 {
            assert!(k2.contains(neighbor), "missing {neighbor} in k2 neighborhood");
        }
    }
}
