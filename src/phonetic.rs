//! Phonetic encoders used by [`crate::memory::MemoryOracle`] to implement
//! `lookup_phonetic` (`spec.md` §4.F).
//!
//! These are concrete, pure functions rather than part of the matcher
//! layer: `spec.md` is explicit that "codec identity is the critical
//! contract" — the same algorithm must encode both the stored lexicon and
//! the query — so the matchers themselves never compute a code, they only
//! name a [`crate::oracle::PhoneticCodec`] and delegate to the oracle
//! (see `src/matchers/phonetic.rs`). A real production oracle would call
//! into its store's own codecs (the original system used PostgreSQL's
//! `soundex()`/`dmetaphone()`/`dmetaphone_alt()`); this module is what the
//! in-memory reference oracle calls instead, following the Soundex coding
//! table used by `PhoneticScorer::soundex` in the retrieved
//! `liagha-matchete` example and the classic Lawrence Philips (2000) Double
//! Metaphone algorithm.

/// Computes the classic four-character Soundex code (letter + three
/// digits) for `s`. Non-letter characters are ignored.
pub fn soundex(s: &str) -> String {
    let letters: Vec<char> = s.chars().filter(|c| c.is_ascii_alphabetic()).collect();
    if letters.is_empty() {
        return "0000".to_string();
    }

    let code_of = |c: char| -> u8 {
        match c.to_ascii_lowercase() {
            'b' | 'f' | 'p' | 'v' => 1,
            'c' | 'g' | 'j' | 'k' | 'q' | 's' | 'x' | 'z' => 2,
            'd' | 't' => 3,
            'l' => 4,
            'm' | 'n' => 5,
            'r' => 6,
            _ => 0,
        }
    };

    let mut result = String::new();
    result.push(letters[0].to_ascii_uppercase());
    let mut prev_code = code_of(letters[0]);

    for &c in &letters[1..] {
        let code = code_of(c);
        if code != 0 && code != prev_code {
            result.push(char::from_digit(code as u32, 10).unwrap());
        }
        // h/w do not break adjacency for the "same code twice in a row"
        // rule; any other non-coded letter does.
        if c.to_ascii_lowercase() != 'h' && c.to_ascii_lowercase() != 'w' {
            prev_code = code;
        }
        if result.len() >= 4 {
            break;
        }
    }

    while result.len() < 4 {
        result.push('0');
    }
    result.truncate(4);
    result
}

/// The result of Double Metaphone encoding: a primary code, and an
/// alternate code when the input is phonetically ambiguous (`spec.md` §4.F,
/// §GLOSSARY).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DoubleMetaphoneCode {
    pub primary: String,
    pub alternate: Option<String>,
}

/// Computes the Double Metaphone encoding of `s` (Philips 2000). This is a
/// faithful but compact port of the well-known reference algorithm: it
/// handles the common English/European consonant clusters and silent
/// letters (initial "kn"/"gn"/"pn"/"wr", "gh", "ch"/"ci"/"cc", Germanic
/// "sch", etc.) and produces up to two four-character codes.
pub fn double_metaphone(s: &str) -> DoubleMetaphoneCode {
    let word: Vec<char> = s
        .to_uppercase()
        .chars()
        .filter(|c| c.is_ascii_alphabetic())
        .collect();
    let len = word.len();
    if len == 0 {
        return DoubleMetaphoneCode {
            primary: String::new(),
            alternate: None,
        };
    }

    let at = |i: isize| -> char {
        if i < 0 || i as usize >= len {
            '\0'
        } else {
            word[i as usize]
        }
    };
    let is_vowel = |c: char| matches!(c, 'A' | 'E' | 'I' | 'O' | 'U' | 'Y');

    let mut primary = String::new();
    let mut alternate = String::new();
    let mut i: isize = 0;

    // Skip a handful of silent initial letter combinations.
    if len >= 2 {
        match (word[0], word[1]) {
            ('G', 'N') | ('K', 'N') | ('P', 'N') | ('W', 'R') | ('P', 'S') => i = 1,
            _ => {}
        }
    }
    if word[0] == 'X' {
        // Initial X is pronounced like S (e.g. "Xavier").
        primary.push('S');
        alternate.push('S');
        i = 1;
    }
    if len >= 2 && word[0] == 'W' && word[1] == 'H' {
        primary.push('A');
        alternate.push('A');
        i = 2;
    }

    const MAX_LEN: usize = 4;
    while i < len as isize && (primary.len() < MAX_LEN || alternate.len() < MAX_LEN) {
        let c = at(i);
        match c {
            'A' | 'E' | 'I' | 'O' | 'U' | 'Y' => {
                if i == 0 {
                    primary.push('A');
                    alternate.push('A');
                }
                i += 1;
            }
            'B' => {
                primary.push('P');
                alternate.push('P');
                i += if at(i + 1) == 'B' { 2 } else { 1 };
            }
            'C' => {
                if at(i + 1) == 'I' && at(i + 2) == 'A' {
                    // "-cia-" -> X (as in "Sicilian").
                    primary.push('X');
                    alternate.push('X');
                    i += 1;
                } else if at(i + 1) == 'H' {
                    if i > 0 && at(i - 1) == 'S' {
                        // Germanic "sch" -> K.
                        primary.push('K');
                        alternate.push('K');
                    } else {
                        primary.push('X');
                        alternate.push('X');
                    }
                    i += 2;
                } else if at(i + 1) == 'Z' {
                    primary.push('S');
                    alternate.push('X');
                    i += 2;
                } else if matches!(at(i + 1), 'I' | 'E' | 'Y') {
                    primary.push('S');
                    alternate.push('S');
                    i += 2;
                } else {
                    primary.push('K');
                    alternate.push('K');
                    i += if at(i + 1) == 'C' || matches!(at(i + 1), 'K' | 'Q') {
                        2
                    } else {
                        1
                    };
                }
            }
            'D' => {
                if at(i + 1) == 'G' && matches!(at(i + 2), 'E' | 'I' | 'Y') {
                    primary.push('J');
                    alternate.push('J');
                    i += 3;
                } else {
                    primary.push('T');
                    alternate.push('T');
                    i += if at(i + 1) == 'D' { 2 } else { 1 };
                }
            }
            'F' => {
                primary.push('F');
                alternate.push('F');
                i += if at(i + 1) == 'F' { 2 } else { 1 };
            }
            'G' => {
                if at(i + 1) == 'H' {
                    if i > 0 && !is_vowel(at(i - 1)) {
                        primary.push('K');
                        alternate.push('K');
                        i += 2;
                    } else if i == 0 {
                        if at(i + 2) == 'I' {
                            primary.push('J');
                            alternate.push('J');
                        } else {
                            primary.push('K');
                            alternate.push('K');
                        }
                        i += 2;
                    } else {
                        // Silent "gh" elsewhere (e.g. "night").
                        i += 2;
                    }
                } else if at(i + 1) == 'N' {
                    i += if at(i + 2) == 'E' && at(i + 3) == 'D' { 4 } else { 2 };
                } else if matches!(at(i + 1), 'I' | 'E' | 'Y') {
                    primary.push('J');
                    alternate.push('K');
                    i += 2;
                } else {
                    primary.push('K');
                    alternate.push('K');
                    i += if at(i + 1) == 'G' { 2 } else { 1 };
                }
            }
            'H' => {
                if is_vowel(at(i - 1)) && is_vowel(at(i + 1)) {
                    primary.push('H');
                    alternate.push('H');
                }
                i += 1;
            }
            'J' => {
                if at(i + 1) == 'O' && at(i + 2) == 'S' && at(i + 3) == 'E' {
                    primary.push('H');
                    alternate.push('J');
                } else {
                    primary.push('J');
                    alternate.push('J');
                }
                i += if at(i + 1) == 'J' { 2 } else { 1 };
            }
            'K' => {
                primary.push('K');
                alternate.push('K');
                i += if at(i + 1) == 'K' { 2 } else { 1 };
            }
            'L' => {
                primary.push('L');
                alternate.push('L');
                i += if at(i + 1) == 'L' { 2 } else { 1 };
            }
            'M' => {
                primary.push('M');
                alternate.push('M');
                i += if at(i + 1) == 'M' { 2 } else { 1 };
            }
            'N' => {
                primary.push('N');
                alternate.push('N');
                i += if at(i + 1) == 'N' { 2 } else { 1 };
            }
            'P' => {
                if at(i + 1) == 'H' {
                    primary.push('F');
                    alternate.push('F');
                    i += 2;
                } else {
                    primary.push('P');
                    alternate.push('P');
                    i += if at(i + 1) == 'P' || at(i + 1) == 'B' { 2 } else { 1 };
                }
            }
            'Q' => {
                primary.push('K');
                alternate.push('K');
                i += if at(i + 1) == 'Q' { 2 } else { 1 };
            }
            'R' => {
                primary.push('R');
                alternate.push('R');
                i += if at(i + 1) == 'R' { 2 } else { 1 };
            }
            'S' => {
                if at(i + 1) == 'H' {
                    primary.push('X');
                    alternate.push('X');
                    i += 2;
                } else if at(i + 1) == 'I' && matches!(at(i + 2), 'O' | 'A') {
                    primary.push('S');
                    alternate.push('X');
                    i += 1;
                } else {
                    primary.push('S');
                    alternate.push('S');
                    i += if at(i + 1) == 'S' { 2 } else { 1 };
                }
            }
            'T' => {
                if at(i + 1) == 'H' {
                    primary.push('0');
                    alternate.push('T');
                    i += 2;
                } else if at(i + 1) == 'I' && matches!(at(i + 2), 'O' | 'A') {
                    primary.push('S');
                    alternate.push('X');
                    i += 1;
                } else {
                    primary.push('T');
                    alternate.push('T');
                    i += if at(i + 1) == 'T' { 2 } else { 1 };
                }
            }
            'V' => {
                primary.push('F');
                alternate.push('F');
                i += if at(i + 1) == 'V' { 2 } else { 1 };
            }
            'W' => {
                if is_vowel(at(i + 1)) {
                    primary.push('A');
                    alternate.push('F');
                }
                i += 1;
            }
            'X' => {
                primary.push_str("KS");
                alternate.push_str("KS");
                i += 1;
            }
            'Z' => {
                primary.push('S');
                alternate.push('S');
                i += if at(i + 1) == 'Z' { 2 } else { 1 };
            }
            _ => {
                i += 1;
            }
        }
    }

    primary.truncate(MAX_LEN);
    alternate.truncate(MAX_LEN);

    let alt = if alternate.is_empty() || alternate == primary {
        None
    } else {
        Some(alternate)
    };

    DoubleMetaphoneCode {
        primary,
        alternate: alt,
    }
}
