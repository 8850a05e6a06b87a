//! Approximate string matching: edit distance and the per-term fuzzy matcher.

/// Score multiplier for prefix matches, ranking them below exact matches.
pub const PREFIX_MATCH_FACTOR: f64 = 0.9;

/// Score multiplier for fuzzy matches, ranking them below prefix matches.
pub const FUZZY_MATCH_FACTOR: f64 = 0.8;

/// Classic Levenshtein distance via dynamic programming.
///
/// Substitution, insertion, and deletion all cost 1. Case-sensitive; callers
/// pre-lowercase. Operates on `char`s, not bytes, so multi-byte characters
/// count as single edits. Uses a single rolling row of the
/// `(|b|+1) x (|a|+1)` table rather than materializing the whole grid.
///
/// `edit_distance("", x) == x.chars().count()` and the function is
/// symmetric in its arguments.
pub fn edit_distance(a: &str, b: &str) -> usize {
    let a_chars: Vec<char> = a.chars().collect();
    let b_chars: Vec<char> = b.chars().collect();

    if a_chars.is_empty() {
        return b_chars.len();
    }
    if b_chars.is_empty() {
        return a_chars.len();
    }

    let mut row: Vec<usize> = (0..=b_chars.len()).collect();
    for (i, &a_char) in a_chars.iter().enumerate() {
        let mut diagonal = row[0];
        row[0] = i + 1;
        for (j, &b_char) in b_chars.iter().enumerate() {
            let above = row[j + 1];
            let cost = usize::from(a_char != b_char);
            row[j + 1] = (above + 1).min(row[j] + 1).min(diagonal + cost);
            diagonal = above;
        }
    }
    row[b_chars.len()]
}

/// Maximum edit distance tolerated for a query term of the given length.
///
/// Short words get no fuzzy tolerance at all: allowing "to" or "at" to
/// fuzzy-match unrelated short tokens would dominate the false positives.
pub fn max_edit_distance(term_len: usize) -> usize {
    match term_len {
        0..=3 => 0,
        4..=6 => 1,
        _ => 2,
    }
}

/// Outcome of matching one query term against a set of document tokens.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FuzzyOutcome {
    /// Whether any token produced a positive match score.
    pub matched: bool,
    /// Best candidate score across all tokens and match types, in `[0, 1]`.
    pub best_score: f64,
}

impl FuzzyOutcome {
    const MISS: Self = Self {
        matched: false,
        best_score: 0.0,
    };
}

/// Matches a single query term against document tokens.
///
/// For each token, all applicable strategies are evaluated and the running
/// maximum kept:
/// - exact equality returns immediately with a score of `1.0`;
/// - a token starting with the term scores `(term_len / token_len) * 0.9`;
/// - within the length-tiered edit distance budget, a token scores
///   `(1 - distance / max(term_len, token_len)) * 0.8`.
///
/// The multipliers keep the ordering exact > prefix > fuzzy deterministic.
pub fn fuzzy_match<S: AsRef<str>>(term: &str, tokens: &[S]) -> FuzzyOutcome {
    let term_len = term.chars().count();
    let max_distance = max_edit_distance(term_len);
    let mut best_score: f64 = 0.0;

    for token in tokens {
        let token = token.as_ref();
        if token == term {
            return FuzzyOutcome {
                matched: true,
                best_score: 1.0,
            };
        }

        let token_len = token.chars().count();
        if token_len > 0 && token.starts_with(term) {
            let score = (term_len as f64 / token_len as f64) * PREFIX_MATCH_FACTOR;
            best_score = best_score.max(score);
        }

        if max_distance > 0 {
            let distance = edit_distance(term, token);
            if distance <= max_distance {
                let longest = term_len.max(token_len);
                let score = (1.0 - distance as f64 / longest as f64) * FUZZY_MATCH_FACTOR;
                best_score = best_score.max(score);
            }
        }
    }

    if best_score > 0.0 {
        FuzzyOutcome {
            matched: true,
            best_score,
        }
    } else {
        FuzzyOutcome::MISS
    }
}
