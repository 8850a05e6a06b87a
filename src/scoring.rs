//! Relevance scoring: the one place scoring policy lives.
//!
//! Every threshold below is a design constant, not a derived value. They can
//! be retuned, but the relative ordering they guarantee must hold: an exact
//! token match outweighs a prefix match, which outweighs a fuzzy match, and
//! a quoted phrase hit outweighs any single-term contribution.

use crate::fuzzy::fuzzy_match;
use crate::tokenize::tokenize;

/// Term-count credit for an exact token match.
pub const EXACT_TERM_WEIGHT: f64 = 1.0;

/// Term-count credit for a prefix token match.
pub const PREFIX_TERM_WEIGHT: f64 = 0.7;

/// Maximum bonus for a term whose first match sits at the start of the text.
pub const MAX_POSITION_BONUS: f64 = 0.5;

/// Weight of the multi-term coverage bonus.
pub const COVERAGE_BONUS_WEIGHT: f64 = 0.3;

/// Flat bonus per quoted phrase found as a contiguous substring.
pub const PHRASE_BONUS: f64 = 2.0;

/// Computes the composite relevance score of one document's text against a
/// parsed query.
///
/// Per term, a single pass over the document tokens accumulates a fractional
/// term count (exact `1.0`, else prefix `0.7`, else the fuzzy matcher's best
/// score; first success wins per token, counts sum across tokens) and
/// records where the first contributing token sits. A matched term
/// contributes log-dampened frequency `1 + ln(term_count)` plus a position
/// bonus that decays linearly with the first match's token index. On top of
/// the per-term sum come a coverage bonus when several distinct terms match
/// and a flat bonus per phrase contained in the lowercased text.
///
/// Returns `0.0` for text that tokenizes to nothing or matches nothing;
/// never negative.
///
/// The term count is deliberately unbounded: a term repeated many times keeps
/// accumulating credit, and the logarithm keeps the growth sub-linear.
pub fn relevance_score(document_text: &str, terms: &[String], phrases: &[String]) -> f64 {
    if document_text.is_empty() {
        return 0.0;
    }
    let doc_tokens = tokenize(document_text);
    if doc_tokens.is_empty() {
        return 0.0;
    }

    let mut total_score = 0.0;
    let mut matched_terms = 0_usize;

    for term in terms {
        let (term_count, first_position) = score_term(term, &doc_tokens);
        if term_count > 0.0 {
            let tf_score = 1.0 + term_count.ln();
            let position_bonus = first_position.map_or(0.0, |position| {
                MAX_POSITION_BONUS * (1.0 - position as f64 / doc_tokens.len() as f64)
            });
            total_score += tf_score + position_bonus;
            matched_terms += 1;
        }
    }

    if terms.len() > 1 && matched_terms > 1 {
        total_score += COVERAGE_BONUS_WEIGHT * (matched_terms as f64 / terms.len() as f64);
    }

    if !phrases.is_empty() {
        let text_lower = document_text.to_lowercase();
        for phrase in phrases {
            if text_lower.contains(phrase.as_str()) {
                total_score += PHRASE_BONUS;
            }
        }
    }

    total_score
}

/// Accumulates one term's fractional match count over the document tokens
/// and the index of the first token that contributed.
fn score_term(term: &str, doc_tokens: &[String]) -> (f64, Option<usize>) {
    let mut term_count = 0.0;
    let mut first_position = None;

    for (position, token) in doc_tokens.iter().enumerate() {
        let contribution = if token == term {
            EXACT_TERM_WEIGHT
        } else if token.starts_with(term) {
            PREFIX_TERM_WEIGHT
        } else {
            let outcome = fuzzy_match(term, std::slice::from_ref(token));
            if outcome.matched { outcome.best_score } else { 0.0 }
        };

        if contribution > 0.0 {
            term_count += contribution;
            if first_position.is_none() {
                first_position = Some(position);
            }
        }
    }

    (term_count, first_position)
}
