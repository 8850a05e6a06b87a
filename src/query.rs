//! Query parsing: splitting a raw query string into terms and quoted phrases.

use crate::tokenize::tokenize;
use regex::Regex;
use std::sync::LazyLock;

static PHRASE_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#""([^"]*)""#).expect("phrase pattern is valid"));

/// A raw query string split into bare terms and quoted phrases.
///
/// Derived transiently from the query; never persisted.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParsedQuery {
    /// Tokenized words outside any quoted span, in occurrence order.
    pub terms: Vec<String>,
    /// Double-quoted spans, lowercased and quote-stripped, left to right.
    pub phrases: Vec<String>,
}

impl ParsedQuery {
    /// True when the query yielded nothing to match on. The parser itself
    /// never errors; the executor rejects this condition.
    pub fn is_empty(&self) -> bool {
        self.terms.is_empty() && self.phrases.is_empty()
    }
}

/// Parses a search query into terms and quoted phrases.
///
/// Every `"..."` span becomes a phrase (extraction order = occurrence order);
/// the matched spans are removed and the remainder is tokenized into terms.
/// Spans are lowercased but otherwise kept verbatim, whitespace included,
/// since phrase matching is substring containment. Blank spans produce no
/// phrase.
pub fn parse_search_query(query: &str) -> ParsedQuery {
    let mut phrases = Vec::new();
    for capture in PHRASE_PATTERN.captures_iter(query) {
        if !capture[1].trim().is_empty() {
            phrases.push(capture[1].to_lowercase());
        }
    }

    let remainder = PHRASE_PATTERN.replace_all(query, " ");
    ParsedQuery {
        terms: tokenize(&remainder),
        phrases,
    }
}
