//! Search execution: validate, filter, score, and rank candidate documents.

use crate::config::SearchIndexConfig;
use crate::error::{Result, SearchError};
use crate::filter::{EqFilter, SearchFilterState};
use crate::query::parse_search_query;
use crate::scoring::relevance_score;
use serde::Serialize;
use serde_json::{Map, Value};

/// Read access to a document's named field values.
///
/// This is the executor's only view of a document. It is deliberately a
/// closed seam: implement it for your document type rather than passing
/// loosely shaped objects around. Documents with heterogeneous or missing
/// fields are fine; absent fields simply return `None`.
pub trait DocumentFields {
    fn field(&self, name: &str) -> Option<&Value>;
}

impl DocumentFields for Map<String, Value> {
    fn field(&self, name: &str) -> Option<&Value> {
        self.get(name)
    }
}

/// Non-object values have no fields and thus never match or score.
impl DocumentFields for Value {
    fn field(&self, name: &str) -> Option<&Value> {
        self.as_object().and_then(|map| map.get(name))
    }
}

/// A document that survived filtering with its strictly positive score.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScoredDocument<T> {
    pub document: T,
    pub score: f64,
}

/// Runs a full-scan search over an in-memory document collection.
///
/// Pipeline: validate the state against the index config, parse the query,
/// then per document apply equality filters (cheap rejection first), extract
/// the search field's text, and score it. Documents whose search-field value
/// is absent or not a string are skipped silently rather than failing the
/// whole search. Only strictly positive scores survive; results come back
/// sorted by score descending, ties keeping input order (stable sort).
///
/// Fails fast before any document is scanned when the query is blank
/// ([`SearchError::EmptyQuery`]), the resolved search field is not the
/// index's ([`SearchError::FieldMismatch`]), or parsing yields neither terms
/// nor phrases ([`SearchError::NoValidTerms`]).
pub fn execute_search<T: DocumentFields>(
    documents: Vec<T>,
    state: &SearchFilterState,
    config: &SearchIndexConfig,
) -> Result<Vec<ScoredDocument<T>>> {
    let query = state.search_query.as_deref().unwrap_or_default();
    if query.trim().is_empty() {
        return Err(SearchError::EmptyQuery);
    }

    // The builder already checked this, but the state may not have come from
    // the builder.
    let search_field = state
        .search_field
        .as_deref()
        .unwrap_or(&config.search_field);
    if !config.matches_search_field(search_field) {
        return Err(SearchError::FieldMismatch {
            field: search_field.to_owned(),
            index_field: config.search_field.clone(),
        });
    }

    let parsed = parse_search_query(query);
    if parsed.is_empty() {
        return Err(SearchError::NoValidTerms);
    }

    tracing::debug!(
        index = %config.name,
        terms = parsed.terms.len(),
        phrases = parsed.phrases.len(),
        candidates = documents.len(),
        "executing search"
    );

    let mut results: Vec<ScoredDocument<T>> = Vec::new();
    for document in documents {
        if !passes_eq_filters(&document, &state.eq_filters) {
            continue;
        }
        let Some(text) = document.field(search_field).and_then(Value::as_str) else {
            continue;
        };
        let score = relevance_score(text, &parsed.terms, &parsed.phrases);
        if score > 0.0 {
            results.push(ScoredDocument { document, score });
        }
    }

    // Stable: equal scores keep their input order.
    results.sort_by(|a, b| b.score.total_cmp(&a.score));

    tracing::debug!(results = results.len(), "search complete");
    Ok(results)
}

/// Strict equality against every filter; an absent field rejects the document.
fn passes_eq_filters<T: DocumentFields>(document: &T, filters: &[EqFilter]) -> bool {
    filters
        .iter()
        .all(|filter| document.field(&filter.field) == Some(&filter.value))
}
