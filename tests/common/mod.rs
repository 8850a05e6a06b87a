//! Shared fixtures for integration tests.

use rstest::fixture;
use serde_json::{Value, json};
use textscan::SearchIndexConfig;

/// Index over a `body` text field with a `category` equality filter,
/// registered the way the schema layer would declare it.
#[fixture]
pub fn body_index() -> SearchIndexConfig {
    textscan::tracing::init();
    SearchIndexConfig::new("by_body", "body", ["category"])
}

/// A small heterogeneous document collection: pet-care notes and retail
/// listings sharing the same index.
#[fixture]
pub fn animal_docs() -> Vec<Value> {
    vec![
        json!({"id": 1, "body": "the cat sat", "category": "pets"}),
        json!({"id": 2, "body": "a catalog of felines", "category": "retail"}),
        json!({"id": 3, "body": "dogs chasing the quick brown fox", "category": "pets"}),
        json!({"id": 4, "body": "entirely unrelated text", "category": "misc"}),
    ]
}

/// Pull the numeric `id` fields out of ranked results, in rank order.
pub fn result_ids(results: &[textscan::ScoredDocument<Value>]) -> Vec<i64> {
    results
        .iter()
        .map(|r| r.document["id"].as_i64().expect("fixture docs carry ids"))
        .collect()
}
