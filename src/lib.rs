//! Full-scan text search relevance engine.
//!
//! Tokenizes document text, parses a query into terms and quoted phrases,
//! matches terms against tokens with exact/prefix/fuzzy strategies, computes
//! a composite relevance score per document, and returns documents ranked by
//! that score. Operates by full scan over an in-memory collection supplied
//! by the caller; no indexes are built or persisted, and nothing here does
//! I/O.
//!
//! The usual entry points are [`FilterBuilder`] to accumulate a validated
//! [`SearchFilterState`] against a [`SearchIndexConfig`], and
//! [`execute_search`] to run it.

pub mod config;
pub mod error;
pub mod executor;
pub mod filter;
pub mod fuzzy;
pub mod query;
pub mod scoring;
pub mod tokenize;
pub mod tracing;

pub use config::{IndexCatalog, SearchIndexConfig};
pub use error::{Result, SearchError};
pub use executor::{DocumentFields, ScoredDocument, execute_search};
pub use filter::{EqFilter, FilterBuilder, SearchFilterState};
pub use query::{ParsedQuery, parse_search_query};
