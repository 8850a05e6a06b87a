//! Filter state accumulation for a single search invocation.

use crate::config::SearchIndexConfig;
use crate::error::{Result, SearchError};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// One equality constraint against a designated filter field.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EqFilter {
    pub field: String,
    pub value: Value,
}

/// Accumulated search parameters for one execution: which field is searched,
/// the query string, and zero or more equality constraints.
///
/// Created per query invocation and discarded after the executor consumes
/// it. Usually produced through [`FilterBuilder`], which validates fields as
/// they are added; the executor re-validates the search field regardless,
/// since nothing stops a caller from constructing this state directly.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SearchFilterState {
    pub search_field: Option<String>,
    pub search_query: Option<String>,
    pub eq_filters: Vec<EqFilter>,
}

/// Fail-fast builder for [`SearchFilterState`], bound to one index config.
///
/// Each call consumes the builder and returns a new one (functional update,
/// no aliasing), erroring immediately when a field is not part of the index:
///
/// ```
/// use textscan::{FilterBuilder, SearchIndexConfig};
///
/// let config = SearchIndexConfig::new("by_body", "body", ["category"]);
/// let state = FilterBuilder::new(&config)
///     .search("body", "quick fox")?
///     .eq("category", "pets")?
///     .build();
/// assert_eq!(state.eq_filters.len(), 1);
/// # Ok::<(), textscan::SearchError>(())
/// ```
#[derive(Debug, Clone)]
pub struct FilterBuilder<'a> {
    config: &'a SearchIndexConfig,
    state: SearchFilterState,
}

impl<'a> FilterBuilder<'a> {
    pub fn new(config: &'a SearchIndexConfig) -> Self {
        Self {
            config,
            state: SearchFilterState::default(),
        }
    }

    /// Sets the searched field and query string.
    ///
    /// Errors with [`SearchError::FieldMismatch`] unless `field` is the
    /// index's declared search field.
    pub fn search(mut self, field: impl Into<String>, query: impl Into<String>) -> Result<Self> {
        let field = field.into();
        if !self.config.matches_search_field(&field) {
            return Err(SearchError::FieldMismatch {
                field,
                index_field: self.config.search_field.clone(),
            });
        }
        self.state.search_field = Some(field);
        self.state.search_query = Some(query.into());
        Ok(self)
    }

    /// Appends an equality constraint.
    ///
    /// Errors with [`SearchError::InvalidFilterField`] unless `field` is a
    /// member of the index's filter-field set.
    pub fn eq(mut self, field: impl Into<String>, value: impl Into<Value>) -> Result<Self> {
        let field = field.into();
        if !self.config.is_filter_field(&field) {
            return Err(SearchError::InvalidFilterField {
                field,
                index: self.config.name.clone(),
            });
        }
        self.state.eq_filters.push(EqFilter {
            field,
            value: value.into(),
        });
        Ok(self)
    }

    /// Yields the accumulated state for the executor to consume.
    pub fn build(self) -> SearchFilterState {
        self.state
    }
}
