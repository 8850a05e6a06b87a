//! Search index configuration supplied by the schema layer.

use serde::{Deserialize, Serialize};

/// Declares which fields of a document collection participate in search.
///
/// Exactly one text field is eligible for full-text search, plus a fixed set
/// of fields eligible for equality filtering on the same index. Constructed
/// by the schema layer and treated as immutable here; the executor and the
/// filter builder only borrow it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchIndexConfig {
    /// Index name, unique within a catalog (e.g. `"by_body"`).
    pub name: String,
    /// The one document field whose text is searched.
    pub search_field: String,
    /// Fields allowed in `eq()` filters, in declaration order.
    pub filter_fields: Vec<String>,
}

impl SearchIndexConfig {
    /// Create a config. Duplicate filter fields are dropped, keeping the
    /// first occurrence so declaration order is preserved.
    pub fn new(
        name: impl Into<String>,
        search_field: impl Into<String>,
        filter_fields: impl IntoIterator<Item = impl Into<String>>,
    ) -> Self {
        let mut fields: Vec<String> = Vec::new();
        for field in filter_fields {
            let field = field.into();
            if !fields.contains(&field) {
                fields.push(field);
            }
        }
        Self {
            name: name.into(),
            search_field: search_field.into(),
            filter_fields: fields,
        }
    }

    /// Whether `field` may appear in an equality filter on this index.
    pub fn is_filter_field(&self, field: &str) -> bool {
        self.filter_fields.iter().any(|f| f == field)
    }

    /// Whether `field` is the declared full-text search field.
    pub fn matches_search_field(&self, field: &str) -> bool {
        self.search_field == field
    }
}

/// Name-to-config lookup owned by the schema collaborator.
///
/// The engine itself never reads a process-wide registry; callers resolve a
/// config here and pass it down explicitly.
#[derive(Debug, Clone, Default)]
pub struct IndexCatalog {
    indexes: Vec<SearchIndexConfig>,
}

impl IndexCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a config, replacing any previous entry with the same name.
    pub fn register(&mut self, config: SearchIndexConfig) {
        if let Some(existing) = self.indexes.iter_mut().find(|c| c.name == config.name) {
            tracing::debug!(index = %config.name, "replacing registered search index config");
            *existing = config;
        } else {
            self.indexes.push(config);
        }
    }

    /// Look up a config by index name.
    pub fn get(&self, name: &str) -> Option<&SearchIndexConfig> {
        self.indexes.iter().find(|c| c.name == name)
    }

    pub fn len(&self) -> usize {
        self.indexes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.indexes.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert2::check;

    #[test]
    fn test_filter_field_membership() {
        let config = SearchIndexConfig::new("by_body", "body", ["category", "author"]);
        check!(config.is_filter_field("category"));
        check!(config.is_filter_field("author"));
        check!(!config.is_filter_field("body"));
        check!(!config.is_filter_field("missing"));
        check!(config.matches_search_field("body"));
        check!(!config.matches_search_field("category"));
    }

    #[test]
    fn test_duplicate_filter_fields_deduped_in_order() {
        let config = SearchIndexConfig::new("idx", "text", ["b", "a", "b", "c", "a"]);
        check!(config.filter_fields == vec!["b", "a", "c"]);
    }

    #[test]
    fn test_catalog_register_and_replace() {
        let mut catalog = IndexCatalog::new();
        check!(catalog.is_empty());

        catalog.register(SearchIndexConfig::new("by_body", "body", ["category"]));
        catalog.register(SearchIndexConfig::new("by_title", "title", Vec::<String>::new()));
        check!(catalog.len() == 2);
        check!(catalog.get("by_body").is_some());
        check!(catalog.get("unknown").is_none());

        // Re-registering replaces rather than appending.
        catalog.register(SearchIndexConfig::new("by_body", "body", ["category", "author"]));
        check!(catalog.len() == 2);
        check!(catalog.get("by_body").unwrap().filter_fields.len() == 2);
    }
}
