use serde::{Deserialize, Serialize};

/// One catalog mapping: a source identifier and the location that should
/// satisfy it, relative to the catalog file's directory when possible.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogEntry {
    /// Human-readable note on where the mapping came from.
    pub description: String,

    /// The ontology identifier this entry satisfies.
    pub source: String,

    /// Where to load it from. Relative to the catalog's directory unless
    /// the target lies outside it, in which case it is absolute.
    pub location: String,
}

impl CatalogEntry {
    pub fn new(
        description: impl Into<String>,
        source: impl Into<String>,
        location: impl Into<String>,
    ) -> Self {
        Self {
            description: description.into(),
            source: source.into(),
            location: location.into(),
        }
    }
}
