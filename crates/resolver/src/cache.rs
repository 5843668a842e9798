use crate::types::{OntologyIri, PhysicalLocation};
use std::collections::HashMap;

/// Cache of successful resolutions, owned by a single [`ImportResolver`].
///
/// The cache only ever grows: entries are never evicted and the first write
/// for an identifier wins. Failed resolutions are never inserted, so an
/// identifier that could not be resolved is retried from scratch on the
/// next lookup.
///
/// [`ImportResolver`]: crate::ImportResolver
#[derive(Debug, Default)]
pub struct ResolutionCache {
    entries: HashMap<OntologyIri, PhysicalLocation>,
}

impl ResolutionCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, iri: &OntologyIri) -> Option<&PhysicalLocation> {
        self.entries.get(iri)
    }

    pub fn contains(&self, iri: &OntologyIri) -> bool {
        self.entries.contains_key(iri)
    }

    /// Records a resolution. Returns `false` if the identifier was already
    /// cached; the existing entry is kept in that case.
    pub fn insert(&mut self, iri: OntologyIri, location: PhysicalLocation) -> bool {
        match self.entries.entry(iri) {
            std::collections::hash_map::Entry::Occupied(_) => false,
            std::collections::hash_map::Entry::Vacant(slot) => {
                slot.insert(location);
                true
            }
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
