use crate::cache::ResolutionCache;
use crate::interactive::{DeclineHandler, ImportHandler, Resolution};
use crate::package::PackageResolver;
use crate::types::OntologyIri;

/// Maps ontology identifiers to physical locations through a fixed chain
/// of strategies: resolution cache, package scheme, interactive handler.
///
/// Only successful resolutions enter the cache. A `UseIri` or `Unresolved`
/// outcome leaves no trace, so the next call for the same identifier walks
/// the whole chain again.
pub struct ImportResolver {
    cache: ResolutionCache,
    package: PackageResolver,
    handler: Box<dyn ImportHandler>,
}

impl ImportResolver {
    pub fn new(package: PackageResolver, handler: Box<dyn ImportHandler>) -> Self {
        Self {
            cache: ResolutionCache::new(),
            package,
            handler,
        }
    }

    /// Resolver with the stock strategies: `rospack`-backed package lookup
    /// and no interactive handler.
    pub fn with_default_strategies() -> Self {
        Self::new(PackageResolver::default(), Box::new(DeclineHandler))
    }

    /// Swaps the last-resort handler. Takes effect on the next `resolve`
    /// call; entries already cached are unaffected.
    pub fn set_import_handler(&mut self, handler: Box<dyn ImportHandler>) {
        self.handler = handler;
    }

    pub fn resolve(&mut self, iri: &OntologyIri) -> Resolution {
        if let Some(cached) = self.cache.get(iri) {
            return Resolution::Resolved(cached.clone());
        }

        if let Some(location) = self.package.try_resolve(iri) {
            self.cache.insert(iri.clone(), location.clone());
            return Resolution::Resolved(location);
        }

        match self.handler.resolve(iri) {
            Resolution::Resolved(location) => {
                log::info!("Import '{iri}' resolved to {location}");
                self.cache.insert(iri.clone(), location.clone());
                Resolution::Resolved(location)
            }
            outcome => outcome,
        }
    }

    pub fn cache(&self) -> &ResolutionCache {
        &self.cache
    }
}

impl Default for ImportResolver {
    fn default() -> Self {
        Self::with_default_strategies()
    }
}
