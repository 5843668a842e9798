use irimap_resolver::{ImportHandler, OntologyIri, Resolution};
use std::path::PathBuf;

/// Decorator that records manual resolutions into the active catalog.
///
/// When the wrapped handler supplies a location, the mapping is prepended
/// to the catalog at the highest priority so subsequent loads satisfy the
/// import without re-prompting. The write is best-effort: a failed save is
/// logged and the resolution outcome is returned unchanged.
pub(crate) struct CatalogRecorder {
    inner: Box<dyn ImportHandler>,
    catalog_path: PathBuf,
}

impl CatalogRecorder {
    pub(crate) fn new(inner: Box<dyn ImportHandler>, catalog_path: PathBuf) -> Self {
        Self {
            inner,
            catalog_path,
        }
    }
}

impl ImportHandler for CatalogRecorder {
    fn resolve(&self, iri: &OntologyIri) -> Resolution {
        let outcome = self.inner.resolve(iri);

        if let Resolution::Resolved(location) = &outcome {
            if let Err(err) = irimap_catalog::record_resolution(
                &self.catalog_path,
                iri.as_str(),
                &location.to_path(),
            ) {
                log::error!(
                    "Could not save catalog entry for '{iri}' to {}: {err}",
                    self.catalog_path.display()
                );
            }
        }

        outcome
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use irimap_catalog::Catalog;
    use irimap_resolver::{PhysicalLocation, ScriptedHandler};
    use pretty_assertions::assert_eq;

    fn recorder(outcome: Resolution, catalog_path: PathBuf) -> CatalogRecorder {
        CatalogRecorder::new(
            Box::new(ScriptedHandler::with_fallback(outcome)),
            catalog_path,
        )
    }

    #[test]
    fn test_resolved_outcome_is_recorded() {
        let dir = tempfile::TempDir::new().expect("tempdir");
        let catalog_path = dir.path().join("catalog.json");
        let location = PhysicalLocation::from_path("/tmp/missing.owl");

        let handler = recorder(Resolution::Resolved(location.clone()), catalog_path.clone());
        let iri = OntologyIri::from("http://example.org/ontology/missing.owl");

        assert_eq!(handler.resolve(&iri), Resolution::Resolved(location));

        let catalog = Catalog::load(&catalog_path).expect("catalog");
        assert_eq!(catalog.len(), 1);
        assert_eq!(catalog.entries()[0].source, iri.as_str());
        assert_eq!(catalog.entries()[0].location, "/tmp/missing.owl");
    }

    #[test]
    fn test_unresolved_outcome_writes_nothing() {
        let dir = tempfile::TempDir::new().expect("tempdir");
        let catalog_path = dir.path().join("catalog.json");

        let handler = recorder(Resolution::Unresolved, catalog_path.clone());
        handler.resolve(&OntologyIri::from("http://example.org/a.owl"));

        assert!(!catalog_path.exists());
    }

    #[test]
    fn test_use_iri_outcome_writes_nothing() {
        let dir = tempfile::TempDir::new().expect("tempdir");
        let catalog_path = dir.path().join("catalog.json");

        let handler = recorder(Resolution::UseIri, catalog_path.clone());
        assert_eq!(
            handler.resolve(&OntologyIri::from("http://example.org/a.owl")),
            Resolution::UseIri
        );
        assert!(!catalog_path.exists());
    }

    #[test]
    fn test_cached_resolution_records_only_once() {
        use irimap_resolver::{ImportResolver, PackageResolver};

        let dir = tempfile::TempDir::new().expect("tempdir");
        let catalog_path = dir.path().join("catalog.json");
        let location = PhysicalLocation::from_path("/tmp/missing.owl");

        let handler = recorder(Resolution::Resolved(location.clone()), catalog_path.clone());
        let mut resolver =
            ImportResolver::new(PackageResolver::default(), Box::new(handler));
        let iri = OntologyIri::from("http://example.org/ontology/missing.owl");

        assert_eq!(
            resolver.resolve(&iri),
            Resolution::Resolved(location.clone())
        );
        // Served from the cache: no prompt, no second catalog write.
        assert_eq!(resolver.resolve(&iri), Resolution::Resolved(location));

        let catalog = Catalog::load(&catalog_path).expect("catalog");
        assert_eq!(catalog.len(), 1);
    }

    #[test]
    fn test_failed_save_keeps_the_outcome() {
        let dir = tempfile::TempDir::new().expect("tempdir");
        // A catalog path whose parent is a regular file cannot be written.
        let blocker = dir.path().join("blocker");
        std::fs::write(&blocker, b"").expect("blocker");
        let catalog_path = blocker.join("catalog.json");

        let location = PhysicalLocation::from_path("/tmp/missing.owl");
        let handler = recorder(Resolution::Resolved(location.clone()), catalog_path);

        assert_eq!(
            handler.resolve(&OntologyIri::from("http://example.org/a.owl")),
            Resolution::Resolved(location)
        );
    }
}
