use std::fmt;
use std::path::{Path, PathBuf};

/// An ontology identifier: the IRI a document uses to name an ontology or
/// an import target.
///
/// The identifier is opaque to the resolver. It is only ever compared for
/// exact value equality and used as a lookup key; it is not a retrieval
/// mechanism by itself.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct OntologyIri(String);

impl OntologyIri {
    pub fn new(iri: impl Into<String>) -> Self {
        Self(iri.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for OntologyIri {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for OntologyIri {
    fn from(iri: &str) -> Self {
        Self::new(iri)
    }
}

impl From<String> for OntologyIri {
    fn from(iri: String) -> Self {
        Self(iri)
    }
}

/// A concrete, retrievable reference to a document: an absolute file path
/// or a URI that can be opened to obtain its content.
///
/// Locations are immutable once produced.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PhysicalLocation(String);

impl PhysicalLocation {
    /// Location backed by a file path.
    pub fn from_path(path: impl AsRef<Path>) -> Self {
        Self(path.as_ref().to_string_lossy().into_owned())
    }

    /// Location backed by a URI (or any textual reference, e.g. an
    /// identifier a caller has decided to load directly).
    pub fn from_uri(uri: impl Into<String>) -> Self {
        Self(uri.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn to_path(&self) -> PathBuf {
        PathBuf::from(&self.0)
    }
}

impl fmt::Display for PhysicalLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
