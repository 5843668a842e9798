use crate::locate::{CommandLocator, PackageLocator};
use crate::types::{OntologyIri, PhysicalLocation};

/// Scheme prefix for identifiers that reference a file relative to a named
/// external package: `package://<name>/<relative-path>`.
pub const PACKAGE_SCHEME: &str = "package://";

/// Resolves `package://` identifiers against externally installed packages.
///
/// The identifier's package name is handed to a [`PackageLocator`]; on a
/// match, the location is the package root with the identifier's relative
/// path appended verbatim. Identifiers in any other scheme, identifiers
/// the locator cannot place, and malformed package identifiers all yield
/// a no-match so the caller can fall through to its next strategy.
pub struct PackageResolver {
    locator: Box<dyn PackageLocator>,
}

impl PackageResolver {
    pub fn new(locator: Box<dyn PackageLocator>) -> Self {
        Self { locator }
    }

    pub fn try_resolve(&self, iri: &OntologyIri) -> Option<PhysicalLocation> {
        let (package, relative_path) = split_package_iri(iri.as_str())?;
        let root = self.locator.locate(package)?;

        // The relative path carries its leading separator, so this is plain
        // concatenation. No normalization of the lookup tool's answer.
        let mut location = root.to_string_lossy().into_owned();
        location.push_str(relative_path);
        Some(PhysicalLocation::from_path(location))
    }
}

impl Default for PackageResolver {
    fn default() -> Self {
        Self::new(Box::new(CommandLocator::default()))
    }
}

/// Splits `package://<name>/<path>` into `(name, /path)`.
///
/// Identifiers without the scheme prefix, without a separator after the
/// package name, or with an empty package name produce `None`.
fn split_package_iri(iri: &str) -> Option<(&str, &str)> {
    let rest = iri.strip_prefix(PACKAGE_SCHEME)?;
    let separator = rest.find('/')?;
    if separator == 0 {
        log::debug!("Package identifier '{iri}' has an empty package name");
        return None;
    }
    Some((&rest[..separator], &rest[separator..]))
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::cell::Cell;
    use std::path::PathBuf;
    use std::rc::Rc;

    struct FixedLocator {
        root: Option<PathBuf>,
        calls: Rc<Cell<usize>>,
    }

    impl PackageLocator for FixedLocator {
        fn locate(&self, _package: &str) -> Option<PathBuf> {
            self.calls.set(self.calls.get() + 1);
            self.root.clone()
        }
    }

    fn resolver_with(root: Option<&str>) -> (PackageResolver, Rc<Cell<usize>>) {
        let calls = Rc::new(Cell::new(0));
        let locator = FixedLocator {
            root: root.map(PathBuf::from),
            calls: calls.clone(),
        };
        (PackageResolver::new(Box::new(locator)), calls)
    }

    #[test]
    fn test_composes_root_and_relative_path() {
        let (resolver, _) = resolver_with(Some("/home/user/ros/turtlebot_description"));
        let location = resolver
            .try_resolve(&OntologyIri::from(
                "package://turtlebot_description/urdf/turtlebot.urdf",
            ))
            .expect("location");
        assert_eq!(
            location.as_str(),
            "/home/user/ros/turtlebot_description/urdf/turtlebot.urdf"
        );
    }

    #[test]
    fn test_other_scheme_skips_locator() {
        let (resolver, calls) = resolver_with(Some("/unused"));
        let location =
            resolver.try_resolve(&OntologyIri::from("http://example.org/ontology/missing.owl"));
        assert!(location.is_none());
        assert_eq!(calls.get(), 0);
    }

    #[test]
    fn test_missing_separator_is_no_match() {
        let (resolver, calls) = resolver_with(Some("/unused"));
        assert!(resolver
            .try_resolve(&OntologyIri::from("package://onlypackagename"))
            .is_none());
        assert_eq!(calls.get(), 0);
    }

    #[test]
    fn test_empty_package_name_is_no_match() {
        let (resolver, calls) = resolver_with(Some("/unused"));
        assert!(resolver
            .try_resolve(&OntologyIri::from("package:///urdf/turtlebot.urdf"))
            .is_none());
        assert_eq!(calls.get(), 0);
    }

    #[test]
    fn test_locator_miss_is_no_match() {
        let (resolver, calls) = resolver_with(None);
        assert!(resolver
            .try_resolve(&OntologyIri::from("package://nowhere/model.owl"))
            .is_none());
        assert_eq!(calls.get(), 1);
    }

    #[test]
    fn test_split_keeps_leading_separator() {
        assert_eq!(
            split_package_iri("package://pkg/a/b.owl"),
            Some(("pkg", "/a/b.owl"))
        );
    }
}
