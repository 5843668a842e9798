//! # irimap-resolver
//!
//! Maps abstract ontology identifiers (IRIs) to concrete, loadable physical
//! locations. Parsers hand every import they cannot locate through ordinary
//! lookup rules to an [`ImportResolver`], which works through a fixed chain
//! of strategies:
//!
//! ```text
//! OntologyIri
//!     │
//!     ├──> ResolutionCache ──────────> hit: cached PhysicalLocation
//!     │
//!     ├──> PackageResolver
//!     │      └─> package://name/path  → external package lookup
//!     │
//!     └──> ImportHandler (last resort, may block on an external actor)
//!            └─> Resolved | UseIri | Unresolved
//! ```
//!
//! Successful resolutions are cached for the lifetime of the resolver;
//! failures never are, so a later call for the same identifier starts the
//! chain from the top.

mod cache;
mod config;
mod error;
mod interactive;
mod locate;
mod package;
mod resolver;
mod types;

pub use cache::ResolutionCache;
pub use config::LocatorConfig;
pub use error::LocateError;
pub use interactive::{
    ChannelHandler, DeclineHandler, ImportHandler, ImportRequest, Resolution, ScriptedHandler,
};
pub use locate::{CommandLocator, PackageLocator};
pub use package::{PackageResolver, PACKAGE_SCHEME};
pub use resolver::ImportResolver;
pub use types::{OntologyIri, PhysicalLocation};
