//! # irimap-catalog
//!
//! The catalog an ontology loader consults before falling back to active
//! resolution: an ordered list of identifier-to-location mappings persisted
//! as JSON next to the documents it describes.
//!
//! This crate owns the entry model and persistence. The resolution side
//! only ever calls [`record_resolution`] to prepend a manually chosen
//! mapping, and treats any failure as a loggable, non-fatal event.

mod catalog;
mod entry;
mod error;

pub use catalog::{record_resolution, relativize, Catalog};
pub use entry::CatalogEntry;
pub use error::{CatalogError, Result};
