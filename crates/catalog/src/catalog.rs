use crate::entry::CatalogEntry;
use crate::error::{CatalogError, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Description attached to entries recorded through [`record_resolution`].
const MANUAL_RESOLUTION_DESCRIPTION: &str = "Manually resolved import";

/// An ordered list of identifier-to-location mappings, consulted front to
/// back by the surrounding loader. Position is priority: an entry inserted
/// at 0 wins over everything already present.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Catalog {
    entries: Vec<CatalogEntry>,
}

impl Catalog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn entries(&self) -> &[CatalogEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Inserts `entry` at `priority` (0 = front). Positions past the end
    /// are clamped to an append.
    pub fn add_entry(&mut self, priority: usize, entry: CatalogEntry) {
        let position = priority.min(self.entries.len());
        self.entries.insert(position, entry);
    }

    pub fn load(path: &Path) -> Result<Self> {
        let bytes = fs::read(path)?;
        Ok(serde_json::from_slice(&bytes)?)
    }

    /// Loads the catalog at `path`, or an empty one if the file does not
    /// exist yet.
    pub fn load_or_default(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::new());
        }
        Self::load(path)
    }

    /// Writes the catalog as pretty JSON, atomically (temp file + rename).
    pub fn save(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        let bytes = serde_json::to_vec_pretty(self)?;
        let tmp = path.with_extension("json.tmp");
        fs::write(&tmp, bytes)?;
        fs::rename(&tmp, path)?;
        Ok(())
    }
}

/// Renders `location` relative to `base` when it lies inside it; locations
/// outside the base keep their absolute form.
pub fn relativize(base: &Path, location: &Path) -> String {
    match location.strip_prefix(base) {
        Ok(relative) => relative.to_string_lossy().into_owned(),
        Err(_) => location.to_string_lossy().into_owned(),
    }
}

/// Records a manual resolution at the highest priority position and saves
/// the catalog: load-or-create, relativize against the catalog's own
/// directory, insert at the front, write back.
///
/// This is the one call the interactive resolution side makes; it fails
/// with an I/O or serialization error that the caller is expected to log
/// and swallow, never to re-throw into the resolution path.
pub fn record_resolution(catalog_path: &Path, source: &str, location: &Path) -> Result<()> {
    let base = catalog_path.parent().ok_or_else(|| {
        CatalogError::InvalidPath(format!("{} has no parent directory", catalog_path.display()))
    })?;

    let mut catalog = Catalog::load_or_default(catalog_path)?;
    catalog.add_entry(
        0,
        CatalogEntry::new(
            MANUAL_RESOLUTION_DESCRIPTION,
            source,
            relativize(base, location),
        ),
    );
    catalog.save(catalog_path)?;

    log::debug!(
        "Recorded catalog entry for '{source}' in {}",
        catalog_path.display()
    );
    Ok(())
}
