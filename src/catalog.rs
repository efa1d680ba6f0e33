//! In-memory motif catalog.
//!
//! Holds motif names and native sizes keyed by a small [`MotifId`] handle,
//! in insertion order. Decoding and masking the bitmaps stays with the host;
//! the catalog only needs their dimensions.

use alloc::string::String;
use alloc::vec::Vec;
use core::fmt;

use crate::geometry::Size;
use crate::render::{Motif, MotifRepository};

/// Handle of a motif registered in a [`MotifCatalog`].
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MotifId(pub u32);

impl fmt::Display for MotifId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "motif-{}", self.0)
    }
}

/// A registered motif.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MotifEntry {
    pub name: String,
    pub size: Size,
}

impl Motif for MotifEntry {
    fn native_size(&self) -> Size {
        self.size
    }
}

/// Motifs addressable by [`MotifId`], in registration order.
#[derive(Clone, Debug, Default)]
pub struct MotifCatalog {
    entries: Vec<MotifEntry>,
}

impl MotifCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a catalog from `(name, size)` pairs, in the given order.
    pub fn from_sizes<'a, I>(motifs: I) -> Self
    where
        I: IntoIterator<Item = (&'a str, Size)>,
    {
        let mut catalog = Self::new();
        for (name, size) in motifs {
            catalog.insert(name, size);
        }
        catalog
    }

    /// Register a motif and return its handle. Handles are dense indices.
    pub fn insert(&mut self, name: &str, size: Size) -> MotifId {
        let id = MotifId(self.entries.len() as u32);
        self.entries.push(MotifEntry {
            name: String::from(name),
            size,
        });
        id
    }

    pub fn entry(&self, id: MotifId) -> Option<&MotifEntry> {
        self.entries.get(id.0 as usize)
    }

    /// First motif registered under `name`.
    pub fn find(&self, name: &str) -> Option<MotifId> {
        self.entries
            .iter()
            .position(|e| e.name == name)
            .map(|i| MotifId(i as u32))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (MotifId, &MotifEntry)> {
        self.entries
            .iter()
            .enumerate()
            .map(|(i, e)| (MotifId(i as u32), e))
    }
}

impl MotifRepository<MotifId> for MotifCatalog {
    type Motif = MotifEntry;

    fn get(&self, id: MotifId) -> Option<&MotifEntry> {
        self.entry(id)
    }
}

/// List the `*.png` files directly inside `dir`, sorted by file name.
///
/// This is the order motif libraries are presented and indexed in; the
/// files are not opened.
#[cfg(feature = "std")]
pub fn discover(dir: &std::path::Path) -> std::io::Result<Vec<std::path::PathBuf>> {
    let mut paths = Vec::new();
    for entry in std::fs::read_dir(dir)? {
        let entry = entry?;
        if !entry.file_type()?.is_file() {
            continue;
        }
        let path = entry.path();
        if path.extension().is_some_and(|ext| ext == "png") {
            paths.push(path);
        }
    }
    paths.sort_by(|a, b| a.file_name().cmp(&b.file_name()));
    tracing::debug!(dir = %dir.display(), motifs = paths.len(), "discovered motifs");
    Ok(paths)
}

#[cfg(all(test, feature = "std"))]
mod tests {
    use super::*;

    #[test]
    fn ids_follow_insertion_order() {
        let catalog = MotifCatalog::from_sizes([
            ("circle", Size::new(128, 128)),
            ("eye", Size::new(200, 100)),
        ]);
        assert_eq!(catalog.len(), 2);
        assert_eq!(catalog.find("eye"), Some(MotifId(1)));
        assert_eq!(catalog.find("butterfly"), None);
        assert_eq!(
            catalog.get(MotifId(0)).map(Motif::native_size),
            Some(Size::new(128, 128))
        );
        assert!(catalog.get(MotifId(2)).is_none());
    }

    #[test]
    fn iter_pairs_ids_with_entries() {
        let catalog = MotifCatalog::from_sizes([("a", Size::new(1, 1)), ("b", Size::new(2, 2))]);
        let names: Vec<(MotifId, &str)> = catalog.iter().map(|(id, e)| (id, e.name.as_str())).collect();
        assert_eq!(names, vec![(MotifId(0), "a"), (MotifId(1), "b")]);
    }

    #[test]
    fn id_display() {
        assert_eq!(MotifId(7).to_string(), "motif-7");
    }

    #[test]
    fn discover_sorts_png_files() -> std::io::Result<()> {
        let dir = tempfile::tempdir()?;
        for name in ["b.png", "a.png", "c.txt", "10.png"] {
            std::fs::write(dir.path().join(name), b"")?;
        }
        std::fs::create_dir(dir.path().join("sub.png"))?;

        let found: Vec<String> = discover(dir.path())?
            .iter()
            .filter_map(|p| p.file_name())
            .map(|n| n.to_string_lossy().into_owned())
            .collect();
        assert_eq!(found, vec!["10.png", "a.png", "b.png"]);
        Ok(())
    }
}
