// SPDX-License-Identifier: MPL-2.0
//! Directory scanner module for finding supported image files.
//!
//! This module scans a single directory level for supported image formats,
//! excludes hidden entries, and preserves the listing order reported by the
//! filesystem. Ordering beyond that listing order is out of scope.

use crate::error::{Error, Result};
use crate::media;
use std::fs;
use std::path::{Path, PathBuf};

/// One file recognized as an image during a folder scan.
///
/// Holds the scanned path and the derived display name (last path
/// component). Immutable once created.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageEntry {
    path: PathBuf,
    display_name: String,
}

impl ImageEntry {
    /// Creates an entry for the given path, deriving the display name from
    /// the last path component.
    #[must_use]
    pub fn new(path: PathBuf) -> Self {
        let display_name = path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_default();
        Self { path, display_name }
    }

    /// Returns the full path of the entry.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Returns the display name (base file name).
    #[must_use]
    pub fn display_name(&self) -> &str {
        &self.display_name
    }
}

/// The ordered collection of image entries discovered in one folder scan.
///
/// Insertion order is the scan order; entries are unique per path because a
/// scan lists one directory level exactly once.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ImageSequence {
    entries: Vec<ImageEntry>,
}

impl ImageSequence {
    /// Creates a new empty sequence.
    #[must_use]
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Returns the total number of entries in the sequence.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Checks if the sequence is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Returns the entry at the specified index.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&ImageEntry> {
        self.entries.get(index)
    }

    /// Returns the first entry in the sequence, if any.
    #[must_use]
    pub fn first(&self) -> Option<&ImageEntry> {
        self.entries.first()
    }

    /// Iterates over the entries in scan order.
    pub fn iter(&self) -> std::slice::Iter<'_, ImageEntry> {
        self.entries.iter()
    }

    /// Returns the index of the first entry with the given path.
    ///
    /// Linear scan; used to seed the cursor after a single-file selection.
    #[must_use]
    pub fn position_of(&self, path: &Path) -> Option<usize> {
        self.entries.iter().position(|entry| entry.path() == path)
    }
}

impl<'a> IntoIterator for &'a ImageSequence {
    type Item = &'a ImageEntry;
    type IntoIter = std::slice::Iter<'a, ImageEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Scans a directory for supported image files.
///
/// Lists direct children only: hidden entries (names starting with `.`) and
/// files with unsupported extensions are dropped, everything else is kept in
/// the order the filesystem reports it. An empty result is valid.
///
/// # Errors
///
/// Returns [`Error::DirectoryUnreadable`] if the path is missing, is not a
/// directory, or cannot be listed. No partial sequence escapes on failure.
pub fn scan(directory: &Path) -> Result<ImageSequence> {
    let listing = fs::read_dir(directory)
        .map_err(|e| Error::DirectoryUnreadable(format!("{}: {e}", directory.display())))?;

    let mut entries = Vec::new();
    for entry in listing {
        let entry = entry
            .map_err(|e| Error::DirectoryUnreadable(format!("{}: {e}", directory.display())))?;
        let path = entry.path();

        if is_hidden(&path) {
            continue;
        }
        if path.is_file() && media::is_supported_image(&path) {
            entries.push(ImageEntry::new(path));
        }
    }

    Ok(ImageSequence { entries })
}

/// Checks if the last path component carries the hidden-file marker.
fn is_hidden(path: &Path) -> bool {
    path.file_name()
        .and_then(|name| name.to_str())
        .is_some_and(|name| name.starts_with('.'))
}
