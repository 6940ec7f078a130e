// SPDX-License-Identifier: MPL-2.0
//! Image navigation module for managing scanned sequences and cursor state.
//!
//! [`SequenceCursor`] is a plain value type with explicit step outcomes, so
//! navigation can be unit-tested without a UI harness. [`ImageNavigator`]
//! ties a cursor to the directory scanner and is the single source of truth
//! for the current selection.

use crate::directory_scanner::{self, ImageEntry, ImageSequence};
use crate::error::{Error, Result};
use std::path::Path;

/// The edge of a sequence, where further movement in that direction is
/// refused.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Boundary {
    First,
    Last,
}

/// Outcome of a single cursor step.
///
/// A boundary hit is informational, not a failure: the cursor stays put and
/// the presentation layer renders the first/last notice.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StepOutcome {
    /// The cursor moved; this is the newly selected entry.
    Moved(ImageEntry),
    /// The cursor was already at the edge; position unchanged.
    BoundaryReached(Boundary),
    /// No sequence is loaded or it is empty; the step is a no-op.
    NoSelection,
}

/// Navigation position within one scanned sequence.
///
/// The cursor is either empty (zero-length sequence) or positioned at an
/// index in `0..len`. The index changes only through [`advance`],
/// [`retreat`], and [`jump_to`].
///
/// [`advance`]: SequenceCursor::advance
/// [`retreat`]: SequenceCursor::retreat
/// [`jump_to`]: SequenceCursor::jump_to
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SequenceCursor {
    sequence: ImageSequence,
    index: Option<usize>,
}

impl SequenceCursor {
    /// Creates a cursor over `sequence`, positioned at `preferred_index`
    /// clamped into range. A zero-length sequence yields an empty cursor.
    #[must_use]
    pub fn new(sequence: ImageSequence, preferred_index: usize) -> Self {
        let index = if sequence.is_empty() {
            None
        } else {
            Some(preferred_index.min(sequence.len() - 1))
        };
        Self { sequence, index }
    }

    /// Returns the currently selected entry, or `None` when empty.
    #[must_use]
    pub fn current(&self) -> Option<&ImageEntry> {
        self.index.and_then(|index| self.sequence.get(index))
    }

    /// Steps forward and returns the newly selected entry.
    ///
    /// At the last index the position is unchanged and
    /// [`StepOutcome::BoundaryReached`] reports the last boundary.
    pub fn advance(&mut self) -> StepOutcome {
        let Some(index) = self.index else {
            return StepOutcome::NoSelection;
        };
        if index + 1 >= self.sequence.len() {
            return StepOutcome::BoundaryReached(Boundary::Last);
        }
        self.index = Some(index + 1);
        self.current()
            .cloned()
            .map_or(StepOutcome::NoSelection, StepOutcome::Moved)
    }

    /// Steps backward and returns the newly selected entry.
    ///
    /// At index 0 the position is unchanged and
    /// [`StepOutcome::BoundaryReached`] reports the first boundary.
    pub fn retreat(&mut self) -> StepOutcome {
        let Some(index) = self.index else {
            return StepOutcome::NoSelection;
        };
        if index == 0 {
            return StepOutcome::BoundaryReached(Boundary::First);
        }
        self.index = Some(index - 1);
        self.current()
            .cloned()
            .map_or(StepOutcome::NoSelection, StepOutcome::Moved)
    }

    /// Moves directly to `index`, clamped into range.
    ///
    /// Returns the entry at the new position, or `None` when the cursor is
    /// empty (in which case nothing changes).
    pub fn jump_to(&mut self, index: usize) -> Option<&ImageEntry> {
        if self.sequence.is_empty() {
            return None;
        }
        self.index = Some(index.min(self.sequence.len() - 1));
        self.current()
    }

    /// Checks if the cursor is at the first entry.
    #[must_use]
    pub fn is_at_first(&self) -> bool {
        matches!(self.index, Some(0))
    }

    /// Checks if the cursor is at the last entry.
    #[must_use]
    pub fn is_at_last(&self) -> bool {
        matches!(self.index, Some(index) if index + 1 == self.sequence.len())
    }

    /// Returns the current index if positioned.
    #[must_use]
    pub fn index(&self) -> Option<usize> {
        self.index
    }

    /// Returns the underlying sequence.
    #[must_use]
    pub fn sequence(&self) -> &ImageSequence {
        &self.sequence
    }

    /// Returns the total number of entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.sequence.len()
    }

    /// Checks if the cursor holds no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.sequence.is_empty()
    }
}

impl Default for SequenceCursor {
    fn default() -> Self {
        Self::new(ImageSequence::new(), 0)
    }
}

/// Navigation state information for UI rendering.
///
/// A snapshot of the cursor, so the viewer can render navigation controls
/// without direct access to the sequence.
// Allow excessive bools: read-only UI snapshot with orthogonal capability flags.
#[allow(clippy::struct_excessive_bools)]
#[derive(Debug, Clone, Copy, Default)]
pub struct NavigationInfo {
    /// Whether there is a next entry to navigate to.
    pub has_next: bool,
    /// Whether there is a previous entry to navigate to.
    pub has_previous: bool,
    /// Whether the current entry is the first in the sequence.
    pub at_first: bool,
    /// Whether the current entry is the last in the sequence.
    pub at_last: bool,
    /// Current position in the sequence (0-indexed), if set.
    pub current_index: Option<usize>,
    /// Total number of entries in the sequence.
    pub total_count: usize,
}

/// Manages navigation through the images of one folder.
///
/// This component encapsulates the scanned sequence and the cursor,
/// providing a single source of truth for the current selection. Opening a
/// new folder or file replaces both together; a failed scan leaves the
/// previous state untouched.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ImageNavigator {
    cursor: SequenceCursor,
}

impl ImageNavigator {
    /// Creates a new empty `ImageNavigator`.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Scans `directory` and starts at the first entry.
    ///
    /// # Errors
    ///
    /// Returns [`Error::DirectoryUnreadable`] if the directory cannot be
    /// listed; the previous sequence and position stay untouched.
    pub fn open_directory(&mut self, directory: &Path) -> Result<()> {
        let sequence = directory_scanner::scan(directory)?;
        self.cursor = SequenceCursor::new(sequence, 0);
        Ok(())
    }

    /// Scans the directory containing `file` and starts at that file.
    ///
    /// When the file itself is not part of the scan result (deleted between
    /// selection and scan, unsupported, hidden), the cursor starts at the
    /// first entry instead.
    ///
    /// # Errors
    ///
    /// Returns [`Error::DirectoryUnreadable`] if the path has no parent
    /// directory or the parent cannot be listed; the previous sequence and
    /// position stay untouched.
    pub fn open_file(&mut self, file: &Path) -> Result<()> {
        let parent = file.parent().ok_or_else(|| {
            Error::DirectoryUnreadable(format!("{}: no parent directory", file.display()))
        })?;
        let sequence = directory_scanner::scan(parent)?;
        let preferred = sequence.position_of(file).unwrap_or(0);
        self.cursor = SequenceCursor::new(sequence, preferred);
        Ok(())
    }

    /// Steps to the next entry. See [`SequenceCursor::advance`].
    pub fn advance(&mut self) -> StepOutcome {
        self.cursor.advance()
    }

    /// Steps to the previous entry. See [`SequenceCursor::retreat`].
    pub fn retreat(&mut self) -> StepOutcome {
        self.cursor.retreat()
    }

    /// Moves directly to `index`, clamped into range.
    pub fn jump_to(&mut self, index: usize) -> Option<&ImageEntry> {
        self.cursor.jump_to(index)
    }

    /// Returns the currently selected entry, if any.
    #[must_use]
    pub fn current(&self) -> Option<&ImageEntry> {
        self.cursor.current()
    }

    /// Returns every entry of the current scan, in scan order.
    ///
    /// This doubles as the folder preview listing, so the preview and
    /// navigation always show identical entries.
    #[must_use]
    pub fn entries(&self) -> &ImageSequence {
        self.cursor.sequence()
    }

    /// Checks if the current entry is the first in the sequence.
    #[must_use]
    pub fn is_at_first(&self) -> bool {
        self.cursor.is_at_first()
    }

    /// Checks if the current entry is the last in the sequence.
    #[must_use]
    pub fn is_at_last(&self) -> bool {
        self.cursor.is_at_last()
    }

    /// Returns the total number of entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cursor.len()
    }

    /// Checks if no entries are loaded.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cursor.is_empty()
    }

    /// Returns the current index, if set.
    #[must_use]
    pub fn current_index(&self) -> Option<usize> {
        self.cursor.index()
    }

    /// Returns a snapshot of the current navigation state for UI rendering.
    #[must_use]
    pub fn navigation_info(&self) -> NavigationInfo {
        NavigationInfo {
            has_next: self.current_index().is_some() && !self.is_at_last(),
            has_previous: self.current_index().is_some() && !self.is_at_first(),
            at_first: self.is_at_first(),
            at_last: self.is_at_last(),
            current_index: self.current_index(),
            total_count: self.len(),
        }
    }
}
