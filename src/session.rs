// SPDX-License-Identifier: MPL-2.0
//! Collaborator ports and the viewing session that orchestrates them.
//!
//! The session owns an [`ImageNavigator`] and turns path selections and
//! cursor steps into [`ViewerEvent`] values for a presentation layer to
//! render. Ports use domain types only, so any front-end (GUI dialog, CLI,
//! test double) can plug in.

use crate::directory_scanner::ImageEntry;
use crate::error::{DecodeError, Result};
use crate::image_navigation::{Boundary, ImageNavigator, NavigationInfo, StepOutcome};
use crate::media::{self, ImageData};
use std::path::{Path, PathBuf};

/// A resolved user selection from the path chooser.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Selection {
    File(PathBuf),
    Directory(PathBuf),
}

/// Port for the native file/folder picker.
///
/// Returns `None` when the user cancelled; no other contract is assumed.
pub trait PathChooser {
    fn choose(&mut self) -> Option<Selection>;
}

/// Port for decoding a displayable image from a path.
///
/// Implementations must be `Send + Sync` for use across threads.
pub trait ImageLoader: Send + Sync {
    /// Loads and decodes the image at `path`.
    ///
    /// # Errors
    ///
    /// Returns a [`DecodeError`] if the file cannot be read or its bytes
    /// cannot be decoded.
    fn load(&self, path: &Path) -> std::result::Result<ImageData, DecodeError>;

    /// Checks if a file path is a supported image format.
    ///
    /// This performs a quick check based on file extension only,
    /// without reading the file contents.
    fn supports(&self, path: &Path) -> bool;
}

/// Filesystem adapter for [`ImageLoader`] built on the `image` crate.
#[derive(Debug, Clone, Copy, Default)]
pub struct FsImageLoader;

impl ImageLoader for FsImageLoader {
    fn load(&self, path: &Path) -> std::result::Result<ImageData, DecodeError> {
        media::image::load_image(path)
    }

    fn supports(&self, path: &Path) -> bool {
        media::is_supported_image(path)
    }
}

/// Port for scoped filesystem access to a user-chosen folder.
///
/// Sandboxed platforms hand out per-folder grants that must be released
/// exactly once. The grant returned here releases when dropped, so every
/// exit path of a scan (success or failure) releases it.
pub trait FolderAccess {
    /// Requests access to `path` for the lifetime of the returned grant.
    ///
    /// # Errors
    ///
    /// Returns an error when the platform refuses access.
    fn request(&self, path: &Path) -> Result<AccessGrant>;
}

/// RAII guard for a scoped access grant. Releases exactly once, on drop.
pub struct AccessGrant {
    release: Option<Box<dyn FnOnce() + Send>>,
}

impl AccessGrant {
    /// A grant with no release action, for unscoped filesystems.
    #[must_use]
    pub fn unscoped() -> Self {
        Self { release: None }
    }

    /// A grant that runs `release` exactly once when dropped.
    #[must_use]
    pub fn with_release(release: impl FnOnce() + Send + 'static) -> Self {
        Self {
            release: Some(Box::new(release)),
        }
    }
}

impl Drop for AccessGrant {
    fn drop(&mut self) {
        if let Some(release) = self.release.take() {
            release();
        }
    }
}

impl std::fmt::Debug for AccessGrant {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AccessGrant")
            .field("scoped", &self.release.is_some())
            .finish()
    }
}

/// Access implementation for platforms without a sandbox broker.
#[derive(Debug, Clone, Copy, Default)]
pub struct DirectAccess;

impl FolderAccess for DirectAccess {
    fn request(&self, _path: &Path) -> Result<AccessGrant> {
        Ok(AccessGrant::unscoped())
    }
}

/// What the presentation layer renders after a session operation.
#[derive(Debug, Clone)]
pub enum ViewerEvent {
    /// The selection changed: show the entry's display name and the decoded
    /// image, or a textual decode failure. The entry stays navigable either
    /// way.
    ImageSelected {
        entry: ImageEntry,
        image: std::result::Result<ImageData, DecodeError>,
    },
    /// Movement was refused at an edge; show the first/last notice.
    BoundaryHit(Boundary),
    /// Nothing is open; prompt for a folder or file.
    NothingOpen,
}

/// One viewing session: a navigator plus the collaborators it drives.
///
/// All operations take `&mut self`, so cursor operations are serialized per
/// session. Opening a new selection rebuilds sequence and cursor together.
pub struct ViewerSession<L, A> {
    navigator: ImageNavigator,
    loader: L,
    access: A,
}

impl<L: ImageLoader, A: FolderAccess> ViewerSession<L, A> {
    /// Creates a session with no open folder.
    pub fn new(loader: L, access: A) -> Self {
        Self {
            navigator: ImageNavigator::new(),
            loader,
            access,
        }
    }

    /// Asks the chooser for a selection and opens it.
    ///
    /// Returns `None` when the chooser was cancelled.
    pub fn open_from<C: PathChooser>(&mut self, chooser: &mut C) -> Option<Result<ViewerEvent>> {
        let selection = chooser.choose()?;
        Some(self.open(&selection))
    }

    /// Applies a chooser selection: scans the folder (or the file's folder)
    /// and selects the starting entry.
    ///
    /// Directory selections run under a scoped access grant that is released
    /// once the scan has completed or failed.
    ///
    /// # Errors
    ///
    /// Returns [`crate::error::Error::DirectoryUnreadable`] when the scan
    /// fails; the previously open sequence stays untouched.
    pub fn open(&mut self, selection: &Selection) -> Result<ViewerEvent> {
        match selection {
            Selection::Directory(path) => {
                let _grant = self.access.request(path)?;
                self.navigator.open_directory(path)?;
            }
            Selection::File(path) => self.navigator.open_file(path)?,
        }
        Ok(self.current_event())
    }

    /// Steps to the next entry and loads it.
    pub fn show_next(&mut self) -> ViewerEvent {
        let outcome = self.navigator.advance();
        self.step_event(outcome)
    }

    /// Steps to the previous entry and loads it.
    pub fn show_previous(&mut self) -> ViewerEvent {
        let outcome = self.navigator.retreat();
        self.step_event(outcome)
    }

    /// Event for the current selection (used right after opening).
    #[must_use]
    pub fn current_event(&self) -> ViewerEvent {
        match self.navigator.current() {
            Some(entry) => self.load_event(entry.clone()),
            None => ViewerEvent::NothingOpen,
        }
    }

    /// Returns the navigator for read access to the sequence and position.
    #[must_use]
    pub fn navigator(&self) -> &ImageNavigator {
        &self.navigator
    }

    /// Returns a snapshot of the current navigation state.
    #[must_use]
    pub fn navigation_info(&self) -> NavigationInfo {
        self.navigator.navigation_info()
    }

    fn step_event(&self, outcome: StepOutcome) -> ViewerEvent {
        match outcome {
            StepOutcome::Moved(entry) => self.load_event(entry),
            StepOutcome::BoundaryReached(boundary) => ViewerEvent::BoundaryHit(boundary),
            StepOutcome::NoSelection => ViewerEvent::NothingOpen,
        }
    }

    fn load_event(&self, entry: ImageEntry) -> ViewerEvent {
        let image = self.loader.load(entry.path());
        if let Err(err) = &image {
            log::warn!("failed to decode {}: {err}", entry.display_name());
        }
        ViewerEvent::ImageSelected { entry, image }
    }
}
