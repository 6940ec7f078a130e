// SPDX-License-Identifier: MPL-2.0
//! End-to-end scenarios: choose a path, scan, navigate to the boundaries.

use filmstrip::image_navigation::{Boundary, ImageNavigator, StepOutcome};
use filmstrip::session::{DirectAccess, FsImageLoader, Selection, ViewerEvent, ViewerSession};
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::tempdir;

// Smallest valid PNG: 1x1 transparent RGBA pixel.
const TINY_PNG: &[u8] = b"\x89\x50\x4e\x47\x0d\x0a\x1a\x0a\x00\x00\x00\x0d\x49\x48\x44\x52\
\x00\x00\x00\x01\x00\x00\x00\x01\x08\x06\x00\x00\x00\x1f\x15\xc4\x89\x00\x00\x00\x0b\x49\x44\x41\
\x54\x78\x9c\x63\x60\x00\x02\x00\x00\x05\x00\x01\x7a\x5e\xab\x3f\x00\x00\x00\x00\x49\x45\x4e\x44\
\xae\x42\x60\x82";

fn create_png(dir: &Path, name: &str) -> PathBuf {
    let path = dir.join(name);
    fs::write(&path, TINY_PNG).expect("failed to write test image");
    path
}

fn create_file(dir: &Path, name: &str, contents: &[u8]) -> PathBuf {
    let path = dir.join(name);
    fs::write(&path, contents).expect("failed to write test file");
    path
}

#[test]
fn folder_selection_walks_every_image_and_stops_at_the_end() {
    let temp_dir = tempdir().expect("failed to create temp dir");
    create_png(temp_dir.path(), "a.png");
    create_png(temp_dir.path(), "b.png");
    create_png(temp_dir.path(), "c.png");
    create_file(temp_dir.path(), "notes.txt", b"not an image");
    create_file(temp_dir.path(), ".thumb.png", TINY_PNG);

    let mut session = ViewerSession::new(FsImageLoader, DirectAccess);
    let event = session
        .open(&Selection::Directory(temp_dir.path().to_path_buf()))
        .expect("open failed");

    // Hidden and non-image entries are filtered out.
    assert_eq!(session.navigator().len(), 3);
    match event {
        ViewerEvent::ImageSelected { image, .. } => {
            let image = image.expect("png should decode");
            assert_eq!((image.width(), image.height()), (1, 1));
        }
        other => panic!("expected ImageSelected, got {other:?}"),
    }

    // Two steps forward reach the last entry, the third refuses.
    assert!(matches!(
        session.show_next(),
        ViewerEvent::ImageSelected { .. }
    ));
    assert!(matches!(
        session.show_next(),
        ViewerEvent::ImageSelected { .. }
    ));
    assert!(matches!(
        session.show_next(),
        ViewerEvent::BoundaryHit(Boundary::Last)
    ));
    assert!(session.navigator().is_at_last());
}

#[test]
fn file_selection_seeds_navigation_among_siblings() {
    let temp_dir = tempdir().expect("failed to create temp dir");
    create_png(temp_dir.path(), "a.jpg");
    let picked = create_png(temp_dir.path(), "b.jpg");
    create_png(temp_dir.path(), "c.jpg");

    let mut nav = ImageNavigator::new();
    nav.open_file(&picked).expect("open failed");

    assert_eq!(
        nav.current().map(|entry| entry.path().to_path_buf()),
        Some(picked)
    );

    // One neighbor forward, then the last boundary; one neighbor back past
    // the start, then the first boundary.
    let forward = nav.len() - 1 - nav.current_index().expect("positioned");
    for _ in 0..forward {
        assert!(matches!(nav.advance(), StepOutcome::Moved(_)));
    }
    assert_eq!(nav.advance(), StepOutcome::BoundaryReached(Boundary::Last));

    for _ in 0..nav.current_index().expect("positioned") {
        assert!(matches!(nav.retreat(), StepOutcome::Moved(_)));
    }
    assert_eq!(nav.retreat(), StepOutcome::BoundaryReached(Boundary::First));
    assert!(nav.is_at_first());
    assert!(nav.current().is_some());
}

#[test]
fn corrupt_image_stays_navigable() {
    let temp_dir = tempdir().expect("failed to create temp dir");
    create_png(temp_dir.path(), "a.png");
    create_file(temp_dir.path(), "broken.png", b"garbage bytes");
    create_png(temp_dir.path(), "c.png");

    let mut session = ViewerSession::new(FsImageLoader, DirectAccess);
    session
        .open(&Selection::Directory(temp_dir.path().to_path_buf()))
        .expect("open failed");

    // All three entries count, whatever their bytes hold.
    assert_eq!(session.navigator().len(), 3);

    let mut decoded = 0;
    let mut failed = 0;
    loop {
        match session.current_event() {
            ViewerEvent::ImageSelected { image: Ok(_), .. } => decoded += 1,
            ViewerEvent::ImageSelected { image: Err(_), .. } => failed += 1,
            other => panic!("expected ImageSelected, got {other:?}"),
        }
        if let ViewerEvent::BoundaryHit(Boundary::Last) = session.show_next() {
            break;
        }
    }

    assert_eq!(decoded, 2);
    assert_eq!(failed, 1);
}

#[test]
fn new_selection_replaces_the_previous_sequence() {
    let first_dir = tempdir().expect("failed to create temp dir");
    create_png(first_dir.path(), "a.png");
    create_png(first_dir.path(), "b.png");
    let second_dir = tempdir().expect("failed to create temp dir");
    create_png(second_dir.path(), "z.png");

    let mut session = ViewerSession::new(FsImageLoader, DirectAccess);
    session
        .open(&Selection::Directory(first_dir.path().to_path_buf()))
        .expect("open failed");
    assert_eq!(session.navigator().len(), 2);

    session
        .open(&Selection::Directory(second_dir.path().to_path_buf()))
        .expect("open failed");
    assert_eq!(session.navigator().len(), 1);
    assert!(session.navigator().is_at_first());
    assert!(session.navigator().is_at_last());
}

#[test]
fn failed_scan_keeps_the_open_sequence_usable() {
    let temp_dir = tempdir().expect("failed to create temp dir");
    create_png(temp_dir.path(), "a.png");
    create_png(temp_dir.path(), "b.png");

    let mut session = ViewerSession::new(FsImageLoader, DirectAccess);
    session
        .open(&Selection::Directory(temp_dir.path().to_path_buf()))
        .expect("open failed");

    let missing = temp_dir.path().join("gone");
    session
        .open(&Selection::Directory(missing))
        .expect_err("missing directory should fail");

    // The previous session state is still there and still navigates.
    assert_eq!(session.navigator().len(), 2);
    assert!(matches!(
        session.show_next(),
        ViewerEvent::ImageSelected { .. }
    ));
}
