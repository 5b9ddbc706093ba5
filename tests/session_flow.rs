//! End-to-end flows: discovery, session events, and label files on disk.

use std::fs;
use std::path::Path;

use boxmark::config::Config;
use boxmark::geom::Coord;
use boxmark::layout::DatasetLayout;
use boxmark::Session;

mod common;
use common::write_bmp;

fn session_over(root: &Path) -> Session {
    Session::new(
        Config::default(),
        DatasetLayout::under_root(root),
        (640.0, 640.0),
    )
}

fn drag(session: &mut Session, a: (f64, f64), b: (f64, f64)) -> bool {
    session
        .on_drag(Coord::new(a.0, a.1), Coord::new(b.0, b.1), (640.0, 640.0))
        .expect("drag should not fail")
        .is_some()
}

#[test]
fn discover_lists_images_sorted_with_dimensions() {
    let temp = tempfile::tempdir().expect("create temp dir");
    let images = temp.path().join("images");

    write_bmp(&images.join("img_b.bmp"), 12, 8);
    write_bmp(&images.join("img_a.bmp"), 20, 10);
    write_bmp(&images.join("nested/img_c.bmp"), 6, 6);
    fs::write(images.join("notes.txt"), "not an image").expect("write stray file");

    let layout = DatasetLayout::under_root(temp.path());
    let entries = layout.discover().expect("discover images");

    assert_eq!(entries.len(), 3);
    assert!(entries[0].path.ends_with("img_a.bmp"));
    assert_eq!(entries[0].dimensions(), (20, 10));
    assert!(entries[1].path.ends_with("img_b.bmp"));
    assert!(entries[2].path.ends_with("nested/img_c.bmp"));
}

#[test]
fn discover_skips_files_with_unreadable_headers() {
    let temp = tempfile::tempdir().expect("create temp dir");
    let images = temp.path().join("images");

    write_bmp(&images.join("good.bmp"), 16, 16);
    fs::write(images.join("broken.png"), b"definitely not a png").expect("write broken image");

    let layout = DatasetLayout::under_root(temp.path());
    let entries = layout.discover().expect("discover images");

    assert_eq!(entries.len(), 1);
    assert!(entries[0].path.ends_with("good.bmp"));
}

#[test]
fn labeling_pass_over_a_discovered_directory() {
    let temp = tempfile::tempdir().expect("create temp dir");
    let images = temp.path().join("images");

    write_bmp(&images.join("img_a.bmp"), 640, 640);
    write_bmp(&images.join("img_b.bmp"), 640, 640);

    let layout = DatasetLayout::under_root(temp.path());
    let entries = layout.discover().expect("discover images");
    let mut session = session_over(temp.path());

    // Annotate the first image, skim past the second, close.
    session
        .open(&entries[0].path, entries[0].dimensions())
        .expect("open first image");
    assert!(drag(&mut session, (100.0, 100.0), (300.0, 200.0)));

    session
        .navigate(&entries[1].path, entries[1].dimensions())
        .expect("navigate to second image");
    assert!(session.current_boxes().is_empty());

    session.close().expect("close session");

    assert!(session.has_labels(&entries[0].path));
    assert!(!session.has_labels(&entries[1].path));

    let labels = fs::read_to_string(temp.path().join("labels/img_a.txt")).expect("read labels");
    assert_eq!(labels.lines().count(), 1);
}

#[test]
fn annotations_survive_a_session_restart() {
    let temp = tempfile::tempdir().expect("create temp dir");
    let images = temp.path().join("images");
    write_bmp(&images.join("img_a.bmp"), 640, 640);
    let image = images.join("img_a.bmp");

    {
        let mut session = session_over(temp.path());
        session.open(&image, (640, 640)).expect("open image");
        assert!(drag(&mut session, (10.0, 10.0), (200.0, 150.0)));
        assert!(drag(&mut session, (300.0, 300.0), (400.0, 500.0)));
        session.close().expect("close session");
    }

    let mut session = session_over(temp.path());
    let warnings = session.open(&image, (640, 640)).expect("reopen image");
    assert!(warnings.is_empty());
    assert_eq!(session.current_boxes().len(), 2);
}

#[test]
fn hand_edited_file_loads_its_good_lines() {
    let temp = tempfile::tempdir().expect("create temp dir");
    let labels = temp.path().join("labels");
    fs::create_dir_all(&labels).expect("create labels dir");
    fs::write(
        labels.join("img_a.txt"),
        "0 0.5 0.5 0.25 0.25\n\
         1 0.25 0.25 0.1 0.1\n\
         oops not numbers here\n\
         2 0.75 0.75 0.2 0.2\n",
    )
    .expect("write label file");

    let mut session = session_over(temp.path());
    let warnings = session
        .open(temp.path().join("images/img_a.bmp"), (640, 640))
        .expect("open image");

    assert_eq!(warnings.len(), 1);
    assert_eq!(warnings[0].line, 3);
    assert_eq!(session.current_boxes().len(), 3);

    // Clearing after the tolerant load rewrites a clean file.
    session.on_clear().expect("clear");
    let rewritten = fs::read_to_string(labels.join("img_a.txt")).expect("read rewritten file");
    assert!(rewritten.is_empty());
}

#[test]
fn grid_indicator_tracks_label_content() {
    let temp = tempfile::tempdir().expect("create temp dir");
    let images = temp.path().join("images");
    write_bmp(&images.join("img_a.bmp"), 640, 640);
    write_bmp(&images.join("img_b.bmp"), 640, 640);

    let mut session = session_over(temp.path());
    let image_a = images.join("img_a.bmp");
    let image_b = images.join("img_b.bmp");

    assert!(!session.has_labels(&image_a));

    session.open(&image_a, (640, 640)).expect("open image a");
    assert!(drag(&mut session, (50.0, 50.0), (150.0, 150.0)));
    assert!(session.has_labels(&image_a));

    // Undoing the only box leaves an empty file, which counts as unlabeled.
    session.on_undo().expect("undo");
    assert!(!session.has_labels(&image_a));
    assert!(!session.has_labels(&image_b));
}
