//! Report export through the app facade.

use std::fs;
use std::path::PathBuf;

use compass_engine::{App, MemoryStatePort, Step, UiOptions};

use crate::common::{advance_to, memory_app};

#[test]
fn export_writes_a_markdown_plan() {
    let report_dir = tempfile::tempdir().unwrap();
    let port = MemoryStatePort::new();
    let mut app = App::with_port(
        Box::new(port),
        UiOptions::default(),
        report_dir.path().to_path_buf(),
    );
    advance_to(&mut app, 4);
    app.toggle_selected_practice();
    app.advance();
    assert_eq!(app.step(), Step::Results);

    app.export_report();
    let status = app.status().expect("export sets a status");
    assert!(status.starts_with("Report written to"), "status: {status}");

    let entries: Vec<_> = fs::read_dir(report_dir.path())
        .unwrap()
        .map(|e| e.unwrap().path())
        .collect();
    assert_eq!(entries.len(), 1);
    let content = fs::read_to_string(&entries[0]).unwrap();
    assert!(content.starts_with("# Compass Plan"));
    assert!(content.contains("## High Priority"));
    let first = compass_types::catalog()[0];
    assert!(content.contains(first.practices[0]));
}

#[test]
fn export_is_only_available_on_the_results_screen() {
    let report_dir = tempfile::tempdir().unwrap();
    let port = MemoryStatePort::new();
    let mut app = App::with_port(
        Box::new(port),
        UiOptions::default(),
        report_dir.path().to_path_buf(),
    );
    advance_to(&mut app, 2);

    app.export_report();
    assert!(app.status().is_none());
    assert_eq!(fs::read_dir(report_dir.path()).unwrap().count(), 0);
}

#[test]
fn failed_export_leaves_the_session_intact_and_allows_retry() {
    // Point the report dir at a path that cannot be a directory.
    let blocker = tempfile::NamedTempFile::new().unwrap();
    let bad_dir: PathBuf = blocker.path().to_path_buf();

    let (mut app, port) = memory_app();
    advance_to(&mut app, 5);
    let before = port.stored();

    let mut app = App::with_port(
        Box::new(MemoryStatePort::seeded(before.clone().unwrap())),
        UiOptions::default(),
        bad_dir,
    );
    app.export_report();

    let status = app.status().expect("failure sets a status");
    assert!(status.starts_with("Export failed"), "status: {status}");
    assert_eq!(app.step(), Step::Results);
    // The stored snapshot is untouched by the failed export.
    assert_eq!(app.store().to_records(), before.unwrap().data);
}
