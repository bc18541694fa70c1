//! Filesystem persistence: the real adapter against a temp directory.

use std::fs;
use std::path::PathBuf;

use compass_engine::{
    App, FsStatePort, STATE_FILENAME, SessionSnapshot, StatePort, Step, UiOptions,
};
use compass_types::PillarRecord;

use crate::common::advance_to;

fn fs_app(dir: &std::path::Path) -> App {
    App::with_port(
        Box::new(FsStatePort::new(dir.join(STATE_FILENAME))),
        UiOptions::default(),
        dir.to_path_buf(),
    )
}

#[test]
fn session_round_trips_through_the_filesystem() {
    let dir = tempfile::tempdir().unwrap();

    let mut app = fs_app(dir.path());
    advance_to(&mut app, 2);
    app.adjust_selected(1);
    drop(app);

    let resumed = fs_app(dir.path());
    assert_eq!(resumed.step(), Step::TargetScores);
    assert_eq!(
        resumed
            .store()
            .record(compass_types::catalog()[0].id)
            .unwrap()
            .target,
        9
    );
}

#[test]
fn corrupted_state_file_starts_a_fresh_session() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join(STATE_FILENAME), "step: not json at all").unwrap();

    let app = fs_app(dir.path());
    assert_eq!(app.step(), Step::Landing);
    assert_eq!(app.store(), &compass_engine::AssessmentStore::new());
}

#[test]
fn truncated_state_file_starts_a_fresh_session() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join(STATE_FILENAME), r#"{"step": 3, "data"#).unwrap();

    let app = fs_app(dir.path());
    assert_eq!(app.step(), Step::Landing);
}

#[test]
fn out_of_range_step_is_treated_as_corrupt() {
    let dir = tempfile::tempdir().unwrap();
    let port = FsStatePort::new(dir.path().join(STATE_FILENAME));
    port.save(&SessionSnapshot {
        step: 77,
        data: std::collections::BTreeMap::new(),
    })
    .unwrap();

    let app = fs_app(dir.path());
    assert_eq!(app.step(), Step::Landing);
}

#[test]
fn snapshot_wire_format_is_step_plus_data() {
    // The on-disk contract: a single record `{ step, data }`.
    let dir = tempfile::tempdir().unwrap();
    let mut app = fs_app(dir.path());
    advance_to(&mut app, 1);
    app.adjust_selected(1);

    let raw = fs::read_to_string(dir.path().join(STATE_FILENAME)).unwrap();
    let value: serde_json::Value = serde_json::from_str(&raw).unwrap();
    assert_eq!(value["step"], 1);
    let first = compass_types::catalog()[0].id;
    assert_eq!(value["data"][first]["current"], 6);
    assert_eq!(value["data"][first]["target"], 8);
    assert_eq!(value["data"][first]["importance"], 3);
    assert!(value["data"][first]["practices"].is_array());
}

#[test]
fn partial_data_is_normalized_against_the_catalog() {
    let dir = tempfile::tempdir().unwrap();
    let port = FsStatePort::new(dir.path().join(STATE_FILENAME));

    let mut data = std::collections::BTreeMap::new();
    data.insert(
        "work".to_owned(),
        PillarRecord {
            current: 1,
            target: 10,
            importance: 5,
            practices: vec!["Mentoring".to_owned()],
        },
    );
    data.insert("left_over_from_v0".to_owned(), PillarRecord::default());
    port.save(&SessionSnapshot { step: 4, data }).unwrap();

    let app = fs_app(dir.path());
    assert_eq!(app.step(), Step::Practices);
    assert_eq!(app.store().record("work").unwrap().target, 10);
    assert!(app.store().record("left_over_from_v0").is_none());
    assert_eq!(
        app.store().record("play").unwrap(),
        &PillarRecord::default()
    );
}

#[test]
fn clearing_state_removes_the_file() {
    let dir = tempfile::tempdir().unwrap();
    let path: PathBuf = dir.path().join(STATE_FILENAME);

    let mut app = fs_app(dir.path());
    app.start();
    assert!(path.exists());

    app.request_reset();
    app.confirm_reset();
    assert!(!path.exists());
}
