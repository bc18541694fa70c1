//! Wizard lifecycle: transitions, write-through persistence, restore.

use std::path::PathBuf;

use compass_engine::{App, MemoryStatePort, Step, UiOptions, catalog};

use crate::common::{advance_to, memory_app};

#[test]
fn transitions_respect_the_edges() {
    let (mut app, _port) = memory_app();
    assert_eq!(app.step(), Step::Landing);

    app.retreat();
    assert_eq!(app.step(), Step::Landing);

    advance_to(&mut app, 5);
    assert_eq!(app.step(), Step::Results);
    app.advance();
    assert_eq!(app.step(), Step::Results);

    app.retreat();
    assert_eq!(app.step(), Step::Practices);
}

#[test]
fn every_edit_is_persisted_immediately() {
    let (mut app, port) = memory_app();
    app.start();

    let before = port.save_count();
    app.adjust_selected(1);
    app.select_next_pillar(); // cursor move: presentation only, no save
    app.adjust_selected(-1);
    assert_eq!(port.save_count(), before + 2);

    let stored = port.stored().unwrap();
    assert_eq!(stored.step, 1);
    assert_eq!(stored.data[catalog()[0].id].current, 6);
    assert_eq!(stored.data[catalog()[1].id].current, 4);
}

#[test]
fn a_second_session_resumes_where_the_first_left_off() {
    let (mut app, port) = memory_app();
    advance_to(&mut app, 3);
    app.adjust_selected(2); // importance of the first pillar -> 5
    drop(app);

    let resumed = App::with_port(
        Box::new(port),
        UiOptions::default(),
        PathBuf::from("/tmp"),
    );
    assert_eq!(resumed.step(), Step::Importance);
    assert_eq!(
        resumed.store().record(catalog()[0].id).unwrap().importance,
        5
    );
}

#[test]
fn confirmed_reset_clears_the_persisted_state() {
    let (mut app, port) = memory_app();
    advance_to(&mut app, 4);
    app.toggle_selected_practice();
    assert!(port.stored().is_some());

    app.request_reset();
    app.confirm_reset();
    assert!(port.stored().is_none());
    assert_eq!(app.step(), Step::Landing);

    // A fresh session after the reset starts from scratch.
    let fresh = App::with_port(
        Box::new(MemoryStatePort::new()),
        UiOptions::default(),
        PathBuf::from("/tmp"),
    );
    assert_eq!(fresh.step(), Step::Landing);
    assert_eq!(fresh.store(), app.store());
}
