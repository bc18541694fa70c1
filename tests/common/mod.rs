//! Shared helpers for the integration suite.

use std::path::PathBuf;

use compass_engine::{App, MemoryStatePort, UiOptions};

/// An app wired to an in-memory state port, plus a handle to inspect what
/// it persisted.
pub fn memory_app() -> (App, MemoryStatePort) {
    let port = MemoryStatePort::new();
    let app = App::with_port(
        Box::new(port.clone()),
        UiOptions::default(),
        PathBuf::from("/tmp"),
    );
    (app, port)
}

/// Walk the app forward to the given step index via the public
/// transitions.
pub fn advance_to(app: &mut App, step_index: u8) {
    app.start();
    while app.step().index() < step_index {
        app.advance();
    }
}
