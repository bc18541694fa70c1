//! Key handling: terminal events in, engine operations out.
//!
//! The modal is routed first - while the reset confirmation is open, every
//! other binding is inert. Then a few global keys, then the per-screen
//! bindings.

use crossterm::event::{Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use compass_engine::{App, Modal, Step};

/// Feed one terminal event into the app.
pub fn handle_event(app: &mut App, event: &Event) {
    if let Event::Key(key) = event {
        handle_key(app, *key);
    }
}

fn handle_key(app: &mut App, key: KeyEvent) {
    if key.kind == KeyEventKind::Release {
        return;
    }

    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        app.quit();
        return;
    }

    if app.modal() == Some(Modal::ConfirmReset) {
        match key.code {
            KeyCode::Char('y' | 'Y') | KeyCode::Enter => app.confirm_reset(),
            KeyCode::Char('n' | 'N') | KeyCode::Esc => app.cancel_reset(),
            _ => {}
        }
        return;
    }

    match key.code {
        KeyCode::Char('q') => {
            app.quit();
            return;
        }
        // Reset is offered everywhere past the landing screen, always
        // behind the confirmation modal.
        KeyCode::Char('r') if app.step() != Step::Landing => {
            app.request_reset();
            return;
        }
        _ => {}
    }

    match app.step() {
        Step::Landing => handle_landing(app, key),
        Step::CurrentScores | Step::TargetScores | Step::Importance => {
            handle_adjust_screen(app, key);
        }
        Step::Practices => handle_practices(app, key),
        Step::Results => handle_results(app, key),
    }
}

fn handle_landing(app: &mut App, key: KeyEvent) {
    if matches!(key.code, KeyCode::Enter | KeyCode::Char(' ')) {
        app.start();
    }
}

/// Screens 1-3 share their bindings: rows select a pillar, left/right
/// nudge whichever value the screen edits.
fn handle_adjust_screen(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Up | KeyCode::Char('k') => app.select_prev_pillar(),
        KeyCode::Down | KeyCode::Char('j') => app.select_next_pillar(),
        KeyCode::Left | KeyCode::Char('h') => app.adjust_selected(-1),
        KeyCode::Right | KeyCode::Char('l') => app.adjust_selected(1),
        KeyCode::Enter => app.advance(),
        KeyCode::Esc | KeyCode::Backspace => app.retreat(),
        _ => {}
    }
}

fn handle_practices(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Up | KeyCode::Char('k') => app.select_prev_pillar(),
        KeyCode::Down | KeyCode::Char('j') => app.select_next_pillar(),
        KeyCode::Left | KeyCode::Char('h') | KeyCode::BackTab => app.prev_practice(),
        KeyCode::Right | KeyCode::Char('l') | KeyCode::Tab => app.next_practice(),
        KeyCode::Char(' ') => app.toggle_selected_practice(),
        KeyCode::Enter => app.advance(),
        KeyCode::Esc | KeyCode::Backspace => app.retreat(),
        _ => {}
    }
}

fn handle_results(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Up | KeyCode::Char('k') => app.scroll_results(-1),
        KeyCode::Down | KeyCode::Char('j') => app.scroll_results(1),
        KeyCode::Char('e') => app.export_report(),
        KeyCode::Esc | KeyCode::Backspace => app.retreat(),
        _ => {}
    }
}
