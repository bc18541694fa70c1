//! Core engine for Compass - wizard state machine and orchestration.
//!
//! This crate contains the [`App`] state machine without TUI dependencies:
//! the assessment store, the step sequencer, the priority engine, the
//! persistence port and the report exporter. The TUI renders from it and
//! feeds key presses back into it; nothing here knows about terminals.

use std::path::PathBuf;
use std::time::{Duration, Instant};

mod config;
mod persistence;
mod priority;
mod report;
mod store;
mod wizard;

pub use config::{AppConfig, CompassConfig, ConfigError, UiOptions, config_path};
pub use persistence::{
    DataDir, DataDirSource, FsStatePort, MemoryStatePort, STATE_FILENAME, SessionSnapshot,
    StatePort, data_dir, ensure_secure_dir,
};
pub use priority::{ProcessedPillar, rank_pillars};
pub use report::{ReportError, render_report, write_report};
pub use store::AssessmentStore;
pub use wizard::{Step, WizardSession};

// Re-export domain types for consumers that only link the engine.
pub use compass_types::{
    PILLAR_COUNT, PillarDefinition, PillarRecord, PriorityLevel, ScoreKind, catalog, find_pillar,
};

/// How long a transient status message stays on screen.
const STATUS_TTL: Duration = Duration::from_secs(5);

/// Blocking overlays. Only one exists today; it is an enum so the render
/// and input layers dispatch exhaustively.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Modal {
    /// "Really wipe all progress?" - reset is destructive and must be
    /// explicitly confirmed.
    ConfirmReset,
}

/// Cursor state for the data-collection and results screens.
///
/// Purely presentational: which pillar row is highlighted, which practice
/// column, how far the results are scrolled. Never persisted.
#[derive(Debug, Clone, Copy, Default)]
pub struct ViewState {
    pub row: usize,
    pub practice_col: usize,
    pub results_scroll: u16,
}

#[derive(Debug)]
struct StatusLine {
    message: String,
    shown_at: Instant,
}

/// The application facade the TUI talks to.
///
/// Owns the wizard session and the state port, and applies write-through
/// persistence: every mutation snapshots the session and hands it to the
/// port. Save failures are logged and the session carries on in memory.
pub struct App {
    session: WizardSession,
    port: Box<dyn StatePort>,
    ui_options: UiOptions,
    report_dir: PathBuf,
    view: ViewState,
    status: Option<StatusLine>,
    modal: Option<Modal>,
    should_quit: bool,
}

impl App {
    /// Construct the app against the real filesystem: config from
    /// `~/.compass/config.toml`, session state under the data directory.
    #[must_use]
    pub fn new() -> Self {
        let config = match CompassConfig::load() {
            Ok(config) => config.unwrap_or_default(),
            Err(err) => {
                tracing::warn!("Ignoring unusable config: {err}");
                CompassConfig::default()
            }
        };

        let base = match config.data_dir_override() {
            Some(path) => DataDir {
                path,
                source: DataDirSource::System,
            },
            None => data_dir(),
        };
        if matches!(base.source, DataDirSource::Fallback) {
            tracing::warn!(
                "No home directory found; keeping session state in {}",
                base.path.display()
            );
        }

        let port = FsStatePort::new(base.join(STATE_FILENAME));
        let report_dir = config.report_dir_override().unwrap_or(base.path);
        Self::with_port(Box::new(port), config.ui_options(), report_dir)
    }

    /// Construct the app against an injected state port. This is the seam
    /// tests use to run the whole wizard without a filesystem.
    #[must_use]
    pub fn with_port(port: Box<dyn StatePort>, ui_options: UiOptions, report_dir: PathBuf) -> Self {
        let mut status = None;
        let session = match port.load().and_then(WizardSession::from_snapshot) {
            Some(session) => {
                status = Some(StatusLine {
                    message: "Resumed your saved assessment.".to_owned(),
                    shown_at: Instant::now(),
                });
                session
            }
            None => WizardSession::new(),
        };

        Self {
            session,
            port,
            ui_options,
            report_dir,
            view: ViewState::default(),
            status,
            modal: None,
            should_quit: false,
        }
    }

    // ------------------------------------------------------------------
    // Read side
    // ------------------------------------------------------------------

    #[must_use]
    pub fn step(&self) -> Step {
        self.session.step()
    }

    #[must_use]
    pub fn store(&self) -> &AssessmentStore {
        self.session.store()
    }

    #[must_use]
    pub fn view(&self) -> ViewState {
        self.view
    }

    #[must_use]
    pub fn ui_options(&self) -> UiOptions {
        self.ui_options
    }

    #[must_use]
    pub fn modal(&self) -> Option<Modal> {
        self.modal
    }

    #[must_use]
    pub fn status(&self) -> Option<&str> {
        self.status.as_ref().map(|s| s.message.as_str())
    }

    #[must_use]
    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// The highlighted pillar on the collection screens.
    #[must_use]
    pub fn selected_pillar(&self) -> &'static PillarDefinition {
        &catalog()[self.view.row]
    }

    /// Wizard progress as a percentage, for the header bar. The landing
    /// screen is 0; screens 1-5 map linearly onto 0-100.
    #[must_use]
    pub fn progress_percent(&self) -> u8 {
        match self.step().index() {
            0 => 0,
            index => (index - 1) * 25,
        }
    }

    /// Rank the pillars with the priority engine.
    ///
    /// Derived data: recomputed on every call, never cached - the results
    /// screen is always consistent with the store.
    #[must_use]
    pub fn results(&self) -> Vec<ProcessedPillar<'static>> {
        rank_pillars(catalog(), self.session.store())
    }

    // ------------------------------------------------------------------
    // Navigation
    // ------------------------------------------------------------------

    pub fn start(&mut self) {
        if self.modal.is_none() && self.session.start() {
            self.view = ViewState::default();
            self.persist();
        }
    }

    pub fn advance(&mut self) {
        if self.modal.is_none() && self.session.advance() {
            self.view = ViewState {
                row: self.view.row,
                ..ViewState::default()
            };
            self.persist();
        }
    }

    pub fn retreat(&mut self) {
        if self.modal.is_none() && self.session.retreat() {
            self.view = ViewState {
                row: self.view.row,
                ..ViewState::default()
            };
            self.persist();
        }
    }

    pub fn select_next_pillar(&mut self) {
        self.view.row = (self.view.row + 1) % PILLAR_COUNT;
        self.clamp_practice_col();
    }

    pub fn select_prev_pillar(&mut self) {
        self.view.row = self.view.row.checked_sub(1).unwrap_or(PILLAR_COUNT - 1);
        self.clamp_practice_col();
    }

    pub fn next_practice(&mut self) {
        let count = self.selected_pillar().practices.len();
        if count > 0 {
            self.view.practice_col = (self.view.practice_col + 1) % count;
        }
    }

    pub fn prev_practice(&mut self) {
        let count = self.selected_pillar().practices.len();
        if count > 0 {
            self.view.practice_col = self
                .view
                .practice_col
                .checked_sub(1)
                .unwrap_or(count - 1);
        }
    }

    pub fn scroll_results(&mut self, delta: i16) {
        self.view.results_scroll = self
            .view
            .results_scroll
            .saturating_add_signed(delta)
            .min(64);
    }

    fn clamp_practice_col(&mut self) {
        let count = self.selected_pillar().practices.len();
        self.view.practice_col = self.view.practice_col.min(count.saturating_sub(1));
    }

    // ------------------------------------------------------------------
    // Mutations
    // ------------------------------------------------------------------

    /// Adjust the value the active screen edits for the highlighted
    /// pillar. The facade clamps to the slider range (the store itself
    /// does not validate).
    pub fn adjust_selected(&mut self, delta: i8) {
        let id = self.selected_pillar().id;
        match self.step() {
            Step::CurrentScores => self.adjust_score(id, ScoreKind::Current, delta),
            Step::TargetScores => self.adjust_score(id, ScoreKind::Target, delta),
            Step::Importance => self.adjust_importance(id, delta),
            Step::Landing | Step::Practices | Step::Results => return,
        }
        self.persist();
    }

    fn adjust_score(&mut self, id: &str, kind: ScoreKind, delta: i8) {
        let record = self.session.store().record(id).cloned().unwrap_or_default();
        let value = clamp_add(
            record.score(kind),
            delta,
            PillarRecord::SCORE_MIN,
            PillarRecord::SCORE_MAX,
        );
        self.session.store_mut().set_score(id, kind, value);
    }

    fn adjust_importance(&mut self, id: &str, delta: i8) {
        let record = self.session.store().record(id).cloned().unwrap_or_default();
        let value = clamp_add(
            record.importance,
            delta,
            PillarRecord::IMPORTANCE_MIN,
            PillarRecord::IMPORTANCE_MAX,
        );
        self.session.store_mut().set_importance(id, value);
    }

    /// Toggle the highlighted practice for the highlighted pillar.
    pub fn toggle_selected_practice(&mut self) {
        let pillar = self.selected_pillar();
        let Some(practice) = pillar.practices.get(self.view.practice_col) else {
            return;
        };
        self.session.store_mut().toggle_practice(pillar.id, practice);
        self.persist();
    }

    // ------------------------------------------------------------------
    // Reset modal
    // ------------------------------------------------------------------

    /// Open the reset confirmation. Nothing is destroyed until
    /// [`App::confirm_reset`].
    pub fn request_reset(&mut self) {
        self.modal = Some(Modal::ConfirmReset);
    }

    pub fn cancel_reset(&mut self) {
        self.modal = None;
    }

    /// Wipe the session and the persisted state. Only reachable through
    /// the confirmation modal.
    pub fn confirm_reset(&mut self) {
        if self.modal != Some(Modal::ConfirmReset) {
            return;
        }
        self.modal = None;
        self.session.reset();
        self.view = ViewState::default();
        if let Err(err) = self.port.clear() {
            tracing::warn!("Failed to clear persisted state: {err}");
        }
        self.set_status("Assessment reset.");
    }

    // ------------------------------------------------------------------
    // Export
    // ------------------------------------------------------------------

    /// Export the plan report. Results screen only; a failure becomes a
    /// status message and the session is untouched, so the user can retry.
    pub fn export_report(&mut self) {
        if self.step() != Step::Results {
            return;
        }
        let ranked = self.results();
        match write_report(&ranked, &self.report_dir) {
            Ok(path) => self.set_status(format!("Report written to {}", path.display())),
            Err(err) => {
                tracing::warn!("Report export failed: {err}");
                self.set_status(format!("Export failed: {err}. Press e to retry."));
            }
        }
    }

    // ------------------------------------------------------------------
    // Lifecycle
    // ------------------------------------------------------------------

    pub fn quit(&mut self) {
        self.should_quit = true;
    }

    /// Per-frame housekeeping: expire the status line.
    pub fn tick(&mut self) {
        if let Some(status) = &self.status
            && status.shown_at.elapsed() > STATUS_TTL
        {
            self.status = None;
        }
    }

    /// Persist the current session unconditionally (used on shutdown).
    pub fn save_session(&self) -> std::io::Result<()> {
        self.port.save(&self.session.snapshot())
    }

    pub fn set_status(&mut self, message: impl Into<String>) {
        self.status = Some(StatusLine {
            message: message.into(),
            shown_at: Instant::now(),
        });
    }

    /// Write-through save after a mutation. Fire-and-forget: a failed
    /// save must not interrupt the wizard.
    fn persist(&mut self) {
        if let Err(err) = self.port.save(&self.session.snapshot()) {
            tracing::warn!("Failed to save session state: {err}");
        }
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}

fn clamp_add(value: u8, delta: i8, min: u8, max: u8) -> u8 {
    value
        .saturating_add_signed(delta)
        .clamp(min, max)
}
