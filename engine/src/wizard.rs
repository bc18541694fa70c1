//! Wizard step sequencing.
//!
//! The wizard is a straight line: landing, four data-collection screens,
//! results. Transitions only ever move one step at a time, and the results
//! screen is terminal - there is nothing beyond it to advance to.

use crate::persistence::SessionSnapshot;
use crate::store::AssessmentStore;

/// The six wizard screens, in order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Step {
    Landing,
    CurrentScores,
    TargetScores,
    Importance,
    Practices,
    Results,
}

impl Step {
    const ORDER: [Step; 6] = [
        Step::Landing,
        Step::CurrentScores,
        Step::TargetScores,
        Step::Importance,
        Step::Practices,
        Step::Results,
    ];

    /// Positional index, 0 (landing) through 5 (results). This is the
    /// integer stored in the persisted snapshot.
    #[must_use]
    pub fn index(self) -> u8 {
        match self {
            Step::Landing => 0,
            Step::CurrentScores => 1,
            Step::TargetScores => 2,
            Step::Importance => 3,
            Step::Practices => 4,
            Step::Results => 5,
        }
    }

    /// Inverse of [`Step::index`]. Out-of-range indices mean the persisted
    /// snapshot came from something that was never a valid session.
    #[must_use]
    pub fn from_index(index: u8) -> Option<Self> {
        Self::ORDER.get(usize::from(index)).copied()
    }

    #[must_use]
    pub fn next(self) -> Option<Self> {
        Self::from_index(self.index() + 1)
    }

    #[must_use]
    pub fn prev(self) -> Option<Self> {
        self.index().checked_sub(1).and_then(Self::from_index)
    }

}

/// One user's assessment in progress: the active step plus the owned store.
///
/// The session knows nothing about persistence; [`crate::App`] snapshots it
/// after every mutation and hands the snapshot to the state port.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WizardSession {
    step: Step,
    store: AssessmentStore,
}

impl WizardSession {
    /// Fresh session: landing screen, default records.
    #[must_use]
    pub fn new() -> Self {
        Self {
            step: Step::Landing,
            store: AssessmentStore::new(),
        }
    }

    /// Rebuild a session from a persisted snapshot.
    ///
    /// Returns `None` when the recorded step is not a valid screen index;
    /// the caller treats that exactly like a corrupt snapshot. Records are
    /// normalized against the catalog (missing ids filled with defaults,
    /// unknown ids dropped) so the store invariant holds regardless of what
    /// was on disk.
    #[must_use]
    pub fn from_snapshot(snapshot: SessionSnapshot) -> Option<Self> {
        let step = Step::from_index(snapshot.step)?;
        Some(Self {
            step,
            store: AssessmentStore::from_records(snapshot.data),
        })
    }

    /// Serializable view of the session for the state port.
    #[must_use]
    pub fn snapshot(&self) -> SessionSnapshot {
        SessionSnapshot {
            step: self.step.index(),
            data: self.store.to_records(),
        }
    }

    #[must_use]
    pub fn step(&self) -> Step {
        self.step
    }

    #[must_use]
    pub fn store(&self) -> &AssessmentStore {
        &self.store
    }

    pub fn store_mut(&mut self) -> &mut AssessmentStore {
        &mut self.store
    }

    /// Move forward one screen. No-op at the results screen.
    pub fn advance(&mut self) -> bool {
        match self.step.next() {
            Some(next) => {
                self.step = next;
                true
            }
            None => false,
        }
    }

    /// Move back one screen. No-op at the landing screen.
    pub fn retreat(&mut self) -> bool {
        match self.step.prev() {
            Some(prev) => {
                self.step = prev;
                true
            }
            None => false,
        }
    }

    /// The landing screen's call to action: begin the assessment.
    /// Only meaningful from the landing screen.
    pub fn start(&mut self) -> bool {
        if self.step == Step::Landing {
            self.advance()
        } else {
            false
        }
    }

    /// Back to the landing screen with every record at its default.
    /// Destructive - callers must have confirmed with the user first.
    pub fn reset(&mut self) {
        self.step = Step::Landing;
        self.store.reset_all();
    }
}

impl Default for WizardSession {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use compass_types::ScoreKind;

    #[test]
    fn step_index_roundtrip() {
        for index in 0..=5 {
            let step = Step::from_index(index).unwrap();
            assert_eq!(step.index(), index);
        }
        assert!(Step::from_index(6).is_none());
    }

    #[test]
    fn advance_stops_at_results() {
        let mut session = WizardSession::new();
        for _ in 0..5 {
            assert!(session.advance());
        }
        assert_eq!(session.step(), Step::Results);
        assert!(!session.advance());
        assert_eq!(session.step(), Step::Results);
    }

    #[test]
    fn retreat_stops_at_landing() {
        let mut session = WizardSession::new();
        assert!(!session.retreat());
        assert_eq!(session.step(), Step::Landing);
    }

    #[test]
    fn start_only_from_landing() {
        let mut session = WizardSession::new();
        assert!(session.start());
        assert_eq!(session.step(), Step::CurrentScores);
        assert!(!session.start());
        assert_eq!(session.step(), Step::CurrentScores);
    }

    #[test]
    fn reset_returns_to_landing_with_defaults() {
        let mut session = WizardSession::new();
        session.start();
        session
            .store_mut()
            .set_score("work", ScoreKind::Current, 1);
        session.reset();
        assert_eq!(session.step(), Step::Landing);
        assert_eq!(session.store().record("work").unwrap().current, 5);
    }

    #[test]
    fn snapshot_roundtrip_is_identity() {
        let mut session = WizardSession::new();
        session.start();
        session.advance();
        session.store_mut().toggle_practice("play", "Digital detox");
        let restored = WizardSession::from_snapshot(session.snapshot()).unwrap();
        assert_eq!(restored, session);
    }

    #[test]
    fn snapshot_with_invalid_step_is_rejected() {
        let mut snapshot = WizardSession::new().snapshot();
        snapshot.step = 9;
        assert!(WizardSession::from_snapshot(snapshot).is_none());
    }
}
