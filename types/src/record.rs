//! The mutable per-pillar assessment record.

use serde::{Deserialize, Serialize};

/// Which of the two scores a slider edit targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScoreKind {
    /// Where the user is today.
    Current,
    /// Where the user wants to be.
    Target,
}

/// One pillar's user-entered data.
///
/// The record itself performs no range validation: the UI constrains scores
/// to 1-10 and importance to 1-5 (slider semantics), and the priority
/// engine saturates rather than clamps, so out-of-band values cannot make
/// anything downstream misbehave.
///
/// Selected practices keep insertion order, which is also the display
/// order. Membership is what matters; toggling twice restores the set.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PillarRecord {
    pub current: u8,
    pub target: u8,
    pub importance: u8,
    #[serde(default)]
    pub practices: Vec<String>,
}

impl PillarRecord {
    pub const SCORE_MIN: u8 = 1;
    pub const SCORE_MAX: u8 = 10;
    pub const IMPORTANCE_MIN: u8 = 1;
    pub const IMPORTANCE_MAX: u8 = 5;

    /// Read one of the two scores.
    #[must_use]
    pub fn score(&self, kind: ScoreKind) -> u8 {
        match kind {
            ScoreKind::Current => self.current,
            ScoreKind::Target => self.target,
        }
    }

    /// Overwrite one of the two scores.
    pub fn set_score(&mut self, kind: ScoreKind, value: u8) {
        match kind {
            ScoreKind::Current => self.current = value,
            ScoreKind::Target => self.target = value,
        }
    }

    /// Non-negative improvement gap. A target at or below the current
    /// score is maintenance, never a priority signal.
    #[must_use]
    pub fn gap(&self) -> u8 {
        self.target.saturating_sub(self.current)
    }

    #[must_use]
    pub fn has_practice(&self, practice: &str) -> bool {
        self.practices.iter().any(|p| p == practice)
    }

    /// Add the practice if absent, remove it if present.
    pub fn toggle_practice(&mut self, practice: &str) {
        if let Some(pos) = self.practices.iter().position(|p| p == practice) {
            self.practices.remove(pos);
        } else {
            self.practices.push(practice.to_owned());
        }
    }
}

impl Default for PillarRecord {
    /// The assessment starting point: middling today, ambitious target,
    /// medium importance, nothing selected yet.
    fn default() -> Self {
        Self {
            current: 5,
            target: 8,
            importance: 3,
            practices: Vec::new(),
        }
    }
}
