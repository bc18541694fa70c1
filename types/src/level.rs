//! Priority levels assigned by the ranking engine.

use std::fmt;

/// Where a pillar lands in the plan.
///
/// Closed set on purpose: the results screen and the report renderer
/// bucket by level exhaustively, and a new variant must force both to be
/// revisited.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PriorityLevel {
    /// Immediate focus.
    High,
    /// Sustained growth.
    Medium,
    /// Keep doing what works.
    Maintenance,
}

impl PriorityLevel {
    /// Human-readable label for screens and reports.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            PriorityLevel::High => "High Priority",
            PriorityLevel::Medium => "Medium Priority",
            PriorityLevel::Maintenance => "Maintenance",
        }
    }
}

impl fmt::Display for PriorityLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
