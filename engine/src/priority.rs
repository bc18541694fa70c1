//! The priority engine: gap x importance, ranked and leveled.
//!
//! This is the one genuinely computational piece of the application. It is
//! a pure function over borrowed state; nothing here touches IO, and the
//! output is recomputed from scratch on every call.

use compass_types::{PillarDefinition, PillarRecord, PriorityLevel};

use crate::store::AssessmentStore;

/// Sorted positions 0..HIGH_RANKS are the high-priority band.
const HIGH_RANKS: usize = 3;
/// Sorted positions HIGH_RANKS..MEDIUM_RANKS_END are the medium band;
/// everything after is maintenance.
const MEDIUM_RANKS_END: usize = 7;

/// A pillar joined with its record and the engine's derived fields.
///
/// Ephemeral: borrows the catalog entry, exists only for the lifetime of
/// one ranking. Consumers (results screen, report renderer) read `level`
/// and `score` from here and never re-derive them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProcessedPillar<'a> {
    pub definition: &'a PillarDefinition,
    pub record: PillarRecord,
    /// Non-negative improvement gap, `max(0, target - current)`.
    pub gap: u8,
    /// Priority score, `gap * importance`. Zero exactly when the gap is
    /// zero (importance is at least 1 in practice).
    pub score: u16,
    pub level: PriorityLevel,
}

/// Rank every catalog pillar by priority score, descending, and assign
/// priority levels.
///
/// Sorting is stable, so pillars with equal scores keep their catalog
/// order - that is the documented tie-break.
///
/// Levels are banded by position in the full sorted list: the first
/// [`HIGH_RANKS`] rows are high, rows up to [`MEDIUM_RANKS_END`] are
/// medium, the rest maintenance - except that a zero-gap pillar is always
/// maintenance, regardless of where it ranks. A zero-gap pillar still
/// occupies its rank slot, so it can push a gapped pillar out of a band.
/// Deliberate: this matches the shipped behavior of the assessment, even
/// though banding over only the gapped pillars could be argued for.
///
/// # Panics
///
/// Panics if the store has no record for a catalog id. The store upholds
/// that invariant by construction, so a miss is a programming error, and
/// an incomplete ranking would be worse than a loud failure.
#[must_use]
pub fn rank_pillars<'a>(
    catalog: &'a [PillarDefinition],
    store: &AssessmentStore,
) -> Vec<ProcessedPillar<'a>> {
    let mut processed: Vec<ProcessedPillar<'a>> = catalog
        .iter()
        .map(|definition| {
            let record = store.record(definition.id).unwrap_or_else(|| {
                panic!(
                    "assessment store is missing a record for pillar '{}'",
                    definition.id
                )
            });
            let gap = record.gap();
            let score = u16::from(gap) * u16::from(record.importance);
            ProcessedPillar {
                definition,
                record: record.clone(),
                gap,
                score,
                level: PriorityLevel::Maintenance,
            }
        })
        .collect();

    processed.sort_by(|a, b| b.score.cmp(&a.score));

    for (index, pillar) in processed.iter_mut().enumerate() {
        pillar.level = if pillar.gap == 0 {
            PriorityLevel::Maintenance
        } else if index < HIGH_RANKS {
            PriorityLevel::High
        } else if index < MEDIUM_RANKS_END {
            PriorityLevel::Medium
        } else {
            PriorityLevel::Maintenance
        };
    }

    processed
}
