//! The assessment store: one mutable record per catalog pillar.

use std::collections::BTreeMap;

use compass_types::{PillarRecord, ScoreKind, catalog};

/// Mapping from pillar id to the user's record.
///
/// Invariant: exactly one record per catalog id, no others. Construction
/// and restoration both normalize against the catalog, so lookups for
/// catalog ids cannot fail.
///
/// Mutations are total: an id outside the catalog is logged and ignored
/// rather than treated as an error, since the UI only ever passes catalog
/// ids.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssessmentStore {
    records: BTreeMap<String, PillarRecord>,
}

impl AssessmentStore {
    /// A fresh store with every pillar at its default record.
    #[must_use]
    pub fn new() -> Self {
        let records = catalog()
            .iter()
            .map(|p| (p.id.to_owned(), PillarRecord::default()))
            .collect();
        Self { records }
    }

    /// Rebuild a store from persisted records, normalizing against the
    /// catalog: ids missing from `records` get default records, ids the
    /// catalog does not know are dropped.
    #[must_use]
    pub fn from_records(mut records: BTreeMap<String, PillarRecord>) -> Self {
        let normalized = catalog()
            .iter()
            .map(|p| {
                let record = records.remove(p.id).unwrap_or_default();
                (p.id.to_owned(), record)
            })
            .collect();
        if !records.is_empty() {
            let unknown: Vec<&str> = records.keys().map(String::as_str).collect();
            tracing::warn!("Dropping records for unknown pillar ids: {unknown:?}");
        }
        Self {
            records: normalized,
        }
    }

    /// The records keyed by pillar id, for snapshotting.
    #[must_use]
    pub fn to_records(&self) -> BTreeMap<String, PillarRecord> {
        self.records.clone()
    }

    #[must_use]
    pub fn record(&self, id: &str) -> Option<&PillarRecord> {
        self.records.get(id)
    }

    fn record_mut(&mut self, id: &str) -> Option<&mut PillarRecord> {
        let record = self.records.get_mut(id);
        if record.is_none() {
            tracing::warn!("Ignoring mutation for unknown pillar id '{id}'");
        }
        record
    }

    /// Overwrite the current or target score for a pillar. The store does
    /// not range-check; the UI constrains input to 1-10.
    pub fn set_score(&mut self, id: &str, kind: ScoreKind, value: u8) {
        if let Some(record) = self.record_mut(id) {
            record.set_score(kind, value);
        }
    }

    /// Overwrite the importance weight for a pillar (UI constrains to 1-5).
    pub fn set_importance(&mut self, id: &str, value: u8) {
        if let Some(record) = self.record_mut(id) {
            record.importance = value;
        }
    }

    /// Add the practice to the pillar's selection if absent, remove it if
    /// present. Toggling twice restores the prior selection.
    pub fn toggle_practice(&mut self, id: &str, practice: &str) {
        if let Some(record) = self.record_mut(id) {
            record.toggle_practice(practice);
        }
    }

    /// Replace every record with an independent default record.
    pub fn reset_all(&mut self) {
        for record in self.records.values_mut() {
            *record = PillarRecord::default();
        }
    }
}

impl Default for AssessmentStore {
    fn default() -> Self {
        Self::new()
    }
}
