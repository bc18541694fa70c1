//! Plan report rendering and export.
//!
//! The report is the exportable artifact of the assessment: the ranked
//! pillars bucketed by priority level, each with its scores, gap and
//! chosen practices. Rendering is a pure function over the engine's
//! output - the exporter never re-derives a level or a score.

use std::fmt::Write as _;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use chrono::{DateTime, Local};

use compass_types::PriorityLevel;

use crate::persistence::ensure_secure_dir;
use crate::priority::ProcessedPillar;

#[derive(Debug, thiserror::Error)]
pub enum ReportError {
    #[error("failed to create report directory {path}")]
    CreateDir {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("failed to write report to {path}")]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

const LEVEL_SECTIONS: [(PriorityLevel, &str); 3] = [
    (PriorityLevel::High, "Immediate focus"),
    (PriorityLevel::Medium, "Sustained growth"),
    (PriorityLevel::Maintenance, "Keep it up"),
];

const COMMITMENT: &str = "I commit to working on these pillars with care and discipline, \
knowing that progress beats perfection. This year I design my life on purpose.";

/// Render the ranked pillars as a Markdown document.
#[must_use]
pub fn render_report(pillars: &[ProcessedPillar<'_>], generated: DateTime<Local>) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "# Compass Plan");
    let _ = writeln!(out);
    let _ = writeln!(out, "Generated {}", generated.format("%Y-%m-%d"));

    for (level, tagline) in LEVEL_SECTIONS {
        let bucket: Vec<&ProcessedPillar<'_>> =
            pillars.iter().filter(|p| p.level == level).collect();
        if bucket.is_empty() {
            continue;
        }

        let _ = writeln!(out);
        let _ = writeln!(out, "## {} ({tagline})", level.label());
        for pillar in bucket {
            let _ = writeln!(out);
            let _ = writeln!(
                out,
                "- **{}** - {} -> {} (gap {}, score {})",
                pillar.definition.name,
                pillar.record.current,
                pillar.record.target,
                pillar.gap,
                pillar.score,
            );
            for practice in &pillar.record.practices {
                let _ = writeln!(out, "  - {practice}");
            }
        }
    }

    let _ = writeln!(out);
    let _ = writeln!(out, "---");
    let _ = writeln!(out);
    let _ = writeln!(out, "> {COMMITMENT}");

    out
}

/// Write the rendered report into `dir`, named by generation date.
///
/// Returns the path written. Failures leave the session untouched; the
/// caller surfaces them as a status message and the user can retry.
pub fn write_report(pillars: &[ProcessedPillar<'_>], dir: &Path) -> Result<PathBuf, ReportError> {
    let generated = Local::now();
    let path = dir.join(format!("compass-plan-{}.md", generated.format("%Y-%m-%d")));

    ensure_secure_dir(dir).map_err(|source| ReportError::CreateDir {
        path: dir.to_path_buf(),
        source,
    })?;

    fs::write(&path, render_report(pillars, generated)).map_err(|source| ReportError::Write {
        path: path.clone(),
        source,
    })?;

    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::priority::rank_pillars;
    use crate::store::AssessmentStore;
    use compass_types::{ScoreKind, catalog};

    fn ranked_sample(store: &AssessmentStore) -> Vec<ProcessedPillar<'static>> {
        rank_pillars(catalog(), store)
    }

    #[test]
    fn report_groups_levels_in_order() {
        let mut store = AssessmentStore::new();
        store.set_score("health_phys", ScoreKind::Current, 2);
        store.set_importance("health_phys", 5);
        let ranked = ranked_sample(&store);

        let report = render_report(&ranked, Local::now());
        let high = report.find("## High Priority").unwrap();
        let medium = report.find("## Medium Priority").unwrap();
        let maintenance = report.find("## Maintenance").unwrap();
        assert!(high < medium);
        assert!(medium < maintenance);
    }

    #[test]
    fn report_lists_selected_practices() {
        let mut store = AssessmentStore::new();
        store.toggle_practice("growth", "Read a book");
        store.toggle_practice("growth", "Online course");
        let ranked = ranked_sample(&store);

        let report = render_report(&ranked, Local::now());
        assert!(report.contains("  - Read a book"));
        assert!(report.contains("  - Online course"));
    }

    #[test]
    fn all_maintenance_report_skips_empty_sections() {
        let mut store = AssessmentStore::new();
        for pillar in catalog() {
            store.set_score(pillar.id, ScoreKind::Target, 5);
        }
        let ranked = ranked_sample(&store);

        let report = render_report(&ranked, Local::now());
        assert!(!report.contains("## High Priority"));
        assert!(!report.contains("## Medium Priority"));
        assert!(report.contains("## Maintenance"));
    }

    #[test]
    fn write_report_creates_the_file() {
        let dir = tempfile::tempdir().unwrap();
        let store = AssessmentStore::new();
        let ranked = ranked_sample(&store);

        let path = write_report(&ranked, dir.path()).unwrap();
        assert!(path.exists());
        let content = fs::read_to_string(path).unwrap();
        assert!(content.starts_with("# Compass Plan"));
    }
}
