//! End-to-end ranking scenarios through the app facade.

use std::path::PathBuf;

use compass_engine::{
    App, MemoryStatePort, PriorityLevel, ScoreKind, SessionSnapshot, Step, UiOptions,
    WizardSession, catalog, rank_pillars,
};

use crate::common::{advance_to, memory_app};

/// Build an app resumed at the results screen with the given store edits
/// applied, the way a finished wizard run would have left it.
fn app_at_results(edit: impl FnOnce(&mut WizardSession)) -> App {
    let mut session = WizardSession::new();
    edit(&mut session);
    let snapshot = SessionSnapshot {
        step: Step::Results.index(),
        data: session.store().to_records(),
    };
    App::with_port(
        Box::new(MemoryStatePort::seeded(snapshot)),
        UiOptions::default(),
        PathBuf::from("/tmp"),
    )
}

#[test]
fn documented_scenario_two_leaders_eight_defaults() {
    // Pillar A: current 2, target 9, importance 5 -> score 35.
    // Pillar B: current 3, target 10, importance 4 -> score 28.
    // Everything else stays at the default 5/8/3 -> score 9.
    let a = catalog()[0].id;
    let b = catalog()[1].id;
    let app = app_at_results(|session| {
        let store = session.store_mut();
        store.set_score(a, ScoreKind::Current, 2);
        store.set_score(a, ScoreKind::Target, 9);
        store.set_importance(a, 5);
        store.set_score(b, ScoreKind::Current, 3);
        store.set_score(b, ScoreKind::Target, 10);
        store.set_importance(b, 4);
    });
    assert_eq!(app.step(), Step::Results);

    let ranked = app.results();
    assert_eq!(ranked[0].definition.id, a);
    assert_eq!(ranked[0].score, 35);
    assert_eq!(ranked[0].level, PriorityLevel::High);
    assert_eq!(ranked[1].definition.id, b);
    assert_eq!(ranked[1].score, 28);
    assert_eq!(ranked[1].level, PriorityLevel::High);

    // The eight defaults tie at 9 and keep catalog order in ranks 2-9.
    let tail_ids: Vec<&str> = ranked[2..].iter().map(|p| p.definition.id).collect();
    let expected: Vec<&str> = catalog()[2..].iter().map(|p| p.id).collect();
    assert_eq!(tail_ids, expected);

    // Rank 2 completes the high band; 3-6 medium; 7-9 maintenance.
    assert_eq!(ranked[2].level, PriorityLevel::High);
    for pillar in &ranked[3..7] {
        assert_eq!(pillar.level, PriorityLevel::Medium);
    }
    for pillar in &ranked[7..] {
        assert_eq!(pillar.level, PriorityLevel::Maintenance);
    }
}

#[test]
fn engine_output_is_always_a_permutation() {
    let (mut app, _port) = memory_app();
    advance_to(&mut app, 5);

    let ranked = app.results();
    let mut ids: Vec<&str> = ranked.iter().map(|p| p.definition.id).collect();
    ids.sort_unstable();
    ids.dedup();
    assert_eq!(ids.len(), catalog().len());
}

#[test]
fn ranking_is_descending() {
    let mut session = WizardSession::new();
    for (i, pillar) in catalog().iter().enumerate() {
        session
            .store_mut()
            .set_score(pillar.id, ScoreKind::Current, (i % 9 + 1) as u8);
        session
            .store_mut()
            .set_importance(pillar.id, (i % 5 + 1) as u8);
    }
    let ranked = rank_pillars(catalog(), session.store());
    for window in ranked.windows(2) {
        assert!(window[0].score >= window[1].score);
    }
}

#[test]
fn all_flat_targets_mean_full_maintenance() {
    let app = app_at_results(|session| {
        for pillar in catalog() {
            session
                .store_mut()
                .set_score(pillar.id, ScoreKind::Target, 5);
        }
    });
    for pillar in &app.results() {
        assert_eq!(pillar.score, 0);
        assert_eq!(pillar.level, PriorityLevel::Maintenance);
    }
}

#[test]
fn results_are_recomputed_from_live_state() {
    // Derived data is never cached: leave results, change a score, come
    // back, and the ranking reflects the edit.
    let (mut app, _port) = memory_app();
    advance_to(&mut app, 5);
    let before = app.results()[0].definition.id;

    app.retreat(); // Practices
    app.retreat(); // Importance
    app.retreat(); // TargetScores
    app.retreat(); // CurrentScores
    assert_eq!(app.step(), Step::CurrentScores);

    // Tank the last catalog pillar's current score so it leads the ranking.
    let last = catalog().last().unwrap().id;
    for _ in 0..catalog().len() - 1 {
        app.select_next_pillar();
    }
    for _ in 0..10 {
        app.adjust_selected(-1);
    }
    advance_to(&mut app, 5);

    let after = app.results();
    assert_eq!(after[0].definition.id, last);
    assert_ne!(after[0].definition.id, before);
}
