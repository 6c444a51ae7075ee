// ==========================================
// Reconciliation flow integration test
// ==========================================
// Scope:
// 1. Edit loop: retour edits and shortcuts through the API
// 2. Derived view consistency after every edit
// 3. Totals always equal the elementwise row sums
// 4. Malformed input degrades to safe defaults, never errors
// ==========================================


use conso_retour::api::ReconciliationApi;
use conso_retour::config::ReconConfig;
use conso_retour::domain::material::PoSession;
use conso_retour::domain::types::DeltaBadge;
use conso_retour::engine::ReconciliationCore;
use test_helpers::{create_test_record, create_test_session};

fn setup_api() -> ReconciliationApi {
    conso_retour::logging::init_test();
    ReconciliationApi::new(ReconConfig::default())
}

// ==========================================
// Edit loop
// ==========================================

#[test]
fn test_full_edit_loop() {
    let api = setup_api();
    let mut session = create_test_session(vec![
        create_test_record("M1", 2000.0, 0.0),
        create_test_record("M2", 500.0, 0.0),
    ]);

    // Operator types a retour on M1.
    api.set_retour(&mut session, "M1", "40");
    let view = api.view(&session);
    assert_eq!(view.rows[0].derived.record.retour, 40.0);
    assert_eq!(view.rows[0].derived.consomme, 1960.0);
    assert_eq!(view.rows[0].badge, DeltaBadge::WithinTolerance); // -2% exactly

    // Then corrects it upward; badge flips.
    api.set_retour(&mut session, "M1", "41");
    let view = api.view(&session);
    assert_eq!(view.rows[0].badge, DeltaBadge::OutOfTolerance);

    // Shortcut on M2: full assigned back.
    api.quick_set(&mut session, "M2", "assigned");
    let view = api.view(&session);
    assert_eq!(view.rows[1].derived.record.retour, 500.0);
    assert_eq!(view.rows[1].derived.consomme, 0.0);
    assert_eq!(view.rows[1].derived.delta_percent, -100.0);
}

#[test]
fn test_totals_track_every_edit() {
    let api = setup_api();
    let mut session = create_test_session(vec![
        create_test_record("M1", 100.0, 0.0),
        create_test_record("M2", 300.0, 0.0),
        create_test_record("M3", 0.0, 0.0),
    ]);

    for (id, raw) in [("M1", "10"), ("M2", "150"), ("M3", "7"), ("M1", "25")] {
        api.set_retour(&mut session, id, raw);

        let view = api.view(&session);
        let row_consomme: f64 = view.rows.iter().map(|r| r.derived.consomme).sum();
        let row_retour: f64 = view.rows.iter().map(|r| r.derived.record.retour).sum();

        assert_eq!(view.totals.consomme, row_consomme);
        assert_eq!(view.totals.retour, row_retour);
    }

    // Final state: M1=25, M2=150, M3=7 (clamped consomme on M3).
    let view = api.view(&session);
    assert_eq!(view.totals.retour, 182.0);
    assert_eq!(view.totals.consomme, 75.0 + 150.0);
}

// ==========================================
// Safe degradation
// ==========================================

#[test]
fn test_malformed_edits_never_break_the_screen() {
    let api = setup_api();
    let mut session = create_test_session(vec![create_test_record("M1", 100.0, 30.0)]);

    // Garbage text coerces to 0.
    api.set_retour(&mut session, "M1", "12abc");
    assert_eq!(session.records[0].retour, 0.0);

    // Negative input clamps to 0.
    api.set_retour(&mut session, "M1", "-15");
    assert_eq!(session.records[0].retour, 0.0);

    // Unknown id: collection unchanged.
    api.set_retour(&mut session, "GHOST", "50");
    assert_eq!(session.records.len(), 1);
    assert_eq!(session.records[0].retour, 0.0);

    // Unknown shortcut mode: no-op.
    api.quick_set(&mut session, "M1", "quadruple");
    assert_eq!(session.records[0].retour, 0.0);

    // The view stays derivable throughout.
    let view = api.view(&session);
    assert_eq!(view.rows.len(), 1);
    assert_eq!(view.rows[0].derived.consomme, 100.0);
}

#[test]
fn test_retour_above_assigned_is_kept() {
    // Accepted behavior: the excess clamps consomme, the retour stays.
    let api = setup_api();
    let mut session = create_test_session(vec![create_test_record("M1", 100.0, 0.0)]);

    api.set_retour(&mut session, "M1", "140");

    let view = api.view(&session);
    assert_eq!(view.rows[0].derived.record.retour, 140.0);
    assert_eq!(view.rows[0].derived.consomme, 0.0);
    assert_eq!(view.rows[0].derived.delta_percent, -100.0);
    assert_eq!(view.totals.retour, 140.0);
}

// ==========================================
// Demo seed sanity
// ==========================================

#[test]
fn test_demo_session_derivation() {
    let api = setup_api();
    let session = PoSession::demo();

    let (rows, totals) = ReconciliationCore::derive_all(&session.records);

    assert_eq!(rows.len(), 3);
    // Line 1: assigned 2160, retour 100 -> consomme 2060.
    assert_eq!(rows[0].consomme, 2060.0);
    // Lines 2-3: no retour, consomme equals assigned.
    assert_eq!(rows[1].consomme, 9800.0);
    assert_eq!(rows[2].consomme, 16200.0);

    assert_eq!(totals.planned, 43060.0);
    assert_eq!(totals.assigned, 28160.0);
    assert_eq!(totals.issued, 100.0);
    assert_eq!(totals.retour, 100.0);
    assert_eq!(totals.consomme, 28060.0);

    // Session audit fields move on edit.
    let mut session = session;
    let before = session.updated_at;
    api.set_retour(&mut session, "000123451", "50");
    assert!(session.updated_at >= before);
}
