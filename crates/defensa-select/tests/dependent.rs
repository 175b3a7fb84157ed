//! Behavior of the dependent selection pair under user input, edit-mode
//! presets, fetch failures and out-of-order responses.

use defensa_select::{
    DependentSelect, ResolveOutcome, SecondaryPhase, SelectOption, SourceError,
};
use proptest::prelude::*;

fn havana_list() -> Vec<SelectOption<i64>> {
    vec![
        SelectOption::new("Centro Habana", 10),
        SelectOption::new("Plaza", 11),
    ]
}

fn matanzas_list() -> Vec<SelectOption<i64>> {
    vec![
        SelectOption::new("Cárdenas", 20),
        SelectOption::new("Varadero", 21),
    ]
}

fn unavailable() -> SourceError {
    SourceError::Unavailable("connection refused".to_string())
}

// --- basic cascade ---

#[test]
fn selecting_a_province_requests_its_municipalities() {
    let mut pair = DependentSelect::new();
    let request = pair.select_primary(Some(1)).expect("fetch issued");
    assert_eq!(request.primary, 1);
    assert_eq!(pair.phase(), SecondaryPhase::Loading);
    assert!(!pair.secondary_enabled());

    let outcome = pair.resolve(request.token, Ok(havana_list()));
    assert_eq!(outcome, ResolveOutcome::Applied);
    assert_eq!(pair.phase(), SecondaryPhase::Ready);
    assert_eq!(pair.secondary_options().len(), 2);
    assert!(pair.secondary_enabled());
}

#[test]
fn changing_province_clears_the_municipality_selection() {
    let mut pair = DependentSelect::new();
    let request = pair.select_primary(Some(1)).expect("fetch issued");
    pair.resolve(request.token, Ok(havana_list()));
    assert!(pair.select_secondary(11));
    assert_eq!(pair.secondary(), Some(&11));

    let request = pair.select_primary(Some(2)).expect("fetch issued");
    assert_eq!(pair.secondary(), None);
    pair.resolve(request.token, Ok(matanzas_list()));
    assert_eq!(pair.secondary(), None);
    assert_eq!(pair.secondary_options(), matanzas_list().as_slice());
}

#[test]
fn selecting_same_province_while_ready_is_a_noop() {
    let mut pair = DependentSelect::new();
    let request = pair.select_primary(Some(1)).expect("fetch issued");
    pair.resolve(request.token, Ok(havana_list()));
    pair.select_secondary(10);

    assert!(pair.select_primary(Some(1)).is_none());
    assert_eq!(pair.secondary(), Some(&10));
    assert_eq!(pair.phase(), SecondaryPhase::Ready);
}

// --- staleness / ordering ---

#[test]
fn late_response_for_superseded_province_is_dropped() {
    let mut pair = DependentSelect::new();

    // Havana selected and loaded, Plaza picked.
    let havana = pair.select_primary(Some(1)).expect("fetch issued");
    pair.resolve(havana.token, Ok(havana_list()));
    assert!(pair.select_secondary(11));

    // User switches to Matanzas before its list arrives.
    let matanzas = pair.select_primary(Some(2)).expect("fetch issued");

    // A duplicate/late response for Havana shows up now: dropped.
    let outcome = pair.resolve(havana.token, Ok(havana_list()));
    assert_eq!(outcome, ResolveOutcome::Stale);
    assert_eq!(pair.phase(), SecondaryPhase::Loading);

    let outcome = pair.resolve(matanzas.token, Ok(matanzas_list()));
    assert_eq!(outcome, ResolveOutcome::Applied);
    assert_eq!(pair.secondary_options(), matanzas_list().as_slice());
    assert_eq!(pair.secondary(), None);
}

#[test]
fn clearing_province_supersedes_the_inflight_fetch() {
    let mut pair = DependentSelect::new();
    let request = pair.select_primary(Some(1)).expect("fetch issued");

    assert!(pair.select_primary(None).is_none());
    assert_eq!(pair.phase(), SecondaryPhase::Empty);

    let outcome = pair.resolve(request.token, Ok(havana_list()));
    assert_eq!(outcome, ResolveOutcome::Stale);
    assert!(pair.secondary_options().is_empty());
    assert_eq!(pair.secondary(), None);
    assert_eq!(pair.primary(), None);
}

// --- presets (edit mode) ---

#[test]
fn preset_municipality_survives_load_when_listed() {
    let mut pair = DependentSelect::new();
    let request = pair.apply_preset(1, 11);
    assert_eq!(pair.secondary(), Some(&11));

    pair.resolve(request.token, Ok(havana_list()));
    assert_eq!(pair.phase(), SecondaryPhase::Ready);
    assert_eq!(pair.secondary(), Some(&11));
}

#[test]
fn preset_municipality_dropped_when_not_listed() {
    let mut pair = DependentSelect::new();
    let request = pair.apply_preset(1, 99);

    pair.resolve(request.token, Ok(havana_list()));
    assert_eq!(pair.phase(), SecondaryPhase::Ready);
    assert_eq!(pair.secondary(), None);
}

#[test]
fn user_province_change_cancels_a_pending_preset() {
    let mut pair = DependentSelect::new();
    let preset = pair.apply_preset(1, 11);

    let request = pair.select_primary(Some(2)).expect("fetch issued");
    assert_eq!(pair.secondary(), None);

    assert_eq!(pair.resolve(preset.token, Ok(havana_list())), ResolveOutcome::Stale);
    pair.resolve(request.token, Ok(matanzas_list()));
    assert_eq!(pair.secondary(), None);
    assert_eq!(pair.secondary_options(), matanzas_list().as_slice());
}

// --- defensive secondary selection ---

#[test]
fn secondary_event_against_replaced_list_is_ignored() {
    let mut pair = DependentSelect::new();
    let request = pair.select_primary(Some(1)).expect("fetch issued");
    pair.resolve(request.token, Ok(havana_list()));

    // A stale UI event referencing an option from some other list.
    assert!(!pair.select_secondary(20));
    assert_eq!(pair.secondary(), None);
}

#[test]
fn secondary_selection_is_illegal_while_loading() {
    let mut pair = DependentSelect::new();
    pair.select_primary(Some(1)).expect("fetch issued");
    assert!(!pair.select_secondary(10));
    assert_eq!(pair.secondary(), None);
}

// --- failure and recovery ---

#[test]
fn failed_fetch_clears_the_pair_and_reports_once() {
    let mut pair = DependentSelect::new();
    let request = pair.select_primary(Some(1)).expect("fetch issued");

    let outcome = pair.resolve(request.token, Err(unavailable()));
    assert_eq!(outcome, ResolveOutcome::Failed(unavailable()));
    assert_eq!(pair.phase(), SecondaryPhase::Failed);
    assert!(pair.secondary_options().is_empty());
    assert_eq!(pair.secondary(), None);
}

#[test]
fn retrying_same_province_recovers_after_failure() {
    let mut pair = DependentSelect::new();
    let request = pair.select_primary(Some(1)).expect("fetch issued");
    pair.resolve(request.token, Err(unavailable()));

    // Same value again: from Failed this must re-issue, not no-op.
    let retry = pair.select_primary(Some(1)).expect("fetch re-issued");
    let outcome = pair.resolve(retry.token, Ok(havana_list()));
    assert_eq!(outcome, ResolveOutcome::Applied);
    assert_eq!(pair.phase(), SecondaryPhase::Ready);
    assert_eq!(pair.secondary_options(), havana_list().as_slice());
}

// --- ordering property ---

fn expected_list(province: i64) -> Vec<SelectOption<i64>> {
    vec![
        SelectOption::new(format!("Municipio {province}-1"), province * 10 + 1),
        SelectOption::new(format!("Municipio {province}-2"), province * 10 + 2),
    ]
}

proptest! {
    /// Whatever the selection sequence, once every outstanding response has
    /// been delivered (here: newest first, the worst case), the visible list
    /// corresponds to the last primary value set, never an intermediate one.
    #[test]
    fn latest_request_wins(selections in prop::collection::vec(prop::option::of(1i64..5), 1..24)) {
        let mut pair = DependentSelect::new();
        let mut outstanding = Vec::new();

        for selection in &selections {
            if let Some(request) = pair.select_primary(*selection) {
                outstanding.push(request);
            }
        }

        for request in outstanding.iter().rev() {
            pair.resolve(request.token, Ok(expected_list(request.primary)));
        }

        match selections.last().copied().flatten() {
            Some(province) => {
                prop_assert_eq!(pair.phase(), SecondaryPhase::Ready);
                let expected = expected_list(province);
                prop_assert_eq!(pair.secondary_options(), expected.as_slice());
            }
            None => {
                prop_assert_eq!(pair.phase(), SecondaryPhase::Empty);
                prop_assert!(pair.secondary_options().is_empty());
            }
        }
    }
}
