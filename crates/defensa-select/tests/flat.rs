//! Flat catalog store: load, reload, staleness and failure handling.

use defensa_select::{FlatSelect, LoadPhase, ResolveOutcome, SelectOption, SourceError};

fn ranks() -> Vec<SelectOption<i64>> {
    vec![
        SelectOption::new("Instructor", 1),
        SelectOption::new("Titular", 2),
    ]
}

#[test]
fn load_then_select() {
    let mut list = FlatSelect::new();
    let token = list.begin_load();
    assert_eq!(list.phase(), LoadPhase::Loading);

    assert_eq!(list.resolve(token, Ok(ranks())), ResolveOutcome::Applied);
    assert!(list.is_ready());
    assert!(list.select(Some(2)));
    assert_eq!(list.selected_option().map(|o| o.label.as_str()), Some("Titular"));
}

#[test]
fn selection_outside_the_list_is_rejected() {
    let mut list = FlatSelect::new();
    let token = list.begin_load();
    list.resolve(token, Ok(ranks()));

    assert!(!list.select(Some(9)));
    assert_eq!(list.selection(), None);
}

#[test]
fn reload_keeps_selection_only_if_still_listed() {
    let mut list = FlatSelect::new();
    let token = list.begin_load();
    list.resolve(token, Ok(ranks()));
    list.select(Some(2));

    let token = list.begin_load();
    list.resolve(token, Ok(vec![SelectOption::new("Instructor", 1)]));
    assert_eq!(list.selection(), None);
}

#[test]
fn stale_reload_response_is_dropped() {
    let mut list = FlatSelect::new();
    let first = list.begin_load();
    let second = list.begin_load();

    assert_eq!(
        list.resolve(first, Ok(vec![SelectOption::new("Viejo", 9)])),
        ResolveOutcome::Stale
    );
    list.resolve(second, Ok(ranks()));
    assert_eq!(list.options(), ranks().as_slice());
}

#[test]
fn preselection_survives_load_only_if_listed() {
    let mut list = FlatSelect::new();
    list.preselect(Some(2));
    let token = list.begin_load();
    list.resolve(token, Ok(ranks()));
    assert_eq!(list.selection(), Some(&2));

    let mut list = FlatSelect::new();
    list.preselect(Some(9));
    let token = list.begin_load();
    list.resolve(token, Ok(ranks()));
    assert_eq!(list.selection(), None);
}

#[test]
fn failure_clears_and_allows_retry() {
    let mut list = FlatSelect::new();
    let token = list.begin_load();
    let error = SourceError::Unavailable("timeout".to_string());
    assert_eq!(
        list.resolve(token, Err(error.clone())),
        ResolveOutcome::Failed(error)
    );
    assert_eq!(list.phase(), LoadPhase::Failed);
    assert!(list.options().is_empty());

    let token = list.begin_load();
    list.resolve(token, Ok(ranks()));
    assert!(list.is_ready());
}
