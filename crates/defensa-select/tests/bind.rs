//! Binding a selection pair to a host form's address slots.

use defensa_select::{DependentSelect, SelectOption, bind};

fn havana_list() -> Vec<SelectOption<i64>> {
    vec![
        SelectOption::new("Centro Habana", 10),
        SelectOption::new("Plaza", 11),
    ]
}

#[test]
fn seeding_from_a_stored_address_presets_the_pair() {
    let mut pair = DependentSelect::new();
    let request = bind::seed_pair(&mut pair, Some(1), Some(11)).expect("fetch issued");
    pair.resolve(request.token, Ok(havana_list()));

    assert_eq!(pair.primary(), Some(&1));
    assert_eq!(pair.secondary(), Some(&11));
}

#[test]
fn seeding_without_a_municipality_just_loads_the_list() {
    let mut pair = DependentSelect::new();
    let request = bind::seed_pair(&mut pair, Some(1), None).expect("fetch issued");
    assert_eq!(pair.secondary(), None);
    pair.resolve(request.token, Ok(havana_list()));
    assert_eq!(pair.secondary(), None);
    assert_eq!(pair.secondary_options().len(), 2);
}

#[test]
fn seeding_an_empty_address_is_inert() {
    let mut pair = DependentSelect::new();
    assert!(bind::seed_pair(&mut pair, None, Some(11)).is_none());
    assert_eq!(pair.primary(), None);
    assert_eq!(pair.secondary(), None);
}

#[test]
fn writing_surfaces_current_selections_into_the_form() {
    let mut pair = DependentSelect::new();
    let request = pair.select_primary(Some(1)).expect("fetch issued");
    pair.resolve(request.token, Ok(havana_list()));
    pair.select_secondary(10);

    let mut id_province = None;
    let mut id_municipality = None;
    bind::write_pair(&pair, &mut id_province, &mut id_municipality);
    assert_eq!(id_province, Some(1));
    assert_eq!(id_municipality, Some(10));
}
