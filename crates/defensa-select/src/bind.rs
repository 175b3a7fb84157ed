//! Binding between a selection pair and a host form's nested fields.
//!
//! Forms own plain `Option<V>` slots inside their data object (an address
//! sub-record); these helpers move values between those slots and the pair
//! without the form touching the store's internals. Required-ness is not
//! checked here; that stays with the host form's validation.

use crate::dependent::{DependentSelect, FetchRequest};

/// Seed a pair from a host record's stored values, as when an edit form
/// mounts. Returns the dependent fetch the owner must run, if one is needed.
/// A stored secondary value survives the load via the preset path.
pub fn seed_pair<V: Clone + PartialEq>(
    pair: &mut DependentSelect<V>,
    primary: Option<V>,
    secondary: Option<V>,
) -> Option<FetchRequest<V>> {
    match (primary, secondary) {
        (Some(p), Some(s)) => Some(pair.apply_preset(p, s)),
        (Some(p), None) => pair.select_primary(Some(p)),
        (None, _) => pair.select_primary(None),
    }
}

/// Surface the pair's current selections into the host form's slots,
/// typically right before submit.
pub fn write_pair<V: Clone + PartialEq>(
    pair: &DependentSelect<V>,
    primary_slot: &mut Option<V>,
    secondary_slot: &mut Option<V>,
) {
    *primary_slot = pair.primary().cloned();
    *secondary_slot = pair.secondary().cloned();
}
