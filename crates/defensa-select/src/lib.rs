//! Selection stores for reference-data dropdowns.
//!
//! The backend exposes two shapes of lookup data: flat catalogs (majors,
//! areas, academic ranks, scientific categories) and one cascading pair
//! (province → municipality) that three different forms repeat. This crate
//! holds the state machines for both, keeping all I/O with the caller: a
//! store hands out a [`FetchRequest`] when it needs data and the owner
//! answers through `resolve`, so late responses from superseded requests can
//! be detected and dropped instead of clobbering newer state.

pub mod bind;
pub mod dependent;
pub mod flat;
pub mod option;
pub mod source;

pub use dependent::{DependentSelect, FetchRequest, ResolveOutcome, SecondaryPhase};
pub use flat::{FlatSelect, LoadPhase};
pub use option::SelectOption;
pub use source::{DependentOptionSource, OptionSource, SourceError};
