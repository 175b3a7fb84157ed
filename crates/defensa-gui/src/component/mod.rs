//! Small reusable widgets shared by the form views.

mod form_field;

pub use form_field::{TextField, labeled};
