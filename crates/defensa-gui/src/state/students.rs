//! Student list and form state.

use defensa_model::{Gender, Student};
use defensa_select::{DependentSelect, FlatSelect};
use defensa_validate::FormReport;

/// Year options offered by the search filter.
pub const YEARS: [u8; 6] = [1, 2, 3, 4, 5, 6];

/// Student search screen.
#[derive(Debug, Default)]
pub struct StudentListState {
    pub students: Vec<Student>,
    pub search_name: String,
    /// Full-name suggestions for the current search text.
    pub suggestions: Vec<String>,
    /// Token of the most recent suggestion fetch; older replies are dropped.
    pub suggest_token: u64,
    pub search_year: Option<u8>,
    pub provinces: FlatSelect<i64>,
    pub pending_delete: Option<i64>,
    pub detail: Option<Student>,
}

/// Student create/edit form.
#[derive(Debug, Default)]
pub struct StudentFormState {
    /// Present when editing an existing record.
    pub id: Option<i64>,
    pub first_name: String,
    pub last_name: String,
    pub gender: Option<Gender>,
    /// Birth date as typed (`YYYY-MM-DD`), parsed on save.
    pub birth_date: String,
    pub major: FlatSelect<String>,
    pub street: String,
    pub number: String,
    pub location: DependentSelect<i64>,
    /// Year carried over on edit; creates always start in first year.
    pub year: u8,
    pub teacher_average: f64,
    pub report: FormReport,
    pub saving: bool,
}

impl StudentFormState {
    pub fn create() -> Self {
        Self {
            year: 1,
            ..Self::default()
        }
    }

    pub fn edit(id: i64) -> Self {
        Self {
            id: Some(id),
            year: 1,
            ..Self::default()
        }
    }

    pub fn is_edit(&self) -> bool {
        self.id.is_some()
    }
}
