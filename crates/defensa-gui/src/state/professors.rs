//! Professor list and form state.

use std::fmt;

use defensa_model::{Gender, Professor};
use defensa_select::{DependentSelect, FlatSelect};
use defensa_validate::FormReport;

/// The three query modes of the professor screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProfessorFilterMode {
    /// Average age by area, province and abroad flag.
    AverageAge,
    /// Address of the oldest professor, excluding a municipality.
    OldestAddress,
    /// Search by rank, location and abroad flag.
    Search,
}

impl ProfessorFilterMode {
    pub const ALL: [ProfessorFilterMode; 3] = [
        ProfessorFilterMode::AverageAge,
        ProfessorFilterMode::OldestAddress,
        ProfessorFilterMode::Search,
    ];
}

impl fmt::Display for ProfessorFilterMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            ProfessorFilterMode::AverageAge => "Promedio de edad",
            ProfessorFilterMode::OldestAddress => "Dirección del profesor más viejo",
            ProfessorFilterMode::Search => "Categoría docente y viaje al extranjero",
        };
        f.write_str(label)
    }
}

/// Tri-state "went abroad" filter choice.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AbroadChoice {
    Yes,
    No,
}

impl AbroadChoice {
    pub const ALL: [AbroadChoice; 2] = [AbroadChoice::Yes, AbroadChoice::No];

    pub fn as_bool(self) -> bool {
        matches!(self, AbroadChoice::Yes)
    }

    pub fn from_bool(value: bool) -> Self {
        if value { AbroadChoice::Yes } else { AbroadChoice::No }
    }
}

impl fmt::Display for AbroadChoice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            AbroadChoice::Yes => "Sí",
            AbroadChoice::No => "No",
        })
    }
}

/// Professor search screen. Switching mode resets every filter.
#[derive(Debug)]
pub struct ProfessorListState {
    pub mode: ProfessorFilterMode,
    pub professors: Vec<Professor>,
    /// Province → municipality filter pair. Id-keyed in the UI; the wire
    /// receives the selected option labels.
    pub location: DependentSelect<i64>,
    pub area: FlatSelect<String>,
    pub academic_rank: FlatSelect<String>,
    pub went_abroad: Option<bool>,
    pub pending_delete: Option<i64>,
    pub detail: Option<Professor>,
}

impl Default for ProfessorListState {
    fn default() -> Self {
        Self {
            mode: ProfessorFilterMode::Search,
            professors: Vec::new(),
            location: DependentSelect::new(),
            area: FlatSelect::new(),
            academic_rank: FlatSelect::new(),
            went_abroad: None,
            pending_delete: None,
            detail: None,
        }
    }
}

impl ProfessorListState {
    /// Reset the filters and results, keeping the loaded option lists.
    pub fn reset_filters(&mut self) {
        self.location.select_primary(None);
        self.area.select(None);
        self.academic_rank.select(None);
        self.went_abroad = None;
        self.professors.clear();
    }
}

/// Professor create/edit form.
#[derive(Debug, Default)]
pub struct ProfessorFormState {
    pub id: Option<i64>,
    pub first_name: String,
    pub last_name: String,
    pub gender: Option<Gender>,
    /// Birth date as typed (`YYYY-MM-DD`), parsed on save; the age field is
    /// derived from it.
    pub birth_date: String,
    pub age: u32,
    pub went_abroad: bool,
    pub area: FlatSelect<String>,
    pub academic_rank: FlatSelect<String>,
    pub scientific_category: FlatSelect<String>,
    pub street: String,
    pub number: String,
    pub location: DependentSelect<i64>,
    pub report: FormReport,
    pub saving: bool,
}

impl ProfessorFormState {
    pub fn create() -> Self {
        Self::default()
    }

    pub fn edit(id: i64) -> Self {
        Self {
            id: Some(id),
            ..Self::default()
        }
    }

    pub fn is_edit(&self) -> bool {
        self.id.is_some()
    }
}
