//! Message hierarchy for the Elm-style architecture.
//!
//! All user interactions and background-task completions flow through these
//! types. Responses that race with newer state carry the request token they
//! were issued with, so the handlers can drop the stale ones.

use defensa_client::ApiError;
use defensa_model::{ActionOutcome, Address, Gender, Professor, RegisteredUser, Student};
use defensa_select::{SelectOption, SourceError};

use crate::state::Route;
use crate::state::auth::ApprovalAction;
use crate::state::layout::Toast;
use crate::state::professors::ProfessorFilterMode;

/// Root message enum for the application.
#[derive(Debug, Clone)]
pub enum Message {
    // Navigation and chrome
    Navigate(Route),
    ToggleSidebar,
    Logout,
    Toast(ToastMessage),

    // View-specific messages
    Login(LoginMessage),
    Register(RegisterMessage),
    Approval(ApprovalMessage),
    Students(StudentMessage),
    Professors(ProfessorMessage),

    /// No operation - used for placeholder actions.
    Noop,
}

/// Toast notification messages.
#[derive(Debug, Clone)]
pub enum ToastMessage {
    Show(Toast),
    Dismiss,
}

/// Login view messages.
#[derive(Debug, Clone)]
pub enum LoginMessage {
    UsernameChanged(String),
    PasswordChanged(String),
    Submit,
    Completed(Result<(), ApiError>),
}

/// Register view messages.
#[derive(Debug, Clone)]
pub enum RegisterMessage {
    FirstNameChanged(String),
    LastNameChanged(String),
    UsernameChanged(String),
    EmailChanged(String),
    PasswordChanged(String),
    ConfirmPasswordChanged(String),
    Submit,
    Completed(Result<RegisteredUser, ApiError>),
}

/// Account approval view messages.
#[derive(Debug, Clone)]
pub enum ApprovalMessage {
    EmailChanged(String),
    ActionPicked(ApprovalAction),
    Submit,
    Completed(Result<ActionOutcome, ApiError>),
}

/// Student list and form messages.
#[derive(Debug, Clone)]
pub enum StudentMessage {
    // Search filters
    SearchNameChanged(String),
    SuggestionsLoaded {
        token: u64,
        result: Result<Vec<Student>, ApiError>,
    },
    SuggestionPicked(String),
    YearPicked(u8),
    ProvincesLoaded {
        token: u64,
        result: Result<Vec<SelectOption<i64>>, SourceError>,
    },
    ProvincePicked(i64),
    Search,
    ClearFilters,
    ResultsLoaded(Result<Vec<Student>, ApiError>),

    // Average-age query
    AverageAge,
    AverageAgeLoaded(Result<f64, ApiError>),

    // Row actions
    ShowDetail(i64),
    CloseDetail,
    DeleteRequested(i64),
    DeleteCancelled,
    DeleteConfirmed,
    Deleted(Result<(), ApiError>),

    // Create / edit form
    Form(StudentFormMessage),
}

/// Student create/edit form messages.
#[derive(Debug, Clone)]
pub enum StudentFormMessage {
    RecordLoaded(Result<Student, ApiError>),
    FirstNameChanged(String),
    LastNameChanged(String),
    GenderPicked(Gender),
    BirthDateChanged(String),
    MajorsLoaded {
        token: u64,
        result: Result<Vec<SelectOption<String>>, SourceError>,
    },
    MajorPicked(String),
    ProvincesLoaded(Result<Vec<SelectOption<i64>>, SourceError>),
    ProvincePicked(i64),
    MunicipalitiesLoaded {
        token: u64,
        result: Result<Vec<SelectOption<i64>>, SourceError>,
    },
    MunicipalityPicked(i64),
    StreetChanged(String),
    NumberChanged(String),
    Save,
    Saved(Result<(), ApiError>),
    Cancel,
}

/// Professor list and form messages.
#[derive(Debug, Clone)]
pub enum ProfessorMessage {
    // Filter mode and inputs
    ModePicked(ProfessorFilterMode),
    ProvincesLoaded(Result<Vec<SelectOption<i64>>, SourceError>),
    ProvincePicked(i64),
    MunicipalitiesLoaded {
        token: u64,
        result: Result<Vec<SelectOption<i64>>, SourceError>,
    },
    MunicipalityPicked(i64),
    AreasLoaded {
        token: u64,
        result: Result<Vec<SelectOption<String>>, SourceError>,
    },
    AreaPicked(String),
    RanksLoaded {
        token: u64,
        result: Result<Vec<SelectOption<String>>, SourceError>,
    },
    RankPicked(String),
    AbroadPicked(bool),
    Search,
    ClearFilters,
    ResultsLoaded(Result<Vec<Professor>, ApiError>),

    // Statistic queries
    AverageAge,
    AverageAgeLoaded(Result<f64, ApiError>),
    OldestAddress,
    OldestAddressLoaded(Result<Address, ApiError>),

    // Row actions
    ShowDetail(i64),
    CloseDetail,
    DeleteRequested(i64),
    DeleteCancelled,
    DeleteConfirmed,
    Deleted(Result<(), ApiError>),

    // Create / edit form
    Form(ProfessorFormMessage),
}

/// Professor create/edit form messages.
#[derive(Debug, Clone)]
pub enum ProfessorFormMessage {
    RecordLoaded(Result<Professor, ApiError>),
    FirstNameChanged(String),
    LastNameChanged(String),
    GenderPicked(Gender),
    BirthDateChanged(String),
    AbroadToggled(bool),
    AreasLoaded {
        token: u64,
        result: Result<Vec<SelectOption<String>>, SourceError>,
    },
    AreaPicked(String),
    RanksLoaded {
        token: u64,
        result: Result<Vec<SelectOption<String>>, SourceError>,
    },
    RankPicked(String),
    CategoriesLoaded {
        token: u64,
        result: Result<Vec<SelectOption<String>>, SourceError>,
    },
    CategoryPicked(String),
    ProvincesLoaded(Result<Vec<SelectOption<i64>>, SourceError>),
    ProvincePicked(i64),
    MunicipalitiesLoaded {
        token: u64,
        result: Result<Vec<SelectOption<i64>>, SourceError>,
    },
    MunicipalityPicked(i64),
    StreetChanged(String),
    NumberChanged(String),
    Save,
    Saved(Result<(), ApiError>),
    Cancel,
}
