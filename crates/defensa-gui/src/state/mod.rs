//! Application state for the Elm architecture.
//!
//! [`AppState`] is the single root: the active view, the shared layout
//! state (sidebar, busy overlay), the current toast and the API client with
//! its session. All mutation happens in the update path.

pub mod auth;
pub mod layout;
pub mod professors;
pub mod students;

use defensa_client::{ApiClient, SessionStore};

use crate::settings::Settings;
use auth::{ApprovalState, LoginState, RegisterState};
use layout::{LayoutState, Toast};
use professors::{ProfessorFormState, ProfessorListState};
use students::{StudentFormState, StudentListState};

/// Navigation targets. Mirrors the route table of the web client, with the
/// token-presence guard applied in `App::navigate`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route {
    Login,
    Register,
    RegisterSuccess,
    Approval,
    Home,
    Students,
    StudentCreate,
    StudentEdit(i64),
    Professors,
    ProfessorCreate,
    ProfessorEdit(i64),
}

impl Route {
    /// Whether the route sits behind the session guard.
    pub fn requires_session(&self) -> bool {
        !matches!(
            self,
            Route::Login | Route::Register | Route::RegisterSuccess | Route::Approval
        )
    }
}

/// The active screen and its state.
#[derive(Debug)]
pub enum ViewState {
    Login(LoginState),
    Register(RegisterState),
    RegisterSuccess,
    Approval(ApprovalState),
    Home,
    Students(StudentListState),
    StudentForm(StudentFormState),
    Professors(ProfessorListState),
    ProfessorForm(ProfessorFormState),
}

impl ViewState {
    pub fn login() -> Self {
        Self::Login(LoginState::default())
    }
}

/// All application state.
#[derive(Debug)]
pub struct AppState {
    pub settings: Settings,
    pub client: ApiClient,
    pub view: ViewState,
    pub layout: LayoutState,
    pub toast: Option<Toast>,
}

impl AppState {
    pub fn new() -> Self {
        let settings = Settings::load();
        let session = SessionStore::new();
        // Building the HTTP client only fails if the TLS backend cannot
        // initialize, which is unrecoverable at startup anyway.
        let client = ApiClient::new(&settings.client_config(), session)
            .expect("failed to create HTTP client");
        Self {
            settings,
            client,
            view: ViewState::login(),
            layout: LayoutState::default(),
            toast: None,
        }
    }

    pub fn is_authenticated(&self) -> bool {
        self.client.session().is_authenticated()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_account_screens_skip_the_session_guard() {
        assert!(!Route::Login.requires_session());
        assert!(!Route::Register.requires_session());
        assert!(!Route::RegisterSuccess.requires_session());
        assert!(!Route::Approval.requires_session());

        assert!(Route::Home.requires_session());
        assert!(Route::Students.requires_session());
        assert!(Route::StudentEdit(3).requires_session());
        assert!(Route::ProfessorCreate.requires_session());
    }
}
