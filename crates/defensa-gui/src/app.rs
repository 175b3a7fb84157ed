//! Application root: the Elm update/view cycle and navigation.
//!
//! All state changes happen in `update()`; views are pure functions. Message
//! handlers are organized per screen in `handler/`.

mod handler;

use iced::{Element, Subscription, Task, Theme};

use defensa_client::ApiError;
use defensa_select::SourceError;

use crate::message::{Message, ToastMessage};
use crate::state::auth::{ApprovalState, LoginState, RegisterState};
use crate::state::layout::Toast;
use crate::state::professors::{ProfessorFormState, ProfessorListState};
use crate::state::students::{StudentFormState, StudentListState};
use crate::state::{AppState, Route, ViewState};
use crate::view;

/// Main application struct.
pub struct App {
    pub state: AppState,
}

impl App {
    /// Called once at startup.
    pub fn new() -> (Self, Task<Message>) {
        let app = Self {
            state: AppState::new(),
        };
        (app, Task::none())
    }

    /// Update application state in response to a message.
    pub fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::Navigate(route) => self.navigate(route),

            Message::ToggleSidebar => {
                self.state.layout.sidebar_open = !self.state.layout.sidebar_open;
                Task::none()
            }

            Message::Logout => {
                self.state.client.logout();
                tracing::info!("session closed by user");
                self.navigate(Route::Login)
            }

            Message::Toast(ToastMessage::Show(toast)) => {
                self.state.toast = Some(toast);
                Task::none()
            }
            Message::Toast(ToastMessage::Dismiss) => {
                self.state.toast = None;
                Task::none()
            }

            Message::Login(msg) => self.handle_login_message(msg),
            Message::Register(msg) => self.handle_register_message(msg),
            Message::Approval(msg) => self.handle_approval_message(msg),
            Message::Students(msg) => self.handle_student_message(msg),
            Message::Professors(msg) => self.handle_professor_message(msg),

            Message::Noop => Task::none(),
        }
    }

    /// Navigate to a route, applying the token-presence guard: protected
    /// routes fall back to login without a session, and the login screen
    /// redirects home once a session exists.
    pub fn navigate(&mut self, route: Route) -> Task<Message> {
        let route = if route.requires_session() && !self.state.is_authenticated() {
            Route::Login
        } else if route == Route::Login && self.state.is_authenticated() {
            Route::Home
        } else {
            route
        };

        match route {
            Route::Login => {
                self.state.view = ViewState::login();
                Task::none()
            }
            Route::Register => {
                self.state.view = ViewState::Register(RegisterState::default());
                Task::none()
            }
            Route::RegisterSuccess => {
                self.state.view = ViewState::RegisterSuccess;
                Task::none()
            }
            Route::Approval => {
                self.state.view = ViewState::Approval(ApprovalState::default());
                Task::none()
            }
            Route::Home => {
                self.state.view = ViewState::Home;
                Task::none()
            }
            Route::Students => self.open_students(),
            Route::StudentCreate => self.open_student_form(None),
            Route::StudentEdit(id) => self.open_student_form(Some(id)),
            Route::Professors => self.open_professors(),
            Route::ProfessorCreate => self.open_professor_form(None),
            Route::ProfessorEdit(id) => self.open_professor_form(Some(id)),
        }
    }

    /// Render the current view inside the chrome.
    pub fn view(&self) -> Element<'_, Message> {
        let content: Element<'_, Message> = match &self.state.view {
            ViewState::Login(state) => view::auth::login(state, &self.state.settings.api_url),
            ViewState::Register(state) => view::auth::register(state),
            ViewState::RegisterSuccess => view::auth::register_success(),
            ViewState::Approval(state) => view::approval::approval(state),
            ViewState::Home => view::home::home(),
            ViewState::Students(state) => view::students::list(state),
            ViewState::StudentForm(state) => view::students::form(state),
            ViewState::Professors(state) => view::professors::list(state),
            ViewState::ProfessorForm(state) => view::professors::form(state),
        };
        view::layout::page(&self.state, content)
    }

    /// Window title, echoing the active section.
    pub fn title(&self) -> String {
        let section = match &self.state.view {
            ViewState::Login(_) => "Iniciar Sesión",
            ViewState::Register(_) | ViewState::RegisterSuccess => "Registro",
            ViewState::Approval(_) => "Aprobación de Usuarios",
            ViewState::Home => "Inicio",
            ViewState::Students(_) => "Estudiantes",
            ViewState::StudentForm(state) if state.is_edit() => "Editar Estudiante",
            ViewState::StudentForm(_) => "Registrar Estudiante",
            ViewState::Professors(_) => "Profesores",
            ViewState::ProfessorForm(state) if state.is_edit() => "Editar Profesor",
            ViewState::ProfessorForm(_) => "Registrar Profesor",
        };
        format!("{section} - Defensa UC")
    }

    pub fn theme(&self) -> Theme {
        crate::theme::app_theme()
    }

    /// Toast auto-dismiss timer, active only while a toast is visible.
    pub fn subscription(&self) -> Subscription<Message> {
        use std::time::Duration;

        if self.state.toast.is_some() {
            iced::time::every(Duration::from_secs(5)).map(|_| Message::Toast(ToastMessage::Dismiss))
        } else {
            Subscription::none()
        }
    }

    // =========================================================================
    // Shared handler plumbing
    // =========================================================================

    pub(crate) fn show_toast(&mut self, toast: Toast) {
        self.state.toast = Some(toast);
    }

    /// Surface a backend error. A 401 drops the session and returns to the
    /// login screen, mirroring the old response interceptor.
    pub(crate) fn api_error(&mut self, error: &ApiError) -> Task<Message> {
        if error.is_session_expired() {
            tracing::warn!("session expired, returning to login");
            self.state.client.logout();
            self.show_toast(Toast::warning(error.user_message()));
            self.state.view = ViewState::login();
        } else {
            tracing::error!(%error, "backend call failed");
            self.show_toast(Toast::error(error.user_message()));
        }
        Task::none()
    }

    /// Surface a lookup failure (option lists). Reported once per attempt.
    pub(crate) fn source_error(&mut self, error: &SourceError) {
        let SourceError::Unavailable(message) = error else {
            return;
        };
        tracing::error!(%message, "lookup fetch failed");
        self.show_toast(Toast::error(message.clone()));
    }

    // Accessors for the per-screen states; each returns None when the user
    // has already navigated away, which drops late messages harmlessly.

    pub(crate) fn login_state(&mut self) -> Option<&mut LoginState> {
        match &mut self.state.view {
            ViewState::Login(state) => Some(state),
            _ => None,
        }
    }

    pub(crate) fn register_state(&mut self) -> Option<&mut RegisterState> {
        match &mut self.state.view {
            ViewState::Register(state) => Some(state),
            _ => None,
        }
    }

    pub(crate) fn approval_state(&mut self) -> Option<&mut ApprovalState> {
        match &mut self.state.view {
            ViewState::Approval(state) => Some(state),
            _ => None,
        }
    }

    pub(crate) fn students_state(&mut self) -> Option<&mut StudentListState> {
        match &mut self.state.view {
            ViewState::Students(state) => Some(state),
            _ => None,
        }
    }

    pub(crate) fn student_form_state(&mut self) -> Option<&mut StudentFormState> {
        match &mut self.state.view {
            ViewState::StudentForm(state) => Some(state),
            _ => None,
        }
    }

    pub(crate) fn professors_state(&mut self) -> Option<&mut ProfessorListState> {
        match &mut self.state.view {
            ViewState::Professors(state) => Some(state),
            _ => None,
        }
    }

    pub(crate) fn professor_form_state(&mut self) -> Option<&mut ProfessorFormState> {
        match &mut self.state.view {
            ViewState::ProfessorForm(state) => Some(state),
            _ => None,
        }
    }
}
