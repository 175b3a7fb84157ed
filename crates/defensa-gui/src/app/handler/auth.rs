//! Login, registration and account-approval handlers.

use iced::Task;

use defensa_model::NewUser;
use defensa_validate::{FieldKind, FormCheck};

use crate::app::App;
use crate::message::{ApprovalMessage, LoginMessage, Message, RegisterMessage};
use crate::state::Route;
use crate::state::auth::ApprovalAction;
use crate::state::layout::Toast;

impl App {
    pub(crate) fn handle_login_message(&mut self, msg: LoginMessage) -> Task<Message> {
        match msg {
            LoginMessage::UsernameChanged(value) => {
                if let Some(state) = self.login_state() {
                    state.username = value;
                }
                Task::none()
            }

            LoginMessage::PasswordChanged(value) => {
                if let Some(state) = self.login_state() {
                    state.password = value;
                }
                Task::none()
            }

            LoginMessage::Submit => {
                let mut missing = false;
                let mut credentials = None;
                if let Some(state) = self.login_state() {
                    if state.username.trim().is_empty() || state.password.is_empty() {
                        missing = true;
                    } else {
                        state.submitting = true;
                        credentials = Some((state.username.clone(), state.password.clone()));
                    }
                }
                if missing {
                    self.show_toast(Toast::warning("Por favor completa todos los campos."));
                    return Task::none();
                }
                let Some((username, password)) = credentials else {
                    return Task::none();
                };
                let client = self.state.client.clone();
                Task::perform(
                    async move { client.login(&username, &password).await },
                    |result| Message::Login(LoginMessage::Completed(result)),
                )
            }

            LoginMessage::Completed(result) => {
                if let Some(state) = self.login_state() {
                    state.submitting = false;
                }
                match result {
                    Ok(()) => {
                        tracing::info!("session opened");
                        self.navigate(Route::Home)
                    }
                    Err(error) => self.api_error(&error),
                }
            }
        }
    }

    pub(crate) fn handle_register_message(&mut self, msg: RegisterMessage) -> Task<Message> {
        match msg {
            RegisterMessage::FirstNameChanged(value) => {
                if let Some(state) = self.register_state() {
                    state.first_name = value;
                }
                Task::none()
            }
            RegisterMessage::LastNameChanged(value) => {
                if let Some(state) = self.register_state() {
                    state.last_name = value;
                }
                Task::none()
            }
            RegisterMessage::UsernameChanged(value) => {
                if let Some(state) = self.register_state() {
                    state.username = value;
                }
                Task::none()
            }
            RegisterMessage::EmailChanged(value) => {
                if let Some(state) = self.register_state() {
                    state.email = value;
                }
                Task::none()
            }
            RegisterMessage::PasswordChanged(value) => {
                if let Some(state) = self.register_state() {
                    state.password = value;
                }
                Task::none()
            }
            RegisterMessage::ConfirmPasswordChanged(value) => {
                if let Some(state) = self.register_state() {
                    state.confirm_password = value;
                }
                Task::none()
            }

            RegisterMessage::Submit => {
                let mut first_message = None;
                let mut payload = None;
                if let Some(state) = self.register_state() {
                    let report = FormCheck::new()
                        .required("firstName", &state.first_name)
                        .field("firstName", FieldKind::PersonName, &state.first_name)
                        .required("lastName", &state.last_name)
                        .field("lastName", FieldKind::PersonName, &state.last_name)
                        .required("username", &state.username)
                        .field("username", FieldKind::Username, &state.username)
                        .required("email", &state.email)
                        .field("email", FieldKind::Email, &state.email)
                        .required("password", &state.password)
                        .field("password", FieldKind::Password, &state.password)
                        .matching(
                            "confirmPassword",
                            &state.password,
                            &state.confirm_password,
                            "Las contraseñas no coinciden.",
                        )
                        .finish();

                    if report.is_valid() {
                        state.submitting = true;
                        payload = Some(NewUser {
                            first_name: state.first_name.clone(),
                            last_name: state.last_name.clone(),
                            username: state.username.clone(),
                            email: state.email.clone(),
                            password: state.password.clone(),
                            status: true,
                        });
                    } else {
                        first_message = report.first_message().map(str::to_string);
                    }
                    state.report = report;
                }
                if let Some(message) = first_message {
                    self.show_toast(Toast::warning(message));
                    return Task::none();
                }
                let Some(user) = payload else {
                    return Task::none();
                };
                let client = self.state.client.clone();
                Task::perform(async move { client.register_user(&user).await }, |result| {
                    Message::Register(RegisterMessage::Completed(result))
                })
            }

            RegisterMessage::Completed(result) => {
                if let Some(state) = self.register_state() {
                    state.submitting = false;
                }
                match result {
                    Ok(user) => {
                        self.show_toast(Toast::success(format!(
                            "Bienvenido, {} {}.",
                            user.first_name, user.last_name
                        )));
                        self.navigate(Route::RegisterSuccess)
                    }
                    Err(error) => self.api_error(&error),
                }
            }
        }
    }

    pub(crate) fn handle_approval_message(&mut self, msg: ApprovalMessage) -> Task<Message> {
        match msg {
            ApprovalMessage::EmailChanged(value) => {
                if let Some(state) = self.approval_state() {
                    state.email = value;
                }
                Task::none()
            }

            ApprovalMessage::ActionPicked(action) => {
                if let Some(state) = self.approval_state() {
                    state.action = action;
                    state.outcome = None;
                }
                Task::none()
            }

            ApprovalMessage::Submit => {
                let mut invalid = false;
                let mut request = None;
                if let Some(state) = self.approval_state() {
                    if state.email.trim().is_empty() || !FieldKind::Email.accepts(&state.email) {
                        invalid = true;
                    } else {
                        state.processing = true;
                        state.outcome = None;
                        request = Some((state.action, state.email.trim().to_string()));
                    }
                }
                if invalid {
                    self.show_toast(Toast::warning("Solicitud inválida. Parámetros faltantes."));
                    return Task::none();
                }
                let Some((action, email)) = request else {
                    return Task::none();
                };
                let client = self.state.client.clone();
                Task::perform(
                    async move {
                        match action {
                            ApprovalAction::Approve => client.approve_user(&email).await,
                            ApprovalAction::Reject => client.reject_user(&email).await,
                        }
                    },
                    |result| Message::Approval(ApprovalMessage::Completed(result)),
                )
            }

            ApprovalMessage::Completed(result) => {
                let mut failure_message = None;
                if let Some(state) = self.approval_state() {
                    state.processing = false;
                    match result {
                        Ok(outcome) => {
                            let fallback = match state.action {
                                ApprovalAction::Approve => "Usuario aprobado con éxito.",
                                ApprovalAction::Reject => "Usuario rechazado correctamente.",
                            };
                            let message =
                                outcome.message.unwrap_or_else(|| fallback.to_string());
                            if outcome.success {
                                state.outcome = Some(Ok(message));
                            } else {
                                state.outcome = Some(Err(message.clone()));
                                failure_message = Some(message);
                            }
                        }
                        Err(error) => {
                            state.outcome = Some(Err(error.user_message()));
                            return self.api_error(&error);
                        }
                    }
                }
                if let Some(message) = failure_message {
                    self.show_toast(Toast::error(message));
                }
                Task::none()
            }
        }
    }
}
