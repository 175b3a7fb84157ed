//! State of the unauthenticated screens: login, registration and the
//! account approval flow.

use std::fmt;

use defensa_validate::FormReport;

/// Login form.
#[derive(Debug, Clone, Default)]
pub struct LoginState {
    pub username: String,
    pub password: String,
    pub submitting: bool,
}

/// Registration form. The password checklist is derived from these fields
/// at view time.
#[derive(Debug, Clone, Default)]
pub struct RegisterState {
    pub first_name: String,
    pub last_name: String,
    pub username: String,
    pub email: String,
    pub password: String,
    pub confirm_password: String,
    /// Outcome of the last submit attempt, for inline field errors.
    pub report: FormReport,
    pub submitting: bool,
}

/// What the administrator wants to do with the account.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ApprovalAction {
    Approve,
    Reject,
}

impl ApprovalAction {
    pub const ALL: [ApprovalAction; 2] = [ApprovalAction::Approve, ApprovalAction::Reject];
}

impl fmt::Display for ApprovalAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            ApprovalAction::Approve => "Aprobar",
            ApprovalAction::Reject => "Rechazar",
        };
        f.write_str(label)
    }
}

/// Account approval screen.
#[derive(Debug, Clone)]
pub struct ApprovalState {
    pub email: String,
    pub action: ApprovalAction,
    pub processing: bool,
    /// Outcome message of the last attempt: Ok for success, Err for failure.
    pub outcome: Option<Result<String, String>>,
}

impl Default for ApprovalState {
    fn default() -> Self {
        Self {
            email: String::new(),
            action: ApprovalAction::Approve,
            processing: false,
            outcome: None,
        }
    }
}
