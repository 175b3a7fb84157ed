use serde::Serialize;

use crate::rules::FieldKind;

/// One rejected field with its display message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldIssue {
    pub field: String,
    pub message: String,
}

/// Aggregated outcome of validating a whole form.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct FormReport {
    pub issues: Vec<FieldIssue>,
}

impl FormReport {
    pub fn is_valid(&self) -> bool {
        self.issues.is_empty()
    }

    /// First message, for forms that surface one toast per submit attempt.
    pub fn first_message(&self) -> Option<&str> {
        self.issues.first().map(|i| i.message.as_str())
    }

    /// Message for a specific field, for inline display under the input.
    pub fn message_for(&self, field: &str) -> Option<&str> {
        self.issues
            .iter()
            .find(|i| i.field == field)
            .map(|i| i.message.as_str())
    }
}

/// Builder that runs a form's fields through the shared rules.
///
/// The required check is centralized here; individual kinds only validate
/// character sets and length on non-empty values.
#[derive(Debug, Default)]
pub struct FormCheck {
    report: FormReport,
}

impl FormCheck {
    pub fn new() -> Self {
        Self::default()
    }

    fn push(&mut self, field: &str, message: impl Into<String>) {
        self.report.issues.push(FieldIssue {
            field: field.to_string(),
            message: message.into(),
        });
    }

    /// The field must be non-blank.
    pub fn required(mut self, field: &str, value: &str) -> Self {
        if value.trim().is_empty() {
            self.push(field, "Este campo es obligatorio.");
        }
        self
    }

    /// A dropdown or date selection must be present.
    pub fn required_selection<T>(mut self, field: &str, value: Option<&T>) -> Self {
        if value.is_none() {
            self.push(field, "Este campo es obligatorio.");
        }
        self
    }

    /// Length cap and character rules for a non-empty value.
    pub fn field(mut self, field: &str, kind: FieldKind, value: &str) -> Self {
        if value.is_empty() {
            return self;
        }
        if value.chars().count() > kind.max_length() {
            let message = format!("Máximo {} caracteres permitidos.", kind.max_length());
            self.push(field, message);
        } else if !kind.accepts(value) {
            self.push(field, kind.message());
        }
        self
    }

    /// Two values must be identical (password confirmation).
    pub fn matching(mut self, field: &str, a: &str, b: &str, message: &str) -> Self {
        if a != b {
            self.push(field, message);
        }
        self
    }

    /// Record an issue produced outside the shared rules (date parsing).
    pub fn issue(mut self, field: &str, message: impl Into<String>) -> Self {
        self.push(field, message);
        self
    }

    pub fn finish(self) -> FormReport {
        self.report
    }
}
