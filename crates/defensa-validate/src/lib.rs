//! Field validation shared by every form in the application.
//!
//! The register, student and professor forms all enforce the same character
//! sets and length caps; the rules live here once, parameterized by field
//! kind, instead of being repeated per form. Messages are the user-facing
//! strings the forms display next to the offending field.

pub mod dates;
pub mod password;
pub mod report;
pub mod rules;

pub use dates::{DateError, age_on, format_display, parse_birth_date};
pub use password::PasswordStrength;
pub use report::{FieldIssue, FormCheck, FormReport};
pub use rules::FieldKind;
