//! Message handlers organized by screen.
//!
//! - `auth` - login, registration and account approval
//! - `students` - student search, detail, delete and the create/edit form
//! - `professors` - professor queries, detail, delete and the create/edit form

mod auth;
mod professors;
mod students;
