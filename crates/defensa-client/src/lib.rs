//! HTTP client for the Defensa backend.
//!
//! One thin wrapper per backend operation, no client-side caching and no
//! automatic retries: a failed call surfaces once and the caller decides.
//! The bearer token lives in a single [`SessionStore`]; every request reads
//! it from there and a 401 anywhere maps to [`ApiError::Unauthorized`] so
//! the UI can drop the session and return to the login screen.

mod auth;
mod catalog;
mod client;
mod config;
mod error;
mod professors;
mod session;
mod sources;
mod students;
mod users;

pub use client::ApiClient;
pub use config::ClientConfig;
pub use error::ApiError;
pub use professors::ProfessorSearch;
pub use session::SessionStore;
pub use sources::{CatalogKind, CatalogSource, LocationSource, name_options_from, options_from};
pub use students::StudentSearch;
