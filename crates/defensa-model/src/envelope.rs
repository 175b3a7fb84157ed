use serde::Deserialize;

/// `{ "result": ... }` envelope used by search, averages and the complement
/// catalogs.
#[derive(Debug, Clone, Deserialize)]
pub struct ResultEnvelope<T> {
    pub result: T,
}

/// `{ "data": ... }` envelope used by registration and single-record reads.
#[derive(Debug, Clone, Deserialize)]
pub struct DataEnvelope<T> {
    pub data: T,
}

/// Outcome body of the account approval/rejection endpoints.
#[derive(Debug, Clone, Deserialize)]
pub struct ActionOutcome {
    pub success: bool,
    #[serde(default)]
    pub message: Option<String>,
}

/// Error body the backend attaches to non-2xx responses.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ErrorBody {
    #[serde(default)]
    pub message: Option<String>,
}

/// Body of a successful login.
#[derive(Debug, Clone, Deserialize)]
pub struct LoginResponse {
    pub token: String,
}
