use thiserror::Error;

/// Errors surfaced by backend calls.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum ApiError {
    /// The backend could not be reached (connection, DNS, timeout).
    #[error("network error: {0}")]
    Network(String),

    /// The backend answered 401; the session token is missing or expired.
    #[error("session expired or missing")]
    Unauthorized,

    /// The backend rejected the request with a non-2xx status.
    #[error("backend rejected the request ({status}): {message}")]
    Backend { status: u16, message: String },

    /// The response body did not have the expected shape.
    #[error("unexpected response body: {0}")]
    Decode(String),
}

impl ApiError {
    /// Message suitable for a toast, in the application's language.
    pub fn user_message(&self) -> String {
        match self {
            Self::Network(_) => {
                "No se pudo conectar con el servidor. Verifica tu conexión.".to_string()
            }
            Self::Unauthorized => "Su sesión ha expirado. Será redirigido al login.".to_string(),
            Self::Backend { message, .. } => message.clone(),
            Self::Decode(_) => {
                "Ocurrió un error inesperado, por favor intente más tarde.".to_string()
            }
        }
    }

    /// Whether the UI must drop the session and return to login.
    pub fn is_session_expired(&self) -> bool {
        matches!(self, Self::Unauthorized)
    }
}

impl From<reqwest::Error> for ApiError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            Self::Decode(err.to_string())
        } else {
            Self::Network(err.to_string())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn backend_message_is_surfaced_verbatim() {
        let err = ApiError::Backend {
            status: 409,
            message: "El usuario ya existe.".to_string(),
        };
        assert_eq!(err.user_message(), "El usuario ya existe.");
    }

    #[test]
    fn only_unauthorized_expires_the_session() {
        assert!(ApiError::Unauthorized.is_session_expired());
        assert!(!ApiError::Network("timeout".to_string()).is_session_expired());
    }
}
