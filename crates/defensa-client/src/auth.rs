use serde::Serialize;

use defensa_model::LoginResponse;

use crate::client::ApiClient;
use crate::error::ApiError;

#[derive(Debug, Serialize)]
struct Credentials<'a> {
    username: &'a str,
    password: &'a str,
}

impl ApiClient {
    /// Exchange credentials for a bearer token and store it in the session.
    pub async fn login(&self, username: &str, password: &str) -> Result<(), ApiError> {
        let response: LoginResponse = self
            .post_json("/auth/login", &Credentials { username, password })
            .await?;
        self.session().set(response.token);
        Ok(())
    }

    /// Drop the session token. Purely local; the backend keeps no state.
    pub fn logout(&self) {
        self.session().clear();
    }
}
