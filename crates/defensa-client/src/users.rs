use defensa_model::{ActionOutcome, DataEnvelope, NewUser, RegisteredUser};

use crate::client::ApiClient;
use crate::error::ApiError;

/// Account registration and the approve/reject flow administrators trigger
/// from the notification they receive.
impl ApiClient {
    pub async fn register_user(&self, user: &NewUser) -> Result<RegisteredUser, ApiError> {
        let envelope: DataEnvelope<RegisteredUser> = self.post_json("/user", user).await?;
        Ok(envelope.data)
    }

    pub async fn approve_user(&self, email: &str) -> Result<ActionOutcome, ApiError> {
        self.post_query("/user/approve", &[("email", email.to_string())])
            .await
    }

    pub async fn reject_user(&self, email: &str) -> Result<ActionOutcome, ApiError> {
        self.post_query("/user/reject", &[("email", email.to_string())])
            .await
    }
}
