use super::{
    client::{map_empty_response, ApiClient},
    types::{ApiError, EmailSubmission},
};

impl ApiClient {
    /// Asks the backend to mail a reset link. One attempt, no retry.
    pub async fn request_password_reset(&self, email: String) -> Result<(), ApiError> {
        let base_url = self.resolved_base_url().await;
        let response = self
            .http_client()
            .post(format!("{}/api/password/forgot-password", base_url))
            .json(&EmailSubmission { email })
            .send()
            .await
            .map_err(ApiClient::map_transport_failure)?;
        map_empty_response(response).await
    }
}
