use crate::api::{ApiClient, ApiError};
use std::rc::Rc;

#[derive(Clone)]
pub struct ForgotPasswordRepository {
    client: Rc<ApiClient>,
}

impl ForgotPasswordRepository {
    pub fn new_with_client(client: Rc<ApiClient>) -> Self {
        Self { client }
    }

    pub async fn request_reset(&self, email: String) -> Result<(), ApiError> {
        self.client.request_password_reset(email).await
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use httpmock::prelude::*;
    use serde_json::json;

    fn repository(server: &MockServer) -> ForgotPasswordRepository {
        ForgotPasswordRepository::new_with_client(Rc::new(ApiClient::new_with_base_url(
            server.base_url(),
        )))
    }

    #[tokio::test]
    async fn request_reset_calls_api() {
        let server = MockServer::start_async().await;
        let mock = server
            .mock_async(|when, then| {
                when.method(POST)
                    .path("/api/password/forgot-password")
                    .json_body(json!({ "email": "bob@example.com" }));
                then.status(200).json_body(json!({ "message": "sent" }));
            })
            .await;

        repository(&server)
            .request_reset("bob@example.com".into())
            .await
            .unwrap();
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn request_reset_propagates_server_error() {
        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.method(POST).path("/api/password/forgot-password");
                then.status(400).json_body(json!({ "error": "Invalid email" }));
            })
            .await;

        let error = repository(&server)
            .request_reset("not-an-email".into())
            .await
            .expect_err("should return server error");
        assert_eq!(error.error, "Invalid email");
    }
}
