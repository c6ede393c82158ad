use super::{
    client::{map_typed_response, ApiClient},
    types::{ApiError, UserRecord},
};

impl ApiClient {
    pub async fn list_users(&self) -> Result<Vec<UserRecord>, ApiError> {
        let base_url = self.resolved_base_url().await;
        let response = self
            .http_client()
            .get(format!("{}/api/users", base_url))
            .send()
            .await
            .map_err(ApiClient::map_transport_failure)?;
        map_typed_response(response).await
    }
}
