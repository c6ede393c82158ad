use reqwest::{Client, Response};
use serde::de::DeserializeOwned;

use crate::{api::types::ApiError, config};

#[derive(Clone, Default)]
pub struct ApiClient {
    client: Client,
    base_url: Option<String>,
}

impl ApiClient {
    pub fn new() -> Self {
        Self {
            client: Client::new(),
            base_url: None,
        }
    }

    pub fn new_with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            base_url: Some(config::normalize_base_url(&base_url.into())),
        }
    }

    pub(crate) fn http_client(&self) -> &Client {
        &self.client
    }

    pub(crate) async fn resolved_base_url(&self) -> String {
        if let Some(base) = &self.base_url {
            base.clone()
        } else {
            config::await_api_base_url().await
        }
    }

    pub(crate) fn map_transport_failure(error: reqwest::Error) -> ApiError {
        log::error!("Request failed: {}", error);
        ApiError::request_failed(format!("Request failed: {}", error))
    }

    pub(crate) fn map_error_payload_parse_failure(error: reqwest::Error) -> ApiError {
        log::error!("Failed to parse error payload: {}", error);
        ApiError::unknown(format!("Failed to parse error: {}", error))
    }
}

async fn error_from_response(response: Response) -> ApiError {
    let status = response.status();
    match response.json::<ApiError>().await {
        Ok(error) => {
            log::warn!("Server rejected request ({}): {}", status, error.error);
            error
        }
        Err(e) => ApiClient::map_error_payload_parse_failure(e),
    }
}

pub(crate) async fn map_typed_response<T>(response: Response) -> Result<T, ApiError>
where
    T: DeserializeOwned,
{
    if response.status().is_success() {
        response.json().await.map_err(|e| {
            log::error!("Failed to parse response: {}", e);
            ApiError::unknown(format!("Failed to parse response: {}", e))
        })
    } else {
        Err(error_from_response(response).await)
    }
}

pub(crate) async fn map_empty_response(response: Response) -> Result<(), ApiError> {
    if response.status().is_success() {
        Ok(())
    } else {
        Err(error_from_response(response).await)
    }
}
