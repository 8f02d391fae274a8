use async_trait::async_trait;
use reqwest::header::CONTENT_TYPE;
use reqwest::Client;
use thiserror::Error;
use crate::enums::action::Action;
use crate::structs::api_request::{ApiRequest, Payload};
use crate::structs::api_response::ApiResponse;
use crate::structs::config::api_config::ApiConfig;
use crate::traits::school_api::SchoolApi;

#[derive(Debug, Error)]
enum TransportError {
    #[error("request failed: {0}")]
    Http(#[from] reqwest::Error),
    #[error("response is not a JSON envelope: {0}")]
    Decode(#[from] serde_json::Error),
}

/// Client for the spreadsheet-backed API. One attempt per call, no timeout.
#[derive(Clone)]
pub struct ApiClient {
    endpoint: String,
    client: Client,
}

impl ApiClient {
    pub fn new(endpoint: &str) -> Self {
        Self {
            endpoint: endpoint.to_string(),
            client: Client::new(),
        }
    }

    pub fn from_config(config: &ApiConfig) -> Self {
        Self::new(&config.url)
    }

    async fn post(&self, action: Action, payload: Payload) -> Result<ApiResponse, TransportError> {
        let body = serde_json::to_string(&ApiRequest::new(action, payload))?;

        // text/plain keeps the browser deployment free of a CORS preflight
        let text = self
            .client
            .post(&self.endpoint)
            .header(CONTENT_TYPE, "text/plain")
            .body(body)
            .send()
            .await?
            .text()
            .await?;

        Ok(serde_json::from_str(&text)?)
    }

    async fn get(&self, action: Action) -> Result<ApiResponse, TransportError> {
        let text = self
            .client
            .get(&self.endpoint)
            .query(&[("action", action.as_str())])
            .send()
            .await?
            .text()
            .await?;

        Ok(serde_json::from_str(&text)?)
    }
}

#[async_trait]
impl SchoolApi for ApiClient {
    async fn send(&self, action: Action, payload: Payload) -> ApiResponse {
        log::debug!("➡️ POST {} ({} fields)", action, payload.len());
        match self.post(action, payload).await {
            Ok(response) => response,
            Err(e) => {
                log::error!("API Error [{}]: {}", action, e);
                ApiResponse::network_error()
            }
        }
    }

    async fn fetch_one(&self, action: Action) -> ApiResponse {
        log::debug!("➡️ GET ?action={}", action);
        match self.get(action).await {
            Ok(response) => response,
            Err(e) => {
                log::error!("API Error [{}]: {}", action, e);
                ApiResponse::network_error()
            }
        }
    }
}
