use async_trait::async_trait;
use crate::enums::action::Action;
use crate::structs::api_request::Payload;
use crate::structs::api_response::ApiResponse;

/// The remote school API. Implementations never fail: transport problems
/// come back as an envelope with `success: false`.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait SchoolApi: Send + Sync {

    /// Mutating call: POST `{action, ...payload}`.
    async fn send(&self, action: Action, payload: Payload) -> ApiResponse;

    /// Read-only call: GET `?action=<action>`.
    async fn fetch_one(&self, action: Action) -> ApiResponse;
}
