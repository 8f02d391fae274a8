pub mod admin_session;
pub mod api_request;
pub mod api_response;
pub mod cli;
pub mod config;
pub mod contact_message;
pub mod course;
pub mod forms;
pub mod pending_delete;
pub mod student;
pub mod submit_control;
pub mod submit_outcome;
pub mod toast;
pub mod validation_result;
