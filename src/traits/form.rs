use crate::config::constants::INVALID_FORM_MESSAGE;
use crate::enums::action::Action;
use crate::structs::api_request::Payload;
use crate::structs::validation_result::ValidationResult;

/// A submittable form: what it validates, what it sends, what it says.
pub trait Form: Send + Sync {
    fn action(&self) -> Action;

    fn validate(&self) -> ValidationResult;

    fn payload(&self) -> Payload;

    fn success_message(&self) -> &'static str;

    /// Shown when the server fails without an error message.
    fn failure_fallback(&self) -> &'static str;

    fn invalid_message(&self) -> &'static str {
        INVALID_FORM_MESSAGE
    }

    /// Contact and enrollment forms are replaced by a confirmation view;
    /// others stay usable after success.
    fn terminal_on_success(&self) -> bool {
        true
    }
}
