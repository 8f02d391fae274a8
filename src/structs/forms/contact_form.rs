use serde::Deserialize;
use crate::enums::action::Action;
use crate::helpers::validators::validate_email;
use crate::structs::api_request::{payload_of, Payload};
use crate::structs::validation_result::ValidationResult;
use crate::traits::form::Form;

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ContactForm {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub message: String,
}

impl Form for ContactForm {
    fn action(&self) -> Action {
        Action::SubmitContact
    }

    fn validate(&self) -> ValidationResult {
        let mut result = ValidationResult::new();
        result
            .require("name", &self.name)
            .check("email", validate_email(&self.email), "Invalid email")
            .require("message", &self.message);
        result
    }

    fn payload(&self) -> Payload {
        payload_of([
            ("name", self.name.trim().to_string()),
            ("email", self.email.trim().to_string()),
            ("message", self.message.trim().to_string()),
        ])
    }

    fn success_message(&self) -> &'static str {
        "Message sent successfully!"
    }

    fn failure_fallback(&self) -> &'static str {
        "Failed to send"
    }
}
