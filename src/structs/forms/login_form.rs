use serde::Deserialize;
use crate::enums::action::Action;
use crate::structs::api_request::{payload_of, Payload};
use crate::structs::validation_result::ValidationResult;
use crate::traits::form::Form;

#[derive(Debug, Clone, Default, Deserialize)]
pub struct LoginForm {
    #[serde(default)]
    pub email: String,
    /// Sent as typed; never trimmed.
    #[serde(default)]
    pub password: String,
}

impl Form for LoginForm {
    fn action(&self) -> Action {
        Action::AdminLogin
    }

    fn validate(&self) -> ValidationResult {
        let mut result = ValidationResult::new();
        result
            .require("email", &self.email)
            .check("password", !self.password.is_empty(), "Required");
        result
    }

    fn payload(&self) -> Payload {
        payload_of([
            ("email", self.email.trim().to_string()),
            ("password", self.password.clone()),
        ])
    }

    fn success_message(&self) -> &'static str {
        "Login successful!"
    }

    fn failure_fallback(&self) -> &'static str {
        "Invalid credentials"
    }

    fn invalid_message(&self) -> &'static str {
        "Enter email and password"
    }

    fn terminal_on_success(&self) -> bool {
        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn whitespace_password_is_kept_verbatim() {
        let form = LoginForm { email: " admin@school.in ".into(), password: " ".into() };
        assert!(form.validate().is_valid());
        assert_eq!(form.payload()["password"], " ");
        assert_eq!(form.payload()["email"], "admin@school.in");
    }

    #[test]
    fn both_fields_required() {
        let form = LoginForm::default();
        assert_eq!(form.validate().invalid_fields(), vec!["email", "password"]);
    }
}
