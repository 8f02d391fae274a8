use serde::Deserialize;
use crate::enums::action::Action;
use crate::helpers::validators::{is_blank, sanitize_phone_input, validate_email, validate_phone};
use crate::structs::api_request::{payload_of, Payload};
use crate::structs::validation_result::ValidationResult;
use crate::traits::form::Form;

#[derive(Debug, Clone, Default, Deserialize)]
pub struct EnrollmentForm {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub phone: String,
    /// Course name as chosen in the dropdown.
    #[serde(default)]
    pub course: String,
}

impl Form for EnrollmentForm {
    fn action(&self) -> Action {
        Action::SubmitEnrollment
    }

    fn validate(&self) -> ValidationResult {
        let mut result = ValidationResult::new();
        result
            .require("name", &self.name)
            .check("email", validate_email(&self.email), "Invalid email")
            .check("phone", validate_phone(&self.phone), "Invalid phone")
            .check("course", !is_blank(&self.course), "Select course");
        result
    }

    fn payload(&self) -> Payload {
        payload_of([
            ("name", self.name.trim().to_string()),
            ("email", self.email.trim().to_string()),
            ("phone", sanitize_phone_input(&self.phone)),
            ("course", self.course.clone()),
        ])
    }

    fn success_message(&self) -> &'static str {
        "Enrollment successful!"
    }

    fn failure_fallback(&self) -> &'static str {
        "Failed to submit"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid() -> EnrollmentForm {
        EnrollmentForm {
            name: "Ravi".into(),
            email: "ravi@example.in".into(),
            phone: "98765-43210".into(),
            course: "Full Stack Web Development".into(),
        }
    }

    #[test]
    fn valid_form_sends_digits_only_phone() {
        let form = valid();
        assert!(form.validate().is_valid());
        assert_eq!(form.payload()["phone"], "9876543210");
    }

    #[test]
    fn each_rule_reports_its_own_field() {
        let form = EnrollmentForm { phone: "12345".into(), course: String::new(), ..valid() };
        let result = form.validate();
        assert_eq!(result.invalid_fields(), vec!["phone", "course"]);
        assert_eq!(result.message_for("course"), Some("Select course"));
    }
}
