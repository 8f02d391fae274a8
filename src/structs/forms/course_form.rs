use serde::Deserialize;
use serde_json::Value;
use crate::enums::action::Action;
use crate::helpers::validators::is_blank;
use crate::structs::api_request::{payload_of, Payload};
use crate::structs::course::Course;
use crate::structs::validation_result::ValidationResult;
use crate::traits::form::Form;

/// The shared add/edit course form. A populated `id` turns a create into
/// an update.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CourseForm {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub duration: String,
    #[serde(default)]
    pub fees: String,
    #[serde(default)]
    pub image_url: String,
    #[serde(default)]
    pub syllabus: String,
}

impl CourseForm {
    pub fn blank() -> Self {
        Self::default()
    }

    /// Pre-filled for editing.
    pub fn from_course(course: &Course) -> Self {
        Self {
            id: course.id.clone(),
            name: course.name.clone(),
            duration: course.duration.clone(),
            fees: format_fee_input(course.fees),
            image_url: course.image_url.clone().unwrap_or_default(),
            syllabus: course.syllabus.clone(),
        }
    }

    pub fn is_update(&self) -> bool {
        !is_blank(&self.id)
    }

    pub fn title(&self) -> &'static str {
        if self.is_update() { "Edit Course" } else { "Add Course" }
    }
}

fn format_fee_input(fees: f64) -> String {
    if fees.fract() == 0.0 {
        format!("{}", fees as i64)
    } else {
        fees.to_string()
    }
}

impl Form for CourseForm {
    fn action(&self) -> Action {
        if self.is_update() { Action::UpdateCourse } else { Action::AddCourse }
    }

    fn validate(&self) -> ValidationResult {
        let fees_ok = self.fees.trim().parse::<f64>().map(|f| f.is_finite() && f >= 0.0).unwrap_or(false);
        let mut result = ValidationResult::new();
        result
            .require("name", &self.name)
            .require("duration", &self.duration)
            .check("fees", fees_ok, "Enter a valid amount")
            .require("syllabus", &self.syllabus);
        result
    }

    fn payload(&self) -> Payload {
        let mut payload = payload_of([
            ("name", self.name.trim().to_string()),
            ("duration", self.duration.trim().to_string()),
            ("fees", self.fees.trim().to_string()),
            ("imageUrl", self.image_url.trim().to_string()),
            ("syllabus", self.syllabus.trim().to_string()),
        ]);
        if self.is_update() {
            payload.insert("id".to_string(), Value::String(self.id.trim().to_string()));
        }
        payload
    }

    fn success_message(&self) -> &'static str {
        if self.is_update() { "Course updated!" } else { "Course added!" }
    }

    fn failure_fallback(&self) -> &'static str {
        "Failed to save course"
    }

    fn terminal_on_success(&self) -> bool {
        false
    }
}
