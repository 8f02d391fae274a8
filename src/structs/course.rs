use serde::{Deserialize, Serialize};
use crate::helpers::price_formatter::format_inr;
use crate::helpers::serde_helper::{lenient_number, lenient_optional_string, lenient_string};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Course {
    #[serde(default, deserialize_with = "lenient_string")]
    pub id: String,

    #[serde(default, deserialize_with = "lenient_string")]
    pub name: String,

    #[serde(default, deserialize_with = "lenient_string")]
    pub duration: String,

    #[serde(default, deserialize_with = "lenient_number")]
    pub fees: f64,

    #[serde(default, deserialize_with = "lenient_optional_string", skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,

    #[serde(default, deserialize_with = "lenient_string")]
    pub syllabus: String,
}

impl Course {
    pub fn formatted_fees(&self) -> String {
        format_inr(self.fees)
    }

    pub fn image_or<'a>(&'a self, placeholder: &'a str) -> &'a str {
        self.image_url.as_deref().unwrap_or(placeholder)
    }

    /// Dropdown label: `<name> - ₹<fees>`.
    pub fn option_label(&self) -> String {
        format!("{} - ₹{}", self.name, self.formatted_fees())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn accepts_spreadsheet_cell_shapes() {
        let course: Course = serde_json::from_value(json!({
            "id": 7, "name": "Web Dev", "duration": "6 Months", "fees": "25000", "imageUrl": "", "syllabus": "HTML, CSS"
        })).unwrap();

        assert_eq!(course.id, "7");
        assert_eq!(course.fees, 25000.0);
        assert_eq!(course.image_url, None);
        assert_eq!(course.option_label(), "Web Dev - ₹25,000");
        assert_eq!(course.image_or("fallback.png"), "fallback.png");
    }

    #[test]
    fn rejects_non_numeric_fees() {
        let result: Result<Course, _> = serde_json::from_value(json!({ "name": "x", "fees": "free" }));
        assert!(result.is_err());
    }
}
