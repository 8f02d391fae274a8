use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use crate::config::constants::NETWORK_ERROR_MESSAGE;
use crate::enums::action::Action;
use crate::errors::{SchoolError, SchoolResult};

/// The uniform envelope every call returns: `{ success, error?, ... }`.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct ApiResponse {
    #[serde(default)]
    pub success: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    #[serde(flatten)]
    pub fields: Map<String, Value>,
}

impl ApiResponse {
    pub fn ok(fields: Map<String, Value>) -> Self {
        Self { success: true, error: None, fields }
    }

    pub fn failure(message: &str) -> Self {
        Self {
            success: false,
            error: Some(message.to_string()),
            fields: Map::new(),
        }
    }

    /// Stand-in for any transport-level failure.
    pub fn network_error() -> Self {
        Self::failure(NETWORK_ERROR_MESSAGE)
    }

    /// Server-provided error text, if it is non-empty.
    pub fn error_message(&self) -> Option<&str> {
        self.error.as_deref().filter(|e| !e.trim().is_empty())
    }

    /// Rows stored under `key`; empty when the call failed or the rows
    /// do not decode.
    pub fn list<T: DeserializeOwned>(&self, key: &str) -> Vec<T> {
        if !self.success {
            return Vec::new();
        }
        self.try_list(key).unwrap_or_default()
    }

    /// Rows stored under `key`, or `None` when absent or not an array.
    /// Rows that do not decode are skipped so one bad cell cannot hide
    /// the rest of the sheet.
    pub fn try_list<T: DeserializeOwned>(&self, key: &str) -> Option<Vec<T>> {
        let rows = match self.fields.get(key)? {
            Value::Array(rows) => rows,
            other => {
                log::warn!("⚠️ Expected a list under '{}', got {}", key, other);
                return None;
            }
        };

        let decoded = rows
            .iter()
            .enumerate()
            .filter_map(|(index, row)| {
                T::deserialize(row)
                    .map_err(|e| log::warn!("⚠️ Skipping {} row {}: {}", key, index, e))
                    .ok()
            })
            .collect();
        Some(decoded)
    }

    /// Treats `success: false` as an error carrying the server's message.
    pub fn into_result(self, action: Action) -> SchoolResult<Self> {
        if self.success {
            Ok(self)
        } else {
            let message = self.error_message().unwrap_or(NETWORK_ERROR_MESSAGE).to_string();
            Err(SchoolError::request_error(action.as_str(), &message))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use crate::structs::course::Course;

    #[test]
    fn keeps_extra_fields() {
        let response: ApiResponse = serde_json::from_value(json!({
            "success": true,
            "courses": [{ "id": "c1", "name": "Rust", "duration": "3 Months", "fees": 4999, "syllabus": "Ownership" }]
        })).unwrap();

        assert!(response.success);
        let courses: Vec<Course> = response.list("courses");
        assert_eq!(courses.len(), 1);
        assert_eq!(courses[0].name, "Rust");
        assert_eq!(serde_json::to_value(&response).unwrap()["courses"][0]["id"], "c1");
    }

    #[test]
    fn missing_success_is_failure_without_message() {
        let response: ApiResponse = serde_json::from_value(json!({ "courses": [] })).unwrap();
        assert!(!response.success);
        assert_eq!(response.error_message(), None);
    }

    #[test]
    fn failed_envelope_has_no_rows() {
        let response: ApiResponse = serde_json::from_value(json!({
            "success": false, "error": "Sheet missing", "students": [{ "name": "x" }]
        })).unwrap();
        assert!(response.list::<Value>("students").is_empty());
        assert_eq!(response.try_list::<Value>("students").map(|rows| rows.len()), Some(1));
        assert_eq!(response.try_list::<Value>("messages"), None);
        match response.into_result(Action::GetStudents) {
            Err(SchoolError::RequestError { action, message }) => {
                assert_eq!(action, "getStudents");
                assert_eq!(message, "Sheet missing");
            }
            other => panic!("unexpected: {:?}", other),
        }
    }

    #[test]
    fn bad_row_is_skipped_and_the_rest_kept() {
        let response: ApiResponse = serde_json::from_value(json!({
            "success": true,
            "courses": [
                { "id": "c1", "name": "Rust", "fees": 4999 },
                { "id": "c2", "name": "Go", "fees": "TBD" },
                { "id": "c3", "name": "Java", "fees": "12,000" }
            ]
        })).unwrap();

        let courses: Vec<Course> = response.list("courses");
        assert_eq!(courses.iter().map(|c| c.id.as_str()).collect::<Vec<_>>(), vec!["c1", "c3"]);
        assert_eq!(courses[1].fees, 12000.0);
    }

    #[test]
    fn non_array_rows_are_malformed() {
        let response: ApiResponse = serde_json::from_value(json!({ "success": true, "courses": "none" })).unwrap();
        assert_eq!(response.try_list::<Course>("courses"), None);
        assert!(response.list::<Course>("courses").is_empty());
    }

    #[test]
    fn network_error_is_well_formed() {
        let response = ApiResponse::network_error();
        assert!(!response.success);
        assert_eq!(response.error_message(), Some("Network error. Please try again."));
    }
}
