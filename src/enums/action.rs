use std::fmt;
use serde::{Deserialize, Serialize};

/// Discriminator sent with every API call, selecting the remote behavior.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Action {
    AdminLogin,
    GetStudents,
    GetMessages,
    GetCourses,
    AddCourse,
    UpdateCourse,
    DeleteCourse,
    SubmitContact,
    SubmitEnrollment,
}

impl Action {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::AdminLogin => "adminLogin",
            Self::GetStudents => "getStudents",
            Self::GetMessages => "getMessages",
            Self::GetCourses => "getCourses",
            Self::AddCourse => "addCourse",
            Self::UpdateCourse => "updateCourse",
            Self::DeleteCourse => "deleteCourse",
            Self::SubmitContact => "submitContact",
            Self::SubmitEnrollment => "submitEnrollment",
        }
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serde_name_matches_wire_name() {
        for action in [Action::AdminLogin, Action::GetCourses, Action::SubmitEnrollment, Action::DeleteCourse] {
            let json = serde_json::to_string(&action).unwrap();
            assert_eq!(json, format!("\"{}\"", action.as_str()));
        }
    }
}
