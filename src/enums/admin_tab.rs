use crate::enums::action::Action;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AdminTab {
    #[default]
    Students,
    Messages,
    Courses,
}

impl AdminTab {
    pub fn action(&self) -> Action {
        match self {
            Self::Students => Action::GetStudents,
            Self::Messages => Action::GetMessages,
            Self::Courses => Action::GetCourses,
        }
    }

    /// Envelope key carrying the tab's rows.
    pub fn response_key(&self) -> &'static str {
        match self {
            Self::Students => "students",
            Self::Messages => "messages",
            Self::Courses => "courses",
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            Self::Students => "Students",
            Self::Messages => "Messages",
            Self::Courses => "Courses",
        }
    }
}
