use crate::enums::admin_tab::AdminTab;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AdminMenuOption {
    ShowTab(AdminTab),
    AddCourse,
    EditCourse,
    DeleteCourse,
    Logout,
    Quit,
}

impl AdminMenuOption {
    pub fn from_input(input: &str) -> Option<Self> {
        match input.trim().to_lowercase().as_str() {
            "1" | "students" => Some(Self::ShowTab(AdminTab::Students)),
            "2" | "messages" => Some(Self::ShowTab(AdminTab::Messages)),
            "3" | "courses" => Some(Self::ShowTab(AdminTab::Courses)),
            "4" | "add" => Some(Self::AddCourse),
            "5" | "edit" => Some(Self::EditCourse),
            "6" | "delete" => Some(Self::DeleteCourse),
            "7" | "logout" => Some(Self::Logout),
            "q" | "quit" => Some(Self::Quit),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_numbers_and_names() {
        assert_eq!(AdminMenuOption::from_input(" 2\n"), Some(AdminMenuOption::ShowTab(AdminTab::Messages)));
        assert_eq!(AdminMenuOption::from_input("Delete"), Some(AdminMenuOption::DeleteCourse));
        assert_eq!(AdminMenuOption::from_input("9"), None);
    }
}
