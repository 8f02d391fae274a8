/// A delete that has been asked for but not yet confirmed. Dropping it
/// cancels the delete; only `CourseManager::confirm_delete` sends it.
#[derive(Debug, PartialEq, Eq)]
#[must_use = "a pending delete does nothing until confirmed"]
pub struct PendingDelete {
    pub(crate) id: String,
    pub(crate) name: String,
}

impl PendingDelete {
    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn prompt(&self) -> String {
        if self.name.is_empty() {
            "Delete this course?".to_string()
        } else {
            format!("Delete course '{}'?", self.name)
        }
    }
}
