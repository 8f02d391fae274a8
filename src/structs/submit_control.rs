use crate::config::constants::BUSY_LABEL;

/// The submit button of a form: its label, and whether it can be pressed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubmitControl {
    label: String,
    original_label: Option<String>,
    disabled: bool,
    removed: bool,
}

impl SubmitControl {
    pub fn new(label: &str) -> Self {
        Self {
            label: label.to_string(),
            original_label: None,
            disabled: false,
            removed: false,
        }
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn is_busy(&self) -> bool {
        self.original_label.is_some()
    }

    /// Pressable only while present and enabled.
    pub fn is_active(&self) -> bool {
        !self.disabled && !self.removed
    }

    pub fn set_loading(&mut self, loading: bool) {
        if loading {
            if self.original_label.is_none() {
                self.original_label = Some(std::mem::replace(&mut self.label, BUSY_LABEL.to_string()));
            }
            self.disabled = true;
        } else {
            if let Some(original) = self.original_label.take() {
                self.label = original;
            }
            self.disabled = false;
        }
    }

    /// The form was replaced by its confirmation view.
    pub fn remove(&mut self) {
        self.original_label = None;
        self.disabled = true;
        self.removed = true;
    }

    pub fn is_removed(&self) -> bool {
        self.removed
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn loading_swaps_and_restores_label() {
        let mut control = SubmitControl::new("Send Message");
        control.set_loading(true);
        assert_eq!(control.label(), "Processing...");
        assert!(!control.is_active());

        control.set_loading(true);
        control.set_loading(false);
        assert_eq!(control.label(), "Send Message");
        assert!(control.is_active());
    }

    #[test]
    fn removed_control_stays_inactive() {
        let mut control = SubmitControl::new("Enroll Now");
        control.set_loading(true);
        control.remove();
        assert!(!control.is_active());
        assert!(control.is_removed());
    }
}
