use crate::enums::toast_kind::ToastKind;
use crate::structs::submit_outcome::SubmitOutcome;
use crate::structs::toast::Toast;

/// Console counterpart of the page toast.
pub struct ToastLogger {}

impl ToastLogger {
    pub fn show(toast: &Toast) {
        match toast.kind {
            ToastKind::Error => log::error!("{} {}", toast.kind.emoji(), toast.message),
            ToastKind::Success | ToastKind::Info => log::info!("{} {}", toast.kind.emoji(), toast.message),
        }
    }

    /// Prints the outcome's toast and, for a rejected form, each bad field.
    pub fn show_outcome(outcome: &SubmitOutcome) {
        if let SubmitOutcome::Rejected { validation, .. } = outcome {
            validation.print_summary();
        }
        match outcome.toast() {
            Some(toast) => Self::show(toast),
            None => log::info!("⏭️ Form already submitted, nothing sent."),
        }
    }
}
