use std::sync::Arc;
use crate::enums::form_state::FormState;
use crate::structs::submit_control::SubmitControl;
use crate::structs::submit_outcome::SubmitOutcome;
use crate::structs::toast::Toast;
use crate::structs::validation_result::ValidationResult;
use crate::traits::busy_indicator::{BusyIndicator, NoBusyIndicator};
use crate::traits::form::Form;
use crate::traits::school_api::SchoolApi;

/// Drives one form instance through `Idle -> Submitting -> Success | Error`.
///
/// Submission takes `&mut self`, so a controller can only have one request
/// in flight. A terminal success removes the submit control and every later
/// submission is ignored.
pub struct FormController<A: SchoolApi + ?Sized> {
    api: Arc<A>,
    state: FormState,
    control: SubmitControl,
    field_errors: ValidationResult,
    busy: Box<dyn BusyIndicator>,
}

impl<A: SchoolApi + ?Sized> FormController<A> {
    pub fn new(api: Arc<A>, submit_label: &str) -> Self {
        Self {
            api,
            state: FormState::Idle,
            control: SubmitControl::new(submit_label),
            field_errors: ValidationResult::new(),
            busy: Box::new(NoBusyIndicator),
        }
    }

    pub fn with_busy_indicator(mut self, busy: Box<dyn BusyIndicator>) -> Self {
        self.busy = busy;
        self
    }

    pub fn state(&self) -> &FormState {
        &self.state
    }

    pub fn control(&self) -> &SubmitControl {
        &self.control
    }

    pub fn field_errors(&self) -> &ValidationResult {
        &self.field_errors
    }

    /// Single-field check outside a submission. Empty values are left alone;
    /// otherwise the field's error is set or cleared.
    pub fn check_field(&mut self, field: &'static str, value: &str, valid: fn(&str) -> bool, message: &'static str) {
        if value.is_empty() {
            return;
        }
        self.field_errors.set_field(field, if valid(value) { None } else { Some(message) });
    }

    pub async fn submit<F: Form>(&mut self, form: &F) -> SubmitOutcome {
        if self.state.is_terminal() || !self.control.is_active() {
            log::debug!("Ignoring submit of {} in state {}", form.action(), self.state.name());
            return SubmitOutcome::Ignored;
        }

        if matches!(self.state, FormState::Error(_)) {
            self.transition(FormState::Idle);
        }

        let validation = form.validate();
        self.field_errors = validation.clone();
        if !validation.is_valid() {
            log::debug!("{} rejected, invalid fields: {:?}", form.action(), validation.invalid_fields());
            return SubmitOutcome::Rejected {
                validation,
                toast: Toast::error(form.invalid_message()),
            };
        }

        self.transition(FormState::Submitting);
        self.control.set_loading(true);
        self.busy.show(self.control.label());

        let response = self.api.send(form.action(), form.payload()).await;

        self.busy.hide();

        if response.success {
            if form.terminal_on_success() {
                self.control.remove();
                self.transition(FormState::Success);
            } else {
                self.control.set_loading(false);
                self.transition(FormState::Idle);
            }
            SubmitOutcome::Succeeded {
                toast: Toast::success(form.success_message()),
                response,
            }
        } else {
            // server text goes to the user as-is
            let message = response
                .error_message()
                .unwrap_or(form.failure_fallback())
                .to_string();
            self.control.set_loading(false);
            self.transition(FormState::Error(message.clone()));
            SubmitOutcome::Failed {
                toast: Toast::error(&message),
                message,
            }
        }
    }

    fn transition(&mut self, next: FormState) {
        log::debug!("form state {} -> {}", self.state.name(), next.name());
        self.state = next;
    }
}
