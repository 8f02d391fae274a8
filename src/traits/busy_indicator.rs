/// Shown while a submission is in flight.
pub trait BusyIndicator: Send {
    fn show(&mut self, label: &str);

    fn hide(&mut self);
}

/// For callers that render the control state themselves.
pub struct NoBusyIndicator;

impl BusyIndicator for NoBusyIndicator {
    fn show(&mut self, _label: &str) {}

    fn hide(&mut self) {}
}
