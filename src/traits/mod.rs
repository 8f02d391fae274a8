pub mod busy_indicator;
pub mod form;
pub mod school_api;
