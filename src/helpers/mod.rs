pub mod config_helper;
pub mod price_formatter;
pub mod serde_helper;
pub mod terminal_prompt;
pub mod validators;
