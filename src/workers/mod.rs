pub mod admin_console;
pub mod command_runner;
