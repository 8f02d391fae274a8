pub mod action;
pub mod admin_menu_option;
pub mod admin_tab;
pub mod commands;
pub mod form_state;
pub mod toast_kind;
