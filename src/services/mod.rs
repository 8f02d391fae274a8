pub mod admin_dashboard;
pub mod api_client;
pub mod course_manager;
pub mod form_controller;
