pub mod contact_form;
pub mod course_form;
pub mod enrollment_form;
pub mod login_form;
