use std::time::Duration;

pub const CONFIG_DIR_NAME: &str = "codeschool";
pub const CONFIG_FILE_NAME: &str = "config.toml";

pub const DEFAULT_API_URL: &str = "https://script.google.com/macros/s/REPLACE_WITH_DEPLOYMENT_ID/exec";
pub const DEFAULT_ADMIN_EMAIL: &str = "admin@example.com";
pub const DEFAULT_WHATSAPP_NUMBER: &str = "919000000000";
pub const DEFAULT_WHATSAPP_MESSAGE: &str = "Hi! I am interested in learning more about Kunal's Coding School courses.";
pub const DEFAULT_SITE_NAME: &str = "Kunal's Coding School";
pub const DEFAULT_SITE_TAGLINE: &str = "Learn to Code, Build Your Future";
pub const DEFAULT_SERVER_PORT: u16 = 8080;

pub const NETWORK_ERROR_MESSAGE: &str = "Network error. Please try again.";
pub const INVALID_FORM_MESSAGE: &str = "Fill all fields correctly";
pub const BUSY_LABEL: &str = "Processing...";

pub const PHONE_DIGITS: usize = 10;
pub const FEATURED_COURSE_COUNT: usize = 3;
pub const TOAST_DURATION_MS: u64 = 4000;

pub const COURSE_CARD_PLACEHOLDER_IMAGE: &str = "https://images.unsplash.com/photo-1516321318423-f06f85e504b3?w=400";
pub const WHATSAPP_BASE_URL: &str = "https://wa.me";

pub const MAX_FORM_BODY_BYTES: u64 = 16 * 1024;
pub const SERVER_SHUTDOWN_GRACE_PERIOD_MS: u64 = 100;

pub fn sleep_duration_millis(millis: u64) -> Duration {
    Duration::from_millis(millis)
}
