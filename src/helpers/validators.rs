use once_cell::sync::Lazy;
use regex::Regex;
use crate::config::constants::PHONE_DIGITS;

static EMAIL_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("Invalid email regex"));

pub fn validate_email(email: &str) -> bool {
    EMAIL_RE.is_match(email)
}

/// Ten digits once every non-digit character is stripped.
pub fn validate_phone(phone: &str) -> bool {
    phone.chars().filter(|c| c.is_ascii_digit()).count() == PHONE_DIGITS
}

pub fn is_blank(value: &str) -> bool {
    value.trim().is_empty()
}

/// Input-time phone cleanup: digits only, capped at ten.
pub fn sanitize_phone_input(raw: &str) -> String {
    raw.chars()
        .filter(|c| c.is_ascii_digit())
        .take(PHONE_DIGITS)
        .collect()
}
