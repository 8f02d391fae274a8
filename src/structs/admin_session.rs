use chrono::{DateTime, Utc};
use serde::Serialize;

/// Process-local record of an admin login. Only decides which admin view
/// is shown; the remote API remains the authority on credentials.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AdminSession {
    pub logged_in: bool,
    pub email: String,
    pub timestamp: DateTime<Utc>,
}

impl AdminSession {
    /// Created from a successful `adminLogin` response.
    pub fn start(email: &str) -> Self {
        Self {
            logged_in: true,
            email: email.trim().to_string(),
            timestamp: Utc::now(),
        }
    }
}

pub fn is_authenticated(session: Option<&AdminSession>) -> bool {
    session.is_some_and(|s| s.logged_in)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_a_live_session_authenticates() {
        assert!(!is_authenticated(None));

        let session = AdminSession::start(" admin@school.in ");
        assert!(is_authenticated(Some(&session)));
        assert_eq!(session.email, "admin@school.in");

        let stale = AdminSession { logged_in: false, ..session };
        assert!(!is_authenticated(Some(&stale)));
    }

    #[test]
    fn serializes_like_the_session_marker() {
        let session = AdminSession::start("a@b.co");
        let value = serde_json::to_value(&session).unwrap();
        assert_eq!(value["loggedIn"], true);
        assert_eq!(value["email"], "a@b.co");
        assert!(value["timestamp"].is_string());
    }
}
