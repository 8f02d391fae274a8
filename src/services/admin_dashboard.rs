use std::sync::Arc;
use crate::enums::admin_tab::AdminTab;
use crate::services::course_manager::CourseManager;
use crate::services::form_controller::FormController;
use crate::structs::admin_session::{is_authenticated, AdminSession};
use crate::structs::contact_message::ContactMessage;
use crate::structs::course::Course;
use crate::structs::forms::login_form::LoginForm;
use crate::structs::student::Student;
use crate::structs::submit_outcome::SubmitOutcome;
use crate::structs::toast::Toast;
use crate::traits::school_api::SchoolApi;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AdminView {
    Login,
    Dashboard,
}

pub fn admin_view(session: Option<&AdminSession>) -> AdminView {
    if is_authenticated(session) { AdminView::Dashboard } else { AdminView::Login }
}

#[derive(Debug, Clone, PartialEq)]
pub enum TabData {
    Students(Vec<Student>),
    Messages(Vec<ContactMessage>),
    Courses(Vec<Course>),
    /// The API claimed success but sent no usable rows.
    LoadFailed,
}

/// Runs the login form; a successful response opens a session.
pub async fn login<A: SchoolApi + ?Sized>(
    controller: &mut FormController<A>,
    form: &LoginForm,
) -> (SubmitOutcome, Option<AdminSession>) {
    let outcome = controller.submit(form).await;
    let session = outcome.is_success().then(|| AdminSession::start(&form.email));
    if let Some(session) = &session {
        log::info!("🔐 Admin session opened for {}", session.email);
    }
    (outcome, session)
}

/// The logged-in admin view. Holding one requires a session.
pub struct AdminDashboard<A: SchoolApi + ?Sized> {
    api: Arc<A>,
    session: AdminSession,
    current_tab: AdminTab,
}

impl<A: SchoolApi + ?Sized> AdminDashboard<A> {
    pub fn new(api: Arc<A>, session: AdminSession) -> Self {
        Self {
            api,
            session,
            current_tab: AdminTab::default(),
        }
    }

    pub fn session(&self) -> &AdminSession {
        &self.session
    }

    pub fn current_tab(&self) -> AdminTab {
        self.current_tab
    }

    pub fn courses(&self) -> CourseManager<A> {
        CourseManager::new(Arc::clone(&self.api))
    }

    pub async fn load_tab(&mut self, tab: AdminTab) -> TabData {
        self.current_tab = tab;
        let response = self.api.fetch_one(tab.action()).await;
        if !response.success {
            log::debug!("{} failed, showing empty {}", tab.action(), tab.response_key());
            return match tab {
                AdminTab::Students => TabData::Students(Vec::new()),
                AdminTab::Messages => TabData::Messages(Vec::new()),
                AdminTab::Courses => TabData::Courses(Vec::new()),
            };
        }

        let key = tab.response_key();
        let data = match tab {
            AdminTab::Students => response.try_list(key).map(TabData::Students),
            AdminTab::Messages => response.try_list(key).map(TabData::Messages),
            AdminTab::Courses => response.try_list(key).map(TabData::Courses),
        };
        data.unwrap_or(TabData::LoadFailed)
    }

    /// Ends the session; the caller is back at the login view.
    pub fn logout(self) -> Toast {
        log::info!("🔓 Admin session closed for {}", self.session.email);
        Toast::info("Logged out")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mockall::predicate::eq;
    use serde_json::{json, Map};
    use crate::enums::action::Action;
    use crate::structs::api_response::ApiResponse;
    use crate::traits::school_api::MockSchoolApi;

    fn envelope(value: serde_json::Value) -> ApiResponse {
        serde_json::from_value(value).unwrap()
    }

    #[tokio::test]
    async fn login_opens_session_only_on_success() {
        let mut api = MockSchoolApi::new();
        let mut first = true;
        api.expect_send().with(eq(Action::AdminLogin), mockall::predicate::always()).returning(move |_, _| {
            if std::mem::take(&mut first) { ApiResponse::failure("Invalid credentials") } else { ApiResponse::ok(Map::new()) }
        });
        let mut controller = FormController::new(Arc::new(api), "Login");
        let form = LoginForm { email: "admin@school.in".into(), password: "pw".into() };

        let (outcome, session) = login(&mut controller, &form).await;
        assert!(session.is_none());
        assert_eq!(admin_view(session.as_ref()), AdminView::Login);
        assert_eq!(outcome.toast().map(|t| t.message.as_str()), Some("Invalid credentials"));

        let (_, session) = login(&mut controller, &form).await;
        assert_eq!(admin_view(session.as_ref()), AdminView::Dashboard);
    }

    #[tokio::test]
    async fn tabs_fall_back_to_empty_on_failure() {
        let mut api = MockSchoolApi::new();
        api.expect_fetch_one().with(eq(Action::GetStudents)).returning(|_| ApiResponse::network_error());
        let mut dashboard = AdminDashboard::new(Arc::new(api), AdminSession::start("a@b.co"));

        assert_eq!(dashboard.load_tab(AdminTab::Students).await, TabData::Students(Vec::new()));
    }

    #[tokio::test]
    async fn tabs_decode_rows() {
        let mut api = MockSchoolApi::new();
        api.expect_fetch_one().with(eq(Action::GetMessages)).returning(|_| envelope(json!({
            "success": true,
            "messages": [{ "timestamp": "2024-05-01", "name": "Asha", "email": "asha@school.in", "message": "Hello" }]
        })));
        let mut dashboard = AdminDashboard::new(Arc::new(api), AdminSession::start("a@b.co"));

        match dashboard.load_tab(AdminTab::Messages).await {
            TabData::Messages(rows) => assert_eq!(rows[0].name, "Asha"),
            other => panic!("unexpected: {:?}", other),
        }
        assert_eq!(dashboard.current_tab(), AdminTab::Messages);
    }

    #[tokio::test]
    async fn success_without_rows_is_a_load_failure() {
        let mut api = MockSchoolApi::new();
        api.expect_fetch_one().returning(|_| envelope(json!({ "success": true })));
        let mut dashboard = AdminDashboard::new(Arc::new(api), AdminSession::start("a@b.co"));

        assert_eq!(dashboard.load_tab(AdminTab::Courses).await, TabData::LoadFailed);
    }
}
