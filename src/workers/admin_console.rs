use std::io::BufRead;
use std::sync::Arc;
use crate::enums::admin_menu_option::AdminMenuOption;
use crate::enums::admin_tab::AdminTab;
use crate::errors::SchoolResult;
use crate::helpers::terminal_prompt::TerminalPrompt;
use crate::helpers::validators::validate_email;
use crate::logger::animated_logger::AnimatedLogger;
use crate::logger::table_logger::TableLogger;
use crate::logger::toast_logger::ToastLogger;
use crate::services::admin_dashboard::{admin_view, login, AdminDashboard, AdminView, TabData};
use crate::services::course_manager::CourseMutation;
use crate::services::form_controller::FormController;
use crate::structs::admin_session::AdminSession;
use crate::structs::forms::course_form::CourseForm;
use crate::structs::forms::login_form::LoginForm;
use crate::traits::school_api::SchoolApi;

const LOGIN_LABEL: &str = "Login";
const SAVE_LABEL: &str = "Save Course";

/// Interactive admin panel: login view until the API accepts the
/// credentials, then the dashboard until logout or quit.
pub struct AdminConsole<A: SchoolApi + ?Sized, R: BufRead> {
    api: Arc<A>,
    prompt: TerminalPrompt<R>,
    default_email: String,
    spinner: bool,
}

impl<A: SchoolApi + ?Sized, R: BufRead> AdminConsole<A, R> {
    pub fn new(api: Arc<A>, prompt: TerminalPrompt<R>, default_email: &str) -> Self {
        Self {
            api,
            prompt,
            default_email: default_email.to_string(),
            spinner: true,
        }
    }

    pub fn without_spinner(mut self) -> Self {
        self.spinner = false;
        self
    }

    pub async fn run(&mut self) -> SchoolResult<()> {
        let mut session: Option<AdminSession> = None;

        loop {
            match admin_view(session.as_ref()) {
                AdminView::Login => match self.login_view().await? {
                    Some(started) => session = Some(started),
                    None => return Ok(()),
                },
                AdminView::Dashboard => {
                    let Some(active) = session.take() else {
                        continue;
                    };
                    let dashboard = AdminDashboard::new(Arc::clone(&self.api), active);
                    if !self.dashboard_view(dashboard).await? {
                        return Ok(());
                    }
                }
            }
        }
    }

    fn controller(&self, label: &str, busy_message: &str) -> FormController<A> {
        let controller = FormController::new(Arc::clone(&self.api), label);
        if self.spinner {
            controller.with_busy_indicator(Box::new(AnimatedLogger::new(busy_message)))
        } else {
            controller
        }
    }

    /// `None` when the admin leaves with `q`.
    async fn login_view(&mut self) -> SchoolResult<Option<AdminSession>> {
        log::info!("\n🔐 Admin Login (enter q to quit)");
        let mut controller = self.controller(LOGIN_LABEL, "Logging in");

        loop {
            let email = self.prompt.ask_or("Email", &self.default_email)?;
            if email.trim().eq_ignore_ascii_case("q") {
                return Ok(None);
            }
            controller.check_field("email", email.trim(), validate_email, "Invalid email");
            if let Some(message) = controller.field_errors().message_for("email") {
                log::info!("⚠️ {}", message);
                continue;
            }
            let password = self.prompt.ask("Password")?;

            let form = LoginForm { email, password };
            let (outcome, session) = login(&mut controller, &form).await;
            ToastLogger::show_outcome(&outcome);
            if session.is_some() {
                return Ok(session);
            }
        }
    }

    /// `true` after logout, `false` on quit.
    async fn dashboard_view(&mut self, mut dashboard: AdminDashboard<A>) -> SchoolResult<bool> {
        log::info!("📊 Dashboard for {}", dashboard.session().email);
        let mut course_controller = self.controller(SAVE_LABEL, "Saving course");
        Self::show_tab(&mut dashboard, AdminTab::default()).await;

        loop {
            print_menu(dashboard.current_tab());
            let choice = self.prompt.ask("Select option")?;

            match AdminMenuOption::from_input(&choice) {
                Some(AdminMenuOption::ShowTab(tab)) => Self::show_tab(&mut dashboard, tab).await,
                Some(AdminMenuOption::AddCourse) => {
                    let form = self.fill_course_form(CourseForm::blank())?;
                    Self::save_course(&dashboard, &mut course_controller, &form).await;
                }
                Some(AdminMenuOption::EditCourse) => self.edit_course(&dashboard, &mut course_controller).await?,
                Some(AdminMenuOption::DeleteCourse) => self.delete_course(&dashboard).await?,
                Some(AdminMenuOption::Logout) => {
                    ToastLogger::show(&dashboard.logout());
                    return Ok(true);
                }
                Some(AdminMenuOption::Quit) => return Ok(false),
                None => log::info!("Invalid option."),
            }
        }
    }

    async fn show_tab(dashboard: &mut AdminDashboard<A>, tab: AdminTab) {
        log::info!("\n📋 {}", tab.title());
        match dashboard.load_tab(tab).await {
            TabData::Students(rows) => TableLogger::print_students(&rows),
            TabData::Messages(rows) => TableLogger::print_messages(&rows),
            TabData::Courses(rows) => TableLogger::print_courses(&rows),
            TabData::LoadFailed => TableLogger::print_load_failed(),
        }
    }

    fn fill_course_form(&mut self, current: CourseForm) -> SchoolResult<CourseForm> {
        log::info!("\n📝 {}", current.title());
        let prompt = &mut self.prompt;
        Ok(CourseForm {
            name: prompt.ask_or("Name", &current.name)?,
            duration: prompt.ask_or("Duration", &current.duration)?,
            fees: prompt.ask_or("Fees (₹)", &current.fees)?,
            image_url: prompt.ask_or("Image URL", &current.image_url)?,
            syllabus: prompt.ask_or("Syllabus", &current.syllabus)?,
            id: current.id,
        })
    }

    async fn save_course(
        dashboard: &AdminDashboard<A>,
        controller: &mut FormController<A>,
        form: &CourseForm,
    ) {
        report_mutation(dashboard.courses().save(controller, form).await);
    }

    async fn edit_course(&mut self, dashboard: &AdminDashboard<A>, controller: &mut FormController<A>) -> SchoolResult<()> {
        let id = self.prompt.ask("Course id")?;
        match dashboard.courses().find(id.trim()).await {
            Ok(Some(course)) => {
                let form = self.fill_course_form(CourseForm::from_course(&course))?;
                Self::save_course(dashboard, controller, &form).await;
                Ok(())
            }
            Ok(None) => {
                log::info!("⚠️ No course with id '{}'", id.trim());
                Ok(())
            }
            Err(e) => {
                log::error!("❌ {}", e.user_message());
                Ok(())
            }
        }
    }

    async fn delete_course(&mut self, dashboard: &AdminDashboard<A>) -> SchoolResult<()> {
        let id = self.prompt.ask("Course id")?;
        let manager = dashboard.courses();
        let course = match manager.find(id.trim()).await {
            Ok(Some(course)) => course,
            Ok(None) => {
                log::info!("⚠️ No course with id '{}'", id.trim());
                return Ok(());
            }
            Err(e) => {
                log::error!("❌ {}", e.user_message());
                return Ok(());
            }
        };

        let pending = match manager.request_delete(&course) {
            Ok(pending) => pending,
            Err(e) => {
                log::error!("❌ {}", e.user_message());
                return Ok(());
            }
        };

        if self.prompt.confirm(&pending.prompt())? {
            report_mutation(manager.confirm_delete(pending).await);
        } else {
            drop(pending);
            log::info!("⏭️ Delete cancelled.");
        }
        Ok(())
    }
}

fn print_menu(current: AdminTab) {
    log::info!("\nCurrent tab: {}", current.title());
    log::info!("  1. 👩‍🎓 Students");
    log::info!("  2. ✉️ Messages");
    log::info!("  3. 📚 Courses");
    log::info!("  4. ➕ Add course");
    log::info!("  5. ✏️ Edit course");
    log::info!("  6. 🗑️ Delete course");
    log::info!("  7. 🔓 Logout");
    log::info!("  q. ⏹️ Quit");
}

fn report_mutation(mutation: SchoolResult<CourseMutation>) {
    match mutation {
        Ok(mutation) => {
            ToastLogger::show_outcome(&mutation.outcome);
            if let Some(courses) = mutation.courses {
                TableLogger::print_courses(&courses);
            }
        }
        Err(e) => log::error!("❌ Course change failed: {}", e.user_message()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;
    use mockall::predicate::eq;
    use mockall::Sequence;
    use serde_json::{json, Map};
    use crate::enums::action::Action;
    use crate::structs::api_response::ApiResponse;
    use crate::traits::school_api::MockSchoolApi;

    fn courses() -> ApiResponse {
        serde_json::from_value(json!({
            "success": true,
            "courses": [{ "id": "c1", "name": "Java", "duration": "4 Months", "fees": 9000 }]
        }))
        .unwrap()
    }

    fn console(api: MockSchoolApi, script: &str) -> AdminConsole<MockSchoolApi, Cursor<String>> {
        AdminConsole::new(Arc::new(api), TerminalPrompt::new(Cursor::new(script.to_string())), "admin@school.in")
            .without_spinner()
    }

    #[tokio::test]
    async fn quit_at_login_sends_nothing() {
        let mut api = MockSchoolApi::new();
        api.expect_send().times(0);
        api.expect_fetch_one().times(0);

        console(api, "q\n").run().await.unwrap();
    }

    #[tokio::test]
    async fn rejected_login_stays_on_login_view() {
        let mut api = MockSchoolApi::new();
        api.expect_send()
            .with(eq(Action::AdminLogin), mockall::predicate::always())
            .times(1)
            .returning(|_, _| ApiResponse::failure("Invalid credentials"));
        api.expect_fetch_one().times(0);

        console(api, "\nwrong\nq\n").run().await.unwrap();
    }

    #[tokio::test]
    async fn invalid_email_is_asked_again_before_password() {
        let mut api = MockSchoolApi::new();
        api.expect_send().times(0);
        api.expect_fetch_one().times(0);

        console(api, "ravi@\nq\n").run().await.unwrap();
    }

    #[tokio::test]
    async fn declined_delete_is_not_sent() {
        let mut api = MockSchoolApi::new();
        api.expect_send()
            .with(eq(Action::AdminLogin), mockall::predicate::always())
            .times(1)
            .returning(|_, _| ApiResponse::ok(Map::new()));
        api.expect_send().with(eq(Action::DeleteCourse), mockall::predicate::always()).times(0);
        api.expect_fetch_one().with(eq(Action::GetStudents)).returning(|_| ApiResponse::network_error());
        api.expect_fetch_one().with(eq(Action::GetCourses)).returning(|_| courses());

        console(api, "\npw\n6\nc1\nn\nq\n").run().await.unwrap();
    }

    #[tokio::test]
    async fn logout_returns_to_login() {
        let mut seq = Sequence::new();
        let mut api = MockSchoolApi::new();
        api.expect_send()
            .times(1)
            .in_sequence(&mut seq)
            .returning(|_, _| ApiResponse::ok(Map::new()));
        api.expect_fetch_one()
            .with(eq(Action::GetStudents))
            .times(1)
            .in_sequence(&mut seq)
            .returning(|_| ApiResponse::network_error());

        console(api, "\npw\n7\nq\n").run().await.unwrap();
    }

    #[tokio::test]
    async fn add_course_sends_form_and_refetches() {
        let mut api = MockSchoolApi::new();
        api.expect_send()
            .with(eq(Action::AdminLogin), mockall::predicate::always())
            .returning(|_, _| ApiResponse::ok(Map::new()));
        api.expect_send()
            .withf(|action, p| *action == Action::AddCourse && p.get("name") == Some(&json!("Go")) && !p.contains_key("id"))
            .times(1)
            .returning(|_, _| ApiResponse::ok(Map::new()));
        api.expect_fetch_one().with(eq(Action::GetStudents)).returning(|_| ApiResponse::network_error());
        api.expect_fetch_one().with(eq(Action::GetCourses)).times(1).returning(|_| courses());

        console(api, "\npw\n4\nGo\n2 Months\n4999\n\nGoroutines\nq\n").run().await.unwrap();
    }
}
