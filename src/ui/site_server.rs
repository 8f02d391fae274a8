use std::collections::HashMap;
use std::convert::Infallible;
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::sync::oneshot;
use warp::http::StatusCode;
use warp::reply::Response;
use warp::{Filter, Reply};
use crate::config::constants::{sleep_duration_millis, MAX_FORM_BODY_BYTES, SERVER_SHUTDOWN_GRACE_PERIOD_MS};
use crate::enums::form_state::FormState;
use crate::errors::{SchoolError, SchoolResult};
use crate::services::course_manager::CourseManager;
use crate::services::form_controller::FormController;
use crate::structs::course::Course;
use crate::structs::forms::contact_form::ContactForm;
use crate::structs::forms::enrollment_form::EnrollmentForm;
use crate::structs::submit_outcome::SubmitOutcome;
use crate::traits::school_api::SchoolApi;
use crate::ui::site_renderer::SiteRenderer;
use crate::ui::view_models::{course_options, CourseListing, FormView, ToastView};

pub const ENROLL_LABEL: &str = "Enroll Now";
pub const CONTACT_LABEL: &str = "Send Message";

/// Serves the public pages on loopback. Every request fetches fresh data;
/// form posts run through a new controller each time.
pub struct SiteServer<A: SchoolApi + ?Sized + 'static> {
    api: Arc<A>,
    renderer: Arc<SiteRenderer>,
    shutdown_tx: Option<oneshot::Sender<()>>,
}

impl<A: SchoolApi + ?Sized + 'static> SiteServer<A> {
    pub fn new(api: Arc<A>, renderer: SiteRenderer) -> Self {
        Self {
            api,
            renderer: Arc::new(renderer),
            shutdown_tx: None,
        }
    }

    /// Binds `127.0.0.1:<port>` (0 picks a free port) and serves in the background.
    pub async fn start(&mut self, port: u16) -> SchoolResult<SocketAddr> {
        let (shutdown_tx, shutdown_rx) = oneshot::channel();

        let addr: SocketAddr = ([127, 0, 0, 1], port).into();
        let (bound, server) = warp::serve(routes(Arc::clone(&self.api), Arc::clone(&self.renderer)))
            .try_bind_with_graceful_shutdown(addr, async {
                shutdown_rx.await.ok();
            })
            .map_err(|e| SchoolError::system_error("bind", &format!("{}: {}", addr, e)))?;

        tokio::spawn(server);
        self.shutdown_tx = Some(shutdown_tx);

        log::info!("🌐 Site server started on http://{}", bound);
        Ok(bound)
    }

    pub async fn shutdown(&mut self) -> SchoolResult<()> {
        log::info!("🛑 Shutting down site server...");

        if let Some(shutdown_tx) = self.shutdown_tx.take() {
            shutdown_tx
                .send(())
                .map_err(|_| SchoolError::system_error("shutdown", "Failed to send shutdown signal"))?;
        }

        tokio::time::sleep(sleep_duration_millis(SERVER_SHUTDOWN_GRACE_PERIOD_MS)).await;
        log::info!("✅ Site server shutdown complete");
        Ok(())
    }
}

pub fn routes<A: SchoolApi + ?Sized + 'static>(
    api: Arc<A>,
    renderer: Arc<SiteRenderer>,
) -> impl Filter<Extract = (Response,), Error = warp::Rejection> + Clone {
    let api_filter = warp::any().map(move || Arc::clone(&api));
    let renderer_filter = warp::any().map(move || Arc::clone(&renderer));

    let home = warp::path::end()
        .and(warp::get())
        .and(api_filter.clone())
        .and(renderer_filter.clone())
        .and_then(home_page::<A>);

    let courses = warp::path("courses")
        .and(warp::path::end())
        .and(warp::get())
        .and(api_filter.clone())
        .and(renderer_filter.clone())
        .and_then(courses_page::<A>);

    let enroll = warp::path("enroll")
        .and(warp::path::end())
        .and(warp::get())
        .and(warp::query::<HashMap<String, String>>())
        .and(api_filter.clone())
        .and(renderer_filter.clone())
        .and_then(enroll_page::<A>);

    let enroll_submit = warp::path("enroll")
        .and(warp::path::end())
        .and(warp::post())
        .and(warp::body::content_length_limit(MAX_FORM_BODY_BYTES))
        .and(warp::body::form::<EnrollmentForm>())
        .and(api_filter.clone())
        .and(renderer_filter.clone())
        .and_then(enroll_submit_handler::<A>);

    let contact = warp::path("contact")
        .and(warp::path::end())
        .and(warp::get())
        .and(renderer_filter.clone())
        .and_then(contact_page);

    let contact_submit = warp::path("contact")
        .and(warp::path::end())
        .and(warp::post())
        .and(warp::body::content_length_limit(MAX_FORM_BODY_BYTES))
        .and(warp::body::form::<ContactForm>())
        .and(api_filter)
        .and(renderer_filter)
        .and_then(contact_submit_handler::<A>);

    home.or(courses)
        .unify()
        .or(enroll)
        .unify()
        .or(enroll_submit)
        .unify()
        .or(contact)
        .unify()
        .or(contact_submit)
        .unify()
}

fn html_reply(page: SchoolResult<String>) -> Response {
    match page {
        Ok(html) => warp::reply::html(html).into_response(),
        Err(e) => {
            log::error!("❌ Failed to render page: {}", e);
            warp::reply::with_status("Failed to render page", StatusCode::INTERNAL_SERVER_ERROR).into_response()
        }
    }
}

fn outcome_toast(outcome: &SubmitOutcome) -> Option<ToastView> {
    outcome.toast().map(ToastView::from)
}

async fn dropdown_courses<A: SchoolApi + ?Sized>(api: Arc<A>) -> Vec<Course> {
    match CourseManager::new(api).list().await {
        Ok(courses) => courses,
        Err(e) => {
            log::warn!("⚠️ Course dropdown left empty: {}", e);
            Vec::new()
        }
    }
}

async fn home_page<A: SchoolApi + ?Sized>(api: Arc<A>, renderer: Arc<SiteRenderer>) -> Result<Response, Infallible> {
    let featured = CourseManager::new(api).featured().await;
    let listing = CourseListing::from_result(featured.as_deref());
    Ok(html_reply(renderer.render_home(&listing, None)))
}

async fn courses_page<A: SchoolApi + ?Sized>(api: Arc<A>, renderer: Arc<SiteRenderer>) -> Result<Response, Infallible> {
    let courses = CourseManager::new(api).list().await;
    let listing = CourseListing::from_result(courses.as_deref());
    Ok(html_reply(renderer.render_courses(&listing, None)))
}

async fn enroll_page<A: SchoolApi + ?Sized>(
    params: HashMap<String, String>,
    api: Arc<A>,
    renderer: Arc<SiteRenderer>,
) -> Result<Response, Infallible> {
    let courses = dropdown_courses(api).await;
    let selected = params.get("course").map(String::as_str);
    let options = course_options(&courses, selected);
    Ok(html_reply(renderer.render_enroll(&FormView::blank(ENROLL_LABEL), &options, None)))
}

async fn enroll_submit_handler<A: SchoolApi + ?Sized>(
    form: EnrollmentForm,
    api: Arc<A>,
    renderer: Arc<SiteRenderer>,
) -> Result<Response, Infallible> {
    let mut controller = FormController::new(Arc::clone(&api), ENROLL_LABEL);
    let outcome = controller.submit(&form).await;

    let view = FormView::new(
        &[
            ("name", form.name.as_str()),
            ("email", form.email.as_str()),
            ("phone", form.phone.as_str()),
            ("course", form.course.as_str()),
        ],
        controller.field_errors(),
        controller.control(),
        controller.state() == &FormState::Success,
    );
    let courses = if view.succeeded { Vec::new() } else { dropdown_courses(api).await };
    let options = course_options(&courses, Some(form.course.as_str()));

    Ok(html_reply(renderer.render_enroll(&view, &options, outcome_toast(&outcome).as_ref())))
}

async fn contact_page(renderer: Arc<SiteRenderer>) -> Result<Response, Infallible> {
    Ok(html_reply(renderer.render_contact(&FormView::blank(CONTACT_LABEL), None)))
}

async fn contact_submit_handler<A: SchoolApi + ?Sized>(
    form: ContactForm,
    api: Arc<A>,
    renderer: Arc<SiteRenderer>,
) -> Result<Response, Infallible> {
    let mut controller = FormController::new(api, CONTACT_LABEL);
    let outcome = controller.submit(&form).await;

    let view = FormView::new(
        &[("name", form.name.as_str()), ("email", form.email.as_str()), ("message", form.message.as_str())],
        controller.field_errors(),
        controller.control(),
        controller.state() == &FormState::Success,
    );

    Ok(html_reply(renderer.render_contact(&view, outcome_toast(&outcome).as_ref())))
}
