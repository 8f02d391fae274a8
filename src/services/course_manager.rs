use std::sync::Arc;
use crate::config::constants::FEATURED_COURSE_COUNT;
use crate::enums::action::Action;
use crate::errors::{SchoolError, SchoolResult};
use crate::services::form_controller::FormController;
use crate::structs::api_request::payload_of;
use crate::structs::course::Course;
use crate::structs::forms::course_form::CourseForm;
use crate::structs::pending_delete::PendingDelete;
use crate::structs::submit_outcome::SubmitOutcome;
use crate::structs::toast::Toast;
use crate::traits::school_api::SchoolApi;

/// Result of a course mutation: what to tell the user, and the list as the
/// API now reports it.
#[derive(Debug)]
pub struct CourseMutation {
    pub outcome: SubmitOutcome,
    pub courses: Option<Vec<Course>>,
}

/// CRUD over courses. Nothing is cached; every successful mutation is
/// followed by a fresh `getCourses`.
pub struct CourseManager<A: SchoolApi + ?Sized> {
    api: Arc<A>,
}

impl<A: SchoolApi + ?Sized> CourseManager<A> {
    pub fn new(api: Arc<A>) -> Self {
        Self { api }
    }

    pub async fn list(&self) -> SchoolResult<Vec<Course>> {
        let response = self.api.fetch_one(Action::GetCourses).await.into_result(Action::GetCourses)?;
        response
            .try_list("courses")
            .ok_or_else(|| SchoolError::request_error(Action::GetCourses.as_str(), "Malformed course list"))
    }

    pub async fn featured(&self) -> SchoolResult<Vec<Course>> {
        let mut courses = self.list().await?;
        courses.truncate(FEATURED_COURSE_COUNT);
        Ok(courses)
    }

    pub async fn find(&self, id: &str) -> SchoolResult<Option<Course>> {
        Ok(self.list().await?.into_iter().find(|c| c.id == id))
    }

    /// Create or update, decided by whether the form carries an id.
    pub async fn save(&self, controller: &mut FormController<A>, form: &CourseForm) -> SchoolResult<CourseMutation> {
        let outcome = controller.submit(form).await;
        let courses = if outcome.is_success() { self.refresh().await } else { None };
        Ok(CourseMutation { outcome, courses })
    }

    /// First step of a delete. Nothing is sent until the token is confirmed.
    pub fn request_delete(&self, course: &Course) -> SchoolResult<PendingDelete> {
        if course.id.trim().is_empty() {
            return Err(SchoolError::validation_error("id", "course has no id"));
        }
        Ok(PendingDelete {
            id: course.id.clone(),
            name: course.name.clone(),
        })
    }

    pub async fn confirm_delete(&self, pending: PendingDelete) -> SchoolResult<CourseMutation> {
        let response = self
            .api
            .send(Action::DeleteCourse, payload_of([("id", pending.id.clone())]))
            .await;

        if response.success {
            log::info!("🗑️ Deleted course {}", pending.id);
            Ok(CourseMutation {
                outcome: SubmitOutcome::Succeeded { toast: Toast::success("Course deleted!"), response },
                courses: self.refresh().await,
            })
        } else {
            let message = response.error_message().unwrap_or("Failed to delete course").to_string();
            Ok(CourseMutation {
                outcome: SubmitOutcome::Failed { toast: Toast::error(&message), message },
                courses: None,
            })
        }
    }

    /// Re-fetch after a mutation. The mutation already happened, so a
    /// failure here only costs the updated list.
    async fn refresh(&self) -> Option<Vec<Course>> {
        self.list()
            .await
            .map_err(|e| log::warn!("⚠️ Course list refresh failed: {}", e))
            .ok()
    }
}
