use std::collections::HashMap;
use serde::Serialize;
use crate::config::constants::{COURSE_CARD_PLACEHOLDER_IMAGE, TOAST_DURATION_MS, WHATSAPP_BASE_URL};
use crate::structs::config::config::Config;
use crate::structs::course::Course;
use crate::structs::submit_control::SubmitControl;
use crate::structs::toast::Toast;
use crate::structs::validation_result::ValidationResult;

#[derive(Debug, Clone, Serialize)]
pub struct SocialLink {
    pub label: String,
    pub url: String,
}

/// Site-wide values shown in the layout.
#[derive(Debug, Clone, Serialize)]
pub struct SiteView {
    pub name: String,
    pub tagline: String,
    pub whatsapp_url: Option<String>,
    pub social: Vec<SocialLink>,
}

impl SiteView {
    pub fn from_config(config: &Config) -> Self {
        Self {
            name: config.site.name.clone(),
            tagline: config.site.tagline.clone(),
            whatsapp_url: whatsapp_url(&config.contact.whatsapp_number, &config.contact.whatsapp_message),
            social: config
                .social
                .entries()
                .into_iter()
                .map(|(label, url)| SocialLink { label: label.to_string(), url: url.to_string() })
                .collect(),
        }
    }
}

/// `https://wa.me/<number>?text=<message>`; `None` without a number.
pub fn whatsapp_url(number: &str, message: &str) -> Option<String> {
    if number.trim().is_empty() {
        return None;
    }
    Some(format!("{}/{}?text={}", WHATSAPP_BASE_URL, number.trim(), urlencoding::encode(message)))
}

#[derive(Debug, Clone, Serialize)]
pub struct CourseCard {
    pub name: String,
    pub duration: String,
    pub syllabus: String,
    pub image_url: String,
    pub fees: String,
    pub enroll_url: String,
}

impl From<&Course> for CourseCard {
    fn from(course: &Course) -> Self {
        Self {
            name: course.name.clone(),
            duration: course.duration.clone(),
            syllabus: course.syllabus.clone(),
            image_url: course.image_or(COURSE_CARD_PLACEHOLDER_IMAGE).to_string(),
            fees: course.formatted_fees(),
            enroll_url: format!("/enroll?course={}", urlencoding::encode(&course.name)),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ListingState {
    Loaded,
    Empty,
    Failed,
}

/// A grid of course cards in one of its three states.
#[derive(Debug, Clone, Serialize)]
pub struct CourseListing {
    pub state: ListingState,
    pub cards: Vec<CourseCard>,
}

impl CourseListing {
    pub fn from_result<E>(result: Result<&[Course], E>) -> Self {
        match result {
            Ok([]) => Self { state: ListingState::Empty, cards: Vec::new() },
            Ok(courses) => Self { state: ListingState::Loaded, cards: courses.iter().map(CourseCard::from).collect() },
            Err(_) => Self { state: ListingState::Failed, cards: Vec::new() },
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct ToastView {
    pub kind: String,
    pub message: String,
    pub duration_ms: u64,
}

impl From<&Toast> for ToastView {
    fn from(toast: &Toast) -> Self {
        Self {
            kind: toast.kind.css_class().to_string(),
            message: toast.message.clone(),
            duration_ms: TOAST_DURATION_MS,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct SubmitView {
    pub label: String,
    pub busy: bool,
    pub disabled: bool,
}

impl From<&SubmitControl> for SubmitView {
    fn from(control: &SubmitControl) -> Self {
        Self {
            label: control.label().to_string(),
            busy: control.is_busy(),
            disabled: !control.is_active(),
        }
    }
}

/// Field values, field errors and submit state of a form as it should be
/// drawn. `succeeded` swaps the form for its confirmation view.
#[derive(Debug, Clone, Serialize)]
pub struct FormView {
    pub values: HashMap<String, String>,
    pub errors: HashMap<String, String>,
    pub submit: SubmitView,
    pub succeeded: bool,
}

impl FormView {
    pub fn new(values: &[(&str, &str)], errors: &ValidationResult, control: &SubmitControl, succeeded: bool) -> Self {
        Self {
            values: values.iter().map(|(k, v)| (k.to_string(), v.to_string())).collect(),
            errors: errors.errors.iter().map(|e| (e.field.to_string(), e.message.to_string())).collect(),
            submit: SubmitView::from(control),
            succeeded,
        }
    }

    pub fn blank(submit_label: &str) -> Self {
        Self::new(&[], &ValidationResult::new(), &SubmitControl::new(submit_label), false)
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct CourseOption {
    pub value: String,
    pub label: String,
    pub selected: bool,
}

/// Dropdown entries; `selected` names the course to pre-select.
pub fn course_options(courses: &[Course], selected: Option<&str>) -> Vec<CourseOption> {
    courses
        .iter()
        .map(|course| CourseOption {
            value: course.name.clone(),
            label: course.option_label(),
            selected: selected == Some(course.name.as_str()),
        })
        .collect()
}
