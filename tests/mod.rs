//! End-to-end runs against a local fake of the spreadsheet API.

mod support;

use std::sync::Arc;
use codeschool::enums::form_state::FormState;
use codeschool::services::api_client::ApiClient;
use codeschool::services::course_manager::CourseManager;
use codeschool::services::form_controller::FormController;
use codeschool::structs::config::config::Config;
use codeschool::structs::forms::contact_form::ContactForm;
use codeschool::structs::forms::course_form::CourseForm;
use codeschool::structs::forms::login_form::LoginForm;
use codeschool::structs::submit_outcome::SubmitOutcome;
use codeschool::traits::school_api::SchoolApi;
use codeschool::enums::action::Action;
use codeschool::ui::site_renderer::SiteRenderer;
use codeschool::ui::site_server::SiteServer;
use codeschool::ui::view_models::SiteView;
use support::FakeSheet;

fn course_form(id: &str, name: &str, fees: &str) -> CourseForm {
    CourseForm {
        id: id.to_string(),
        name: name.to_string(),
        duration: "3 Months".to_string(),
        fees: fees.to_string(),
        image_url: String::new(),
        syllabus: "Variables, control flow, functions".to_string(),
    }
}

#[tokio::test]
async fn contact_form_posts_plain_text_json_and_succeeds() {
    let sheet = FakeSheet::start().await;
    let api = Arc::new(ApiClient::new(&sheet.endpoint()));
    let mut controller = FormController::new(api, "Send Message");

    let form = ContactForm {
        name: " Asha ".to_string(),
        email: "asha@school.in".to_string(),
        message: "Is there a weekend batch?".to_string(),
    };
    let outcome = controller.submit(&form).await;

    assert!(outcome.is_success());
    assert_eq!(controller.state(), &FormState::Success);

    let requests = sheet.posts();
    assert_eq!(requests.len(), 1);
    assert_eq!(requests[0].content_type, "text/plain");
    assert_eq!(requests[0].body["action"], "submitContact");
    assert_eq!(requests[0].body["name"], "Asha");
}

#[tokio::test]
async fn wrong_password_surfaces_server_error() {
    let sheet = FakeSheet::start().await;
    let mut controller = FormController::new(Arc::new(ApiClient::new(&sheet.endpoint())), "Login");

    let form = LoginForm { email: "admin@school.in".to_string(), password: "guess".to_string() };
    match controller.submit(&form).await {
        SubmitOutcome::Failed { message, .. } => assert_eq!(message, "Invalid credentials"),
        other => panic!("unexpected outcome: {:?}", other),
    }
    assert_eq!(controller.state(), &FormState::Error("Invalid credentials".to_string()));
}

#[tokio::test]
async fn course_lifecycle_refetches_after_each_mutation() {
    let sheet = FakeSheet::start().await;
    let api = Arc::new(ApiClient::new(&sheet.endpoint()));
    let manager = CourseManager::new(Arc::clone(&api));
    let mut controller = FormController::new(api, "Save Course");

    let created = manager.save(&mut controller, &course_form("", "Python", "4999")).await.unwrap();
    let courses = created.courses.expect("list after create");
    assert_eq!(courses.len(), 1);
    assert_eq!(courses[0].fees, 4999.0);
    let id = courses[0].id.clone();

    let updated = manager.save(&mut controller, &course_form(&id, "Python Pro", "5999")).await.unwrap();
    let courses = updated.courses.expect("list after update");
    assert_eq!(courses.len(), 1);
    assert_eq!(courses[0].name, "Python Pro");
    assert_eq!(courses[0].formatted_fees(), "5,999");

    let pending = manager.request_delete(&courses[0]).unwrap();
    let deleted = manager.confirm_delete(pending).await.unwrap();
    assert_eq!(deleted.courses, Some(Vec::new()));

    let actions: Vec<String> = sheet.posts().into_iter().map(|r| r.body["action"].as_str().unwrap_or_default().to_string()).collect();
    assert_eq!(actions, vec!["addCourse", "updateCourse", "deleteCourse"]);
}

#[tokio::test]
async fn reads_are_idempotent_without_mutation() {
    let sheet = FakeSheet::start().await;
    sheet.seed_course("Java", 9000);
    let api = ApiClient::new(&sheet.endpoint());

    let first = api.fetch_one(Action::GetCourses).await;
    let second = api.fetch_one(Action::GetCourses).await;

    assert!(first.success);
    assert_eq!(first, second);
}

#[tokio::test]
async fn non_json_body_becomes_network_error() {
    let sheet = FakeSheet::start().await;
    let api = ApiClient::new(&sheet.broken_endpoint());

    let response = api.fetch_one(Action::GetCourses).await;
    assert!(!response.success);
    assert_eq!(response.error_message(), Some("Network error. Please try again."));

    let manager = CourseManager::new(Arc::new(api));
    assert!(manager.list().await.is_err());
}

#[tokio::test]
async fn site_server_renders_pages_from_the_api() {
    let sheet = FakeSheet::start().await;
    sheet.seed_course("Web Development", 150000);

    let renderer = SiteRenderer::new(SiteView::from_config(&Config::default())).unwrap();
    let mut server = SiteServer::new(Arc::new(ApiClient::new(&sheet.endpoint())), renderer);
    let address = server.start(0).await.unwrap();
    let client = reqwest::Client::new();

    let home = client.get(format!("http://{}/", address)).send().await.unwrap().text().await.unwrap();
    assert!(home.contains("Web Development"));
    assert!(home.contains("₹1,50,000"));

    let enroll = client
        .get(format!("http://{}/enroll?course=Web%20Development", address))
        .send()
        .await
        .unwrap()
        .text()
        .await
        .unwrap();
    assert!(enroll.contains(r#"<option value="Web Development" selected>"#));

    let contact = client
        .post(format!("http://{}/contact", address))
        .form(&[("name", "Ravi"), ("email", "ravi@example.in"), ("message", "Hello")])
        .send()
        .await
        .unwrap()
        .text()
        .await
        .unwrap();
    assert!(contact.contains("Message Sent!"));
    assert_eq!(sheet.posts().last().map(|r| r.body["action"].clone()), Some(serde_json::json!("submitContact")));

    server.shutdown().await.unwrap();
}
