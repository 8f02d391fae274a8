use std::collections::HashMap;
use std::net::SocketAddr;
use std::sync::{Arc, Mutex};
use serde_json::{json, Map, Value};
use warp::hyper::body::Bytes;
use warp::Filter;

#[derive(Debug, Clone)]
pub struct RecordedPost {
    pub content_type: String,
    pub body: Value,
}

#[derive(Default)]
struct SheetState {
    courses: Vec<Value>,
    posts: Vec<RecordedPost>,
    next_id: u32,
}

/// In-memory stand-in for the spreadsheet web app, speaking the same
/// `{ success, error?, ... }` envelope.
pub struct FakeSheet {
    address: SocketAddr,
    state: Arc<Mutex<SheetState>>,
}

impl FakeSheet {
    pub async fn start() -> Self {
        let state = Arc::new(Mutex::new(SheetState::default()));
        let shared = Arc::clone(&state);
        let state_filter = warp::any().map(move || Arc::clone(&shared));

        let reads = warp::get()
            .and(warp::path("exec"))
            .and(warp::path::end())
            .and(warp::query::<HashMap<String, String>>())
            .and(state_filter.clone())
            .map(|query: HashMap<String, String>, state: Arc<Mutex<SheetState>>| {
                let action = query.get("action").cloned().unwrap_or_default();
                warp::reply::json(&handle_read(&action, &state.lock().unwrap()))
            });

        let writes = warp::post()
            .and(warp::path("exec"))
            .and(warp::path::end())
            .and(warp::header::<String>("content-type"))
            .and(warp::body::bytes())
            .and(state_filter)
            .map(|content_type: String, body: Bytes, state: Arc<Mutex<SheetState>>| {
                let body: Value = serde_json::from_slice(&body).unwrap_or(Value::Null);
                let mut state = state.lock().unwrap();
                state.posts.push(RecordedPost { content_type, body: body.clone() });
                warp::reply::json(&handle_write(&body, &mut state))
            });

        let broken = warp::path("broken").map(|| warp::reply::html("<html>Service unavailable</html>"));

        let (address, server) = warp::serve(reads.or(writes).or(broken)).bind_ephemeral(([127, 0, 0, 1], 0));
        tokio::spawn(server);

        Self { address, state }
    }

    pub fn endpoint(&self) -> String {
        format!("http://{}/exec", self.address)
    }

    pub fn broken_endpoint(&self) -> String {
        format!("http://{}/broken", self.address)
    }

    pub fn posts(&self) -> Vec<RecordedPost> {
        self.state.lock().unwrap().posts.clone()
    }

    pub fn seed_course(&self, name: &str, fees: u64) {
        let mut state = self.state.lock().unwrap();
        state.next_id += 1;
        let id = format!("c{}", state.next_id);
        state.courses.push(json!({
            "id": id,
            "name": name,
            "duration": "6 Months",
            "fees": fees,
            "imageUrl": "",
            "syllabus": "HTML, CSS, JavaScript"
        }));
    }
}

fn handle_read(action: &str, state: &SheetState) -> Value {
    match action {
        "getCourses" => json!({ "success": true, "courses": state.courses }),
        "getStudents" => json!({ "success": true, "students": [] }),
        "getMessages" => json!({ "success": true, "messages": [] }),
        _ => json!({ "success": false, "error": "Unknown action" }),
    }
}

fn handle_write(body: &Value, state: &mut SheetState) -> Value {
    let mut fields: Map<String, Value> = body.as_object().cloned().unwrap_or_default();
    let action = fields.remove("action").and_then(|a| a.as_str().map(str::to_string)).unwrap_or_default();

    match action.as_str() {
        "adminLogin" if fields.get("password") == Some(&json!("secret")) => json!({ "success": true }),
        "adminLogin" => json!({ "success": false, "error": "Invalid credentials" }),
        "submitContact" | "submitEnrollment" => json!({ "success": true }),
        "addCourse" => {
            state.next_id += 1;
            fields.insert("id".to_string(), json!(format!("c{}", state.next_id)));
            state.courses.push(Value::Object(fields));
            json!({ "success": true })
        }
        "updateCourse" => {
            let id = fields.get("id").cloned();
            match state.courses.iter_mut().find(|c| c.get("id") == id.as_ref()) {
                Some(course) => {
                    *course = Value::Object(fields);
                    json!({ "success": true })
                }
                None => json!({ "success": false, "error": "Course not found" }),
            }
        }
        "deleteCourse" => {
            let id = fields.get("id").cloned();
            let before = state.courses.len();
            state.courses.retain(|c| c.get("id") != id.as_ref());
            json!({ "success": state.courses.len() < before })
        }
        _ => json!({ "success": false, "error": "Unknown action" }),
    }
}
