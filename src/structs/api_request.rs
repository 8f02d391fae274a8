use serde::Serialize;
use serde_json::{Map, Value};
use crate::enums::action::Action;

pub type Payload = Map<String, Value>;

/// Body of a mutating call: `{ "action": ..., <payload fields> }`.
#[derive(Debug, Clone, Serialize)]
pub struct ApiRequest {
    pub action: Action,
    #[serde(flatten)]
    pub payload: Payload,
}

impl ApiRequest {
    pub fn new(action: Action, mut payload: Payload) -> Self {
        // the typed action is authoritative
        payload.remove("action");
        Self { action, payload }
    }
}

/// Builds a payload from string pairs.
pub fn payload_of<'a>(fields: impl IntoIterator<Item = (&'a str, String)>) -> Payload {
    fields
        .into_iter()
        .map(|(key, value)| (key.to_string(), Value::String(value)))
        .collect()
}
