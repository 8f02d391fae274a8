use serde::Serialize;
use crate::enums::toast_kind::ToastKind;

/// Transient notification shown after a form event.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Toast {
    pub kind: ToastKind,
    pub message: String,
}

impl Toast {
    pub fn success(message: &str) -> Self {
        Self { kind: ToastKind::Success, message: message.to_string() }
    }

    pub fn error(message: &str) -> Self {
        Self { kind: ToastKind::Error, message: message.to_string() }
    }

    pub fn info(message: &str) -> Self {
        Self { kind: ToastKind::Info, message: message.to_string() }
    }
}
