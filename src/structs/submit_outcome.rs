use crate::structs::api_response::ApiResponse;
use crate::structs::toast::Toast;
use crate::structs::validation_result::ValidationResult;

#[derive(Debug, Clone, PartialEq)]
pub enum SubmitOutcome {
    /// Validation failed; nothing was sent.
    Rejected { validation: ValidationResult, toast: Toast },
    Succeeded { response: ApiResponse, toast: Toast },
    Failed { message: String, toast: Toast },
    /// The control is gone or busy.
    Ignored,
}

impl SubmitOutcome {
    pub fn toast(&self) -> Option<&Toast> {
        match self {
            Self::Rejected { toast, .. } | Self::Succeeded { toast, .. } | Self::Failed { toast, .. } => Some(toast),
            Self::Ignored => None,
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, Self::Succeeded { .. })
    }
}
