use serde::Serialize;

/// Result of the best-effort acknowledgment sent back to the submitter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfirmationOutcome {
    Sent { message_id: String },
    Failed { reason: String },
    /// Acknowledgments are switched off in configuration.
    Skipped,
}

impl ConfirmationOutcome {
    pub fn is_sent(&self) -> bool {
        matches!(self, ConfirmationOutcome::Sent { .. })
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SubmissionResponse {
    pub success: bool,
    pub message_id: String,
    pub confirmation_sent: bool,
}

#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub error: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<serde_json::Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<u16>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl ErrorBody {
    pub fn new(error: &'static str) -> Self {
        Self {
            error,
            details: None,
            status: None,
            message: None,
        }
    }
}
