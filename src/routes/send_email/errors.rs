use actix_web::{
    HttpResponse, ResponseError,
    http::{StatusCode, header},
};

use super::types::ErrorBody;
use crate::{email_client::ProviderErrorDetail, routes::error_chain_fmt};

#[derive(thiserror::Error)]
pub enum SubmissionError {
    #[error("Only POST requests are accepted.")]
    MethodNotAllowed,
    #[error("{0}")]
    ValidationError(String),
    #[error("The email provider API key is not configured.")]
    NotConfigured,
    #[error("The email provider rejected the notification email: {}", .0.message)]
    UpstreamError(ProviderErrorDetail),
    #[error(transparent)]
    UnexpectedError(#[from] anyhow::Error),
}

impl std::fmt::Debug for SubmissionError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        error_chain_fmt(self, f)
    }
}

impl ResponseError for SubmissionError {
    fn status_code(&self) -> StatusCode {
        match self {
            SubmissionError::MethodNotAllowed => StatusCode::METHOD_NOT_ALLOWED,
            SubmissionError::ValidationError(_) => StatusCode::BAD_REQUEST,
            SubmissionError::NotConfigured
            | SubmissionError::UpstreamError(_)
            | SubmissionError::UnexpectedError(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        let body = match self {
            SubmissionError::MethodNotAllowed => ErrorBody::new("Method not allowed"),
            SubmissionError::ValidationError(reason) => ErrorBody {
                message: Some(reason.clone()),
                ..ErrorBody::new("Missing required fields")
            },
            SubmissionError::NotConfigured => ErrorBody::new("Email service not configured"),
            SubmissionError::UpstreamError(detail) => ErrorBody {
                details: Some(detail.details()),
                status: Some(detail.status),
                ..ErrorBody::new("Failed to send email")
            },
            SubmissionError::UnexpectedError(e) => ErrorBody {
                message: Some(e.to_string()),
                ..ErrorBody::new("Internal server error")
            },
        };

        let mut response = HttpResponse::build(self.status_code());
        if let SubmissionError::MethodNotAllowed = self {
            response.insert_header((header::ALLOW, "POST, OPTIONS"));
        }
        response.json(body)
    }
}
