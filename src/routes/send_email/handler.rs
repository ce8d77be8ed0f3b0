use actix_web::{HttpResponse, web};
use anyhow::Context;

use super::{
    errors::SubmissionError,
    helpers::{acknowledgment_email, notification_email},
    types::{ConfirmationOutcome, SubmissionResponse},
};
use crate::{
    domain::{ContactForm, ContactSubmission},
    email_client::{EmailClient, SendEmailError},
    startup::ContactDetails,
};

#[tracing::instrument(
    name = "Relaying a contact form submission",
    skip(form, email_client, contact),
    fields(
        submitter_email = tracing::field::Empty,
        project_type = tracing::field::Empty
    )
)]
pub async fn send_contact_email(
    form: web::Json<ContactForm>,
    email_client: web::Data<EmailClient>,
    contact: web::Data<ContactDetails>,
) -> Result<HttpResponse, SubmissionError> {
    let submission: ContactSubmission = form
        .into_inner()
        .try_into()
        .map_err(SubmissionError::ValidationError)?;

    let span = tracing::Span::current();
    span.record("submitter_email", tracing::field::display(&submission.email));
    if let Some(project_type) = &submission.project_type {
        span.record("project_type", tracing::field::display(project_type));
    }

    if !email_client.is_configured() {
        tracing::error!("The email provider API key is not set. Refusing to relay the submission.");
        return Err(SubmissionError::NotConfigured);
    }

    let notification = notification_email(&submission, &contact)
        .context("Failed to render the notification email.")?;

    let message_id = match email_client.send_email(&notification).await {
        Ok(sent) => sent.id,
        Err(SendEmailError::Rejected(detail)) => {
            tracing::error!(
                upstream.status = detail.status,
                upstream.message = %detail.message,
                "The email provider rejected the notification email."
            );
            return Err(SubmissionError::UpstreamError(detail));
        }
        Err(SendEmailError::MissingApiKey) => return Err(SubmissionError::NotConfigured),
        Err(e @ (SendEmailError::Transport(_) | SendEmailError::MalformedResponse(_))) => {
            return Err(anyhow::Error::new(e)
                .context("Failed to send the notification email.")
                .into());
        }
    };

    let confirmation = send_acknowledgment(&email_client, &submission, &contact).await;

    Ok(HttpResponse::Ok().json(SubmissionResponse {
        success: true,
        message_id,
        confirmation_sent: confirmation.is_sent(),
    }))
}

/// Failures are logged and folded into the outcome; they never fail the request.
#[tracing::instrument(name = "Sending an acknowledgment to the submitter", skip_all)]
async fn send_acknowledgment(
    email_client: &EmailClient,
    submission: &ContactSubmission,
    contact: &ContactDetails,
) -> ConfirmationOutcome {
    if !contact.send_confirmation {
        return ConfirmationOutcome::Skipped;
    }

    let message = match acknowledgment_email(submission, contact) {
        Ok(message) => message,
        Err(e) => {
            tracing::warn!(error.cause_chain = ?e, "Failed to render the acknowledgment email.");
            return ConfirmationOutcome::Failed {
                reason: e.to_string(),
            };
        }
    };

    match email_client.send_email(&message).await {
        Ok(sent) => ConfirmationOutcome::Sent {
            message_id: sent.id,
        },
        Err(e) => {
            tracing::warn!(
                error.cause_chain = ?e,
                error.message = %e,
                "Failed to send the acknowledgment email."
            );
            ConfirmationOutcome::Failed {
                reason: e.to_string(),
            }
        }
    }
}

pub async fn preflight() -> HttpResponse {
    HttpResponse::Ok().finish()
}

pub async fn method_not_allowed() -> Result<HttpResponse, SubmissionError> {
    Err(SubmissionError::MethodNotAllowed)
}
