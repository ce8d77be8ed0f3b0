//! Browser-side submit flow for the contact form, driven against any
//! [`FormView`] implementation.

use anyhow::Context;
use reqwest::Client;

use crate::domain::ContactForm;

pub const BUSY_LABEL: &str = "Sending...";
pub const SUCCESS_ALERT: &str =
    "Thank you — your request has been received. We'll get back to you soon!";
pub const FAILURE_ALERT: &str =
    "Sorry, there was an error sending your message. Please try again or call us directly.";

/// The handful of things the submit flow needs from a rendered form.
pub trait FormView {
    fn read_fields(&self) -> ContactForm;
    fn submit_label(&self) -> String;
    fn set_submit_label(&mut self, label: &str);
    fn set_submit_enabled(&mut self, enabled: bool);
    fn alert(&mut self, message: &str);
    /// Clears every field back to its initial value.
    fn reset(&mut self);
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitResult {
    Delivered,
    Rejected { status: u16 },
    Faulted { reason: String },
}

pub struct SubmitFlow {
    http_client: Client,
    endpoint: String,
}

impl SubmitFlow {
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            http_client: Client::new(),
            endpoint: endpoint.into(),
        }
    }

    #[tracing::instrument(name = "Submitting the contact form", skip(self, view), fields(endpoint = %self.endpoint))]
    pub async fn submit<V: FormView>(&self, view: &mut V) -> SubmitResult {
        let fields = view.read_fields();
        let original_label = view.submit_label();
        view.set_submit_enabled(false);
        view.set_submit_label(BUSY_LABEL);

        let result = match self.post(&fields).await {
            Ok(status) if (200..300).contains(&status) => {
                view.alert(SUCCESS_ALERT);
                view.reset();
                SubmitResult::Delivered
            }
            Ok(status) => {
                view.alert(FAILURE_ALERT);
                SubmitResult::Rejected { status }
            }
            Err(e) => {
                tracing::error!(error.cause_chain = ?e, "Contact form submission failed");
                view.alert(FAILURE_ALERT);
                SubmitResult::Faulted {
                    reason: e.to_string(),
                }
            }
        };

        view.set_submit_enabled(true);
        view.set_submit_label(&original_label);
        result
    }

    /// Status of the exchange. A body that is not JSON counts as a fault.
    async fn post(&self, fields: &ContactForm) -> Result<u16, anyhow::Error> {
        let response = self
            .http_client
            .post(&self.endpoint)
            .json(fields)
            .send()
            .await
            .context("Failed to reach the submission endpoint.")?;

        let status = response.status().as_u16();
        response
            .json::<serde_json::Value>()
            .await
            .context("The submission endpoint returned a non-JSON body.")?;

        Ok(status)
    }
}
