use std::time::Duration;

use anyhow::Context;
use reqwest::{Client, Response, StatusCode, Url};
use secrecy::{ExposeSecret, SecretString};
use serde::{Deserialize, Serialize};

use crate::domain::{EmailMessage, Mailbox};
use crate::routes::error_chain_fmt;

#[derive(Clone)]
pub struct EmailClient {
    http_client: Client,
    endpoint: Url,
    sender: Mailbox,
    auth_token: Option<SecretString>,
}

#[derive(Serialize)]
struct SendEmailRequest<'a> {
    from: String,
    to: &'a [String],
    subject: &'a str,
    text: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    reply_to: Option<&'a str>,
}

#[derive(Deserialize)]
struct SendEmailResponse {
    id: String,
}

/// What the provider handed back for an accepted email.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SentEmail {
    pub id: String,
}

/// A provider failure reduced to one shape, whatever the provider sent.
#[derive(Debug, Clone, PartialEq)]
pub struct ProviderErrorDetail {
    pub status: u16,
    /// The error body, when it was JSON.
    pub body: Option<serde_json::Value>,
    pub message: String,
}

impl ProviderErrorDetail {
    async fn from_response(response: Response) -> Self {
        let status = response.status();
        let body = response
            .bytes()
            .await
            .ok()
            .and_then(|bytes| serde_json::from_slice::<serde_json::Value>(&bytes).ok());

        Self::new(status, body)
    }

    fn new(status: StatusCode, body: Option<serde_json::Value>) -> Self {
        let message = match &body {
            Some(value) => ["message", "error"]
                .iter()
                .find_map(|key| value.get(key).and_then(|v| v.as_str()))
                .map(str::to_owned)
                .unwrap_or_else(|| value.to_string()),
            None => status_line(status),
        };

        Self {
            status: status.as_u16(),
            body,
            message,
        }
    }

    /// The body if there was one, the message otherwise.
    pub fn details(&self) -> serde_json::Value {
        self.body
            .clone()
            .unwrap_or_else(|| serde_json::Value::String(self.message.clone()))
    }
}

fn status_line(status: StatusCode) -> String {
    match status.canonical_reason() {
        Some(reason) => format!("{} {reason}", status.as_u16()),
        None => status.as_u16().to_string(),
    }
}

#[derive(thiserror::Error)]
pub enum SendEmailError {
    #[error("The email provider API key is not configured.")]
    MissingApiKey,
    #[error("The email provider rejected the email with status {}: {}", .0.status, .0.message)]
    Rejected(ProviderErrorDetail),
    #[error("The email provider accepted the email but its response could not be read.")]
    MalformedResponse(#[source] reqwest::Error),
    #[error("Failed to reach the email provider.")]
    Transport(#[from] reqwest::Error),
}

impl std::fmt::Debug for SendEmailError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        error_chain_fmt(self, f)
    }
}

impl EmailClient {
    pub fn new(
        base_url: String,
        sender: Mailbox,
        auth_token: Option<SecretString>,
        timeout: Option<Duration>,
    ) -> Result<Self, anyhow::Error> {
        let mut builder = Client::builder();
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }

        let mut base_url = base_url;
        if !base_url.ends_with('/') {
            base_url.push('/');
        }

        let endpoint = Url::parse(&base_url)
            .and_then(|url| url.join("emails"))
            .context("Failed parsing base email api url.")?;

        Ok(Self {
            http_client: builder.build().context("Failed to build the HTTP client.")?,
            endpoint,
            sender,
            auth_token: auth_token.filter(|t| !t.expose_secret().is_empty()),
        })
    }

    /// An empty key counts as no key.
    pub fn is_configured(&self) -> bool {
        self.auth_token
            .as_ref()
            .is_some_and(|t| !t.expose_secret().is_empty())
    }

    #[tracing::instrument(
        name = "Sending an email through the provider",
        skip(self, message),
        fields(subject = %message.subject)
    )]
    pub async fn send_email(&self, message: &EmailMessage) -> Result<SentEmail, SendEmailError> {
        let auth_token = self
            .auth_token
            .as_ref()
            .ok_or(SendEmailError::MissingApiKey)?;

        let body = SendEmailRequest {
            from: self.sender.to_string(),
            to: &message.to,
            subject: &message.subject,
            text: &message.text,
            reply_to: message.reply_to.as_deref(),
        };

        let response = self
            .http_client
            .post(self.endpoint.clone())
            .bearer_auth(auth_token.expose_secret())
            .json(&body)
            .send()
            .await?;

        if !response.status().is_success() {
            let detail = ProviderErrorDetail::from_response(response).await;
            return Err(SendEmailError::Rejected(detail));
        }

        let sent = response
            .json::<SendEmailResponse>()
            .await
            .map_err(SendEmailError::MalformedResponse)?;

        Ok(SentEmail { id: sent.id })
    }
}
