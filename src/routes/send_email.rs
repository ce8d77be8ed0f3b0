mod errors;
mod handler;
mod helpers;
mod types;

pub use errors::SubmissionError;
pub use handler::{method_not_allowed, preflight, send_contact_email};
pub use types::{ConfirmationOutcome, SubmissionResponse};
