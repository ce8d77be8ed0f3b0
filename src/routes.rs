mod health_check;
mod helpers;
mod send_email;

pub use health_check::health_check;
pub use helpers::{error_chain_fmt, render_template};
pub use send_email::{
    ConfirmationOutcome, SubmissionError, SubmissionResponse, method_not_allowed, preflight,
    send_contact_email,
};
