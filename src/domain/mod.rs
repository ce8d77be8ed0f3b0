mod contact_submission;
mod email_message;
mod mailbox;
mod project_type;
mod required_text;
mod submitter_email;

pub use contact_submission::{ContactForm, ContactSubmission};
pub use email_message::EmailMessage;
pub use mailbox::Mailbox;
pub use project_type::ProjectType;
pub use required_text::RequiredText;
pub use submitter_email::SubmitterEmail;
