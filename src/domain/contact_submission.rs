use serde::{Deserialize, Serialize};

use super::{ProjectType, RequiredText, SubmitterEmail};

/// The contact form as posted by the browser. Every field may be absent so
/// that missing values surface as validation errors, not as body faults.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContactForm {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub project_type: Option<String>,
    #[serde(default)]
    pub message: Option<String>,
}

#[derive(Debug, Clone)]
pub struct ContactSubmission {
    pub name: RequiredText,
    pub email: SubmitterEmail,
    pub phone: Option<String>,
    pub project_type: Option<ProjectType>,
    pub message: RequiredText,
}

impl TryFrom<ContactForm> for ContactSubmission {
    type Error = String;

    fn try_from(form: ContactForm) -> Result<Self, Self::Error> {
        let name = RequiredText::parse("name", form.name);
        let email = SubmitterEmail::parse(form.email);
        let message = RequiredText::parse("message", form.message);

        match (name, email, message) {
            (Ok(name), Ok(email), Ok(message)) => Ok(Self {
                name,
                email,
                phone: form.phone.filter(|p| !p.is_empty()),
                project_type: ProjectType::parse(form.project_type),
                message,
            }),
            (name, email, message) => Err([name.err(), email.err(), message.err()]
                .into_iter()
                .flatten()
                .collect::<Vec<_>>()
                .join(" ")),
        }
    }
}
