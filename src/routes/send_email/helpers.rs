use crate::{
    domain::{ContactSubmission, EmailMessage},
    routes::render_template,
    startup::ContactDetails,
};

pub fn notification_email(
    submission: &ContactSubmission,
    contact: &ContactDetails,
) -> Result<EmailMessage, tera::Error> {
    let project_type = submission.project_type.as_ref().map(|p| p.as_str());

    let text = render_template(
        &[
            ("site_name", contact.site_name.as_str()),
            ("site_domain", contact.site_domain.as_str()),
            ("name", submission.name.as_ref()),
            ("email", submission.email.as_ref()),
            ("phone", submission.phone.as_deref().unwrap_or("Not provided")),
            ("project_type", project_type.unwrap_or("Not specified")),
            ("message", submission.message.as_ref()),
        ],
        "emails/notification.txt",
    )?;

    Ok(EmailMessage {
        to: vec![contact.business_recipient.to_string()],
        subject: format!(
            "New Contact Form Submission - {}",
            project_type.unwrap_or("General Inquiry")
        ),
        text,
        reply_to: Some(submission.email.to_string()),
    })
}

pub fn acknowledgment_email(
    submission: &ContactSubmission,
    contact: &ContactDetails,
) -> Result<EmailMessage, tera::Error> {
    let text = render_template(
        &[
            ("name", submission.name.as_ref()),
            ("site_name", contact.site_name.as_str()),
            ("contact_phone", contact.contact_phone.as_str()),
        ],
        "emails/acknowledgment.txt",
    )?;

    Ok(EmailMessage {
        to: vec![submission.email.to_string()],
        subject: format!("We received your request - {}", contact.site_name),
        text,
        reply_to: None,
    })
}
