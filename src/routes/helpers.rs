use std::error::Error;

use once_cell::sync::Lazy;

pub fn error_chain_fmt(e: &impl Error, f: &mut std::fmt::Formatter) -> std::fmt::Result {
    writeln!(f, "{e}\n")?;
    let mut current = e.source();

    while let Some(cause) = current {
        writeln!(f, "Caused by:\n\t{cause}")?;
        current = cause.source();
    }

    Ok(())
}

static TEMPLATES: Lazy<tera::Tera> = Lazy::new(|| {
    let mut tera = tera::Tera::default();
    tera.add_raw_templates(vec![
        (
            "emails/notification.txt",
            include_str!("../../views/emails/notification.txt"),
        ),
        (
            "emails/acknowledgment.txt",
            include_str!("../../views/emails/acknowledgment.txt"),
        ),
    ])
    .expect("Failed to parse the built-in email templates");
    tera
});

pub fn render_template(
    entries: &[(&str, &str)],
    template_name: &str,
) -> Result<String, tera::Error> {
    let mut ctx = tera::Context::new();
    for (key, value) in entries.iter().copied() {
        ctx.insert(key, value);
    }
    TEMPLATES
        .render(template_name, &ctx)
        .map(|rendered| rendered.trim().to_string())
}
