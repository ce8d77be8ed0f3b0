use crate::configuration::{ContactSettings, Settings};
use crate::domain::Mailbox;
use crate::email_client::EmailClient;
use crate::routes::{
    SubmissionError, health_check, method_not_allowed, preflight, send_contact_email,
};
use actix_web::dev::Server;
use actix_web::http::Method;
use actix_web::middleware::DefaultHeaders;
use actix_web::{App, HttpServer, web};
use std::net::TcpListener;
use tracing_actix_web::TracingLogger;

pub struct Application {
    port: u16,
    server: Server,
}

/// Business-facing details the relay needs to compose its emails.
#[derive(Debug, Clone)]
pub struct ContactDetails {
    pub business_recipient: Mailbox,
    pub site_name: String,
    pub site_domain: String,
    pub contact_phone: String,
    pub send_confirmation: bool,
}

impl TryFrom<ContactSettings> for ContactDetails {
    type Error = String;

    fn try_from(settings: ContactSettings) -> Result<Self, Self::Error> {
        Ok(Self {
            business_recipient: settings.business_recipient()?,
            site_name: settings.site_name,
            site_domain: settings.site_domain,
            contact_phone: settings.contact_phone,
            send_confirmation: settings.send_confirmation,
        })
    }
}

impl Application {
    pub async fn build(config: Settings) -> Result<Self, anyhow::Error> {
        if config.email_client.auth_token.is_none() {
            tracing::warn!("No email provider API key configured; submissions will be refused.");
        }
        let email_client = config.email_client.client()?;
        let contact = ContactDetails::try_from(config.contact).map_err(anyhow::Error::msg)?;

        let address = format!("{}:{}", config.application.host, config.application.port);
        let listener = TcpListener::bind(address)?;
        let port = listener.local_addr()?.port();
        let server = run(listener, email_client, contact)?;

        Ok(Self { port, server })
    }

    pub fn get_port(&self) -> u16 {
        self.port
    }

    pub async fn run_until_stopped(self) -> Result<(), std::io::Error> {
        self.server.await
    }
}

fn cors_headers() -> DefaultHeaders {
    DefaultHeaders::new()
        .add(("Access-Control-Allow-Origin", "*"))
        .add(("Access-Control-Allow-Methods", "POST, OPTIONS"))
        .add(("Access-Control-Allow-Headers", "Content-Type"))
}

fn json_config() -> web::JsonConfig {
    web::JsonConfig::default()
        .content_type_required(false)
        .error_handler(|err, _req| {
            SubmissionError::UnexpectedError(anyhow::anyhow!(err.to_string())).into()
        })
}

pub fn run(
    listener: TcpListener,
    email_client: EmailClient,
    contact: ContactDetails,
) -> Result<Server, anyhow::Error> {
    let email_client = web::Data::new(email_client);
    let contact = web::Data::new(contact);

    let server = HttpServer::new(move || {
        App::new()
            .wrap(TracingLogger::default())
            .route("/health_check", web::get().to(health_check))
            .service(
                web::scope("/api").wrap(cors_headers()).service(
                    web::resource("/send-email")
                        .app_data(json_config())
                        .route(web::post().to(send_contact_email))
                        .route(web::method(Method::OPTIONS).to(preflight))
                        .default_service(web::to(method_not_allowed)),
                ),
            )
            .app_data(email_client.clone())
            .app_data(contact.clone())
    })
    .listen(listener)?
    .run();

    Ok(server)
}
