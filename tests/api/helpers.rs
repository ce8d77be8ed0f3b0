use contact_relay::{
    configuration::get_configuration,
    startup::Application,
    telemetry::{get_subscriber, init_subscriber},
};
use once_cell::sync::Lazy;
use secrecy::SecretString;
use wiremock::MockServer;

static TRACING: Lazy<()> = Lazy::new(|| {
    let default_filter_level = "info".to_string();
    let subscriber_name = "test".to_string();

    if std::env::var("TEST_LOG").is_ok() {
        let subscriber = get_subscriber(subscriber_name, default_filter_level, std::io::stdout);
        init_subscriber(subscriber);
    } else {
        let subscriber = get_subscriber(subscriber_name, default_filter_level, std::io::sink);
        init_subscriber(subscriber);
    }
});

pub struct TestApp {
    pub address: String,
    pub email_server: MockServer,
    pub api_client: reqwest::Client,
}

impl TestApp {
    pub fn endpoint(&self) -> String {
        format!("{}/api/send-email", &self.address)
    }

    pub async fn post_submission(&self, body: &serde_json::Value) -> reqwest::Response {
        self.api_client
            .post(self.endpoint())
            .json(body)
            .send()
            .await
            .expect("Failed to execute request.")
    }
}

pub struct AppOptions {
    pub api_key: Option<&'static str>,
    pub send_confirmation: bool,
    pub timeout_ms: Option<u64>,
}

impl Default for AppOptions {
    fn default() -> Self {
        Self {
            api_key: Some("re_test_key"),
            send_confirmation: true,
            timeout_ms: None,
        }
    }
}

pub async fn spawn_app() -> TestApp {
    spawn_app_with(AppOptions::default()).await
}

pub async fn spawn_app_with(options: AppOptions) -> TestApp {
    Lazy::force(&TRACING);

    let email_server = MockServer::start().await;

    let config = {
        let mut c = get_configuration().expect("Failed to read configuration");
        c.application.host = "127.0.0.1".into();
        c.application.port = 0;
        c.email_client.base_url = email_server.uri();
        c.email_client.auth_token = options.api_key.map(SecretString::from);
        c.contact.send_confirmation = options.send_confirmation;
        c.email_client.timeout_ms = options.timeout_ms;
        c
    };

    let application = Application::build(config)
        .await
        .expect("Failed to build application.");
    let port = application.get_port();
    let _ = tokio::spawn(application.run_until_stopped());

    TestApp {
        address: format!("http://127.0.0.1:{port}"),
        email_server,
        api_client: reqwest::Client::new(),
    }
}

pub fn valid_submission() -> serde_json::Value {
    serde_json::json!({
        "name": "Jane Doe",
        "email": "jane@example.com",
        "phone": "",
        "projectType": "renovation",
        "message": "Need a kitchen remodel"
    })
}
