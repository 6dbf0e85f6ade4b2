mod http;

pub use fake_store::FakeStore;

use intake::configuration::get_config;
use intake::startup::Application;
use intake::store_client::StoreClient;
use intake::telemetry;
use std::sync::OnceLock;
use wiremock::matchers;
use wiremock::{Mock, MockServer};

pub const CUSTOMERS_PATH: &str = "/rest/v1/customers";

pub struct TestApp {
    pub address: String,
    pub store_server: MockServer,
    pub api_client: reqwest::Client,
    pub store_client: StoreClient,
}

static TRACING: OnceLock<()> = OnceLock::new();

pub fn init_tracing() {
    TRACING.get_or_init(|| {
        let default_filter_level = "info".to_string();
        let subscriber_name = "test".to_string();

        if std::env::var("TEST_LOG").is_ok() {
            let subscriber =
                telemetry::get_subscriber(subscriber_name, default_filter_level, std::io::stdout);
            telemetry::init_subscriber(subscriber).expect("Failed to init tracing");
        } else {
            let subscriber =
                telemetry::get_subscriber(subscriber_name, default_filter_level, std::io::sink);
            telemetry::init_subscriber(subscriber).expect("Failed to init tracing");
        };
    });
}

pub async fn spawn_app() -> TestApp {
    init_tracing();

    let store_server = MockServer::start().await;

    let configuration = {
        let mut c = get_config().expect("Failed to read configuration.");
        c.application.port = 0;
        c.store.base_url = store_server.uri();
        c.store.timeout_milliseconds = 2_000;
        c
    };

    let application = Application::build(configuration.clone())
        .await
        .expect("Failed to build application.");
    let application_port = application.port();
    let _ = tokio::spawn(application.run_until_stopped());

    TestApp {
        address: format!("http://127.0.0.1:{}", application_port),
        store_server,
        api_client: reqwest::Client::new(),
        store_client: configuration
            .store
            .client()
            .expect("Failed to build store client."),
    }
}

impl TestApp {
    /// Serves the customers table from an in-memory fake for the rest of the test.
    pub async fn mount_fake_store(&self) -> FakeStore {
        let store = FakeStore::default();
        Mock::given(matchers::path(CUSTOMERS_PATH))
            .respond_with(store.clone())
            .named("Fake customers table")
            .mount(&self.store_server)
            .await;
        store
    }
}
