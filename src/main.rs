use anyhow::Context;
use intake::configuration::get_config;
use intake::startup::Application;
use intake::telemetry::{get_subscriber, init_subscriber};

#[tokio::main]
async fn main() -> Result<(), anyhow::Error> {
    let subscriber = get_subscriber("intake".into(), "info".into(), std::io::stdout);
    init_subscriber(subscriber)?;

    let config = get_config().context("Failed to read configuration")?;
    let application = Application::build(config).await?;
    tracing::info!(port = application.port(), "Intake server listening");
    application.run_until_stopped().await
}
