use anyhow::Context;
use intake::cleanup::run_cleanup;
use intake::configuration::StoreSettings;
use intake::telemetry::{get_subscriber, init_subscriber};

// One-shot job: deletes customers older than the retention window and exits.
#[tokio::main]
async fn main() -> Result<(), anyhow::Error> {
    let subscriber = get_subscriber("cleanup".into(), "info".into(), std::io::stdout);
    init_subscriber(subscriber)?;

    let settings =
        StoreSettings::from_env().context("SUPABASE_URL and SUPABASE_KEY must both be set")?;

    if let Err(e) = run_cleanup(settings).await {
        tracing::error!(
            error.cause_chain = ?e,
            error.message = %e,
            "Customer cleanup failed"
        );
        std::process::exit(1);
    }
    Ok(())
}
