use crate::configuration::StoreSettings;
use crate::store_client::StoreClient;
use anyhow::Context;
use chrono::{DateTime, TimeDelta, Utc};

/// How long a customer record is kept before the cleanup job removes it.
pub const RETENTION_HOURS: i64 = 24;

/// Records created strictly before this instant are expired.
pub fn retention_cutoff(now: DateTime<Utc>) -> DateTime<Utc> {
    now - TimeDelta::hours(RETENTION_HOURS)
}

pub async fn run_cleanup(settings: StoreSettings) -> Result<usize, anyhow::Error> {
    let store_client = settings
        .client()
        .context("Failed to build the store client")?;
    delete_expired_customers(&store_client, Utc::now()).await
}

#[tracing::instrument(skip(store_client))]
pub async fn delete_expired_customers(
    store_client: &StoreClient,
    now: DateTime<Utc>,
) -> Result<usize, anyhow::Error> {
    let cutoff = retention_cutoff(now);
    tracing::info!(%cutoff, "Deleting customers created before the cutoff");

    let deleted = store_client
        .delete_customers_created_before(cutoff)
        .await
        .context("Failed to delete expired customers")?
        .len();

    tracing::info!(deleted, "Customer cleanup completed");
    Ok(deleted)
}
