use crate::domain::{CallId, CustomerRecord, NewCustomer};
use chrono::{DateTime, SecondsFormat, Utc};
use reqwest::{Client, RequestBuilder, Url};
use secrecy::{ExposeSecret, Secret};
use std::time::Duration;

/// Thin client for the PostgREST endpoint of the hosted customer database.
#[derive(Debug)]
pub struct StoreClient {
    http_client: Client,
    base_url: Url,
    table: String,
    api_key: Secret<String>,
}

#[derive(serde::Serialize)]
struct InsertCustomerRequest<'a> {
    customer_name: &'a str,
    engagement_date: String,
    business_desc: &'a str,
}

#[derive(thiserror::Error, Debug)]
pub enum StoreError {
    #[error(transparent)]
    Request(#[from] reqwest::Error),

    #[error(transparent)]
    Url(#[from] url::ParseError),

    #[error("the store did not return the inserted row with its call id")]
    MissingInsertedRow,
}

impl StoreClient {
    pub fn new(
        base_url: Url,
        table: String,
        api_key: Secret<String>,
        timeout: Duration,
    ) -> Result<Self, StoreError> {
        let http_client = Client::builder().timeout(timeout).build()?;

        // `Url::join` replaces the last path segment unless the base ends with `/`.
        let mut base_url = base_url;
        if !base_url.path().ends_with('/') {
            let path = format!("{}/", base_url.path());
            base_url.set_path(&path);
        }

        Ok(Self {
            http_client,
            base_url,
            table,
            api_key,
        })
    }

    fn table_url(&self) -> Result<Url, StoreError> {
        Ok(self.base_url.join(&format!("rest/v1/{}", self.table))?)
    }

    fn authorized(&self, request: RequestBuilder) -> RequestBuilder {
        request
            .header("apikey", self.api_key.expose_secret())
            .bearer_auth(self.api_key.expose_secret())
    }

    /// Inserts a customer and returns the row the store created, including its
    /// generated `call_id` and `created_at`.
    #[tracing::instrument(
        skip_all,
        fields(call_id = tracing::field::Empty)
    )]
    pub async fn insert_customer(
        &self,
        customer: &NewCustomer,
    ) -> Result<CustomerRecord, StoreError> {
        let request_body = InsertCustomerRequest {
            customer_name: customer.name.as_ref(),
            engagement_date: customer.engagement_date.to_string(),
            business_desc: &customer.business_desc,
        };

        let rows: Vec<CustomerRecord> = self
            .authorized(self.http_client.post(self.table_url()?))
            .header("Prefer", "return=representation")
            .json(&request_body)
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;

        let record = rows
            .into_iter()
            .next()
            .filter(|record| !record.call_id.is_empty())
            .ok_or(StoreError::MissingInsertedRow)?;
        tracing::Span::current().record("call_id", tracing::field::display(&record.call_id));
        Ok(record)
    }

    #[tracing::instrument(skip(self))]
    pub async fn find_customer(
        &self,
        call_id: &CallId,
    ) -> Result<Option<CustomerRecord>, StoreError> {
        let filter = format!("eq.{call_id}");

        let rows: Vec<CustomerRecord> = self
            .authorized(self.http_client.get(self.table_url()?))
            .query(&[("select", "*"), ("call_id", filter.as_str())])
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;

        Ok(rows.into_iter().next())
    }

    /// Deletes every customer with `created_at` strictly before `cutoff` and
    /// returns the deleted rows.
    #[tracing::instrument(skip(self))]
    pub async fn delete_customers_created_before(
        &self,
        cutoff: DateTime<Utc>,
    ) -> Result<Vec<CustomerRecord>, StoreError> {
        let filter = format!("lt.{}", cutoff.to_rfc3339_opts(SecondsFormat::Micros, true));

        let rows = self
            .authorized(self.http_client.delete(self.table_url()?))
            .query(&[("created_at", filter.as_str())])
            .header("Prefer", "return=representation")
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;

        Ok(rows)
    }
}
