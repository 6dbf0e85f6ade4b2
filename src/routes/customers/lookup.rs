use crate::domain::{CallId, CustomerRecord, LookupQuery};
use crate::routes::pages::{self, CustomerView, LookupOutcome};
use crate::store_client::StoreClient;
use crate::utils;
use actix_web::http::StatusCode;
use actix_web::{HttpResponse, ResponseError, web};
use anyhow::{Context, anyhow};
use std::fmt;
use std::fmt::{Debug, Formatter};

#[derive(thiserror::Error)]
#[error("検索エラー: {error:#}")]
pub struct LookupError {
    call_id: String,
    #[source]
    error: anyhow::Error,
}

impl Debug for LookupError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        utils::error_chain_fmt(self, f)
    }
}

impl ResponseError for LookupError {
    fn status_code(&self) -> StatusCode {
        StatusCode::INTERNAL_SERVER_ERROR
    }

    fn error_response(&self) -> HttpResponse {
        let message = self.to_string();
        pages::html_response(
            self.status_code(),
            pages::lookup_page(&self.call_id, LookupOutcome::Failed(&message)),
        )
    }
}

#[tracing::instrument(
    name = "Look up a customer",
    skip_all,
    fields(call_id = tracing::field::Empty)
)]
pub async fn lookup_customer(
    query: web::Query<LookupQuery>,
    store_client: web::Data<StoreClient>,
) -> Result<HttpResponse, LookupError> {
    let raw_call_id = query.into_inner().call_id.unwrap_or_default();

    // Nothing to look up until an id is submitted.
    let Ok(call_id) = CallId::parse(raw_call_id.clone()) else {
        return Ok(pages::html_response(
            StatusCode::OK,
            pages::lookup_page(&raw_call_id, LookupOutcome::Idle),
        ));
    };
    tracing::Span::current().record("call_id", tracing::field::display(&call_id));

    let record = store_client
        .find_customer(&call_id)
        .await
        .context("Failed to look up the customer")
        .map_err(|error| LookupError {
            call_id: raw_call_id.clone(),
            error,
        })?;

    let Some(record) = record else {
        tracing::info!("No customer matches the call id");
        return Ok(pages::html_response(
            StatusCode::OK,
            pages::lookup_page(call_id.as_ref(), LookupOutcome::NotFound),
        ));
    };

    let created_at = format_created_at(&record).map_err(|error| LookupError {
        call_id: raw_call_id.clone(),
        error,
    })?;

    let view = CustomerView {
        customer_name: &record.customer_name,
        engagement_date: &record.engagement_date,
        business_desc: record.business_desc(),
        created_at: &created_at,
    };
    Ok(pages::html_response(
        StatusCode::OK,
        pages::lookup_page(call_id.as_ref(), LookupOutcome::Found(view)),
    ))
}

fn format_created_at(record: &CustomerRecord) -> Result<String, anyhow::Error> {
    record
        .created_at_jst()
        .map_err(|e| anyhow!(e))
        .context("Failed to format the creation time")
}
