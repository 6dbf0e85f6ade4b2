use crate::domain::{RegisterFormData, today_in_jst};
use crate::routes::pages::{self, RegisterOutcome};
use crate::store_client::StoreClient;
use crate::utils;
use actix_web::http::StatusCode;
use actix_web::{HttpResponse, ResponseError, web};
use anyhow::Context;
use chrono::Utc;
use std::fmt;
use std::fmt::{Debug, Formatter};
use tracing::{Span, field};

#[derive(thiserror::Error)]
pub enum RegisterError {
    #[error("{0}")]
    ValidationError(String),

    #[error(transparent)]
    UnexpectedError(#[from] anyhow::Error),
}

/// A failed submission, together with the values to put back into the form.
#[derive(thiserror::Error)]
#[error("{error}")]
pub struct RegisterFailure {
    form: RegisterFormData,
    #[source]
    error: RegisterError,
}

impl Debug for RegisterError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        utils::error_chain_fmt(self, f)
    }
}

impl Debug for RegisterFailure {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        Debug::fmt(&self.error, f)
    }
}

impl RegisterError {
    fn user_message(&self) -> String {
        match self {
            RegisterError::ValidationError(message) => message.clone(),
            RegisterError::UnexpectedError(e) => format!("エラーが発生しました: {e:#}"),
        }
    }
}

impl ResponseError for RegisterFailure {
    fn status_code(&self) -> StatusCode {
        match self.error {
            RegisterError::ValidationError(_) => StatusCode::BAD_REQUEST,
            RegisterError::UnexpectedError(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        let message = self.error.user_message();
        pages::html_response(
            self.status_code(),
            pages::register_page(&self.form, RegisterOutcome::Failed(&message)),
        )
    }
}

#[tracing::instrument(name = "Show the registration form")]
pub async fn register_form() -> HttpResponse {
    let form = RegisterFormData {
        engagement_date: today_in_jst(Utc::now()).to_string(),
        ..Default::default()
    };
    pages::html_response(
        StatusCode::OK,
        pages::register_page(&form, RegisterOutcome::Pending),
    )
}

#[tracing::instrument(
    name = "Register a new customer",
    skip_all,
    fields(
        customer_name = tracing::field::Empty,
        call_id = tracing::field::Empty
    )
)]
pub async fn register_customer(
    form: web::Form<RegisterFormData>,
    store_client: web::Data<StoreClient>,
) -> Result<HttpResponse, RegisterFailure> {
    let form = form.into_inner();

    let call_id = insert_customer(&form, &store_client)
        .await
        .map_err(|error| RegisterFailure {
            form: form.clone(),
            error,
        })?;

    Ok(pages::html_response(
        StatusCode::OK,
        pages::register_page(&form, RegisterOutcome::Registered { call_id: &call_id }),
    ))
}

async fn insert_customer(
    form: &RegisterFormData,
    store_client: &StoreClient,
) -> Result<String, RegisterError> {
    // Validation runs before any request reaches the store.
    let customer = form
        .to_new_customer(today_in_jst(Utc::now()))
        .map_err(RegisterError::ValidationError)?;
    Span::current().record("customer_name", field::display(&customer.name));

    let record = store_client
        .insert_customer(&customer)
        .await
        .context("Failed to store a new customer")?;
    Span::current().record("call_id", field::display(&record.call_id));

    Ok(record.call_id)
}
