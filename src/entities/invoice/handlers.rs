//! Invoice HTTP handlers

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::Json;
use serde_json::{Value, json};

use super::model::{InvoiceUpdate, NewInvoice, today};
use crate::core::error::{BizError, BizResult};
use crate::core::extractors::{ApiPath, ValidJson};
use crate::server::host::AppState;

/// GET /invoices
pub async fn list_invoices(State(state): State<AppState>) -> BizResult<Json<Value>> {
    let invoices = state.invoices.list().await?;
    Ok(Json(json!({ "invoices": invoices })))
}

/// POST /invoices
///
/// An unknown `comp_code` is a foreign-key violation in the store and
/// surfaces as an internal error.
pub async fn create_invoice(
    State(state): State<AppState>,
    ValidJson(payload): ValidJson<NewInvoice>,
) -> BizResult<(StatusCode, Json<Value>)> {
    let invoice = state.invoices.create(payload).await?;
    tracing::info!(id = invoice.id, comp_code = %invoice.comp_code, "invoice created");

    Ok((StatusCode::CREATED, Json(json!({ "invoice": invoice }))))
}

/// GET /invoices/{id}
///
/// Two reads: the invoice, then its company by `comp_code`.
pub async fn get_invoice(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<i32>,
) -> BizResult<Json<Value>> {
    tracing::debug!(id, "get invoice");
    let invoice = state
        .invoices
        .get(id)
        .await?
        .ok_or_else(|| BizError::invoice_not_found(id))?;

    let company = state.companies.get(&invoice.comp_code).await?;
    if company.is_none() {
        tracing::warn!(id, comp_code = %invoice.comp_code, "invoice references a missing company");
    }

    Ok(Json(json!({ "invoice": invoice.with_company(company) })))
}

/// PUT /invoices/{id}
///
/// Paying an unpaid invoice stamps `paid_date` with today's date; un-paying
/// clears it.
pub async fn update_invoice(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<i32>,
    payload: Result<ValidJson<InvoiceUpdate>, BizError>,
) -> BizResult<Json<Value>> {
    tracing::debug!(id, "update invoice");
    let current = state
        .invoices
        .get(id)
        .await?
        .ok_or_else(|| BizError::invoice_not_found(id))?;

    let ValidJson(update) = payload?;
    let changes = update.apply_to(&current, today());
    let invoice = state
        .invoices
        .update(id, changes)
        .await?
        .ok_or_else(|| BizError::invoice_not_found(id))?;
    tracing::info!(id, paid = invoice.paid, "invoice updated");

    Ok(Json(json!({ "invoice": invoice })))
}

/// DELETE /invoices/{id}
pub async fn delete_invoice(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<i32>,
) -> BizResult<Json<Value>> {
    if !state.invoices.delete(id).await? {
        return Err(BizError::invoice_not_found(id));
    }
    tracing::info!(id, "invoice deleted");

    Ok(Json(json!({ "status": "deleted" })))
}
