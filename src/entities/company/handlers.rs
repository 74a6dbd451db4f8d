//! Company HTTP handlers
//!
//! Each handler returns `BizResult`; failures are rendered by
//! `BizError::into_response`.

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::Json;
use serde_json::{Value, json};

use super::model::{CompanyUpdate, NewCompany};
use crate::core::error::{BizError, BizResult};
use crate::core::extractors::{ApiPath, ValidJson};
use crate::core::slug::slugify;
use crate::server::host::AppState;

/// GET /companies
pub async fn list_companies(State(state): State<AppState>) -> BizResult<Json<Value>> {
    let companies = state.companies.list().await?;
    Ok(Json(json!({ "companies": companies })))
}

/// POST /companies
///
/// The code is derived from the name; a duplicate surfaces as a store error.
pub async fn create_company(
    State(state): State<AppState>,
    ValidJson(payload): ValidJson<NewCompany>,
) -> BizResult<(StatusCode, Json<Value>)> {
    let code = slugify(&payload.name);
    if code.is_empty() {
        return Err(BizError::validation(format!(
            "Cannot derive a company code from name '{}'",
            payload.name
        )));
    }

    let company = state.companies.create(payload.into_company(code)).await?;
    tracing::info!(code = %company.code, "company created");

    Ok((StatusCode::CREATED, Json(json!({ "company": company }))))
}

/// GET /companies/{code}
pub async fn get_company(
    State(state): State<AppState>,
    ApiPath(code): ApiPath<String>,
) -> BizResult<Json<Value>> {
    tracing::debug!(%code, "get company");
    let company = state
        .companies
        .get(&code)
        .await?
        .ok_or_else(|| BizError::company_not_found(&code))?;

    Ok(Json(json!({ "company": company })))
}

/// PUT /companies/{code}
pub async fn update_company(
    State(state): State<AppState>,
    ApiPath(code): ApiPath<String>,
    payload: Result<ValidJson<CompanyUpdate>, BizError>,
) -> BizResult<Json<Value>> {
    tracing::debug!(%code, "update company");
    if state.companies.get(&code).await?.is_none() {
        return Err(BizError::company_not_found(&code));
    }

    let ValidJson(update) = payload?;
    let company = state
        .companies
        .update(&code, update)
        .await?
        // deleted between the existence check and the update
        .ok_or_else(|| BizError::company_not_found(&code))?;
    tracing::info!(%code, "company updated");

    Ok(Json(json!({ "company": company })))
}

/// DELETE /companies/{code}
pub async fn delete_company(
    State(state): State<AppState>,
    ApiPath(code): ApiPath<String>,
) -> BizResult<Json<Value>> {
    if !state.companies.delete(&code).await? {
        return Err(BizError::company_not_found(&code));
    }
    tracing::info!(%code, "company deleted");

    Ok(Json(json!({ "status": "deleted" })))
}
