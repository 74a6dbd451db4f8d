//! Axum extractors whose rejections use the biztime error envelope
//!
//! axum's own `Json` and `Path` reject with plain-text bodies. These wrappers
//! turn every rejection into a [`BizError::Validation`], so a malformed body
//! or path parameter answers `{ "error": { message, status: 400 } }` like any
//! other failure.

use axum::extract::{FromRequest, FromRequestParts, Request};
use axum::Json;
use serde::de::DeserializeOwned;
use validator::Validate;

use crate::core::error::BizError;

/// Path parameters extracted with [`axum::extract::Path`]
///
/// ```rust,ignore
/// async fn get_invoice(ApiPath(id): ApiPath<i32>) -> BizResult<Json<Value>> { ... }
/// ```
#[derive(Debug, FromRequestParts)]
#[from_request(via(axum::extract::Path), rejection(BizError))]
pub struct ApiPath<T>(pub T);

/// JSON body that is deserialized and then presence-checked
///
/// Handlers that must look up a row before reading the body take
/// `Result<ValidJson<T>, BizError>` and apply `?` after the lookup.
#[derive(Debug)]
pub struct ValidJson<T>(pub T);

impl<S, T> FromRequest<S> for ValidJson<T>
where
    S: Send + Sync,
    T: DeserializeOwned + Validate,
{
    type Rejection = BizError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(payload) = Json::<T>::from_request(req, state).await?;
        payload.validate()?;
        Ok(ValidJson(payload))
    }
}
