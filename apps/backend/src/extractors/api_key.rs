use actix_web::dev::Payload;
use actix_web::{web, FromRequest, HttpRequest};
use futures_util::future::{ready, Ready};
use tracing::debug;

use crate::error::AppError;
use crate::errors::ErrorCode;
use crate::state::app_state::AppState;

pub const API_KEY_HEADER: &str = "x-api-key";

/// Proof that the request presented the configured API key.
#[derive(Debug, Clone, Copy)]
pub struct ApiKey;

impl FromRequest for ApiKey {
    type Error = AppError;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _: &mut Payload) -> Self::Future {
        ready(check(req))
    }
}

fn check(req: &HttpRequest) -> Result<ApiKey, AppError> {
    let state = req
        .app_data::<web::Data<AppState>>()
        .ok_or_else(|| AppError::internal(ErrorCode::InternalError, "AppState not available"))?;

    let presented = req
        .headers()
        .get(API_KEY_HEADER)
        .and_then(|value| value.to_str().ok())
        .map(str::trim)
        .unwrap_or_default();

    if presented.is_empty() || !state.security.accepts(presented) {
        debug!(path = req.path(), "Rejected request without a valid API key");
        return Err(AppError::unauthorized());
    }
    Ok(ApiKey)
}
