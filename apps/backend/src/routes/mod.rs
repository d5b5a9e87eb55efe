use actix_web::{error::JsonPayloadError, web, HttpRequest};

use crate::error::AppError;
use crate::errors::ErrorCode;

pub mod games;
pub mod health;

/// Register every route. `main.rs` and the HTTP tests share this, so the
/// surface under test is the one that ships.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(web::scope("/health").configure(health::configure_routes));
    cfg.service(web::scope("/api/games").configure(games::configure_routes));
}

/// JSON body settings that render malformed bodies as problem details.
pub fn json_config(limit: usize) -> web::JsonConfig {
    web::JsonConfig::default()
        .limit(limit)
        .error_handler(json_error)
}

fn json_error(err: JsonPayloadError, _req: &HttpRequest) -> actix_web::Error {
    AppError::bad_request(ErrorCode::BadRequest, format!("Invalid JSON body: {err}")).into()
}
