use actix_web::dev::Payload;
use actix_web::{FromRequest, HttpRequest};
use futures_util::future::{ready, Ready};

use crate::domain::GameId;
use crate::error::AppError;
use crate::errors::ErrorCode;

/// `{game_id}` path segment parsed as a game id.
///
/// Only the shape is checked here; existence is the handler's concern.
#[derive(Debug, Clone, Copy)]
pub struct GameIdPath(pub GameId);

impl FromRequest for GameIdPath {
    type Error = AppError;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _: &mut Payload) -> Self::Future {
        ready(parse(req.match_info().get("game_id")))
    }
}

fn parse(raw: Option<&str>) -> Result<GameIdPath, AppError> {
    let raw = raw.ok_or_else(|| {
        AppError::bad_request(ErrorCode::InvalidGameId, "Missing game_id parameter")
    })?;
    raw.parse::<GameId>().map(GameIdPath).map_err(|_| {
        AppError::bad_request(ErrorCode::InvalidGameId, format!("Invalid game id: {raw}"))
    })
}
