use actix_web::{web, HttpResponse};
use serde::{Deserialize, Serialize};

use crate::domain::{GameId, GameStatus, LetterStatus, Word, WORD_LENGTH};
use crate::error::AppError;
use crate::extractors::{ApiKey, GameIdPath};
use crate::state::app_state::AppState;

#[derive(Debug, Deserialize)]
struct CreateGameRequest {
    host_id: String,
    word: String,
}

#[derive(Debug, Serialize)]
struct CreateGameResponse {
    game_id: GameId,
    status: GameStatus,
    version: i32,
}

#[derive(Debug, Deserialize)]
struct JoinRequest {
    id: String,
    name: String,
}

#[derive(Debug, Deserialize)]
struct GuessRequest {
    player_id: String,
    guess: String,
}

#[derive(Debug, Serialize)]
struct GuessResponse {
    guess: Word,
    result: [LetterStatus; WORD_LENGTH],
    solved: bool,
    attempts_used: usize,
    attempts_left: usize,
    status: GameStatus,
    version: i32,
}

#[derive(Debug, Deserialize)]
struct StatusRequest {
    actor_id: String,
    status: GameStatus,
}

async fn create_game(
    _key: ApiKey,
    body: web::Json<CreateGameRequest>,
    app_state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    let body = body.into_inner();
    let game = app_state.games.create_game(&body.host_id, &body.word).await?;

    Ok(HttpResponse::Created().json(CreateGameResponse {
        game_id: game.id(),
        status: game.status(),
        version: game.version(),
    }))
}

async fn get_game(
    _key: ApiKey,
    game_id: GameIdPath,
    app_state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    let game = app_state.games.get_game(game_id.0).await?;
    Ok(HttpResponse::Ok().json(game.public_view()))
}

async fn join_game(
    _key: ApiKey,
    game_id: GameIdPath,
    body: web::Json<JoinRequest>,
    app_state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    let game = app_state
        .games
        .join_game(game_id.0, &body.id, &body.name)
        .await?;
    Ok(HttpResponse::Ok().json(game.public_view()))
}

async fn submit_guess(
    _key: ApiKey,
    game_id: GameIdPath,
    body: web::Json<GuessRequest>,
    app_state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    let (outcome, game) = app_state
        .games
        .submit_guess(game_id.0, &body.player_id, &body.guess)
        .await?;

    let attempts_left = game
        .player(&body.player_id)
        .map(|p| p.attempts_left())
        .unwrap_or_default();

    Ok(HttpResponse::Ok().json(GuessResponse {
        guess: outcome.guess,
        result: outcome.result,
        solved: outcome.solved,
        attempts_used: outcome.attempts_used,
        attempts_left,
        status: game.status(),
        version: game.version(),
    }))
}

async fn update_status(
    _key: ApiKey,
    game_id: GameIdPath,
    body: web::Json<StatusRequest>,
    app_state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    let game = app_state
        .games
        .update_game_status(game_id.0, &body.actor_id, body.status)
        .await?;
    Ok(HttpResponse::Ok().json(game.public_view()))
}

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(web::resource("").route(web::post().to(create_game)))
        .service(web::resource("/{game_id}").route(web::get().to(get_game)))
        .service(web::resource("/{game_id}/players").route(web::post().to(join_game)))
        .service(web::resource("/{game_id}/guesses").route(web::post().to(submit_guess)))
        .service(web::resource("/{game_id}/status").route(web::post().to(update_status)));
}
