//! Game lifecycle: `waiting -> playing -> finished`, never backwards.
//!
//! Guess eligibility is not checked here; see [`crate::domain::ledger`].

use time::OffsetDateTime;

use crate::domain::state::{Game, GameStatus, Player};
use crate::errors::domain::{DomainError, ValidationKind};

fn require_host(game: &Game, actor_id: &str) -> Result<(), DomainError> {
    if !game.is_host(actor_id) {
        return Err(DomainError::validation(
            ValidationKind::NotHost,
            "Only the host may change the game status",
        ));
    }
    Ok(())
}

fn require_status(game: &Game, expected: GameStatus, action: &str) -> Result<(), DomainError> {
    if game.status() != expected {
        return Err(DomainError::validation(
            ValidationKind::PhaseMismatch,
            format!("Cannot {action} a game that is {}", game.status()),
        ));
    }
    Ok(())
}

/// Append a player in join order. Only while `waiting`, once per id.
pub fn join(game: &mut Game, player: Player) -> Result<(), DomainError> {
    if game.status() != GameStatus::Waiting {
        return Err(DomainError::validation(
            ValidationKind::JoinClosed,
            format!("Game is {}, joining is closed", game.status()),
        ));
    }
    if game.player(player.id()).is_some() {
        return Err(DomainError::validation(
            ValidationKind::PlayerAlreadyJoined,
            format!("{} already joined", player.id()),
        ));
    }
    game.players.push(player);
    Ok(())
}

/// Host starts the game.
pub fn start(game: &mut Game, actor_id: &str, now: OffsetDateTime) -> Result<(), DomainError> {
    require_host(game, actor_id)?;
    require_status(game, GameStatus::Waiting, "start")?;
    game.status = GameStatus::Playing;
    game.started_at = Some(now);
    Ok(())
}

/// End a playing game. Used both for auto-finish and host action.
pub fn finish(game: &mut Game, now: OffsetDateTime) -> Result<(), DomainError> {
    require_status(game, GameStatus::Playing, "finish")?;
    game.status = GameStatus::Finished;
    game.ended_at = Some(now);
    Ok(())
}

/// Host ends the game early (e.g. a time limit ran out).
pub fn finish_by_host(game: &mut Game, actor_id: &str, now: OffsetDateTime) -> Result<(), DomainError> {
    require_host(game, actor_id)?;
    finish(game, now)
}

/// Apply a requested status on behalf of `actor_id`.
pub fn transition(
    game: &mut Game,
    actor_id: &str,
    target: GameStatus,
    now: OffsetDateTime,
) -> Result<(), DomainError> {
    match target {
        GameStatus::Playing => start(game, actor_id, now),
        GameStatus::Finished => finish_by_host(game, actor_id, now),
        GameStatus::Waiting => {
            require_host(game, actor_id)?;
            Err(DomainError::validation(
                ValidationKind::PhaseMismatch,
                format!("Cannot move a game that is {} to waiting", game.status()),
            ))
        }
    }
}

/// Whether a playing game should end now: every player solved or exhausted.
///
/// Must be evaluated on one consistent snapshot of all players.
pub fn should_auto_finish(game: &Game) -> bool {
    game.status() == GameStatus::Playing && game.all_players_done()
}
