//! Per-player guess ledger.
//!
//! All checks run before any mutation; a rejected submission leaves the
//! game untouched.

use serde::Serialize;
use tracing::debug;

use crate::domain::letters::{is_solved, Score, Word};
use crate::domain::rules::MAX_ATTEMPTS;
use crate::domain::scoring::evaluate;
use crate::domain::state::{Game, GameStatus, Player};
use crate::errors::domain::{DomainError, ValidationKind};

/// Result of an accepted guess.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GuessOutcome {
    pub guess: Word,
    pub result: Score,
    pub solved: bool,
    pub attempts_used: usize,
}

/// Whether `player_id` may guess right now.
///
/// Checked in order: game is playing, the actor is a player, not solved,
/// attempts remain. The input assembler runs the same check so that the
/// client and the store never disagree on eligibility.
pub fn check_eligibility<'a>(game: &'a Game, player_id: &str) -> Result<&'a Player, DomainError> {
    if game.status() != GameStatus::Playing {
        return Err(DomainError::validation(
            ValidationKind::GameNotPlaying,
            format!("Game is {}, guesses are not accepted", game.status()),
        ));
    }

    let player = game.player(player_id).ok_or_else(|| {
        DomainError::validation(
            ValidationKind::NotAPlayer,
            format!("{player_id} is not a player in this game"),
        )
    })?;

    if player.solved() {
        return Err(DomainError::validation(
            ValidationKind::AlreadySolved,
            "Word already solved",
        ));
    }

    if player.attempts_used() >= MAX_ATTEMPTS {
        return Err(DomainError::validation(
            ValidationKind::AttemptsExhausted,
            format!("All {MAX_ATTEMPTS} attempts used"),
        ));
    }

    Ok(player)
}

/// Score `raw_guess` and append it to the player's ledger.
pub fn submit(game: &mut Game, player_id: &str, raw_guess: &str) -> Result<GuessOutcome, DomainError> {
    check_eligibility(game, player_id)?;
    let guess = Word::parse(raw_guess)?;

    let result = evaluate(&guess, game.word());
    let solved = is_solved(&result);

    let player = game.player_mut(player_id).ok_or_else(|| {
        DomainError::validation(
            ValidationKind::NotAPlayer,
            format!("{player_id} is not a player in this game"),
        )
    })?;
    player.guesses.push(guess.clone());
    player.results.push(result);
    player.solved = solved;

    let attempts_used = player.attempts_used();
    debug!(game_id = %game.id(), player_id, attempts_used, solved, "Guess recorded");

    Ok(GuessOutcome {
        guess,
        result,
        solved,
        attempts_used,
    })
}
