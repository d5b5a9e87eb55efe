//! Authoritative game store contract.
//!
//! Every mutation is one atomic step against a single game record: the
//! store applies the domain operation to a consistent snapshot and either
//! commits the whole result (with a version bump) or nothing.

use async_trait::async_trait;

use crate::domain::{Game, GameId, GameStatus, GuessOutcome, Word};
use crate::errors::domain::{DomainError, NotFoundKind};

/// A committed mutation: the operation's value plus the record before and after.
#[derive(Debug, Clone)]
pub struct Applied<T> {
    pub value: T,
    pub before: Game,
    pub after: Game,
}

#[async_trait]
pub trait GameStore: Send + Sync {
    /// New game in `waiting`, hosted by `host_id`.
    async fn create_game(&self, host_id: &str, word: Word) -> Result<Game, DomainError>;

    /// Full record, or `None` if no such game.
    async fn find_by_id(&self, game_id: GameId) -> Result<Option<Game>, DomainError>;

    /// Append a player with an empty ledger.
    async fn join_game(
        &self,
        game_id: GameId,
        player_id: &str,
        name: &str,
    ) -> Result<Applied<()>, DomainError>;

    /// Score and append a guess; finishes the game in the same step when
    /// every player is done.
    async fn submit_guess(
        &self,
        game_id: GameId,
        player_id: &str,
        guess: &str,
    ) -> Result<Applied<GuessOutcome>, DomainError>;

    /// Apply a lifecycle transition requested by `actor_id`.
    async fn update_game_status(
        &self,
        game_id: GameId,
        actor_id: &str,
        status: GameStatus,
    ) -> Result<Applied<()>, DomainError>;

    async fn count_games(&self) -> Result<usize, DomainError>;
}

/// Find game by ID or return a not-found error.
pub async fn require_game(store: &dyn GameStore, game_id: GameId) -> Result<Game, DomainError> {
    store
        .find_by_id(game_id)
        .await?
        .ok_or_else(|| game_not_found(game_id))
}

pub(crate) fn game_not_found(game_id: GameId) -> DomainError {
    DomainError::not_found(NotFoundKind::Game, format!("Game {game_id} not found"))
}
