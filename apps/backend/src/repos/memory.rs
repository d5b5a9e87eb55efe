//! In-process implementation of [`GameStore`].

use async_trait::async_trait;
use dashmap::DashMap;
use time::OffsetDateTime;
use tracing::{debug, info};

use crate::domain::{ledger, lifecycle};
use crate::domain::{Game, GameId, GameStatus, GuessOutcome, Player, Word};
use crate::errors::domain::DomainError;
use crate::repos::games::{game_not_found, Applied, GameStore};

/// Games held in a concurrent map. Each mutation runs under the entry's
/// write guard on a draft copy; the draft replaces the record only when the
/// whole operation succeeds.
#[derive(Default)]
pub struct InMemoryGameStore {
    games: DashMap<GameId, Game>,
}

impl InMemoryGameStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn apply<T>(
        &self,
        game_id: GameId,
        op: impl FnOnce(&mut Game, OffsetDateTime) -> Result<T, DomainError>,
    ) -> Result<Applied<T>, DomainError> {
        let mut entry = self
            .games
            .get_mut(&game_id)
            .ok_or_else(|| game_not_found(game_id))?;

        let before: Game = (*entry).clone();
        let mut draft = before.clone();
        let value = op(&mut draft, OffsetDateTime::now_utc())?;
        draft.bump_version();
        *entry = draft.clone();

        Ok(Applied {
            value,
            before,
            after: draft,
        })
    }
}

#[async_trait]
impl GameStore for InMemoryGameStore {
    async fn create_game(&self, host_id: &str, word: Word) -> Result<Game, DomainError> {
        let game = Game::new(GameId::new(), host_id, word, OffsetDateTime::now_utc());
        self.games.insert(game.id(), game.clone());
        info!(game_id = %game.id(), host_id, "Game created");
        Ok(game)
    }

    async fn find_by_id(&self, game_id: GameId) -> Result<Option<Game>, DomainError> {
        Ok(self.games.get(&game_id).map(|entry| entry.value().clone()))
    }

    async fn join_game(
        &self,
        game_id: GameId,
        player_id: &str,
        name: &str,
    ) -> Result<Applied<()>, DomainError> {
        let applied = self.apply(game_id, |game, _now| {
            lifecycle::join(game, Player::joined(player_id, name))
        })?;
        debug!(%game_id, player_id, "Player joined");
        Ok(applied)
    }

    async fn submit_guess(
        &self,
        game_id: GameId,
        player_id: &str,
        guess: &str,
    ) -> Result<Applied<GuessOutcome>, DomainError> {
        self.apply(game_id, |game, now| {
            let outcome = ledger::submit(game, player_id, guess)?;
            if lifecycle::should_auto_finish(game) {
                lifecycle::finish(game, now)?;
                debug!(%game_id, "Every player done; game finished");
            }
            Ok(outcome)
        })
    }

    async fn update_game_status(
        &self,
        game_id: GameId,
        actor_id: &str,
        status: GameStatus,
    ) -> Result<Applied<()>, DomainError> {
        self.apply(game_id, |game, now| {
            lifecycle::transition(game, actor_id, status, now)
        })
    }

    async fn count_games(&self) -> Result<usize, DomainError> {
        Ok(self.games.len())
    }
}
