//! Orchestration of the game operations exposed to clients.
//!
//! The store applies each operation atomically; this service validates
//! inputs that need configuration (the word list), announces committed
//! changes on the realtime broker, and logs the derived transitions.

use std::sync::Arc;

use tracing::{debug, info, warn};

use crate::domain::game_transition::{derive_game_transitions, GameTransition};
use crate::domain::{Game, GameId, GameStatus, GuessOutcome, Word, WordList};
use crate::errors::domain::{DomainError, ValidationKind};
use crate::realtime::RealtimeBroker;
use crate::repos::{require_game, Applied, GameStore};

pub struct GameService {
    store: Arc<dyn GameStore>,
    broker: Arc<RealtimeBroker>,
    words: Option<Arc<WordList>>,
}

impl GameService {
    pub fn new(store: Arc<dyn GameStore>, broker: Arc<RealtimeBroker>) -> Self {
        Self {
            store,
            broker,
            words: None,
        }
    }

    /// Restrict secrets to `words`.
    pub fn with_word_list(mut self, words: Arc<WordList>) -> Self {
        self.words = Some(words);
        self
    }

    pub fn store(&self) -> Arc<dyn GameStore> {
        self.store.clone()
    }

    pub fn broker(&self) -> Arc<RealtimeBroker> {
        self.broker.clone()
    }

    pub async fn create_game(&self, host_id: &str, secret: &str) -> Result<Game, DomainError> {
        let word = Word::parse_secret(secret)?;
        if let Some(words) = &self.words {
            if !words.contains(&word) {
                debug!(host_id, "Secret word not in word list");
                return Err(DomainError::validation(
                    ValidationKind::InvalidWord,
                    "Secret word is not in the word list",
                ));
            }
        }
        let game = self.store.create_game(host_id, word).await?;
        self.broker.publish_game_state(game.id(), game.version());
        Ok(game)
    }

    pub async fn get_game(&self, game_id: GameId) -> Result<Game, DomainError> {
        require_game(self.store.as_ref(), game_id).await
    }

    pub async fn join_game(
        &self,
        game_id: GameId,
        player_id: &str,
        name: &str,
    ) -> Result<Game, DomainError> {
        let applied = self
            .store
            .join_game(game_id, player_id, name)
            .await
            .inspect_err(|err| log_rejection(game_id, player_id, err))?;
        Ok(self.announce(applied).1)
    }

    pub async fn submit_guess(
        &self,
        game_id: GameId,
        player_id: &str,
        guess: &str,
    ) -> Result<(GuessOutcome, Game), DomainError> {
        let applied = self
            .store
            .submit_guess(game_id, player_id, guess)
            .await
            .inspect_err(|err| log_rejection(game_id, player_id, err))?;
        Ok(self.announce(applied))
    }

    pub async fn update_game_status(
        &self,
        game_id: GameId,
        actor_id: &str,
        status: GameStatus,
    ) -> Result<Game, DomainError> {
        let applied = self
            .store
            .update_game_status(game_id, actor_id, status)
            .await
            .inspect_err(|err| log_rejection(game_id, actor_id, err))?;
        Ok(self.announce(applied).1)
    }

    pub async fn start_game(&self, game_id: GameId, actor_id: &str) -> Result<Game, DomainError> {
        self.update_game_status(game_id, actor_id, GameStatus::Playing)
            .await
    }

    pub async fn finish_game(&self, game_id: GameId, actor_id: &str) -> Result<Game, DomainError> {
        self.update_game_status(game_id, actor_id, GameStatus::Finished)
            .await
    }

    pub async fn count_games(&self) -> Result<usize, DomainError> {
        self.store.count_games().await
    }

    /// Log what changed and signal subscribers.
    fn announce<T>(&self, applied: Applied<T>) -> (T, Game) {
        let Applied {
            value,
            before,
            after,
        } = applied;
        let game_id = after.id();
        for transition in derive_game_transitions(&before, &after) {
            match transition {
                GameTransition::GameStarted => info!(%game_id, "Game started"),
                GameTransition::GameEnded => info!(%game_id, "Game finished"),
                GameTransition::PlayerJoined { player_id } => {
                    info!(%game_id, player_id = %player_id, "Player joined")
                }
                GameTransition::GuessRecorded { player_id, attempt } => {
                    debug!(%game_id, player_id = %player_id, attempt, "Guess recorded")
                }
                GameTransition::PlayerSolved { player_id } => {
                    info!(%game_id, player_id = %player_id, "Player solved the word")
                }
            }
        }
        self.broker.publish_game_state(game_id, after.version());
        (value, after)
    }
}

fn log_rejection(game_id: GameId, actor_id: &str, err: &DomainError) {
    match err {
        DomainError::Validation(kind, _) => debug!(%game_id, actor_id, ?kind, "Request rejected"),
        DomainError::NotFound(..) => debug!(%game_id, actor_id, "Game not found"),
        other => warn!(%game_id, actor_id, error = %other, "Store operation failed"),
    }
}
