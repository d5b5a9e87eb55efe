//! Public view of a game as served over the RPC surface.
//!
//! Callers are not authenticated per player, so the view is the same for
//! everyone: until the game is finished the secret and every guessed letter
//! are hidden, while per-letter results stay visible.

use serde::Serialize;
use time::OffsetDateTime;

use crate::domain::letters::Score;
use crate::domain::rules::WORD_LENGTH;
use crate::domain::state::{Game, GameId, GameStatus, Player};

/// Stand-in for one hidden letter.
pub const MASK: char = '?';

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PlayerView {
    pub id: String,
    pub name: String,
    /// Guessed words, or `?????` per guess while letters are hidden.
    pub guesses: Vec<String>,
    pub results: Vec<Score>,
    pub solved: bool,
    pub attempts_left: usize,
}

impl PlayerView {
    fn project(player: &Player, reveal: bool) -> Self {
        let guesses = player
            .guesses()
            .iter()
            .map(|guess| {
                if reveal {
                    guess.as_str().to_string()
                } else {
                    MASK.to_string().repeat(WORD_LENGTH)
                }
            })
            .collect();
        Self {
            id: player.id().to_string(),
            name: player.name().to_string(),
            guesses,
            results: player.results().to_vec(),
            solved: player.solved(),
            attempts_left: player.attempts_left(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GameView {
    pub id: GameId,
    pub host_id: String,
    /// Hidden until the game is finished.
    pub word: Option<String>,
    pub status: GameStatus,
    #[serde(with = "time::serde::rfc3339::option")]
    pub started_at: Option<OffsetDateTime>,
    #[serde(with = "time::serde::rfc3339::option")]
    pub ended_at: Option<OffsetDateTime>,
    pub players: Vec<PlayerView>,
    pub version: i32,
}

impl Game {
    /// View safe to hand to any caller.
    pub fn public_view(&self) -> GameView {
        let reveal = self.status() == GameStatus::Finished;
        GameView {
            id: self.id(),
            host_id: self.host_id().to_string(),
            word: reveal.then(|| self.word().as_str().to_string()),
            status: self.status(),
            started_at: self.started_at(),
            ended_at: self.ended_at(),
            players: self
                .players()
                .iter()
                .map(|p| PlayerView::project(p, reveal))
                .collect(),
            version: self.version(),
        }
    }
}
