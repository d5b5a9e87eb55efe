use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use time::OffsetDateTime;
use uuid::Uuid;

use crate::domain::letters::{is_solved, Score, Word};
use crate::domain::rules::{attempts_left, MAX_ATTEMPTS};

/// Opaque player identity supplied by the client (the host uses the same space).
pub type PlayerId = String;

/// Opaque game identity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct GameId(pub Uuid);

impl GameId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for GameId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for GameId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl FromStr for GameId {
    type Err = uuid::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Uuid::parse_str(s).map(GameId)
    }
}

/// Lifecycle of a game record: `Waiting -> Playing -> Finished`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GameStatus {
    /// Created; players may join.
    Waiting,
    /// Started by the host; guesses accepted.
    Playing,
    /// Terminal.
    Finished,
}

impl GameStatus {
    /// Whether `self -> next` is a legal single step.
    pub const fn can_transition_to(self, next: GameStatus) -> bool {
        matches!(
            (self, next),
            (GameStatus::Waiting, GameStatus::Playing) | (GameStatus::Playing, GameStatus::Finished)
        )
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            GameStatus::Waiting => "waiting",
            GameStatus::Playing => "playing",
            GameStatus::Finished => "finished",
        }
    }
}

impl fmt::Display for GameStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A participant and their guess ledger.
///
/// `guesses` and `results` always have equal length; `solved` mirrors
/// whether the last result is all-correct. Only [`crate::domain::ledger`]
/// appends to them.
///
/// Records only serialize; there is no way to rebuild one from the wire
/// that skips the ledger:
///
/// ```compile_fail
/// let _: quizwordz::domain::Player = serde_json::from_str("{}").unwrap();
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Player {
    pub(crate) id: PlayerId,
    pub(crate) name: String,
    pub(crate) guesses: Vec<Word>,
    pub(crate) results: Vec<Score>,
    pub(crate) solved: bool,
}

impl Player {
    /// A freshly joined player with an empty ledger.
    pub fn joined(id: impl Into<PlayerId>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            guesses: Vec::with_capacity(MAX_ATTEMPTS),
            results: Vec::with_capacity(MAX_ATTEMPTS),
            solved: false,
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn guesses(&self) -> &[Word] {
        &self.guesses
    }

    pub fn results(&self) -> &[Score] {
        &self.results
    }

    pub fn solved(&self) -> bool {
        self.solved
    }

    pub fn attempts_used(&self) -> usize {
        self.guesses.len()
    }

    pub fn attempts_left(&self) -> usize {
        attempts_left(self.guesses.len())
    }

    pub fn latest_result(&self) -> Option<&Score> {
        self.results.last()
    }

    /// Solved, or out of attempts.
    pub fn is_done(&self) -> bool {
        self.solved || self.attempts_left() == 0
    }

    /// Checks the ledger invariants; used by tests and by the store on load.
    pub fn ledger_consistent(&self) -> bool {
        self.guesses.len() == self.results.len()
            && self.guesses.len() <= MAX_ATTEMPTS
            && self.solved == self.results.last().is_some_and(is_solved)
    }
}

/// The shared game record.
///
/// ```compile_fail
/// let _: quizwordz::domain::Game = serde_json::from_str("{}").unwrap();
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Game {
    pub(crate) id: GameId,
    pub(crate) host_id: PlayerId,
    pub(crate) word: Word,
    pub(crate) status: GameStatus,
    #[serde(with = "time::serde::rfc3339")]
    pub(crate) created_at: OffsetDateTime,
    #[serde(with = "time::serde::rfc3339::option")]
    pub(crate) started_at: Option<OffsetDateTime>,
    #[serde(with = "time::serde::rfc3339::option")]
    pub(crate) ended_at: Option<OffsetDateTime>,
    /// Join order.
    pub(crate) players: Vec<Player>,
    /// Bumped on every committed mutation.
    pub(crate) version: i32,
}

impl Game {
    /// A new game in `Waiting` with no players.
    pub fn new(id: GameId, host_id: impl Into<PlayerId>, word: Word, now: OffsetDateTime) -> Self {
        Self {
            id,
            host_id: host_id.into(),
            word,
            status: GameStatus::Waiting,
            created_at: now,
            started_at: None,
            ended_at: None,
            players: Vec::new(),
            version: 1,
        }
    }

    pub fn id(&self) -> GameId {
        self.id
    }

    pub fn host_id(&self) -> &str {
        &self.host_id
    }

    pub fn word(&self) -> &Word {
        &self.word
    }

    pub fn status(&self) -> GameStatus {
        self.status
    }

    pub fn created_at(&self) -> OffsetDateTime {
        self.created_at
    }

    pub fn started_at(&self) -> Option<OffsetDateTime> {
        self.started_at
    }

    pub fn ended_at(&self) -> Option<OffsetDateTime> {
        self.ended_at
    }

    pub fn players(&self) -> &[Player] {
        &self.players
    }

    pub fn version(&self) -> i32 {
        self.version
    }

    pub fn is_host(&self, actor_id: &str) -> bool {
        self.host_id == actor_id
    }

    pub fn player(&self, player_id: &str) -> Option<&Player> {
        self.players.iter().find(|p| p.id == player_id)
    }

    pub(crate) fn player_mut(&mut self, player_id: &str) -> Option<&mut Player> {
        self.players.iter_mut().find(|p| p.id == player_id)
    }

    /// Every player is solved or out of attempts. False with no players.
    pub fn all_players_done(&self) -> bool {
        !self.players.is_empty() && self.players.iter().all(Player::is_done)
    }

    pub(crate) fn bump_version(&mut self) {
        self.version += 1;
    }
}
