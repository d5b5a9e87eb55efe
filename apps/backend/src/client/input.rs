//! Keystroke buffering for one player in one game.
//!
//! The buffer is local and transient. Refreshing the game view never
//! touches it; only a submit clears it.

use crate::domain::ledger::check_eligibility;
use crate::domain::{Game, GameId, PlayerId, WORD_LENGTH};

/// Physical key signals the assembler understands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    Letter(char),
    Enter,
    Backspace,
}

impl Key {
    /// `None` for anything outside `A`-`Z`, `Enter` and `Backspace`.
    pub fn parse(raw: &str) -> Option<Self> {
        match raw {
            "Enter" => Some(Key::Enter),
            "Backspace" => Some(Key::Backspace),
            _ => {
                let mut chars = raw.chars();
                match (chars.next(), chars.next()) {
                    (Some(c), None) if c.is_ascii_alphabetic() => {
                        Some(Key::Letter(c.to_ascii_uppercase()))
                    }
                    _ => None,
                }
            }
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputEvent {
    /// Nothing changed.
    Ignored,
    Buffered,
    Erased,
    /// A full word left the buffer and should go to the ledger.
    Submit(String),
}

#[derive(Debug, Clone)]
pub struct InputAssembler {
    game_id: GameId,
    player_id: PlayerId,
    buffer: String,
}

impl InputAssembler {
    pub fn new(game_id: GameId, player_id: impl Into<PlayerId>) -> Self {
        Self {
            game_id,
            player_id: player_id.into(),
            buffer: String::with_capacity(WORD_LENGTH),
        }
    }

    pub fn game_id(&self) -> GameId {
        self.game_id
    }

    pub fn player_id(&self) -> &str {
        &self.player_id
    }

    pub fn buffer(&self) -> &str {
        &self.buffer
    }

    /// Apply one key against the current view of the game.
    ///
    /// Every key is ignored while the player may not guess, using the same
    /// eligibility check the ledger applies on submission.
    pub fn handle_key(&mut self, key: Key, game: &Game) -> InputEvent {
        if game.id() != self.game_id || check_eligibility(game, &self.player_id).is_err() {
            return InputEvent::Ignored;
        }

        match key {
            Key::Letter(c) if c.is_ascii_alphabetic() && self.buffer.len() < WORD_LENGTH => {
                self.buffer.push(c.to_ascii_uppercase());
                InputEvent::Buffered
            }
            Key::Letter(_) => InputEvent::Ignored,
            Key::Backspace => match self.buffer.pop() {
                Some(_) => InputEvent::Erased,
                None => InputEvent::Ignored,
            },
            Key::Enter if self.buffer.len() == WORD_LENGTH => {
                InputEvent::Submit(std::mem::take(&mut self.buffer))
            }
            Key::Enter => InputEvent::Ignored,
        }
    }
}
