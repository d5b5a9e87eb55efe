//! Domain layer: pure game logic types and helpers.

pub mod dictionary;
pub mod game_transition;
pub mod keyboard;
pub mod ledger;
pub mod letters;
pub mod lifecycle;
pub mod rules;
pub mod scoring;
pub mod snapshot;
pub mod state;

#[cfg(test)]
mod test_gens;
#[cfg(test)]
pub(crate) mod test_state_helpers;
#[cfg(test)]
mod tests_integration;
#[cfg(test)]
mod tests_ledger;
#[cfg(test)]
mod tests_lifecycle;
#[cfg(test)]
mod tests_props_lifecycle;
#[cfg(test)]
mod tests_props_scoring;
#[cfg(test)]
mod tests_scoring;

// Re-exports for ergonomics
pub use dictionary::WordList;
pub use keyboard::{aggregate, KeyboardFeedback};
pub use ledger::GuessOutcome;
pub use letters::{LetterStatus, Score, Word};
pub use rules::{MAX_ATTEMPTS, WORD_LENGTH};
pub use scoring::evaluate;
pub use snapshot::{GameView, PlayerView};
pub use state::{Game, GameId, GameStatus, Player, PlayerId};
