//! Best-known status per letter, derived from a player's full history.
//!
//! Always recomputed from the ledger, never maintained incrementally.

use std::collections::BTreeMap;

use serde::Serialize;

use crate::domain::letters::LetterStatus;
use crate::domain::state::Player;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct KeyboardFeedback {
    letters: BTreeMap<char, LetterStatus>,
}

impl KeyboardFeedback {
    /// `None` means nothing is known about `letter` yet.
    pub fn status_of(&self, letter: char) -> Option<LetterStatus> {
        self.letters.get(&letter.to_ascii_uppercase()).copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = (char, LetterStatus)> + '_ {
        self.letters.iter().map(|(c, s)| (*c, *s))
    }

    pub fn len(&self) -> usize {
        self.letters.len()
    }

    pub fn is_empty(&self) -> bool {
        self.letters.is_empty()
    }

    fn observe(&mut self, letter: char, status: LetterStatus) {
        self.letters
            .entry(letter)
            .and_modify(|known| {
                if status.rank() > known.rank() {
                    *known = status;
                }
            })
            .or_insert(status);
    }
}

/// Merge every scored letter with priority correct > present > absent.
pub fn aggregate(player: &Player) -> KeyboardFeedback {
    let mut feedback = KeyboardFeedback::default();
    for (guess, result) in player.guesses().iter().zip(player.results()) {
        for (letter, status) in guess.chars().zip(result.iter()) {
            feedback.observe(letter, *status);
        }
    }
    feedback
}
