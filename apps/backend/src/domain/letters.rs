//! Words and per-letter scoring vocabulary.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::domain::rules::WORD_LENGTH;
use crate::errors::domain::{DomainError, ValidationKind};

/// Outcome for one position of a scored guess.
///
/// A fourth state, "unknown", exists only in derived views (see
/// [`crate::domain::keyboard`]) and is represented there as `None`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LetterStatus {
    Correct,
    Present,
    Absent,
}

impl LetterStatus {
    /// Information rank used when merging observations: correct > present > absent.
    pub const fn rank(self) -> u8 {
        match self {
            LetterStatus::Absent => 0,
            LetterStatus::Present => 1,
            LetterStatus::Correct => 2,
        }
    }
}

/// Per-position result of scoring one guess.
pub type Score = [LetterStatus; WORD_LENGTH];

/// True when every position is `Correct`.
pub fn is_solved(score: &Score) -> bool {
    score.iter().all(|s| *s == LetterStatus::Correct)
}

/// A validated five-letter, upper-case A-Z word.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Word(String);

impl Word {
    /// Parse a guess. Lower-case input is upper-cased.
    ///
    /// Length is checked before the alphabet so that `"AB1"` reports a
    /// length problem rather than a character problem.
    pub fn parse(raw: &str) -> Result<Self, DomainError> {
        let len = raw.chars().count();
        if len != WORD_LENGTH {
            return Err(DomainError::validation(
                ValidationKind::InvalidGuessLength,
                format!("Guess must be {WORD_LENGTH} letters, got {len}"),
            ));
        }
        if let Some(bad) = raw.chars().find(|c| !c.is_ascii_alphabetic()) {
            return Err(DomainError::validation(
                ValidationKind::NonAlphabeticGuess,
                format!("Guess may only contain letters A-Z, found {bad:?}"),
            ));
        }
        Ok(Self(raw.to_ascii_uppercase()))
    }

    /// Parse a host-chosen secret; any shape problem is reported as `InvalidWord`.
    pub fn parse_secret(raw: &str) -> Result<Self, DomainError> {
        Self::parse(raw.trim()).map_err(|_| {
            DomainError::validation(
                ValidationKind::InvalidWord,
                format!("Secret word must be {WORD_LENGTH} letters A-Z, got {raw:?}"),
            )
        })
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// ASCII bytes, always `WORD_LENGTH` long and in `b'A'..=b'Z'`.
    pub fn as_bytes(&self) -> &[u8] {
        self.0.as_bytes()
    }

    pub fn chars(&self) -> impl Iterator<Item = char> + '_ {
        self.0.chars()
    }
}

/// Index into an A-Z tally for an upper-case ASCII letter.
#[inline]
pub(crate) fn letter_index(letter: u8) -> usize {
    usize::from(letter.wrapping_sub(b'A'))
}

impl TryFrom<String> for Word {
    type Error = DomainError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Word::parse(&value)
    }
}

impl From<Word> for String {
    fn from(word: Word) -> Self {
        word.0
    }
}

impl fmt::Display for Word {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
