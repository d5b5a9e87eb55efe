//! Error codes for the QuizWordz API.
//!
//! Add new codes here; never pass ad-hoc strings as error codes.
//! All error codes are SCREAMING_SNAKE_CASE and map 1:1 to the strings
//! that appear in HTTP responses.

use core::fmt;

/// Centralized error codes for the QuizWordz API.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    // Authentication
    /// Missing or wrong API key
    Unauthorized,

    // Request Validation
    /// Invalid game ID provided
    InvalidGameId,
    /// Guess is not exactly five letters
    InvalidGuessLength,
    /// Guess contains non-letters
    NonAlphabeticGuess,
    /// Secret word rejected
    InvalidWord,
    /// General validation error
    ValidationError,
    /// General bad request error
    BadRequest,

    // Eligibility
    /// Game is not accepting guesses
    GameNotPlaying,
    /// Acting party is not a player in this game
    NotAPlayer,
    /// Player already solved the word
    AlreadySolved,
    /// Player has no attempts left
    AttemptsExhausted,
    /// Only the host may do this
    NotHost,
    /// Lifecycle transition not allowed
    PhaseMismatch,
    /// Player already joined
    PlayerAlreadyJoined,
    /// Game no longer accepts players
    JoinClosed,

    // Resource Not Found
    /// Game not found
    GameNotFound,
    /// General not found error
    NotFound,

    // Conflicts
    /// Concurrent write on the same record
    WriteConflict,
    /// Generic conflict (fallback for unmatched conflicts)
    Conflict,

    // System Errors
    /// Backing store unavailable
    StoreUnavailable,
    /// Backing store timed out
    StoreTimeout,
    /// Internal server error
    InternalError,
    /// Configuration error
    ConfigError,
    /// Data corruption detected
    DataCorruption,
}

impl ErrorCode {
    /// Returns the canonical SCREAMING_SNAKE_CASE string for this error code.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Unauthorized => "UNAUTHORIZED",

            Self::InvalidGameId => "INVALID_GAME_ID",
            Self::InvalidGuessLength => "INVALID_GUESS_LENGTH",
            Self::NonAlphabeticGuess => "NON_ALPHABETIC_GUESS",
            Self::InvalidWord => "INVALID_WORD",
            Self::ValidationError => "VALIDATION_ERROR",
            Self::BadRequest => "BAD_REQUEST",

            Self::GameNotPlaying => "GAME_NOT_PLAYING",
            Self::NotAPlayer => "NOT_A_PLAYER",
            Self::AlreadySolved => "ALREADY_SOLVED",
            Self::AttemptsExhausted => "ATTEMPTS_EXHAUSTED",
            Self::NotHost => "NOT_HOST",
            Self::PhaseMismatch => "PHASE_MISMATCH",
            Self::PlayerAlreadyJoined => "PLAYER_ALREADY_JOINED",
            Self::JoinClosed => "JOIN_CLOSED",

            Self::GameNotFound => "GAME_NOT_FOUND",
            Self::NotFound => "NOT_FOUND",

            Self::WriteConflict => "WRITE_CONFLICT",
            Self::Conflict => "CONFLICT",

            Self::StoreUnavailable => "STORE_UNAVAILABLE",
            Self::StoreTimeout => "STORE_TIMEOUT",
            Self::InternalError => "INTERNAL_ERROR",
            Self::ConfigError => "CONFIG_ERROR",
            Self::DataCorruption => "DATA_CORRUPTION",
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
