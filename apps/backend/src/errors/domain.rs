//! Domain-level error type used across the ledger, lifecycle, store and services.
//!
//! This error type is HTTP-agnostic. Handlers return
//! `Result<T, crate::error::AppError>` and convert from `DomainError`
//! using the provided `From<DomainError> for AppError` implementation.

use std::error::Error;
use std::fmt::{Display, Formatter, Result as FmtResult};

/// Reasons a request is rejected by a game rule.
///
/// Rejections are expected and frequent; callers treat them as values, not
/// failures. Each kind maps to exactly one public error code.
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum ValidationKind {
    /// Guess does not have exactly `WORD_LENGTH` characters.
    InvalidGuessLength,
    /// Guess contains something other than A-Z.
    NonAlphabeticGuess,
    /// Secret word rejected at creation.
    InvalidWord,
    /// Guess submitted while the game is not `playing`.
    GameNotPlaying,
    /// Acting party is not a player of this game.
    NotAPlayer,
    /// Player already solved the word.
    AlreadySolved,
    /// Player used every attempt.
    AttemptsExhausted,
    /// Host-only operation attempted by someone else.
    NotHost,
    /// Lifecycle transition not allowed from the current status.
    PhaseMismatch,
    /// Player id already present in the game.
    PlayerAlreadyJoined,
    /// Joining after the game left `waiting`.
    JoinClosed,
    Other(String),
}

impl ValidationKind {
    /// Input-shape problems, as opposed to eligibility problems.
    pub fn is_input_error(&self) -> bool {
        matches!(
            self,
            ValidationKind::InvalidGuessLength
                | ValidationKind::NonAlphabeticGuess
                | ValidationKind::InvalidWord
                | ValidationKind::Other(_)
        )
    }
}

/// Infra error kinds to distinguish operational failures
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum InfraErrorKind {
    Timeout,
    StoreUnavailable,
    DataCorruption,
    Other(String),
}

/// Domain-level not found entities
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum NotFoundKind {
    Game,
    Other(String),
}

/// Domain-level conflict kinds
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum ConflictKind {
    /// Write raced with another write on the same record.
    WriteConflict,
    Other(String),
}

/// Central domain error type
#[derive(Debug, Clone, PartialEq)]
pub enum DomainError {
    /// Input validation or game rule violation
    Validation(ValidationKind, String),
    /// Semantic conflict
    Conflict(ConflictKind, String),
    /// Missing resource in domain terms
    NotFound(NotFoundKind, String),
    /// Infrastructure/operational failures
    Infra(InfraErrorKind, String),
}

impl Display for DomainError {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        match self {
            DomainError::Validation(kind, d) => write!(f, "validation error {kind:?}: {d}"),
            DomainError::Conflict(kind, d) => write!(f, "conflict {kind:?}: {d}"),
            DomainError::NotFound(kind, d) => write!(f, "not found {kind:?}: {d}"),
            DomainError::Infra(kind, d) => write!(f, "infra {kind:?}: {d}"),
        }
    }
}

impl Error for DomainError {}

impl DomainError {
    pub fn validation(kind: ValidationKind, detail: impl Into<String>) -> Self {
        Self::Validation(kind, detail.into())
    }
    pub fn conflict(kind: ConflictKind, detail: impl Into<String>) -> Self {
        Self::Conflict(kind, detail.into())
    }
    pub fn not_found(kind: NotFoundKind, detail: impl Into<String>) -> Self {
        Self::NotFound(kind, detail.into())
    }
    pub fn infra(kind: InfraErrorKind, detail: impl Into<String>) -> Self {
        Self::Infra(kind, detail.into())
    }

    /// The rejection reason if this is a rule rejection.
    pub fn rejection(&self) -> Option<&ValidationKind> {
        match self {
            DomainError::Validation(kind, _) => Some(kind),
            _ => None,
        }
    }
}
