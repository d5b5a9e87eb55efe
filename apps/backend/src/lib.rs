#![deny(clippy::wildcard_imports)]
#![cfg_attr(test, allow(clippy::wildcard_imports))]

pub mod client;
pub mod config;
pub mod domain;
pub mod error;
pub mod errors;
pub mod extractors;
pub mod middleware;
pub mod realtime;
pub mod repos;
pub mod routes;
pub mod services;
pub mod state;
pub mod sync;
pub mod trace_ctx;


pub use client::{InputAssembler, Key, PlayerSession};
pub use config::AppConfig;
pub use domain::{evaluate, Game, GameId, GameStatus, LetterStatus, Player, Word};
pub use error::AppError;
pub use errors::{DomainError, ErrorCode};
pub use middleware::cors::cors_middleware;
pub use middleware::request_trace::RequestTrace;
pub use middleware::trace_span::TraceSpan;
pub use realtime::{ChangeFeed, RealtimeBroker};
pub use repos::{GameStore, InMemoryGameStore};
pub use services::GameService;
pub use state::{AppState, SecurityConfig};
pub use sync::{Subscription, SyncReconciler};

#[cfg(test)]
#[ctor::ctor]
fn init_test_logging() {
    test_bootstrap::logging::init();
}
