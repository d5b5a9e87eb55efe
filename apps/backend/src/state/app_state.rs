use std::sync::Arc;

use super::security_config::SecurityConfig;
use crate::domain::WordList;
use crate::realtime::RealtimeBroker;
use crate::repos::{GameStore, InMemoryGameStore};
use crate::services::GameService;

/// Shared resources handed to every request.
#[derive(Clone)]
pub struct AppState {
    pub games: Arc<GameService>,
    pub security: SecurityConfig,
}

impl AppState {
    pub fn new(games: Arc<GameService>, security: SecurityConfig) -> Self {
        Self { games, security }
    }

    /// In-memory store with a fresh broker, optionally restricted to `words`.
    pub fn in_memory(security: SecurityConfig, words: Option<WordList>) -> Self {
        let store: Arc<dyn GameStore> = Arc::new(InMemoryGameStore::new());
        let mut service = GameService::new(store, RealtimeBroker::new());
        if let Some(words) = words {
            service = service.with_word_list(Arc::new(words));
        }
        Self::new(Arc::new(service), security)
    }

    #[cfg(test)]
    pub fn for_tests() -> Self {
        Self::in_memory(SecurityConfig::for_tests(), None)
    }
}
