use dashmap::DashMap;
use tokio::sync::mpsc::{self, UnboundedReceiver, UnboundedSender};
use tracing::debug;
use uuid::Uuid;

use crate::domain::GameId;

/// "Game changed" signal. Carries no state; receivers refetch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChangeNotice {
    pub game_id: GameId,
    pub version: i32,
}

/// Live subscriptions keyed by game, then by subscription token.
#[derive(Default)]
pub struct GameSubscriptionRegistry {
    sessions: DashMap<GameId, DashMap<Uuid, UnboundedSender<ChangeNotice>>>,
}

impl GameSubscriptionRegistry {
    pub fn new() -> Self {
        Self {
            sessions: DashMap::new(),
        }
    }

    pub fn register(&self, game_id: GameId) -> (Uuid, UnboundedReceiver<ChangeNotice>) {
        let token = Uuid::new_v4();
        let (tx, rx) = mpsc::unbounded_channel();
        let entry = self.sessions.entry(game_id).or_default();
        entry.insert(token, tx);
        (token, rx)
    }

    /// Idempotent; unknown tokens are ignored.
    pub fn unregister(&self, game_id: GameId, token: Uuid) {
        let now_empty = match self.sessions.get(&game_id) {
            Some(entry) => {
                entry.remove(&token);
                entry.is_empty()
            }
            None => false,
        };
        if now_empty {
            self.sessions.remove_if(&game_id, |_, subs| subs.is_empty());
        }
    }

    /// Deliver `notice` to every subscriber of its game, pruning closed
    /// receivers. Returns the number of live deliveries.
    pub fn broadcast(&self, notice: ChangeNotice) -> usize {
        let Some(entry) = self.sessions.get(&notice.game_id) else {
            return 0;
        };
        let mut delivered = 0;
        entry.retain(|token, sender| match sender.send(notice) {
            Ok(()) => {
                delivered += 1;
                true
            }
            Err(_) => {
                debug!(game_id = %notice.game_id, %token, "Pruning closed subscription");
                false
            }
        });
        delivered
    }

    pub fn subscriber_count(&self, game_id: GameId) -> usize {
        self.sessions.get(&game_id).map_or(0, |entry| entry.len())
    }
}
