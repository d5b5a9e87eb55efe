use std::sync::Arc;

use tracing::debug;
use uuid::Uuid;

use crate::domain::GameId;
use crate::realtime::hub::{ChangeNotice, GameSubscriptionRegistry};
use crate::realtime::{ChangeFeed, FeedSubscription};

/// In-process fan-out of change notices to every subscriber of a game.
pub struct RealtimeBroker {
    registry: Arc<GameSubscriptionRegistry>,
}

impl RealtimeBroker {
    pub fn new() -> Arc<Self> {
        Arc::new(Self {
            registry: Arc::new(GameSubscriptionRegistry::new()),
        })
    }

    pub fn registry(&self) -> Arc<GameSubscriptionRegistry> {
        self.registry.clone()
    }

    /// Publish a "game state available" notice for `game_id` at `version`.
    pub fn publish_game_state(&self, game_id: GameId, version: i32) -> usize {
        let delivered = self
            .registry
            .broadcast(ChangeNotice { game_id, version });
        debug!(%game_id, version, delivered, "Published game change");
        delivered
    }
}

impl ChangeFeed for RealtimeBroker {
    fn subscribe(&self, game_id: GameId) -> FeedSubscription {
        let (token, receiver) = self.registry.register(game_id);
        FeedSubscription { token, receiver }
    }

    fn unsubscribe(&self, game_id: GameId, token: Uuid) {
        self.registry.unregister(game_id, token);
    }
}
