//! Change-notification plumbing between the store and subscribed clients.

pub mod broker;
pub mod hub;

use tokio::sync::mpsc::UnboundedReceiver;
use uuid::Uuid;

use crate::domain::GameId;

pub use broker::RealtimeBroker;
pub use hub::{ChangeNotice, GameSubscriptionRegistry};

/// A registration for one game's change notices.
pub struct FeedSubscription {
    pub token: Uuid,
    pub receiver: UnboundedReceiver<ChangeNotice>,
}

/// Source of "game changed" signals. Delivery may duplicate, reorder or drop.
pub trait ChangeFeed: Send + Sync {
    fn subscribe(&self, game_id: GameId) -> FeedSubscription;

    /// Must be safe to call more than once for the same token.
    fn unsubscribe(&self, game_id: GameId, token: Uuid);
}
