//! Refetch-on-signal reconciliation.
//!
//! Change notices carry no payload the client trusts. Each notice (or a
//! burst of them) triggers one refetch of the authoritative record, and the
//! fetched game replaces whatever the client held. Duplicated or reordered
//! notices therefore converge on the latest committed state.

use std::sync::Arc;

use parking_lot::{Mutex, RwLock};
use tokio::sync::mpsc::UnboundedReceiver;
use tokio_util::sync::CancellationToken;
use tracing::{debug, warn};
use uuid::Uuid;

use crate::domain::{Game, GameId};
use crate::realtime::{ChangeFeed, ChangeNotice};
use crate::repos::GameStore;

pub struct SyncReconciler {
    store: Arc<dyn GameStore>,
    feed: Arc<dyn ChangeFeed>,
}

impl SyncReconciler {
    pub fn new(store: Arc<dyn GameStore>, feed: Arc<dyn ChangeFeed>) -> Self {
        Self { store, feed }
    }

    /// Start following `game_id`. `on_update` receives every refetched game
    /// until the returned handle is unsubscribed or dropped.
    ///
    /// Delivery and [`Subscription::unsubscribe`] share a lock: once
    /// `unsubscribe` returns, no callback is running and none will start. The
    /// callback must therefore not unsubscribe its own handle.
    ///
    /// Must be called inside a tokio runtime.
    pub fn subscribe<F>(&self, game_id: GameId, on_update: F) -> Subscription
    where
        F: Fn(Game) + Send + Sync + 'static,
    {
        let registration = self.feed.subscribe(game_id);
        let cancel = CancellationToken::new();
        let open = Arc::new(Mutex::new(true));
        let last_known = Arc::new(RwLock::new(None));

        tokio::spawn(follow(
            game_id,
            self.store.clone(),
            registration.receiver,
            cancel.clone(),
            open.clone(),
            last_known.clone(),
            on_update,
        ));
        debug!(%game_id, token = %registration.token, "Sync subscription started");

        Subscription {
            game_id,
            token: registration.token,
            feed: self.feed.clone(),
            cancel,
            open,
            last_known,
        }
    }
}

async fn follow<F>(
    game_id: GameId,
    store: Arc<dyn GameStore>,
    mut notices: UnboundedReceiver<ChangeNotice>,
    cancel: CancellationToken,
    open: Arc<Mutex<bool>>,
    last_known: Arc<RwLock<Option<Game>>>,
    on_update: F,
) where
    F: Fn(Game) + Send + Sync + 'static,
{
    loop {
        let notice = tokio::select! {
            biased;
            _ = cancel.cancelled() => break,
            notice = notices.recv() => match notice {
                Some(notice) => notice,
                None => break,
            },
        };

        // Collapse a burst into one refetch.
        let mut newest = notice.version;
        while let Ok(queued) = notices.try_recv() {
            newest = newest.max(queued.version);
        }

        let fetched = match store.find_by_id(game_id).await {
            Ok(Some(game)) => game,
            Ok(None) => {
                warn!(%game_id, "Game vanished during refetch; keeping last known state");
                continue;
            }
            Err(err) => {
                warn!(%game_id, error = %err, "Refetch failed; keeping last known state");
                continue;
            }
        };

        {
            let open = open.lock();
            if !*open {
                break;
            }
            {
                let mut held = last_known.write();
                if let Some(current) = held.as_ref() {
                    if fetched.version() < current.version() {
                        debug!(
                            %game_id,
                            held = current.version(),
                            fetched = fetched.version(),
                            "Ignoring stale refetch"
                        );
                        continue;
                    }
                }
                *held = Some(fetched.clone());
            }
            debug!(%game_id, version = fetched.version(), signalled = newest, "Game refreshed");
            on_update(fetched);
        }
    }
    debug!(%game_id, "Sync subscription stopped");
}

/// Handle for one reconciler subscription.
pub struct Subscription {
    game_id: GameId,
    token: Uuid,
    feed: Arc<dyn ChangeFeed>,
    cancel: CancellationToken,
    /// Held for the whole of each callback.
    open: Arc<Mutex<bool>>,
    last_known: Arc<RwLock<Option<Game>>>,
}

impl Subscription {
    pub fn game_id(&self) -> GameId {
        self.game_id
    }

    /// Latest game delivered to the callback, if any.
    pub fn last_known(&self) -> Option<Game> {
        self.last_known.read().clone()
    }

    pub fn is_active(&self) -> bool {
        *self.open.lock()
    }

    /// Stop delivery. Waits for a callback already in progress, then
    /// guarantees no further calls. Safe to call repeatedly.
    pub fn unsubscribe(&self) {
        {
            let mut open = self.open.lock();
            if !*open {
                return;
            }
            *open = false;
        }
        self.cancel.cancel();
        self.feed.unsubscribe(self.game_id, self.token);
        debug!(game_id = %self.game_id, token = %self.token, "Sync subscription closed");
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        self.unsubscribe();
    }
}
