//! One player's view of one game: the refreshed record, the keyboard
//! summary derived from it, and the pending input buffer.

use std::sync::Arc;

use tokio::sync::watch;
use tracing::debug;

use crate::client::input::{InputAssembler, InputEvent, Key};
use crate::domain::{aggregate, Game, GameId, GuessOutcome, KeyboardFeedback};
use crate::errors::domain::{DomainError, ValidationKind};
use crate::services::GameService;
use crate::sync::{Subscription, SyncReconciler};

/// What a key press led to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum KeyOutcome {
    Ignored,
    Buffered,
    Erased,
    Accepted(GuessOutcome),
    /// Submitted but refused by the ledger. The buffer is already cleared.
    Rejected(ValidationKind),
}

pub struct PlayerSession {
    service: Arc<GameService>,
    input: InputAssembler,
    view: watch::Receiver<Game>,
    view_tx: Arc<watch::Sender<Game>>,
    subscription: Subscription,
}

impl PlayerSession {
    /// Load the game and follow its changes.
    pub async fn connect(
        service: Arc<GameService>,
        reconciler: &SyncReconciler,
        game_id: GameId,
        player_id: &str,
    ) -> Result<Self, DomainError> {
        let initial = service.get_game(game_id).await?;
        let (tx, view) = watch::channel(initial);
        let view_tx = Arc::new(tx);

        let sink = view_tx.clone();
        let subscription = reconciler.subscribe(game_id, move |fresh| {
            replace_if_newer(&sink, fresh);
        });

        Ok(Self {
            service,
            input: InputAssembler::new(game_id, player_id),
            view,
            view_tx,
            subscription,
        })
    }

    pub fn game_id(&self) -> GameId {
        self.input.game_id()
    }

    pub fn player_id(&self) -> &str {
        self.input.player_id()
    }

    /// Latest known game record.
    pub fn view(&self) -> Game {
        self.view.borrow().clone()
    }

    /// Receiver that wakes whenever the view is replaced.
    pub fn watch(&self) -> watch::Receiver<Game> {
        self.view.clone()
    }

    pub fn pending(&self) -> &str {
        self.input.buffer()
    }

    /// Keyboard summary for this player, recomputed from the current view.
    pub fn keyboard(&self) -> KeyboardFeedback {
        self.view
            .borrow()
            .player(self.input.player_id())
            .map(aggregate)
            .unwrap_or_default()
    }

    /// Feed one raw key name (`"a"`, `"Enter"`, `"Backspace"`).
    pub async fn press(&mut self, raw: &str) -> Result<KeyOutcome, DomainError> {
        match Key::parse(raw) {
            Some(key) => self.handle_key(key).await,
            None => Ok(KeyOutcome::Ignored),
        }
    }

    /// Store failures come back as errors; ledger refusals as `Rejected`.
    pub async fn handle_key(&mut self, key: Key) -> Result<KeyOutcome, DomainError> {
        let event = {
            let game = self.view.borrow();
            self.input.handle_key(key, &game)
        };

        let guess = match event {
            InputEvent::Ignored => return Ok(KeyOutcome::Ignored),
            InputEvent::Buffered => return Ok(KeyOutcome::Buffered),
            InputEvent::Erased => return Ok(KeyOutcome::Erased),
            InputEvent::Submit(guess) => guess,
        };

        match self
            .service
            .submit_guess(self.input.game_id(), self.input.player_id(), &guess)
            .await
        {
            Ok((outcome, game)) => {
                replace_if_newer(&self.view_tx, game);
                Ok(KeyOutcome::Accepted(outcome))
            }
            Err(DomainError::Validation(kind, detail)) => {
                debug!(player_id = self.input.player_id(), ?kind, %detail, "Guess refused");
                Ok(KeyOutcome::Rejected(kind))
            }
            Err(err) => Err(err),
        }
    }

    /// Stop following the game. Safe to call more than once.
    pub fn close(&self) {
        self.subscription.unsubscribe();
    }
}

fn replace_if_newer(tx: &watch::Sender<Game>, fresh: Game) {
    tx.send_if_modified(|held| {
        if fresh.version() >= held.version() {
            *held = fresh;
            true
        } else {
            false
        }
    });
}
