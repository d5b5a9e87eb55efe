use crate::domain::state::{Game, GameStatus, PlayerId};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GameTransition {
    /// Edge-triggered: waiting -> playing
    GameStarted,

    /// Edge-triggered: playing -> finished
    GameEnded,

    /// Explicit: a player joined
    PlayerJoined { player_id: PlayerId },

    /// Explicit: a guess was appended to a player's ledger
    GuessRecorded { player_id: PlayerId, attempt: usize },

    /// Edge-triggered: a player's ledger became solved
    PlayerSolved { player_id: PlayerId },
}

/// Derive domain transitions from before/after snapshots of the same game.
pub fn derive_game_transitions(before: &Game, after: &Game) -> Vec<GameTransition> {
    let mut transitions = Vec::new();

    // 1. Roster and ledger changes, in join order
    for player in after.players() {
        match before.player(player.id()) {
            None => transitions.push(GameTransition::PlayerJoined {
                player_id: player.id().to_string(),
            }),
            Some(prev) => {
                if player.attempts_used() > prev.attempts_used() {
                    transitions.push(GameTransition::GuessRecorded {
                        player_id: player.id().to_string(),
                        attempt: player.attempts_used(),
                    });
                }
                if player.solved() && !prev.solved() {
                    transitions.push(GameTransition::PlayerSolved {
                        player_id: player.id().to_string(),
                    });
                }
            }
        }
    }

    // 2. Game start
    if before.status() == GameStatus::Waiting && after.status() == GameStatus::Playing {
        transitions.push(GameTransition::GameStarted);
    }

    // 3. Game end
    if before.status() != GameStatus::Finished && after.status() == GameStatus::Finished {
        transitions.push(GameTransition::GameEnded);
    }

    transitions
}
