// Builders for domain test states.

use time::macros::datetime;
use time::{Duration, OffsetDateTime};

use crate::domain::letters::Word;
use crate::domain::lifecycle;
use crate::domain::state::{Game, GameId, Player};

pub const HOST: &str = "host";

/// Fixed instant offset by `secs` seconds.
pub fn at(secs: i64) -> OffsetDateTime {
    datetime!(2025-01-01 12:00 UTC) + Duration::seconds(secs)
}

pub fn word(raw: &str) -> Word {
    Word::parse(raw).expect("test word must be valid")
}

/// Waiting game hosted by [`HOST`] with the given players joined in order.
pub fn waiting_game(secret: &str, players: &[&str]) -> Game {
    let mut game = Game::new(GameId::new(), HOST, word(secret), at(0));
    for id in players {
        lifecycle::join(&mut game, Player::joined(*id, id.to_uppercase()))
            .expect("join during waiting");
    }
    game
}

/// Same as [`waiting_game`] but already started.
pub fn playing_game(secret: &str, players: &[&str]) -> Game {
    let mut game = waiting_game(secret, players);
    lifecycle::start(&mut game, HOST, at(1)).expect("host starts waiting game");
    game
}
