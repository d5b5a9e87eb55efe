// End-to-end domain scenario: create, join, start, guess until solved.

use crate::domain::keyboard::aggregate;
use crate::domain::ledger::submit;
use crate::domain::letters::LetterStatus::{Absent, Correct};
use crate::domain::lifecycle;
use crate::domain::state::{Game, GameId, GameStatus, Player};
use crate::domain::test_state_helpers::{at, word, HOST};
use crate::errors::domain::ValidationKind;

#[test]
fn plane_scenario() {
    let mut game = Game::new(GameId::new(), HOST, word("plane"), at(0));
    assert_eq!(game.word().as_str(), "PLANE");
    assert_eq!(game.status(), GameStatus::Waiting);

    lifecycle::join(&mut game, Player::joined("a", "Player A")).unwrap();
    let a = game.player("a").unwrap();
    assert!(a.guesses().is_empty() && a.results().is_empty() && !a.solved());

    lifecycle::start(&mut game, HOST, at(1)).unwrap();
    assert_eq!(game.status(), GameStatus::Playing);
    assert_eq!(game.started_at(), Some(at(1)));

    let first = submit(&mut game, "a", "PLATE").unwrap();
    assert_eq!(first.result, [Correct, Correct, Correct, Absent, Correct]);
    assert!(!first.solved);

    let second = submit(&mut game, "a", "PLANE").unwrap();
    assert_eq!(second.result, [Correct; 5]);
    assert!(second.solved);
    assert!(game.player("a").unwrap().solved());

    let err = submit(&mut game, "a", "CRANE").unwrap_err();
    assert_eq!(err.rejection(), Some(&ValidationKind::AlreadySolved));

    assert!(lifecycle::should_auto_finish(&game));
    lifecycle::finish(&mut game, at(2)).unwrap();
    assert_eq!(game.ended_at(), Some(at(2)));

    let keys = aggregate(game.player("a").unwrap());
    assert_eq!(keys.status_of('T'), Some(Absent));
    assert_eq!(keys.status_of('N'), Some(Correct));
}
