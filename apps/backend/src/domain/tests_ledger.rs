use crate::domain::ledger::{check_eligibility, submit};
use crate::domain::letters::LetterStatus::{Absent, Correct};
use crate::domain::lifecycle;
use crate::domain::rules::MAX_ATTEMPTS;
use crate::domain::test_state_helpers::{at, playing_game, waiting_game};
use crate::errors::domain::ValidationKind;

fn rejection_of(result: Result<impl std::fmt::Debug, crate::errors::DomainError>) -> ValidationKind {
    match result {
        Err(err) => err
            .rejection()
            .cloned()
            .expect("expected a validation rejection"),
        Ok(v) => panic!("expected rejection, got {v:?}"),
    }
}

#[test]
fn accepted_guess_appends_pair() {
    let mut game = playing_game("PLANE", &["alice"]);
    let outcome = submit(&mut game, "alice", "plate").unwrap();

    assert_eq!(outcome.result, [Correct, Correct, Correct, Absent, Correct]);
    assert!(!outcome.solved);
    assert_eq!(outcome.attempts_used, 1);

    let alice = game.player("alice").unwrap();
    assert_eq!(alice.guesses().len(), 1);
    assert_eq!(alice.results().len(), 1);
    assert_eq!(alice.guesses()[0].as_str(), "PLATE");
    assert!(alice.ledger_consistent());
}

#[test]
fn rejects_when_not_playing() {
    let mut game = waiting_game("PLANE", &["alice"]);
    let before = game.clone();
    assert_eq!(
        rejection_of(submit(&mut game, "alice", "PLATE")),
        ValidationKind::GameNotPlaying
    );
    assert_eq!(game, before);

    let mut game = playing_game("PLANE", &["alice"]);
    lifecycle::finish(&mut game, at(5)).unwrap();
    assert_eq!(
        rejection_of(submit(&mut game, "alice", "PLATE")),
        ValidationKind::GameNotPlaying
    );
}

#[test]
fn rejects_unknown_player() {
    let mut game = playing_game("PLANE", &["alice"]);
    assert_eq!(
        rejection_of(submit(&mut game, "mallory", "PLATE")),
        ValidationKind::NotAPlayer
    );
}

#[test]
fn rejects_after_solved_without_mutation() {
    let mut game = playing_game("PLANE", &["alice"]);
    let outcome = submit(&mut game, "alice", "PLANE").unwrap();
    assert!(outcome.solved);

    let before = game.clone();
    assert_eq!(
        rejection_of(submit(&mut game, "alice", "PLATE")),
        ValidationKind::AlreadySolved
    );
    assert_eq!(game, before);
}

#[test]
fn rejects_after_max_attempts_without_mutation() {
    let mut game = playing_game("PLANE", &["alice"]);
    for _ in 0..MAX_ATTEMPTS {
        submit(&mut game, "alice", "CRANE").unwrap();
    }
    let before = game.clone();
    assert_eq!(
        rejection_of(submit(&mut game, "alice", "PLANE")),
        ValidationKind::AttemptsExhausted
    );
    assert_eq!(game, before);
    assert_eq!(game.player("alice").unwrap().attempts_left(), 0);
}

#[test]
fn eligibility_checked_before_shape() {
    // A solved player sending garbage is told they are solved.
    let mut game = playing_game("PLANE", &["alice"]);
    submit(&mut game, "alice", "PLANE").unwrap();
    assert_eq!(
        rejection_of(submit(&mut game, "alice", "??")),
        ValidationKind::AlreadySolved
    );
}

#[test]
fn rejects_malformed_guesses() {
    let mut game = playing_game("PLANE", &["alice"]);
    assert_eq!(
        rejection_of(submit(&mut game, "alice", "PLAN")),
        ValidationKind::InvalidGuessLength
    );
    assert_eq!(
        rejection_of(submit(&mut game, "alice", "PL4NE")),
        ValidationKind::NonAlphabeticGuess
    );
    assert_eq!(game.player("alice").unwrap().attempts_used(), 0);
}

#[test]
fn players_ledgers_are_independent() {
    let mut game = playing_game("PLANE", &["alice", "bob"]);
    submit(&mut game, "alice", "PLANE").unwrap();
    submit(&mut game, "bob", "CRANE").unwrap();

    assert!(game.player("alice").unwrap().solved());
    assert!(!game.player("bob").unwrap().solved());
    assert!(check_eligibility(&game, "bob").is_ok());
    assert!(check_eligibility(&game, "alice").is_err());
}

#[test]
fn solved_flag_tracks_last_result() {
    let mut game = playing_game("PLANE", &["alice"]);
    submit(&mut game, "alice", "CRANE").unwrap();
    submit(&mut game, "alice", "PLANE").unwrap();
    let alice = game.player("alice").unwrap();
    assert!(alice.solved());
    assert_eq!(alice.latest_result(), Some(&[Correct; 5]));
    assert!(alice.ledger_consistent());
}
