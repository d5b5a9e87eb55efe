use crate::domain::ledger::submit;
use crate::domain::lifecycle::{
    finish, finish_by_host, join, should_auto_finish, start, transition,
};
use crate::domain::rules::MAX_ATTEMPTS;
use crate::domain::state::{GameStatus, Player};
use crate::domain::test_state_helpers::{at, playing_game, waiting_game, HOST};
use crate::errors::domain::ValidationKind;

#[test]
fn start_sets_status_and_timestamp_once() {
    let mut game = waiting_game("PLANE", &["alice"]);
    start(&mut game, HOST, at(10)).unwrap();
    assert_eq!(game.status(), GameStatus::Playing);
    assert_eq!(game.started_at(), Some(at(10)));

    let err = start(&mut game, HOST, at(20)).unwrap_err();
    assert_eq!(err.rejection(), Some(&ValidationKind::PhaseMismatch));
    assert_eq!(game.started_at(), Some(at(10)));
}

#[test]
fn only_host_starts() {
    let mut game = waiting_game("PLANE", &["alice"]);
    let err = start(&mut game, "alice", at(10)).unwrap_err();
    assert_eq!(err.rejection(), Some(&ValidationKind::NotHost));
    assert_eq!(game.status(), GameStatus::Waiting);
    assert_eq!(game.started_at(), None);
}

#[test]
fn finish_only_from_playing() {
    let mut game = waiting_game("PLANE", &[]);
    let err = finish(&mut game, at(10)).unwrap_err();
    assert_eq!(err.rejection(), Some(&ValidationKind::PhaseMismatch));

    let mut game = playing_game("PLANE", &["alice"]);
    finish(&mut game, at(30)).unwrap();
    assert_eq!(game.status(), GameStatus::Finished);
    assert_eq!(game.ended_at(), Some(at(30)));

    let err = finish(&mut game, at(40)).unwrap_err();
    assert_eq!(err.rejection(), Some(&ValidationKind::PhaseMismatch));
    assert_eq!(game.ended_at(), Some(at(30)));
}

#[test]
fn host_finish_requires_host() {
    let mut game = playing_game("PLANE", &["alice"]);
    let err = finish_by_host(&mut game, "alice", at(30)).unwrap_err();
    assert_eq!(err.rejection(), Some(&ValidationKind::NotHost));
    finish_by_host(&mut game, HOST, at(30)).unwrap();
    assert_eq!(game.status(), GameStatus::Finished);
}

#[test]
fn no_transition_back_to_waiting() {
    let mut game = playing_game("PLANE", &["alice"]);
    let err = transition(&mut game, HOST, GameStatus::Waiting, at(5)).unwrap_err();
    assert_eq!(err.rejection(), Some(&ValidationKind::PhaseMismatch));
    assert_eq!(game.status(), GameStatus::Playing);
}

#[test]
fn transition_dispatches() {
    let mut game = waiting_game("PLANE", &["alice"]);
    transition(&mut game, HOST, GameStatus::Playing, at(1)).unwrap();
    transition(&mut game, HOST, GameStatus::Finished, at(2)).unwrap();
    assert_eq!(game.started_at(), Some(at(1)));
    assert_eq!(game.ended_at(), Some(at(2)));
}

#[test]
fn join_only_while_waiting_and_once() {
    let mut game = waiting_game("PLANE", &["alice"]);
    let err = join(&mut game, Player::joined("alice", "Again")).unwrap_err();
    assert_eq!(err.rejection(), Some(&ValidationKind::PlayerAlreadyJoined));

    join(&mut game, Player::joined("bob", "Bob")).unwrap();
    let ids: Vec<&str> = game.players().iter().map(|p| p.id()).collect();
    assert_eq!(ids, vec!["alice", "bob"]);

    start(&mut game, HOST, at(1)).unwrap();
    let err = join(&mut game, Player::joined("carol", "Carol")).unwrap_err();
    assert_eq!(err.rejection(), Some(&ValidationKind::JoinClosed));
}

#[test]
fn auto_finish_when_everyone_done() {
    let mut game = playing_game("PLANE", &["alice", "bob"]);
    assert!(!should_auto_finish(&game));

    submit(&mut game, "alice", "PLANE").unwrap();
    assert!(!should_auto_finish(&game), "bob still has attempts");

    for _ in 0..MAX_ATTEMPTS {
        submit(&mut game, "bob", "CRANE").unwrap();
    }
    assert!(should_auto_finish(&game));
}

#[test]
fn no_auto_finish_without_players() {
    let game = playing_game("PLANE", &[]);
    assert!(!should_auto_finish(&game));
}

#[test]
fn status_steps() {
    use GameStatus::{Finished, Playing, Waiting};
    assert!(Waiting.can_transition_to(Playing));
    assert!(Playing.can_transition_to(Finished));
    assert!(!Waiting.can_transition_to(Finished));
    assert!(!Finished.can_transition_to(Playing));
    assert!(!Playing.can_transition_to(Waiting));
}
