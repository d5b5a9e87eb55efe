use crate::domain::letters::LetterStatus::{Absent, Correct, Present};
use crate::domain::letters::{LetterStatus, Score};
use crate::domain::scoring::evaluate;
use crate::domain::test_state_helpers::word;

fn score(guess: &str, secret: &str) -> Score {
    evaluate(&word(guess), &word(secret))
}

#[test]
fn scoring_duplicate_guess_letter_credited_once() {
    // ROBOT has two Os; one is consumed by the exact match at position 1,
    // so the O at position 2 gets the remaining credit.
    assert_eq!(
        score("ROOMY", "ROBOT"),
        [Correct, Correct, Present, Absent, Absent]
    );
}

#[test]
fn scoring_speed_erase() {
    // No R in SPEED; both Es in the guess are credited because SPEED has two.
    assert_eq!(
        score("ERASE", "SPEED"),
        [Present, Absent, Absent, Present, Present]
    );
}

#[test]
fn scoring_exact_match_beats_earlier_misplaced_copy() {
    // WORLD has one L, at position 3. The guess's exact L takes it, so the
    // L at position 2 is absent rather than present.
    assert_eq!(
        score("HELLO", "WORLD"),
        [Absent, Absent, Absent, Correct, Present]
    );
}

#[test]
fn scoring_misplaced_copy_credited_when_exact_missing() {
    assert_eq!(
        score("LLAMA", "WORLD"),
        [Present, Absent, Absent, Absent, Absent]
    );
}

#[test]
fn scoring_triple_letter_guess_against_single() {
    assert_eq!(
        score("EEEEE", "PLANE"),
        [Absent, Absent, Absent, Absent, Correct]
    );
    assert_eq!(
        score("EERIE", "PLANE"),
        [Absent, Absent, Absent, Absent, Correct]
    );
}

#[test]
fn scoring_misplaced_duplicates_limited_by_secret() {
    // ABBEY has two Bs; guess has three, none in place.
    assert_eq!(
        score("BBXBB", "ABBEY"),
        [Present, Correct, Absent, Absent, Absent]
    );
}

#[test]
fn scoring_plane_plate() {
    assert_eq!(
        score("PLATE", "PLANE"),
        [Correct, Correct, Correct, Absent, Correct]
    );
}

#[test]
fn scoring_exact_match_all_correct() {
    assert_eq!(score("PLANE", "PLANE"), [Correct; 5]);
}

#[test]
fn scoring_no_common_letters() {
    assert_eq!(score("FJORD", "BLAST"), [LetterStatus::Absent; 5]);
}
