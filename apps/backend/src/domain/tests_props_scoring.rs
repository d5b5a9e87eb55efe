//! Property tests for guess scoring (pure domain).

use std::collections::HashMap;

use proptest::prelude::*;

use crate::domain::letters::{LetterStatus, Word};
use crate::domain::scoring::evaluate;
use crate::domain::test_gens;
use crate::domain::test_prelude;

fn multiplicity(word: &Word) -> HashMap<char, usize> {
    let mut counts = HashMap::new();
    for c in word.chars() {
        *counts.entry(c).or_insert(0) += 1;
    }
    counts
}

proptest! {
    #![proptest_config(test_prelude::proptest_config())]

    /// Property: scoring is a pure function of (guess, secret).
    #[test]
    fn prop_deterministic(guess in test_gens::word(), secret in test_gens::word()) {
        prop_assert_eq!(evaluate(&guess, &secret), evaluate(&guess, &secret));
    }

    /// Property: a word scored against itself is all correct.
    #[test]
    fn prop_exact_match_all_correct(secret in test_gens::word()) {
        prop_assert_eq!(evaluate(&secret, &secret), [LetterStatus::Correct; 5]);
    }

    /// Property: correct + present credits for a letter never exceed its
    /// multiplicity in the secret.
    #[test]
    fn prop_credits_bounded_by_multiplicity(
        guess in test_gens::dense_word(),
        secret in test_gens::dense_word(),
    ) {
        let score = evaluate(&guess, &secret);
        let available = multiplicity(&secret);
        let mut credited: HashMap<char, usize> = HashMap::new();
        for (letter, status) in guess.chars().zip(score.iter()) {
            if *status != LetterStatus::Absent {
                *credited.entry(letter).or_insert(0) += 1;
            }
        }
        for (letter, count) in credited {
            let cap = available.get(&letter).copied().unwrap_or(0);
            prop_assert!(count <= cap, "{letter} credited {count} times, secret has {cap}");
        }
    }

    /// Property: correct exactly where letters coincide.
    #[test]
    fn prop_correct_iff_same_position(
        guess in test_gens::dense_word(),
        secret in test_gens::dense_word(),
    ) {
        let score = evaluate(&guess, &secret);
        for (i, (g, s)) in guess.chars().zip(secret.chars()).enumerate() {
            prop_assert_eq!(score[i] == LetterStatus::Correct, g == s);
        }
    }

    /// Property: a letter absent from the secret is always absent.
    #[test]
    fn prop_foreign_letters_absent(guess in test_gens::word(), secret in test_gens::word()) {
        let score = evaluate(&guess, &secret);
        let secret_letters = multiplicity(&secret);
        for (letter, status) in guess.chars().zip(score.iter()) {
            if !secret_letters.contains_key(&letter) {
                prop_assert_eq!(*status, LetterStatus::Absent);
            }
        }
    }
}
