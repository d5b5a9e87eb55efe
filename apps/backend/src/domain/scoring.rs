//! Guess scoring against the secret word.

use crate::domain::letters::{letter_index, LetterStatus, Score, Word};
use crate::domain::rules::{ALPHABET, WORD_LENGTH};

/// Score `guess` against `secret`.
///
/// Exact matches are credited first and consume their letter from the
/// secret's tally; remaining positions are credited `Present` only while
/// the tally for that letter is positive. A letter is therefore never
/// credited more times than it occurs in the secret.
pub fn evaluate(guess: &Word, secret: &Word) -> Score {
    let guess = guess.as_bytes();
    let secret = secret.as_bytes();

    let mut remaining = [0u8; ALPHABET];
    for &letter in secret {
        remaining[letter_index(letter)] += 1;
    }

    let mut score = [LetterStatus::Absent; WORD_LENGTH];
    let mut matched = [false; WORD_LENGTH];

    // Exact positions
    for (i, (&g, &s)) in guess.iter().zip(secret).enumerate() {
        if g == s {
            score[i] = LetterStatus::Correct;
            matched[i] = true;
            remaining[letter_index(g)] -= 1;
        }
    }

    // Misplaced letters, limited by what is left in the tally
    for (i, &g) in guess.iter().enumerate() {
        if matched[i] {
            continue;
        }
        let left = &mut remaining[letter_index(g)];
        if *left > 0 {
            score[i] = LetterStatus::Present;
            *left -= 1;
        }
    }

    score
}
