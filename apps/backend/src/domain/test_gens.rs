// Proptest generators for domain types.

use proptest::prelude::*;

use crate::domain::letters::Word;

/// Any five-letter A-Z word.
pub fn word() -> impl Strategy<Value = Word> {
    "[A-Z]{5}".prop_map(|s| Word::parse(&s).expect("generated word is valid"))
}

/// Words over a tiny alphabet so repeated letters are common.
pub fn dense_word() -> impl Strategy<Value = Word> {
    "[AEOR]{5}".prop_map(|s| Word::parse(&s).expect("generated word is valid"))
}

/// Raw guess text that may or may not be valid.
pub fn raw_guess() -> impl Strategy<Value = String> {
    prop_oneof![
        4 => "[A-Za-z]{5}",
        1 => "[A-Z]{0,8}",
        1 => "[A-Z0-9 ]{5}",
    ]
}
