//! Optional list of words a host may choose as the secret.

use std::collections::HashSet;

use crate::domain::letters::Word;

#[derive(Debug, Clone, Default)]
pub struct WordList {
    words: HashSet<Word>,
}

impl WordList {
    /// Build from newline-separated text. Blank lines and `#` comments are
    /// skipped; lines that are not valid five-letter words are dropped.
    pub fn from_text(text: &str) -> Self {
        let words = text
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty() && !line.starts_with('#'))
            .filter_map(|line| Word::parse(line).ok())
            .collect();
        Self { words }
    }

    pub fn contains(&self, word: &Word) -> bool {
        self.words.contains(word)
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}
