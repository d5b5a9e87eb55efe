/// Letters in every secret word and guess.
pub const WORD_LENGTH: usize = 5;

/// Guesses a single player may submit per game.
pub const MAX_ATTEMPTS: usize = 6;

/// Size of the A-Z alphabet used for letter tallies.
pub const ALPHABET: usize = 26;

/// Attempts left for a player who has used `used` of them.
#[inline]
pub fn attempts_left(used: usize) -> usize {
    MAX_ATTEMPTS.saturating_sub(used)
}
