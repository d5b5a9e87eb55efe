pub mod games;
pub mod memory;

pub use games::{require_game, Applied, GameStore};
pub use memory::InMemoryGameStore;
