//! Player-side pieces: key handling and a session that keeps a refreshed
//! view of one game.

pub mod input;
pub mod session;

pub use input::{InputAssembler, InputEvent, Key};
pub use session::{KeyOutcome, PlayerSession};
