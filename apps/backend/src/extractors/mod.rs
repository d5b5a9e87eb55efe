pub mod api_key;
pub mod game_id;

pub use api_key::ApiKey;
pub use game_id::GameIdPath;
