mod config;
mod game_state;

pub use config::{AppConfig, ConfigError};
pub use game_state::GameState;
