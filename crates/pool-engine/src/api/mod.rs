pub mod game;
pub mod snapshot;
pub mod types;
