pub mod ball;
pub mod cue;
pub mod player;
pub mod table;
