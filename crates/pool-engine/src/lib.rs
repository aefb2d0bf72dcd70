pub mod api;
pub mod core;
pub mod input;
pub mod systems;

// Re-export key types at crate root for convenience
pub use crate::api::game::PoolMatch;
pub use crate::api::snapshot::{BallSnapshot, MatchSnapshot, PlayerSnapshot};
pub use crate::api::types::{BallId, MatchEvent};
pub use crate::core::ball::{
    Ball, BallDef, BallType, BALL_DIAMETER, BALL_RADIUS, RACK, SENTINEL_POS, SETTLING_EPSILON,
};
pub use crate::core::cue::{CueModel, DEFAULT_SHOT_FORCE};
pub use crate::core::player::Player;
pub use crate::core::table::{
    Pocket, Table, CORNER_CAPTURE, RAIL_MARGIN, SIDE_BAND_HALF, SIDE_CAPTURE,
};
pub use crate::input::queue::{Command, CommandQueue};
pub use crate::systems::motion::{FRAME_RATE, ROLLING_RESISTANCE};
