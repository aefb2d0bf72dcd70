use serde::Serialize;

use crate::core::ball::BallType;
use crate::core::table::Pocket;

/// Unique identifier for a ball, 0-15. Id 0 is always the cue ball.
/// The id doubles as the ball's index in the match arena.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct BallId(pub u8);

impl BallId {
    /// The white cue ball.
    pub const CUE: BallId = BallId(0);
}

/// Something that happened during the most recent tick, for the host layer
/// to react to (sounds, overlay updates).
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum MatchEvent {
    /// A shot was taken (turn switches regardless of eligibility).
    Shot { ball: BallId, force: f32 },
    /// The turn passed to the given player index.
    TurnChanged { player: usize },
    /// A ball was captured. `scored_by` is the crediting player index, or
    /// `None` for the cue ball, which never scores.
    BallPocketed {
        ball: BallId,
        ball_type: BallType,
        pocket: Pocket,
        scored_by: Option<usize>,
    },
}
