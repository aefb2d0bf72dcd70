//! Player state: turn flag, assigned group, pocketed-ball record.

use crate::api::types::BallId;
use crate::core::ball::BallType;

/// One of the two players. The match controller owns both and keeps exactly
/// one `has_turn` flag raised at any instant.
#[derive(Debug, Clone)]
pub struct Player {
    pub name: String,
    /// Unset until the first Solid/Stripe ball is pocketed on this player's
    /// turn; assigned at most once per match.
    pub ball_type: Option<BallType>,
    /// Balls credited to this player, in pocketing order.
    pub pocketed_balls: Vec<BallId>,
    pub has_turn: bool,
}

impl Player {
    pub fn new(name: impl Into<String>, has_turn: bool) -> Self {
        Self {
            name: name.into(),
            ball_type: None,
            pocketed_balls: Vec::new(),
            has_turn,
        }
    }

    /// Flip the turn flag. The controller toggles both players together.
    pub fn toggle_turn(&mut self) {
        self.has_turn = !self.has_turn;
    }

    /// Credit a pocketed ball to this player. The first Solid or Stripe
    /// pocket fixes both players' groups; White and Black never assign.
    pub fn pocket_ball(&mut self, ball: BallId, ball_type: BallType, other: &mut Player) {
        self.pocketed_balls.push(ball);
        if self.ball_type.is_some() {
            return;
        }
        match ball_type {
            BallType::Solid => {
                self.ball_type = Some(BallType::Solid);
                other.ball_type = Some(BallType::Stripe);
            }
            BallType::Stripe => {
                self.ball_type = Some(BallType::Stripe);
                other.ball_type = Some(BallType::Solid);
            }
            BallType::White | BallType::Black => {}
        }
    }
}
