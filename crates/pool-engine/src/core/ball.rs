//! Ball state and the fixed break layout.

use glam::Vec2;
use serde::Serialize;

use crate::api::types::BallId;

/// All balls share one radius; the ball-ball collision threshold is one diameter.
pub const BALL_RADIUS: f32 = 0.5;
pub const BALL_DIAMETER: f32 = 2.0 * BALL_RADIUS;

/// Where pocketed balls are parked, well outside the playable rectangle.
pub const SENTINEL_POS: Vec2 = Vec2::new(50.0, 50.0);

/// Per-axis speed below which a ball counts as stopped
/// (cue visibility and shot eligibility).
pub const SETTLING_EPSILON: f32 = 0.002;

/// Ball category. Solid/Stripe drive player group assignment;
/// White (the cue ball) and Black never do.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum BallType {
    White,
    Black,
    Solid,
    Stripe,
}

/// A single ball. Lives in the match's arena for the whole game;
/// pocketing flags it rather than removing it.
#[derive(Debug, Clone)]
pub struct Ball {
    /// Unique identifier, 0-15. Doubles as the arena index.
    pub id: BallId,
    pub ball_type: BallType,
    /// Center position in table space.
    pub position: Vec2,
    pub velocity: Vec2,
    pub pocketed: bool,
    pub visible: bool,
}

impl Ball {
    /// Create a ball at rest at the given position.
    pub fn new(id: BallId, ball_type: BallType, position: Vec2) -> Self {
        Self {
            id,
            ball_type,
            position,
            velocity: Vec2::ZERO,
            pocketed: false,
            visible: true,
        }
    }

    /// Remove the ball from active play: zero velocity, park it at the
    /// sentinel, flag it pocketed and invisible.
    pub fn pocket(&mut self) {
        self.velocity = Vec2::ZERO;
        self.position = SENTINEL_POS;
        self.pocketed = true;
        self.visible = false;
    }

    /// Whether the ball is below the settling epsilon on both axes.
    pub fn is_settled(&self) -> bool {
        self.velocity.x.abs() <= SETTLING_EPSILON && self.velocity.y.abs() <= SETTLING_EPSILON
    }
}

/// Initial placement for one ball.
#[derive(Debug, Clone, Copy)]
pub struct BallDef {
    pub id: u8,
    pub ball_type: BallType,
    pub x: f32,
    pub y: f32,
}

/// The fixed break layout: cue ball on the baulk side, the triangle racked
/// around y = 13..17.
pub const RACK: [BallDef; 16] = [
    BallDef { id: 0, ball_type: BallType::White, x: 0.0, y: -16.0 },
    BallDef { id: 1, ball_type: BallType::Solid, x: -1.01, y: 15.0 },
    BallDef { id: 2, ball_type: BallType::Solid, x: 1.01, y: 17.0 },
    BallDef { id: 3, ball_type: BallType::Solid, x: -0.51, y: 16.0 },
    BallDef { id: 4, ball_type: BallType::Solid, x: -1.01, y: 17.0 },
    BallDef { id: 5, ball_type: BallType::Solid, x: -2.02, y: 17.0 },
    BallDef { id: 6, ball_type: BallType::Solid, x: 1.53, y: 16.0 },
    BallDef { id: 7, ball_type: BallType::Solid, x: 0.51, y: 14.0 },
    BallDef { id: 8, ball_type: BallType::Black, x: 0.0, y: 15.0 },
    BallDef { id: 9, ball_type: BallType::Stripe, x: 0.0, y: 13.0 },
    BallDef { id: 10, ball_type: BallType::Stripe, x: 0.51, y: 16.0 },
    BallDef { id: 11, ball_type: BallType::Stripe, x: 2.02, y: 17.0 },
    BallDef { id: 12, ball_type: BallType::Stripe, x: -0.51, y: 14.0 },
    BallDef { id: 13, ball_type: BallType::Stripe, x: 0.0, y: 17.0 },
    BallDef { id: 14, ball_type: BallType::Stripe, x: -1.53, y: 16.0 },
    BallDef { id: 15, ball_type: BallType::Stripe, x: 1.01, y: 15.0 },
];
