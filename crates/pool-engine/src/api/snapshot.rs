//! Read models for the external rendering/input/UI layer.
//!
//! Snapshots are plain data with no references into engine state; the host
//! reads them once per frame for drawing and the overlay.

use glam::Vec2;
use serde::Serialize;

use crate::core::ball::BallType;

/// Per-ball state, read each frame for drawing.
#[derive(Debug, Clone, Serialize)]
pub struct BallSnapshot {
    pub id: u8,
    pub position: Vec2,
    pub velocity: Vec2,
    pub ball_type: BallType,
    pub pocketed: bool,
    pub visible: bool,
}

/// Per-player state, read each frame for the overlay.
#[derive(Debug, Clone, Serialize)]
pub struct PlayerSnapshot {
    pub name: String,
    pub ball_type: Option<BallType>,
    pub pocketed_count: usize,
    pub has_turn: bool,
}

/// Full match snapshot, serializable for overlay layers that want JSON.
#[derive(Debug, Clone, Serialize)]
pub struct MatchSnapshot {
    pub balls: Vec<BallSnapshot>,
    pub players: Vec<PlayerSnapshot>,
}

impl MatchSnapshot {
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }
}
