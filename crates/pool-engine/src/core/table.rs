//! Table geometry: the playable rectangle and the six pocket capture zones.
//! Pure geometry — the table carries no mutable state.

use glam::Vec2;

/// Boundary test inflation (two ball radii, matching the rail contact point).
pub const RAIL_MARGIN: f32 = 1.0;

/// Per-axis tolerance of the four corner pockets.
pub const CORNER_CAPTURE: f32 = 1.3;

/// X-threshold inflation of the two side-middle pockets.
pub const SIDE_CAPTURE: f32 = 0.5;

/// Half-height of the Y band gating the side-middle pockets.
pub const SIDE_BAND_HALF: f32 = 1.2;

/// One of the six capture zones. Side pockets sit on the left and right
/// rails at the table midline.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Pocket {
    TopLeft,
    TopRight,
    BottomLeft,
    BottomRight,
    MiddleLeft,
    MiddleRight,
}

/// Rectangular table defined by its four corners. Immutable after
/// construction.
#[derive(Debug, Clone)]
pub struct Table {
    pub top_left: Vec2,
    pub top_right: Vec2,
    pub bottom_left: Vec2,
    pub bottom_right: Vec2,
}

impl Table {
    /// The standard table: 24 units wide, 48 units tall, centered on the
    /// origin.
    pub fn standard() -> Self {
        Self {
            top_left: Vec2::new(-12.0, 24.0),
            top_right: Vec2::new(12.0, 24.0),
            bottom_left: Vec2::new(-12.0, -24.0),
            bottom_right: Vec2::new(12.0, -24.0),
        }
    }

    /// Y coordinate of the table midline, where the side pockets sit.
    pub fn midline(&self) -> f32 {
        (self.top_left.y + self.bottom_left.y) / 2.0
    }

    /// Classify a ball center against the six pockets. Corner pockets use
    /// independent per-axis thresholds; side pockets use an X-threshold plus
    /// a Y band around the midline. First match wins, corners checked first.
    pub fn capture(&self, position: Vec2) -> Option<Pocket> {
        if position.x - CORNER_CAPTURE < self.top_left.x
            && position.y + CORNER_CAPTURE > self.top_left.y
        {
            return Some(Pocket::TopLeft);
        }
        if position.x + CORNER_CAPTURE > self.top_right.x
            && position.y + CORNER_CAPTURE > self.top_right.y
        {
            return Some(Pocket::TopRight);
        }
        if position.x - CORNER_CAPTURE < self.bottom_left.x
            && position.y - CORNER_CAPTURE < self.bottom_left.y
        {
            return Some(Pocket::BottomLeft);
        }
        if position.x + CORNER_CAPTURE > self.bottom_right.x
            && position.y - CORNER_CAPTURE < self.bottom_right.y
        {
            return Some(Pocket::BottomRight);
        }

        let band = (position.y - self.midline()).abs() < SIDE_BAND_HALF;
        if band && position.x - SIDE_CAPTURE < self.top_left.x {
            return Some(Pocket::MiddleLeft);
        }
        if band && position.x + SIDE_CAPTURE > self.top_right.x {
            return Some(Pocket::MiddleRight);
        }

        None
    }
}

impl Default for Table {
    fn default() -> Self {
        Self::standard()
    }
}
