//! Cue model: selected ball, aim azimuth, and visibility.
//!
//! The azimuth comes from the external camera/controls layer; the cue itself
//! only turns it into a shot vector. Visibility doubles as shot eligibility:
//! the cue reappears once the selected ball has settled on both axes.

use glam::Vec2;

use crate::api::types::BallId;
use crate::core::ball::Ball;

/// Force applied by the discrete trigger input. The current design has no
/// variable power charging.
pub const DEFAULT_SHOT_FORCE: f32 = 1.0;

#[derive(Debug, Clone)]
pub struct CueModel {
    selected: BallId,
    azimuth: f32,
    visible: bool,
}

impl CueModel {
    /// A fresh cue targeting the given ball, visible, aimed along +X.
    pub fn new(selected: BallId) -> Self {
        Self {
            selected,
            azimuth: 0.0,
            visible: true,
        }
    }

    /// Retarget the cue. No physics side effects.
    pub fn select(&mut self, id: BallId) {
        self.selected = id;
    }

    pub fn selected(&self) -> BallId {
        self.selected
    }

    /// Store the viewpoint azimuth toward the selected ball.
    pub fn aim(&mut self, azimuth: f32) {
        self.azimuth = azimuth;
    }

    pub fn azimuth(&self) -> f32 {
        self.azimuth
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    /// Hidden while the shot plays out.
    pub fn hide(&mut self) {
        self.visible = false;
    }

    /// Velocity a shot of the given force would impart along the current aim.
    pub fn shot_velocity(&self, force: f32) -> Vec2 {
        Vec2::new(self.azimuth.cos(), self.azimuth.sin()) * force
    }

    /// Show the cue again once the selected ball has settled.
    pub fn update_visibility(&mut self, selected: &Ball) {
        if selected.is_settled() {
            self.visible = true;
        }
    }
}
