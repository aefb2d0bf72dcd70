//! Motion integration under rolling resistance.
//!
//! Resistance is multiplicative, so speed decays toward zero without ever
//! reaching it; the settling epsilon elsewhere decides when a ball counts as
//! stopped. The time step is the variable wall-clock frame delta converted
//! to frame units — no sub-stepping, no continuous collision detection, so
//! tunneling at extreme deltas is an accepted approximation.

use crate::core::ball::Ball;

/// Fraction of speed lost per frame unit.
pub const ROLLING_RESISTANCE: f32 = 0.01;

/// Conversion from elapsed seconds to frame units.
pub const FRAME_RATE: f32 = 60.0;

/// Advance one ball by one tick: damp the velocity, then step the position.
/// `dt` is in frame units (elapsed seconds × `FRAME_RATE`).
pub fn integrate(ball: &mut Ball, dt: f32) {
    if ball.pocketed {
        return;
    }
    ball.velocity *= 1.0 - ROLLING_RESISTANCE * dt;
    ball.position += ball.velocity * dt;
}
