//! Collision resolution: ball-ball pairs, rail reflection, pocket capture.
//!
//! Ball-ball resolution is the angle-decomposition model for two equal-mass
//! disks: each ball keeps its tangential velocity component and takes the
//! other's component along the collision normal. Overlapping triples are
//! resolved pairwise in iteration order — an approximation this engine
//! keeps deliberately.

use std::f32::consts::FRAC_PI_2;

use glam::Vec2;

use crate::core::ball::{Ball, BALL_DIAMETER};
use crate::core::table::{Pocket, Table, RAIL_MARGIN};

/// Run the full pairwise pass over the arena. Index-based double loop,
/// skipping `i == j` and pocketed balls. Must complete before motion
/// integration so pre-resolution velocities cannot double-apply.
pub fn resolve_ball_pairs(balls: &mut [Ball]) {
    for i in 0..balls.len() {
        for j in 0..balls.len() {
            if i == j {
                continue;
            }
            if balls[i].pocketed || balls[j].pocketed {
                continue;
            }
            let delta = balls[j].position - balls[i].position;
            if delta.length() < BALL_DIAMETER {
                resolve_pair(balls, i, j, delta);
            }
        }
    }
}

/// Exchange velocities along the collision normal and separate the pair.
fn resolve_pair(balls: &mut [Ball], i: usize, j: usize, delta: Vec2) {
    let (a, b) = pair_mut(balls, i, j);

    let heading_a = a.velocity.y.atan2(a.velocity.x);
    let heading_b = b.velocity.y.atan2(b.velocity.x);
    let speed_a = a.velocity.length();
    let speed_b = b.velocity.length();

    let normal = delta.y.atan2(delta.x);
    let tangent = normal + FRAC_PI_2;

    a.velocity = Vec2::new(
        speed_b * (heading_b - normal).cos() * normal.cos()
            + speed_a * (heading_a - normal).sin() * tangent.cos(),
        speed_b * (heading_b - normal).cos() * normal.sin()
            + speed_a * (heading_a - normal).sin() * tangent.sin(),
    );
    b.velocity = Vec2::new(
        speed_a * (heading_a - normal).cos() * normal.cos()
            + speed_b * (heading_b - normal).sin() * tangent.cos(),
        speed_a * (heading_a - normal).cos() * normal.sin()
            + speed_b * (heading_b - normal).sin() * tangent.sin(),
    );

    // Push the first ball back to exactly one diameter along the normal so
    // the pair is not resolved a second time this tick.
    a.position = b.position - Vec2::new(round3(normal.cos()), round3(normal.sin()));
}

/// Two disjoint mutable borrows out of the arena.
fn pair_mut(balls: &mut [Ball], i: usize, j: usize) -> (&mut Ball, &mut Ball) {
    if i < j {
        let (left, right) = balls.split_at_mut(j);
        (&mut left[i], &mut right[0])
    } else {
        let (left, right) = balls.split_at_mut(i);
        (&mut right[0], &mut left[j])
    }
}

fn round3(value: f32) -> f32 {
    (value * 1000.0).round() / 1000.0
}

/// Reflect a ball off the rails. Horizontal and vertical checks are
/// independent, so a corner hit flips both components.
pub fn reflect_at_rails(ball: &mut Ball, table: &Table) {
    if ball.pocketed {
        return;
    }
    if ball.position.x + RAIL_MARGIN > table.top_right.x
        || ball.position.x - RAIL_MARGIN < table.top_left.x
    {
        ball.velocity.x = -ball.velocity.x;
    }
    if ball.position.y + RAIL_MARGIN > table.top_right.y
        || ball.position.y - RAIL_MARGIN < table.bottom_right.y
    {
        ball.velocity.y = -ball.velocity.y;
    }
}

/// Pocket the ball if its center falls in a capture zone. Already-pocketed
/// (invisible) balls never re-trigger.
pub fn capture_pocket(ball: &mut Ball, table: &Table) -> Option<Pocket> {
    if ball.pocketed || !ball.visible {
        return None;
    }
    let pocket = table.capture(ball.position)?;
    ball.pocket();
    Some(pocket)
}
