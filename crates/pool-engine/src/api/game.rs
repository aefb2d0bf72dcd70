//! The match controller: owns all mutable match state and runs one
//! simulation tick per host frame.
//!
//! Tick order is fixed: drain commands, resolve ball-ball pairs over the
//! whole arena, reflect at the rails, integrate motion, apply pockets, then
//! update cue visibility. The ball-ball pass completes before integration so
//! pre-resolution velocities cannot double-apply.

use glam::Vec2;

use crate::api::snapshot::{BallSnapshot, MatchSnapshot, PlayerSnapshot};
use crate::api::types::{BallId, MatchEvent};
use crate::core::ball::{Ball, RACK};
use crate::core::cue::CueModel;
use crate::core::player::Player;
use crate::core::table::Table;
use crate::input::queue::{Command, CommandQueue};
use crate::systems::{collision, motion};

/// A two-player billiards match. Single-threaded and frame-driven: one call
/// to [`advance_tick`](PoolMatch::advance_tick) runs to completion before
/// the host's next frame callback.
pub struct PoolMatch {
    table: Table,
    balls: Vec<Ball>,
    players: [Player; 2],
    cue: CueModel,
    commands: CommandQueue,
    events: Vec<MatchEvent>,
}

impl PoolMatch {
    /// Set up a match with the fixed break layout. The first player starts.
    pub fn new(player_one: impl Into<String>, player_two: impl Into<String>) -> Self {
        let balls = RACK
            .iter()
            .map(|def| Ball::new(BallId(def.id), def.ball_type, Vec2::new(def.x, def.y)))
            .collect();
        Self {
            table: Table::standard(),
            balls,
            players: [Player::new(player_one, true), Player::new(player_two, false)],
            cue: CueModel::new(BallId::CUE),
            commands: CommandQueue::new(),
            events: Vec::new(),
        }
    }

    // -- Commands --

    /// Enqueue a command for the next tick. The host input layer calls this
    /// between frames.
    pub fn queue_command(&mut self, command: Command) {
        self.commands.push(command);
    }

    /// Retarget the cue. Rejects unknown ids and pocketed balls — a ball
    /// that cannot be shot cannot be selected.
    pub fn select_ball(&mut self, id: BallId) -> bool {
        match self.balls.get(id.0 as usize) {
            Some(ball) if !ball.pocketed => {
                self.cue.select(id);
                true
            }
            Some(_) => {
                log::warn!("select_ball: ball {} is pocketed", id.0);
                false
            }
            None => {
                log::warn!("select_ball: no ball with id {}", id.0);
                false
            }
        }
    }

    /// Update the cue orientation from the external viewpoint azimuth.
    pub fn aim(&mut self, azimuth: f32) {
        self.cue.aim(azimuth);
    }

    /// Take a shot. If the cue is visible (the selected ball has settled),
    /// the shot vector becomes the ball's velocity and the cue hides. The
    /// turn switches unconditionally — even when the cue was hidden and no
    /// velocity was assigned.
    pub fn shoot(&mut self, force: f32) {
        let target = self.cue.selected();
        if self.cue.is_visible() {
            let velocity = self.cue.shot_velocity(force);
            self.balls[target.0 as usize].velocity = velocity;
            self.cue.hide();
            log::info!(
                "shot: ball {} velocity ({:.3}, {:.3})",
                target.0,
                velocity.x,
                velocity.y
            );
        }
        self.switch_turn();
        self.events.push(MatchEvent::Shot { ball: target, force });
    }

    // -- Simulation --

    /// Run one simulation tick. `elapsed_seconds` is the wall-clock frame
    /// delta supplied by the host loop.
    pub fn advance_tick(&mut self, elapsed_seconds: f32) {
        self.events.clear();
        for command in self.commands.drain() {
            match command {
                Command::SelectBall { id } => {
                    self.select_ball(id);
                }
                Command::Aim { azimuth } => self.aim(azimuth),
                Command::Shoot { force } => self.shoot(force),
            }
        }

        let dt = elapsed_seconds * motion::FRAME_RATE;

        collision::resolve_ball_pairs(&mut self.balls);
        for ball in &mut self.balls {
            collision::reflect_at_rails(ball, &self.table);
        }
        for ball in &mut self.balls {
            motion::integrate(ball, dt);
        }
        self.apply_pockets();

        let selected = &self.balls[self.cue.selected().0 as usize];
        self.cue.update_visibility(selected);
    }

    /// Flag captured balls and credit the player on turn. The cue ball is
    /// parked like any other but never triggers scoring.
    fn apply_pockets(&mut self) {
        for index in 0..self.balls.len() {
            let pocket = match collision::capture_pocket(&mut self.balls[index], &self.table) {
                Some(pocket) => pocket,
                None => continue,
            };
            let id = self.balls[index].id;
            let ball_type = self.balls[index].ball_type;

            let scored_by = if id == BallId::CUE {
                None
            } else {
                let scorer = usize::from(!self.players[0].has_turn);
                let (left, right) = self.players.split_at_mut(1);
                let (current, other) = if scorer == 0 {
                    (&mut left[0], &mut right[0])
                } else {
                    (&mut right[0], &mut left[0])
                };
                current.pocket_ball(id, ball_type, other);
                Some(scorer)
            };

            log::info!("ball {} ({:?}) pocketed into {:?}", id.0, ball_type, pocket);
            self.events.push(MatchEvent::BallPocketed {
                ball: id,
                ball_type,
                pocket,
                scored_by,
            });
        }
    }

    /// Toggle both players' turn flags, keeping exactly one raised.
    fn switch_turn(&mut self) {
        for player in &mut self.players {
            player.toggle_turn();
        }
        let current = usize::from(!self.players[0].has_turn);
        self.events.push(MatchEvent::TurnChanged { player: current });
    }

    // -- Queries --

    pub fn table(&self) -> &Table {
        &self.table
    }

    pub fn cue(&self) -> &CueModel {
        &self.cue
    }

    pub fn ball(&self, id: BallId) -> Option<&Ball> {
        self.balls.get(id.0 as usize)
    }

    pub fn players(&self) -> &[Player; 2] {
        &self.players
    }

    /// Events from the most recent tick.
    pub fn events(&self) -> &[MatchEvent] {
        &self.events
    }

    /// Per-ball state for the drawing layer.
    pub fn ball_snapshots(&self) -> Vec<BallSnapshot> {
        self.balls
            .iter()
            .map(|ball| BallSnapshot {
                id: ball.id.0,
                position: ball.position,
                velocity: ball.velocity,
                ball_type: ball.ball_type,
                pocketed: ball.pocketed,
                visible: ball.visible,
            })
            .collect()
    }

    /// Per-player state for the overlay layer.
    pub fn player_snapshots(&self) -> [PlayerSnapshot; 2] {
        [0, 1].map(|i| {
            let player = &self.players[i];
            PlayerSnapshot {
                name: player.name.clone(),
                ball_type: player.ball_type,
                pocketed_count: player.pocketed_balls.len(),
                has_turn: player.has_turn,
            }
        })
    }

    /// Everything the host layer reads, in one serializable struct.
    pub fn snapshot(&self) -> MatchSnapshot {
        MatchSnapshot {
            balls: self.ball_snapshots(),
            players: self.player_snapshots().to_vec(),
        }
    }
}

impl Default for PoolMatch {
    fn default() -> Self {
        Self::new("Player 1", "Player 2")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::ball::BallType;
    use crate::core::cue::DEFAULT_SHOT_FORCE;
    use crate::core::table::Pocket;

    const TICK: f32 = 1.0 / 60.0;

    #[test]
    fn new_match_has_full_rack_and_first_player_on_turn() {
        let game = PoolMatch::default();

        let balls = game.ball_snapshots();
        assert_eq!(balls.len(), 16);
        assert_eq!(balls[0].ball_type, BallType::White);
        assert_eq!(balls[0].position, Vec2::new(0.0, -16.0));
        assert!(balls.iter().all(|b| !b.pocketed && b.visible));

        let players = game.player_snapshots();
        assert!(players[0].has_turn);
        assert!(!players[1].has_turn);
        assert_eq!(game.cue().selected(), BallId::CUE);
    }

    #[test]
    fn shoot_assigns_velocity_and_switches_turn() {
        let mut game = PoolMatch::default();
        game.aim(0.0);
        game.shoot(DEFAULT_SHOT_FORCE);

        let cue_ball = game.ball(BallId::CUE).unwrap();
        assert!((cue_ball.velocity.x - 1.0).abs() < 1e-6);
        assert!(cue_ball.velocity.y.abs() < 1e-6);
        assert!(!game.cue().is_visible());

        let players = game.player_snapshots();
        assert!(!players[0].has_turn);
        assert!(players[1].has_turn);
    }

    #[test]
    fn shoot_with_hidden_cue_still_switches_turn() {
        let mut game = PoolMatch::default();
        game.aim(0.0);
        game.shoot(1.0);
        let velocity_after_first = game.ball(BallId::CUE).unwrap().velocity;

        // Cue is hidden now; a second shot must not touch the ball but the
        // turn still passes back.
        game.shoot(5.0);

        assert_eq!(game.ball(BallId::CUE).unwrap().velocity, velocity_after_first);
        let players = game.player_snapshots();
        assert!(players[0].has_turn);
        assert!(!players[1].has_turn);
    }

    #[test]
    fn exactly_one_player_on_turn_after_any_shot() {
        let mut game = PoolMatch::default();
        for _ in 0..5 {
            game.shoot(1.0);
            let players = game.player_snapshots();
            assert_ne!(players[0].has_turn, players[1].has_turn);
        }
    }

    #[test]
    fn queued_commands_run_at_tick_start() {
        let mut game = PoolMatch::default();
        game.queue_command(Command::Aim {
            azimuth: std::f32::consts::FRAC_PI_2,
        });
        game.queue_command(Command::Shoot { force: 1.0 });

        game.advance_tick(TICK);

        let cue_ball = game.ball(BallId::CUE).unwrap();
        assert!(cue_ball.velocity.y > 0.9);
        assert!(game
            .events()
            .iter()
            .any(|e| matches!(e, MatchEvent::TurnChanged { player: 1 })));
    }

    #[test]
    fn stripe_near_corner_pocket_assigns_types() {
        let mut game = PoolMatch::default();
        // Ball 9 (Stripe) nudged past the top-right corner tolerance.
        game.balls[9].position = Vec2::new(11.0, 23.0);

        game.advance_tick(TICK);

        let ball = game.ball(BallId(9)).unwrap();
        assert!(ball.pocketed);
        assert!(!ball.visible);
        assert_eq!(ball.velocity, Vec2::ZERO);

        // Player 1 was on turn, so Player 1 becomes Stripes.
        let players = game.player_snapshots();
        assert_eq!(players[0].ball_type, Some(BallType::Stripe));
        assert_eq!(players[1].ball_type, Some(BallType::Solid));
        assert_eq!(players[0].pocketed_count, 1);

        assert!(game.events().iter().any(|e| matches!(
            e,
            MatchEvent::BallPocketed {
                ball: BallId(9),
                pocket: Pocket::TopRight,
                scored_by: Some(0),
                ..
            }
        )));
    }

    #[test]
    fn pocketed_ball_is_not_scored_twice() {
        let mut game = PoolMatch::default();
        game.balls[9].position = Vec2::new(11.0, 23.0);

        game.advance_tick(TICK);
        game.advance_tick(TICK);

        assert_eq!(game.player_snapshots()[0].pocketed_count, 1);
        // Second tick produced no pocket event.
        assert!(game.events().is_empty());
    }

    #[test]
    fn cue_ball_pocket_never_scores() {
        let mut game = PoolMatch::default();
        game.balls[0].position = Vec2::new(-11.0, -23.0);

        game.advance_tick(TICK);

        let cue_ball = game.ball(BallId::CUE).unwrap();
        assert!(cue_ball.pocketed);

        let players = game.player_snapshots();
        assert_eq!(players[0].pocketed_count, 0);
        assert_eq!(players[1].pocketed_count, 0);
        assert_eq!(players[0].ball_type, None);

        assert!(game.events().iter().any(|e| matches!(
            e,
            MatchEvent::BallPocketed {
                ball: BallId(0),
                scored_by: None,
                ..
            }
        )));
    }

    #[test]
    fn select_ball_rejects_pocketed_and_unknown() {
        let mut game = PoolMatch::default();
        game.balls[9].position = Vec2::new(11.0, 23.0);
        game.advance_tick(TICK);

        assert!(!game.select_ball(BallId(9)));
        assert!(!game.select_ball(BallId(99)));
        assert_eq!(game.cue().selected(), BallId::CUE);

        assert!(game.select_ball(BallId(5)));
        assert_eq!(game.cue().selected(), BallId(5));
    }

    #[test]
    fn cue_reappears_after_the_ball_settles() {
        let mut game = PoolMatch::default();
        game.aim(0.0);
        game.shoot(1.0);
        assert!(!game.cue().is_visible());

        // The cue ball shuttles between the side rails at y = -16, far from
        // any pocket, while resistance bleeds its speed off.
        for _ in 0..2000 {
            game.advance_tick(TICK);
        }

        assert!(game.ball(BallId::CUE).unwrap().is_settled());
        assert!(game.cue().is_visible());
    }

    #[test]
    fn break_shot_scatters_the_rack() {
        let mut game = PoolMatch::default();
        // Aim straight up the table at the rack apex.
        game.aim(std::f32::consts::FRAC_PI_2);
        game.shoot(1.0);

        for _ in 0..600 {
            game.advance_tick(TICK);
        }

        // The cue ball hit the rack: at least one object ball moved.
        let moved = RACK[1..].iter().any(|def| {
            let ball = game.ball(BallId(def.id)).unwrap();
            ball.pocketed || ball.position.distance(Vec2::new(def.x, def.y)) > 0.1
        });
        assert!(moved);

        // Live balls never overlap beyond the push-back rounding plus one
        // tick of settled motion.
        let snapshots = game.ball_snapshots();
        for (i, a) in snapshots.iter().enumerate() {
            for b in snapshots.iter().skip(i + 1) {
                if a.pocketed || b.pocketed {
                    continue;
                }
                let distance = a.position.distance(b.position);
                assert!(
                    distance >= 1.0 - 0.01,
                    "balls {} and {} overlap: {}",
                    a.id,
                    b.id,
                    distance
                );
            }
        }
    }

    #[test]
    fn snapshot_round_trips_to_json() {
        let game = PoolMatch::default();
        let json = game.snapshot().to_json().unwrap();
        assert!(json.contains("\"balls\""));
        assert!(json.contains("\"players\""));
    }
}
