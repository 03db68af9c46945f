//! Live-play orchestration
//!
//! One `LivePlay` covers a single snap: receivers run routes, defenders run
//! coverage, and at some point the caller throws the ball. Everything is
//! driven by `tick(dt)` from a single thread; each tick fully completes
//! before the caller reads positions or feeds the next input, so actors only
//! ever see a consistent snapshot of each other.

use serde::{Deserialize, Serialize};

use super::ball::{BallFlight, PlayOutcome};
use super::config::PlayConfig;
use super::defender::{Defender, Strategy};
use super::physics_constants::field;
use super::receiver::Receiver;
use super::route::Route;
use super::throw::{resolve_throw, ThrowResult};
use super::types::Vec2;

/// State of one snap, from routes-set to resolution.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LivePlay {
    receivers: Vec<Receiver>,
    defenders: Vec<Defender>,
    ball: Option<BallFlight>,
    config: PlayConfig,
    outcome: Option<PlayOutcome>,
    ticks: u64,
}

impl LivePlay {
    /// Fixed throw release point: midfield at the bottom of the screen.
    pub fn release_point() -> Vec2 {
        Vec2::new(field::RELEASE_X, field::RELEASE_Y)
    }

    pub fn new(config: PlayConfig) -> Self {
        let receivers = (0..field::NUM_RECEIVERS).map(Receiver::new).collect();
        let defenders = (0..field::NUM_DEFENDERS).map(Defender::new).collect();
        Self { receivers, defenders, ball: None, config, outcome: None, ticks: 0 }
    }

    pub fn receivers(&self) -> &[Receiver] {
        &self.receivers
    }

    pub fn defenders(&self) -> &[Defender] {
        &self.defenders
    }

    pub fn ball_position(&self) -> Option<Vec2> {
        self.ball.map(|b| b.pos)
    }

    pub fn throw(&self) -> Option<&ThrowResult> {
        self.ball.as_ref().map(|b| &b.throw)
    }

    pub fn outcome(&self) -> Option<PlayOutcome> {
        self.outcome
    }

    pub fn ticks(&self) -> u64 {
        self.ticks
    }

    /// Install the drawn route for one receiver slot.
    pub fn assign_route(&mut self, receiver_idx: usize, route: Route) {
        if let Some(r) = self.receivers.get_mut(receiver_idx) {
            r.assign_route(route);
        }
    }

    /// Install coverage for one defender slot.
    pub fn assign_strategy(&mut self, defender_idx: usize, strategy: Strategy, spawn: Vec2) {
        if let Some(d) = self.defenders.get_mut(defender_idx) {
            d.assign_strategy(strategy, spawn);
        }
    }

    /// Release the ball toward `aim`. Resolves the arc once, then fans the
    /// throw event out to every actor. A second throw on the same play is
    /// ignored.
    pub fn throw_ball(&mut self, aim: Vec2, held_seconds: f32) -> Option<ThrowResult> {
        if self.ball.is_some() {
            return None;
        }

        let release = Self::release_point();
        let throw = resolve_throw(release, aim, held_seconds, &self.config);
        log::debug!(
            "throw: angle={:.2} distance={:.1} duration={:.2}s catchable={:.0}",
            throw.angle,
            throw.distance,
            throw.duration,
            throw.catchable
        );

        for r in &mut self.receivers {
            r.on_ball_thrown(throw.target);
        }
        for d in &mut self.defenders {
            d.on_ball_thrown(throw.target, throw.angle, throw.catchable);
        }
        self.ball = Some(BallFlight::new(release, throw));
        Some(throw)
    }

    /// One simulation tick: ball flight and resolution first, against the
    /// actor positions of the previous tick, then receivers, then
    /// defenders.
    ///
    /// Returns the outcome once the play is over; further ticks are no-ops.
    pub fn tick(&mut self, dt: f32) -> Option<PlayOutcome> {
        if self.outcome.is_some() {
            return self.outcome;
        }
        self.ticks += 1;

        if let Some(ball) = &mut self.ball {
            ball.advance(dt);
            if let Some(outcome) = ball.check_resolution(&self.receivers, &self.defenders) {
                self.outcome = Some(outcome);
                return self.outcome;
            }
        }

        for r in &mut self.receivers {
            r.advance(dt);
        }
        let receivers = &self.receivers;
        for d in &mut self.defenders {
            d.advance(dt, receivers);
        }
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::route::{Waypoint, WaypointAction};
    use crate::engine::timestep::TICK_DT;

    fn hitch_route(x: f32) -> Route {
        Route::new([
            Waypoint { pos: Vec2::new(x, field::HEIGHT_PX - 5.0), action: WaypointAction::SprintThrough },
            Waypoint { pos: Vec2::new(x, 500.0), action: WaypointAction::StopHere },
        ])
    }

    fn set_up_play() -> LivePlay {
        let mut play = LivePlay::new(PlayConfig::default());
        for (i, x) in [150.0, 250.0, 350.0].iter().enumerate() {
            play.assign_route(i, hitch_route(*x));
        }
        for i in 0..field::NUM_DEFENDERS {
            let spawn = Vec2::new(100.0 + 75.0 * i as f32, 420.0);
            play.assign_strategy(i, Strategy::Zone { centroid: spawn }, spawn);
        }
        play
    }

    #[test]
    fn test_play_resolves_with_a_targeted_receiver() {
        let mut play = set_up_play();

        // Let routes develop, then throw at the middle receiver's hitch spot
        for _ in 0..100 {
            assert_eq!(play.tick(TICK_DT), None);
        }
        let throw = play.throw_ball(Vec2::new(250.0, 500.0), 1.0).expect("first throw");
        assert!(throw.duration > 0.0);

        let mut outcome = None;
        for _ in 0..4000 {
            if let Some(o) = play.tick(TICK_DT) {
                outcome = Some(o);
                break;
            }
        }
        assert!(outcome.is_some(), "play must resolve after the throw");
    }

    #[test]
    fn test_second_throw_is_ignored() {
        let mut play = set_up_play();
        assert!(play.throw_ball(Vec2::new(250.0, 500.0), 1.0).is_some());
        assert!(play.throw_ball(Vec2::new(100.0, 200.0), 1.0).is_none());
    }

    #[test]
    fn test_outcome_is_sticky() {
        let mut play = set_up_play();
        play.throw_ball(Vec2::new(250.0, 500.0), 1.0);

        let mut outcome = None;
        for _ in 0..4000 {
            if let Some(o) = play.tick(TICK_DT) {
                outcome = Some(o);
                break;
            }
        }
        let first = outcome.expect("resolved");
        let ticks = play.ticks();
        assert_eq!(play.tick(TICK_DT), Some(first));
        assert_eq!(play.ticks(), ticks, "finished play no longer advances");
    }

    #[test]
    fn test_ball_position_only_exists_after_throw() {
        let mut play = set_up_play();
        assert!(play.ball_position().is_none());
        play.throw_ball(Vec2::new(250.0, 500.0), 1.0);
        assert_eq!(play.ball_position(), Some(LivePlay::release_point()));
    }

    #[test]
    fn test_receivers_spawn_on_route_heads() {
        let play = set_up_play();
        assert_eq!(play.receivers()[1].pos, Vec2::new(250.0, field::HEIGHT_PX - 5.0));
    }
}
