//! Ball flight integration and catch resolution
//!
//! While airborne the ball moves at a constant horizontal speed along the
//! throw bearing. Once its travelled distance enters the catchable window
//! around the target distance, every actor within the catch radius contests
//! the ball - defenders first.

use serde::{Deserialize, Serialize};

use super::defender::Defender;
use super::physics_constants::{field, resolution};
use super::receiver::Receiver;
use super::throw::ThrowResult;
use super::types::Vec2;

/// How a live play ended.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum PlayOutcome {
    /// A receiver met the ball inside the window
    Catch { yards: f32 },
    /// The ball overflew the window with nobody on it
    Incomplete,
    /// A defender met the ball first: possession lost, game over
    Interception,
}

/// Airborne ball state.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct BallFlight {
    /// Release point the travelled distance is measured from
    origin: Vec2,
    pub pos: Vec2,
    pub throw: ThrowResult,
}

impl BallFlight {
    pub fn new(origin: Vec2, throw: ThrowResult) -> Self {
        Self { origin, pos: origin, throw }
    }

    /// Integrate one tick along the bearing.
    pub fn advance(&mut self, dt: f32) {
        self.pos += Vec2::from_angle(self.throw.angle) * (self.throw.ball_speed * dt);
    }

    /// Distance covered since release.
    pub fn travelled(&self) -> f32 {
        self.origin.distance_to(self.pos)
    }

    /// Inside the catchable window centred on the target distance?
    pub fn in_window(&self) -> bool {
        (self.travelled() - self.throw.distance).abs() < self.throw.catchable
    }

    /// Past the far edge of the window with no resolution?
    pub fn out_of_window(&self) -> bool {
        self.travelled() > self.throw.distance + self.throw.catchable
    }

    /// Contest the ball at its current position. Defender proximity wins
    /// over receiver proximity - the interception tie-break is deliberate.
    pub fn check_resolution(
        &self,
        receivers: &[Receiver],
        defenders: &[Defender],
    ) -> Option<PlayOutcome> {
        if self.in_window() {
            for d in defenders {
                if d.pos.distance_to(self.pos) < resolution::CATCH_RADIUS {
                    log::debug!("interception by defender {} at {:?}", d.id, self.pos);
                    return Some(PlayOutcome::Interception);
                }
            }
            for r in receivers {
                if r.pos.distance_to(self.pos) < resolution::CATCH_RADIUS {
                    let yards = (field::HEIGHT_PX - self.pos.y) / field::PX_PER_YD;
                    log::debug!("catch by receiver {} for {:.1} yd", r.id, yards);
                    return Some(PlayOutcome::Catch { yards });
                }
            }
        }

        if self.out_of_window() {
            log::debug!("ball down at {:?}, incomplete", self.pos);
            return Some(PlayOutcome::Incomplete);
        }
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::config::PlayConfig;
    use crate::engine::throw::resolve_throw;
    use crate::engine::timestep::TICK_DT;

    fn release() -> Vec2 {
        Vec2::new(field::RELEASE_X, field::RELEASE_Y)
    }

    fn flight_to(target: Vec2) -> BallFlight {
        let throw = resolve_throw(release(), target, 1.0, &PlayConfig::default());
        BallFlight::new(release(), throw)
    }

    fn receiver_at(pos: Vec2) -> Receiver {
        let mut r = Receiver::new(0);
        r.pos = pos;
        r
    }

    fn defender_at(pos: Vec2) -> Defender {
        let mut d = Defender::new(0);
        d.pos = pos;
        d
    }

    #[test]
    fn test_ball_travels_bearing_at_constant_speed() {
        let target = Vec2::new(250.0, 448.0); // straight upfield
        let mut ball = flight_to(target);

        ball.advance(TICK_DT);
        let step = ball.travelled();
        assert!((step - ball.throw.ball_speed * TICK_DT).abs() < 1e-3);

        ball.advance(TICK_DT);
        assert!((ball.travelled() - 2.0 * step).abs() < 1e-3);
        // Straight up the field: x stays on the hash
        assert!((ball.pos.x - 250.0).abs() < 1e-3);
        assert!(ball.pos.y < field::RELEASE_Y);
    }

    #[test]
    fn test_catch_at_landing_point_scores_vertical_yards() {
        let target = Vec2::new(250.0, 448.0);
        let mut ball = flight_to(target);
        let receivers = vec![receiver_at(target)];

        let mut outcome = None;
        for _ in 0..2000 {
            ball.advance(TICK_DT);
            outcome = ball.check_resolution(&receivers, &[]);
            if outcome.is_some() {
                break;
            }
        }

        match outcome {
            Some(PlayOutcome::Catch { yards }) => {
                // Yards come from the ball's vertical position alone
                let expected = (field::HEIGHT_PX - ball.pos.y) / field::PX_PER_YD;
                assert!((yards - expected).abs() < 1e-4);
                assert!(yards > 0.0);
            }
            other => panic!("expected catch, got {:?}", other),
        }
    }

    #[test]
    fn test_defender_takes_precedence_over_receiver() {
        let target = Vec2::new(250.0, 448.0);
        let mut ball = flight_to(target);
        // Both stand on the landing point: the ball must go to the defense
        let receivers = vec![receiver_at(target)];
        let defenders = vec![defender_at(target)];

        let mut outcome = None;
        for _ in 0..2000 {
            ball.advance(TICK_DT);
            outcome = ball.check_resolution(&receivers, &defenders);
            if outcome.is_some() {
                break;
            }
        }
        assert_eq!(outcome, Some(PlayOutcome::Interception));
    }

    #[test]
    fn test_uncontested_ball_falls_incomplete() {
        let target = Vec2::new(250.0, 448.0);
        let mut ball = flight_to(target);

        let mut outcome = None;
        for _ in 0..4000 {
            ball.advance(TICK_DT);
            outcome = ball.check_resolution(&[], &[]);
            if outcome.is_some() {
                break;
            }
        }
        assert_eq!(outcome, Some(PlayOutcome::Incomplete));
        assert!(ball.travelled() > ball.throw.distance + ball.throw.catchable);
    }

    #[test]
    fn test_no_resolution_before_window() {
        let target = Vec2::new(250.0, 448.0);
        let ball = flight_to(target);
        // Ball still at the release point, far short of the window
        let receivers = vec![receiver_at(target)];
        assert_eq!(ball.check_resolution(&receivers, &[]), None);
    }
}
