//! Defender actor
//!
//! Pre-throw, a defender shadows its coverage assignment (man or zone);
//! once the ball is up it abandons coverage and closes on the projected
//! catch point. The two phases are an explicit state machine.

use serde::{Deserialize, Serialize};

use super::kinematics::{steer, BrakingMode};
use super::physics_constants::{field, motion, resolution};
use super::receiver::Receiver;
use super::types::Vec2;

/// Coverage assignment, fixed for the duration of a play.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum Strategy {
    /// Shadow one receiver, standing off at `approach_angle`
    Man { receiver_idx: usize, approach_angle: f32 },
    /// Guard a fixed spot, picking up the nearest receiver that enters it
    Zone { centroid: Vec2 },
}

impl Strategy {
    /// Build a strategy from the press/release gesture of the assignment
    /// phase: a press on (or near) a receiver selects man coverage with the
    /// drag direction as approach angle, anywhere else drops a zone.
    pub fn from_gesture(press: Vec2, release: Vec2, receivers: &[Receiver]) -> (Self, Vec2) {
        let mut min_dist = resolution::MAN_PICK_RADIUS;
        let mut picked = None;
        for (idx, r) in receivers.iter().enumerate() {
            let dist = press.distance_to(r.pos);
            if dist < min_dist {
                min_dist = dist;
                picked = Some(idx);
            }
        }

        let strategy = match picked {
            Some(receiver_idx) => {
                Strategy::Man { receiver_idx, approach_angle: press.bearing_to(release) }
            }
            None => Strategy::Zone { centroid: press },
        };
        (strategy, press)
    }
}

/// Pre-throw vs post-throw targeting mode.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum CoverageState {
    /// Running the assigned coverage
    Covering,
    /// Ball in the air: close on the catch point
    TrackingBall { landing: Vec2, angle: f32, catchable: f32 },
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Defender {
    pub id: usize,
    pub pos: Vec2,
    pub vel: Vec2,
    pub strategy: Strategy,
    pub coverage: CoverageState,
}

impl Defender {
    pub fn new(id: usize) -> Self {
        Self {
            id,
            pos: Vec2::ZERO,
            vel: Vec2::ZERO,
            strategy: Strategy::Zone { centroid: Vec2::ZERO },
            coverage: CoverageState::Covering,
        }
    }

    pub fn assign_strategy(&mut self, strategy: Strategy, spawn: Vec2) {
        self.strategy = strategy;
        self.pos = spawn;
        self.vel = Vec2::ZERO;
        self.coverage = CoverageState::Covering;
    }

    /// Switch to ball tracking; coverage is abandoned for the rest of the
    /// play.
    pub fn on_ball_thrown(&mut self, landing: Vec2, angle: f32, catchable: f32) {
        self.coverage = CoverageState::TrackingBall { landing, angle, catchable };
    }

    /// One simulation tick. `receivers` is a read-only view of the offense;
    /// a defender only ever writes its own state.
    pub fn advance(&mut self, dt: f32, receivers: &[Receiver]) {
        let target = self.target_location(receivers);
        let braking = match self.coverage {
            // Closing on the ball is always full speed
            CoverageState::TrackingBall { .. } => BrakingMode::Disabled,
            CoverageState::Covering => BrakingMode::Enabled { radius_factor: 1.0 },
        };
        self.vel = steer(self.vel, self.pos, target, braking, motion::TOP_SPEED, dt);
        self.pos += self.vel * dt;
    }

    /// Where this defender wants to be right now.
    pub fn target_location(&self, receivers: &[Receiver]) -> Vec2 {
        match self.coverage {
            CoverageState::TrackingBall { landing, angle, catchable } => {
                // Back off from the landing spot toward the thrower: the
                // catch is contested at the near edge of the window.
                landing - Vec2::from_angle(angle) * (catchable / 2.0)
            }
            CoverageState::Covering => self.coverage_target(receivers),
        }
    }

    fn coverage_target(&self, receivers: &[Receiver]) -> Vec2 {
        match self.strategy {
            Strategy::Man { receiver_idx, approach_angle } => {
                match receivers.get(receiver_idx) {
                    Some(r) => {
                        r.pos + r.vel * resolution::LEAD_FACTOR - self.vel * 2.0
                            + Vec2::from_angle(approach_angle) * field::MAN_BUFFER
                    }
                    // Assignment no longer on the field: hold position
                    None => self.pos,
                }
            }
            Strategy::Zone { centroid } => {
                let mut min_dist = resolution::ZONE_SEARCH_RADIUS;
                let mut found = None;
                for r in receivers {
                    let dist = centroid.distance_to(r.pos);
                    if dist < min_dist {
                        min_dist = dist;
                        found = Some(r);
                    }
                }
                match found {
                    Some(r) => {
                        r.pos + r.vel * resolution::LEAD_FACTOR - self.vel
                            - Vec2::new(0.0, field::MAN_BUFFER / 4.0)
                    }
                    None => centroid,
                }
            }
        }
    }
}
