//! Receiver actor
//!
//! Runs its assigned route waypoint by waypoint; once the ball is thrown at
//! it, the route collapses to the landing point and the receiver sprints
//! there without consuming the target.

use serde::{Deserialize, Serialize};

use super::kinematics::{steer, BrakingMode};
use super::physics_constants::motion;
use super::route::Route;
use super::types::Vec2;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Receiver {
    pub id: usize,
    pub pos: Vec2,
    pub vel: Vec2,
    pub route: Route,
    /// Set once the ball is in the air toward this play's landing point
    pub thrown: bool,
}

impl Receiver {
    pub fn new(id: usize) -> Self {
        Self { id, pos: Vec2::ZERO, vel: Vec2::ZERO, route: Route::default(), thrown: false }
    }

    /// Replace the route; the first waypoint doubles as the spawn position.
    pub fn assign_route(&mut self, route: Route) {
        if let Some(head) = route.head() {
            self.pos = head.pos;
        }
        self.route = route;
        self.vel = Vec2::ZERO;
        self.thrown = false;
    }

    /// One simulation tick: steer toward the head waypoint, consume it on
    /// arrival (unless thrown), then integrate position.
    pub fn advance(&mut self, dt: f32) {
        if let Some(head) = self.route.head() {
            let braking = BrakingMode::for_receiver(head.action.allows_braking(), self.thrown);
            self.vel = steer(self.vel, self.pos, head.pos, braking, motion::TOP_SPEED, dt);

            // The collapsed post-throw target is never consumed; the
            // receiver keeps driving through the catch point.
            if !self.thrown {
                self.route.consume_if_reached(self.pos);
            }
        }
        self.pos += self.vel * dt;
    }

    /// Redirect to the computed landing point at full speed.
    pub fn on_ball_thrown(&mut self, landing: Vec2) {
        self.thrown = true;
        self.route = Route::to_point(landing);
    }
}
