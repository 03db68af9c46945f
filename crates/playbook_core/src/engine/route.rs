//! Receiver routes: ordered waypoints with per-waypoint actions
//!
//! A route is consumed front-to-back while the play is live. Actions ride
//! the wire as integer codes 0-3 with braking gated on parity; in memory
//! the codes are an enum and the parity rule an explicit match.

use std::collections::VecDeque;

use serde::{Deserialize, Serialize};

use super::physics_constants::motion;
use super::types::Vec2;

/// Per-waypoint behavior code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum WaypointAction {
    /// Decelerate to a stop at this point (code 0)
    StopHere,
    /// Run straight through; no further waypoints follow (code 1)
    RunStraight,
    /// Decelerate through this point, then continue (code 2)
    BreakDown,
    /// Hold full speed through this point (code 3)
    SprintThrough,
}

impl WaypointAction {
    /// Braking is allowed at even-coded actions (StopHere, BreakDown).
    pub fn allows_braking(&self) -> bool {
        match self {
            WaypointAction::StopHere | WaypointAction::BreakDown => true,
            WaypointAction::RunStraight | WaypointAction::SprintThrough => false,
        }
    }

    /// Route editors stop appending waypoints after a terminal action
    /// (codes 0 and 1).
    pub fn ends_route(&self) -> bool {
        matches!(self, WaypointAction::StopHere | WaypointAction::RunStraight)
    }

    /// Decode the wire integer action code.
    pub fn from_code(code: u8) -> Option<Self> {
        match code {
            0 => Some(WaypointAction::StopHere),
            1 => Some(WaypointAction::RunStraight),
            2 => Some(WaypointAction::BreakDown),
            3 => Some(WaypointAction::SprintThrough),
            _ => None,
        }
    }
}

/// A route target with its action.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Waypoint {
    pub pos: Vec2,
    pub action: WaypointAction,
}

/// Remaining route, consumed from the front.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Route {
    waypoints: VecDeque<Waypoint>,
}

impl Route {
    pub fn new(waypoints: impl IntoIterator<Item = Waypoint>) -> Self {
        Self { waypoints: waypoints.into_iter().collect() }
    }

    /// Single-target route used after the ball is thrown.
    pub fn to_point(pos: Vec2) -> Self {
        Self::new([Waypoint { pos, action: WaypointAction::StopHere }])
    }

    pub fn head(&self) -> Option<&Waypoint> {
        self.waypoints.front()
    }

    pub fn len(&self) -> usize {
        self.waypoints.len()
    }

    pub fn is_empty(&self) -> bool {
        self.waypoints.is_empty()
    }

    /// Drop the head waypoint if `pos` is inside the arrival radius.
    /// Returns true when a waypoint was consumed.
    pub fn consume_if_reached(&mut self, pos: Vec2) -> bool {
        match self.waypoints.front() {
            Some(head) if pos.distance_to(head.pos) < motion::WAYPOINT_RADIUS => {
                self.waypoints.pop_front();
                true
            }
            _ => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_braking_parity_matches_action_codes() {
        // Even codes brake, odd codes do not
        assert!(WaypointAction::StopHere.allows_braking());
        assert!(!WaypointAction::RunStraight.allows_braking());
        assert!(WaypointAction::BreakDown.allows_braking());
        assert!(!WaypointAction::SprintThrough.allows_braking());
    }

    #[test]
    fn test_terminal_actions_end_route() {
        assert!(WaypointAction::StopHere.ends_route());
        assert!(WaypointAction::RunStraight.ends_route());
        assert!(!WaypointAction::BreakDown.ends_route());
        assert!(!WaypointAction::SprintThrough.ends_route());
    }

    #[test]
    fn test_action_code_round_trip() {
        for code in 0u8..4 {
            let action = WaypointAction::from_code(code).unwrap();
            let braking = code % 2 == 0;
            assert_eq!(action.allows_braking(), braking, "code {}", code);
        }
        assert!(WaypointAction::from_code(4).is_none());
    }

    #[test]
    fn test_consume_requires_proximity() {
        let mut route = Route::new([
            Waypoint { pos: Vec2::new(0.0, 0.0), action: WaypointAction::SprintThrough },
            Waypoint { pos: Vec2::new(50.0, 0.0), action: WaypointAction::StopHere },
        ]);

        assert!(!route.consume_if_reached(Vec2::new(10.0, 0.0)));
        assert_eq!(route.len(), 2);

        assert!(route.consume_if_reached(Vec2::new(3.0, 2.0)));
        assert_eq!(route.len(), 1);
        assert_eq!(route.head().unwrap().pos, Vec2::new(50.0, 0.0));
    }

    #[test]
    fn test_collapsed_route_is_single_stop() {
        let route = Route::to_point(Vec2::new(120.0, 330.0));
        assert_eq!(route.len(), 1);
        assert_eq!(route.head().unwrap().action, WaypointAction::StopHere);
    }
}
