//! Down-and-distance bookkeeping for a drive
//!
//! Consumes one `PlayOutcome` per snap and advances the yard line, down
//! count and first-down marker. The drive (and game) ends on an
//! interception, a failed final down, or a touchdown.

use serde::{Deserialize, Serialize};

use crate::engine::ball::PlayOutcome;
use crate::engine::physics_constants::field;

/// Drive status after applying a play outcome.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DriveStatus {
    /// Next snap coming up
    DriveOn,
    /// Crossed the end-zone line: game won
    Touchdown,
    /// Used the final down without converting: game lost
    TurnoverOnDowns,
    /// Defense came down with the ball: game lost
    Interception,
}

impl DriveStatus {
    pub fn is_over(&self) -> bool {
        !matches!(self, DriveStatus::DriveOn)
    }
}

/// Yard line, down and first-down marker for the current drive.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DriveState {
    pub yard_line: f32,
    pub down: u8,
    pub first_down: f32,
}

impl Default for DriveState {
    fn default() -> Self {
        Self::new()
    }
}

impl DriveState {
    pub fn new() -> Self {
        Self {
            yard_line: field::STARTING_YD,
            down: 1,
            first_down: field::STARTING_YD + field::FIRST_DOWN_YD,
        }
    }

    /// Yards still needed for a first down.
    pub fn to_go(&self) -> f32 {
        self.first_down - self.yard_line
    }

    /// Yard line as shown on a scoreboard: mirrored around midfield so it
    /// counts down toward the goal line on the far side.
    pub fn display_yard_line(&self) -> f32 {
        let midfield = field::END_ZONE_YD / 2.0;
        if self.yard_line > midfield {
            field::END_ZONE_YD - self.yard_line
        } else {
            self.yard_line
        }
    }

    /// Fold one play outcome into the drive.
    pub fn apply(&mut self, outcome: PlayOutcome) -> DriveStatus {
        if let PlayOutcome::Interception = outcome {
            return DriveStatus::Interception;
        }

        if let PlayOutcome::Catch { yards } = outcome {
            self.yard_line += yards;
        }

        // Strictly past the marker resets the downs; a catch exactly on
        // the marker does not convert
        if self.yard_line > self.first_down {
            self.first_down = (self.yard_line + field::FIRST_DOWN_YD).min(field::END_ZONE_YD);
            self.down = 1;
        } else if self.down == field::DOWNS {
            return DriveStatus::TurnoverOnDowns;
        } else {
            self.down += 1;
        }

        if self.yard_line > field::END_ZONE_YD {
            return DriveStatus::Touchdown;
        }
        DriveStatus::DriveOn
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_opening_state() {
        let drive = DriveState::new();
        assert_eq!(drive.yard_line, 75.0);
        assert_eq!(drive.down, 1);
        assert_eq!(drive.first_down, 85.0);
        assert_eq!(drive.to_go(), 10.0);
    }

    #[test]
    fn test_long_gain_resets_downs_and_moves_marker() {
        let mut drive = DriveState::new();
        drive.down = 2;
        let status = drive.apply(PlayOutcome::Catch { yards: 12.0 });

        assert_eq!(status, DriveStatus::DriveOn);
        assert_eq!(drive.yard_line, 87.0);
        assert_eq!(drive.down, 1);
        // min(87 + 10, 110)
        assert_eq!(drive.first_down, 97.0);
    }

    #[test]
    fn test_short_gain_burns_a_down() {
        let mut drive = DriveState::new();
        let status = drive.apply(PlayOutcome::Catch { yards: 3.0 });

        assert_eq!(status, DriveStatus::DriveOn);
        assert_eq!(drive.yard_line, 78.0);
        assert_eq!(drive.down, 2);
        assert_eq!(drive.first_down, 85.0, "marker untouched on a short gain");
    }

    #[test]
    fn test_incompletion_burns_a_down() {
        let mut drive = DriveState::new();
        assert_eq!(drive.apply(PlayOutcome::Incomplete), DriveStatus::DriveOn);
        assert_eq!(drive.down, 2);
        assert_eq!(drive.yard_line, 75.0);
    }

    #[test]
    fn test_turnover_on_final_down() {
        let mut drive = DriveState::new();
        drive.down = field::DOWNS;
        let status = drive.apply(PlayOutcome::Incomplete);
        assert_eq!(status, DriveStatus::TurnoverOnDowns);
        assert!(status.is_over());
    }

    #[test]
    fn test_interception_ends_the_game_immediately() {
        let mut drive = DriveState::new();
        drive.down = 2;
        let status = drive.apply(PlayOutcome::Interception);
        assert_eq!(status, DriveStatus::Interception);
        // Bookkeeping untouched
        assert_eq!(drive.down, 2);
        assert_eq!(drive.yard_line, 75.0);
    }

    #[test]
    fn test_touchdown_past_end_zone() {
        let mut drive = DriveState::new();
        drive.yard_line = 105.0;
        drive.first_down = field::END_ZONE_YD;
        let status = drive.apply(PlayOutcome::Catch { yards: 8.0 });
        assert_eq!(status, DriveStatus::Touchdown);
    }

    #[test]
    fn test_marker_never_passes_end_zone() {
        let mut drive = DriveState::new();
        drive.yard_line = 102.0;
        drive.first_down = 104.0;
        drive.apply(PlayOutcome::Catch { yards: 4.0 });
        assert_eq!(drive.first_down, field::END_ZONE_YD);
    }

    #[test]
    fn test_display_yard_line_mirrors_at_midfield() {
        let mut drive = DriveState::new();
        drive.yard_line = 75.0;
        assert_eq!(drive.display_yard_line(), 35.0);
        drive.yard_line = 40.0;
        assert_eq!(drive.display_yard_line(), 40.0);
    }

    #[test]
    fn test_exactly_on_the_marker_does_not_convert() {
        let mut drive = DriveState::new();
        let status = drive.apply(PlayOutcome::Catch { yards: 10.0 });
        assert_eq!(status, DriveStatus::DriveOn);
        assert_eq!(drive.down, 2, "landing exactly on the marker burns the down");
    }
}
