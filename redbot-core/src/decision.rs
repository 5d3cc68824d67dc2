// SPDX-License-Identifier: MIT
// © 2025–2026 Christopher Liu

//! Direction decision engine.
//!
//! Each sensor is classified as on the line (`reading > threshold`) or off it, and the resulting
//! triple selects a [`Motion`]:
//!
//! ```text
//!  left  middle right | motion      | remembers
//!  off   on     off   | straight    | -
//!  on    on     off   | slow_right  | Right
//!  on    off    off   | right       | Right
//!  off   on     on    | slow_left   | Left
//!  off   off    on    | left        | Left
//!  off   off    off   | recover     | -
//!  anything else      | straight    | -
//! ```
//!
//! Recovery turns toward the last side the line was seen on. Before any side has been seen the
//! [`LostLinePolicy`] decides.

use crate::config::Config;
use crate::motion::Motion;
use crate::sensors::SensorReading;

/// Side the line was last definitely seen on.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum LastDirection {
    None,
    Left,
    Right,
}

/// Behavior when the line is lost and no side has been remembered yet.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum LostLinePolicy {
    /// Leave the previous actuation in place.
    Hold,
    Stop,
}

/// Per-sensor on-line flags.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct LineState {
    pub left: bool,
    pub middle: bool,
    pub right: bool,
}

impl LineState {
    pub const fn new(left: bool, middle: bool, right: bool) -> Self {
        Self {
            left,
            middle,
            right,
        }
    }

    /// A reading exactly at the threshold counts as off the line.
    pub fn classify(reading: SensorReading, threshold: u16) -> Self {
        Self::new(
            reading.left > threshold,
            reading.middle > threshold,
            reading.right > threshold,
        )
    }
}

pub struct DirectionEngine {
    threshold: u16,
    lost_line: LostLinePolicy,
    last: LastDirection,
}

impl DirectionEngine {
    pub fn new(threshold: u16, lost_line: LostLinePolicy) -> Self {
        Self {
            threshold,
            lost_line,
            last: LastDirection::None,
        }
    }

    pub fn from_config(config: &Config) -> Self {
        Self::new(config.threshold, config.lost_line)
    }

    #[inline]
    pub fn last_direction(&self) -> LastDirection {
        self.last
    }

    #[inline]
    pub fn threshold(&self) -> u16 {
        self.threshold
    }

    /// Classify a reading and pick the next motion. `None` means "leave the motors alone".
    pub fn decide(&mut self, reading: SensorReading) -> Option<Motion> {
        self.decide_state(LineState::classify(reading, self.threshold))
    }

    pub fn decide_state(&mut self, state: LineState) -> Option<Motion> {
        let motion = match (state.left, state.middle, state.right) {
            (false, true, false) => Motion::Straight,
            (true, true, false) => {
                self.last = LastDirection::Right;
                Motion::SlowRight
            }
            (true, false, false) => {
                self.last = LastDirection::Right;
                Motion::Right
            }
            (false, true, true) => {
                self.last = LastDirection::Left;
                Motion::SlowLeft
            }
            (false, false, true) => {
                self.last = LastDirection::Left;
                Motion::Left
            }
            (false, false, false) => return self.recover(),
            _ => Motion::Straight,
        };

        Some(motion)
    }

    fn recover(&self) -> Option<Motion> {
        match (self.last, self.lost_line) {
            (LastDirection::Right, _) => Some(Motion::Right),
            (LastDirection::Left, _) => Some(Motion::Left),
            (LastDirection::None, LostLinePolicy::Hold) => None,
            (LastDirection::None, LostLinePolicy::Stop) => Some(Motion::Stop),
        }
    }
}
