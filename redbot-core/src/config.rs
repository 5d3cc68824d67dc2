// SPDX-License-Identifier: MIT
// © 2025–2026 Christopher Liu

//! Compile-time tuning for the line follower.
//!
//! The constants mirror the values the robot was calibrated with. [`Config`] bundles them into a
//! single value handed to [`Robot::new`](crate::Robot::new), so a variant build can override a
//! field without touching the control code:
//!
//! ```ignore
//! let cfg = Config::default()
//!     .with_threshold(550)
//!     .with_lost_line(LostLinePolicy::Stop);
//! ```

use crate::decision::LostLinePolicy;
use crate::diagnostics::DiagnosticFormat;
use crate::motion::MotionTable;

/// Raw ADC value above which a sensor is considered to be over the line.
pub const SENSOR_THRESHOLD: u16 = 600;

/// Wheel/turn geometry parameter feeding the straight-line duty formula.
pub const DIAMETER: u16 = 25;

/// Largest value a 10-bit conversion can produce.
pub const ADC_MAX: u16 = 1023;

/// Period of the clock tick interrupt.
pub const TICK_INTERVAL_MS: u32 = 1;

/// PWM counter top; the counter runs 0..=PWM_TOP each period.
pub const PWM_TOP: u8 = 255;

/// Diagnostic serial port baud rate (8N1).
pub const DIAGNOSTIC_BAUD: u32 = 9_600;

/// Runtime view of the tuning constants.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Config {
    /// Sensor threshold (T).
    pub threshold: u16,
    /// Geometry parameter used to derive `motions.straight`.
    pub diameter: u16,
    /// What to do when the line is lost before any side has been seen.
    pub lost_line: LostLinePolicy,
    /// Diagnostic line layout.
    pub diagnostics: DiagnosticFormat,
    /// Duty cycles for every motor behavior.
    pub motions: MotionTable,
}

impl Config {
    pub fn new() -> Self {
        Self {
            threshold: SENSOR_THRESHOLD,
            diameter: DIAMETER,
            lost_line: LostLinePolicy::Hold,
            diagnostics: DiagnosticFormat::Readings,
            motions: MotionTable::with_diameter(DIAMETER),
        }
    }

    /// Override the sensor threshold.
    pub fn with_threshold(mut self, threshold: u16) -> Self {
        self.threshold = threshold;
        self
    }

    /// Override the geometry parameter and rebuild the straight-line duty.
    pub fn with_diameter(mut self, diameter: u16) -> Self {
        self.diameter = diameter;
        self.motions = self.motions.recalibrated(diameter);
        self
    }

    /// Choose the lost-line behavior used while no side has been remembered.
    pub fn with_lost_line(mut self, policy: LostLinePolicy) -> Self {
        self.lost_line = policy;
        self
    }

    /// Choose the diagnostic line layout.
    pub fn with_diagnostics(mut self, format: DiagnosticFormat) -> Self {
        self.diagnostics = format;
        self
    }

    /// Replace the whole duty table.
    pub fn with_motions(mut self, motions: MotionTable) -> Self {
        self.motions = motions;
        self
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::motion::DutyCycle;

    #[test]
    fn default_matches_constants() {
        let cfg = Config::default();
        assert_eq!(cfg.threshold, 600);
        assert_eq!(cfg.diameter, 25);
        assert_eq!(cfg.lost_line, LostLinePolicy::Hold);
        assert_eq!(cfg.diagnostics, DiagnosticFormat::Readings);
        assert_eq!(cfg.motions, MotionTable::default());
    }

    #[test]
    fn diameter_override_only_touches_straight() {
        let base = Config::default();
        let cfg = base.with_diameter(10);

        assert_eq!(cfg.diameter, 10);
        // 130 * 0.1685 * ln(20) + 0.1547 = 65.78
        assert_eq!(cfg.motions.straight, DutyCycle::new(66, 130));
        assert_eq!(cfg.motions.right, base.motions.right);
        assert_eq!(cfg.motions.reverse, base.motions.reverse);
    }
}
