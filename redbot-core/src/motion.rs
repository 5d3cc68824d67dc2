// SPDX-License-Identifier: MIT
// © 2025–2026 Christopher Liu

//! Motor behaviors and their actuation.
//!
//! Every behavior the robot can perform is a [`Motion`]. A [`MotionTable`] maps each one to a
//! polarity and a duty-cycle pair, and an [`Actuator`] applies the result: polarity goes straight
//! to the H-bridge pins, duty cycles are published to the [`DutyCell`] that the PWM interrupt
//! copies into the compare registers on its next cycle boundary.
//!
//! The left motor is physically faster than the right one, which is why every table entry is
//! asymmetric.

use crate::pwm::DutyCell;

/// PWM duty cycles for the two motors, as a fraction of [`PWM_TOP`](crate::config::PWM_TOP).
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct DutyCycle {
    pub left: u8,
    pub right: u8,
}

impl DutyCycle {
    pub const ZERO: Self = Self::new(0, 0);

    #[inline]
    pub const fn new(left: u8, right: u8) -> Self {
        Self { left, right }
    }

    /// Pack both channels into one word, left in the high byte.
    #[inline]
    pub const fn pack(self) -> u16 {
        ((self.left as u16) << 8) | self.right as u16
    }

    #[inline]
    pub const fn unpack(word: u16) -> Self {
        Self::new((word >> 8) as u8, word as u8)
    }
}

/// Direction the H-bridge drives both motors in.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Polarity {
    /// All control pins low; the bridge coasts.
    Off,
    Forward,
    Reverse,
}

/// Named motor behaviors.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Motion {
    Stop,
    /// Forward polarity without touching the duty cycles.
    Go,
    Reverse,
    Straight,
    SlowRight,
    Right,
    SlowLeft,
    Left,
}

impl Motion {
    pub const ALL: [Motion; 8] = [
        Motion::Stop,
        Motion::Go,
        Motion::Reverse,
        Motion::Straight,
        Motion::SlowRight,
        Motion::Right,
        Motion::SlowLeft,
        Motion::Left,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Motion::Stop => "stop",
            Motion::Go => "go",
            Motion::Reverse => "reverse",
            Motion::Straight => "straight",
            Motion::SlowRight => "slow_right",
            Motion::Right => "right",
            Motion::SlowLeft => "slow_left",
            Motion::Left => "left",
        }
    }

    /// Bridge polarity this behavior drives.
    pub fn polarity(self) -> Polarity {
        match self {
            Motion::Stop => Polarity::Off,
            Motion::Reverse => Polarity::Reverse,
            _ => Polarity::Forward,
        }
    }
}

/// Left duty cycle for driving straight, derived from the turn geometry.
///
/// `round(130 * 0.1685 * ln(2 * diameter) + 0.1547)`, saturated to the PWM range.
/// Evaluated in `f64`: several diameters land within 0.001 of a rounding boundary.
pub fn straight_left_duty(diameter: u16) -> u8 {
    let raw = 130.0 * 0.1685 * libm::log(2.0 * f64::from(diameter)) + 0.1547;
    // diameter 0 gives ln(0) = -inf, which the clamp takes to 0
    libm::round(raw.clamp(0.0, 255.0)) as u8
}

/// What a single actuation writes: the pin polarity and, optionally, new duty cycles.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Command {
    pub polarity: Polarity,
    pub duty: Option<DutyCycle>,
}

/// Duty cycles for every behavior that sets them.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct MotionTable {
    pub reverse: DutyCycle,
    pub straight: DutyCycle,
    pub slow_right: DutyCycle,
    pub right: DutyCycle,
    pub slow_left: DutyCycle,
    pub left: DutyCycle,
}

impl MotionTable {
    /// The calibrated table, with the straight-line entry derived from `diameter`.
    pub fn with_diameter(diameter: u16) -> Self {
        Self {
            reverse: DutyCycle::new(60, 67),
            straight: DutyCycle::new(straight_left_duty(diameter), 130),
            slow_right: DutyCycle::new(32, 105),
            right: DutyCycle::new(19, 130),
            slow_left: DutyCycle::new(99, 35),
            left: DutyCycle::new(119, 20),
        }
    }

    /// Same table with the straight-line left duty recomputed for a new geometry.
    pub fn recalibrated(mut self, diameter: u16) -> Self {
        self.straight.left = straight_left_duty(diameter);
        self
    }

    /// Resolve a behavior into the pin and duty writes it performs.
    pub fn command(&self, motion: Motion) -> Command {
        let duty = match motion {
            Motion::Stop => Some(DutyCycle::ZERO),
            Motion::Go => None,
            Motion::Reverse => Some(self.reverse),
            Motion::Straight => Some(self.straight),
            Motion::SlowRight => Some(self.slow_right),
            Motion::Right => Some(self.right),
            Motion::SlowLeft => Some(self.slow_left),
            Motion::Left => Some(self.left),
        };

        Command {
            polarity: motion.polarity(),
            duty,
        }
    }
}

impl Default for MotionTable {
    fn default() -> Self {
        Self::with_diameter(crate::config::DIAMETER)
    }
}

/// Sink for H-bridge polarity writes.
pub trait PolarityOutput {
    fn set_polarity(&mut self, polarity: Polarity);
}

/// Applies [`Motion`]s to the polarity pins and the shared duty cell.
pub struct Actuator<'a, P> {
    pins: P,
    duty: &'a DutyCell,
    table: MotionTable,
}

impl<'a, P: PolarityOutput> Actuator<'a, P> {
    pub fn new(pins: P, duty: &'a DutyCell, table: MotionTable) -> Self {
        Self { pins, duty, table }
    }

    /// Set polarity first, then publish the new duty pair in one write.
    pub fn apply(&mut self, motion: Motion) {
        let command = self.table.command(motion);
        self.pins.set_polarity(command.polarity);
        if let Some(duty) = command.duty {
            self.duty.commit(duty);
        }
    }

    #[inline]
    pub fn stop(&mut self) {
        self.apply(Motion::Stop);
    }

    #[inline]
    pub fn go(&mut self) {
        self.apply(Motion::Go);
    }

    #[inline]
    pub fn reverse(&mut self) {
        self.apply(Motion::Reverse);
    }

    #[inline]
    pub fn straight(&mut self) {
        self.apply(Motion::Straight);
    }

    #[inline]
    pub fn slow_right(&mut self) {
        self.apply(Motion::SlowRight);
    }

    #[inline]
    pub fn right(&mut self) {
        self.apply(Motion::Right);
    }

    #[inline]
    pub fn slow_left(&mut self) {
        self.apply(Motion::SlowLeft);
    }

    #[inline]
    pub fn left(&mut self) {
        self.apply(Motion::Left);
    }

    /// Duty pair most recently committed.
    #[inline]
    pub fn duty(&self) -> DutyCycle {
        self.duty.load()
    }

    pub fn table(&self) -> &MotionTable {
        &self.table
    }

    pub fn pins(&self) -> &P {
        &self.pins
    }

    pub fn free(self) -> P {
        self.pins
    }
}
