// SPDX-License-Identifier: MIT
// © 2025–2026 Christopher Liu

//! TB6612FNG dual H-bridge, direction inputs only.
//!
//! Speed comes from the PWMA/PWMB inputs, which are driven by the PWM timer directly; this driver
//! only owns the IN1/IN2 pair of each channel. Per the datasheet truth table:
//!
//! | IN1 | IN2 | Output |
//! | --- | --- | ------ |
//! | H | L | CW |
//! | L | H | CCW |
//! | L | L | Stop (coast) |
//!
//! The two motors face opposite directions on the chassis, so "forward" is CW on one and CCW on
//! the other. [`Winding`] records which.

use redbot_core::motion::{Polarity, PolarityOutput};
use stm32f7xx_hal::gpio::{self, Output, PinState, PushPull};

/// Which input goes high to drive a motor forward.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum Winding {
    /// IN1 high for forward.
    Normal,
    /// IN2 high for forward.
    Swapped,
}

/// Anything that can set one motor's direction.
pub trait MotorDirection {
    fn drive(&mut self, polarity: Polarity);
}

/// IN1/IN2 pair of one bridge channel.
pub struct MotorInputs<const IN1_P: char, const IN1_N: u8, const IN2_P: char, const IN2_N: u8> {
    in1: gpio::Pin<IN1_P, IN1_N, Output<PushPull>>,
    in2: gpio::Pin<IN2_P, IN2_N, Output<PushPull>>,
    winding: Winding,
}

impl<const IN1_P: char, const IN1_N: u8, const IN2_P: char, const IN2_N: u8>
    MotorInputs<IN1_P, IN1_N, IN2_P, IN2_N>
{
    /// Take both inputs and leave the channel coasting.
    pub fn new(
        in1: gpio::Pin<IN1_P, IN1_N, Output<PushPull>>,
        in2: gpio::Pin<IN2_P, IN2_N, Output<PushPull>>,
        winding: Winding,
    ) -> Self {
        let mut inputs = Self { in1, in2, winding };
        inputs.drive(Polarity::Off);
        inputs
    }
}

impl<const IN1_P: char, const IN1_N: u8, const IN2_P: char, const IN2_N: u8> MotorDirection
    for MotorInputs<IN1_P, IN1_N, IN2_P, IN2_N>
{
    fn drive(&mut self, polarity: Polarity) {
        let (in1, in2) = match (polarity, self.winding) {
            (Polarity::Off, _) => (PinState::Low, PinState::Low),
            (Polarity::Forward, Winding::Normal) | (Polarity::Reverse, Winding::Swapped) => {
                (PinState::High, PinState::Low)
            }
            (Polarity::Forward, Winding::Swapped) | (Polarity::Reverse, Winding::Normal) => {
                (PinState::Low, PinState::High)
            }
        };

        // Drop the active input first so both are never high together.
        if in1 == PinState::Low {
            self.in1.set_state(in1);
            self.in2.set_state(in2);
        } else {
            self.in2.set_state(in2);
            self.in1.set_state(in1);
        }
    }
}

/// Both channels of the bridge, driven together.
pub struct Tb6612<L, R> {
    left: L,
    right: R,
}

impl<L: MotorDirection, R: MotorDirection> Tb6612<L, R> {
    pub fn new(left: L, right: R) -> Self {
        Self { left, right }
    }
}

impl<L: MotorDirection, R: MotorDirection> PolarityOutput for Tb6612<L, R> {
    fn set_polarity(&mut self, polarity: Polarity) {
        self.left.drive(polarity);
        self.right.drive(polarity);
    }
}
