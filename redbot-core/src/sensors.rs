// SPDX-License-Identifier: MIT
// © 2025–2026 Christopher Liu

//! Reflectance sensor acquisition.
//!
//! Three analog channels are converted one after another (left, middle, right) through any
//! [`AdcRead`] implementation. Each conversion busy-waits on the converter; timer interrupts stay
//! live and may preempt the wait.

use crate::config::ADC_MAX;

/// Trait for reading a single channel from an ADC peripheral.
pub trait AdcRead {
    fn read_channel(&mut self, ch: u8) -> u16;
}

/// One poll of the three sensors, each in `0..=ADC_MAX`.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct SensorReading {
    pub left: u16,
    pub middle: u16,
    pub right: u16,
}

impl SensorReading {
    pub const fn new(left: u16, middle: u16, right: u16) -> Self {
        Self {
            left,
            middle,
            right,
        }
    }
}

/// ADC channel numbers the three sensors are wired to.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct SensorChannels {
    pub left: u8,
    pub middle: u8,
    pub right: u8,
}

/// The sensor array bound to a converter.
pub struct LineSensors<A> {
    adc: A,
    channels: SensorChannels,
}

impl<A: AdcRead> LineSensors<A> {
    pub fn new(adc: A, channels: SensorChannels) -> Self {
        Self { adc, channels }
    }

    /// Convert all three channels, in fixed left, middle, right order.
    pub fn read(&mut self) -> SensorReading {
        let left = self.sample(self.channels.left);
        let middle = self.sample(self.channels.middle);
        let right = self.sample(self.channels.right);
        SensorReading::new(left, middle, right)
    }

    #[inline]
    fn sample(&mut self, channel: u8) -> u16 {
        self.adc.read_channel(channel).min(ADC_MAX)
    }

    #[inline]
    pub fn channels(&self) -> SensorChannels {
        self.channels
    }

    pub fn free(self) -> A {
        self.adc
    }
}
