// SPDX-License-Identifier: MIT
// © 2025–2026 Christopher Liu

//! The foreground control loop.
//!
//! [`Robot`] owns everything the loop touches: the sensor array, the actuator, the decision engine
//! and the diagnostic sink. The only state it shares with interrupt context is the duty cell it
//! borrows from a [`SharedState`](crate::runtime::SharedState).
//!
//! Typical usage pattern, after the timers and the diagnostic port are up:
//!
//! ```ignore
//! let robot = Robot::new(sensors, bridge, &SHARED.duty, usart, &Config::default());
//! robot.run()
//! ```

use core::fmt::Write;

use crate::config::Config;
use crate::decision::{DirectionEngine, LastDirection};
use crate::diagnostics::{self, DiagnosticFormat};
use crate::motion::{Actuator, DutyCycle, Motion, PolarityOutput};
use crate::pwm::DutyCell;
use crate::sensors::{AdcRead, LineSensors, SensorReading};

pub struct Robot<'a, A, P, W> {
    sensors: LineSensors<A>,
    actuator: Actuator<'a, P>,
    engine: DirectionEngine,
    diag: W,
    format: DiagnosticFormat,
    reading: SensorReading,
}

impl<'a, A, P, W> Robot<'a, A, P, W>
where
    A: AdcRead,
    P: PolarityOutput,
    W: Write,
{
    pub fn new(
        sensors: LineSensors<A>,
        pins: P,
        duty: &'a DutyCell,
        diag: W,
        config: &Config,
    ) -> Self {
        Self {
            sensors,
            actuator: Actuator::new(pins, duty, config.motions),
            engine: DirectionEngine::from_config(config),
            diag,
            format: config.diagnostics,
            reading: SensorReading::default(),
        }
    }

    /// Initial motion state: forward polarity, straight-line duty.
    pub fn start(&mut self) {
        self.actuator.go();
        self.actuator.straight();
    }

    /// One iteration: read, decide, actuate, report. Returns the motion applied, if any.
    pub fn step(&mut self) -> Option<Motion> {
        self.reading = self.sensors.read();

        let motion = self.engine.decide(self.reading);
        if let Some(motion) = motion {
            self.actuator.apply(motion);
        }

        // Diagnostics are observational; a failed write must not stall control.
        let _ = diagnostics::write_line(&mut self.diag, self.format, self.reading, motion);

        motion
    }

    /// Start moving and run the loop forever.
    pub fn run(mut self) -> ! {
        self.start();
        loop {
            self.step();
        }
    }

    /// Reading taken by the most recent [`step`](Self::step).
    #[inline]
    pub fn reading(&self) -> SensorReading {
        self.reading
    }

    #[inline]
    pub fn last_direction(&self) -> LastDirection {
        self.engine.last_direction()
    }

    /// Duty pair most recently committed for the PWM interrupt.
    #[inline]
    pub fn duty(&self) -> DutyCycle {
        self.actuator.duty()
    }

    pub fn actuator(&self) -> &Actuator<'a, P> {
        &self.actuator
    }

    pub fn diagnostics(&self) -> &W {
        &self.diag
    }
}
