// SPDX-License-Identifier: MIT
// © 2025–2026 Christopher Liu

//! Interrupt-side state and the two hardware event sources.
//!
//! Everything the interrupt handlers touch lives in one [`SharedState`], meant to be placed in a
//! single `static`. The foreground borrows `duty` for its [`Actuator`](crate::motion::Actuator)
//! and may arm `countdown`; the handlers only call [`SharedState::on_tick`] and
//! [`SharedState::on_pwm_refresh`].
//!
//! ```ignore
//! static SHARED: SharedState = SharedState::new();
//!
//! #[interrupt]
//! fn TIM6_DAC() {
//!     SHARED.on_tick();
//! }
//! ```

use crate::pwm::{self, CompareOutputs, DutyCell};
use crate::tick::Countdown;

/// Hardware events that preempt the control loop.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Event {
    /// 1 ms tick. Handler: one atomic load, at most one store.
    Tick,
    /// PWM cycle boundary. Handler: one atomic load, two compare-register writes.
    PwmRefresh,
}

pub struct SharedState {
    pub duty: DutyCell,
    pub countdown: Countdown,
}

impl SharedState {
    pub const fn new() -> Self {
        Self {
            duty: DutyCell::new(),
            countdown: Countdown::new(),
        }
    }

    #[inline]
    pub fn on_tick(&self) {
        self.countdown.on_tick();
    }

    #[inline]
    pub fn on_pwm_refresh<C: CompareOutputs>(&self, outputs: &mut C) {
        pwm::refresh(&self.duty, outputs);
    }

    /// Route an event to its handler body.
    pub fn dispatch<C: CompareOutputs>(&self, event: Event, outputs: &mut C) {
        match event {
            Event::Tick => self.on_tick(),
            Event::PwmRefresh => self.on_pwm_refresh(outputs),
        }
    }
}

impl Default for SharedState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::motion::DutyCycle;

    #[derive(Default)]
    struct Compare {
        current: DutyCycle,
        writes: usize,
    }

    impl CompareOutputs for Compare {
        fn set_compare(&mut self, duty: DutyCycle) {
            self.current = duty;
            self.writes += 1;
        }
    }

    #[test]
    fn events_are_independent() {
        let shared = SharedState::new();
        let mut compare = Compare::default();

        shared.countdown.start(2);
        shared.duty.commit(DutyCycle::new(32, 105));

        shared.dispatch(Event::Tick, &mut compare);
        assert_eq!(shared.countdown.remaining(), 1);
        assert_eq!(compare.writes, 0);

        shared.dispatch(Event::PwmRefresh, &mut compare);
        assert_eq!(shared.countdown.remaining(), 1);
        assert_eq!(compare.current, DutyCycle::new(32, 105));
        assert_eq!(compare.writes, 1);
    }

    #[test]
    fn interleaved_event_stream() {
        let shared = SharedState::new();
        let mut compare = Compare::default();
        shared.countdown.start(3);

        // Several PWM periods elapse per millisecond.
        let stream = [
            Event::PwmRefresh,
            Event::PwmRefresh,
            Event::Tick,
            Event::PwmRefresh,
            Event::Tick,
            Event::Tick,
            Event::Tick,
            Event::PwmRefresh,
        ];

        for (i, event) in stream.into_iter().enumerate() {
            if i == 3 {
                shared.duty.commit(DutyCycle::new(19, 130));
            }
            shared.dispatch(event, &mut compare);
        }

        assert!(shared.countdown.is_expired());
        assert_eq!(compare.writes, 4);
        assert_eq!(compare.current, DutyCycle::new(19, 130));
    }
}
