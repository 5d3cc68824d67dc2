// SPDX-License-Identifier: MIT
// © 2025–2026 Christopher Liu

//! Duty-cycle hand-off between the control loop and the PWM interrupt.
//!
//! The control loop is the only writer and the PWM cycle-boundary interrupt the only reader. Both
//! 8-bit channels travel in one `AtomicU16`, so the interrupt can never observe a left value from
//! one command paired with a right value from another.

use core::sync::atomic::{AtomicU16, Ordering};

use crate::motion::DutyCycle;

/// Duty pair shared with interrupt context.
pub struct DutyCell {
    packed: AtomicU16,
}

impl DutyCell {
    pub const fn new() -> Self {
        Self {
            packed: AtomicU16::new(0),
        }
    }

    /// Publish a new pair. Takes effect at the next PWM cycle boundary.
    #[inline]
    pub fn commit(&self, duty: DutyCycle) {
        self.packed.store(duty.pack(), Ordering::Release);
    }

    /// Most recently committed pair.
    #[inline]
    pub fn load(&self) -> DutyCycle {
        DutyCycle::unpack(self.packed.load(Ordering::Acquire))
    }
}

impl Default for DutyCell {
    fn default() -> Self {
        Self::new()
    }
}

/// The two compare thresholds of a dual-channel PWM timer.
pub trait CompareOutputs {
    fn set_compare(&mut self, duty: DutyCycle);
}

/// Cycle-boundary handler body: copy the live pair into the compare registers.
#[inline]
pub fn refresh<C: CompareOutputs>(cell: &DutyCell, outputs: &mut C) {
    outputs.set_compare(cell.load());
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;
    use std::thread;

    #[derive(Default)]
    struct Compare {
        current: DutyCycle,
    }

    impl CompareOutputs for Compare {
        fn set_compare(&mut self, duty: DutyCycle) {
            self.current = duty;
        }
    }

    #[test]
    fn pack_keeps_channels_apart() {
        let duty = DutyCycle::new(0xAB, 0x01);
        assert_eq!(duty.pack(), 0xAB01);
        assert_eq!(DutyCycle::unpack(0xAB01), duty);
    }

    #[test]
    fn compare_tracks_last_commit_before_boundary() {
        let cell = DutyCell::new();
        let mut compare = Compare::default();

        // Per cycle: the pairs committed before that cycle's boundary.
        let schedule: [&[(u8, u8)]; 6] = [
            &[(86, 130)],
            &[],
            &[(32, 105), (19, 130)],
            &[(0, 0)],
            &[],
            &[(119, 20), (99, 35), (60, 67)],
        ];

        let mut expected = DutyCycle::ZERO;
        for commits in schedule {
            let previous = expected;
            for &(l, r) in commits {
                expected = DutyCycle::new(l, r);
                cell.commit(expected);
            }
            // Until the boundary the outputs still hold the previous pair.
            assert_eq!(compare.current, previous);

            refresh(&cell, &mut compare);
            assert_eq!(compare.current, expected);
        }
    }

    #[test]
    fn concurrent_reader_never_sees_torn_pair() {
        let cell = Arc::new(DutyCell::new());
        let pairs = [DutyCycle::new(19, 130), DutyCycle::new(119, 20)];
        cell.commit(pairs[0]);

        let writer = {
            let cell = Arc::clone(&cell);
            thread::spawn(move || {
                for i in 0..50_000 {
                    cell.commit(pairs[i % 2]);
                }
            })
        };

        let mut compare = Compare::default();
        for _ in 0..50_000 {
            refresh(&cell, &mut compare);
            assert!(pairs.contains(&compare.current));
        }

        writer.join().unwrap();
    }
}
