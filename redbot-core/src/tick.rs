// SPDX-License-Identifier: MIT
// © 2025–2026 Christopher Liu

//! Millisecond countdown driven by the 1 ms tick interrupt.
//!
//! The interrupt is the only code that decrements; the foreground only arms and polls. On a single
//! core the interrupt cannot itself be preempted by the foreground, so its load/store pair needs no
//! read-modify-write loop.

use core::sync::atomic::{AtomicU32, Ordering};

pub struct Countdown {
    remaining: AtomicU32,
}

impl Countdown {
    pub const fn new() -> Self {
        Self {
            remaining: AtomicU32::new(0),
        }
    }

    /// Tick handler body. Decrements by one when nonzero, nothing else.
    #[inline]
    pub fn on_tick(&self) {
        let ms = self.remaining.load(Ordering::Acquire);
        if ms > 0 {
            self.remaining.store(ms - 1, Ordering::Release);
        }
    }

    /// Arm the countdown with `ms` ticks.
    #[inline]
    pub fn start(&self, ms: u32) {
        self.remaining.store(ms, Ordering::Release);
    }

    #[inline]
    pub fn cancel(&self) {
        self.start(0);
    }

    #[inline]
    pub fn remaining(&self) -> u32 {
        self.remaining.load(Ordering::Acquire)
    }

    #[inline]
    pub fn is_expired(&self) -> bool {
        self.remaining() == 0
    }

    /// Block for `ms` ticks. Requires the tick interrupt to be running.
    pub fn wait(&self, ms: u32) {
        self.start(ms);
        while !self.is_expired() {
            core::hint::spin_loop();
        }
    }
}

impl Default for Countdown {
    fn default() -> Self {
        Self::new()
    }
}
