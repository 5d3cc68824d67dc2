// SPDX-License-Identifier: MIT
// © 2025–2026 Christopher Liu

//! # RedBot Core
//!
//! Hardware-independent half of the RedBot line follower firmware. Everything in here is `no_std`,
//! allocation-free, and runs on the host for testing; the `redbot` firmware crate binds it to the
//! STM32F7 peripherals.
//!
//! ## Crate Structure
//!
//! | Module | Purpose |
//! | ------ | -------- |
//! | [`config`] | Compile-time tuning (threshold, geometry, duty table) |
//! | [`sensors`] | Three-channel reflectance sensor acquisition |
//! | [`motion`] | Motor behaviors, duty-cycle table, polarity actuation |
//! | [`pwm`] | Tear-free duty-cycle cell shared with the PWM interrupt |
//! | [`tick`] | Millisecond countdown driven by the tick interrupt |
//! | [`runtime`] | Interrupt-side shared state and event dispatch |
//! | [`decision`] | Line classification and last-known-side recovery |
//! | [`diagnostics`] | One-line-per-iteration serial output |
//! | [`robot`] | The foreground control loop |
//!
//! ## License
//!
//! Licensed under the **MIT License**.
//! See the `LICENSE` file in the repository root for full terms.

#![cfg_attr(not(test), no_std)]

pub mod config;
pub mod decision;
pub mod diagnostics;
pub mod motion;
pub mod pwm;
pub mod robot;
pub mod runtime;
pub mod sensors;
pub mod tick;

pub use config::Config;
pub use robot::Robot;
