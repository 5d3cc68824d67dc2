// SPDX-License-Identifier: MIT
// © 2025–2026 Christopher Liu

//! # RedBot Firmware
//!
//! STM32F767 bindings for the RedBot line follower. The control logic itself lives in
//! `redbot-core`; this crate provides the peripherals it runs on.
//!
//! ## Crate Structure
//!
//! | Module | Purpose |
//! | ------ | -------- |
//! | [`hw`] | MCU-level wrappers around ADC, USART, timers and the board pin map |
//! | [`drivers`] | Device-level drivers (TB6612FNG motor bridge) |
//!
//! ## Getting Started
//!
//! Build docs:
//!
//! ```bash
//! cargo doc --no-deps --open
//! ```
//!
//! Flash the board (from this directory, so `.cargo/config.toml` selects the target):
//!
//! ```bash
//! cargo run --release
//! ```
//!
//! ## License
//!
//! Licensed under the **MIT License**.
//! See the `LICENSE` file in the repository root for full terms.
//!
//! © 2025–2026 Christopher Liu

#![no_std]

pub mod drivers;
pub mod hw;
