// SPDX-License-Identifier: MIT
// © 2025–2026 Christopher Liu

//! # Device-Specific Drivers
//!
//! This module contains device-specific drivers that sit above the raw `hw/` layer and below the
//! control logic in `redbot-core`.
//!
//! ## Existing drivers
//!
//! - [`tb6612`] – Toshiba TB6612FNG dual H-bridge (direction inputs)

pub mod tb6612;

pub use tb6612::{MotorInputs, Tb6612, Winding};
