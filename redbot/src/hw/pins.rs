// SPDX-License-Identifier: MIT
// © 2025–2026 Christopher Liu

//! Pin definitions for the RedBot line follower on a NUCLEO-F767ZI.
//!
//! | Signal | Pin | Function |
//! | ------ | --- | -------- |
//! | Left sensor | PA3 (A0) | ADC1_IN3 |
//! | Middle sensor | PC0 (A1) | ADC1_IN10 |
//! | Right sensor | PC3 (A2) | ADC1_IN13 |
//! | Left PWM | PD12 | TIM4_CH1 |
//! | Right PWM | PD13 | TIM4_CH2 |
//! | Left AIN1 / AIN2 | PF12 / PF13 | GPIO |
//! | Right BIN1 / BIN2 | PF14 / PF15 | GPIO |
//! | Diagnostics TX / RX | PD8 / PD9 | USART3 (ST-LINK VCP) |

use redbot_core::sensors::SensorChannels;
use stm32f7xx_hal::{
    gpio::{gpioa, gpioc, gpiod, gpiof, Alternate, Analog, Output, PushPull},
    pac,
    prelude::*,
};

/// ADC1 channel numbers for the sensor pins below.
pub const SENSOR_CHANNELS: SensorChannels = SensorChannels {
    left: 3,
    middle: 10,
    right: 13,
};

/// All board pins. Construct this once at startup using:
///
/// ```ignore
/// let pins = BoardPins::new(dp.GPIOA, dp.GPIOC, dp.GPIOD, dp.GPIOF);
/// ```
pub struct BoardPins {
    pub usart3: Usart3Pins,
    pub sensors: SensorPins,
    pub pwm: PwmPins,
    pub bridge: BridgePins,
}

pub struct Usart3Pins {
    pub tx: gpiod::PD8<Alternate<7>>,
    pub rx: gpiod::PD9<Alternate<7>>,
}

/// Reflectance sensor inputs
pub struct SensorPins {
    pub left: gpioa::PA3<Analog>,
    pub middle: gpioc::PC0<Analog>,
    pub right: gpioc::PC3<Analog>,
}

/// TIM4 PWM outputs
pub struct PwmPins {
    pub left: gpiod::PD12<Alternate<2>>,  // TIM4_CH1
    pub right: gpiod::PD13<Alternate<2>>, // TIM4_CH2
}

/// TB6612FNG direction inputs
pub struct BridgePins {
    pub ain1: gpiof::PF12<Output<PushPull>>,
    pub ain2: gpiof::PF13<Output<PushPull>>,
    pub bin1: gpiof::PF14<Output<PushPull>>,
    pub bin2: gpiof::PF15<Output<PushPull>>,
}

impl BoardPins {
    /// Create all named pins from raw GPIO peripherals.
    pub fn new(gpioa: pac::GPIOA, gpioc: pac::GPIOC, gpiod: pac::GPIOD, gpiof: pac::GPIOF) -> Self {
        let gpioa = gpioa.split();
        let gpioc = gpioc.split();
        let gpiod = gpiod.split();
        let gpiof = gpiof.split();

        Self {
            usart3: Usart3Pins {
                tx: gpiod.pd8.into_alternate::<7>(),
                rx: gpiod.pd9.into_alternate::<7>(),
            },

            sensors: SensorPins {
                left: gpioa.pa3.into_analog(),
                middle: gpioc.pc0.into_analog(),
                right: gpioc.pc3.into_analog(),
            },

            pwm: PwmPins {
                left: gpiod.pd12.into_alternate::<2>(),
                right: gpiod.pd13.into_alternate::<2>(),
            },

            bridge: BridgePins {
                ain1: gpiof.pf12.into_push_pull_output(),
                ain2: gpiof.pf13.into_push_pull_output(),
                bin1: gpiof.pf14.into_push_pull_output(),
                bin2: gpiof.pf15.into_push_pull_output(),
            },
        }
    }
}
