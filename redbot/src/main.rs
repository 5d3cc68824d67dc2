// SPDX-License-Identifier: MIT
// © 2025–2026 Christopher Liu

#![no_main]
#![no_std]

use core::cell::RefCell;

use cortex_m::interrupt::{free, Mutex};
use cortex_m::peripheral::NVIC;
use cortex_m_rt::entry;
use panic_halt as _;

use hal::{
    pac::{self, interrupt},
    prelude::*,
    serial::{Config as SerialConfig, Serial},
};
use stm32f7xx_hal as hal;

use redbot::drivers::{MotorInputs, Tb6612, Winding};
use redbot::hw::{pins::SENSOR_CHANNELS, Adc, BoardPins, DualPwm, Tick, Usart};
use redbot_core::config::{self, Config};
use redbot_core::runtime::SharedState;
use redbot_core::sensors::LineSensors;
use redbot_core::Robot;

/// HSI, no PLL. APB1 timers run at this rate too.
const TIMER_CLOCK_HZ: u32 = 16_000_000;

/// 16 MHz / 4 / 256 ≈ 15.6 kHz, above the audible range for the gearmotors.
const PWM_PRESCALER: u16 = 3;

/// Let the sensor dividers and the bridge settle before the first reading.
const STARTUP_SETTLE_MS: u32 = 100;

static SHARED: SharedState = SharedState::new();

static PWM: Mutex<RefCell<Option<DualPwm<pac::TIM4>>>> = Mutex::new(RefCell::new(None));
static TICK: Mutex<RefCell<Option<Tick<pac::TIM6>>>> = Mutex::new(RefCell::new(None));

#[entry]
fn main() -> ! {
    // Peripherals
    let dp = pac::Peripherals::take().unwrap();

    // Clocks
    let rcc = dp.RCC.constrain();
    let clocks = rcc.cfgr.freeze();

    // GPIO
    let pins = BoardPins::new(dp.GPIOA, dp.GPIOC, dp.GPIOD, dp.GPIOF);

    // Motor bridge; the left motor is mounted mirrored
    let bridge = Tb6612::new(
        MotorInputs::new(pins.bridge.ain1, pins.bridge.ain2, Winding::Swapped),
        MotorInputs::new(pins.bridge.bin1, pins.bridge.bin2, Winding::Normal),
    );

    // Sensors; PA3/PC0/PC3 stay in analog mode for the life of the program
    let _sensor_pins = pins.sensors;
    let sensors = LineSensors::new(Adc::adc1(dp.ADC1), SENSOR_CHANNELS);

    // Timers; PD12/PD13 are already on AF2, TIM4 drives them directly
    let _pwm_pins = pins.pwm;
    let pwm = DualPwm::tim4(dp.TIM4, PWM_PRESCALER, config::PWM_TOP);
    let tick = Tick::tim6(dp.TIM6, TIMER_CLOCK_HZ, config::TICK_INTERVAL_MS);

    free(|cs| {
        PWM.borrow(cs).replace(Some(pwm));
        TICK.borrow(cs).replace(Some(tick));
    });

    unsafe {
        NVIC::unmask(pac::Interrupt::TIM4);
        NVIC::unmask(pac::Interrupt::TIM6_DAC);
    }

    // USART3 (ST-LINK virtual COM port)
    let usart_cfg = SerialConfig {
        baud_rate: config::DIAGNOSTIC_BAUD.bps(),
        ..Default::default()
    };
    let serial = Serial::new(
        dp.USART3,
        (pins.usart3.tx, pins.usart3.rx),
        &clocks,
        usart_cfg,
    );
    let usart = Usart::new(serial);

    SHARED.countdown.wait(STARTUP_SETTLE_MS);

    Robot::new(sensors, bridge, &SHARED.duty, usart, &Config::default()).run()
}

#[interrupt]
fn TIM4() {
    free(|cs| {
        if let Some(pwm) = PWM.borrow(cs).borrow_mut().as_mut() {
            pwm.clear_update();
            SHARED.on_pwm_refresh(pwm);
        }
    });
}

#[interrupt]
fn TIM6_DAC() {
    free(|cs| {
        if let Some(tick) = TICK.borrow(cs).borrow_mut().as_mut() {
            tick.clear_update();
        }
    });
    SHARED.on_tick();
}
