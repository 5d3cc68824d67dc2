//! Interrupt-driven timers via direct PAC register access.
//!
//! - [`Tick`] configures TIM6 (basic timer) to raise an update interrupt at a fixed millisecond
//!   interval.
//! - [`DualPwm`] configures TIM4 CH1/CH2 as edge-aligned PWM with an 8-bit period. Its update
//!   interrupt marks the cycle boundary at which new compare thresholds should be loaded.
//!
//! Both leave the interrupt pending-source enabled in the timer; unmasking it in the NVIC is up to
//! the caller.

use redbot_core::motion::DutyCycle;
use redbot_core::pwm::CompareOutputs;
use stm32f7xx_hal::pac;

/// CCMRx OCyM value for PWM mode 1 (high while CNT < CCRy).
const OC_PWM_MODE_1: u8 = 0b110;

pub struct Tick<TIM> {
    tim: TIM,
}

impl Tick<pac::TIM6> {
    /// Configure TIM6 to fire every `interval_ms` from a `timer_clock_hz` kernel clock.
    ///
    /// The counter runs at 1 MHz, so `interval_ms` must stay below 66.
    pub fn tim6(tim6: pac::TIM6, timer_clock_hz: u32, interval_ms: u32) -> Self {
        let rcc = unsafe { &*pac::RCC::ptr() };
        rcc.apb1enr.modify(|_, w| w.tim6en().set_bit());

        let tim = tim6;

        // Disable counter while configuring
        tim.cr1.modify(|_, w| w.cen().clear_bit());

        // 1 MHz count rate, reload after interval_ms * 1000 counts
        let psc = timer_clock_hz / 1_000_000 - 1;
        let arr = interval_ms * 1_000 - 1;
        tim.psc.write(|w| unsafe { w.bits(psc) });
        tim.arr.write(|w| unsafe { w.bits(arr) });

        // Latch the prescaler, then drop the flag that the forced update raised
        tim.egr.write(|w| w.ug().set_bit());
        tim.sr.modify(|_, w| w.uif().clear_bit());

        tim.dier.modify(|_, w| w.uie().set_bit());
        tim.cr1.modify(|_, w| w.cen().set_bit());

        Self { tim }
    }

    /// Acknowledge the update interrupt. Call first thing in the handler.
    #[inline]
    pub fn clear_update(&mut self) {
        self.tim.sr.modify(|_, w| w.uif().clear_bit());
    }
}

/// Two PWM channels sharing one timer: CH1 drives the left motor, CH2 the right.
pub struct DualPwm<TIM> {
    tim: TIM,
}

impl DualPwm<pac::TIM4> {
    /// Configure TIM4 CH1/CH2 as PWM with a counter running `0..=top`.
    ///
    /// The PWM frequency is `timer_clock / (prescaler + 1) / (top + 1)`. Both outputs start at 0%
    /// duty.
    pub fn tim4(tim4: pac::TIM4, prescaler: u16, top: u8) -> Self {
        let rcc = unsafe { &*pac::RCC::ptr() };
        rcc.apb1enr.modify(|_, w| w.tim4en().set_bit());

        let tim = tim4;

        // Disable counter while configuring
        tim.cr1.modify(|_, w| w.cen().clear_bit());

        tim.psc.write(|w| unsafe { w.bits(u32::from(prescaler)) });
        tim.arr.write(|w| unsafe { w.bits(u32::from(top)) });

        // CH1/CH2: PWM mode 1 with compare preload, so new thresholds apply at the next update
        tim.ccmr1_output().modify(|_, w| unsafe {
            w.oc1m()
                .bits(OC_PWM_MODE_1)
                .oc1pe()
                .set_bit()
                .oc2m()
                .bits(OC_PWM_MODE_1)
                .oc2pe()
                .set_bit()
        });

        tim.ccr1().write(|w| unsafe { w.bits(0) });
        tim.ccr2().write(|w| unsafe { w.bits(0) });

        // Active-high outputs on both channels
        tim.ccer.modify(|_, w| {
            w.cc1p()
                .clear_bit()
                .cc2p()
                .clear_bit()
                .cc1e()
                .set_bit()
                .cc2e()
                .set_bit()
        });

        // Load PSC/ARR/CCR shadows, then drop the flag that the forced update raised
        tim.egr.write(|w| w.ug().set_bit());
        tim.sr.modify(|_, w| w.uif().clear_bit());

        tim.dier.modify(|_, w| w.uie().set_bit());
        tim.cr1.modify(|_, w| w.arpe().set_bit().cen().set_bit());

        Self { tim }
    }

    /// Acknowledge the update interrupt. Call first thing in the handler.
    #[inline]
    pub fn clear_update(&mut self) {
        self.tim.sr.modify(|_, w| w.uif().clear_bit());
    }
}

impl CompareOutputs for DualPwm<pac::TIM4> {
    #[inline]
    fn set_compare(&mut self, duty: DutyCycle) {
        self.tim.ccr1().write(|w| unsafe { w.bits(u32::from(duty.left)) });
        self.tim.ccr2().write(|w| unsafe { w.bits(u32::from(duty.right)) });
    }
}
