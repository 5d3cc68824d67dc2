//! Basic ADC support for STM32F7 using direct PAC register access.
//!
//! Thin wrapper around ADC1 with blocking single-channel reads at 10-bit resolution, so raw values
//! land in `0..=1023` like the reflectance thresholds expect.
//!
//! Example:
//! ```ignore
//! let mut adc1 = Adc::adc1(dp.ADC1);
//! let value = adc1.read(3);
//! ```

use redbot_core::sensors::AdcRead;
use stm32f7xx_hal::pac;

/// Generic ADC wrapper over a PAC ADCx peripheral.
pub struct Adc<ADC> {
    adc: ADC,
}

/// Longest sample time (480 cycles); the sensor dividers are high impedance.
const SAMPLE_TIME: u32 = 0b111;

fn configure_common() {
    let common = unsafe { &*pac::ADC_COMMON::ptr() };

    // ADC prescaler: PCLK2 / 4
    common.ccr.modify(|_, w| w.adcpre().div4());
}

fn init_basic_adc(adc: &pac::adc1::RegisterBlock) {
    // Power off to configure
    adc.cr2.modify(|_, w| w.adon().clear_bit());

    // 10-bit, right-aligned, software trigger
    adc.cr1.modify(|_, w| w.res().bits(0b01));
    adc.cr2.modify(|_, w| {
        w.cont().clear_bit();
        w.align().right();
        w.exten().disabled();
        w
    });

    // Sequence length = 1 conversion
    adc.sqr1.modify(|_, w| w.l().bits(0));

    // Power on
    adc.cr2.modify(|_, w| w.adon().set_bit());
}

/// Set the sample time for one channel. Channels 0..=9 live in SMPR2, 10..=18 in SMPR1.
fn set_sample_time(adc: &pac::adc1::RegisterBlock, channel: u8) {
    if channel <= 9 {
        let shift = 3 * u32::from(channel);
        adc.smpr2
            .modify(|r, w| unsafe { w.bits(r.bits() & !(0b111 << shift) | (SAMPLE_TIME << shift)) });
    } else if channel <= 18 {
        let shift = 3 * u32::from(channel - 10);
        adc.smpr1
            .modify(|r, w| unsafe { w.bits(r.bits() & !(0b111 << shift) | (SAMPLE_TIME << shift)) });
    }
}

/// Read a single channel from the given ADC peripheral.
fn read_channel(adc: &pac::adc1::RegisterBlock, channel: u8) -> u16 {
    set_sample_time(adc, channel);

    // Set channel
    adc.sqr3
        .modify(|_, w| unsafe { w.sq1().bits(channel & 0x1F) });

    // Start
    adc.cr2.modify(|_, w| w.swstart().set_bit());

    // Wait for completion
    while adc.sr.read().eoc().bit_is_clear() {}

    adc.dr.read().data().bits() as u16
}

impl Adc<pac::ADC1> {
    /// Create and initialize ADC1.
    pub fn adc1(adc1: pac::ADC1) -> Self {
        let rcc = unsafe { &*pac::RCC::ptr() };
        rcc.apb2enr.modify(|_, w| w.adc1en().set_bit());

        configure_common();
        init_basic_adc(&adc1);

        Self { adc: adc1 }
    }

    /// Read a single channel.
    #[inline]
    pub fn read(&mut self, channel: u8) -> u16 {
        read_channel(&self.adc, channel)
    }
}

impl AdcRead for Adc<pac::ADC1> {
    fn read_channel(&mut self, ch: u8) -> u16 {
        self.read(ch)
    }
}
