//! Noise channel — a 15-bit linear feedback shift register clocked through
//! one of 16 fixed periods, used for percussion and sound effects.

use crate::apu::components::{Envelope, LengthCounter, Timer};
use crate::apu::constants::NOISE_PERIOD_TABLE;

#[derive(Debug, Clone)]
pub struct NoiseChannel {
    pub(crate) enabled: bool,
    pub(crate) envelope: Envelope,
    pub(crate) length_counter: LengthCounter,
    pub(crate) timer: Timer,
    pub(crate) lfsr: u16,
    /// false = long/metallic mode (tap bit 1), true = short/white-noise mode (tap bit 6).
    pub(crate) mode: bool,
}

impl Default for NoiseChannel {
    fn default() -> Self {
        Self::new()
    }
}

impl NoiseChannel {
    pub fn new() -> Self {
        Self {
            enabled: false,
            envelope: Envelope::new(),
            length_counter: LengthCounter::new(),
            timer: Timer::new(),
            lfsr: 1,
            mode: false,
        }
    }

    pub fn write_register_0(&mut self, data: u8) {
        self.length_counter.set_halt(data & 0x20 != 0);
        self.envelope.write_control(data);
    }

    /// `$400D` has no function on this channel.
    pub fn write_register_1(&mut self, _data: u8) {}

    pub fn write_register_2(&mut self, data: u8) {
        self.mode = data & 0x80 != 0;
        self.timer.set_period_direct(NOISE_PERIOD_TABLE[(data & 0x0F) as usize]);
    }

    pub fn write_register_3(&mut self, data: u8) {
        self.length_counter.load(data >> 3);
        self.envelope.restart();
    }

    pub fn set_enabled(&mut self, enabled: bool) {
        self.enabled = enabled;
        if !enabled {
            self.length_counter.counter = 0;
        }
    }

    pub fn is_active(&self) -> bool {
        self.enabled && self.length_counter.is_active()
    }

    pub fn clock_timer(&mut self) {
        if !self.timer.clock() {
            return;
        }
        let tap = if self.mode { 6 } else { 1 };
        let feedback = (self.lfsr ^ (self.lfsr >> tap)) & 0x01;
        self.lfsr = (self.lfsr >> 1) | (feedback << 14);
    }

    pub fn clock_envelope(&mut self) {
        self.envelope.clock();
    }

    pub fn clock_length_counter(&mut self) {
        self.length_counter.clock();
    }

    /// Silent whenever bit 0 of the shift register is set.
    pub fn output(&self) -> u8 {
        if !self.is_active() || self.lfsr & 0x01 != 0 {
            return 0;
        }
        self.envelope.volume()
    }
}
