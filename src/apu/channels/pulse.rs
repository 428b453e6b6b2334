//! Pulse wave channel — backs both Pulse 1 and Pulse 2, which differ only
//! in the sweep unit's negate behavior (passed in via `channel_number`).

use crate::apu::components::{Envelope, LengthCounter, Sweep, Timer};
use crate::apu::constants::DUTY_PATTERNS;

#[derive(Debug, Clone)]
pub struct PulseChannel {
    pub(crate) enabled: bool,
    /// Index into `DUTY_PATTERNS`: 0=12.5%, 1=25%, 2=50%, 3=75% (inverted 25%).
    pub(crate) duty: u8,
    /// Position within the 8-step duty sequence.
    phase: u8,
    pub(crate) envelope: Envelope,
    pub(crate) sweep: Sweep,
    pub(crate) length_counter: LengthCounter,
    pub(crate) timer: Timer,
}

impl PulseChannel {
    /// `channel_number` is 1 or 2, forwarded to the sweep unit for its
    /// one's-complement vs. two's-complement negate quirk.
    pub fn new(channel_number: u8) -> Self {
        Self {
            enabled: false,
            duty: 0,
            phase: 0,
            envelope: Envelope::new(),
            sweep: Sweep::new(channel_number),
            length_counter: LengthCounter::new(),
            timer: Timer::new(),
        }
    }

    pub fn write_register_0(&mut self, data: u8) {
        self.duty = (data >> 6) & 0x03;
        self.length_counter.set_halt(data & 0x20 != 0);
        self.envelope.write_control(data);
    }

    pub fn write_register_1(&mut self, data: u8) {
        self.sweep.write_control(data);
    }

    pub fn write_register_2(&mut self, data: u8) {
        let high = (self.timer.period >> 8) as u8;
        self.timer.set_period(data, high);
    }

    /// Timer high bits, length counter load, and a forced envelope/duty
    /// restart all ride on this one register.
    pub fn write_register_3(&mut self, data: u8) {
        let low = self.timer.period as u8;
        self.timer.set_period(low, data & 0x07);
        self.length_counter.load(data >> 3);

        self.envelope.restart();
        self.phase = 0;
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
        if self.timer.clock() {
            self.phase = (self.phase + 1) % 8;
        }
    }

    pub fn clock_envelope(&mut self) {
        self.envelope.clock();
    }

    pub fn clock_length_counter(&mut self) {
        self.length_counter.clock();
    }

    pub fn clock_sweep(&mut self) {
        if let Some(new_period) = self.sweep.clock(self.timer.period) {
            self.timer.set_period_direct(new_period);
        }
    }

    pub fn output(&self) -> u8 {
        if !self.is_active() || self.sweep.is_muting(self.timer.period) {
            return 0;
        }

        let duty_high = DUTY_PATTERNS[self.duty as usize][self.phase as usize] != 0;
        if duty_high {
            self.envelope.volume()
        } else {
            0
        }
    }
}
