//! Triangle wave channel — the bass/melody voice. Unlike the pulse channels
//! it has no volume control at all: its only dynamics come from being
//! silenced by its length/linear counters or at near-ultrasonic frequencies.

use crate::apu::components::{LengthCounter, LinearCounter, Timer};
use crate::apu::constants::TRIANGLE_SEQUENCE;

#[derive(Debug, Clone)]
pub struct TriangleChannel {
    pub(crate) enabled: bool,
    pub(crate) linear_counter: LinearCounter,
    pub(crate) length_counter: LengthCounter,
    pub(crate) timer: Timer,
    /// Position in the 32-step triangle wave lookup.
    pub(crate) sequence_position: u8,
}

impl Default for TriangleChannel {
    fn default() -> Self {
        Self::new()
    }
}

impl TriangleChannel {
    pub fn new() -> Self {
        Self {
            enabled: false,
            linear_counter: LinearCounter::new(),
            length_counter: LengthCounter::new(),
            timer: Timer::new(),
            sequence_position: 0,
        }
    }

    /// `$4008`: control/halt bit plus the linear counter's reload value.
    pub fn write_register_0(&mut self, data: u8) {
        self.length_counter.set_halt(data & 0x80 != 0);
        self.linear_counter.write_control(data);
    }

    /// `$4009` has no function on this channel.
    pub fn write_register_1(&mut self, _data: u8) {}

    pub fn write_register_2(&mut self, data: u8) {
        let high = (self.timer.period >> 8) as u8;
        self.timer.set_period(data, high);
    }

    pub fn write_register_3(&mut self, data: u8) {
        let low = self.timer.period as u8;
        self.timer.set_period(low, data & 0x07);
        self.length_counter.load(data >> 3);
        self.linear_counter.set_reload_flag();
    }

    pub fn set_enabled(&mut self, enabled: bool) {
        self.enabled = enabled;
        if !enabled {
            self.length_counter.counter = 0;
        }
    }

    /// Unlike the other channels, triangle needs *both* its linear and
    /// length counters non-zero to be considered active.
    pub fn is_active(&self) -> bool {
        self.enabled && self.linear_counter.is_active() && self.length_counter.is_active()
    }

    pub fn clock_timer(&mut self) {
        let gated = self.linear_counter.is_active() && self.length_counter.is_active();
        if gated && self.timer.clock() {
            self.sequence_position = (self.sequence_position + 1) % 32;
        }
    }

    pub fn clock_linear_counter(&mut self) {
        self.linear_counter.clock();
    }

    pub fn clock_length_counter(&mut self) {
        self.length_counter.clock();
    }

    /// 4-bit sample, with an ultrasonic cutoff below period 2 to avoid the
    /// popping real hardware produces at those frequencies.
    pub fn output(&self) -> u8 {
        if !self.enabled {
            return 0;
        }
        if !self.linear_counter.is_active() || !self.length_counter.is_active() {
            return 0;
        }
        if self.timer.period < 2 {
            return 0;
        }
        TRIANGLE_SEQUENCE[self.sequence_position as usize]
    }
}
