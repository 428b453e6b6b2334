// APU module - Audio Processing Unit implementation
//
// This module contains the APU emulation for the NES (Ricoh 2A03): two pulse
// channels, a triangle channel, a noise channel, and the frame sequencer that
// clocks their envelopes, sweep units, and length counters. The DMC channel
// and its $4010-$4013 registers are not modeled; writes there are accepted
// and ignored, matching open-bus-style behavior for unimplemented hardware.
//
// ## Register Map
//
// ### Pulse 1 ($4000-$4003) / Pulse 2 ($4004-$4007)
// | Address | Description                           |
// |---------|---------------------------------------|
// | $4000/4 | Duty cycle, length counter halt, envelope |
// | $4001/5 | Sweep unit                            |
// | $4002/6 | Timer low byte                        |
// | $4003/7 | Length counter load, timer high bits  |
//
// ### Triangle ($4008-$400B)
// | Address | Description                           |
// |---------|---------------------------------------|
// | $4008   | Linear counter                        |
// | $4009   | Unused                                |
// | $400A   | Timer low byte                        |
// | $400B   | Length counter load, timer high bits  |
//
// ### Noise ($400C-$400F)
// | Address | Description                           |
// |---------|---------------------------------------|
// | $400C   | Envelope                              |
// | $400D   | Unused                                |
// | $400E   | Mode, period                          |
// | $400F   | Length counter load                   |
//
// ### Control ($4015, $4017)
// | Address | Description                           |
// |---------|---------------------------------------|
// | $4015   | Status (R), channel enable (W)        |
// | $4017   | Frame counter mode / IRQ inhibit (W)  |

pub mod channels;
pub mod components;
pub mod constants;

use crate::bus::MemoryMappedDevice;
use channels::{NoiseChannel, PulseChannel, TriangleChannel};
use components::{FrameCounter, FrameEvent};

/// The Ricoh 2A03 Audio Processing Unit: two pulse channels, triangle,
/// noise, and the frame sequencer driving them.
pub struct Apu {
    pulse1: PulseChannel,
    pulse2: PulseChannel,
    triangle: TriangleChannel,
    noise: NoiseChannel,
    frame_counter: FrameCounter,
}

impl Apu {
    /// Create a new APU instance with default (power-on) state.
    pub fn new() -> Self {
        Apu {
            pulse1: PulseChannel::new(1),
            pulse2: PulseChannel::new(2),
            triangle: TriangleChannel::new(),
            noise: NoiseChannel::new(),
            frame_counter: FrameCounter::new(),
        }
    }

    /// Reset the APU to power-on state.
    pub fn reset(&mut self) {
        *self = Self::new();
    }

    /// Advance the APU by one CPU cycle: clocks every channel's timer and
    /// the frame sequencer, dispatching quarter/half-frame events as they
    /// fall due.
    pub fn step(&mut self) {
        self.pulse1.clock_timer();
        self.pulse2.clock_timer();
        self.triangle.clock_timer();
        self.noise.clock_timer();

        for event in self.frame_counter.clock() {
            self.dispatch_frame_event(event);
        }
    }

    fn dispatch_frame_event(&mut self, event: FrameEvent) {
        match event {
            FrameEvent::QuarterFrame => self.clock_quarter_frame(),
            FrameEvent::HalfFrame => self.clock_half_frame(),
            FrameEvent::SetIrq => {}
        }
    }

    /// Clock envelopes and the triangle's linear counter.
    fn clock_quarter_frame(&mut self) {
        self.pulse1.clock_envelope();
        self.pulse2.clock_envelope();
        self.triangle.clock_linear_counter();
        self.noise.clock_envelope();
    }

    /// Clock length counters and sweep units, plus everything a quarter
    /// frame clocks.
    fn clock_half_frame(&mut self) {
        self.clock_quarter_frame();

        self.pulse1.clock_length_counter();
        self.pulse1.clock_sweep();
        self.pulse2.clock_length_counter();
        self.pulse2.clock_sweep();
        self.triangle.clock_length_counter();
        self.noise.clock_length_counter();
    }

    /// Whether the frame sequencer has a pending IRQ (4-step mode only,
    /// unless inhibited).
    pub fn irq_pending(&self) -> bool {
        self.frame_counter.irq_pending()
    }

    /// Current output of pulse channel 1 (0-15).
    pub fn pulse1_output(&self) -> u8 {
        self.pulse1.output()
    }

    /// Current output of pulse channel 2 (0-15).
    pub fn pulse2_output(&self) -> u8 {
        self.pulse2.output()
    }

    /// Current output of the triangle channel (0-15).
    pub fn triangle_output(&self) -> u8 {
        self.triangle.output()
    }

    /// Current output of the noise channel (0-15).
    pub fn noise_output(&self) -> u8 {
        self.noise.output()
    }

    fn read_register(&mut self, addr: u16) -> u8 {
        match addr {
            // Pulse, triangle, noise registers are all write-only.
            0x4000..=0x400F => 0,

            // $4015: channel status. Reading clears the frame IRQ flag.
            0x4015 => {
                let mut status = 0u8;
                if self.pulse1.is_active() {
                    status |= 0x01;
                }
                if self.pulse2.is_active() {
                    status |= 0x02;
                }
                if self.triangle.is_active() {
                    status |= 0x04;
                }
                if self.noise.is_active() {
                    status |= 0x08;
                }
                if self.frame_counter.irq_pending() {
                    status |= 0x40;
                }
                self.frame_counter.clear_irq();
                status
            }

            // $4017 is write-only for the frame counter.
            0x4017 => 0,

            _ => 0,
        }
    }

    fn write_register(&mut self, addr: u16, data: u8) {
        match addr {
            0x4000 => self.pulse1.write_register_0(data),
            0x4001 => self.pulse1.write_register_1(data),
            0x4002 => self.pulse1.write_register_2(data),
            0x4003 => self.pulse1.write_register_3(data),

            0x4004 => self.pulse2.write_register_0(data),
            0x4005 => self.pulse2.write_register_1(data),
            0x4006 => self.pulse2.write_register_2(data),
            0x4007 => self.pulse2.write_register_3(data),

            0x4008 => self.triangle.write_register_0(data),
            0x4009 => self.triangle.write_register_1(data),
            0x400A => self.triangle.write_register_2(data),
            0x400B => self.triangle.write_register_3(data),

            0x400C => self.noise.write_register_0(data),
            0x400D => self.noise.write_register_1(data),
            0x400E => self.noise.write_register_2(data),
            0x400F => self.noise.write_register_3(data),

            // $4010-$4013 (DMC) accepted and ignored; no DMC channel.
            0x4010..=0x4013 => {}

            // $4015: channel enable. Disabling a channel clears its length
            // counter immediately.
            0x4015 => {
                self.pulse1.set_enabled((data & 0x01) != 0);
                self.pulse2.set_enabled((data & 0x02) != 0);
                self.triangle.set_enabled((data & 0x04) != 0);
                self.noise.set_enabled((data & 0x08) != 0);
            }

            // $4017: frame counter mode / IRQ inhibit. A 5-step write
            // immediately clocks a half frame.
            0x4017 => {
                for event in self.frame_counter.write_control(data) {
                    self.dispatch_frame_event(event);
                }
            }

            _ => {}
        }
    }
}

impl MemoryMappedDevice for Apu {
    fn read(&mut self, addr: u16) -> u8 {
        self.read_register(addr)
    }

    fn write(&mut self, addr: u16, data: u8) {
        self.write_register(addr, data);
    }
}

impl Default for Apu {
    fn default() -> Self {
        Self::new()
    }
}
