//! Frame sequencer: the low-frequency divider that clocks envelopes, the
//! triangle's linear counter, length counters, and sweep units out of the
//! APU's ~1.79MHz cycle clock.
//!
//! Two sequences are supported: 4-step (~240Hz, fires a frame IRQ on its
//! last step unless inhibited) and 5-step (~192Hz, never IRQs, clocks an
//! extra half-frame immediately on mode select).

use crate::apu::constants::{
    FRAME_COUNTER_4_STEP_CYCLES, FRAME_COUNTER_4_STEP_PERIOD, FRAME_COUNTER_5_STEP_CYCLES,
    FRAME_COUNTER_5_STEP_PERIOD,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FrameEvent {
    QuarterFrame,
    HalfFrame,
    SetIrq,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FrameMode {
    FourStep,
    FiveStep,
}

#[derive(Debug, Clone)]
pub struct FrameCounter {
    mode: FrameMode,
    cycle: u32,
    step: usize,
    irq_inhibit: bool,
    irq_pending: bool,
    reset_pending: bool,
    write_delay: u8,
}

impl FrameCounter {
    pub fn new() -> Self {
        Self {
            mode: FrameMode::FourStep,
            cycle: 0,
            step: 0,
            irq_inhibit: false,
            irq_pending: false,
            reset_pending: false,
            write_delay: 0,
        }
    }

    pub fn reset(&mut self) {
        *self = Self::new();
    }

    /// Decode a `$4017` write: bit 7 picks the sequence length, bit 6 gates
    /// the frame IRQ. The real chip delays the reset this causes by 3-4 CPU
    /// cycles; this sequencer applies it immediately instead, which keeps
    /// the rest of the APU free of that edge case.
    pub fn write_control(&mut self, value: u8) -> Vec<FrameEvent> {
        self.mode = if value & 0x80 != 0 {
            FrameMode::FiveStep
        } else {
            FrameMode::FourStep
        };
        self.irq_inhibit = value & 0x40 != 0;
        if self.irq_inhibit {
            self.irq_pending = false;
        }

        self.cycle = 0;
        self.step = 0;
        self.write_delay = 0;
        self.reset_pending = false;

        match self.mode {
            FrameMode::FiveStep => vec![FrameEvent::HalfFrame],
            FrameMode::FourStep => Vec::new(),
        }
    }

    pub fn clock(&mut self) -> Vec<FrameEvent> {
        self.cycle += 1;
        let mut events = Vec::new();
        match self.mode {
            FrameMode::FourStep => self.clock_four_step(&mut events),
            FrameMode::FiveStep => self.clock_five_step(&mut events),
        }
        events
    }

    fn clock_four_step(&mut self, events: &mut Vec<FrameEvent>) {
        if self.step < 4 && self.cycle == FRAME_COUNTER_4_STEP_CYCLES[self.step] {
            let is_last_step = self.step == 3;
            events.push(if self.step % 2 == 0 {
                FrameEvent::QuarterFrame
            } else {
                FrameEvent::HalfFrame
            });
            if is_last_step && !self.irq_inhibit {
                self.irq_pending = true;
                events.push(FrameEvent::SetIrq);
            }
            self.step += 1;
        }

        if self.cycle >= FRAME_COUNTER_4_STEP_PERIOD {
            if !self.irq_inhibit {
                self.irq_pending = true;
                events.push(FrameEvent::SetIrq);
            }
            self.cycle = 0;
            self.step = 0;
        }
    }

    fn clock_five_step(&mut self, events: &mut Vec<FrameEvent>) {
        if self.step < 4 && self.cycle == FRAME_COUNTER_5_STEP_CYCLES[self.step] {
            events.push(if self.step % 2 == 0 {
                FrameEvent::QuarterFrame
            } else {
                FrameEvent::HalfFrame
            });
            self.step += 1;
        } else if self.step == 4 && self.cycle == FRAME_COUNTER_5_STEP_CYCLES[4] {
            // Fifth step is silent by design; still has to advance so the
            // cycle-reset check below fires on schedule.
            self.step += 1;
        }

        if self.cycle >= FRAME_COUNTER_5_STEP_PERIOD {
            self.cycle = 0;
            self.step = 0;
        }
    }

    pub fn irq_pending(&self) -> bool {
        self.irq_pending
    }

    pub fn clear_irq(&mut self) {
        self.irq_pending = false;
    }

    pub fn mode(&self) -> FrameMode {
        self.mode
    }

    pub fn cycle(&self) -> u32 {
        self.cycle
    }

    pub fn step(&self) -> usize {
        self.step
    }

    pub fn irq_inhibited(&self) -> bool {
        self.irq_inhibit
    }
}

impl Default for FrameCounter {
    fn default() -> Self {
        Self::new()
    }
}
