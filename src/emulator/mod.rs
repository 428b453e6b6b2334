// Emulator module - Main emulator coordinator
//
// This module provides the main emulator interface that coordinates all NES components
// (CPU, PPU, APU, Bus) and implements quality-of-life features like speed control
// and configuration management.

mod config;

pub use config::{EmulatorConfig, SpeedMode};

use crate::bus::Bus;
use crate::cartridge::Cartridge;
use crate::cpu::Cpu;
use crate::debug::Debugger;
use std::path::{Path, PathBuf};
use std::time::Instant;

/// Main emulator structure
///
/// Coordinates all NES components and provides high-level functionality
/// for running games and managing configuration.
pub struct Emulator {
    /// CPU (6502 processor)
    cpu: Cpu,

    /// Bus (connects all components)
    bus: Bus,

    /// Currently loaded cartridge, kept around for info queries (mapper id, mirroring, ...)
    cartridge: Option<Cartridge>,

    /// Configuration
    config: EmulatorConfig,

    /// Currently loaded ROM path
    rom_path: Option<PathBuf>,

    /// Paused state
    paused: bool,

    /// Speed mode
    speed_mode: SpeedMode,

    /// Frame timing for speed control
    #[allow(dead_code)]
    last_frame_time: Option<Instant>,
}

impl Emulator {
    /// Create a new emulator instance
    ///
    /// Initializes all components to their power-on state.
    ///
    /// # Returns
    ///
    /// A new emulator instance
    ///
    /// # Example
    ///
    /// ```
    /// use nespresso::emulator::Emulator;
    ///
    /// let mut emulator = Emulator::new();
    /// ```
    pub fn new() -> Self {
        Emulator {
            cpu: Cpu::new(),
            bus: Bus::new(),
            cartridge: None,
            config: EmulatorConfig::load_or_default(),
            rom_path: None,
            paused: false,
            speed_mode: SpeedMode::Normal,
            last_frame_time: None,
        }
    }

    /// Load a ROM file
    ///
    /// Loads a ROM from the specified path, wires it into the bus through the
    /// appropriate mapper, and resets the emulator to its power-on state.
    ///
    /// # Arguments
    ///
    /// * `path` - Path to the ROM file (.nes)
    ///
    /// # Returns
    ///
    /// Result indicating success or error
    ///
    /// # Example
    ///
    /// ```no_run
    /// use nespresso::emulator::Emulator;
    ///
    /// let mut emulator = Emulator::new();
    /// emulator.load_rom("game.nes").expect("Failed to load ROM");
    /// ```
    pub fn load_rom<P: AsRef<Path>>(&mut self, path: P) -> Result<(), Box<dyn std::error::Error>> {
        let path = path.as_ref();
        let cartridge = Cartridge::from_ines_file(path)?;

        self.bus.load_cartridge(cartridge.clone())?;
        self.cartridge = Some(cartridge);
        self.rom_path = Some(path.to_path_buf());

        self.reset();

        Ok(())
    }

    /// Reset the emulator
    ///
    /// Resets all components to their power-on state, as if pressing the reset button.
    ///
    /// # Example
    ///
    /// ```
    /// use nespresso::emulator::Emulator;
    ///
    /// let mut emulator = Emulator::new();
    /// emulator.reset();
    /// ```
    pub fn reset(&mut self) {
        self.bus.reset();
        self.cpu.reset(&mut self.bus);
        self.paused = false;
    }

    /// Run the emulator until the PPU completes one frame
    ///
    /// Steps the CPU instruction by instruction, ticking the PPU three times
    /// and the APU once per CPU cycle consumed, dispatching NMI/IRQ and OAM
    /// DMA stalls as they come up. Returns immediately if paused or if the
    /// speed mode multiplier is zero.
    ///
    /// # Example
    ///
    /// ```
    /// use nespresso::emulator::Emulator;
    ///
    /// let mut emulator = Emulator::new();
    /// emulator.run_frame();
    /// ```
    pub fn run_frame(&mut self) {
        if self.paused || self.speed_mode.multiplier() == 0.0 {
            return;
        }

        while !self.step_instruction() {}
    }

    /// Run until the PPU completes one frame, pausing early if the debugger stops execution
    ///
    /// Calls `Debugger::before_instruction` ahead of every CPU instruction so
    /// breakpoints and CPU tracing observe state before it executes.
    ///
    /// # Returns
    ///
    /// `true` if a full frame completed, `false` if the debugger paused execution first
    pub fn run_frame_with_debugger(&mut self, debugger: &mut Debugger) -> bool {
        if self.paused || self.speed_mode.multiplier() == 0.0 {
            return true;
        }

        loop {
            if !debugger.before_instruction(&self.cpu, &mut self.bus) {
                return false;
            }
            if self.step_instruction() {
                return true;
            }
        }
    }

    /// Execute a single CPU instruction and its associated PPU/APU/interrupt work
    ///
    /// Ticks the PPU three times and the APU once per CPU cycle consumed,
    /// handles OAM DMA stalls, and dispatches a pending NMI or IRQ. Servicing
    /// an interrupt costs the CPU 7 cycles of its own, which are folded into
    /// the same PPU/APU tick loop so the three clocks never fall out of
    /// lockstep across a frame's worth of NMIs.
    ///
    /// # Returns
    ///
    /// `true` if the PPU completed a frame during this instruction
    pub fn step_instruction(&mut self) -> bool {
        let mut cycles = self.cpu.step(&mut self.bus) as u64;

        if let Some(stall) = self.bus.take_oam_dma(self.cpu.cycles % 2 == 1) {
            self.cpu.cycles = self.cpu.cycles.wrapping_add(stall as u64);
            cycles += stall as u64;
        }

        if self.bus.nmi_pending() {
            self.bus.clear_nmi();
            let cycles_before = self.cpu.cycles;
            self.cpu.nmi(&mut self.bus);
            cycles += self.cpu.cycles.wrapping_sub(cycles_before);
        }
        if self.bus.irq_pending() {
            let cycles_before = self.cpu.cycles;
            self.cpu.irq(&mut self.bus);
            cycles += self.cpu.cycles.wrapping_sub(cycles_before);
        }

        let mut frame_done = false;
        for _ in 0..cycles * 3 {
            if self.bus.ppu_mut().step() {
                frame_done = true;
            }
        }
        for _ in 0..cycles {
            self.bus.apu_mut().step();
        }

        frame_done
    }

    /// Set speed mode
    ///
    /// Controls emulation speed (normal, fast forward, slow motion).
    ///
    /// # Arguments
    ///
    /// * `mode` - The speed mode to set
    ///
    /// # Example
    ///
    /// ```
    /// use nespresso::emulator::{Emulator, SpeedMode};
    ///
    /// let mut emulator = Emulator::new();
    /// emulator.set_speed_mode(SpeedMode::FastForward2x);
    /// ```
    pub fn set_speed_mode(&mut self, mode: SpeedMode) {
        self.speed_mode = mode;
    }

    /// Get current speed mode
    ///
    /// # Returns
    ///
    /// The current speed mode
    pub fn speed_mode(&self) -> SpeedMode {
        self.speed_mode
    }

    /// Pause the emulator
    ///
    /// # Example
    ///
    /// ```
    /// use nespresso::emulator::Emulator;
    ///
    /// let mut emulator = Emulator::new();
    /// emulator.pause();
    /// ```
    pub fn pause(&mut self) {
        self.paused = true;
    }

    /// Resume the emulator
    ///
    /// # Example
    ///
    /// ```
    /// use nespresso::emulator::Emulator;
    ///
    /// let mut emulator = Emulator::new();
    /// emulator.resume();
    /// ```
    pub fn resume(&mut self) {
        self.paused = false;
    }

    /// Toggle pause state
    ///
    /// # Example
    ///
    /// ```
    /// use nespresso::emulator::Emulator;
    ///
    /// let mut emulator = Emulator::new();
    /// emulator.toggle_pause();
    /// ```
    pub fn toggle_pause(&mut self) {
        self.paused = !self.paused;
    }

    /// Check if emulator is paused
    ///
    /// # Returns
    ///
    /// true if paused, false otherwise
    pub fn is_paused(&self) -> bool {
        self.paused
    }

    /// Get reference to CPU
    pub fn cpu(&self) -> &Cpu {
        &self.cpu
    }

    /// Get mutable reference to CPU
    pub fn cpu_mut(&mut self) -> &mut Cpu {
        &mut self.cpu
    }

    /// Get reference to Bus
    pub fn bus(&self) -> &Bus {
        &self.bus
    }

    /// Get mutable reference to Bus
    pub fn bus_mut(&mut self) -> &mut Bus {
        &mut self.bus
    }

    /// Borrow the CPU and Bus simultaneously
    ///
    /// Needed by external debug tooling that must inspect the CPU while
    /// also reading/writing memory through the bus (e.g. disassembling
    /// the next instruction before it executes).
    pub fn cpu_and_bus_mut(&mut self) -> (&Cpu, &mut Bus) {
        (&self.cpu, &mut self.bus)
    }

    /// Get reference to configuration
    pub fn config(&self) -> &EmulatorConfig {
        &self.config
    }

    /// Get mutable reference to configuration
    pub fn config_mut(&mut self) -> &mut EmulatorConfig {
        &mut self.config
    }

    /// Get the currently loaded ROM path
    pub fn rom_path(&self) -> Option<&Path> {
        self.rom_path.as_deref()
    }
}

impl Default for Emulator {
    fn default() -> Self {
        Self::new()
    }
}
