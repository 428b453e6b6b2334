// NES Emulator Library
// Core library for the NES emulator implementation

// Public modules
pub mod apu;
#[cfg(feature = "audio")]
pub mod audio;
pub mod bus;
pub mod cartridge;
pub mod cpu;
pub mod debug;
pub mod display;
pub mod emulator;
pub mod input;
pub mod ppu;
pub mod ram;

// Re-export main types for convenience
pub use apu::Apu;
#[cfg(feature = "audio")]
pub use audio::{AudioConfig, AudioOutput, AudioSystem, Mixer};
pub use bus::{Bus, ControllerPort, MemoryMappedDevice};
pub use cartridge::{Cartridge, INesError, Mapper, Mirroring};
pub use cpu::Cpu;
pub use debug::{
    disassemble_count, disassemble_instruction, disassemble_range, dump_pattern_tables,
    CpuDebugger, CpuState, Debugger, DisassembledInstruction, LogLevel, Logger, MemoryRegion,
    MemoryViewer, PatternTableDumpError, PpuDebugger, PpuState, SpriteInfo, TraceEntry,
};
pub use display::{FrameBuffer, WindowConfig};
pub use emulator::{Emulator, EmulatorConfig, SpeedMode};
pub use input::Controller;
pub use ppu::Ppu;
pub use ram::Ram;
