// Shared harness for running .nes test ROMs against the emulator core
// and reading back their pass/fail result from memory.

#![allow(dead_code)]

use nespresso::bus::Bus;
use nespresso::cpu::Cpu;
use std::fs;
use std::path::Path;

pub const MAX_TEST_FRAMES: u32 = 600;
pub const MAX_TEST_CYCLES: u64 = 100_000_000;

const BLARGG_STATUS_ADDR: u16 = 0x6000;
const BLARGG_MAGIC_ADDR: u16 = 0x6001;
const BLARGG_MAGIC: [u8; 3] = [0xDE, 0xB0, 0x61];
const BLARGG_MESSAGE_ADDR: u16 = 0x6004;
const BLARGG_RUNNING: u8 = 0x80;
const BLARGG_RESET_REQUIRED: u8 = 0x81;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TestOutcome {
    Passed,
    Failed(u8),
    Timeout,
    Unknown,
}

pub struct RomRunConfig {
    pub max_cycles: u64,
    pub start_pc: Option<u16>,
    pub start_cycles: u64,
    pub trace: bool,
}

impl Default for RomRunConfig {
    fn default() -> Self {
        RomRunConfig {
            max_cycles: MAX_TEST_CYCLES,
            start_pc: None,
            start_cycles: 0,
            trace: false,
        }
    }
}

/// Strips the 16-byte iNES header and returns the PRG-ROM bytes.
pub fn load_rom(path: &Path) -> Result<Vec<u8>, String> {
    let rom_data =
        fs::read(path).map_err(|e| format!("failed to load ROM from {}: {}", path.display(), e))?;

    if rom_data.len() < 16 {
        return Err("ROM file too small (missing iNES header)".to_string());
    }

    let prg_rom_banks = rom_data[4] as usize;
    let prg_rom_size = prg_rom_banks * 16384;

    if rom_data.len() < 16 + prg_rom_size {
        return Err("ROM file too small for declared PRG-ROM size".to_string());
    }

    Ok(rom_data[16..16 + prg_rom_size].to_vec())
}

/// Loads PRG-ROM at $8000, mirrored at $C000 for 16KB (NROM-style) images.
pub fn load_prg_rom(bus: &mut Bus, prg_rom: &[u8]) {
    for (i, &byte) in prg_rom.iter().enumerate() {
        let offset = i as u16;
        if offset < 0x4000 {
            bus.write(0x8000 + offset, byte);
            bus.write(0xC000 + offset, byte);
        }
    }
}

/// Reads a null-terminated, printable-ASCII string out of emulated memory.
pub fn read_string(bus: &mut Bus, addr: u16, max_len: usize) -> String {
    let mut result = String::new();
    let mut current_addr = addr;

    for _ in 0..max_len {
        let byte = bus.read(current_addr);
        if byte == 0 {
            break;
        }
        if (0x20..=0x7E).contains(&byte) {
            result.push(byte as char);
        }
        current_addr = current_addr.wrapping_add(1);
    }

    result
}

/// Checks the simple two-byte result convention some test ROMs use:
/// $6000 nonzero means done, $6001 is 0 for pass or an error code otherwise.
pub fn check_test_result(bus: &mut Bus) -> TestOutcome {
    let status = bus.read(BLARGG_STATUS_ADDR);
    if status == 0 {
        return TestOutcome::Unknown;
    }

    match bus.read(BLARGG_MAGIC_ADDR) {
        0 => TestOutcome::Passed,
        code => TestOutcome::Failed(code),
    }
}

pub fn format_result(result: &TestOutcome) -> String {
    match result {
        TestOutcome::Passed => "PASSED".to_string(),
        TestOutcome::Failed(code) => format!("FAILED (error code: ${:02X})", code),
        TestOutcome::Timeout => "TIMEOUT".to_string(),
        TestOutcome::Unknown => "UNKNOWN".to_string(),
    }
}

/// Runs a ROM to completion (or timeout) under the simple status-byte convention.
pub fn run_test_rom(rom_path: &Path, config: &RomRunConfig) -> Result<TestOutcome, String> {
    let prg_rom = load_rom(rom_path)?;

    let mut cpu = Cpu::new();
    let mut bus = Bus::new();
    load_prg_rom(&mut bus, &prg_rom);

    cpu.pc = match config.start_pc {
        Some(pc) => pc,
        None => {
            let pc_low = bus.read(0xFFFC);
            let pc_high = bus.read(0xFFFD);
            u16::from_le_bytes([pc_low, pc_high])
        }
    };
    cpu.cycles = config.start_cycles;

    while cpu.cycles < config.max_cycles {
        cpu.step(&mut bus);
        match check_test_result(&mut bus) {
            TestOutcome::Passed | TestOutcome::Failed(_) => {
                return Ok(check_test_result(&mut bus));
            }
            TestOutcome::Unknown => {}
            TestOutcome::Timeout => return Ok(TestOutcome::Timeout),
        }
    }

    Ok(TestOutcome::Timeout)
}

/// Runs a ROM under the full Blargg status-byte protocol: $6000 holds a running
/// flag (0x80, or 0x81 if the ROM wants a manual reset) until the test settles,
/// $6001-$6003 carry a fixed magic sequence once the status byte is meaningful,
/// and $6004 holds a null-terminated result message to surface alongside pass/fail.
pub fn run_blargg_style_test(rom_path: &str, max_cycles: u64) -> Result<(bool, String), String> {
    let path = Path::new(rom_path);
    let prg_rom = load_rom(path)?;

    let mut cpu = Cpu::new();
    let mut bus = Bus::new();
    load_prg_rom(&mut bus, &prg_rom);

    let pc_low = bus.read(0xFFFC);
    let pc_high = bus.read(0xFFFD);
    cpu.pc = u16::from_le_bytes([pc_low, pc_high]);

    let mut cycles_run = 0u64;
    let mut saw_running = false;

    while cycles_run < max_cycles {
        cpu.step(&mut bus);
        cycles_run = cpu.cycles;

        let status = bus.read(BLARGG_STATUS_ADDR);
        let magic_matches = (0..3).all(|i| bus.read(BLARGG_MAGIC_ADDR + i) == BLARGG_MAGIC[i as usize]);

        if status == BLARGG_RUNNING {
            saw_running = true;
            continue;
        }
        if status == BLARGG_RESET_REQUIRED {
            saw_running = true;
            continue;
        }

        // Once the ROM has at some point signalled "running" and the magic
        // bytes line up, the status byte is a final, meaningful result.
        if saw_running && magic_matches {
            let message = read_string(&mut bus, BLARGG_MESSAGE_ADDR, 512);
            return Ok((status == 0, message));
        }
    }

    Err(format!(
        "test ROM {} did not reach a final status within {} cycles",
        rom_path, max_cycles
    ))
}
