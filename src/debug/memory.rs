// Hex dump / search utilities for inspecting CPU and PPU memory from a
// debugger front-end.

use crate::bus::Bus;
use crate::ppu::Ppu;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MemoryRegion {
    Cpu,
    PpuNametables,
    PpuPatternTables,
    PpuPalette,
    PpuOam,
}

pub struct MemoryViewer {
    bytes_per_row: usize,
}

/// Renders one hex-dump row (address, hex bytes, ASCII gutter) for `bytes`,
/// padding short trailing rows so columns stay aligned.
fn format_row(addr: usize, bytes: &[u8], width: usize) -> String {
    let mut line = format!("${:04X}:  ", addr);
    for col in 0..width {
        match bytes.get(col) {
            Some(b) => line.push_str(&format!("{:02X} ", b)),
            None => line.push_str("   "),
        }
    }
    line.push_str(" | ");
    for col in 0..width {
        match bytes.get(col) {
            Some(&b) if (0x20..=0x7E).contains(&b) => line.push(b as char),
            Some(_) => line.push('.'),
            None => line.push(' '),
        }
    }
    line.push('\n');
    line
}

impl MemoryViewer {
    pub fn new() -> Self {
        MemoryViewer { bytes_per_row: 16 }
    }

    pub fn set_bytes_per_row(&mut self, bytes: usize) {
        self.bytes_per_row = bytes;
    }

    pub fn dump_cpu_memory(&self, bus: &mut Bus, start: u16, length: usize) -> String {
        let bytes: Vec<u8> = (0..length)
            .map(|i| bus.read(start.wrapping_add(i as u16)))
            .collect();
        self.dump_bytes(start as usize, &bytes)
    }

    pub fn dump_ppu_memory(
        &self,
        ppu: &Ppu,
        region: MemoryRegion,
        start: usize,
        length: usize,
    ) -> String {
        let data: Vec<u8> = match region {
            MemoryRegion::PpuNametables => {
                let end = (start + length).min(ppu.nametables.len());
                ppu.nametables[start..end].to_vec()
            }
            MemoryRegion::PpuPalette => {
                let end = (start + length).min(ppu.palette_ram.len());
                ppu.palette_ram[start..end].to_vec()
            }
            MemoryRegion::PpuOam => (start..(start + length).min(256)).map(|i| ppu.read_oam(i as u8)).collect(),
            _ => Vec::new(),
        };
        self.dump_bytes(start, &data)
    }

    fn dump_bytes(&self, start: usize, data: &[u8]) -> String {
        data.chunks(self.bytes_per_row)
            .enumerate()
            .map(|(row, chunk)| format_row(start + row * self.bytes_per_row, chunk, self.bytes_per_row))
            .collect()
    }

    /// Naive substring search; returns every starting address where
    /// `pattern` occurs contiguously in `[start, end]`.
    pub fn search_cpu_memory(&self, bus: &mut Bus, pattern: &[u8], start: u16, end: u16) -> Vec<u16> {
        if pattern.is_empty() {
            return Vec::new();
        }

        let mut matches = Vec::new();
        let mut addr = start;
        while addr <= end.saturating_sub(pattern.len() as u16 - 1) {
            let found = pattern
                .iter()
                .enumerate()
                .all(|(i, &b)| bus.read(addr.wrapping_add(i as u16)) == b);
            if found {
                matches.push(addr);
            }
            let next = addr.wrapping_add(1);
            if next < addr {
                break;
            }
            addr = next;
        }
        matches
    }

    pub fn read_byte(&self, bus: &mut Bus, addr: u16) -> u8 {
        bus.read(addr)
    }

    pub fn read_word(&self, bus: &mut Bus, addr: u16) -> u16 {
        let lo = bus.read(addr) as u16;
        let hi = bus.read(addr.wrapping_add(1)) as u16;
        (hi << 8) | lo
    }

    pub fn dump_zero_page(&self, bus: &mut Bus) -> String {
        format!("Zero Page ($0000-$00FF):\n{}", self.dump_cpu_memory(bus, 0x0000, 0x100))
    }

    pub fn dump_stack(&self, bus: &mut Bus) -> String {
        format!("Stack ($0100-$01FF):\n{}", self.dump_cpu_memory(bus, 0x0100, 0x100))
    }

    pub fn dump_palette(&self, ppu: &Ppu) -> String {
        format!(
            "Palette RAM ($3F00-$3F1F):\n{}",
            self.dump_ppu_memory(ppu, MemoryRegion::PpuPalette, 0, 32)
        )
    }

    pub fn dump_oam(&self, ppu: &Ppu) -> String {
        format!(
            "OAM (Sprite Memory):\n{}",
            self.dump_ppu_memory(ppu, MemoryRegion::PpuOam, 0, 256)
        )
    }
}

impl Default for MemoryViewer {
    fn default() -> Self {
        Self::new()
    }
}
