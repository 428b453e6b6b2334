// Ring-buffered trace of instruction execution, memory access, and PPU
// events, with filtering/search for replaying what happened.

use super::disassembler::DisassembledInstruction;
use std::collections::VecDeque;
use std::fs::File;
use std::io::Write;
use std::path::Path;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PpuEventType {
    VBlankStart { frame: u64 },
    VBlankEnd { frame: u64 },
    NmiTriggered { cycle: u64 },
    PpuCtrlChange { old: u8, new: u8 },
    PpuMaskChange { old: u8, new: u8 },
    Sprite0Hit { scanline: u16, cycle: u16 },
    ScanlineMilestone { scanline: u16 },
}

impl std::fmt::Display for PpuEventType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::VBlankStart { frame } => write!(f, "VBlank Start (Frame {})", frame),
            Self::VBlankEnd { frame } => write!(f, "VBlank End (Frame {})", frame),
            Self::NmiTriggered { cycle } => write!(f, "NMI Triggered (Cycle {})", cycle),
            Self::PpuCtrlChange { old, new } => write!(f, "PPUCTRL: ${:02X} -> ${:02X}", old, new),
            Self::PpuMaskChange { old, new } => write!(f, "PPUMASK: ${:02X} -> ${:02X}", old, new),
            Self::Sprite0Hit { scanline, cycle } => write!(f, "Sprite 0 Hit (SL:{}, CY:{})", scanline, cycle),
            Self::ScanlineMilestone { scanline } => write!(f, "Scanline {}", scanline),
        }
    }
}

#[derive(Debug, Clone)]
pub enum ExecutionLogEntry {
    Instruction {
        cycle: u64,
        pc: u16,
        instruction: DisassembledInstruction,
        a: u8,
        x: u8,
        y: u8,
        p: u8,
        sp: u8,
    },
    MemoryRead { cycle: u64, address: u16, value: u8, pc: u16 },
    MemoryWrite { cycle: u64, address: u16, value: u8, pc: u16 },
    PpuEvent { cycle: u64, event: PpuEventType },
}

impl ExecutionLogEntry {
    pub fn cycle(&self) -> u64 {
        match self {
            Self::Instruction { cycle, .. }
            | Self::MemoryRead { cycle, .. }
            | Self::MemoryWrite { cycle, .. }
            | Self::PpuEvent { cycle, .. } => *cycle,
        }
    }

    pub fn matches_search(&self, query: &str) -> bool {
        if query.is_empty() {
            return true;
        }
        let query = query.to_lowercase();

        match self {
            Self::Instruction { instruction, .. } => {
                instruction.mnemonic.to_lowercase().contains(&query)
                    || instruction.format_assembly().to_lowercase().contains(&query)
            }
            Self::MemoryRead { address, .. } | Self::MemoryWrite { address, .. } => {
                format!("{:04X}", address).to_lowercase().contains(&query)
            }
            Self::PpuEvent { event, .. } => event.to_string().to_lowercase().contains(&query),
        }
    }
}

impl std::fmt::Display for ExecutionLogEntry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Instruction { cycle, pc, instruction, a, x, y, p, sp } => write!(
                f,
                "[{:08}] ${:04X}: {:20} A:{:02X} X:{:02X} Y:{:02X} P:{:02X} SP:{:02X}",
                cycle, pc, instruction.format_assembly(), a, x, y, p, sp
            ),
            Self::MemoryRead { cycle, address, value, pc } => {
                write!(f, "[{:08}] MEM READ  ${:04X} = ${:02X} (PC: ${:04X})", cycle, address, value, pc)
            }
            Self::MemoryWrite { cycle, address, value, pc } => {
                write!(f, "[{:08}] MEM WRITE ${:04X} = ${:02X} (PC: ${:04X})", cycle, address, value, pc)
            }
            Self::PpuEvent { cycle, event } => write!(f, "[{:08}] PPU: {}", cycle, event),
        }
    }
}

#[derive(Debug, Clone, Copy)]
pub struct LogFilter {
    pub show_instructions: bool,
    pub show_memory_reads: bool,
    pub show_memory_writes: bool,
    pub show_ppu_events: bool,
}

impl Default for LogFilter {
    fn default() -> Self {
        Self {
            show_instructions: true,
            show_memory_reads: false,
            show_memory_writes: false,
            show_ppu_events: false,
        }
    }
}

impl LogFilter {
    pub fn passes(&self, entry: &ExecutionLogEntry) -> bool {
        match entry {
            ExecutionLogEntry::Instruction { .. } => self.show_instructions,
            ExecutionLogEntry::MemoryRead { .. } => self.show_memory_reads,
            ExecutionLogEntry::MemoryWrite { .. } => self.show_memory_writes,
            ExecutionLogEntry::PpuEvent { .. } => self.show_ppu_events,
        }
    }
}

/// Circular trace buffer: each event category logs only while its own
/// toggle is on, and memory events additionally respect an address range filter.
pub struct ExecutionLog {
    entries: VecDeque<ExecutionLogEntry>,
    max_entries: usize,
    log_instructions: bool,
    log_memory_reads: bool,
    log_memory_writes: bool,
    log_ppu_events: bool,
    memory_filter: Option<(u16, u16)>,
}

impl ExecutionLog {
    pub fn new() -> Self {
        Self {
            entries: VecDeque::new(),
            max_entries: 10000,
            log_instructions: true,
            log_memory_reads: false,
            log_memory_writes: false,
            log_ppu_events: false,
            memory_filter: None,
        }
    }

    pub fn set_max_entries(&mut self, max: usize) {
        self.max_entries = max;
        self.trim_if_needed();
    }

    pub fn max_entries(&self) -> usize {
        self.max_entries
    }

    pub fn enable_instruction_logging(&mut self) {
        self.log_instructions = true;
    }

    pub fn disable_instruction_logging(&mut self) {
        self.log_instructions = false;
    }

    pub fn is_instruction_logging_enabled(&self) -> bool {
        self.log_instructions
    }

    pub fn enable_memory_read_logging(&mut self) {
        self.log_memory_reads = true;
    }

    pub fn disable_memory_read_logging(&mut self) {
        self.log_memory_reads = false;
    }

    pub fn is_memory_read_logging_enabled(&self) -> bool {
        self.log_memory_reads
    }

    pub fn enable_memory_write_logging(&mut self) {
        self.log_memory_writes = true;
    }

    pub fn disable_memory_write_logging(&mut self) {
        self.log_memory_writes = false;
    }

    pub fn is_memory_write_logging_enabled(&self) -> bool {
        self.log_memory_writes
    }

    pub fn enable_ppu_event_logging(&mut self) {
        self.log_ppu_events = true;
    }

    pub fn disable_ppu_event_logging(&mut self) {
        self.log_ppu_events = false;
    }

    pub fn is_ppu_event_logging_enabled(&self) -> bool {
        self.log_ppu_events
    }

    pub fn set_memory_filter(&mut self, start: u16, end: u16) {
        self.memory_filter = Some((start, end));
    }

    pub fn clear_memory_filter(&mut self) {
        self.memory_filter = None;
    }

    fn passes_memory_filter(&self, address: u16) -> bool {
        self.memory_filter.map_or(true, |(start, end)| (start..=end).contains(&address))
    }

    #[allow(clippy::too_many_arguments)]
    pub fn log_instruction(
        &mut self,
        cycle: u64,
        pc: u16,
        instruction: DisassembledInstruction,
        a: u8,
        x: u8,
        y: u8,
        p: u8,
        sp: u8,
    ) {
        if !self.log_instructions {
            return;
        }
        self.add_entry(ExecutionLogEntry::Instruction { cycle, pc, instruction, a, x, y, p, sp });
    }

    pub fn log_memory_read(&mut self, cycle: u64, address: u16, value: u8, pc: u16) {
        if !self.log_memory_reads || !self.passes_memory_filter(address) {
            return;
        }
        self.add_entry(ExecutionLogEntry::MemoryRead { cycle, address, value, pc });
    }

    pub fn log_memory_write(&mut self, cycle: u64, address: u16, value: u8, pc: u16) {
        if !self.log_memory_writes || !self.passes_memory_filter(address) {
            return;
        }
        self.add_entry(ExecutionLogEntry::MemoryWrite { cycle, address, value, pc });
    }

    pub fn log_ppu_event(&mut self, cycle: u64, event: PpuEventType) {
        if !self.log_ppu_events {
            return;
        }
        self.add_entry(ExecutionLogEntry::PpuEvent { cycle, event });
    }

    fn add_entry(&mut self, entry: ExecutionLogEntry) {
        self.entries.push_back(entry);
        self.trim_if_needed();
    }

    fn trim_if_needed(&mut self) {
        if self.max_entries > 0 {
            while self.entries.len() > self.max_entries {
                self.entries.pop_front();
            }
        }
    }

    pub fn entries(&self) -> &VecDeque<ExecutionLogEntry> {
        &self.entries
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn export_to_file<P: AsRef<Path>>(&self, path: P, filter: Option<&LogFilter>) -> std::io::Result<()> {
        let mut file = File::create(path)?;
        for entry in self.entries.iter().filter(|e| filter.map_or(true, |f| f.passes(e))) {
            writeln!(file, "{}", entry)?;
        }
        Ok(())
    }

    pub fn get_filtered_entries(&self, query: &str, filter: &LogFilter) -> Vec<&ExecutionLogEntry> {
        self.entries
            .iter()
            .filter(|entry| filter.passes(entry) && entry.matches_search(query))
            .collect()
    }
}

impl Default for ExecutionLog {
    fn default() -> Self {
        Self::new()
    }
}
