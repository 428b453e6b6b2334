// Turns raw opcode bytes back into readable 6502 assembly text, driven by
// the same opcode table the CPU executes from.

use crate::bus::Bus;
use crate::cpu::opcodes::OPCODE_TABLE;

#[derive(Debug, Clone)]
pub struct DisassembledInstruction {
    pub address: u16,
    pub opcode: u8,
    pub mnemonic: String,
    pub addressing_mode: String,
    pub operands: Vec<u8>,
    pub length: u8,
}

impl DisassembledInstruction {
    fn operand_word(&self) -> Option<u16> {
        (self.operands.len() >= 2)
            .then(|| (self.operands[1] as u16) << 8 | self.operands[0] as u16)
    }

    fn operand_byte(&self) -> Option<u8> {
        self.operands.first().copied()
    }

    /// e.g. "LDA #$42", "JMP $8000", or just "NOP" for implied-mode ops.
    pub fn format_assembly(&self) -> String {
        let operand_str = match self.addressing_mode.as_str() {
            "Immediate" => self.operand_byte().map(|b| format!(" #${:02X}", b)),
            "ZeroPage" => self.operand_byte().map(|b| format!(" ${:02X}", b)),
            "ZeroPageX" => self.operand_byte().map(|b| format!(" ${:02X},X", b)),
            "ZeroPageY" => self.operand_byte().map(|b| format!(" ${:02X},Y", b)),
            "Absolute" => self.operand_word().map(|a| format!(" ${:04X}", a)),
            "AbsoluteX" => self.operand_word().map(|a| format!(" ${:04X},X", a)),
            "AbsoluteY" => self.operand_word().map(|a| format!(" ${:04X},Y", a)),
            "Indirect" => self.operand_word().map(|a| format!(" (${:04X})", a)),
            "IndexedIndirect" => self.operand_byte().map(|b| format!(" (${:02X},X)", b)),
            "IndirectIndexed" => self.operand_byte().map(|b| format!(" (${:02X}),Y", b)),
            "Relative" => self.operand_byte().map(|b| {
                let target = self.address.wrapping_add(2).wrapping_add(b as i8 as u16);
                format!(" ${:04X}", target)
            }),
            _ => None,
        };

        format!("{}{}", self.mnemonic, operand_str.unwrap_or_default())
    }

    pub fn format_bytes(&self) -> String {
        std::iter::once(self.opcode)
            .chain(self.operands.iter().copied())
            .map(|b| format!("{:02X}", b))
            .collect::<Vec<_>>()
            .join(" ")
    }
}

impl std::fmt::Display for DisassembledInstruction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "${:04X}  {:8}  {}", self.address, self.format_bytes(), self.format_assembly())
    }
}

pub fn disassemble_instruction(addr: u16, bus: &mut Bus) -> DisassembledInstruction {
    let opcode = bus.read(addr);
    let opcode_info = &OPCODE_TABLE[opcode as usize];

    let operands = (1..opcode_info.bytes)
        .map(|i| bus.read(addr.wrapping_add(i as u16)))
        .collect();

    DisassembledInstruction {
        address: addr,
        opcode,
        mnemonic: opcode_info.mnemonic.to_string(),
        addressing_mode: format!("{:?}", opcode_info.mode),
        operands,
        length: opcode_info.bytes,
    }
}

/// Disassembles instructions starting at `start` up to and including `end`,
/// stepping by each instruction's own length.
pub fn disassemble_range(start: u16, end: u16, bus: &mut Bus) -> Vec<DisassembledInstruction> {
    let mut instructions = Vec::new();
    let mut addr = start;

    while addr <= end {
        let instruction = disassemble_instruction(addr, bus);
        let next = addr.wrapping_add(instruction.length as u16);
        instructions.push(instruction);
        if next < addr {
            break;
        }
        addr = next;
    }

    instructions
}

pub fn disassemble_count(start: u16, count: usize, bus: &mut Bus) -> Vec<DisassembledInstruction> {
    let mut instructions = Vec::with_capacity(count);
    let mut addr = start;

    for _ in 0..count {
        let instruction = disassemble_instruction(addr, bus);
        addr = addr.wrapping_add(instruction.length as u16);
        instructions.push(instruction);
    }

    instructions
}
