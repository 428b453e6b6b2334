// AND/ORA/EOR combine the accumulator with an operand bitwise; BIT tests
// without writing anything back, and uniquely copies bits 6/7 of the
// memory operand straight into V/N rather than deriving them from the result.

use crate::bus::Bus;
use crate::cpu::addressing::AddressingResult;
use crate::cpu::Cpu;

impl Cpu {
    pub fn and(&mut self, bus: &mut Bus, addr_result: &AddressingResult) {
        let value = self.read_operand(bus, addr_result);
        self.a &= value;
        self.update_zero_and_negative_flags(self.a);
    }

    pub fn ora(&mut self, bus: &mut Bus, addr_result: &AddressingResult) {
        let value = self.read_operand(bus, addr_result);
        self.a |= value;
        self.update_zero_and_negative_flags(self.a);
    }

    pub fn eor(&mut self, bus: &mut Bus, addr_result: &AddressingResult) {
        let value = self.read_operand(bus, addr_result);
        self.a ^= value;
        self.update_zero_and_negative_flags(self.a);
    }

    /// Z comes from A & M, but V and N are bits 6 and 7 of M itself, not of the AND result.
    pub fn bit(&mut self, bus: &mut Bus, addr_result: &AddressingResult) {
        let value = self.read_operand(bus, addr_result);
        self.set_zero(self.a & value == 0);
        self.set_overflow(value & 0x40 != 0);
        self.set_negative(value & 0x80 != 0);
    }
}
