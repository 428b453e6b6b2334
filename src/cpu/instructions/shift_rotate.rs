// ASL/LSR/ROL/ROR. Each can target the accumulator or a memory operand, so
// every instruction reads the operand, shifts it, pushes the flag-affecting
// bit to carry, and writes the result back to wherever it came from.

use crate::bus::Bus;
use crate::cpu::addressing::AddressingResult;
use crate::cpu::Cpu;

impl Cpu {
    fn shiftable_operand(&self, bus: &mut Bus, addr_result: &AddressingResult, is_accumulator: bool) -> u8 {
        if is_accumulator {
            self.a
        } else {
            bus.read(addr_result.address)
        }
    }

    fn store_shift_result(&mut self, bus: &mut Bus, addr_result: &AddressingResult, is_accumulator: bool, result: u8) {
        if is_accumulator {
            self.a = result;
        } else {
            bus.write(addr_result.address, result);
        }
        self.update_zero_and_negative_flags(result);
    }

    /// C <- [76543210] <- 0
    pub fn asl(&mut self, bus: &mut Bus, addr_result: &AddressingResult, is_accumulator: bool) {
        let value = self.shiftable_operand(bus, addr_result, is_accumulator);
        self.set_carry(value & 0x80 != 0);
        let result = value << 1;
        self.store_shift_result(bus, addr_result, is_accumulator, result);
    }

    /// 0 -> [76543210] -> C
    pub fn lsr(&mut self, bus: &mut Bus, addr_result: &AddressingResult, is_accumulator: bool) {
        let value = self.shiftable_operand(bus, addr_result, is_accumulator);
        self.set_carry(value & 0x01 != 0);
        let result = value >> 1;
        self.store_shift_result(bus, addr_result, is_accumulator, result);
    }

    /// C <- [76543210] <- C
    pub fn rol(&mut self, bus: &mut Bus, addr_result: &AddressingResult, is_accumulator: bool) {
        let value = self.shiftable_operand(bus, addr_result, is_accumulator);
        let old_carry = self.get_carry() as u8;
        self.set_carry(value & 0x80 != 0);
        let result = (value << 1) | old_carry;
        self.store_shift_result(bus, addr_result, is_accumulator, result);
    }

    /// C -> [76543210] -> C
    pub fn ror(&mut self, bus: &mut Bus, addr_result: &AddressingResult, is_accumulator: bool) {
        let value = self.shiftable_operand(bus, addr_result, is_accumulator);
        let old_carry = if self.get_carry() { 0x80 } else { 0 };
        self.set_carry(value & 0x01 != 0);
        let result = (value >> 1) | old_carry;
        self.store_shift_result(bus, addr_result, is_accumulator, result);
    }
}
