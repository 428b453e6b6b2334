// Conditional branches: BCC/BCS, BEQ/BNE, BMI/BPL, BVC/BVS. None touch flags;
// each just tests a status bit and defers to the shared branch() helper for
// the PC update and cycle accounting.

use crate::bus::Bus;
use crate::cpu::addressing::AddressingResult;
use crate::cpu::Cpu;

impl Cpu {
    pub fn bcc(&mut self, _bus: &mut Bus, addr_result: &AddressingResult) -> u8 {
        self.branch(!self.get_carry(), addr_result)
    }

    pub fn bcs(&mut self, _bus: &mut Bus, addr_result: &AddressingResult) -> u8 {
        self.branch(self.get_carry(), addr_result)
    }

    pub fn beq(&mut self, _bus: &mut Bus, addr_result: &AddressingResult) -> u8 {
        self.branch(self.get_zero(), addr_result)
    }

    pub fn bne(&mut self, _bus: &mut Bus, addr_result: &AddressingResult) -> u8 {
        self.branch(!self.get_zero(), addr_result)
    }

    pub fn bmi(&mut self, _bus: &mut Bus, addr_result: &AddressingResult) -> u8 {
        self.branch(self.get_negative(), addr_result)
    }

    pub fn bpl(&mut self, _bus: &mut Bus, addr_result: &AddressingResult) -> u8 {
        self.branch(!self.get_negative(), addr_result)
    }

    pub fn bvc(&mut self, _bus: &mut Bus, addr_result: &AddressingResult) -> u8 {
        self.branch(!self.get_overflow(), addr_result)
    }

    pub fn bvs(&mut self, _bus: &mut Bus, addr_result: &AddressingResult) -> u8 {
        self.branch(self.get_overflow(), addr_result)
    }

    /// 0 extra cycles if not taken, 1 if taken, 2 if taken across a page boundary.
    #[inline]
    fn branch(&mut self, condition: bool, addr_result: &AddressingResult) -> u8 {
        if !condition {
            return 0;
        }
        self.pc = addr_result.address;
        if addr_result.page_crossed {
            2
        } else {
            1
        }
    }
}
