// Explicit flag set/clear instructions: CLC/SEC, CLI/SEI, CLD/SED, CLV.
// Each is a plain bit twiddle with no operand and no extra cycles.
//
// Decimal mode has no effect on this CPU's ADC/SBC (the 2A03 never
// implemented BCD), so CLD/SED exist only for 6502 source compatibility.
// There is deliberately no SEV: hardware only ever sets V via ADC/SBC/BIT.

use crate::bus::Bus;
use crate::cpu::addressing::AddressingResult;
use crate::cpu::flags;
use crate::cpu::Cpu;

impl Cpu {
    pub fn clc(&mut self, _bus: &mut Bus, _addr_result: &AddressingResult) -> u8 {
        self.clear_flag(flags::CARRY);
        0
    }

    pub fn sec(&mut self, _bus: &mut Bus, _addr_result: &AddressingResult) -> u8 {
        self.set_flag(flags::CARRY);
        0
    }

    /// Only affects IRQ; NMI is never maskable.
    pub fn cli(&mut self, _bus: &mut Bus, _addr_result: &AddressingResult) -> u8 {
        self.clear_flag(flags::INTERRUPT_DISABLE);
        0
    }

    pub fn sei(&mut self, _bus: &mut Bus, _addr_result: &AddressingResult) -> u8 {
        self.set_flag(flags::INTERRUPT_DISABLE);
        0
    }

    pub fn cld(&mut self, _bus: &mut Bus, _addr_result: &AddressingResult) -> u8 {
        self.clear_flag(flags::DECIMAL);
        0
    }

    pub fn sed(&mut self, _bus: &mut Bus, _addr_result: &AddressingResult) -> u8 {
        self.set_flag(flags::DECIMAL);
        0
    }

    pub fn clv(&mut self, _bus: &mut Bus, _addr_result: &AddressingResult) -> u8 {
        self.clear_flag(flags::OVERFLOW);
        0
    }
}

#[cfg(test)]
mod tests {
    use crate::bus::Bus;
    use crate::cpu::addressing::AddressingResult;
    use crate::cpu::flags;
    use crate::cpu::Cpu;

    /// Runs `op` against a CPU whose status is a known pattern, then checks
    /// that exactly `mask` flipped and nothing else moved.
    fn assert_flips_only(op: impl Fn(&mut Cpu, &mut Bus, &AddressingResult) -> u8, mask: u8, expect_set: bool) {
        let mut cpu = Cpu::new();
        let mut bus = Bus::new();
        cpu.status = 0b11001111;
        let initial = cpu.status;

        let cycles = op(&mut cpu, &mut bus, &AddressingResult::new(0));

        assert_eq!(cycles, 0);
        assert_eq!(cpu.status & mask != 0, expect_set);
        assert_eq!(cpu.status & !mask, initial & !mask);
    }

    #[test]
    fn clc_clears_only_carry() {
        assert_flips_only(Cpu::clc, flags::CARRY, false);
    }

    #[test]
    fn sec_sets_only_carry() {
        assert_flips_only(Cpu::sec, flags::CARRY, true);
    }

    #[test]
    fn cli_clears_only_interrupt_disable() {
        assert_flips_only(Cpu::cli, flags::INTERRUPT_DISABLE, false);
    }

    #[test]
    fn sei_sets_only_interrupt_disable() {
        assert_flips_only(Cpu::sei, flags::INTERRUPT_DISABLE, true);
    }

    #[test]
    fn cld_clears_only_decimal() {
        assert_flips_only(Cpu::cld, flags::DECIMAL, false);
    }

    #[test]
    fn sed_sets_only_decimal() {
        assert_flips_only(Cpu::sed, flags::DECIMAL, true);
    }

    #[test]
    fn clv_clears_only_overflow() {
        assert_flips_only(Cpu::clv, flags::OVERFLOW, false);
    }

    #[test]
    fn each_flag_is_idempotent_when_already_in_the_target_state() {
        let mut cpu = Cpu::new();
        let mut bus = Bus::new();

        cpu.set_carry(false);
        cpu.clc(&mut bus, &AddressingResult::new(0));
        assert!(!cpu.get_carry());

        cpu.set_decimal(true);
        cpu.sed(&mut bus, &AddressingResult::new(0));
        assert!(cpu.get_decimal());
    }

    #[test]
    fn set_and_clear_pairs_toggle_cleanly() {
        let mut cpu = Cpu::new();
        let mut bus = Bus::new();

        cpu.sec(&mut bus, &AddressingResult::new(0));
        assert!(cpu.get_carry());
        cpu.clc(&mut bus, &AddressingResult::new(0));
        assert!(!cpu.get_carry());

        cpu.sei(&mut bus, &AddressingResult::new(0));
        assert!(cpu.get_interrupt_disable());
        cpu.cli(&mut bus, &AddressingResult::new(0));
        assert!(!cpu.get_interrupt_disable());
    }

    #[test]
    fn there_is_no_instruction_that_sets_overflow() {
        let mut cpu = Cpu::new();
        let mut bus = Bus::new();
        cpu.set_overflow(false);

        cpu.clc(&mut bus, &AddressingResult::new(0));
        cpu.sec(&mut bus, &AddressingResult::new(0));
        cpu.cli(&mut bus, &AddressingResult::new(0));
        cpu.sei(&mut bus, &AddressingResult::new(0));
        cpu.cld(&mut bus, &AddressingResult::new(0));
        cpu.sed(&mut bus, &AddressingResult::new(0));

        assert!(!cpu.get_overflow());
    }

    #[test]
    fn unused_status_bit_stays_set_through_every_flag_instruction() {
        let mut cpu = Cpu::new();
        let mut bus = Bus::new();
        assert!(cpu.get_flag(flags::UNUSED));

        for op in [Cpu::clc, Cpu::sec, Cpu::cli, Cpu::sei, Cpu::cld, Cpu::sed, Cpu::clv] {
            op(&mut cpu, &mut bus, &AddressingResult::new(0));
        }

        assert!(cpu.get_flag(flags::UNUSED));
    }
}
