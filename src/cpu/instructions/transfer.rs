// Register-to-register transfers. All update Z/N based on the destination's
// new value except TXS, which leaves flags alone since the stack pointer
// isn't a data register.

use crate::cpu::Cpu;

impl Cpu {
    pub fn tax(&mut self) {
        self.x = self.a;
        self.update_zero_and_negative_flags(self.x);
    }

    pub fn tay(&mut self) {
        self.y = self.a;
        self.update_zero_and_negative_flags(self.y);
    }

    pub fn txa(&mut self) {
        self.a = self.x;
        self.update_zero_and_negative_flags(self.a);
    }

    pub fn tya(&mut self) {
        self.a = self.y;
        self.update_zero_and_negative_flags(self.a);
    }

    pub fn tsx(&mut self) {
        self.x = self.sp;
        self.update_zero_and_negative_flags(self.x);
    }

    /// Does not touch Z/N.
    pub fn txs(&mut self) {
        self.sp = self.x;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn flagged_transfer(set: impl FnOnce(&mut Cpu), run: impl FnOnce(&mut Cpu), read: impl Fn(&Cpu) -> u8, value: u8) {
        let mut cpu = Cpu::new();
        set(&mut cpu);
        run(&mut cpu);
        assert_eq!(read(&cpu), value);
        assert_eq!(cpu.get_zero(), value == 0);
        assert_eq!(cpu.get_negative(), value & 0x80 != 0);
    }

    #[test]
    fn tax_copies_accumulator_and_updates_flags() {
        flagged_transfer(|c| c.a = 0x42, |c| c.tax(), |c| c.x, 0x42);
        flagged_transfer(|c| c.a = 0x00, |c| c.tax(), |c| c.x, 0x00);
        flagged_transfer(|c| c.a = 0x80, |c| c.tax(), |c| c.x, 0x80);
    }

    #[test]
    fn tay_copies_accumulator_and_updates_flags() {
        flagged_transfer(|c| c.a = 0x42, |c| c.tay(), |c| c.y, 0x42);
        flagged_transfer(|c| c.a = 0x00, |c| c.tay(), |c| c.y, 0x00);
    }

    #[test]
    fn txa_copies_x_and_updates_flags() {
        flagged_transfer(|c| c.x = 0x42, |c| c.txa(), |c| c.a, 0x42);
        flagged_transfer(|c| c.x = 0xFF, |c| c.txa(), |c| c.a, 0xFF);
    }

    #[test]
    fn tya_copies_y_and_updates_flags() {
        flagged_transfer(|c| c.y = 0x42, |c| c.tya(), |c| c.a, 0x42);
        flagged_transfer(|c| c.y = 0x00, |c| c.tya(), |c| c.a, 0x00);
    }

    #[test]
    fn tsx_copies_stack_pointer_and_updates_flags() {
        flagged_transfer(|c| c.sp = 0x42, |c| c.tsx(), |c| c.x, 0x42);
        flagged_transfer(|c| c.sp = 0xFF, |c| c.tsx(), |c| c.x, 0xFF);
    }

    #[test]
    fn txs_copies_x_to_sp_without_touching_flags() {
        let mut cpu = Cpu::new();
        cpu.x = 0x00;
        cpu.set_zero(false);
        cpu.set_negative(true);

        cpu.txs();

        assert_eq!(cpu.sp, 0x00);
        assert!(!cpu.get_zero());
        assert!(cpu.get_negative());
    }

    #[test]
    fn transfers_chain_through_all_three_data_registers() {
        let mut cpu = Cpu::new();
        cpu.a = 0x42;
        cpu.tax();
        cpu.txa();
        cpu.tay();
        cpu.tya();
        assert_eq!((cpu.a, cpu.x, cpu.y), (0x42, 0x42, 0x42));
    }

    #[test]
    fn stack_pointer_round_trips_through_x() {
        let mut cpu = Cpu::new();
        cpu.x = 0xFF;
        cpu.txs();
        cpu.x = 0x00;
        cpu.tsx();
        assert_eq!(cpu.x, 0xFF);
        assert_eq!(cpu.sp, 0xFF);
    }
}
