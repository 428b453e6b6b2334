// Mapper 0 (NROM): no bank switching at all, the baseline every other
// mapper is a variation on.
//
// $8000-$BFFF mirrors the first 16KB of PRG-ROM, $C000-$FFFF the last
// 16KB (for a 16KB cart, "last 16KB" is the same bank again). CHR space
// is a flat 8KB window, ROM or RAM depending on what the header declared.

use crate::cartridge::{Cartridge, Mapper, Mirroring};

pub struct Mapper0 {
    prg: Vec<u8>,
    chr: Vec<u8>,
    chr_writable: bool,
    mirroring: Mirroring,
}

impl Mapper0 {
    /// Builds an NROM mapper over the cartridge's PRG/CHR banks.
    ///
    /// # Panics
    /// If PRG-ROM isn't exactly 16KB or 32KB — NROM only ever shipped in
    /// those two sizes, and the cartridge loader should have rejected
    /// anything else before a mapper is constructed.
    pub fn new(cartridge: Cartridge) -> Self {
        let prg_len = cartridge.prg_rom.len();
        assert!(
            prg_len == 16 * 1024 || prg_len == 32 * 1024,
            "NROM requires 16KB or 32KB PRG-ROM, got {} bytes",
            prg_len
        );

        // The loader allocates a zeroed 8KB CHR-RAM window when the header
        // declares zero CHR-ROM banks; an all-zero 8KB buffer is the tell.
        let chr_writable =
            cartridge.chr_rom.len() == 8 * 1024 && cartridge.chr_rom.iter().all(|&b| b == 0);

        Mapper0 {
            prg: cartridge.prg_rom,
            chr: cartridge.chr_rom,
            chr_writable,
            mirroring: cartridge.mirroring,
        }
    }
}

impl Mapper for Mapper0 {
    fn cpu_read(&self, address: u16) -> u8 {
        if address < 0x8000 {
            return 0;
        }
        let offset = (address - 0x8000) as usize;
        self.prg[offset % self.prg.len()]
    }

    fn cpu_write(&mut self, _address: u16, _value: u8) {
        // NROM has no registers; PRG space is pure ROM.
    }

    fn ppu_read(&self, address: u16) -> u8 {
        match self.chr.get(address as usize) {
            Some(&byte) => byte,
            None => 0,
        }
    }

    fn ppu_write(&mut self, address: u16, value: u8) {
        if self.chr_writable {
            if let Some(slot) = self.chr.get_mut(address as usize) {
                *slot = value;
            }
        }
    }

    fn mirroring(&self) -> Mirroring {
        self.mirroring
    }
}
