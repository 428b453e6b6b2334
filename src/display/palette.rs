// The NES PPU outputs a 6-bit index into a fixed 64-entry master palette
// rather than direct RGB. $0D/$1D/$2D/$3D are "blacker than black" and
// unstable on real hardware; $x0E/$x0F are unused and render as black. We
// keep all 64 entries (duplicates included) so any index round-trips.

pub const NES_PALETTE: [u32; 64] = [
    0x666666, 0x002A88, 0x1412A7, 0x3B00A4, 0x5C007E, 0x6E0040, 0x6C0600, 0x561D00,
    0x333500, 0x0B4800, 0x005200, 0x004F08, 0x00404D, 0x000000, 0x000000, 0x000000,
    0xADADAD, 0x155FD9, 0x4240FF, 0x7527FE, 0xA01ACC, 0xB71E7B, 0xB53120, 0x994E00,
    0x6B6D00, 0x388700, 0x0C9300, 0x008F32, 0x007C8D, 0x000000, 0x000000, 0x000000,
    0xFFFEFF, 0x64B0FF, 0x9290FF, 0xC676FF, 0xF36AFF, 0xFE6ECC, 0xFE8170, 0xEA9E22,
    0xBCBE00, 0x88D800, 0x5CE430, 0x45E082, 0x48CDDE, 0x4F4F4F, 0x000000, 0x000000,
    0xFFFEFF, 0xC0DFFF, 0xD3D2FF, 0xE8C8FF, 0xFBC2FF, 0xFEC4EA, 0xFECCC5, 0xF7D8A5,
    0xE4E594, 0xCFEF96, 0xBDF4AB, 0xB3F3CC, 0xB5EBF2, 0xB8B8B8, 0x000000, 0x000000,
];

/// Masks `index` to 6 bits before lookup, so callers never need to range-check.
#[inline]
pub fn palette_to_rgb(index: u8) -> u32 {
    NES_PALETTE[(index & 0x3F) as usize]
}

#[inline]
pub fn rgb_to_rgba(rgb: u32) -> [u8; 4] {
    let [_, r, g, b] = rgb.to_be_bytes();
    [r, g, b, 0xFF]
}

#[inline]
pub fn palette_to_rgba(index: u8) -> [u8; 4] {
    rgb_to_rgba(palette_to_rgb(index))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn master_palette_has_exactly_sixty_four_entries() {
        assert_eq!(NES_PALETTE.len(), 64);
    }

    #[test]
    fn index_zero_is_dark_gray_and_thirty_is_white() {
        assert_eq!(palette_to_rgb(0x00), 0x666666);
        assert_eq!(palette_to_rgb(0x30), 0xFFFEFF);
    }

    #[test]
    fn indices_past_sixty_three_wrap_around() {
        assert_eq!(palette_to_rgb(0x40), palette_to_rgb(0x00));
        assert_eq!(palette_to_rgb(0x7F), palette_to_rgb(0x3F));
    }

    #[test]
    fn rgb_to_rgba_splits_bytes_and_forces_opaque_alpha() {
        assert_eq!(rgb_to_rgba(0x123456), [0x12, 0x34, 0x56, 0xFF]);
    }

    #[test]
    fn palette_to_rgba_chains_both_conversions() {
        assert_eq!(palette_to_rgba(0x00), [0x66, 0x66, 0x66, 0xFF]);
    }
}
