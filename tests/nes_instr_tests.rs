// Alternative instruction test suite, one ROM per addressing mode plus a
// branch/stack/special pass. Ignored by default since it needs the
// corresponding .nes images under tests/nes-test-rom/.

mod common;

use common::run_blargg_style_test;

fn run_nes_instr_test(rom_path: &str) -> Result<(bool, String), String> {
    run_blargg_style_test(rom_path, 100_000_000)
}

macro_rules! nes_instr_rom_test {
    ($name:ident, $path:expr, $label:expr) => {
        #[test]
        #[ignore]
        fn $name() {
            match run_nes_instr_test($path) {
                Ok((passed, message)) => {
                    println!("\n{}:", $label);
                    println!("{}", message);
                    assert!(passed, "{} failed: {}", $label, message);
                }
                Err(e) => panic!("{} errored: {}", $label, e),
            }
        }
    };
}

nes_instr_rom_test!(
    nes_instr_implied,
    "tests/nes-test-rom/nes_instr_test/rom_singles/01-implied.nes",
    "Implied Addressing"
);
nes_instr_rom_test!(
    nes_instr_immediate,
    "tests/nes-test-rom/nes_instr_test/rom_singles/02-immediate.nes",
    "Immediate Addressing"
);
nes_instr_rom_test!(
    nes_instr_zero_page,
    "tests/nes-test-rom/nes_instr_test/rom_singles/03-zero_page.nes",
    "Zero Page Addressing"
);
nes_instr_rom_test!(
    nes_instr_zp_xy,
    "tests/nes-test-rom/nes_instr_test/rom_singles/04-zp_xy.nes",
    "Zero Page X/Y Addressing"
);
nes_instr_rom_test!(
    nes_instr_absolute,
    "tests/nes-test-rom/nes_instr_test/rom_singles/05-absolute.nes",
    "Absolute Addressing"
);
nes_instr_rom_test!(
    nes_instr_abs_xy,
    "tests/nes-test-rom/nes_instr_test/rom_singles/06-abs_xy.nes",
    "Absolute X/Y Addressing"
);
nes_instr_rom_test!(
    nes_instr_ind_x,
    "tests/nes-test-rom/nes_instr_test/rom_singles/07-ind_x.nes",
    "Indexed Indirect (X) Addressing"
);
nes_instr_rom_test!(
    nes_instr_ind_y,
    "tests/nes-test-rom/nes_instr_test/rom_singles/08-ind_y.nes",
    "Indirect Indexed (Y) Addressing"
);
nes_instr_rom_test!(
    nes_instr_branches,
    "tests/nes-test-rom/nes_instr_test/rom_singles/09-branches.nes",
    "Branch Instructions"
);
nes_instr_rom_test!(
    nes_instr_stack,
    "tests/nes-test-rom/nes_instr_test/rom_singles/10-stack.nes",
    "Stack Operations"
);
nes_instr_rom_test!(
    nes_instr_special,
    "tests/nes-test-rom/nes_instr_test/rom_singles/11-special.nes",
    "Special Instructions"
);
