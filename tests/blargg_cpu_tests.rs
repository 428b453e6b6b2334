// CPU test ROM suite: the official instruction set, per-addressing-mode
// instruction tests, timing, interrupts, reset, dummy reads, and exec-space
// behavior. Ignored by default since they need the corresponding .nes images
// under tests/nes-test-rom/.

mod common;

use common::run_blargg_style_test;

fn run_cpu_rom(rom_path: &str) -> Result<(bool, String), String> {
    run_blargg_style_test(rom_path, 100_000_000)
}

macro_rules! cpu_rom_test {
    ($name:ident, $path:expr, $label:expr) => {
        #[test]
        #[ignore]
        fn $name() {
            match run_cpu_rom($path) {
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

cpu_rom_test!(
    blargg_cpu_official,
    "tests/nes-test-rom/blargg_nes_cpu_test5/official.nes",
    "Official Instruction Set"
);

cpu_rom_test!(
    instr_test_v5_all,
    "tests/nes-test-rom/instr_test-v5/all_instrs.nes",
    "Instruction Test v5 - All"
);
cpu_rom_test!(
    instr_test_v5_basics,
    "tests/nes-test-rom/instr_test-v5/rom_singles/01-basics.nes",
    "Instruction Test v5 - Basics"
);
cpu_rom_test!(
    instr_test_v5_implied,
    "tests/nes-test-rom/instr_test-v5/rom_singles/02-implied.nes",
    "Instruction Test v5 - Implied"
);
cpu_rom_test!(
    instr_test_v5_immediate,
    "tests/nes-test-rom/instr_test-v5/rom_singles/03-immediate.nes",
    "Instruction Test v5 - Immediate"
);
cpu_rom_test!(
    instr_test_v5_zero_page,
    "tests/nes-test-rom/instr_test-v5/rom_singles/04-zero_page.nes",
    "Instruction Test v5 - Zero Page"
);
cpu_rom_test!(
    instr_test_v5_zp_xy,
    "tests/nes-test-rom/instr_test-v5/rom_singles/05-zp_xy.nes",
    "Instruction Test v5 - Zero Page X/Y"
);
cpu_rom_test!(
    instr_test_v5_absolute,
    "tests/nes-test-rom/instr_test-v5/rom_singles/06-absolute.nes",
    "Instruction Test v5 - Absolute"
);
cpu_rom_test!(
    instr_test_v5_abs_xy,
    "tests/nes-test-rom/instr_test-v5/rom_singles/07-abs_xy.nes",
    "Instruction Test v5 - Absolute X/Y"
);
cpu_rom_test!(
    instr_test_v5_ind_x,
    "tests/nes-test-rom/instr_test-v5/rom_singles/08-ind_x.nes",
    "Instruction Test v5 - Indirect X"
);
cpu_rom_test!(
    instr_test_v5_ind_y,
    "tests/nes-test-rom/instr_test-v5/rom_singles/09-ind_y.nes",
    "Instruction Test v5 - Indirect Y"
);
cpu_rom_test!(
    instr_test_v5_branches,
    "tests/nes-test-rom/instr_test-v5/rom_singles/10-branches.nes",
    "Instruction Test v5 - Branches"
);
cpu_rom_test!(
    instr_test_v5_stack,
    "tests/nes-test-rom/instr_test-v5/rom_singles/11-stack.nes",
    "Instruction Test v5 - Stack"
);
cpu_rom_test!(
    instr_test_v5_jmp_jsr,
    "tests/nes-test-rom/instr_test-v5/rom_singles/12-jmp_jsr.nes",
    "Instruction Test v5 - JMP/JSR"
);
cpu_rom_test!(
    instr_test_v5_rts,
    "tests/nes-test-rom/instr_test-v5/rom_singles/13-rts.nes",
    "Instruction Test v5 - RTS"
);
cpu_rom_test!(
    instr_test_v5_rti,
    "tests/nes-test-rom/instr_test-v5/rom_singles/14-rti.nes",
    "Instruction Test v5 - RTI"
);
cpu_rom_test!(
    instr_test_v5_brk,
    "tests/nes-test-rom/instr_test-v5/rom_singles/15-brk.nes",
    "Instruction Test v5 - BRK"
);
cpu_rom_test!(
    instr_test_v5_special,
    "tests/nes-test-rom/instr_test-v5/rom_singles/16-special.nes",
    "Instruction Test v5 - Special"
);

cpu_rom_test!(
    cpu_timing_test,
    "tests/nes-test-rom/cpu_timing_test6/cpu_timing_test.nes",
    "CPU Timing"
);

#[test]
#[ignore]
fn cpu_interrupts_v2() {
    let tests = [
        "1-cli_latency.nes",
        "2-nmi_and_brk.nes",
        "3-nmi_and_irq.nes",
        "4-irq_and_dma.nes",
        "5-branch_delays_irq.nes",
    ];

    for test in &tests {
        let path = format!("tests/nes-test-rom/cpu_interrupts_v2/rom_singles/{}", test);
        println!("\nRunning: {}", test);

        match run_cpu_rom(&path) {
            Ok((passed, message)) => {
                println!("{}", message);
                assert!(passed, "{} failed: {}", test, message);
            }
            Err(e) => panic!("{} errored: {}", test, e),
        }
    }
}

cpu_rom_test!(
    cpu_reset,
    "tests/nes-test-rom/cpu_reset/registers.nes",
    "CPU Reset"
);
cpu_rom_test!(
    cpu_dummy_reads,
    "tests/nes-test-rom/cpu_dummy_reads/cpu_dummy_reads.nes",
    "CPU Dummy Reads"
);
cpu_rom_test!(
    cpu_exec_space,
    "tests/nes-test-rom/cpu_exec_space/test_cpu_exec_space_ppuio.nes",
    "CPU Exec Space"
);

cpu_rom_test!(
    instr_misc_all,
    "tests/nes-test-rom/instr_misc/instr_misc.nes",
    "Instruction Misc - All"
);
cpu_rom_test!(
    instr_misc_abs_x_wrap,
    "tests/nes-test-rom/instr_misc/rom_singles/01-abs_x_wrap.nes",
    "Instruction Misc - Absolute X Wrap"
);
cpu_rom_test!(
    instr_misc_branch_wrap,
    "tests/nes-test-rom/instr_misc/rom_singles/02-branch_wrap.nes",
    "Instruction Misc - Branch Wrap"
);
cpu_rom_test!(
    instr_misc_dummy_reads,
    "tests/nes-test-rom/instr_misc/rom_singles/03-dummy_reads.nes",
    "Instruction Misc - Dummy Reads"
);
cpu_rom_test!(
    instr_misc_dummy_reads_apu,
    "tests/nes-test-rom/instr_misc/rom_singles/04-dummy_reads_apu.nes",
    "Instruction Misc - Dummy Reads APU"
);

cpu_rom_test!(
    instr_timing_all,
    "tests/nes-test-rom/instr_timing/instr_timing.nes",
    "Instruction Timing - All"
);
cpu_rom_test!(
    instr_timing_instr,
    "tests/nes-test-rom/instr_timing/rom_singles/1-instr_timing.nes",
    "Instruction Timing"
);
cpu_rom_test!(
    instr_timing_branch,
    "tests/nes-test-rom/instr_timing/rom_singles/2-branch_timing.nes",
    "Branch Timing"
);

cpu_rom_test!(
    branch_timing_basics,
    "tests/nes-test-rom/branch_timing_tests/1.Branch_Basics.nes",
    "Branch Basics"
);
cpu_rom_test!(
    branch_timing_backward,
    "tests/nes-test-rom/branch_timing_tests/2.Backward_Branch.nes",
    "Backward Branch"
);
cpu_rom_test!(
    branch_timing_forward,
    "tests/nes-test-rom/branch_timing_tests/3.Forward_Branch.nes",
    "Forward Branch"
);
