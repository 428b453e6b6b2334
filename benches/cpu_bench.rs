// Throughput benchmarks for CPU instruction dispatch: single opcodes in
// isolation, a short mixed loop, and sustained execution over one NES frame
// worth of cycles.

use criterion::{criterion_group, criterion_main, Criterion};
use nespresso::{Bus, Cpu};
use std::hint::black_box;

const NOP: u8 = 0xEA;
const CYCLES_PER_FRAME_NTSC: u64 = 29780;

fn fresh_cpu_and_bus() -> (Cpu, Bus) {
    (Cpu::new(), Bus::new())
}

fn fill_with_nops(bus: &mut Bus, range: std::ops::RangeInclusive<u16>) {
    for addr in range {
        bus.write(addr, NOP);
    }
}

fn bench_single_opcodes(c: &mut Criterion) {
    let mut group = c.benchmark_group("cpu_instructions");

    group.bench_function("nop", |b| {
        let (mut cpu, mut bus) = fresh_cpu_and_bus();
        fill_with_nops(&mut bus, 0..=0xFF);
        cpu.reset(&mut bus);

        b.iter(|| cpu.step(black_box(&mut bus)));
    });

    group.bench_function("lda_immediate", |b| {
        let (mut cpu, mut bus) = fresh_cpu_and_bus();
        for addr in (0..256u16).step_by(2) {
            bus.write(addr, 0xA9);
            bus.write(addr + 1, 0x42);
        }
        cpu.reset(&mut bus);

        b.iter(|| cpu.step(black_box(&mut bus)));
    });

    group.bench_function("adc_immediate", |b| {
        let (mut cpu, mut bus) = fresh_cpu_and_bus();
        for addr in (0..256u16).step_by(2) {
            bus.write(addr, 0x69);
            bus.write(addr + 1, 0x01);
        }
        cpu.reset(&mut bus);

        b.iter(|| cpu.step(black_box(&mut bus)));
    });

    group.bench_function("sta_absolute", |b| {
        let (mut cpu, mut bus) = fresh_cpu_and_bus();
        for addr in (0..256u16).step_by(3) {
            if addr + 2 < 256 {
                bus.write(addr, 0x8D);
                bus.write(addr + 1, 0x00);
                bus.write(addr + 2, 0x02);
            }
        }
        cpu.reset(&mut bus);

        b.iter(|| cpu.step(black_box(&mut bus)));
    });

    group.bench_function("jmp_absolute", |b| {
        let (mut cpu, mut bus) = fresh_cpu_and_bus();
        bus.write(0xC000, 0x4C);
        bus.write(0xC001, 0x00);
        bus.write(0xC002, 0xC0);
        cpu.reset(&mut bus);
        cpu.pc = 0xC000;

        b.iter(|| cpu.step(black_box(&mut bus)));
    });

    group.finish();
}

/// A small loop (LDA/STA/LDX/INX/DEX/BNE) representative of real program code,
/// rather than one opcode repeated in isolation.
fn bench_mixed_loop(c: &mut Criterion) {
    let mut group = c.benchmark_group("instruction_sequences");

    group.bench_function("typical_sequence", |b| {
        let (mut cpu, mut bus) = fresh_cpu_and_bus();
        let program: [u8; 11] = [
            0xA9, 0x00, // LDA #$00
            0x8D, 0x00, 0x02, // STA $0200
            0xA2, 0x05, // LDX #$05
            0xE8, // INX
            0xCA, // DEX
            0xD0, // BNE back to LDA
        ];
        let base = 0xC000u16;
        for (i, &byte) in program.iter().enumerate() {
            bus.write(base + i as u16, byte);
        }
        bus.write(base + program.len() as u16, 0xF6_u8.wrapping_sub(1)); // branch offset, placed after the opcode above
        bus.write(base + 10, 0xF6); // -10 bytes, back to the LDA

        cpu.reset(&mut bus);
        cpu.pc = base;

        b.iter(|| {
            for _ in 0..11 {
                cpu.step(black_box(&mut bus));
            }
        });
    });

    group.finish();
}

fn bench_sustained_execution(c: &mut Criterion) {
    let mut group = c.benchmark_group("frame_execution");
    group.sample_size(20);

    group.bench_function("1000_cycles", |b| {
        let (mut cpu, mut bus) = fresh_cpu_and_bus();
        fill_with_nops(&mut bus, 0..=0xFFFF);
        cpu.reset(&mut bus);

        b.iter(|| {
            let start = cpu.cycles;
            while cpu.cycles - start < 1000 {
                cpu.step(black_box(&mut bus));
            }
        });
    });

    group.bench_function("one_ntsc_frame", |b| {
        let (mut cpu, mut bus) = fresh_cpu_and_bus();
        fill_with_nops(&mut bus, 0..=0xFFFF);
        cpu.reset(&mut bus);

        b.iter(|| {
            let start = cpu.cycles;
            while cpu.cycles - start < CYCLES_PER_FRAME_NTSC {
                cpu.step(black_box(&mut bus));
            }
        });
    });

    group.finish();
}

criterion_group!(
    benches,
    bench_single_opcodes,
    bench_mixed_loop,
    bench_sustained_execution
);
criterion_main!(benches);
