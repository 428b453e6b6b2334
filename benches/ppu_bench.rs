// Rendering-path benchmarks: full frames, bare step cost, register access,
// and OAM traffic.

use criterion::{criterion_group, criterion_main, Criterion};
use nespresso::cartridge::mappers::Mapper0;
use nespresso::{Cartridge, MemoryMappedDevice, Mirroring, Ppu};
use std::cell::RefCell;
use std::hint::black_box;
use std::rc::Rc;

const PPUCTRL: u16 = 0x2000;
const PPUMASK: u16 = 0x2001;
const PPUSTATUS: u16 = 0x2002;
const OAMADDR: u16 = 0x2003;
const OAMDATA: u16 = 0x2004;
const PPUADDR: u16 = 0x2006;
const PPUDATA: u16 = 0x2007;

const CYCLES_PER_SCANLINE: usize = 341;
const SCANLINES_PER_FRAME: usize = 262;
const CYCLES_PER_FRAME: usize = CYCLES_PER_SCANLINE * SCANLINES_PER_FRAME;

fn chr_cartridge() -> Cartridge {
    let mut cart = Cartridge::new();
    cart.prg_rom = vec![0; 16 * 1024];
    cart.chr_rom = vec![0xAA; 8 * 1024];
    cart.mirroring = Mirroring::Horizontal;
    cart
}

fn ppu_with_mapper() -> Ppu {
    let mut ppu = Ppu::new();
    let mapper = Mapper0::new(chr_cartridge());
    let mapper_rc = Rc::new(RefCell::new(Box::new(mapper) as Box<dyn nespresso::Mapper>));
    ppu.set_mapper(mapper_rc);
    ppu
}

fn bench_full_frame(c: &mut Criterion) {
    let mut group = c.benchmark_group("ppu_frame");
    group.sample_size(20);

    group.bench_function("rendering_enabled", |b| {
        let mut ppu = ppu_with_mapper();
        ppu.set_mirroring(Mirroring::Horizontal);
        ppu.write(PPUMASK, 0b0001_1110); // background and sprites on

        b.iter(|| {
            for _ in 0..CYCLES_PER_FRAME {
                ppu.step();
            }
            black_box(ppu.frame());
        });
    });

    group.finish();
}

fn bench_step_granularity(c: &mut Criterion) {
    let mut group = c.benchmark_group("ppu_step");

    group.bench_function("single_cycle", |b| {
        let mut ppu = ppu_with_mapper();
        b.iter(|| black_box(ppu.step()));
    });

    group.bench_function("one_scanline", |b| {
        let mut ppu = ppu_with_mapper();
        b.iter(|| {
            for _ in 0..CYCLES_PER_SCANLINE {
                ppu.step();
            }
        });
    });

    group.finish();
}

fn bench_register_access(c: &mut Criterion) {
    let mut group = c.benchmark_group("ppu_registers");

    group.bench_function("ppuctrl_write", |b| {
        let mut ppu = ppu_with_mapper();
        b.iter(|| ppu.write(black_box(PPUCTRL), black_box(0b1001_0000)));
    });

    group.bench_function("ppustatus_read", |b| {
        let mut ppu = ppu_with_mapper();
        b.iter(|| black_box(ppu.read(PPUSTATUS)));
    });

    // Sets the VRAM address once, then streams 32 sequential PPUDATA writes.
    group.bench_function("ppudata_write_burst", |b| {
        let mut ppu = ppu_with_mapper();
        b.iter(|| {
            ppu.write(PPUADDR, 0x20);
            ppu.write(PPUADDR, 0x00);
            for value in 0..32u8 {
                ppu.write(PPUDATA, value);
            }
        });
    });

    group.finish();
}

fn bench_oam_traffic(c: &mut Criterion) {
    let mut group = c.benchmark_group("ppu_oam");

    group.bench_function("full_oam_write", |b| {
        let mut ppu = ppu_with_mapper();
        b.iter(|| {
            ppu.write(OAMADDR, 0);
            for value in 0..=255u8 {
                ppu.write(OAMDATA, value);
            }
        });
    });

    group.bench_function("oamdata_read", |b| {
        let mut ppu = ppu_with_mapper();
        b.iter(|| black_box(ppu.read(OAMDATA)));
    });

    group.finish();
}

criterion_group!(
    benches,
    bench_full_frame,
    bench_step_granularity,
    bench_register_access,
    bench_oam_traffic
);
criterion_main!(benches);
