// NES Emulator - Game Runner
//
// This example demonstrates running a NES ROM.

use nespresso::emulator::Emulator;
use std::env;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("nespresso v0.1.0");
    println!("==============================");
    println!();

    // Get ROM path from command line
    let args: Vec<String> = env::args().collect();
    if args.len() < 2 {
        eprintln!("Usage: {} <rom_path>", args[0]);
        eprintln!();
        eprintln!("Example:");
        eprintln!("  {} game.nes", args[0]);
        eprintln!("  {} \"assets/JPA/Dragon Quest.nes\"", args[0]);
        std::process::exit(1);
    }

    let rom_path = &args[1];

    // Create and initialize emulator
    println!("Initializing emulator...");
    let mut emulator = Emulator::new();

    // Load ROM
    println!("Loading ROM: {}", rom_path);
    match emulator.load_rom(rom_path) {
        Ok(()) => println!("✓ ROM loaded successfully"),
        Err(e) => {
            eprintln!("✗ Failed to load ROM: {}", e);
            std::process::exit(1);
        }
    }
    println!();

    println!("Emulator initialized successfully!");
    println!();

    let frames = 60;
    println!("Running {} frames headless...", frames);
    for _ in 0..frames {
        emulator.run_frame();
    }
    println!(
        "✓ Ran {} frames, CPU cycle count: {}",
        frames,
        emulator.cpu().cycles
    );
    println!();
    println!("For the full windowed experience run the binary instead:");
    println!("  cargo run --release -- {}", rom_path);

    Ok(())
}
