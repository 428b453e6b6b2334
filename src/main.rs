// NES Emulator - Main Entry Point
//
// Parses the fixed CLI surface, loads a ROM, and either opens the
// windowed emulator or runs a headless debug session with CPU tracing
// and breakpoint support.

use nespresso::debug::{dump_pattern_tables, LogLevel};
use nespresso::display::{run_emulator_full, WindowConfig};
use nespresso::input::{InputConfig, KeyboardHandler};
use nespresso::{Debugger, Emulator};
use std::env;
use std::process::ExitCode;

const INPUT_CONFIG_PATH: &str = "input_config.toml";

struct Args {
    rom_path: String,
    debug: bool,
    pattern_tables: bool,
    breakpoint: Option<u16>,
}

fn parse_args(mut args: impl Iterator<Item = String>) -> Result<Args, String> {
    args.next(); // skip argv[0]

    let mut rom_path = None;
    let mut debug = false;
    let mut pattern_tables = false;
    let mut breakpoint = None;

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--debug" => debug = true,
            "--pt" => pattern_tables = true,
            "--break" => {
                let value = args
                    .next()
                    .ok_or_else(|| "--break requires a hex address argument".to_string())?;
                let value = value.trim_start_matches("0x");
                let addr = u16::from_str_radix(value, 16)
                    .map_err(|_| format!("invalid breakpoint address: {}", value))?;
                breakpoint = Some(addr);
            }
            other if !other.starts_with('-') && rom_path.is_none() => {
                rom_path = Some(other.to_string());
            }
            other => return Err(format!("unrecognized argument: {}", other)),
        }
    }

    let rom_path = rom_path.ok_or_else(|| {
        "usage: emu <rom.nes> [--debug] [--pt] [--break <hex-addr>]".to_string()
    })?;

    Ok(Args {
        rom_path,
        debug,
        pattern_tables,
        breakpoint,
    })
}

fn run() -> Result<(), String> {
    let args = parse_args(env::args())?;

    let mut emulator = Emulator::new();
    emulator
        .load_rom(&args.rom_path)
        .map_err(|err| format!("failed to load '{}': {}", args.rom_path, err))?;

    if args.pattern_tables {
        match dump_pattern_tables(emulator.bus().ppu(), "pattern_tables.png") {
            Ok(path) => println!("Pattern tables written to {}", path.display()),
            Err(err) => eprintln!("Failed to dump pattern tables: {}", err),
        }
    }

    let debugger = if args.debug || args.breakpoint.is_some() {
        let mut debugger = Debugger::new();
        debugger.enable();

        if args.debug {
            debugger.logger.set_log_level(LogLevel::Trace);
            debugger.logger.enable_cpu_trace();
            debugger.logger.enable_stdout_echo();
        }

        if let Some(addr) = args.breakpoint {
            debugger.add_breakpoint(addr);
        }

        Some(debugger)
    } else {
        None
    };

    let video = emulator.config().video.clone();
    let window_config = WindowConfig::new()
        .with_scale(video.scale)
        .with_fps(video.fps)
        .with_vsync(video.vsync);

    let input_config = InputConfig::load_or_default(INPUT_CONFIG_PATH);
    let keyboard_handler = match (
        input_config.keyboard_player1.to_keyboard_mapping(),
        input_config.keyboard_player2.to_keyboard_mapping(),
    ) {
        (Ok(p1), Ok(p2)) => KeyboardHandler::with_mappings(p1, p2),
        (Err(err), _) | (_, Err(err)) => {
            eprintln!("Invalid key mapping in '{}': {}", INPUT_CONFIG_PATH, err);
            KeyboardHandler::new()
        }
    };

    run_emulator_full(window_config, emulator, debugger, keyboard_handler)
        .map_err(|err| format!("display error: {}", err))
}

fn main() -> ExitCode {
    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("{}", err);
            ExitCode::FAILURE
        }
    }
}
