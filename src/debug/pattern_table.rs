// Pattern table dump - renders both CHR pattern tables as a single PNG.

use super::ppu::PpuDebugger;
use crate::ppu::Ppu;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

const TABLE_DIM: u32 = 128;
const OUTPUT_WIDTH: u32 = TABLE_DIM * 2;
const OUTPUT_HEIGHT: u32 = TABLE_DIM;

/// Errors that can occur while dumping pattern tables
#[derive(Debug, Error)]
pub enum PatternTableDumpError {
    #[error("failed to create output file: {0}")]
    Io(#[source] io::Error),
    #[error("failed to encode PNG: {0}")]
    Encoding(#[from] png::EncodingError),
}

/// Map a 2-bit pattern table color index to a grayscale shade
///
/// Pattern tables have no palette assigned, so debug dumps use a fixed
/// 4-level grayscale ramp instead of NES colors.
fn color_index_to_gray(index: u8) -> u8 {
    match index & 0x03 {
        0 => 0x00,
        1 => 0x55,
        2 => 0xAA,
        _ => 0xFF,
    }
}

/// Render both pattern tables side by side and write them to a PNG file
///
/// # Arguments
/// * `ppu` - Reference to the PPU (read via the cartridge mapper)
/// * `output_path` - Where to write the PNG
///
/// # Returns
/// The path the image was written to
pub fn dump_pattern_tables<P: AsRef<Path>>(
    ppu: &Ppu,
    output_path: P,
) -> Result<PathBuf, PatternTableDumpError> {
    let debugger = PpuDebugger::new();
    let left = debugger.pattern_table_image(ppu, 0);
    let right = debugger.pattern_table_image(ppu, 1);

    let mut gray = vec![0u8; (OUTPUT_WIDTH * OUTPUT_HEIGHT) as usize];
    for y in 0..TABLE_DIM as usize {
        for x in 0..TABLE_DIM as usize {
            let row = y * TABLE_DIM as usize;
            gray[row + x] = color_index_to_gray(left[row + x]);
            gray[row + TABLE_DIM as usize + x] = color_index_to_gray(right[row + x]);
        }
    }

    let output_path = output_path.as_ref().to_path_buf();
    if let Some(parent) = output_path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent).map_err(PatternTableDumpError::Io)?;
        }
    }

    let file = fs::File::create(&output_path).map_err(PatternTableDumpError::Io)?;
    let writer = io::BufWriter::new(file);

    let mut encoder = png::Encoder::new(writer, OUTPUT_WIDTH, OUTPUT_HEIGHT);
    encoder.set_color(png::ColorType::Grayscale);
    encoder.set_depth(png::BitDepth::Eight);
    let mut png_writer = encoder.write_header()?;
    png_writer.write_image_data(&gray)?;

    Ok(output_path)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn maps_color_indices_to_four_gray_levels() {
        assert_eq!(color_index_to_gray(0), 0x00);
        assert_eq!(color_index_to_gray(1), 0x55);
        assert_eq!(color_index_to_gray(2), 0xAA);
        assert_eq!(color_index_to_gray(3), 0xFF);
    }

    #[test]
    fn empty_pattern_table_is_all_black() {
        let ppu = Ppu::new();
        let debugger = PpuDebugger::new();
        let image = debugger.pattern_table_image(&ppu, 0);
        assert_eq!(image.len(), 128 * 128);
        assert!(image.iter().all(|&px| px == 0));
    }
}
