//! Shared fixtures for the integration suite.

use std::fs;
use std::path::{Path, PathBuf};
use std::process::Command;

use tempfile::TempDir;

/// Command for the compiled src2png binary.
pub fn run_src2png() -> Command {
    Command::new(env!("CARGO_BIN_EXE_src2png"))
}

/// Write `content` as a source file inside `dir`.
pub fn create_source_file(dir: &TempDir, name: &str, content: &str) -> PathBuf {
    let path = dir.path().join(name);
    fs::write(&path, content).expect("Failed to write source file");
    path
}

/// Decode a PNG file into its header info and raw RGBA bytes.
pub fn decode_png(path: &Path) -> (png::OutputInfo, Vec<u8>) {
    let file = fs::File::open(path).expect("Failed to open output image");
    let decoder = png::Decoder::new(file);
    let mut reader = decoder.read_info().expect("Invalid PNG stream");
    let mut buf = vec![0u8; reader.output_buffer_size()];
    let info = reader.next_frame(&mut buf).expect("Failed to decode frame");
    buf.truncate(info.buffer_size());
    (info, buf)
}

/// RGBA of the pixel at `(x, y)` in a decoded buffer.
pub fn pixel_at(buf: &[u8], width: u32, x: u32, y: u32) -> [u8; 4] {
    let px = (y as usize * width as usize + x as usize) * 4;
    [buf[px], buf[px + 1], buf[px + 2], buf[px + 3]]
}
