//! src2png - CLI entry point

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Parser;

#[cfg(feature = "highlight")]
use src2png::Highlighter;
#[cfg(not(feature = "highlight"))]
use src2png::HighlightedLine;
use src2png::{measure, write_png, Palette, Renderer, Theme};

#[derive(Parser)]
#[command(name = "src2png")]
#[command(about = "Render source code files to syntax-highlighted PNG images")]
#[command(version)]
struct Cli {
    /// Source file to render
    input: PathBuf,

    /// Destination PNG file
    output: PathBuf,

    /// TOML theme file overriding the built-in palette
    #[arg(long, value_name = "FILE")]
    theme: Option<PathBuf>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    cmd_render(&cli.input, &cli.output, cli.theme.as_deref())
}

fn cmd_render(input: &Path, output: &Path, theme: Option<&Path>) -> Result<()> {
    let palette = match theme {
        Some(path) => Palette::from_theme(&Theme::load(path)?)?,
        None => Palette::default(),
    };

    // First pass: resolve the character-cell extent
    let extent = measure(open_input(input)?)
        .with_context(|| format!("Failed to read from: {}", input.display()))?;
    tracing::debug!(width = extent.width, height = extent.height, "resolved source extent");
    println!(
        "Source contains {} rows and {} cols.",
        extent.height, extent.width
    );

    let mut renderer = Renderer::new(extent, palette);
    println!(
        "Generating {}x{} image...",
        renderer.width_px(),
        renderer.height_px()
    );

    // Second pass: reopen the input and composite line by line
    #[cfg(feature = "highlight")]
    let mut highlighter = Highlighter::new();

    let mut reader = open_input(input)?;
    let mut raw = Vec::new();
    loop {
        raw.clear();
        let n = reader
            .read_until(b'\n', &mut raw)
            .with_context(|| format!("Failed to read from: {}", input.display()))?;
        if n == 0 {
            break;
        }
        let text = decode_line(&raw);

        #[cfg(feature = "highlight")]
        let line = highlighter.classify_line(&text);
        #[cfg(not(feature = "highlight"))]
        let line = HighlightedLine::plain(&text);

        renderer.draw_line(&line)?;
    }

    renderer.draw_border();
    write_png(renderer.finish(), output)?;

    println!("Done.");
    Ok(())
}

fn open_input(path: &Path) -> Result<BufReader<File>> {
    let file =
        File::open(path).with_context(|| format!("Can't open file: \"{}\"", path.display()))?;
    Ok(BufReader::new(file))
}

/// Strip the line terminator and decode the bytes as text.
///
/// A trailing `\r` (CRLF input) goes with the newline. Bytes that are not
/// valid UTF-8 decode to the replacement character and render as the
/// fallback glyph.
fn decode_line(raw: &[u8]) -> String {
    let mut bytes = raw;
    if bytes.last() == Some(&b'\n') {
        bytes = &bytes[..bytes.len() - 1];
    }
    if bytes.last() == Some(&b'\r') {
        bytes = &bytes[..bytes.len() - 1];
    }
    String::from_utf8_lossy(bytes).into_owned()
}
