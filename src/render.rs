//! Glyph, highlight and border compositing.
//!
//! The [`Renderer`] is the explicit rendering context: it owns the canvas,
//! the cursor and the palette for the duration of one file. Callers feed it
//! one [`HighlightedLine`] per physical input line, then draw the border
//! and take the canvas back for encoding.

use thiserror::Error;

use crate::canvas::{Canvas, Color};
use crate::dimensions::SourceExtent;
use crate::font::{self, GLYPH_HEIGHT, GLYPH_WIDTH};
use crate::highlight::{HighlightedLine, Span};
use crate::palette::{Palette, Slot, PALETTE_SIZE};

/// Tab stops expand to this many space characters.
pub const TAB_WIDTH: u32 = 4;

/// Thickness of the frame drawn around the finished image, in pixels.
pub const BORDER_WIDTH: u32 = 2;

/// Rendering failures.
///
/// These are contract bugs between the classifier and the renderer, not
/// user errors; they abort the conversion rather than degrade the output.
#[derive(Debug, Error)]
pub enum RenderError {
    #[error("Palette index {index} out of range (palette has {size} slots)")]
    PaletteIndexOutOfRange { index: u8, size: usize },
}

/// Current position in character cells.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Cursor {
    pub col: u32,
    pub row: u32,
}

/// Rendering context for one file.
pub struct Renderer {
    canvas: Canvas,
    cursor: Cursor,
    palette: Palette,
    grid: SourceExtent,
}

impl Renderer {
    /// Allocate the canvas for `extent` and clear it to the background.
    pub fn new(extent: SourceExtent, palette: Palette) -> Self {
        let canvas = Canvas::new(extent.width, extent.height, palette.color(Slot::Background));
        Self {
            canvas,
            cursor: Cursor::default(),
            palette,
            grid: extent,
        }
    }

    pub fn width_px(&self) -> u32 {
        self.canvas.width_px()
    }

    pub fn height_px(&self) -> u32 {
        self.canvas.height_px()
    }

    pub fn canvas(&self) -> &Canvas {
        &self.canvas
    }

    pub fn cursor(&self) -> Cursor {
        self.cursor
    }

    /// Composite one character at the cursor.
    ///
    /// Newline moves to the start of the next row, tab expands to
    /// [`TAB_WIDTH`] spaces, everything else stencils its glyph bitmap
    /// (foreground where the bit is set, background elsewhere) and advances
    /// the cursor one column. Cells outside the measured grid are clipped:
    /// the cursor still advances but nothing is drawn, so tab expansion or
    /// an unterminated final line can never write past the canvas.
    pub fn put_char(&mut self, c: char, fg: Color, bg: Color) {
        match c {
            '\n' => self.newline(),
            '\t' => {
                for _ in 0..TAB_WIDTH {
                    self.put_char(' ', fg, bg);
                }
            }
            _ => {
                if self.cursor.row < self.grid.height && self.cursor.col < self.grid.width {
                    let glyph = font::glyph(c);
                    let px = Canvas::char_x_to_px(self.cursor.col);
                    let py = Canvas::char_y_to_px(self.cursor.row);

                    for fy in 0..GLYPH_HEIGHT {
                        for fx in 0..GLYPH_WIDTH {
                            let color = if font::glyph_bit(glyph, fx, fy) { fg } else { bg };
                            self.canvas.set_pixel(px + fx, py + fy, color);
                        }
                    }
                }
                self.cursor.col += 1;
            }
        }
    }

    fn newline(&mut self) {
        self.cursor.row += 1;
        self.cursor.col = 0;
    }

    /// Draw one classified line and advance to the next row.
    ///
    /// Colors are resolved per span, so the active pair implicitly resets
    /// to (default, background) at every new line.
    pub fn draw_line(&mut self, line: &HighlightedLine) -> Result<(), RenderError> {
        for span in &line.spans {
            let (fg, bg) = self.span_colors(span)?;
            for c in span.text.chars() {
                self.put_char(c, fg, bg);
            }
        }
        self.newline();
        Ok(())
    }

    #[cfg(feature = "highlight")]
    fn span_colors(&self, span: &Span) -> Result<(Color, Color), RenderError> {
        let lookup = |index: u8| {
            self.palette
                .get(index)
                .ok_or(RenderError::PaletteIndexOutOfRange {
                    index,
                    size: PALETTE_SIZE,
                })
        };
        Ok((lookup(span.fg)?, lookup(span.bg)?))
    }

    /// Without the classifier compiled in, span colors are skipped and
    /// everything renders as (default, background).
    #[cfg(not(feature = "highlight"))]
    fn span_colors(&self, _span: &Span) -> Result<(Color, Color), RenderError> {
        Ok((
            self.palette.color(Slot::Default),
            self.palette.color(Slot::Background),
        ))
    }

    /// Frame the canvas with [`BORDER_WIDTH`] thick edges.
    ///
    /// Drawn last; the border overwrites any text pixels in its bands.
    pub fn draw_border(&mut self) {
        let w = self.canvas.width_px();
        let h = self.canvas.height_px();
        let color = self.palette.color(Slot::Border);

        self.canvas.fill_rect(0, 0, w, BORDER_WIDTH, color);
        self.canvas.fill_rect(0, 0, BORDER_WIDTH, h, color);
        self.canvas.fill_rect(0, h - BORDER_WIDTH, w, BORDER_WIDTH, color);
        self.canvas.fill_rect(w - BORDER_WIDTH, 0, BORDER_WIDTH, h, color);
    }

    /// Hand the finished canvas to the encoder.
    pub fn finish(self) -> Canvas {
        self.canvas
    }
}
