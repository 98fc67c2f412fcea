//! src2png library
//!
//! Renders plain-text source code into a PNG image: a first pass resolves
//! the text's extent in character cells, a second pass composites each
//! character's bitmap glyph into an RGBA canvas with per-token colors, a
//! border is framed around the result and the canvas is encoded as PNG.

pub mod canvas;
pub mod dimensions;
pub mod encoder;
pub mod font;
pub mod highlight;
pub mod palette;
pub mod render;

pub use canvas::{Canvas, Color};
pub use dimensions::{measure, SourceExtent, MIN_WIDTH};
pub use encoder::write_png;
#[cfg(feature = "highlight")]
pub use highlight::Highlighter;
pub use highlight::{HighlightedLine, Span};
pub use palette::{Palette, Slot, Theme};
pub use render::{RenderError, Renderer};
