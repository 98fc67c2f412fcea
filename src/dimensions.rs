//! First pass over the input: resolve the text extent in character cells.
//!
//! The scan is strictly newline vs. non-newline; no character is otherwise
//! interpreted. The caller reopens the file (or rewinds the reader) for the
//! render pass.

use std::io::{self, BufRead};

/// Narrow sources are widened to this many columns.
pub const MIN_WIDTH: u32 = 80;

/// Source size in character cells.
///
/// `width` is the longest line (characters before the newline), floored at
/// [`MIN_WIDTH`]. `height` is the number of newline characters: zero for a
/// file with no newlines, even a non-empty one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SourceExtent {
    pub width: u32,
    pub height: u32,
}

/// Scan `input` to the end and return its extent.
///
/// End of stream terminates the scan; no trailing newline is required.
pub fn measure<R: BufRead>(mut input: R) -> io::Result<SourceExtent> {
    let mut width = 0u32;
    let mut height = 0u32;
    let mut col = 0u32;

    loop {
        let buf = input.fill_buf()?;
        if buf.is_empty() {
            break;
        }

        for &byte in buf {
            if byte == b'\n' {
                height += 1;
                col = 0;
            } else {
                col += 1;
                if width < col {
                    width = col;
                }
            }
        }

        let consumed = buf.len();
        input.consume(consumed);
    }

    Ok(SourceExtent {
        width: width.max(MIN_WIDTH),
        height,
    })
}
