//! Library-level pipeline tests: measure, render, encode, decode.

use std::io::Cursor;

use src2png::canvas::{LINE_SPACING, MARGIN};
use src2png::encoder;
use src2png::font::{GLYPH_HEIGHT, GLYPH_WIDTH};
use src2png::{measure, HighlightedLine, Palette, Renderer};

fn render_plain(source: &str) -> (u32, u32, Vec<u8>) {
    let extent = measure(Cursor::new(source)).unwrap();
    let mut renderer = Renderer::new(extent, Palette::default());
    for line in source.lines() {
        renderer.draw_line(&HighlightedLine::plain(line)).unwrap();
    }
    renderer.draw_border();

    let canvas = renderer.finish();
    let (w, h) = (canvas.width_px(), canvas.height_px());
    let encoded = encoder::encode(canvas).unwrap();

    let decoder = png::Decoder::new(&encoded[..]);
    let mut reader = decoder.read_info().unwrap();
    let mut buf = vec![0u8; reader.output_buffer_size()];
    let info = reader.next_frame(&mut buf).unwrap();
    assert_eq!((info.width, info.height), (w, h));
    buf.truncate(info.buffer_size());
    (w, h, buf)
}

#[test]
fn buffer_size_is_exactly_width_height_rgba() {
    let (w, h, buf) = render_plain("fn main() {}\n");
    assert_eq!(buf.len(), (w * h * 4) as usize);
}

#[test]
fn three_lines_make_three_text_rows() {
    let (_, h, _) = render_plain("a\nb\nc\n");
    assert_eq!(h, 2 * MARGIN + 3 * (GLYPH_HEIGHT + LINE_SPACING));
}

#[test]
fn unterminated_final_line_is_not_a_row() {
    // Height is the newline count; the dangling "b" is clipped, not drawn
    let (_, h, _) = render_plain("a\nb");
    assert_eq!(h, 2 * MARGIN + GLYPH_HEIGHT + LINE_SPACING);
}

#[test]
fn wide_line_grows_the_canvas() {
    let line = "#".repeat(200);
    let (w, _, _) = render_plain(&format!("{}\n", line));
    assert_eq!(w, 2 * MARGIN + 200 * GLYPH_WIDTH);
}

#[test]
fn file_of_newlines_renders_blank_rows() {
    let (w, h, buf) = render_plain("\n\n\n\n");
    assert_eq!(h, 2 * MARGIN + 4 * (GLYPH_HEIGHT + LINE_SPACING));
    assert_eq!(buf.len(), (w * h * 4) as usize);
}
