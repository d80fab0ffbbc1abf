//! 5x7 bitmap text for the timing overlay.

use crate::{pixel::Argb, screen};

/// Horizontal distance between the left edges of two adjacent glyphs.
pub const ADVANCE: u32 = 6;

/// Distance from the bottom edge of the image to the top of the text.
pub const BOTTOM_MARGIN: u32 = 20;

/// Rows of a glyph, top to bottom; bit 4 is the leftmost column.
fn glyph(ch: char) -> Option<[u8; 7]> {
    let rows = match ch {
        ' ' => [0; 7],
        '.' => [0b00000, 0b00000, 0b00000, 0b00000, 0b00000, 0b01100, 0b01100],
        '0' => [0b01110, 0b10001, 0b10011, 0b10101, 0b11001, 0b10001, 0b01110],
        '1' => [0b00100, 0b01100, 0b00100, 0b00100, 0b00100, 0b00100, 0b01110],
        '2' => [0b01110, 0b10001, 0b00001, 0b00010, 0b00100, 0b01000, 0b11111],
        '3' => [0b11111, 0b00010, 0b00100, 0b00010, 0b00001, 0b10001, 0b01110],
        '4' => [0b00010, 0b00110, 0b01010, 0b10010, 0b11111, 0b00010, 0b00010],
        '5' => [0b11111, 0b10000, 0b11110, 0b00001, 0b00001, 0b10001, 0b01110],
        '6' => [0b00110, 0b01000, 0b10000, 0b11110, 0b10001, 0b10001, 0b01110],
        '7' => [0b11111, 0b00001, 0b00010, 0b00100, 0b01000, 0b01000, 0b01000],
        '8' => [0b01110, 0b10001, 0b10001, 0b01110, 0b10001, 0b10001, 0b01110],
        '9' => [0b01110, 0b10001, 0b10001, 0b01111, 0b00001, 0b00010, 0b01100],
        'd' => [0b00001, 0b00001, 0b01101, 0b10011, 0b10001, 0b10001, 0b01111],
        'e' => [0b00000, 0b00000, 0b01110, 0b10001, 0b11111, 0b10000, 0b01110],
        'i' => [0b00100, 0b00000, 0b01100, 0b00100, 0b00100, 0b00100, 0b01110],
        'm' => [0b00000, 0b00000, 0b11010, 0b10101, 0b10101, 0b10001, 0b10001],
        'n' => [0b00000, 0b00000, 0b10110, 0b11001, 0b10001, 0b10001, 0b10001],
        'o' => [0b00000, 0b00000, 0b01110, 0b10001, 0b10001, 0b10001, 0b01110],
        's' => [0b00000, 0b00000, 0b01110, 0b10000, 0b01110, 0b00001, 0b11110],
        _ => return None,
    };
    Some(rows)
}

pub fn text_width(text: &str) -> u32 {
    text.chars().count() as u32 * ADVANCE
}

/// Top-left corner of `text` anchored to the bottom-right of an image.
/// Text wider than the image starts at the left edge instead.
pub fn bottom_right_origin(size: screen::Size, text: &str) -> (i32, i32) {
    let x = size.width as i32 - text_width(text) as i32;
    let y = size.height as i32 - BOTTOM_MARGIN as i32;
    (x.max(0), y)
}

/// Draw `text` into `frame` with its top-left corner at `(x, y)`. Pixels
/// outside the frame are skipped, as are characters without a glyph.
pub fn draw_text(
    frame: &mut [Argb],
    size: screen::Size,
    mut x: i32,
    y: i32,
    text: &str,
    colour: Argb,
) {
    debug_assert_eq!(frame.len(), size.pixel_count());

    let (width, height) = (size.width as i32, size.height as i32);
    for ch in text.chars() {
        if let Some(rows) = glyph(ch) {
            for (row, bits) in rows.iter().enumerate() {
                for column in 0..5 {
                    if bits & (1 << (4 - column)) == 0 {
                        continue;
                    }
                    let px = x + column;
                    let py = y + row as i32;
                    if px >= 0 && px < width && py >= 0 && py < height {
                        frame[size.index(px as u32, py as u32)] = colour;
                    }
                }
            }
        }
        x += ADVANCE as i32;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const WHITE: Argb = 0xFFFF_FFFF;
    const BLACK: Argb = 0xFF00_0000;

    #[test]
    fn covers_timing_message() {
        for ch in " done in 0123456789ms.".chars() {
            assert!(glyph(ch).is_some(), "missing glyph {ch:?}");
        }
    }

    #[test]
    fn message_sits_in_bottom_right_corner() {
        let size = screen::Size::square(1024);
        let message = " done in 42ms.";
        assert_eq!(text_width(message), 84);
        assert_eq!(bottom_right_origin(size, message), (940, 1004));
    }

    #[test]
    fn wide_text_is_pinned_left() {
        let size = screen::Size::square(16);
        assert_eq!(bottom_right_origin(size, " done in 100ms."), (0, -4));
    }

    #[test]
    fn draws_glyph_bits() {
        let size = screen::Size {
            width: 12,
            height: 7,
        };
        let mut frame = vec![BLACK; size.pixel_count()];
        draw_text(&mut frame, size, 0, 0, "1.", WHITE);

        // Stem of the '1'.
        for row in 0..7 {
            assert_eq!(frame[size.index(2, row)], WHITE);
        }
        assert_eq!(frame[size.index(0, 0)], BLACK);
        // The '.' occupies the bottom two rows of the second cell.
        assert_eq!(frame[size.index(ADVANCE + 1, 5)], WHITE);
        assert_eq!(frame[size.index(ADVANCE + 2, 6)], WHITE);
        assert_eq!(frame[size.index(ADVANCE + 1, 4)], BLACK);
    }

    #[test]
    fn clips_at_the_frame_edges() {
        let size = screen::Size::square(4);

        // Rows 3..7 of both '8's are visible: the last two columns of the first
        // one at x = 0..2 and the first column of the second one at x = 3. The
        // remaining glyphs start past the right edge.
        let mut frame = vec![BLACK; size.pixel_count()];
        draw_text(&mut frame, size, -3, -3, "88 ?88", WHITE);
        #[rustfmt::skip]
        let expected = [
            WHITE, BLACK, BLACK, BLACK,
            BLACK, WHITE, BLACK, WHITE,
            BLACK, WHITE, BLACK, WHITE,
            WHITE, BLACK, BLACK, BLACK,
        ];
        assert_eq!(frame, expected);

        // Top-left 2x2 of an '8' at (2, 2): rows 01110 and 10001.
        let mut frame = vec![BLACK; size.pixel_count()];
        draw_text(&mut frame, size, 2, 2, "8", WHITE);
        #[rustfmt::skip]
        let expected = [
            BLACK, BLACK, BLACK, BLACK,
            BLACK, BLACK, BLACK, BLACK,
            BLACK, BLACK, BLACK, WHITE,
            BLACK, BLACK, WHITE, BLACK,
        ];
        assert_eq!(frame, expected);
    }
}
