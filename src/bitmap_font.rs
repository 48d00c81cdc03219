// Built-in 5x7 bitmap typeface, used whenever the system font cannot be loaded.
// Covers exactly the characters the icon draws.

pub const GLYPH_WIDTH: i32 = 5;
pub const GLYPH_HEIGHT: i32 = 7;
/// Horizontal distance between glyph origins, in cells.
pub const ADVANCE: i32 = GLYPH_WIDTH + 1;

/// Return the 5x7 bitmap for `ch`.
/// Each u8 is a row; the low 5 bits are the pixels (bit 4 = leftmost).
fn glyph5x7(ch: char) -> Option<[u8; 7]> {
    macro_rules! g { ($a:expr,$b:expr,$c:expr,$d:expr,$e:expr,$f:expr,$g:expr) => {
        Some([$a,$b,$c,$d,$e,$f,$g])
    }; }

    match ch {
        '0' => g!(0b01110,0b10001,0b10011,0b10101,0b11001,0b10001,0b01110),
        '1' => g!(0b00100,0b01100,0b00100,0b00100,0b00100,0b00100,0b01110),
        '2' => g!(0b01110,0b10001,0b00001,0b00010,0b00100,0b01000,0b11111),
        '3' => g!(0b11110,0b00001,0b00001,0b01110,0b00001,0b00001,0b11110),
        '4' => g!(0b00010,0b00110,0b01010,0b10010,0b11111,0b00010,0b00010),
        '5' => g!(0b11111,0b10000,0b11110,0b00001,0b00001,0b10001,0b01110),
        '6' => g!(0b00110,0b01000,0b10000,0b11110,0b10001,0b10001,0b01110),
        '7' => g!(0b11111,0b00001,0b00010,0b00100,0b01000,0b01000,0b01000),
        '8' => g!(0b01110,0b10001,0b10001,0b01110,0b10001,0b10001,0b01110),
        '9' => g!(0b01110,0b10001,0b10001,0b01111,0b00001,0b00010,0b01100),

        'x' => g!(0b00000,0b00000,0b10001,0b01010,0b00100,0b01010,0b10001),
        'y' => g!(0b00000,0b00000,0b10001,0b10001,0b01111,0b00001,0b01110),

        // Subscripts sit on the baseline at reduced height.
        '₁' => g!(0b00000,0b00000,0b00100,0b01100,0b00100,0b00100,0b01110),
        '₂' => g!(0b00000,0b00000,0b01100,0b00010,0b00100,0b01000,0b01110),
        '₃' => g!(0b00000,0b00000,0b01110,0b00010,0b00110,0b00010,0b01110),

        '=' => g!(0b00000,0b00000,0b11111,0b00000,0b11111,0b00000,0b00000),
        '+' => g!(0b00000,0b00100,0b00100,0b11111,0b00100,0b00100,0b00000),
        '-' | '−' => g!(0b00000,0b00000,0b00000,0b11111,0b00000,0b00000,0b00000),
        '×' => g!(0b00000,0b10001,0b01010,0b00100,0b01010,0b10001,0b00000),
        '∑' => g!(0b11111,0b10000,0b01000,0b00100,0b01000,0b10000,0b11111),

        ' ' => g!(0b00000,0b00000,0b00000,0b00000,0b00000,0b00000,0b00000),

        _ => None,
    }
}

pub fn has_glyph(ch: char) -> bool {
    glyph5x7(ch).is_some()
}

/// Pixel scale used for a requested point size.
pub fn scale_for(size: f32) -> i32 {
    ((size / 8.0) as i32).max(1)
}

/// Calls `f` for every lit pixel of `text` laid out from origin (0, 0).
/// Unknown characters advance the pen without painting.
pub fn visit_pixels(text: &str, scale: i32, mut f: impl FnMut(i32, i32)) {
    let mut pen_x = 0;
    for ch in text.chars() {
        if let Some(rows) = glyph5x7(ch) {
            for (ry, rowbits) in rows.iter().enumerate() {
                for rx in 0..GLYPH_WIDTH {
                    if rowbits & (1 << (GLYPH_WIDTH - 1 - rx)) == 0 {
                        continue;
                    }
                    let x0 = pen_x + rx * scale;
                    let y0 = ry as i32 * scale;
                    for dy in 0..scale {
                        for dx in 0..scale {
                            f(x0 + dx, y0 + dy);
                        }
                    }
                }
            }
        }
        pen_x += ADVANCE * scale;
    }
}
