use image::Rgba;

/// An opaque RGB color. Every color the icon uses is fully opaque.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const ALPHA: u8 = 255;

    pub const fn opaque(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

impl From<Color> for Rgba<u8> {
    fn from(c: Color) -> Self {
        Rgba([c.r, c.g, c.b, Color::ALPHA])
    }
}

/// The five colors the icon is painted with.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Palette {
    pub background: Color,
    pub panel: Color,
    pub accent: Color,
    pub text: Color,
    pub white: Color,
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            background: Color::opaque(250, 248, 245), // off-white
            panel: Color::opaque(245, 240, 235),      // light beige
            accent: Color::opaque(210, 200, 185),     // mid beige
            text: Color::opaque(60, 55, 50),          // dark brown
            white: Color::opaque(255, 255, 255),
        }
    }
}

/// Inclusive pixel bounds in canvas coordinates.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Rect {
    pub left: i32,
    pub top: i32,
    pub right: i32,
    pub bottom: i32,
}

impl Rect {
    pub const fn new(left: i32, top: i32, right: i32, bottom: i32) -> Self {
        Self { left, top, right, bottom }
    }

    /// A square whose top-left corner is at (x, y) and whose far corner is
    /// `side` units away.
    pub const fn square(x: i32, y: i32, side: i32) -> Self {
        Self::new(x, y, x + side, y + side)
    }

    pub const fn width(&self) -> i32 {
        self.right - self.left
    }

    pub const fn height(&self) -> i32 {
        self.bottom - self.top
    }

    pub const fn intersects(&self, other: &Rect) -> bool {
        self.left <= other.right
            && other.left <= self.right
            && self.top <= other.bottom
            && other.top <= self.bottom
    }
}

/// Labels of the 4x4 button grid, row by row.
pub const BUTTON_SYMBOLS: [[&str; 4]; 4] = [
    ["x₁", "x₂", "x₃", "="],
    ["1", "2", "3", "+"],
    ["4", "5", "6", "-"],
    ["7", "8", "9", "×"],
];

pub const EQUATION_TEXT: &str = "2x + 3y = 7";
pub const CORNER_GLYPH: &str = "∑";

/// Every constant the renderer and exporter read.
#[derive(Clone, Debug, PartialEq)]
pub struct IconConfig {
    pub size: u32,
    pub palette: Palette,
    pub margin: i32,
    pub panel_radius: i32,
    pub panel_outline: i32,
    /// Extra inset of the screen from the panel edge.
    pub screen_inset: i32,
    pub screen_height: i32,
    pub screen_radius: i32,
    pub screen_outline: i32,
    /// Gap between the bottom of the screen and the first button row.
    pub button_gap: i32,
    pub button_size: i32,
    pub button_spacing: i32,
    pub button_radius: i32,
    pub button_outline: i32,
    /// Distance of the corner glyph from the bottom-right margin corner.
    pub corner_offset: i32,
    pub font_family: String,
    pub equation_font_size: f32,
    pub button_font_size: f32,
    pub corner_font_size: f32,
    pub ico_sizes: Vec<u32>,
    pub ico_file: String,
    pub preview_file: String,
}

impl Default for IconConfig {
    fn default() -> Self {
        Self {
            size: 256,
            palette: Palette::default(),
            margin: 20,
            panel_radius: 20,
            panel_outline: 3,
            screen_inset: 15,
            screen_height: 60,
            screen_radius: 8,
            screen_outline: 2,
            button_gap: 20,
            button_size: 35,
            button_spacing: 10,
            button_radius: 6,
            button_outline: 1,
            corner_offset: 30,
            font_family: "Arial".to_string(),
            equation_font_size: 16.0,
            button_font_size: 12.0,
            corner_font_size: 24.0,
            ico_sizes: vec![16, 32, 48, 64, 128, 256],
            ico_file: "calculator.ico".to_string(),
            preview_file: "calculator_icon_preview.png".to_string(),
        }
    }
}

impl IconConfig {
    fn side(&self) -> i32 {
        self.size as i32
    }

    pub fn panel_rect(&self) -> Rect {
        let m = self.margin;
        Rect::new(m, m, self.side() - m, self.side() - m)
    }

    pub fn screen_margin(&self) -> i32 {
        self.margin + self.screen_inset
    }

    pub fn screen_rect(&self) -> Rect {
        let m = self.screen_margin();
        Rect::new(m, m, self.side() - m, m + self.screen_height)
    }

    /// Distance between the top-left corners of neighbouring buttons.
    pub fn button_stride(&self) -> i32 {
        self.button_size + self.button_spacing
    }

    pub fn button_region_top(&self) -> i32 {
        self.screen_rect().bottom + self.button_gap
    }

    pub fn button_rect(&self, row: usize, col: usize) -> Rect {
        let x = self.screen_margin() + col as i32 * self.button_stride();
        let y = self.button_region_top() + row as i32 * self.button_stride();
        Rect::square(x, y, self.button_size)
    }

    /// Top-left anchor of the decorative corner glyph.
    pub fn corner_anchor(&self) -> (i32, i32) {
        let at = self.side() - self.margin - self.corner_offset;
        (at, at)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn palette_is_opaque() {
        let p = Palette::default();
        for c in [p.background, p.panel, p.accent, p.text, p.white] {
            assert_eq!(Rgba::<u8>::from(c).0[3], Color::ALPHA);
        }
    }

    #[test]
    fn default_geometry() {
        let cfg = IconConfig::default();
        assert_eq!(cfg.panel_rect(), Rect::new(20, 20, 236, 236));
        assert_eq!(cfg.screen_rect(), Rect::new(35, 35, 221, 95));
        assert_eq!(cfg.button_region_top(), 115);
        assert_eq!(cfg.button_rect(0, 0), Rect::new(35, 115, 70, 150));
        assert_eq!(cfg.button_rect(3, 3), Rect::new(170, 250, 205, 285));
        assert_eq!(cfg.corner_anchor(), (206, 206));
    }

    #[test]
    fn buttons_step_by_stride_without_overlap() {
        let cfg = IconConfig::default();
        assert_eq!(cfg.button_stride(), 45);
        for row in 0..4 {
            for col in 0..4 {
                let r = cfg.button_rect(row, col);
                assert_eq!(r.width(), 35);
                assert_eq!(r.height(), 35);
                if col < 3 {
                    let right = cfg.button_rect(row, col + 1);
                    assert_eq!(right.left - r.left, 45);
                    assert_eq!(right.top, r.top);
                    assert!(!r.intersects(&right));
                }
                if row < 3 {
                    let below = cfg.button_rect(row + 1, col);
                    assert_eq!(below.top - r.top, 45);
                    assert_eq!(below.left, r.left);
                    assert!(!r.intersects(&below));
                }
            }
        }
    }
}
