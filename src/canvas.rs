use crate::models::{Color, Rect};
use image::{Rgba, RgbaImage};
use imageproc::drawing::{draw_filled_circle_mut, draw_filled_rect_mut};
use imageproc::rect::Rect as PixelRect;

/// The square RGBA surface every layer of the icon is painted onto.
pub struct Canvas {
    image: RgbaImage,
}

impl Canvas {
    /// Allocates a `size`x`size` canvas filled with `background`.
    pub fn new(size: u32, background: Color) -> Self {
        Self {
            image: RgbaImage::from_pixel(size, size, background.into()),
        }
    }

    pub fn size(&self) -> u32 {
        self.image.width()
    }

    pub fn image(&self) -> &RgbaImage {
        &self.image
    }

    pub fn into_image(self) -> RgbaImage {
        self.image
    }

    /// Pixel at (x, y), or `None` when it falls off the canvas.
    pub fn pixel(&self, x: i32, y: i32) -> Option<Rgba<u8>> {
        if x < 0 || y < 0 {
            return None;
        }
        self.image.get_pixel_checked(x as u32, y as u32).copied()
    }

    /// Overwrites one pixel, ignoring coordinates outside the canvas.
    pub fn put_pixel(&mut self, x: i32, y: i32, color: Rgba<u8>) {
        if let Some(px) = self.pixel_mut(x, y) {
            *px = color;
        }
    }

    /// Composites `color` over the existing pixel with the given coverage in [0, 1].
    pub fn blend_pixel(&mut self, x: i32, y: i32, color: Rgba<u8>, coverage: f32) {
        let coverage = coverage.clamp(0.0, 1.0);
        if coverage <= 0.0 {
            return;
        }
        if let Some(px) = self.pixel_mut(x, y) {
            let a = coverage * color.0[3] as f32 / 255.0;
            for i in 0..3 {
                let mixed = color.0[i] as f32 * a + px.0[i] as f32 * (1.0 - a);
                px.0[i] = mixed.round() as u8;
            }
            let alpha = a * 255.0 + px.0[3] as f32 * (1.0 - a);
            px.0[3] = alpha.round().min(255.0) as u8;
        }
    }

    fn pixel_mut(&mut self, x: i32, y: i32) -> Option<&mut Rgba<u8>> {
        if x < 0 || y < 0 {
            return None;
        }
        self.image.get_pixel_mut_checked(x as u32, y as u32)
    }

    /// Draws a rounded rectangle with inclusive bounds.
    ///
    /// The outline is painted first as a solid shape in `outline`, then the
    /// interior inset by `outline_width` is painted in `fill`, so the stroke
    /// sits entirely inside `rect`.
    pub fn rounded_rect(&mut self, rect: Rect, radius: i32, fill: Color, outline: Color, outline_width: i32) {
        if outline_width > 0 {
            self.fill_rounded(rect, radius, outline.into());
            let w = outline_width;
            let inner = Rect::new(rect.left + w, rect.top + w, rect.right - w, rect.bottom - w);
            if inner.width() >= 0 && inner.height() >= 0 {
                self.fill_rounded(inner, (radius - w).max(0), fill.into());
            }
        } else {
            self.fill_rounded(rect, radius, fill.into());
        }
    }

    fn fill_rounded(&mut self, rect: Rect, radius: i32, color: Rgba<u8>) {
        let w = rect.width() + 1;
        let h = rect.height() + 1;
        if w <= 0 || h <= 0 {
            return;
        }
        let r = radius.clamp(0, (w.min(h) - 1) / 2);

        // Cross of two rectangles covers everything but the corner fillets.
        let wide = w - 2 * r;
        let tall = h - 2 * r;
        if wide > 0 {
            draw_filled_rect_mut(
                &mut self.image,
                PixelRect::at(rect.left + r, rect.top).of_size(wide as u32, h as u32),
                color,
            );
        }
        if tall > 0 {
            draw_filled_rect_mut(
                &mut self.image,
                PixelRect::at(rect.left, rect.top + r).of_size(w as u32, tall as u32),
                color,
            );
        }
        if r > 0 {
            for (cx, cy) in [
                (rect.left + r, rect.top + r),
                (rect.right - r, rect.top + r),
                (rect.left + r, rect.bottom - r),
                (rect.right - r, rect.bottom - r),
            ] {
                draw_filled_circle_mut(&mut self.image, (cx, cy), r, color);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const BG: Color = Color::opaque(0, 0, 0);
    const FILL: Color = Color::opaque(255, 255, 255);
    const EDGE: Color = Color::opaque(200, 0, 0);

    fn rgba(c: Color) -> Option<Rgba<u8>> {
        Some(c.into())
    }

    #[test]
    fn new_canvas_is_solid_background() {
        let canvas = Canvas::new(16, Color::opaque(1, 2, 3));
        assert_eq!(canvas.size(), 16);
        assert!(canvas.image().pixels().all(|p| *p == Rgba([1, 2, 3, 255])));
    }

    #[test]
    fn rounded_rect_outline_and_fill() {
        let mut canvas = Canvas::new(64, BG);
        canvas.rounded_rect(Rect::new(10, 10, 50, 40), 6, FILL, EDGE, 2);

        // Straight edges carry the outline, two pixels thick.
        assert_eq!(canvas.pixel(30, 10), rgba(EDGE));
        assert_eq!(canvas.pixel(30, 11), rgba(EDGE));
        assert_eq!(canvas.pixel(30, 12), rgba(FILL));
        assert_eq!(canvas.pixel(50, 25), rgba(EDGE));
        assert_eq!(canvas.pixel(30, 25), rgba(FILL));

        // Corners are cut off, outside stays untouched.
        assert_eq!(canvas.pixel(10, 10), rgba(BG));
        assert_eq!(canvas.pixel(50, 40), rgba(BG));
        assert_eq!(canvas.pixel(9, 25), rgba(BG));
        assert_eq!(canvas.pixel(51, 25), rgba(BG));
    }

    #[test]
    fn rounded_rect_clips_at_canvas_edge() {
        let mut canvas = Canvas::new(32, BG);
        canvas.rounded_rect(Rect::new(20, 20, 60, 60), 4, FILL, EDGE, 1);
        assert_eq!(canvas.pixel(31, 31), rgba(FILL));
        assert_eq!(canvas.pixel(25, 20), rgba(EDGE));
    }

    #[test]
    fn blend_pixel_mixes_by_coverage() {
        let mut canvas = Canvas::new(4, Color::opaque(0, 0, 0));
        canvas.blend_pixel(1, 1, Rgba([200, 100, 50, 255]), 0.5);
        assert_eq!(canvas.pixel(1, 1), Some(Rgba([100, 50, 25, 255])));
        canvas.blend_pixel(2, 2, Rgba([200, 100, 50, 255]), 0.0);
        assert_eq!(canvas.pixel(2, 2), Some(Rgba([0, 0, 0, 255])));
        canvas.blend_pixel(-1, 9, Rgba([200, 100, 50, 255]), 1.0);
    }
}
