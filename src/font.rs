//! Font handles for the three text draws of the icon.
//!
//! Every call to [`Typeface::load`] resolves the preferred family through the
//! system font database again. When that fails the built-in bitmap face is
//! returned instead, so loading never fails and one failed lookup does not
//! affect the next.

use crate::bitmap_font;
use crate::canvas::Canvas;
use crate::error::{IconError, Result};
use crate::models::{Color, Rect};
use ab_glyph::{point, Font, FontVec, Glyph, OutlinedGlyph, PxScale, ScaleFont};
use image::Rgba;
use tracing::debug;

/// Ink bounds of a laid-out string relative to its layout origin.
/// `max_x`/`max_y` are exclusive.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct TextBounds {
    pub min_x: i32,
    pub min_y: i32,
    pub max_x: i32,
    pub max_y: i32,
}

impl TextBounds {
    pub fn width(&self) -> i32 {
        self.max_x - self.min_x
    }

    pub fn height(&self) -> i32 {
        self.max_y - self.min_y
    }

    fn include(&mut self, other: TextBounds, first: bool) {
        if first {
            *self = other;
            return;
        }
        self.min_x = self.min_x.min(other.min_x);
        self.min_y = self.min_y.min(other.min_y);
        self.max_x = self.max_x.max(other.max_x);
        self.max_y = self.max_y.max(other.max_y);
    }
}

/// A font handle for one text draw, either a loaded system face or the
/// built-in bitmap face.
pub enum Typeface {
    /// A system font at a pixel scale.
    Outline { font: FontVec, scale: PxScale },
    /// The built-in bitmap face at an integer pixel scale.
    Builtin { scale: i32 },
}

impl Typeface {
    /// Loads `family` at `size`, or the built-in face if it cannot be loaded.
    pub fn load(family: &str, size: f32) -> Self {
        match load_system_font(family) {
            Ok(font) => {
                debug!(family, size, "using system typeface");
                Typeface::Outline {
                    font,
                    scale: PxScale::from(size),
                }
            }
            Err(err) => {
                debug!(%err, size, "falling back to built-in typeface");
                Self::builtin(size)
            }
        }
    }

    pub fn builtin(size: f32) -> Self {
        Typeface::Builtin {
            scale: bitmap_font::scale_for(size),
        }
    }

    pub fn is_builtin(&self) -> bool {
        matches!(self, Typeface::Builtin { .. })
    }

    /// Ink bounding box of `text` laid out from origin (0, 0).
    /// Empty when nothing would be painted.
    pub fn measure(&self, text: &str) -> TextBounds {
        let mut bounds = TextBounds::default();
        let mut first = true;
        match self {
            Typeface::Outline { font, scale } => {
                for outlined in outline(font, *scale, text) {
                    let px = outlined.px_bounds();
                    let glyph = TextBounds {
                        min_x: px.min.x.floor() as i32,
                        min_y: px.min.y.floor() as i32,
                        max_x: px.max.x.ceil() as i32,
                        max_y: px.max.y.ceil() as i32,
                    };
                    bounds.include(glyph, first);
                    first = false;
                }
            }
            Typeface::Builtin { scale } => {
                bitmap_font::visit_pixels(text, *scale, |x, y| {
                    let px = TextBounds { min_x: x, min_y: y, max_x: x + 1, max_y: y + 1 };
                    bounds.include(px, first);
                    first = false;
                });
            }
        }
        bounds
    }

    /// Draws `text` with its layout origin at `origin`.
    pub fn draw(&self, canvas: &mut Canvas, origin: (i32, i32), text: &str, color: Color) {
        let (ox, oy) = origin;
        let color: Rgba<u8> = color.into();
        match self {
            Typeface::Outline { font, scale } => {
                for outlined in outline(font, *scale, text) {
                    let px = outlined.px_bounds();
                    let (left, top) = (px.min.x as i32, px.min.y as i32);
                    outlined.draw(|gx, gy, coverage| {
                        canvas.blend_pixel(ox + left + gx as i32, oy + top + gy as i32, color, coverage);
                    });
                }
            }
            Typeface::Builtin { scale } => {
                bitmap_font::visit_pixels(text, *scale, |x, y| canvas.put_pixel(ox + x, oy + y, color));
            }
        }
    }

    /// Draws `text` with its ink box centered in `rect`, returning the layout
    /// origin that was used.
    pub fn draw_centered(&self, canvas: &mut Canvas, rect: Rect, text: &str, color: Color) -> (i32, i32) {
        let origin = centered_origin(rect, self.measure(text));
        self.draw(canvas, origin, text, color);
        origin
    }
}

/// Origin that puts the ink box `bounds` in the middle of `rect`.
pub fn centered_origin(rect: Rect, bounds: TextBounds) -> (i32, i32) {
    let x = rect.left + (rect.width() - bounds.width()).div_euclid(2) - bounds.min_x;
    let y = rect.top + (rect.height() - bounds.height()).div_euclid(2) - bounds.min_y;
    (x, y)
}

fn load_system_font(family: &str) -> Result<FontVec> {
    let unavailable = |reason: String| IconError::FontUnavailable {
        family: family.to_string(),
        reason,
    };

    let mut db = fontdb::Database::new();
    db.load_system_fonts();
    let query = fontdb::Query {
        families: &[fontdb::Family::Name(family)],
        ..fontdb::Query::default()
    };
    let id = db
        .query(&query)
        .ok_or_else(|| unavailable("no matching face installed".to_string()))?;
    db.with_face_data(id, |data, index| FontVec::try_from_vec_and_index(data.to_vec(), index))
        .ok_or_else(|| unavailable("face data could not be read".to_string()))?
        .map_err(|e| unavailable(e.to_string()))
}

/// Lays `text` out on a single line with the baseline at the scaled ascent.
fn layout(font: &FontVec, scale: PxScale, text: &str) -> Vec<Glyph> {
    let scaled = font.as_scaled(scale);
    let mut caret = point(0.0, scaled.ascent());
    let mut previous = None;
    let mut glyphs = Vec::new();
    for ch in text.chars() {
        let id = scaled.glyph_id(ch);
        if let Some(prev) = previous {
            caret.x += scaled.kern(prev, id);
        }
        glyphs.push(id.with_scale_and_position(scale, caret));
        caret.x += scaled.h_advance(id);
        previous = Some(id);
    }
    glyphs
}

fn outline(font: &FontVec, scale: PxScale, text: &str) -> Vec<OutlinedGlyph> {
    layout(font, scale, text)
        .into_iter()
        .filter_map(|glyph| font.outline_glyph(glyph))
        .collect()
}
