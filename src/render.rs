use crate::canvas::Canvas;
use crate::font::Typeface;
use crate::models::{IconConfig, BUTTON_SYMBOLS, CORNER_GLYPH, EQUATION_TEXT};
use image::RgbaImage;
use tracing::debug;

/// Paints the calculator icon at full size.
///
/// Layers are composited in a fixed order: device panel, screen, equation,
/// button grid, corner glyph. Anything that extends past the canvas is clipped.
pub fn render_icon(config: &IconConfig) -> RgbaImage {
    let palette = &config.palette;
    let mut canvas = Canvas::new(config.size, palette.background);

    canvas.rounded_rect(
        config.panel_rect(),
        config.panel_radius,
        palette.panel,
        palette.accent,
        config.panel_outline,
    );

    let screen = config.screen_rect();
    canvas.rounded_rect(
        screen,
        config.screen_radius,
        palette.white,
        palette.accent,
        config.screen_outline,
    );

    let font = Typeface::load(&config.font_family, config.equation_font_size);
    let origin = font.draw_centered(&mut canvas, screen, EQUATION_TEXT, palette.text);
    debug!(?origin, builtin = font.is_builtin(), "drew equation");

    for (row, symbols) in BUTTON_SYMBOLS.iter().enumerate() {
        for (col, symbol) in symbols.iter().enumerate() {
            let button = config.button_rect(row, col);
            canvas.rounded_rect(
                button,
                config.button_radius,
                palette.white,
                palette.accent,
                config.button_outline,
            );
            let font = Typeface::load(&config.font_family, config.button_font_size);
            font.draw_centered(&mut canvas, button, symbol, palette.text);
        }
    }

    let font = Typeface::load(&config.font_family, config.corner_font_size);
    font.draw(&mut canvas, config.corner_anchor(), CORNER_GLYPH, palette.accent);

    canvas.into_image()
}
