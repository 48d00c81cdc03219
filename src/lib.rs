//! Procedural generator for the linear-systems calculator icon.
//!
//! [`generate`] paints the artwork once at full size, then writes a
//! multi-resolution ICO and a flat PNG preview. The calculator's own
//! equation solver lives in [`solver`].

pub mod bitmap_font;
pub mod canvas;
pub mod error;
pub mod export;
pub mod font;
pub mod models;
pub mod render;
pub mod report;
pub mod solver;

pub use error::{IconError, Result, SolverError};
pub use export::{CodecSupport, LinkedCodecs};
pub use models::IconConfig;

use std::path::{Path, PathBuf};

/// An output file that has just been written.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Written<'a> {
    Icon(&'a Path),
    Preview(&'a Path),
}

/// Paths of both generated files.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Artifacts {
    pub icon: PathBuf,
    pub preview: PathBuf,
}

/// Renders the icon and writes both outputs into `out_dir`, icon first.
///
/// `on_written` is called right after each file is on disk. Nothing is drawn
/// or written when `codecs` lacks an encoder we need, whether or not the
/// caller already ran [`export::preflight`].
pub fn generate(
    out_dir: &Path,
    config: &IconConfig,
    codecs: &dyn CodecSupport,
    mut on_written: impl FnMut(Written<'_>),
) -> Result<Artifacts> {
    export::preflight(codecs)?;

    let image = render::render_icon(config);

    let icon = out_dir.join(&config.ico_file);
    let variants = export::icon_variants(&image, &config.ico_sizes);
    export::write_ico(&icon, &variants)?;
    on_written(Written::Icon(&icon));

    let preview = out_dir.join(&config.preview_file);
    export::write_preview(&preview, &image)?;
    on_written(Written::Preview(&preview));

    Ok(Artifacts { icon, preview })
}
