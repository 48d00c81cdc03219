use crate::error::{IconError, Result};
use ico::{IconDir, IconDirEntry, IconImage, ResourceType};
use image::imageops::{self, FilterType};
use image::{ImageFormat, RgbaImage};
use std::fs::File;
use std::io::BufWriter;
use std::path::Path;
use tracing::info;

/// Reports which encoders the linked imaging library was built with.
pub trait CodecSupport {
    fn can_write(&self, format: ImageFormat) -> bool;
}

/// The codecs compiled into the `image` crate.
pub struct LinkedCodecs;

impl CodecSupport for LinkedCodecs {
    fn can_write(&self, format: ImageFormat) -> bool {
        format.writing_enabled()
    }
}

/// Checks that everything needed to write the outputs is available.
pub fn preflight(codecs: &dyn CodecSupport) -> Result<()> {
    if !codecs.can_write(ImageFormat::Png) {
        return Err(IconError::MissingDependency { codec: "png" });
    }
    Ok(())
}

/// Resamples `image` to each square side in `sizes` with a Lanczos filter.
pub fn icon_variants(image: &RgbaImage, sizes: &[u32]) -> Vec<RgbaImage> {
    sizes
        .iter()
        .map(|&side| imageops::resize(image, side, side, FilterType::Lanczos3))
        .collect()
}

/// Writes all `variants` into a single ICO container at `path`.
pub fn write_ico(path: &Path, variants: &[RgbaImage]) -> Result<()> {
    let io_err = |source| IconError::Io {
        path: path.to_path_buf(),
        source,
    };

    let mut icon_dir = IconDir::new(ResourceType::Icon);
    for variant in variants {
        let (w, h) = variant.dimensions();
        let icon_image = IconImage::from_rgba_data(w, h, variant.as_raw().clone());
        icon_dir.add_entry(IconDirEntry::encode(&icon_image).map_err(io_err)?);
    }
    let file = BufWriter::new(File::create(path).map_err(io_err)?);
    icon_dir.write(file).map_err(io_err)?;
    info!(path = %path.display(), entries = variants.len(), "wrote icon container");
    Ok(())
}

/// Writes `image` unchanged as a PNG at `path`.
pub fn write_preview(path: &Path, image: &RgbaImage) -> Result<()> {
    image.save_with_format(path, ImageFormat::Png)?;
    info!(path = %path.display(), "wrote preview");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::Rgba;

    struct NoCodecs;

    impl CodecSupport for NoCodecs {
        fn can_write(&self, _format: ImageFormat) -> bool {
            false
        }
    }

    #[test]
    fn preflight_reports_missing_png() {
        assert!(preflight(&LinkedCodecs).is_ok());
        assert!(matches!(
            preflight(&NoCodecs),
            Err(IconError::MissingDependency { codec: "png" })
        ));
    }

    #[test]
    fn variants_have_requested_sides() {
        let image = RgbaImage::from_pixel(256, 256, Rgba([10, 20, 30, 255]));
        let sizes = [16, 32, 48, 64, 128, 256];
        let variants = icon_variants(&image, &sizes);
        assert_eq!(variants.len(), sizes.len());
        for (variant, side) in variants.iter().zip(sizes) {
            assert_eq!(variant.dimensions(), (side, side));
            // a flat image stays flat after resampling
            assert_eq!(*variant.get_pixel(side / 2, side / 2), Rgba([10, 20, 30, 255]));
        }
    }

    #[test]
    fn write_ico_into_missing_directory_fails() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing").join("calculator.ico");
        let variants = vec![RgbaImage::new(16, 16)];
        match write_ico(&path, &variants) {
            Err(IconError::Io { path: p, .. }) => assert_eq!(p, path),
            other => panic!("unexpected result: {other:?}"),
        }
    }
}
