//! Code-128 label rendering.
//!
//! Thin wrapper over two collaborators: the `barcoders` encoder produces the
//! Code-128 module pattern, and the `image` crate writes the PNG. Nothing
//! about the symbology lives here.

use std::path::Path;

use barcoders::sym::code128::Code128;
use image::{GrayImage, Luma};
use tracing::debug;

use crate::errors::{Error, Result};

/// `barcoders` requires the Code-128 character set to be selected by a
/// prefix character. Set B covers the printable ASCII range.
const CHARSET_B: char = 'Ɓ';

/// Renders `content` as a Code-128 barcode and writes it as a PNG file at
/// `destination`, sized exactly `width` × `height` pixels.
///
/// Raster columns are mapped onto barcode modules by nearest neighbor, so
/// the requested size is honored even when the module count does not divide
/// it evenly. The file is written in PNG format regardless of the
/// destination's extension.
///
/// Fails with [`Error::InvalidParameter`] for an empty `content` or a zero
/// dimension, [`Error::Barcode`] when the content cannot be encoded in
/// Code-128 (e.g. non-ASCII text), and [`Error::Image`] when the file
/// cannot be created or written.
pub fn encode_to_png(
    content: &str,
    destination: impl AsRef<Path>,
    width: u32,
    height: u32,
) -> Result<()> {
    if width == 0 || height == 0 {
        return Err(Error::InvalidParameter(format!(
            "barcode raster must have positive dimensions, got {width}x{height}"
        )));
    }
    if content.is_empty() {
        return Err(Error::InvalidParameter(
            "barcode content must not be empty".to_string(),
        ));
    }

    let barcode = Code128::new(format!("{CHARSET_B}{content}"))
        .map_err(|e| Error::Barcode(e.to_string()))?;
    let modules = barcode.encode();

    let raster = render_modules(&modules, width, height);
    let destination = destination.as_ref();
    raster.save_with_format(destination, image::ImageFormat::Png)?;
    debug!(path = %destination.display(), width, height, "wrote Code-128 label");
    Ok(())
}

/// Black bars on white, stretched across the full raster width.
fn render_modules(modules: &[u8], width: u32, height: u32) -> GrayImage {
    GrayImage::from_fn(width, height, |x, _y| {
        let module = modules[(x as usize * modules.len()) / width as usize];
        if module == 1 {
            Luma([0u8])
        } else {
            Luma([255u8])
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::GenericImageView;

    #[test]
    fn test_encode_writes_png_with_requested_dimensions() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("label.png");

        encode_to_png("PLT-000042", &path, 400, 120).unwrap();

        let img = image::open(&path).unwrap();
        assert_eq!(img.dimensions(), (400, 120));
    }

    #[test]
    fn test_encode_draws_bars_and_background() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("label.png");

        encode_to_png("HELLO", &path, 300, 80).unwrap();

        let img = image::open(&path).unwrap().to_luma8();
        let has_bar = img.pixels().any(|p| p.0[0] == 0);
        let has_background = img.pixels().any(|p| p.0[0] == 255);
        assert!(has_bar, "expected black bar pixels");
        assert!(has_background, "expected white background pixels");
    }

    #[test]
    fn test_encode_rejects_zero_dimensions() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("label.png");

        let err = encode_to_png("HELLO", &path, 0, 80).unwrap_err();
        assert!(matches!(err, Error::InvalidParameter(_)));
        assert!(!path.exists(), "no file may be written on rejection");
    }

    #[test]
    fn test_encode_rejects_empty_content() {
        let dir = tempfile::tempdir().unwrap();
        let err = encode_to_png("", dir.path().join("label.png"), 300, 80).unwrap_err();
        assert!(matches!(err, Error::InvalidParameter(_)));
    }

    #[test]
    fn test_encode_rejects_unencodable_content() {
        let dir = tempfile::tempdir().unwrap();
        let err = encode_to_png("日本語", dir.path().join("label.png"), 300, 80).unwrap_err();
        assert!(
            matches!(err, Error::Barcode(_)),
            "non-ASCII content must surface the encoder error, got {err:?}"
        );
    }

    #[test]
    fn test_encode_fails_on_unwritable_destination() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing-subdir").join("label.png");

        let err = encode_to_png("HELLO", &path, 300, 80).unwrap_err();
        assert!(matches!(err, Error::Image(_)));
    }
}
