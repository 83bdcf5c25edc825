use crate::domain::colour::Rgb;
use color_thief::ColorFormat;
use thiserror::Error;

pub const PALETTE_SIZE: u8 = 20;
pub const PALETTE_QUALITY: u8 = 2;

#[derive(Debug, Error)]
pub enum PaletteError {
    #[error("Could not decode image: {0}")]
    Decode(#[from] image::ImageError),
    #[error("Could not quantise image: {0}")]
    Quantise(String),
    #[error("Palette worker stopped: {0}")]
    Interrupted(#[from] tokio::task::JoinError),
}

/// Reduces an encoded image to up to `size` dominant colours. Lower `quality`
/// samples more pixels.
pub fn extract(bytes: &[u8], size: u8, quality: u8) -> Result<Vec<Rgb>, PaletteError> {
    let pixels = image::load_from_memory(bytes)?.to_rgba8();

    color_thief::get_palette(pixels.as_raw(), ColorFormat::Rgba, quality, size)
        .map(|palette| palette.into_iter().map(|c| (c.r, c.g, c.b)).collect())
        .map_err(|why| PaletteError::Quantise(format!("{why:?}")))
}

#[cfg(test)]
pub(crate) fn test_png(pixel: impl Fn(u32, u32) -> [u8; 3]) -> Vec<u8> {
    use image::{DynamicImage, ImageFormat, Rgb, RgbImage};
    use std::io::Cursor;

    let image = RgbImage::from_fn(64, 64, |x, y| Rgb(pixel(x, y)));
    let mut bytes = Vec::new();
    DynamicImage::ImageRgb8(image)
        .write_to(&mut Cursor::new(&mut bytes), ImageFormat::Png)
        .expect("png encoding");
    bytes
}

#[cfg(test)]
pub(crate) fn gradient_png() -> Vec<u8> {
    test_png(|x, y| [(x * 4) as u8, (y * 4) as u8, 160])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rejects_non_image_bytes() {
        let result = extract(b"definitely not a png", PALETTE_SIZE, PALETTE_QUALITY);
        assert!(matches!(result, Err(PaletteError::Decode(_))));
    }

    #[test]
    fn test_rejects_empty_bytes() {
        assert!(extract(&[], PALETTE_SIZE, PALETTE_QUALITY).is_err());
    }

    #[test]
    fn test_gradient_palette() {
        let palette = extract(&gradient_png(), PALETTE_SIZE, PALETTE_QUALITY).unwrap();
        assert!(!palette.is_empty());
        assert!(palette.len() <= usize::from(PALETTE_SIZE));
    }
}
