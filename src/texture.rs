//! Bitmap texture loading.
//!
//! Images are decoded with the `image` crate and converted to tightly packed
//! RGBA8 rows, the layout expected by an `Rgba8UnormSrgb` texture upload.
//! 24-bit BMP files, which carry no alpha channel, come out fully opaque.

use std::path::Path;

use anyhow::{Context, Result, bail};

/// Decoded RGBA8 pixel data.
#[derive(Debug, Clone, PartialEq)]
pub struct Texture {
    pub width: u32,
    pub height: u32,
    /// Row-major pixels, top row first, 4 bytes per pixel.
    pub pixels: Vec<u8>,
}

impl Texture {
    /// Loads and decodes the image at `path`.
    pub fn load(path: impl AsRef<Path>) -> Result<Texture> {
        let path = path.as_ref();
        let img = image::open(path)
            .with_context(|| format!("Failed to load texture {}", path.display()))?;
        let texture = Self::from_rgba(img.to_rgba8())
            .with_context(|| format!("Invalid texture {}", path.display()))?;
        log::debug!(
            "Loaded texture {} ({}x{})",
            path.display(),
            texture.width,
            texture.height
        );
        Ok(texture)
    }

    /// Decodes an in-memory image, guessing the format from its header.
    pub fn from_memory(bytes: &[u8]) -> Result<Texture> {
        let img = image::load_from_memory(bytes).context("Failed to decode texture")?;
        Self::from_rgba(img.to_rgba8())
    }

    fn from_rgba(img: image::RgbaImage) -> Result<Texture> {
        let (width, height) = img.dimensions();
        if width == 0 || height == 0 {
            bail!("texture has zero size ({width}x{height})");
        }
        Ok(Texture {
            width,
            height,
            pixels: img.into_raw(),
        })
    }

    /// Number of bytes in [`pixels`](Self::pixels).
    pub fn byte_len(&self) -> usize {
        self.width as usize * self.height as usize * 4
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn encode(img: image::DynamicImage, format: image::ImageFormat) -> Vec<u8> {
        let mut bytes = Vec::new();
        img.write_to(&mut Cursor::new(&mut bytes), format).unwrap();
        bytes
    }

    fn checkerboard() -> image::RgbImage {
        image::RgbImage::from_fn(3, 2, |x, y| {
            if (x + y) % 2 == 0 {
                image::Rgb([255, 0, 0])
            } else {
                image::Rgb([0, 0, 255])
            }
        })
    }

    #[test]
    fn test_decodes_24_bit_bmp_as_opaque_rgba() {
        let bmp = encode(checkerboard().into(), image::ImageFormat::Bmp);
        let texture = Texture::from_memory(&bmp).unwrap();

        assert_eq!((texture.width, texture.height), (3, 2));
        assert_eq!(texture.pixels.len(), texture.byte_len());
        assert_eq!(&texture.pixels[0..4], &[255, 0, 0, 255]);
        assert_eq!(&texture.pixels[4..8], &[0, 0, 255, 255]);
        // Second row starts one pixel over in the pattern.
        assert_eq!(&texture.pixels[12..16], &[0, 0, 255, 255]);
    }

    #[test]
    fn test_decodes_png_with_alpha() {
        let img = image::RgbaImage::from_pixel(2, 2, image::Rgba([10, 20, 30, 40]));
        let png = encode(img.into(), image::ImageFormat::Png);
        let texture = Texture::from_memory(&png).unwrap();
        assert_eq!(texture.byte_len(), 16);
        assert!(texture.pixels.chunks(4).all(|p| p == [10, 20, 30, 40]));
    }

    #[test]
    fn test_rejects_garbage_bytes() {
        assert!(Texture::from_memory(b"definitely not an image").is_err());
    }

    #[test]
    fn test_rejects_zero_sized_image() {
        let err = Texture::from_rgba(image::RgbaImage::new(0, 4)).unwrap_err();
        assert!(err.to_string().contains("zero size"), "{err}");
    }

    #[test]
    fn test_load_reads_bmp_from_disk() {
        let path = std::env::temp_dir().join(format!("scop-texture-{}.bmp", std::process::id()));
        std::fs::write(&path, encode(checkerboard().into(), image::ImageFormat::Bmp)).unwrap();
        let texture = Texture::load(&path);
        std::fs::remove_file(&path).unwrap();

        assert_eq!(texture.unwrap().byte_len(), 24);
    }

    #[test]
    fn test_load_reports_missing_file() {
        let err = Texture::load("/definitely/not/here.bmp").unwrap_err();
        assert!(err.to_string().contains("here.bmp"), "{err}");
    }
}
