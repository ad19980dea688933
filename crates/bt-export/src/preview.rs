//! Export PNG mono-frame, pour inspection rapide d'un résultat.

use std::path::Path;

use anyhow::{Context, Result};
use bt_core::raster::{PixelFormat, Raster};
use image::{GrayImage, Luma, Rgba, RgbaImage};

/// Écrit un raster en PNG.
///
/// Mono1 sort en niveaux de gris 0/255 ; Bgr24 et Bgra32 sortent en RGBA
/// (alpha 255 quand la source n'en a pas).
///
/// # Errors
/// Retourne une erreur si l'encodage ou l'écriture échoue.
pub fn save_png(raster: &Raster, path: &Path) -> Result<()> {
    let (w, h) = (raster.width(), raster.height());
    match raster.format() {
        PixelFormat::Mono1 => {
            let img = GrayImage::from_fn(w, h, |x, y| {
                Luma([if raster.bit(x, y) { 255 } else { 0 }])
            });
            img.save(path)
        }
        PixelFormat::Bgr24 => {
            let img = RgbaImage::from_fn(w, h, |x, y| {
                let (b, g, r) = raster.bgr(x, y);
                Rgba([r, g, b, 255])
            });
            img.save(path)
        }
        PixelFormat::Bgra32 => {
            let img = RgbaImage::from_fn(w, h, |x, y| {
                let (b, g, r, a) = raster.bgra(x, y);
                Rgba([r, g, b, a])
            });
            img.save(path)
        }
    }
    .with_context(|| format!("Impossible d'écrire {}", path.display()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn png_round_trip_mono() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("mono.png");
        let mut src = Raster::new(10, 2, PixelFormat::Mono1).unwrap();
        src.set_bit(0, 0, true);
        src.set_bit(9, 1, true);
        save_png(&src, &path).unwrap();

        let back = image::open(&path).unwrap().to_luma8();
        assert_eq!(back.dimensions(), (10, 2));
        assert_eq!(back.get_pixel(0, 0).0, [255]);
        assert_eq!(back.get_pixel(1, 0).0, [0]);
        assert_eq!(back.get_pixel(9, 1).0, [255]);
    }

    #[test]
    fn png_round_trip_bgra() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("color.png");
        let mut src = Raster::new(1, 1, PixelFormat::Bgra32).unwrap();
        src.put_bgra(0, 0, 10, 20, 30, 255);
        save_png(&src, &path).unwrap();

        let back = image::open(&path).unwrap().to_rgba8();
        assert_eq!(back.get_pixel(0, 0).0, [30, 20, 10, 255]);
    }
}
