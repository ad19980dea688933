//! Normalisation de format : copie pixel à pixel, sans rééchantillonnage.

use bt_core::raster::{PixelFormat, Raster};
use bt_core::RasterError;

/// Convertit toute source vers le format canonique Bgra32.
///
/// Copie directe non redimensionnée : la sortie a exactement les dimensions
/// de la source. Alpha forcé à 255 pour les sources sans canal alpha ;
/// un bit Mono1 devient blanc (255) ou noir (0) opaque.
///
/// # Errors
/// [`RasterError::InvalidDimensions`] si l'allocation de sortie déborde.
///
/// # Example
/// ```
/// use bt_core::raster::{PixelFormat, Raster};
/// use bt_mono::to_rgba;
///
/// let mut src = Raster::new(1, 1, PixelFormat::Bgr24).unwrap();
/// src.put_bgr(0, 0, 10, 20, 30);
/// let out = to_rgba(&src).unwrap();
/// assert_eq!(out.bgra(0, 0), (10, 20, 30, 255));
/// ```
pub fn to_rgba(source: &Raster) -> Result<Raster, RasterError> {
    let (w, h) = (source.width(), source.height());
    let mut out = Raster::new(w, h, PixelFormat::Bgra32)?;
    match source.format() {
        PixelFormat::Bgra32 => {
            let bytes = w as usize * 4;
            for y in 0..h {
                out.row_mut(y)[..bytes].copy_from_slice(&source.row(y)[..bytes]);
            }
        }
        PixelFormat::Bgr24 => {
            for y in 0..h {
                for x in 0..w {
                    let (b, g, r) = source.bgr(x, y);
                    out.put_bgra(x, y, b, g, r, 255);
                }
            }
        }
        PixelFormat::Mono1 => {
            for y in 0..h {
                for x in 0..w {
                    let v = if source.bit(x, y) { 255 } else { 0 };
                    out.put_bgra(x, y, v, v, v, 255);
                }
            }
        }
    }
    Ok(out)
}

/// Convertit toute source vers Bgr24, l'ordre d'octets B,G,R que lit la
/// diffusion d'erreur. Alpha abandonné, bit Mono1 étendu en 0/255.
///
/// # Errors
/// [`RasterError::InvalidDimensions`] si l'allocation de sortie déborde.
pub fn to_bgr24(source: &Raster) -> Result<Raster, RasterError> {
    let (w, h) = (source.width(), source.height());
    let mut out = Raster::new(w, h, PixelFormat::Bgr24)?;
    match source.format() {
        PixelFormat::Bgr24 => {
            let bytes = w as usize * 3;
            for y in 0..h {
                out.row_mut(y)[..bytes].copy_from_slice(&source.row(y)[..bytes]);
            }
        }
        PixelFormat::Bgra32 => {
            for y in 0..h {
                for x in 0..w {
                    let (b, g, r, _) = source.bgra(x, y);
                    out.put_bgr(x, y, b, g, r);
                }
            }
        }
        PixelFormat::Mono1 => {
            for y in 0..h {
                for x in 0..w {
                    let v = if source.bit(x, y) { 255 } else { 0 };
                    out.put_bgr(x, y, v, v, v);
                }
            }
        }
    }
    Ok(out)
}
