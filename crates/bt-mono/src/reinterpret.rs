//! Troncature naïve vers 1 bit/pixel.
//!
//! Pas de seuillage perceptuel ni de tramage : le bit de sortie est le bit
//! de poids fort du canal bleu, tel qu'une réinterprétation brute du format
//! l'exposerait. Résultat visuellement arbitraire mais reproductible octet
//! pour octet — la base de comparaison rapide des trois autres politiques.

use bt_core::raster::{PixelFormat, Raster};
use bt_core::RasterError;

use crate::pack::pack_row;

/// Réinterprète la source en Mono1 par troncature de format.
///
/// Une source déjà Mono1 est copiée en profondeur (aucun buffer partagé).
///
/// # Errors
/// [`RasterError::InvalidDimensions`] si l'allocation de sortie déborde.
///
/// # Example
/// ```
/// use bt_core::raster::{PixelFormat, Raster};
/// use bt_mono::reinterpret_mono;
///
/// let mut src = Raster::new(2, 1, PixelFormat::Bgr24).unwrap();
/// src.put_bgr(0, 0, 0x7F, 255, 255); // bleu < 128 → noir
/// src.put_bgr(1, 0, 0x80, 0, 0);     // bleu ≥ 128 → blanc
/// let out = reinterpret_mono(&src).unwrap();
/// assert!(!out.bit(0, 0));
/// assert!(out.bit(1, 0));
/// ```
pub fn reinterpret_mono(source: &Raster) -> Result<Raster, RasterError> {
    let (w, h) = (source.width(), source.height());
    let mut out = Raster::new(w, h, PixelFormat::Mono1)?;
    match source.format() {
        PixelFormat::Mono1 => {
            let bytes = PixelFormat::Mono1.min_row_bytes(w);
            for y in 0..h {
                out.row_mut(y)[..bytes].copy_from_slice(&source.row(y)[..bytes]);
            }
        }
        PixelFormat::Bgr24 => {
            for y in 0..h {
                pack_row(w as usize, out.row_mut(y), |x| {
                    source.bgr(x as u32, y).0 & 0x80 != 0
                });
            }
        }
        PixelFormat::Bgra32 => {
            for y in 0..h {
                pack_row(w as usize, out.row_mut(y), |x| {
                    source.bgra(x as u32, y).0 & 0x80 != 0
                });
            }
        }
    }
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn msb_du_canal_bleu() {
        let mut src = Raster::new(4, 1, PixelFormat::Bgra32).unwrap();
        src.put_bgra(0, 0, 0x00, 255, 255, 255);
        src.put_bgra(1, 0, 0x7F, 255, 255, 255);
        src.put_bgra(2, 0, 0x80, 0, 0, 255);
        src.put_bgra(3, 0, 0xFF, 0, 0, 255);
        let out = reinterpret_mono(&src).unwrap();
        assert!(!out.bit(0, 0));
        assert!(!out.bit(1, 0));
        assert!(out.bit(2, 0));
        assert!(out.bit(3, 0));
    }

    #[test]
    fn mono1_copie_sans_buffer_partage() {
        let mut src = Raster::new(10, 2, PixelFormat::Mono1).unwrap();
        src.set_bit(3, 0, true);
        src.set_bit(9, 1, true);
        let out = reinterpret_mono(&src).unwrap();
        assert_eq!(out.data(), src.data());
        // Copie profonde : muter la sortie ne touche pas la source.
        let mut out = out;
        out.set_bit(0, 0, true);
        assert!(!src.bit(0, 0));
    }

    #[test]
    fn reproductible_octet_pour_octet() {
        let mut src = Raster::new(13, 3, PixelFormat::Bgr24).unwrap();
        for y in 0..3 {
            for x in 0..13 {
                src.put_bgr(x, y, (x * 21 + y * 17) as u8, x as u8, y as u8);
            }
        }
        let a = reinterpret_mono(&src).unwrap();
        let b = reinterpret_mono(&src).unwrap();
        assert_eq!(a.data(), b.data());
    }

    #[test]
    fn dimensions_preservees_et_vide_ok() {
        let src = Raster::new(7, 5, PixelFormat::Bgr24).unwrap();
        let out = reinterpret_mono(&src).unwrap();
        assert_eq!((out.width(), out.height()), (7, 5));
        let empty = Raster::new(0, 3, PixelFormat::Bgra32).unwrap();
        assert!(reinterpret_mono(&empty).unwrap().is_empty());
    }
}
