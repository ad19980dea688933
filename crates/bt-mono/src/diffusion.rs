//! Diffusion d'erreur Floyd–Steinberg en arithmétique entière.
//!
//! Strictement séquentiel : chaque pixel dépend des erreurs propagées par
//! ses voisins gauche et supérieurs. Paralléliser par ligne changerait la
//! sortie — interdit ici, contrairement aux deux politiques à seuil.
//!
//! Poids de propagation, sur 16 :
//! ```text
//!        X   7
//!    3   5   1
//! ```
//! Toutes les divisions sont entières, tronquées vers zéro.

use bt_core::raster::{PixelFormat, Raster};
use bt_core::RasterError;

use crate::pack::pack_row;
use crate::rgba::to_bgr24;

/// Niveau de gris perceptuel normalisé [0.0, 1.0].
///
/// # Example
/// ```
/// use bt_mono::grey_level;
/// assert!((grey_level(255, 255, 255) - 1.0).abs() < 1e-9);
/// assert_eq!(grey_level(0, 0, 0), 0.0);
/// ```
#[must_use]
pub fn grey_level(r: u8, g: u8, b: u8) -> f64 {
    (f64::from(r) * 0.299 + f64::from(g) * 0.587 + f64::from(b) * 0.114) / 255.0
}

/// Quantum de décision sur l'échelle d'erreur ±64 : blanc = 32, noir = −32.
const QUANTUM: i32 = 32;

/// Tramage Floyd–Steinberg vers Mono1.
///
/// Une source non-Bgr24 est d'abord normalisée ; la lecture suit l'ordre
/// d'octets B,G,R tel que stocké. L'erreur par pixel est semée à
/// `64·(gris − 0.5)` (cast tronquant), le bit sort blanc si l'erreur
/// accumulée est strictement positive, et le reliquat se propage aux
/// voisins non encore visités. Buffer d'erreur en i16 : assez large pour
/// les poids 7/3/5/1, là où un i8 peut déborder silencieusement.
///
/// Déterministe : octets d'entrée identiques → octets de sortie identiques.
///
/// # Errors
/// [`RasterError::InvalidDimensions`] si l'allocation de sortie déborde.
///
/// # Example
/// ```
/// use bt_core::raster::{PixelFormat, Raster};
/// use bt_mono::error_diffusion_mono;
///
/// let mut src = Raster::new(1, 1, PixelFormat::Bgr24).unwrap();
/// src.put_bgr(0, 0, 255, 255, 255);
/// assert!(error_diffusion_mono(&src).unwrap().bit(0, 0));
/// ```
pub fn error_diffusion_mono(source: &Raster) -> Result<Raster, RasterError> {
    let normalized;
    let source = if source.format() == PixelFormat::Bgr24 {
        source
    } else {
        log::debug!(
            "normalisation {:?} → Bgr24 avant diffusion d'erreur",
            source.format()
        );
        normalized = to_bgr24(source)?;
        &normalized
    };
    let (w, h) = (source.width() as usize, source.height() as usize);
    let mut out = Raster::new(source.width(), source.height(), PixelFormat::Mono1)?;

    // Erreurs signées, une par pixel, mutées en ordre raster.
    let count = w.checked_mul(h).ok_or(RasterError::InvalidDimensions {
        width: source.width(),
        height: source.height(),
    })?;
    let mut errs = vec![0i16; count];
    for y in 0..h {
        for x in 0..w {
            let (b, g, r) = source.bgr(x as u32, y as u32);
            // Cast tronquant vers zéro, comme pour les divisions.
            errs[y * w + x] = (64.0 * (grey_level(r, g, b) - 0.5)) as i16;
        }
    }

    for y in 0..h {
        let row = out.row_mut(y as u32);
        pack_row(w, row, |x| {
            let idx = y * w + x;
            let e = i32::from(errs[idx]);
            let white = e > 0;
            let err = e - if white { QUANTUM } else { -QUANTUM };
            if x + 1 < w {
                errs[idx + 1] += (7 * err / 16) as i16;
            }
            if y + 1 < h {
                if x > 0 {
                    errs[idx + w - 1] += (3 * err / 16) as i16;
                }
                errs[idx + w] += (5 * err / 16) as i16;
                if x + 1 < w {
                    errs[idx + w + 1] += (err / 16) as i16;
                }
            }
            white
        });
    }
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn gris_uniforme(w: u32, h: u32, v: u8) -> Raster {
        let mut src = Raster::new(w, h, PixelFormat::Bgr24).unwrap();
        for y in 0..h {
            for x in 0..w {
                src.put_bgr(x, y, v, v, v);
            }
        }
        src
    }

    #[test]
    fn noir_pur_reste_noir() {
        let out = error_diffusion_mono(&gris_uniforme(4, 4, 0)).unwrap();
        for y in 0..4 {
            for x in 0..4 {
                assert!(!out.bit(x, y));
            }
        }
    }

    #[test]
    fn blanc_pur_reste_blanc() {
        let out = error_diffusion_mono(&gris_uniforme(4, 4, 255)).unwrap();
        for y in 0..4 {
            for x in 0..4 {
                assert!(out.bit(x, y));
            }
        }
    }

    #[test]
    fn fixture_3x3_gris_moyen() {
        // Motif de référence épinglé pour un 3×3 tout (128,128,128) :
        // la graine vaut 0 partout (64·(128/255 − 0.5) tronqué), la
        // propagation tronquante produit un damier décalé.
        //   ligne 0 : N B N → 0x40
        //   ligne 1 : B N B → 0xA0
        //   ligne 2 : N B N → 0x40
        let out = error_diffusion_mono(&gris_uniforme(3, 3, 128)).unwrap();
        assert_eq!(out.row(0), [0x40, 0x00, 0x00, 0x00]);
        assert_eq!(out.row(1), [0xA0, 0x00, 0x00, 0x00]);
        assert_eq!(out.row(2), [0x40, 0x00, 0x00, 0x00]);
    }

    #[test]
    fn deterministe_octet_pour_octet() {
        let mut src = Raster::new(17, 9, PixelFormat::Bgr24).unwrap();
        for y in 0..9 {
            for x in 0..17 {
                src.put_bgr(x, y, (x * 15) as u8, (y * 28) as u8, ((x + y) * 11) as u8);
            }
        }
        let a = error_diffusion_mono(&src).unwrap();
        let b = error_diffusion_mono(&src).unwrap();
        assert_eq!(a.data(), b.data());
    }

    #[test]
    fn division_tronquante_et_conservation() {
        // Les quatre parts reproduisent l'arithmétique de la propagation.
        let parts = |err: i32| [7 * err / 16, 3 * err / 16, 5 * err / 16, err / 16];
        // Troncature vers zéro sur les négatifs.
        assert_eq!(parts(-18), [-7, -3, -5, -1]);
        assert_eq!(parts(25), [10, 4, 7, 1]);
        // Conservation exacte quand err est multiple de 16.
        for err in [-64, -48, -32, -16, 0, 16, 32, 48, 64] {
            let sum: i32 = parts(err).iter().sum();
            assert_eq!(sum, err, "somme des parts pour err={err}");
        }
    }

    #[test]
    fn pixel_unique_aux_deux_extremes() {
        let out = error_diffusion_mono(&gris_uniforme(1, 1, 255)).unwrap();
        assert!(out.bit(0, 0));
        let out = error_diffusion_mono(&gris_uniforme(1, 1, 0)).unwrap();
        assert!(!out.bit(0, 0));
    }

    #[test]
    fn source_bgra32_normalisee() {
        let mut src = Raster::new(2, 2, PixelFormat::Bgra32).unwrap();
        for y in 0..2 {
            for x in 0..2 {
                src.put_bgra(x, y, 255, 255, 255, 255);
            }
        }
        let out = error_diffusion_mono(&src).unwrap();
        assert!(out.bit(0, 0) && out.bit(1, 1));
    }

    #[test]
    fn dimensions_preservees_et_vide_ok() {
        let out = error_diffusion_mono(&gris_uniforme(5, 7, 128)).unwrap();
        assert_eq!((out.width(), out.height()), (5, 7));
        let empty = Raster::new(0, 0, PixelFormat::Bgr24).unwrap();
        assert!(error_diffusion_mono(&empty).unwrap().is_empty());
    }
}
