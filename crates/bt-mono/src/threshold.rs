//! Seuil par somme de canaux, sortie 1 bit compactée.
//!
//! Chaque bit de sortie ne dépend que du pixel correspondant : aucune
//! dépendance diagonale, l'ordre est indifférent. Parallélisé par ligne.

use bt_core::raster::{PixelFormat, Raster};
use bt_core::RasterError;
use rayon::prelude::*;

use crate::pack::pack_row;
use crate::rgba::to_rgba;

/// Seuil de luminosité : somme B+G+R strictement supérieure → blanc.
pub const SUM_THRESHOLD: u32 = 500;

/// Binarise par somme de canaux (`B + G + R > 500`), alpha ignoré.
///
/// Une source non-Bgra32 passe d'abord par [`to_rgba`]. Les bits sont
/// compactés 8 par octet, MSB en premier, stride de sortie aligné sur
/// 4 octets, octet partiel flushé en fin de ligne.
///
/// # Errors
/// [`RasterError::InvalidDimensions`] si l'allocation de sortie déborde.
///
/// # Example
/// ```
/// use bt_core::raster::{PixelFormat, Raster};
/// use bt_mono::threshold_sum_mono;
///
/// let mut src = Raster::new(2, 1, PixelFormat::Bgra32).unwrap();
/// src.put_bgra(0, 0, 200, 200, 100, 255); // 500 → noir (strictement >)
/// src.put_bgra(1, 0, 200, 200, 101, 255); // 501 → blanc
/// let out = threshold_sum_mono(&src).unwrap();
/// assert!(!out.bit(0, 0));
/// assert!(out.bit(1, 0));
/// ```
pub fn threshold_sum_mono(source: &Raster) -> Result<Raster, RasterError> {
    let normalized;
    let source = if source.format() == PixelFormat::Bgra32 {
        source
    } else {
        normalized = to_rgba(source)?;
        &normalized
    };
    let (w, h) = (source.width(), source.height());
    let mut out = Raster::new(w, h, PixelFormat::Mono1)?;
    // Stride nul sur un raster vide : rien à découper en lignes.
    if out.is_empty() {
        return Ok(out);
    }
    let stride = out.stride();
    out.data_mut()
        .par_chunks_mut(stride)
        .enumerate()
        .for_each(|(y, row)| {
            let y = y as u32;
            pack_row(w as usize, row, |x| {
                let (b, g, r, _) = source.bgra(x as u32, y);
                u32::from(b) + u32::from(g) + u32::from(r) > SUM_THRESHOLD
            });
        });
    Ok(out)
}
