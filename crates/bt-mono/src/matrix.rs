//! Matrice de gris + seuil dur à 0.8.
//!
//! La sortie reste un raster Bgra32 aux extrêmes 0/255, elle n'est PAS
//! compactée en Mono1 — contrairement aux trois autres politiques. C'est le
//! comportement de référence, conservé tel quel ; compacter ensuite reste
//! possible via [`crate::threshold_sum_mono`].

use bt_core::raster::Raster;
use bt_core::RasterError;
use rayon::prelude::*;

use crate::rgba::to_rgba;

/// Poids du gris, appliqués aux canaux R, G, B.
pub const GRAY_WEIGHTS: [f32; 3] = [0.299, 0.587, 0.114];

/// Seuil de luminosité sur l'échelle normalisée 0–1.
pub const MATRIX_THRESHOLD: f32 = 0.8;

/// Grisaille par matrice puis binarisation au seuil 0.8.
///
/// Par pixel : `gray = 0.299·R + 0.587·G + 0.114·B` (échelle 0–255) ;
/// les trois canaux couleur passent à 255 si `gray ≥ 0.8 × 255`, sinon à 0.
/// Alpha traverse inchangé. Indépendant pixel à pixel, parallélisé par
/// ligne.
///
/// # Errors
/// [`RasterError::InvalidDimensions`] si l'allocation de sortie déborde.
///
/// # Example
/// ```
/// use bt_core::raster::{PixelFormat, Raster};
/// use bt_mono::threshold_matrix_mono;
///
/// let mut src = Raster::new(1, 1, PixelFormat::Bgra32).unwrap();
/// src.put_bgra(0, 0, 255, 255, 255, 200);
/// let out = threshold_matrix_mono(&src).unwrap();
/// // Blanc pur au-dessus du seuil, alpha inchangé.
/// assert_eq!(out.bgra(0, 0), (255, 255, 255, 200));
/// ```
pub fn threshold_matrix_mono(source: &Raster) -> Result<Raster, RasterError> {
    let mut out = to_rgba(source)?;
    // Stride nul sur un raster vide : rien à découper en lignes.
    if out.is_empty() {
        return Ok(out);
    }
    let w = out.width() as usize;
    let stride = out.stride();
    let cutoff = MATRIX_THRESHOLD * 255.0;
    out.data_mut().par_chunks_mut(stride).for_each(|row| {
        for x in 0..w {
            let i = x * 4;
            let (b, g, r) = (row[i], row[i + 1], row[i + 2]);
            let gray = GRAY_WEIGHTS[0] * f32::from(r)
                + GRAY_WEIGHTS[1] * f32::from(g)
                + GRAY_WEIGHTS[2] * f32::from(b);
            let v = if gray >= cutoff { 255 } else { 0 };
            row[i] = v;
            row[i + 1] = v;
            row[i + 2] = v;
        }
    });
    Ok(out)
}
