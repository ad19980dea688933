//! Conversion d'un fichier : décode, applique la politique, écrit les pages.

use std::path::{Path, PathBuf};

use anyhow::Result;
use bt_core::config::{ConvertConfig, Policy};
use bt_core::raster::Raster;
use bt_core::RasterError;
use bt_mono::{error_diffusion_mono, reinterpret_mono, threshold_matrix_mono, threshold_sum_mono};

/// Applique la politique configurée à une frame.
///
/// # Errors
/// Propage l'erreur de la conversion.
pub fn apply_policy(policy: Policy, frame: &Raster) -> Result<Raster, RasterError> {
    match policy {
        Policy::Reinterpret => reinterpret_mono(frame),
        Policy::Matrix => threshold_matrix_mono(frame),
        Policy::Sum => threshold_sum_mono(frame),
        Policy::Diffusion => error_diffusion_mono(frame),
    }
}

/// Chemin de sortie par défaut : même dossier, suffixe configuré, .tif.
#[must_use]
pub fn default_output(input: &Path, config: &ConvertConfig) -> PathBuf {
    let stem = input
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or("sortie");
    input.with_file_name(format!("{stem}{}.tif", config.output_suffix))
}

/// Convertit toutes les frames d'un fichier et écrit le TIFF paginé.
///
/// # Errors
/// Retourne une erreur si le décodage, la conversion ou l'écriture échoue,
/// ou si la sortie existe déjà sans `overwrite`.
pub fn convert_file(input: &Path, output: &Path, config: &ConvertConfig) -> Result<()> {
    if output.exists() && !config.overwrite {
        anyhow::bail!(
            "{} existe déjà (relancez avec overwrite = true)",
            output.display()
        );
    }
    let frames = bt_source::get_frames(input)?;
    log::info!(
        "{} : {} frame(s), politique {:?}",
        input.display(),
        frames.len(),
        config.policy
    );
    let pages = frames
        .iter()
        .map(|f| apply_policy(config.policy, f))
        .collect::<Result<Vec<_>, _>>()?;
    bt_export::save_pages(&pages, output, config.compression)?;
    log::info!("Conversion réussie vers {}", output.display());
    Ok(())
}
