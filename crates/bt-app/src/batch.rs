//! Traitement par lots : convertit chaque image supportée d'un dossier.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use bt_core::config::ConvertConfig;

use crate::convert;

/// Extensions candidates au traitement par lots.
const SUPPORTED_EXTS: &[&str] = &["png", "jpg", "jpeg", "bmp", "gif", "tif", "tiff"];

/// Convertit chaque image supportée du dossier, une sortie .tif par entrée.
///
/// Les échecs individuels sont journalisés et n'arrêtent pas le lot ; le
/// bilan final compte convertis et échecs. Les fichiers portant déjà le
/// suffixe de sortie sont ignorés pour rendre la commande relançable.
///
/// # Errors
/// Retourne une erreur si le dossier est illisible, ne contient aucune
/// image supportée, ou si aucun fichier n'a pu être converti.
pub fn run_batch(folder: &Path, config: &ConvertConfig) -> Result<()> {
    let mut candidates: Vec<PathBuf> = std::fs::read_dir(folder)
        .with_context(|| format!("Impossible de lire {}", folder.display()))?
        .filter_map(std::result::Result::ok)
        .map(|e| e.path())
        .filter(|p| is_candidate(p, &config.output_suffix))
        .collect();
    candidates.sort();

    if candidates.is_empty() {
        anyhow::bail!("Aucune image supportée dans {}", folder.display());
    }

    let total = candidates.len();
    let mut converted = 0usize;
    let mut failed = 0usize;
    for (idx, input) in candidates.iter().enumerate() {
        log::info!("[{}/{total}] {}", idx + 1, input.display());
        let output = convert::default_output(input, config);
        match convert::convert_file(input, &output, config) {
            Ok(()) => converted += 1,
            Err(e) => {
                log::warn!("{} ignoré : {e:#}", input.display());
                failed += 1;
            }
        }
    }
    log::info!("Lot terminé : {converted} converti(s), {failed} échec(s)");

    if converted == 0 {
        anyhow::bail!("Aucun fichier converti ({failed} échec(s))");
    }
    Ok(())
}

fn is_candidate(path: &Path, output_suffix: &str) -> bool {
    let ext_ok = path
        .extension()
        .and_then(|s| s.to_str())
        .is_some_and(|e| SUPPORTED_EXTS.contains(&e.to_ascii_lowercase().as_str()));
    let deja_converti = path
        .file_stem()
        .and_then(|s| s.to_str())
        .is_some_and(|s| s.ends_with(output_suffix));
    ext_ok && !deja_converti
}
