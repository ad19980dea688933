use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

/// Politique de conversion bitonale.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Policy {
    /// Troncature naïve : bit de poids fort du canal bleu.
    Reinterpret,
    /// Matrice de gris + seuil 0.8. Sortie RGBA, non compactée.
    Matrix,
    /// Seuil B+G+R > 500. Sortie 1 bit compactée.
    Sum,
    /// Diffusion d'erreur Floyd–Steinberg. Sortie 1 bit compactée.
    Diffusion,
}

/// Schéma de compression du conteneur TIFF de sortie.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum CompressionScheme {
    /// Aucune compression.
    None,
    /// Lempel-Ziv-Welch.
    Lzw,
    /// Deflate (zlib).
    Deflate,
    /// PackBits (RLE).
    Packbits,
}

/// Configuration de l'outil. Sérialisable en TOML.
///
/// Chaque champ a une valeur par défaut saine ; un fichier partiel est
/// accepté.
///
/// # Example
/// ```
/// use bt_core::config::{ConvertConfig, Policy};
/// let config = ConvertConfig::default();
/// assert_eq!(config.policy, Policy::Diffusion);
/// assert_eq!(config.output_suffix, "_mono");
/// ```
#[derive(Clone, Debug, Deserialize, Serialize)]
#[serde(default)]
pub struct ConvertConfig {
    /// Politique appliquée quand --policy n'est pas fourni.
    pub policy: Policy,
    /// Compression du TIFF de sortie.
    pub compression: CompressionScheme,
    /// Suffixe ajouté au nom du fichier de sortie.
    pub output_suffix: String,
    /// Écraser un fichier de sortie existant.
    pub overwrite: bool,
}

impl Default for ConvertConfig {
    fn default() -> Self {
        Self {
            policy: Policy::Diffusion,
            compression: CompressionScheme::Lzw,
            output_suffix: String::from("_mono"),
            overwrite: false,
        }
    }
}

/// Charge une configuration TOML depuis un fichier.
///
/// # Errors
/// Retourne une erreur si le fichier est illisible ou le TOML invalide.
pub fn load_config(path: &Path) -> Result<ConvertConfig> {
    let raw = std::fs::read_to_string(path)
        .with_context(|| format!("Impossible de lire {}", path.display()))?;
    toml::from_str(&raw).with_context(|| format!("TOML invalide dans {}", path.display()))
}
