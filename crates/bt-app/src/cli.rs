use std::path::PathBuf;

use clap::Parser;

/// bitona — Convertisseur bitonal pour images et documents paginés.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Fichier source : image ou conteneur paginé (PNG, JPEG, BMP, GIF, TIFF).
    #[arg(long)]
    pub input: Option<PathBuf>,

    /// Traiter tout un dossier d'images.
    #[arg(long)]
    pub batch: Option<PathBuf>,

    /// Fichier de sortie. Défaut : nom source + suffixe configuré + .tif.
    #[arg(long)]
    pub output: Option<PathBuf>,

    /// Politique de conversion : reinterpret, matrix, sum, diffusion.
    #[arg(long)]
    pub policy: Option<String>,

    /// Compression TIFF : none, lzw, deflate, packbits.
    #[arg(long)]
    pub compression: Option<String>,

    /// Fichier de configuration TOML. Défaut : config/default.toml.
    #[arg(short, long, default_value = "config/default.toml")]
    pub config: PathBuf,

    /// Niveau de log : error, warn, info, debug, trace.
    #[arg(long, default_value = "warn")]
    pub log_level: String,
}

impl Cli {
    /// Validate that exactly one source is provided.
    ///
    /// # Errors
    /// Returns an error if zero or both sources are specified.
    pub fn validate_source(&self) -> anyhow::Result<()> {
        match (self.input.is_some(), self.batch.is_some()) {
            (false, false) => anyhow::bail!(
                "Aucune source spécifiée. Utilisez --input <fichier> ou --batch <dossier>."
            ),
            (true, true) => anyhow::bail!(
                "Une seule source à la fois. Spécifiez --input OU --batch."
            ),
            _ => Ok(()),
        }
    }
}
