use anyhow::Result;
use bt_core::config::{CompressionScheme, ConvertConfig, Policy};
use clap::Parser;

pub mod batch;
pub mod cli;
pub mod convert;

fn main() -> Result<()> {
    // 1. Parser CLI
    let cli = cli::Cli::parse();

    // 2. Initialiser le logging
    env_logger::Builder::new()
        .filter_level(cli.log_level.parse().unwrap_or(log::LevelFilter::Warn))
        .init();

    // 3. Valider la source
    cli.validate_source()?;

    // 4. Charger la config
    let mut config = resolve_config(&cli)?;

    // 4b. Appliquer les overrides CLI
    if let Some(ref policy) = cli.policy {
        config.policy = match policy.as_str() {
            "reinterpret" => Policy::Reinterpret,
            "matrix" => Policy::Matrix,
            "sum" => Policy::Sum,
            "diffusion" => Policy::Diffusion,
            _ => {
                log::warn!("Politique inconnue '{policy}', utilisation du défaut.");
                config.policy
            }
        };
    }
    if let Some(ref comp) = cli.compression {
        config.compression = match comp.as_str() {
            "none" => CompressionScheme::None,
            "lzw" => CompressionScheme::Lzw,
            "deflate" => CompressionScheme::Deflate,
            "packbits" => CompressionScheme::Packbits,
            _ => {
                log::warn!("Compression inconnue '{comp}', utilisation du défaut.");
                config.compression
            }
        };
    }

    // 5. Lancer la conversion
    if let Some(ref folder) = cli.batch {
        batch::run_batch(folder, &config)
    } else if let Some(ref input) = cli.input {
        let output = cli
            .output
            .clone()
            .unwrap_or_else(|| convert::default_output(input, &config));
        convert::convert_file(input, &output, &config)
    } else {
        // validate_source garantit une source.
        anyhow::bail!("Aucune source spécifiée.")
    }
}

/// Resolve config: fichier fourni, sinon défauts.
fn resolve_config(cli: &cli::Cli) -> Result<ConvertConfig> {
    if cli.config.exists() {
        bt_core::config::load_config(&cli.config)
    } else {
        log::warn!(
            "Config introuvable : {}. Utilisation des défauts.",
            cli.config.display()
        );
        Ok(ConvertConfig::default())
    }
}
