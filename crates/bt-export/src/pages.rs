//! Encodage TIFF paginé avec compression sélectionnable.
//!
//! Les rasters Mono1 sont stockés élargis en Gray8 bilevel (0/255) : le
//! codec n'expose pas de type de couleur 1 bit. Le contrat en mémoire —
//! un `Raster` Mono1 compacté — n'en dépend pas.

use std::fs::File;
use std::io::{BufWriter, Seek, Write};
use std::path::Path;

use anyhow::{Context, Result};
use bt_core::config::CompressionScheme;
use bt_core::raster::{PixelFormat, Raster};
use tiff::encoder::colortype::{self, ColorType};
use tiff::encoder::compression::{Deflate, Lzw, Packbits, Uncompressed};
use tiff::encoder::{TiffEncoder, TiffValue};

/// Écrit un raster unique dans un TIFF.
///
/// # Errors
/// Retourne une erreur si le fichier ne peut pas être créé ou encodé.
pub fn save_raster(raster: &Raster, path: &Path, compression: CompressionScheme) -> Result<()> {
    save_pages(std::slice::from_ref(raster), path, compression)
}

/// Écrit une page TIFF par raster, dans l'ordre de la tranche.
///
/// # Errors
/// Retourne une erreur si le fichier ne peut pas être créé ou si une page
/// échoue à l'encodage.
pub fn save_pages(rasters: &[Raster], path: &Path, compression: CompressionScheme) -> Result<()> {
    let file =
        File::create(path).with_context(|| format!("Impossible de créer {}", path.display()))?;
    let mut encoder =
        TiffEncoder::new(BufWriter::new(file)).context("Initialisation de l'encodeur TIFF")?;
    for (idx, raster) in rasters.iter().enumerate() {
        write_page(&mut encoder, raster, compression)
            .with_context(|| format!("Écriture de la page {idx} dans {}", path.display()))?;
    }
    log::info!("{} : {} page(s) écrite(s)", path.display(), rasters.len());
    Ok(())
}

fn write_page<W: Write + Seek>(
    encoder: &mut TiffEncoder<W>,
    raster: &Raster,
    compression: CompressionScheme,
) -> Result<()> {
    let (w, h) = (raster.width(), raster.height());
    match raster.format() {
        PixelFormat::Mono1 => {
            let data = gray8_from_mono(raster);
            write_with::<colortype::Gray8, _>(encoder, w, h, compression, &data)
        }
        PixelFormat::Bgr24 => {
            let data = rgb8_from_bgr(raster);
            write_with::<colortype::RGB8, _>(encoder, w, h, compression, &data)
        }
        PixelFormat::Bgra32 => {
            let data = rgba8_from_bgra(raster);
            write_with::<colortype::RGBA8, _>(encoder, w, h, compression, &data)
        }
    }
}

fn write_with<C, W>(
    encoder: &mut TiffEncoder<W>,
    w: u32,
    h: u32,
    compression: CompressionScheme,
    data: &[C::Inner],
) -> Result<()>
where
    C: ColorType,
    W: Write + Seek,
    [C::Inner]: TiffValue,
{
    match compression {
        CompressionScheme::None => {
            encoder.write_image_with_compression::<C, _>(w, h, Uncompressed, data)
        }
        CompressionScheme::Lzw => encoder.write_image_with_compression::<C, _>(w, h, Lzw, data),
        CompressionScheme::Deflate => {
            encoder.write_image_with_compression::<C, _>(w, h, Deflate::default(), data)
        }
        CompressionScheme::Packbits => {
            encoder.write_image_with_compression::<C, _>(w, h, Packbits, data)
        }
    }
    .context("Encodage de la page TIFF")?;
    Ok(())
}

/// Élargit un Mono1 compacté en octets Gray8 : bit 1 → 255, bit 0 → 0.
fn gray8_from_mono(raster: &Raster) -> Vec<u8> {
    let (w, h) = (raster.width(), raster.height());
    let mut data = Vec::with_capacity(w as usize * h as usize);
    for y in 0..h {
        for x in 0..w {
            data.push(if raster.bit(x, y) { 255 } else { 0 });
        }
    }
    data
}

fn rgb8_from_bgr(raster: &Raster) -> Vec<u8> {
    let (w, h) = (raster.width(), raster.height());
    let mut data = Vec::with_capacity(w as usize * h as usize * 3);
    for y in 0..h {
        for x in 0..w {
            let (b, g, r) = raster.bgr(x, y);
            data.extend_from_slice(&[r, g, b]);
        }
    }
    data
}

fn rgba8_from_bgra(raster: &Raster) -> Vec<u8> {
    let (w, h) = (raster.width(), raster.height());
    let mut data = Vec::with_capacity(w as usize * h as usize * 4);
    for y in 0..h {
        for x in 0..w {
            let (b, g, r, a) = raster.bgra(x, y);
            data.extend_from_slice(&[r, g, b, a]);
        }
    }
    data
}
