//! Décodage : conteneur paginé → séquence de rasters Bgra32.

use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use anyhow::{Context, Result};
use bt_core::raster::{PixelFormat, Raster};
use bt_core::RasterError;
use image::codecs::gif::GifDecoder;
use image::AnimationDecoder;
use tiff::decoder::{Decoder, DecodingResult};
use tiff::ColorType;

/// Décode toutes les frames d'un conteneur en rasters Bgra32.
///
/// TIFF multipage et GIF animé produisent une frame par page/trame ;
/// tout autre format supporté produit une frame unique. Décodage eager :
/// la séquence est finie et entièrement en mémoire.
///
/// # Errors
/// Retourne l'erreur du codec si le fichier est illisible, corrompu, ou
/// d'un type de couleur non géré.
pub fn get_frames(path: &Path) -> Result<Vec<Raster>> {
    let ext = path
        .extension()
        .and_then(|s| s.to_str())
        .map(str::to_ascii_lowercase);
    match ext.as_deref() {
        Some("tif" | "tiff") => tiff_frames(path),
        Some("gif") => gif_frames(path),
        _ => Ok(vec![load_raster(path)?]),
    }
}

/// Charge une source mono-frame en raster Bgra32.
///
/// # Errors
/// Retourne une erreur si l'image ne peut pas être chargée.
pub fn load_raster(path: &Path) -> Result<Raster> {
    let img = image::open(path)
        .with_context(|| format!("Impossible de charger {}", path.display()))?;
    Ok(raster_from_rgba(&img.to_rgba8())?)
}

/// Pont image-rs → raster : RGBA interleavé vers Bgra32.
///
/// # Errors
/// [`RasterError::InvalidDimensions`] si l'allocation déborde.
///
/// # Example
/// ```
/// use bt_source::raster_from_rgba;
/// let img = image::RgbaImage::from_pixel(2, 1, image::Rgba([1, 2, 3, 4]));
/// let raster = raster_from_rgba(&img).unwrap();
/// // L'ordre des octets s'inverse : R,G,B,A → B,G,R,A.
/// assert_eq!(raster.bgra(0, 0), (3, 2, 1, 4));
/// ```
pub fn raster_from_rgba(img: &image::RgbaImage) -> Result<Raster, RasterError> {
    let (w, h) = img.dimensions();
    let mut out = Raster::new(w, h, PixelFormat::Bgra32)?;
    for (x, y, p) in img.enumerate_pixels() {
        let [r, g, b, a] = p.0;
        out.put_bgra(x, y, b, g, r, a);
    }
    Ok(out)
}

fn tiff_frames(path: &Path) -> Result<Vec<Raster>> {
    let file =
        File::open(path).with_context(|| format!("Impossible d'ouvrir {}", path.display()))?;
    let mut decoder = Decoder::new(BufReader::new(file))
        .with_context(|| format!("TIFF invalide : {}", path.display()))?;
    let mut frames = Vec::new();
    loop {
        let (w, h) = decoder.dimensions().context("Dimensions TIFF illisibles")?;
        let color = decoder.colortype().context("Type de couleur TIFF illisible")?;
        let page = decoder.read_image().context("Page TIFF illisible")?;
        frames.push(raster_from_tiff_page(w, h, color, page)?);
        if !decoder.more_images() {
            break;
        }
        decoder.next_image().context("Page TIFF suivante illisible")?;
    }
    log::info!("{} : {} page(s) TIFF décodée(s)", path.display(), frames.len());
    Ok(frames)
}

fn raster_from_tiff_page(
    w: u32,
    h: u32,
    color: ColorType,
    page: DecodingResult,
) -> Result<Raster> {
    let DecodingResult::U8(buf) = page else {
        return Err(RasterError::UnsupportedFormat {
            format: format!("TIFF {color:?} (échantillons non 8 bits)"),
        }
        .into());
    };
    let mut out = Raster::new(w, h, PixelFormat::Bgra32)?;
    let row_px = w as usize;
    match color {
        ColorType::Gray(8) => {
            for y in 0..h {
                for x in 0..w {
                    let v = buf[y as usize * row_px + x as usize];
                    out.put_bgra(x, y, v, v, v, 255);
                }
            }
        }
        ColorType::RGB(8) => {
            for y in 0..h {
                for x in 0..w {
                    let i = (y as usize * row_px + x as usize) * 3;
                    out.put_bgra(x, y, buf[i + 2], buf[i + 1], buf[i], 255);
                }
            }
        }
        ColorType::RGBA(8) => {
            for y in 0..h {
                for x in 0..w {
                    let i = (y as usize * row_px + x as usize) * 4;
                    out.put_bgra(x, y, buf[i + 2], buf[i + 1], buf[i], buf[i + 3]);
                }
            }
        }
        other => {
            return Err(RasterError::UnsupportedFormat {
                format: format!("TIFF {other:?}"),
            }
            .into());
        }
    }
    Ok(out)
}

fn gif_frames(path: &Path) -> Result<Vec<Raster>> {
    let file =
        File::open(path).with_context(|| format!("Impossible d'ouvrir {}", path.display()))?;
    let decoder = GifDecoder::new(BufReader::new(file))
        .with_context(|| format!("GIF invalide : {}", path.display()))?;
    let mut frames = Vec::new();
    for frame in decoder.into_frames() {
        let frame = frame.with_context(|| format!("Trame GIF illisible : {}", path.display()))?;
        frames.push(raster_from_rgba(frame.buffer())?);
    }
    log::info!("{} : {} trame(s) GIF décodée(s)", path.display(), frames.len());
    Ok(frames)
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{Delay, Frame, Rgba, RgbaImage};
    use std::time::Duration;

    #[test]
    fn swizzle_rgba_vers_bgra() {
        let mut img = RgbaImage::new(2, 2);
        img.put_pixel(0, 0, Rgba([10, 20, 30, 40]));
        img.put_pixel(1, 1, Rgba([200, 150, 100, 255]));
        let raster = raster_from_rgba(&img).unwrap();
        assert_eq!(raster.format(), PixelFormat::Bgra32);
        assert_eq!(raster.bgra(0, 0), (30, 20, 10, 40));
        assert_eq!(raster.bgra(1, 1), (100, 150, 200, 255));
    }

    #[test]
    fn png_mono_frame() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("pixel.png");
        let img = RgbaImage::from_pixel(3, 2, Rgba([5, 6, 7, 255]));
        img.save(&path).unwrap();

        let frames = get_frames(&path).unwrap();
        assert_eq!(frames.len(), 1);
        assert_eq!((frames[0].width(), frames[0].height()), (3, 2));
        assert_eq!(frames[0].bgra(2, 1), (7, 6, 5, 255));
    }

    #[test]
    fn gif_deux_trames() {
        use image::codecs::gif::GifEncoder;

        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("anim.gif");
        {
            let file = std::fs::File::create(&path).unwrap();
            let mut encoder = GifEncoder::new(file);
            let frames = vec![
                Frame::from_parts(
                    RgbaImage::from_pixel(2, 2, Rgba([255, 0, 0, 255])),
                    0,
                    0,
                    Delay::from_saturating_duration(Duration::from_millis(100)),
                ),
                Frame::from_parts(
                    RgbaImage::from_pixel(2, 2, Rgba([0, 0, 255, 255])),
                    0,
                    0,
                    Delay::from_saturating_duration(Duration::from_millis(100)),
                ),
            ];
            encoder.encode_frames(frames).unwrap();
        }

        let frames = get_frames(&path).unwrap();
        assert_eq!(frames.len(), 2);
        // GIF est palettisé sans perte sur des aplats purs.
        assert_eq!(frames[0].bgra(0, 0).2, 255); // rouge
        assert_eq!(frames[1].bgra(0, 0).0, 255); // bleu
    }

    #[test]
    fn fichier_absent_remonte_l_erreur() {
        let err = get_frames(Path::new("/nonexistent/missing.png"));
        assert!(err.is_err());
    }
}
