//! Décodage des sources d'images pour bitona.
//!
//! Traduit les conteneurs sur disque (TIFF paginé, GIF animé, formats
//! mono-frame) en rasters Bgra32 en mémoire. Le cœur de conversion ne
//! voit jamais un fichier : une frame entre, une frame sort.

pub mod frames;

pub use frames::{get_frames, load_raster, raster_from_rgba};
