//! Encodage des résultats de conversion vers le disque.
//!
//! Miroir de bt-source : une frame en mémoire, une page dans le
//! conteneur. TIFF paginé avec compression sélectionnable, plus un
//! export PNG mono-frame pour aperçu.

pub mod pages;
pub mod preview;

pub use pages::{save_pages, save_raster};
pub use preview::save_png;
