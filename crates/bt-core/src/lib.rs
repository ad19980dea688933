//! Types, erreurs et configuration partagés de bitona.
//!
//! Ce crate contient les types valeur communs à tout le workspace :
//! le raster à stride explicite, la taxonomie d'erreurs, et la
//! configuration TOML de l'outil. Aucune I/O, aucun algorithme.

pub mod config;
pub mod error;
pub mod raster;

pub use config::{CompressionScheme, ConvertConfig, Policy};
pub use error::RasterError;
pub use raster::{PixelFormat, Raster};
