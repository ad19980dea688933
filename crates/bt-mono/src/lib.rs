//! Cœur de conversion bitonale : quatre politiques sur un [`bt_core::Raster`].
//!
//! Chaque fonction est pure : elle alloue et retourne un raster de sortie
//! neuf, ne mute jamais la source, et préserve les dimensions. Les deux
//! seuils ([`threshold_sum_mono`], [`threshold_matrix_mono`]) sont
//! parallélisés par ligne ; [`error_diffusion_mono`] est strictement
//! séquentiel par construction.

pub mod diffusion;
pub mod matrix;
mod pack;
pub mod reinterpret;
pub mod rgba;
pub mod threshold;

pub use diffusion::{error_diffusion_mono, grey_level};
pub use matrix::threshold_matrix_mono;
pub use reinterpret::reinterpret_mono;
pub use rgba::{to_bgr24, to_rgba};
pub use threshold::threshold_sum_mono;
