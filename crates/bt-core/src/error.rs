use thiserror::Error;

/// Errors originating from raster construction and conversion.
#[derive(Error, Debug)]
pub enum RasterError {
    /// Invalid or overflowing width/height.
    #[error("Dimensions invalides : {width}×{height}")]
    InvalidDimensions {
        /// Width value.
        width: u32,
        /// Height value.
        height: u32,
    },

    /// Source pixel format the conversion cannot interpret.
    #[error("Format de pixel non supporté : {format}")]
    UnsupportedFormat {
        /// The format description that is unsupported.
        format: String,
    },

    /// Wrapped buffer smaller than stride × height.
    ///
    /// Surfaced at construction only; unreachable once a [`crate::Raster`]
    /// exists.
    #[error("Buffer trop petit : {actual} octets fournis, {expected} attendus")]
    BufferMismatch {
        /// Minimum buffer size in bytes.
        expected: usize,
        /// Actual buffer size in bytes.
        actual: usize,
    },
}
