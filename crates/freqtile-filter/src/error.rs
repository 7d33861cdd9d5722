use freqtile_image::ImageError;

/// Errors produced while validating or running a filter request.
#[derive(thiserror::Error, Debug, PartialEq)]
pub enum FilterError {
    /// A cutoff frequency was zero or negative.
    #[error("Cutoff frequency must be strictly positive, got {0}")]
    InvalidCutoff(f32),

    /// A band-pass request did not satisfy `0 < low < high`.
    #[error("Band-pass cutoffs must satisfy 0 < low < high, got low={low} high={high}")]
    InvalidBand {
        /// Lower cutoff as given.
        low: f32,
        /// Upper cutoff as given.
        high: f32,
    },

    /// The block edge length was zero.
    #[error("Block size must be greater than zero")]
    InvalidBlockSize,

    /// The overlap was not smaller than the block edge length.
    #[error("Overlap ({overlap}) must be smaller than the block size ({block_size})")]
    OverlapTooLarge {
        /// Overlap as given.
        overlap: usize,
        /// Block edge length as given.
        block_size: usize,
    },

    /// The border was smaller than the overlap, which would leave overlap
    /// regions at the image edges without valid context.
    #[error("Border ({border}) must be at least the overlap ({overlap})")]
    BorderTooSmall {
        /// Border width as given.
        border: usize,
        /// Overlap as given.
        overlap: usize,
    },

    /// Error constructing an image buffer.
    #[error(transparent)]
    Image(#[from] ImageError),
}
