#![deny(missing_docs)]
//! Image buffer types shared by the freqtile crates.

/// image representation as an interleaved HxWxC buffer.
pub mod image;

/// Error types for the image module.
pub mod error;

pub use crate::error::ImageError;
pub use crate::image::{Image, ImageSize};
