#![deny(missing_docs)]
#![doc = env!("CARGO_PKG_DESCRIPTION")]

/// transform backend selection module.
pub mod backend;

/// error types for the filter crates.
pub mod error;

/// per-block spectral transform module.
pub mod fft;

/// frequency-plane filter masks module.
pub mod kernel;

/// concurrent filter request scheduling module.
pub mod scheduler;

/// overlap-discard tiling module.
pub mod tile;
