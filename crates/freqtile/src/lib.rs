#![doc = env!("CARGO_PKG_DESCRIPTION")]

#[doc(inline)]
pub use freqtile_image as image;

#[doc(inline)]
pub use freqtile_filter as filter;
