#![doc = env!("CARGO_PKG_DESCRIPTION")]

#[doc(inline)]
pub use strata_image as image;

#[doc(inline)]
pub use strata_imgproc as imgproc;

#[doc(inline)]
pub use strata_io as io;

#[doc(inline)]
pub use strata_layers as layers;
