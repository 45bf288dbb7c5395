#![deny(missing_docs)]
#![doc = env!("CARGO_PKG_DESCRIPTION")]

/// color transformations module.
pub mod color;

/// image enhancement module.
pub mod enhance;

/// image filtering module.
pub mod filter;

/// image flipping module.
pub mod flip;

/// synthetic image generators.
pub mod generate;

/// compute image histogram module.
pub mod histogram;

/// named transforms that map one image to another.
pub mod transform;
