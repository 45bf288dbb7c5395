#![deny(missing_docs)]
#![doc = env!("CARGO_PKG_DESCRIPTION")]

/// Error types for the layer store.
pub mod error;

/// ordered store of named layers.
pub mod store;

pub use crate::error::LayerError;
pub use crate::store::LayerStore;
