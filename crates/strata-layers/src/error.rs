use strata_image::ImageError;

/// An error type for the layer store.
#[derive(thiserror::Error, Debug, PartialEq)]
pub enum LayerError {
    /// Error when adding a layer whose name is already taken.
    #[error("Layer already exists: {0}")]
    DuplicateLayer(String),

    /// Error when a layer name is not in the store.
    #[error("Layer not found: {0}")]
    LayerNotFound(String),

    /// Error when hiding a layer that is already hidden.
    #[error("Layer is already hidden: {0}")]
    AlreadyHidden(String),

    /// Error when showing a layer that is already visible.
    #[error("Layer is already visible: {0}")]
    AlreadyVisible(String),

    /// Error when a hidden name does not belong to the layers being loaded.
    #[error("Hidden layer {0} is not part of the loaded layers")]
    UnknownHiddenLayer(String),

    /// Error raised by a transform applied to a layer.
    #[error("Failed to transform layer. {0}")]
    Transform(#[from] ImageError),
}
