use std::collections::HashSet;

use strata_image::{Image, ImageError};

use crate::error::LayerError;

#[derive(Clone, Debug, PartialEq)]
struct Layer {
    name: String,
    image: Image,
    hidden: bool,
}

/// An ordered collection of named images, each of which can be hidden.
///
/// Layers keep their insertion order. The first layer in that order that is not hidden is the
/// one presented for display.
///
/// # Example
///
/// ```
/// use strata_image::{Color, Image, ImageSize};
/// use strata_layers::LayerStore;
///
/// let mut store = LayerStore::new();
/// let size = ImageSize { width: 2, height: 2 };
///
/// store.add("background", Image::from_size_val(size, Color::WHITE)).unwrap();
/// store.add("sketch", Image::from_size_val(size, Color::BLACK)).unwrap();
/// store.hide("background").unwrap();
///
/// let (name, _) = store.topmost_visible().unwrap();
/// assert_eq!(name, "sketch");
/// ```
#[derive(Clone, Debug, Default, PartialEq)]
pub struct LayerStore {
    layers: Vec<Layer>,
}

impl LayerStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    fn position(&self, name: &str) -> Result<usize, LayerError> {
        self.layers
            .iter()
            .position(|layer| layer.name == name)
            .ok_or_else(|| LayerError::LayerNotFound(name.to_string()))
    }

    /// Append a new visible layer.
    ///
    /// # Errors
    ///
    /// Returns [`LayerError::DuplicateLayer`] if `name` is already in the store.
    pub fn add(&mut self, name: impl Into<String>, image: Image) -> Result<(), LayerError> {
        let name = name.into();
        if self.contains(&name) {
            return Err(LayerError::DuplicateLayer(name));
        }

        log::info!("adding layer {} ({})", name, image.size());
        self.layers.push(Layer {
            name,
            image,
            hidden: false,
        });
        Ok(())
    }

    /// Replace the image of an existing layer, keeping its position and visibility.
    ///
    /// # Errors
    ///
    /// Returns [`LayerError::LayerNotFound`] if `name` is not in the store.
    pub fn replace(&mut self, name: &str, image: Image) -> Result<(), LayerError> {
        let index = self.position(name)?;
        log::debug!("replacing layer {} ({})", name, image.size());
        self.layers[index].image = image;
        Ok(())
    }

    /// Remove a layer and return its image.
    ///
    /// # Errors
    ///
    /// Returns [`LayerError::LayerNotFound`] if `name` is not in the store.
    pub fn remove(&mut self, name: &str) -> Result<Image, LayerError> {
        let index = self.position(name)?;
        log::info!("removing layer {}", name);
        Ok(self.layers.remove(index).image)
    }

    /// Make a hidden layer visible.
    ///
    /// # Errors
    ///
    /// Returns [`LayerError::LayerNotFound`] if `name` is not in the store, or
    /// [`LayerError::AlreadyVisible`] if it is not hidden.
    pub fn show(&mut self, name: &str) -> Result<(), LayerError> {
        let index = self.position(name)?;
        let layer = &mut self.layers[index];
        if !layer.hidden {
            return Err(LayerError::AlreadyVisible(name.to_string()));
        }
        log::info!("showing layer {}", name);
        layer.hidden = false;
        Ok(())
    }

    /// Hide a visible layer.
    ///
    /// # Errors
    ///
    /// Returns [`LayerError::LayerNotFound`] if `name` is not in the store, or
    /// [`LayerError::AlreadyHidden`] if it is hidden already.
    pub fn hide(&mut self, name: &str) -> Result<(), LayerError> {
        let index = self.position(name)?;
        let layer = &mut self.layers[index];
        if layer.hidden {
            return Err(LayerError::AlreadyHidden(name.to_string()));
        }
        log::info!("hiding layer {}", name);
        layer.hidden = true;
        Ok(())
    }

    /// The layers in insertion order.
    pub fn layers(&self) -> impl Iterator<Item = (&str, &Image)> + '_ {
        self.layers
            .iter()
            .map(|layer| (layer.name.as_str(), &layer.image))
    }

    /// The names of the hidden layers.
    pub fn visibility(&self) -> HashSet<String> {
        self.layers
            .iter()
            .filter(|layer| layer.hidden)
            .map(|layer| layer.name.clone())
            .collect()
    }

    /// The first layer in insertion order that is not hidden.
    pub fn topmost_visible(&self) -> Option<(&str, &Image)> {
        self.layers
            .iter()
            .find(|layer| !layer.hidden)
            .map(|layer| (layer.name.as_str(), &layer.image))
    }

    /// Replace the whole content of the store.
    ///
    /// The store is cleared and filled with `images` in iteration order, then every name in
    /// `hidden` is marked hidden. Nothing changes when an error is returned.
    ///
    /// # Arguments
    ///
    /// * `images` - The new layers, in order.
    /// * `hidden` - The names of the layers to hide.
    ///
    /// # Errors
    ///
    /// Returns [`LayerError::DuplicateLayer`] if a name appears twice in `images`, or
    /// [`LayerError::UnknownHiddenLayer`] if a hidden name is not one of them.
    pub fn add_multiple<N, H>(
        &mut self,
        images: impl IntoIterator<Item = (N, Image)>,
        hidden: impl IntoIterator<Item = H>,
    ) -> Result<(), LayerError>
    where
        N: Into<String>,
        H: AsRef<str>,
    {
        let mut layers: Vec<Layer> = Vec::new();
        for (name, image) in images {
            let name = name.into();
            if layers.iter().any(|layer| layer.name == name) {
                return Err(LayerError::DuplicateLayer(name));
            }
            layers.push(Layer {
                name,
                image,
                hidden: false,
            });
        }

        for name in hidden {
            let name = name.as_ref();
            let layer = layers
                .iter_mut()
                .find(|layer| layer.name == name)
                .ok_or_else(|| LayerError::UnknownHiddenLayer(name.to_string()))?;
            layer.hidden = true;
        }

        log::info!("loading {} layers", layers.len());
        self.layers = layers;
        Ok(())
    }

    /// The image of a layer, if present.
    pub fn get(&self, name: &str) -> Option<&Image> {
        self.layers
            .iter()
            .find(|layer| layer.name == name)
            .map(|layer| &layer.image)
    }

    /// Whether a layer with this name exists.
    pub fn contains(&self, name: &str) -> bool {
        self.layers.iter().any(|layer| layer.name == name)
    }

    /// Number of layers, hidden ones included.
    pub fn len(&self) -> usize {
        self.layers.len()
    }

    /// Whether the store has no layers.
    pub fn is_empty(&self) -> bool {
        self.layers.is_empty()
    }

    /// Whether a layer is hidden.
    ///
    /// # Errors
    ///
    /// Returns [`LayerError::LayerNotFound`] if `name` is not in the store.
    pub fn is_hidden(&self, name: &str) -> Result<bool, LayerError> {
        let index = self.position(name)?;
        Ok(self.layers[index].hidden)
    }

    /// Run a transform on the image of a layer and store the result in its place.
    ///
    /// The layer is left untouched when the transform fails.
    ///
    /// # Arguments
    ///
    /// * `name` - The layer to transform.
    /// * `transform` - Maps the current image to its replacement.
    pub fn apply<F>(&mut self, name: &str, transform: F) -> Result<(), LayerError>
    where
        F: FnOnce(&Image) -> Result<Image, ImageError>,
    {
        let index = self.position(name)?;
        let image = transform(&self.layers[index].image)?;
        log::debug!("transformed layer {} ({})", name, image.size());
        self.layers[index].image = image;
        Ok(())
    }
}
