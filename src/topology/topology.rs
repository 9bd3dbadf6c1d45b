use crate::error::{NetworkError, Result};

/// Ordered layer-size descriptor defining the shape of a network.
///
/// Element 0 is the input width, the last element is the output width, and
/// everything in between sizes the hidden layers. `{2, 3, 1}` is two inputs,
/// one hidden layer of three, one output; `{3, 5, 5, 2}` has two hidden
/// layers of five.
///
/// The sizes are validated once at construction and immutable afterwards, so
/// a `Topology` in hand is always well-formed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Topology {
    sizes: Vec<usize>,
}

impl Topology {
    /// Validates `sizes` and wraps them. At least 3 layers, every one of
    /// them non-empty; anything else is rejected here rather than surfacing
    /// later as an out-of-bounds index.
    pub fn new(sizes: Vec<usize>) -> Result<Topology> {
        if sizes.len() < 3 {
            return Err(NetworkError::TooFewLayers(sizes.len()));
        }
        if let Some(index) = sizes.iter().position(|&s| s == 0) {
            return Err(NetworkError::EmptyLayer { index });
        }
        Ok(Topology { sizes })
    }

    /// Number of layers, input and output included.
    pub fn layer_count(&self) -> usize {
        self.sizes.len()
    }

    /// Neuron count of layer `index`, bias unit excluded.
    pub fn size(&self, index: usize) -> usize {
        self.sizes[index]
    }

    /// All layer sizes in order.
    pub fn sizes(&self) -> &[usize] {
        &self.sizes
    }

    /// Width of the input layer — the length every `feed_forward` vector
    /// must have.
    pub fn inputs(&self) -> usize {
        self.sizes[0]
    }

    /// Width of the output layer — the length every `back_prop` target
    /// vector must have.
    pub fn outputs(&self) -> usize {
        self.sizes[self.sizes.len() - 1]
    }
}
