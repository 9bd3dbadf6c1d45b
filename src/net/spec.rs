use serde::{Deserialize, Serialize};

use crate::net::builder::{DEFAULT_ALPHA, DEFAULT_BIAS_VALUE, DEFAULT_ETA};
use crate::transfer::transfer_type::TransferType;

/// A fully serializable description of a network: layer sizes plus the
/// construction-time knobs.
///
/// `NetworkSpec` can be saved to / loaded from JSON independently of any
/// live network, making it possible to store architecture configurations
/// and rebuild fresh networks from them later. Weights are never part of
/// the file; [`Network::from_spec`] draws a new random set on every build.
///
/// [`Network::from_spec`]: crate::net::network::Network::from_spec
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NetworkSpec {
    /// Ordered layer sizes (input → output), bias units not counted.
    pub layers: Vec<usize>,
    /// Transfer function applied by every non-input neuron.
    pub transfer: TransferType,
    /// Constant output of every bias unit.
    #[serde(default = "default_bias_value")]
    pub bias_value: f64,
    /// Learning rate.
    #[serde(default = "default_eta")]
    pub eta: f64,
    /// Momentum factor.
    #[serde(default = "default_alpha")]
    pub alpha: f64,
}

fn default_bias_value() -> f64 {
    DEFAULT_BIAS_VALUE
}

fn default_eta() -> f64 {
    DEFAULT_ETA
}

fn default_alpha() -> f64 {
    DEFAULT_ALPHA
}

impl NetworkSpec {
    /// Serializes the spec to a pretty-printed JSON file.
    pub fn save_json(&self, path: &str) -> std::io::Result<()> {
        let file = std::fs::File::create(path)?;
        let writer = std::io::BufWriter::new(file);
        serde_json::to_writer_pretty(writer, self)
            .map_err(|e| std::io::Error::new(std::io::ErrorKind::Other, e))
    }

    /// Deserializes a `NetworkSpec` from a JSON file.
    pub fn load_json(path: &str) -> std::io::Result<NetworkSpec> {
        let file = std::fs::File::open(path)?;
        let reader = std::io::BufReader::new(file);
        serde_json::from_reader(reader)
            .map_err(|e| std::io::Error::new(std::io::ErrorKind::Other, e))
    }
}
