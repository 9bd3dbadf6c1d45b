/// Result type alias using NetworkError
pub type Result<T> = std::result::Result<T, NetworkError>;

/// Errors raised by network construction and the two training passes.
///
/// Every failure is immediate and final: a failed call leaves the network
/// exactly as it was (no partial mutation), and nothing in this crate
/// retries on the caller's behalf.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum NetworkError {
    /// `feed_forward` was handed a vector that does not match the input width.
    #[error("input length {got} does not match the topology's input width {expected}")]
    InputSizeMismatch { expected: usize, got: usize },

    /// `back_prop` was handed a vector that does not match the output width.
    #[error("target length {got} does not match the topology's output width {expected}")]
    TargetSizeMismatch { expected: usize, got: usize },

    /// A topology needs an input layer, at least one hidden layer and an
    /// output layer.
    #[error("topology must have at least 3 layers, got {0}")]
    TooFewLayers(usize),

    /// Every layer must hold at least one neuron (the bias unit is synthetic
    /// and does not count).
    #[error("layer {index} has size 0; every layer needs at least one neuron")]
    EmptyLayer { index: usize },

    /// `eta` and `alpha` are fractions of an update and must stay in [0, 1].
    #[error("{name} must lie in [0, 1], got {value}")]
    HyperparamOutOfRange { name: &'static str, value: f64 },
}
