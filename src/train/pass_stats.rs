use serde::{Deserialize, Serialize};

/// Per-pass training statistics emitted by `train_loop`.
///
/// When a `progress_tx` channel is configured in `TrainConfig`, the training
/// loop sends one `PassStats` value after every completed
/// forward/backward pass. Receivers use this to drive progress printing or
/// live charts without touching the network itself.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PassStats {
    /// 1-based pass number.
    pub pass: usize,
    /// Inputs fed into the network on this pass.
    pub inputs: Vec<f64>,
    /// Outputs the network produced for those inputs.
    pub outputs: Vec<f64>,
    /// Targets the pass trained toward.
    pub targets: Vec<f64>,
    /// Smoothed error after this pass's weight update.
    pub recent_average_error: f64,
}
