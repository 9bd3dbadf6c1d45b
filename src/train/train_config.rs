use std::sync::mpsc;
use std::sync::{Arc, atomic::AtomicBool};
use crate::train::pass_stats::PassStats;

/// Configuration for a `train_loop` run.
///
/// # Fields
/// - `progress_tx` — optional channel sender; one `PassStats` is sent per
///                   completed pass.  If the receiver is dropped the loop
///                   terminates early (clean shutdown).
/// - `stop_flag`   — optional atomic flag; when set to `true` from another
///                   thread the loop terminates before the next pass starts.
#[derive(Default)]
pub struct TrainConfig {
    pub progress_tx: Option<mpsc::Sender<PassStats>>,
    pub stop_flag: Option<Arc<AtomicBool>>,
}

impl TrainConfig {
    /// Creates a minimal `TrainConfig` with no progress channel and no stop flag.
    pub fn new() -> Self {
        TrainConfig::default()
    }
}
