use crate::topology::topology::Topology;

/// One input/target pair pulled from a [`TrainingData`] source.
#[derive(Debug, Clone, PartialEq)]
pub struct TrainingSample {
    pub inputs: Vec<f64>,
    pub targets: Vec<f64>,
}

/// A sequential source of training samples.
///
/// A source is consumed front to back: `next_sample` hands out one pair per
/// call until the sequence is exhausted, after which it returns `None`
/// forever. `has_more` answers the same question without consuming anything,
/// so a caller can drive `while data.has_more()` loops.
///
/// The source also declares the [`Topology`] its samples were generated for;
/// a network trained against it must at least match that topology's input
/// and output widths.
pub trait TrainingData {
    /// Layer sizes this source's samples are shaped for.
    fn topology(&self) -> &Topology;

    /// Whether another call to `next_sample` would yield a sample.
    fn has_more(&self) -> bool;

    /// The next input/target pair, or `None` once the source is exhausted.
    fn next_sample(&mut self) -> Option<TrainingSample>;
}
