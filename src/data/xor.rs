use crate::data::source::{TrainingData, TrainingSample};
use crate::topology::topology::Topology;

/// The exclusive-or truth table as a [`TrainingData`] source.
///
/// Cycles through the four rows in a fixed order for a caller-chosen number
/// of passes, one row per pass. XOR is the classic smoke test for this kind
/// of network: it is not linearly separable, so a net with no hidden layer
/// cannot learn it.
pub struct XorTable {
    topology: Topology,
    remaining: usize,
    cursor: usize,
}

impl XorTable {
    /// The truth table rows, in emission order.
    pub const ROWS: [([f64; 2], [f64; 1]); 4] = [
        ([0.0, 0.0], [0.0]),
        ([1.0, 0.0], [1.0]),
        ([0.0, 1.0], [1.0]),
        ([1.0, 1.0], [0.0]),
    ];

    /// A source that emits `passes` samples, cycling through [`ROWS`].
    ///
    /// [`ROWS`]: XorTable::ROWS
    pub fn new(passes: usize) -> XorTable {
        XorTable {
            topology: Topology::new(vec![2, 3, 3, 1]).expect("static XOR topology"),
            remaining: passes,
            cursor: 0,
        }
    }
}

impl TrainingData for XorTable {
    fn topology(&self) -> &Topology {
        &self.topology
    }

    fn has_more(&self) -> bool {
        self.remaining > 0
    }

    fn next_sample(&mut self) -> Option<TrainingSample> {
        if self.remaining == 0 {
            return None;
        }
        let (inputs, targets) = Self::ROWS[self.cursor];
        self.cursor = (self.cursor + 1) % Self::ROWS.len();
        self.remaining -= 1;
        Some(TrainingSample {
            inputs: inputs.to_vec(),
            targets: targets.to_vec(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn declares_a_four_layer_topology() {
        let table = XorTable::new(1);
        assert_eq!(table.topology().sizes(), &[2, 3, 3, 1]);
    }

    #[test]
    fn cycles_through_the_truth_table_in_order() {
        let mut table = XorTable::new(6);
        let mut seen = Vec::new();
        while let Some(sample) = table.next_sample() {
            seen.push(sample);
        }
        assert_eq!(seen.len(), 6);
        for (i, sample) in seen.iter().enumerate() {
            let (inputs, targets) = XorTable::ROWS[i % 4];
            assert_eq!(sample.inputs, inputs.to_vec());
            assert_eq!(sample.targets, targets.to_vec());
        }
    }

    #[test]
    fn exhaustion_is_permanent() {
        let mut table = XorTable::new(2);
        assert!(table.has_more());
        table.next_sample().unwrap();
        table.next_sample().unwrap();
        assert!(!table.has_more());
        assert_eq!(table.next_sample(), None);
        assert_eq!(table.next_sample(), None);
    }

    #[test]
    fn zero_passes_yields_nothing() {
        let mut table = XorTable::new(0);
        assert!(!table.has_more());
        assert_eq!(table.next_sample(), None);
    }
}
