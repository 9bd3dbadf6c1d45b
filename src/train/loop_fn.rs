use std::sync::atomic::Ordering;

use crate::data::source::TrainingData;
use crate::error::Result;
use crate::net::network::Network;
use crate::train::pass_stats::PassStats;
use crate::train::train_config::TrainConfig;

/// Drains `data` into `network`, one forward/backward pass per sample, and
/// returns the smoothed error after the last completed pass.
///
/// # Arguments
/// - `network` — mutable reference to the network; modified in place
/// - `data`    — sample source; consumed until exhausted
/// - `config`  — optional progress channel, optional stop flag
///
/// # Early termination
/// The loop breaks early if:
/// - the `progress_tx` receiver has been dropped (clean shutdown), **or**
/// - `config.stop_flag` is set to `true`.
///
/// # Errors
/// Fails on the first sample whose input or target width does not match the
/// network. Passes already completed keep their weight updates.
pub fn train_loop(
    network: &mut Network,
    data: &mut dyn TrainingData,
    config: &TrainConfig,
) -> Result<f64> {
    let mut pass = 0;

    while data.has_more() {
        // Check stop flag at the top of each pass.
        if let Some(ref flag) = config.stop_flag {
            if flag.load(Ordering::Relaxed) {
                break;
            }
        }

        let sample = match data.next_sample() {
            Some(sample) => sample,
            None => break,
        };
        pass += 1;

        let outputs = network.feed_forward(&sample.inputs)?;
        network.back_prop(&sample.targets)?;

        // ── Emit progress ─────────────────────────────────────────────────
        if let Some(ref tx) = config.progress_tx {
            let stats = PassStats {
                pass,
                inputs: sample.inputs,
                outputs,
                targets: sample.targets,
                recent_average_error: network.recent_average_error(),
            };
            // If the receiver has been dropped, stop training.
            if tx.send(stats).is_err() {
                break;
            }
        }
    }

    Ok(network.recent_average_error())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::xor::XorTable;
    use crate::error::NetworkError;
    use crate::net::builder::NetworkBuilder;
    use crate::topology::topology::Topology;
    use std::sync::atomic::AtomicBool;
    use std::sync::{mpsc, Arc};

    fn xor_net(seed: u64) -> Network {
        let table = XorTable::new(0);
        NetworkBuilder::new(table.topology().clone())
            .build_seeded(seed)
            .unwrap()
    }

    #[test]
    fn consumes_the_whole_source_and_reports_each_pass() {
        let mut net = xor_net(1);
        let mut data = XorTable::new(12);
        let (tx, rx) = mpsc::channel();
        let config = TrainConfig {
            progress_tx: Some(tx),
            stop_flag: None,
        };

        let final_error = train_loop(&mut net, &mut data, &config).unwrap();
        drop(config);

        let stats: Vec<PassStats> = rx.iter().collect();
        assert_eq!(stats.len(), 12);
        assert_eq!(stats[0].pass, 1);
        assert_eq!(stats[11].pass, 12);
        assert_eq!(stats[11].recent_average_error, final_error);
        assert!(!data.has_more());

        // Each report carries the sample it was trained on.
        let (inputs, targets) = XorTable::ROWS[1];
        assert_eq!(stats[1].inputs, inputs.to_vec());
        assert_eq!(stats[1].targets, targets.to_vec());
    }

    #[test]
    fn runs_silently_without_a_channel() {
        let mut net = xor_net(2);
        let mut data = XorTable::new(8);
        let error = train_loop(&mut net, &mut data, &TrainConfig::new()).unwrap();
        assert!(error > 0.0);
        assert_eq!(error, net.recent_average_error());
    }

    #[test]
    fn dropped_receiver_stops_the_loop() {
        let mut net = xor_net(3);
        let mut data = XorTable::new(1000);
        let (tx, rx) = mpsc::channel();
        drop(rx);
        let config = TrainConfig {
            progress_tx: Some(tx),
            stop_flag: None,
        };

        train_loop(&mut net, &mut data, &config).unwrap();

        // Exactly one pass ran before the send failure was noticed.
        assert!(data.has_more());
        let next = data.next_sample().unwrap();
        assert_eq!(next.inputs, XorTable::ROWS[1].0.to_vec());
    }

    #[test]
    fn preset_stop_flag_prevents_any_pass() {
        let mut net = xor_net(4);
        let mut data = XorTable::new(100);
        let flag = Arc::new(AtomicBool::new(true));
        let config = TrainConfig {
            progress_tx: None,
            stop_flag: Some(flag),
        };

        let error = train_loop(&mut net, &mut data, &config).unwrap();

        assert_eq!(error, 0.0);
        assert!(data.has_more());
    }

    #[test]
    fn mismatched_source_width_aborts_with_an_error() {
        // A 3-input network cannot consume 2-input XOR rows.
        let topology = Topology::new(vec![3, 3, 1]).unwrap();
        let mut net = NetworkBuilder::new(topology).build_seeded(5).unwrap();
        let mut data = XorTable::new(4);

        let err = train_loop(&mut net, &mut data, &TrainConfig::new()).unwrap_err();
        assert_eq!(
            err,
            NetworkError::InputSizeMismatch {
                expected: 3,
                got: 2
            }
        );
    }
}
