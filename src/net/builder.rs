use rand::{RngCore, SeedableRng};
use rand_chacha::ChaCha8Rng;

use crate::error::{NetworkError, Result};
use crate::net::network::Network;
use crate::topology::topology::Topology;
use crate::transfer::transfer::TransferFunction;

pub(crate) const DEFAULT_BIAS_VALUE: f64 = 1.0;
pub(crate) const DEFAULT_ETA: f64 = 0.15;
pub(crate) const DEFAULT_ALPHA: f64 = 0.5;

/// Construction-side configuration for a [`Network`].
///
/// The builder is the only way to obtain a network: it holds the knobs that
/// are fixed for the network's lifetime, validates them, and performs the
/// one-time random weight initialization. Randomness comes in through the
/// caller's generator, so two builds from the same seed produce identical
/// networks.
///
/// ```
/// use magnetite_nn::{NetworkBuilder, Topology, TransferFunction};
///
/// let topology = Topology::new(vec![2, 4, 1])?;
/// let mut net = NetworkBuilder::new(topology)
///     .transfer(TransferFunction::Tanh)
///     .eta(0.3)
///     .build_seeded(42)?;
/// let outputs = net.feed_forward(&[0.0, 1.0])?;
/// # assert_eq!(outputs.len(), 1);
/// # Ok::<(), magnetite_nn::NetworkError>(())
/// ```
#[derive(Debug, Clone)]
pub struct NetworkBuilder {
    topology: Topology,
    transfer: TransferFunction,
    bias_value: f64,
    eta: f64,
    alpha: f64,
}

impl NetworkBuilder {
    /// Starts from a validated topology with the default knobs: tanh
    /// transfer, bias constant 1.0, learning rate 0.15, momentum 0.5.
    pub fn new(topology: Topology) -> NetworkBuilder {
        NetworkBuilder {
            topology,
            transfer: TransferFunction::Tanh,
            bias_value: DEFAULT_BIAS_VALUE,
            eta: DEFAULT_ETA,
            alpha: DEFAULT_ALPHA,
        }
    }

    /// Transfer function applied by every non-input neuron.
    pub fn transfer(mut self, transfer: TransferFunction) -> Self {
        self.transfer = transfer;
        self
    }

    /// Constant output latched into every layer's bias unit.
    pub fn bias_value(mut self, bias_value: f64) -> Self {
        self.bias_value = bias_value;
        self
    }

    /// Learning rate. Must land in `[0.0, 1.0]` at build time.
    pub fn eta(mut self, eta: f64) -> Self {
        self.eta = eta;
        self
    }

    /// Momentum factor. Must land in `[0.0, 1.0]` at build time.
    pub fn alpha(mut self, alpha: f64) -> Self {
        self.alpha = alpha;
        self
    }

    /// Validates the hyperparameters and assembles the network, drawing
    /// every initial weight from `rng`.
    pub fn build(self, rng: &mut dyn RngCore) -> Result<Network> {
        if !(0.0..=1.0).contains(&self.eta) {
            return Err(NetworkError::HyperparamOutOfRange {
                name: "eta",
                value: self.eta,
            });
        }
        if !(0.0..=1.0).contains(&self.alpha) {
            return Err(NetworkError::HyperparamOutOfRange {
                name: "alpha",
                value: self.alpha,
            });
        }
        Ok(Network::new(
            self.topology,
            self.transfer,
            self.bias_value,
            self.eta,
            self.alpha,
            rng,
        ))
    }

    /// [`build`] with a generator seeded from `seed`. Reproducible runs
    /// without the caller owning an RNG.
    ///
    /// [`build`]: NetworkBuilder::build
    pub fn build_seeded(self, seed: u64) -> Result<Network> {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        self.build(&mut rng)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn topology() -> Topology {
        Topology::new(vec![2, 3, 1]).unwrap()
    }

    #[test]
    fn defaults_match_the_documented_knobs() {
        let net = NetworkBuilder::new(topology()).build_seeded(1).unwrap();
        assert_eq!(net.topology().sizes(), &[2, 3, 1]);
        assert_eq!(net.bias_value(), 1.0);
        assert_eq!(net.eta(), 0.15);
        assert_eq!(net.alpha(), 0.5);
    }

    #[test]
    fn overridden_knobs_reach_the_network() {
        let net = NetworkBuilder::new(topology())
            .bias_value(0.5)
            .eta(0.9)
            .alpha(0.0)
            .build_seeded(1)
            .unwrap();
        assert_eq!(net.bias_value(), 0.5);
        assert_eq!(net.eta(), 0.9);
        assert_eq!(net.alpha(), 0.0);
    }

    #[test]
    fn eta_outside_unit_interval_is_rejected() {
        let err = NetworkBuilder::new(topology())
            .eta(1.5)
            .build_seeded(1)
            .unwrap_err();
        assert_eq!(
            err,
            NetworkError::HyperparamOutOfRange {
                name: "eta",
                value: 1.5
            }
        );
    }

    #[test]
    fn alpha_outside_unit_interval_is_rejected() {
        let err = NetworkBuilder::new(topology())
            .alpha(-0.1)
            .build_seeded(1)
            .unwrap_err();
        assert_eq!(
            err,
            NetworkError::HyperparamOutOfRange {
                name: "alpha",
                value: -0.1
            }
        );
    }

    #[test]
    fn nan_hyperparameters_are_rejected() {
        assert!(NetworkBuilder::new(topology())
            .eta(f64::NAN)
            .build_seeded(1)
            .is_err());
    }

    #[test]
    fn equal_seeds_build_identical_networks() {
        let a = NetworkBuilder::new(topology()).build_seeded(7).unwrap();
        let b = NetworkBuilder::new(topology()).build_seeded(7).unwrap();
        assert_eq!(a.to_string(), b.to_string());
    }

    #[test]
    fn different_seeds_build_different_networks() {
        let a = NetworkBuilder::new(topology()).build_seeded(7).unwrap();
        let b = NetworkBuilder::new(topology()).build_seeded(8).unwrap();
        assert_ne!(a.to_string(), b.to_string());
    }
}
