use std::fmt;

use rand::RngCore;

use crate::error::{NetworkError, Result};
use crate::net::builder::NetworkBuilder;
use crate::net::connection::ConnectionGrid;
use crate::net::layer::Layer;
use crate::net::neuron::Neuron;
use crate::net::spec::NetworkSpec;
use crate::topology::topology::Topology;
use crate::transfer::transfer::TransferFunction;

/// Number of past samples the running error average smooths over.
const ERROR_SMOOTHING_FACTOR: f64 = 100.0;

/// A fully-connected feed-forward network trained by back-propagation with
/// momentum.
///
/// All structure — layers, bias units, the edge grids between adjacent
/// layers — is created once at construction; every later call only mutates
/// scalar fields in place. `feed_forward` and `back_prop` take `&mut self`,
/// so the single-writer requirement is enforced by the borrow checker rather
/// than by convention.
#[derive(Debug)]
pub struct Network {
    topology: Topology,
    layers: Vec<Layer>,
    /// `grids[i]` holds every edge from layer `i` into layer `i + 1`.
    grids: Vec<ConnectionGrid>,
    transfer: TransferFunction,
    bias_value: f64,
    eta: f64,
    alpha: f64,
    recent_average_error: f64,
}

impl Network {
    /// Assembles layers and randomly-initialized grids. Constructed only
    /// through [`NetworkBuilder`], which validates the hyperparameters.
    ///
    /// [`NetworkBuilder`]: crate::net::builder::NetworkBuilder
    pub(crate) fn new(
        topology: Topology,
        transfer: TransferFunction,
        bias_value: f64,
        eta: f64,
        alpha: f64,
        rng: &mut dyn RngCore,
    ) -> Network {
        let layers: Vec<Layer> = topology
            .sizes()
            .iter()
            .map(|&size| Layer::new(size, bias_value))
            .collect();
        let grids = (0..layers.len() - 1)
            .map(|i| ConnectionGrid::random(layers[i].unit_count(), layers[i + 1].size(), rng))
            .collect();
        Network {
            topology,
            layers,
            grids,
            transfer,
            bias_value,
            eta,
            alpha,
            recent_average_error: 0.0,
        }
    }

    /// Builds a fresh, randomly-initialized network from a saved
    /// [`NetworkSpec`], validating its layer sizes and hyperparameters.
    pub fn from_spec(spec: &NetworkSpec, rng: &mut dyn RngCore) -> Result<Network> {
        let topology = Topology::new(spec.layers.clone())?;
        NetworkBuilder::new(topology)
            .transfer(spec.transfer.function())
            .bias_value(spec.bias_value)
            .eta(spec.eta)
            .alpha(spec.alpha)
            .build(rng)
    }

    /// Runs one forward pass: latches `inputs` into layer 0 and propagates
    /// layer by layer, each layer fully computed before the next starts.
    /// Returns a copy of the output layer's values.
    ///
    /// Fails without touching any state if `inputs` does not match the
    /// topology's input width.
    pub fn feed_forward(&mut self, inputs: &[f64]) -> Result<Vec<f64>> {
        let expected = self.topology.inputs();
        if inputs.len() != expected {
            return Err(NetworkError::InputSizeMismatch {
                expected,
                got: inputs.len(),
            });
        }

        // Latch the inputs; the input layer's bias keeps its constant.
        for (neuron, &value) in self.layers[0].neurons_mut().zip(inputs) {
            neuron.set_output(value);
        }

        for i in 1..self.layers.len() {
            let (done, rest) = self.layers.split_at_mut(i);
            rest[0].feed_forward(&done[i - 1], &self.grids[i - 1], &self.transfer);
        }

        Ok(self.results())
    }

    /// Runs one backward pass against `targets`: error tracking, then all
    /// gradients, then all weight updates — in that order. Gradient
    /// computation reads the pre-update weights, so no weight moves until
    /// every gradient is in place.
    ///
    /// Fails without touching any state if `targets` does not match the
    /// topology's output width.
    pub fn back_prop(&mut self, targets: &[f64]) -> Result<()> {
        let expected = self.topology.outputs();
        if targets.len() != expected {
            return Err(NetworkError::TargetSizeMismatch {
                expected,
                got: targets.len(),
            });
        }

        let last = self.layers.len() - 1;

        // Root-mean-square error over the output neurons.
        let error = {
            let output_layer = &self.layers[last];
            let sum_sq: f64 = output_layer
                .neurons()
                .zip(targets)
                .map(|(neuron, &target)| {
                    let delta = target - neuron.output();
                    delta * delta
                })
                .sum();
            (sum_sq / output_layer.size() as f64).sqrt()
        };

        self.recent_average_error = (self.recent_average_error * ERROR_SMOOTHING_FACTOR + error)
            / (ERROR_SMOOTHING_FACTOR + 1.0);

        // Output-layer gradients.
        self.layers[last].compute_output_gradients(targets, &self.transfer);

        // Hidden-layer gradients, from the last hidden layer down to layer 1.
        for i in (1..last).rev() {
            let (head, tail) = self.layers.split_at_mut(i + 1);
            head[i].compute_hidden_gradients(&tail[0], &self.grids[i], &self.transfer);
        }

        // Weight updates, from the output layer down to layer 1.
        for i in (1..=last).rev() {
            self.layers[i].update_incoming_weights(
                &self.layers[i - 1],
                &mut self.grids[i - 1],
                self.eta,
                self.alpha,
            );
        }

        Ok(())
    }

    /// Copy of the most recent forward pass's outputs. Idempotent.
    pub fn results(&self) -> Vec<f64> {
        self.layers[self.layers.len() - 1]
            .neurons()
            .map(Neuron::output)
            .collect()
    }

    /// Exponentially smoothed root-mean-square output error, updated by
    /// every `back_prop` call.
    pub fn recent_average_error(&self) -> f64 {
        self.recent_average_error
    }

    pub fn topology(&self) -> &Topology {
        &self.topology
    }

    /// Read-only view of the layers, input layer first. Lets callers inspect
    /// unit outputs and gradients after a pass; all mutation still goes
    /// through `feed_forward`/`back_prop`.
    pub fn layers(&self) -> &[Layer] {
        &self.layers
    }

    pub fn eta(&self) -> f64 {
        self.eta
    }

    pub fn alpha(&self) -> f64 {
        self.alpha
    }

    pub fn bias_value(&self) -> f64 {
        self.bias_value
    }
}

/// Diagnostics dump: the topology plus every connection's
/// `(weight, delta_weight)` pair, one row per source unit. Not a parseable
/// format.
impl fmt::Display for Network {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Topology: {:?}", self.topology.sizes())?;
        writeln!(f, "Current weights (weight, delta):")?;
        for (index, grid) in self.grids.iter().enumerate() {
            writeln!(f, "Layer {} -> {} --------------------------", index, index + 1)?;
            for source in 0..grid.sources() {
                if source < self.layers[index].size() {
                    write!(f, "  n{source}:")?;
                } else {
                    write!(f, "  bias:")?;
                }
                for edge in grid.outgoing(source) {
                    write!(f, " ({:.6}, {:.6})", edge.weight, edge.delta_weight)?;
                }
                writeln!(f)?;
            }
        }
        Ok(())
    }
}
