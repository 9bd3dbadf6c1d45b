use crate::net::connection::Connection;
use crate::net::layer::Layer;
use crate::transfer::transfer::TransferFunction;

/// One unit of a layer: a stored output value plus the gradient computed for
/// it during the backward pass.
///
/// A neuron is identified purely by its position (layer index, index in
/// layer); its edges live in the owning network's [`ConnectionGrid`]s and
/// are handed to the methods below as rows or strided views.
///
/// [`ConnectionGrid`]: crate::net::connection::ConnectionGrid
#[derive(Debug, Clone, Copy)]
pub struct Neuron {
    output: f64,
    gradient: f64,
}

impl Neuron {
    pub fn new() -> Neuron {
        Neuron {
            output: 0.0,
            gradient: 0.0,
        }
    }

    pub fn output(&self) -> f64 {
        self.output
    }

    pub fn set_output(&mut self, value: f64) {
        self.output = value;
    }

    /// Gradient of the most recent backward pass. Only meaningful between a
    /// `back_prop` gradient phase and the weight update it feeds.
    pub fn gradient(&self) -> f64 {
        self.gradient
    }

    /// Computes this unit's output from the previous layer: the weighted sum
    /// over every source unit (bias included), pushed through the transfer
    /// function. `incoming` is this unit's row of the grid, ordered like
    /// `prev.units()`.
    pub fn feed_forward(
        &mut self,
        prev: &Layer,
        incoming: &[Connection],
        transfer: &TransferFunction,
    ) {
        let sum: f64 = prev
            .units()
            .zip(incoming)
            .map(|(source, edge)| source.output() * edge.weight)
            .sum();
        self.output = transfer.value(sum);
    }

    /// Output-layer gradient: `(target - output) · f'(output)`.
    pub fn compute_output_gradient(&mut self, target: f64, transfer: &TransferFunction) {
        let delta = target - self.output;
        self.gradient = delta * transfer.derivative(self.output);
    }

    /// Hidden-layer gradient: the sum of this unit's contributions to the
    /// errors of the units it feeds, `Σ weight · next_gradient` over the
    /// next layer's non-bias units, times `f'(output)`. Must run against the
    /// next layer's pre-update weights, so all gradients are computed before
    /// any weight moves.
    pub fn compute_hidden_gradient<'a>(
        &mut self,
        next: &Layer,
        outgoing: impl Iterator<Item = &'a Connection>,
        transfer: &TransferFunction,
    ) {
        let sum_dow: f64 = next
            .neurons()
            .zip(outgoing)
            .map(|(dest, edge)| edge.weight * dest.gradient())
            .sum();
        self.gradient = sum_dow * transfer.derivative(self.output);
    }

    /// Applies the momentum update to every edge feeding this unit:
    /// `delta = eta · source_output · gradient + alpha · previous_delta`,
    /// then `weight += delta` and the delta is stored for the next pass.
    pub fn update_incoming_weights(
        &self,
        prev: &Layer,
        incoming: &mut [Connection],
        eta: f64,
        alpha: f64,
    ) {
        for (source, edge) in prev.units().zip(incoming) {
            let delta = eta * source.output() * self.gradient + alpha * edge.delta_weight;
            edge.weight += delta;
            edge.delta_weight = delta;
        }
    }
}

impl Default for Neuron {
    fn default() -> Self {
        Neuron::new()
    }
}
