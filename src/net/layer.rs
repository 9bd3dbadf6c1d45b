use crate::net::connection::ConnectionGrid;
use crate::net::neuron::Neuron;
use crate::transfer::transfer::TransferFunction;

/// One topology level: its neurons plus the synthetic bias unit.
///
/// The bias is a named field rather than a trailing array slot, so no index
/// arithmetic decides which unit is which. It still occupies the *last*
/// source position when the layer feeds a [`ConnectionGrid`]: grid columns
/// are ordered `neurons[0..size]`, then the bias at index `size`, which is
/// exactly the order [`units`] iterates.
///
/// The bias output is latched to the configured constant at construction and
/// never written again — the forward pass only touches the real neurons.
///
/// [`units`]: Layer::units
#[derive(Debug, Clone)]
pub struct Layer {
    neurons: Vec<Neuron>,
    bias: Neuron,
}

impl Layer {
    pub(crate) fn new(size: usize, bias_value: f64) -> Layer {
        let mut bias = Neuron::new();
        bias.set_output(bias_value);
        Layer {
            neurons: vec![Neuron::new(); size],
            bias,
        }
    }

    /// Neuron count, bias excluded.
    pub fn size(&self) -> usize {
        self.neurons.len()
    }

    /// Unit count as seen by the next layer's weighted sums: neurons plus
    /// the bias.
    pub fn unit_count(&self) -> usize {
        self.neurons.len() + 1
    }

    /// Every unit in source order: neurons first, bias last.
    pub fn units(&self) -> impl Iterator<Item = &Neuron> {
        self.neurons.iter().chain(std::iter::once(&self.bias))
    }

    /// The real neurons only.
    pub fn neurons(&self) -> impl Iterator<Item = &Neuron> {
        self.neurons.iter()
    }

    pub fn neuron(&self, index: usize) -> &Neuron {
        &self.neurons[index]
    }

    pub fn neuron_mut(&mut self, index: usize) -> &mut Neuron {
        &mut self.neurons[index]
    }

    pub(crate) fn neurons_mut(&mut self) -> impl Iterator<Item = &mut Neuron> {
        self.neurons.iter_mut()
    }

    /// The synthetic bias unit.
    pub fn bias(&self) -> &Neuron {
        &self.bias
    }

    /// Forward-propagates every neuron of this layer from `prev`.
    /// `inbound` is the grid between `prev` and this layer.
    pub(crate) fn feed_forward(
        &mut self,
        prev: &Layer,
        inbound: &ConnectionGrid,
        transfer: &TransferFunction,
    ) {
        for (dest, neuron) in self.neurons.iter_mut().enumerate() {
            neuron.feed_forward(prev, inbound.incoming(dest), transfer);
        }
    }

    /// Gradient step for the output layer: one target per neuron.
    pub(crate) fn compute_output_gradients(&mut self, targets: &[f64], transfer: &TransferFunction) {
        for (neuron, &target) in self.neurons.iter_mut().zip(targets) {
            neuron.compute_output_gradient(target, transfer);
        }
    }

    /// Gradient step for a hidden layer, reading the next layer's gradients
    /// through `outbound` (the grid between this layer and `next`). The bias
    /// unit needs no gradient: it is never an update destination.
    pub(crate) fn compute_hidden_gradients(
        &mut self,
        next: &Layer,
        outbound: &ConnectionGrid,
        transfer: &TransferFunction,
    ) {
        for (source, neuron) in self.neurons.iter_mut().enumerate() {
            neuron.compute_hidden_gradient(next, outbound.outgoing(source), transfer);
        }
    }

    /// Weight-update step: every neuron of this layer adjusts the edges
    /// feeding it from `prev` through `inbound`.
    pub(crate) fn update_incoming_weights(
        &self,
        prev: &Layer,
        inbound: &mut ConnectionGrid,
        eta: f64,
        alpha: f64,
    ) {
        for (dest, neuron) in self.neurons.iter().enumerate() {
            neuron.update_incoming_weights(prev, inbound.incoming_mut(dest), eta, alpha);
        }
    }
}
