use rand::{Rng, RngCore};

/// A single directed weighted edge between two adjacent layers.
///
/// `delta_weight` is the magnitude of the previous update, kept so the next
/// update can add a momentum fraction of it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Connection {
    pub weight: f64,
    pub delta_weight: f64,
}

impl Connection {
    pub fn new(weight: f64) -> Connection {
        Connection {
            weight,
            delta_weight: 0.0,
        }
    }
}

/// Flat edge table holding every connection between one layer and the next.
///
/// Rather than each neuron carrying its own outgoing-weight array, all edges
/// of a layer pair live in one row-major block keyed by
/// `(source_index, dest_index)`:
/// - sources span every unit of the source layer — its neurons in order,
///   then the bias unit last;
/// - dests span only the non-bias units of the destination layer (nothing
///   ever feeds a bias unit).
///
/// Storage is one row per destination, so `incoming(dest)` — the hot path of
/// both the forward pass and the weight update — is a contiguous slice,
/// while `outgoing(source)` (read by hidden-gradient computation) walks the
/// table with a stride.
#[derive(Debug, Clone)]
pub struct ConnectionGrid {
    sources: usize,
    dests: usize,
    edges: Vec<Connection>,
}

impl ConnectionGrid {
    /// Builds a fully-connected grid with weights drawn uniformly from
    /// [0, 1) and zeroed momentum carry-over.
    pub fn random(sources: usize, dests: usize, rng: &mut dyn RngCore) -> ConnectionGrid {
        let edges = (0..sources * dests)
            .map(|_| Connection::new(rng.gen::<f64>()))
            .collect();
        ConnectionGrid {
            sources,
            dests,
            edges,
        }
    }

    /// Unit count of the source layer, bias included.
    pub fn sources(&self) -> usize {
        self.sources
    }

    /// Non-bias unit count of the destination layer.
    pub fn dests(&self) -> usize {
        self.dests
    }

    pub fn edge(&self, source: usize, dest: usize) -> &Connection {
        &self.edges[dest * self.sources + source]
    }

    pub fn edge_mut(&mut self, source: usize, dest: usize) -> &mut Connection {
        &mut self.edges[dest * self.sources + source]
    }

    /// All edges feeding destination `dest`, ordered by source index.
    pub fn incoming(&self, dest: usize) -> &[Connection] {
        &self.edges[dest * self.sources..(dest + 1) * self.sources]
    }

    pub fn incoming_mut(&mut self, dest: usize) -> &mut [Connection] {
        &mut self.edges[dest * self.sources..(dest + 1) * self.sources]
    }

    /// All edges leaving source `source`, ordered by destination index.
    pub fn outgoing(&self, source: usize) -> impl Iterator<Item = &Connection> + '_ {
        self.edges.iter().skip(source).step_by(self.sources)
    }
}
