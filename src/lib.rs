pub mod error;
pub mod topology;
pub mod transfer;
pub mod net;
pub mod data;
pub mod train;

// Convenience re-exports
pub use error::{NetworkError, Result};
pub use topology::topology::Topology;
pub use transfer::transfer::TransferFunction;
pub use transfer::transfer_type::TransferType;
pub use net::network::Network;
pub use net::builder::NetworkBuilder;
pub use net::spec::NetworkSpec;
pub use net::connection::{Connection, ConnectionGrid};
pub use net::layer::Layer;
pub use net::neuron::Neuron;
pub use data::source::{TrainingData, TrainingSample};
pub use data::xor::XorTable;
pub use train::pass_stats::PassStats;
pub use train::train_config::TrainConfig;
pub use train::loop_fn::train_loop;
