pub mod connection;
pub mod neuron;
pub mod layer;
pub mod network;
pub mod builder;
pub mod spec;

pub use connection::{Connection, ConnectionGrid};
pub use network::Network;
pub use builder::NetworkBuilder;
pub use spec::NetworkSpec;
