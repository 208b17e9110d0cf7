pub mod backward;
pub mod forward;
pub mod network;
pub mod spec;
pub mod topology;

pub use forward::Activations;
pub use network::Network;
pub use spec::NetworkSpec;
pub use topology::Topology;
