pub mod error;
pub mod math;
pub mod activation;
pub mod loss;
pub mod network;
pub mod persist;
pub mod train;

// Convenience re-exports
pub use error::{Error, Result};
pub use math::matrix::Matrix;
pub use network::{Activations, Network, NetworkSpec, Topology};
pub use persist::{FileStore, MemoryStore, ParameterStore};
pub use train::{train_epoch, train_loop, EpochStats, TrainConfig};
