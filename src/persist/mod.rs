pub mod codec;
pub mod store;

pub use codec::{decode, encode, BYTES_PER_PARAMETER};
pub use store::{FileStore, MemoryStore, ParameterStore, DEFAULT_PARAMS_PATH};
