pub mod activation;

pub use activation::{sigmoid, sigmoid_derivative_from_output};
