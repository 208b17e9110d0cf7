use crate::activation::activation::activate;
use crate::error::{Error, Result};
use crate::math::matrix::Matrix;
use crate::network::network::Network;

/// Activations produced by one forward pass.
///
/// `layer(k)` is the output of weight matrix `k`; the last one is the network
/// output. The input is kept so backpropagation can reach the first matrix.
/// Only [`Network::forward`] builds one, so there is always at least one
/// hidden layer and an output layer.
#[derive(Debug, Clone, PartialEq)]
pub struct Activations {
    input: Vec<f32>,
    layers: Vec<Vec<f32>>,
}

impl Activations {
    pub fn input(&self) -> &[f32] {
        &self.input
    }

    /// Output of weight matrix `k`, or `None` past the output layer.
    pub fn layer(&self, k: usize) -> Option<&[f32]> {
        self.layers.get(k).map(Vec::as_slice)
    }

    /// Activation feeding weight matrix `k`: the input for `k == 0`.
    pub fn feeding(&self, k: usize) -> Option<&[f32]> {
        match k {
            0 => Some(self.input.as_slice()),
            _ => self.layer(k - 1),
        }
    }

    pub fn hidden(&self) -> &[Vec<f32>] {
        self.layers.split_last().map(|(_, hidden)| hidden).unwrap_or_default()
    }

    pub fn output(&self) -> &[f32] {
        self.layers.last().map(Vec::as_slice).unwrap_or_default()
    }

    pub fn into_output(mut self) -> Vec<f32> {
        self.layers.pop().unwrap_or_default()
    }
}

impl Network {
    /// Runs the input through every layer and returns all activations.
    pub fn forward(&self, input: &[f32]) -> Result<Activations> {
        if input.len() != self.input_width() {
            return Err(Error::vector_len("forward", self.input_width(), input.len()));
        }

        let mut layers: Vec<Vec<f32>> = Vec::with_capacity(self.weights.len());
        for (weights, biases) in self.weights.iter().zip(&self.biases) {
            let previous = layers.last().map_or(input, Vec::as_slice);
            let mut z = Matrix::multiply(weights, &Matrix::as_column(previous)?)?;
            z.add(&Matrix::as_column(biases)?)?;
            layers.push(activate(&z).column(0)?);
        }

        Ok(Activations {
            input: input.to_vec(),
            layers,
        })
    }

    /// Returns only the output layer of a forward pass.
    pub fn feed_forward(&self, input: &[f32]) -> Result<Vec<f32>> {
        Ok(self.forward(input)?.into_output())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::activation::sigmoid;

    #[test]
    fn output_has_output_width_and_sigmoid_range() {
        let net = Network::new(3, &[2, 3, 1], 0.1).unwrap();
        let out = net.feed_forward(&[0.0, 0.0]).unwrap();
        assert_eq!(out.len(), 1);
        assert!(out[0] > 0.0 && out[0] < 1.0);

        let net = Network::new(4, &[3, 6, 4, 5], 0.1).unwrap();
        let out = net.feed_forward(&[0.2, -1.5, 3.0]).unwrap();
        assert_eq!(out.len(), 5);
        assert!(out.iter().all(|&v| v > 0.0 && v < 1.0));
    }

    #[test]
    fn every_layer_is_kept() {
        let net = Network::new(4, &[2, 3, 4, 1], 0.1).unwrap();
        let acts = net.forward(&[1.0, 0.5]).unwrap();
        assert_eq!(acts.input(), &[1.0, 0.5]);
        assert_eq!(acts.hidden().len(), 2);
        assert_eq!(acts.layer(0).map(<[f32]>::len), Some(3));
        assert_eq!(acts.layer(1).map(<[f32]>::len), Some(4));
        assert_eq!(acts.output().len(), 1);
        assert_eq!(acts.layer(2), Some(acts.output()));
        assert_eq!(acts.feeding(0), Some(acts.input()));
        assert_eq!(acts.feeding(2), acts.layer(1));
    }

    #[test]
    fn indices_past_the_output_layer_are_none() {
        let net = Network::new(3, &[2, 3, 1], 0.1).unwrap();
        let acts = net.forward(&[1.0, 0.5]).unwrap();
        assert!(acts.layer(2).is_none());
        assert!(acts.layer(5).is_none());
        assert!(acts.feeding(2).is_some());
        assert!(acts.feeding(3).is_none());
    }

    #[test]
    fn matches_hand_computed_pass() {
        let mut net = Network::new(3, &[2, 2, 1], 0.1).unwrap();
        // w0 = [[0.1, 0.2], [-0.3, 0.4]], w1 = [[0.5, -0.6]], b0 = [0.01, 0.02], b1 = [0.03]
        net.set_parameters(&[0.1, 0.2, -0.3, 0.4, 0.5, -0.6, 0.01, 0.02, 0.03]).unwrap();

        let x = [1.0_f32, 2.0];
        let h0 = sigmoid(0.1 * x[0] + 0.2 * x[1] + 0.01);
        let h1 = sigmoid(-0.3 * x[0] + 0.4 * x[1] + 0.02);
        let y = sigmoid(0.5 * h0 - 0.6 * h1 + 0.03);

        let acts = net.forward(&x).unwrap();
        let hidden = acts.layer(0).unwrap();
        assert!((hidden[0] - h0).abs() < 1e-6);
        assert!((hidden[1] - h1).abs() < 1e-6);
        assert!((acts.output()[0] - y).abs() < 1e-6);
    }

    #[test]
    fn is_deterministic_for_fixed_parameters() {
        let net = Network::new(3, &[3, 4, 2], 0.1).unwrap();
        let input = [0.3, -0.7, 1.1];
        assert_eq!(net.feed_forward(&input).unwrap(), net.feed_forward(&input).unwrap());
    }

    #[test]
    fn rejects_wrong_input_width() {
        let net = Network::new(3, &[2, 3, 1], 0.1).unwrap();
        assert!(matches!(
            net.feed_forward(&[1.0, 2.0, 3.0]),
            Err(Error::DimensionMismatch { expected: (2, 1), actual: (3, 1), .. })
        ));
    }
}
