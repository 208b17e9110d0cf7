use std::fmt;

use rand::Rng;

use crate::error::{Error, Result};
use crate::math::matrix::Matrix;
use crate::network::topology::Topology;

/// Fully-connected sigmoid network with at least one hidden layer.
///
/// Weight matrix `i` maps layer `i` to layer `i + 1` and has shape
/// `widths[i + 1] x widths[i]`; bias vector `i` has `widths[i + 1]` entries.
#[derive(Debug, Clone, PartialEq)]
pub struct Network {
    widths: Vec<usize>,
    learning_rate: f32,
    pub(crate) weights: Vec<Matrix>,
    pub(crate) biases: Vec<Vec<f32>>,
    weight_count: usize,
    bias_count: usize,
}

impl Network {
    /// Builds a network with weights drawn from the thread-local RNG.
    pub fn new(layer_count: usize, widths: &[usize], learning_rate: f32) -> Result<Network> {
        Network::with_rng(layer_count, widths, learning_rate, &mut rand::thread_rng())
    }

    /// Builds a network drawing initial weights from `rng`.
    ///
    /// Weight matrix `i` is filled uniformly from `[-1/widths[i], 1/widths[i]]`;
    /// biases start at zero.
    pub fn with_rng<R: Rng + ?Sized>(
        layer_count: usize,
        widths: &[usize],
        learning_rate: f32,
        rng: &mut R,
    ) -> Result<Network> {
        if widths.len() != layer_count {
            return Err(Error::Structure(format!(
                "{} layer widths given for {layer_count} layers",
                widths.len()
            )));
        }
        if layer_count < 3 {
            return Err(Error::Structure(format!(
                "a network needs at least 3 layers (input, hidden, output), got {layer_count}"
            )));
        }
        if let Some(layer) = widths.iter().position(|&w| w == 0) {
            return Err(Error::Structure(format!("layer {layer} has zero width")));
        }

        let mut weights = Vec::with_capacity(layer_count - 1);
        let mut biases = Vec::with_capacity(layer_count - 1);
        for pair in widths.windows(2) {
            let (fan_in, fan_out) = (pair[0], pair[1]);
            let mut w = Matrix::zeros(fan_out, fan_in)?;
            w.randomize(1.0 / fan_in as f32, rng)?;
            weights.push(w);
            biases.push(vec![0.0; fan_out]);
        }

        let weight_count = weights.iter().map(|w| w.rows() * w.cols()).sum();
        let bias_count = biases.iter().map(Vec::len).sum();

        Ok(Network {
            widths: widths.to_vec(),
            learning_rate,
            weights,
            biases,
            weight_count,
            bias_count,
        })
    }

    pub fn layer_count(&self) -> usize {
        self.widths.len()
    }

    pub fn widths(&self) -> &[usize] {
        &self.widths
    }

    pub fn input_width(&self) -> usize {
        self.widths[0]
    }

    pub fn output_width(&self) -> usize {
        self.widths[self.widths.len() - 1]
    }

    pub fn learning_rate(&self) -> f32 {
        self.learning_rate
    }

    pub fn set_learning_rate(&mut self, learning_rate: f32) {
        self.learning_rate = learning_rate;
    }

    pub fn weight_count(&self) -> usize {
        self.weight_count
    }

    pub fn bias_count(&self) -> usize {
        self.bias_count
    }

    /// Total trainable values: `weight_count() + bias_count()`.
    pub fn parameter_count(&self) -> usize {
        self.weight_count + self.bias_count
    }

    pub fn weights(&self) -> &[Matrix] {
        &self.weights
    }

    pub fn biases(&self) -> &[Vec<f32>] {
        &self.biases
    }

    pub fn topology(&self) -> Topology {
        Topology {
            layer_count: self.layer_count(),
            widths: self.widths.clone(),
            weight_count: self.weight_count,
            bias_count: self.bias_count,
        }
    }

    /// Every parameter in persistence order: all weight matrices row-major in
    /// layer order, then all bias vectors in layer order.
    pub fn parameters(&self) -> impl Iterator<Item = f32> + '_ {
        self.weights
            .iter()
            .flat_map(|w| w.values())
            .chain(self.biases.iter().flat_map(|b| b.iter().copied()))
    }

    /// Overwrites every parameter from `values`, which must be laid out as
    /// [`Network::parameters`] yields them. The topology is left unchanged.
    pub fn set_parameters(&mut self, values: &[f32]) -> Result<()> {
        if values.len() != self.parameter_count() {
            return Err(Error::Structure(format!(
                "{} parameter values given, network has {}",
                values.len(),
                self.parameter_count()
            )));
        }

        let slots = self
            .weights
            .iter_mut()
            .flat_map(|w| w.values_mut())
            .chain(self.biases.iter_mut().flat_map(|b| b.iter_mut()));
        for (slot, &value) in slots.zip(values) {
            *slot = value;
        }
        Ok(())
    }
}

impl fmt::Display for Network {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.topology())
    }
}
