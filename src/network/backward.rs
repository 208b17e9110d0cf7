use crate::activation::activation::sigmoid_derivative_from_output;
use crate::error::{Error, Result};
use crate::loss::squared_error::SquaredError;
use crate::math::matrix::Matrix;
use crate::network::network::Network;

impl Network {
    /// One online gradient-descent step on a single input/target pair.
    pub fn train_step(&mut self, input: &[f32], target: &[f32]) -> Result<()> {
        self.train_sample(input, target).map(|_| ())
    }

    /// Same as [`Network::train_step`], returning the squared error of the
    /// output computed before the update.
    pub fn train_sample(&mut self, input: &[f32], target: &[f32]) -> Result<f32> {
        if target.len() != self.output_width() {
            return Err(Error::vector_len("train_step", self.output_width(), target.len()));
        }

        let acts = self.forward(input)?;
        let loss = SquaredError::loss(acts.output(), target);

        // Row vector of dC/da for the layer being processed.
        let mut error = Matrix::as_row(&SquaredError::derivative(acts.output(), target))?;

        for k in (0..self.weights.len()).rev() {
            let (Some(activation), Some(feeding)) = (acts.layer(k), acts.feeding(k)) else {
                return Err(Error::Structure(format!("no activations recorded for layer {k}")));
            };

            // g = e ⊙ a(1 - a)
            let slope: Vec<f32> = activation.iter()
                .map(|&a| sigmoid_derivative_from_output(a))
                .collect();
            let mut step = Matrix::as_row(&slope)?;
            step.hadamard(&error)?;

            // Propagate through the weights before they are overwritten below.
            if k > 0 {
                error = Matrix::multiply(&step, &self.weights[k])?;
            }

            step.scalar_multiply(self.learning_rate());

            let mut biases = Matrix::as_row(&self.biases[k])?;
            biases.subtract(&step)?;
            self.biases[k] = biases.row(0)?;

            let adjustments = Matrix::multiply(
                &Matrix::as_column(&step.row(0)?)?,
                &Matrix::as_row(feeding)?,
            )?;
            self.weights[k].subtract(&adjustments)?;
        }

        Ok(loss)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::activation::sigmoid;
    use rand::{rngs::StdRng, SeedableRng};

    fn close(a: f32, b: f32) -> bool {
        (a - b).abs() < 1e-6
    }

    #[test]
    fn single_step_matches_hand_derivation() {
        let (w0, w1, b0, b1) = (0.5_f32, -0.3_f32, 0.1_f32, 0.2_f32);
        let (x, t, lr) = (1.0_f32, 0.0_f32, 0.1_f32);

        let mut net = Network::new(3, &[1, 1, 1], lr).unwrap();
        net.set_parameters(&[w0, w1, b0, b1]).unwrap();

        let a0 = sigmoid(w0 * x + b0);
        let a1 = sigmoid(w1 * a0 + b1);
        let e1 = 2.0 * (a1 - t);
        let g1 = e1 * a1 * (1.0 - a1);
        // Uses w1 as it was before this step.
        let e0 = g1 * w1;
        let g0 = e0 * a0 * (1.0 - a0);

        let loss = net.train_sample(&[x], &[t]).unwrap();
        assert!(close(loss, (a1 - t).powi(2)));

        let p: Vec<f32> = net.parameters().collect();
        assert!(close(p[0], w0 - lr * g0 * x), "w0 = {}", p[0]);
        assert!(close(p[1], w1 - lr * g1 * a0), "w1 = {}", p[1]);
        assert!(close(p[2], b0 - lr * g0), "b0 = {}", p[2]);
        assert!(close(p[3], b1 - lr * g1), "b1 = {}", p[3]);
    }

    #[test]
    fn step_updates_every_layer_including_hidden_biases() {
        let mut net = Network::with_rng(4, &[2, 3, 3, 1], 0.5, &mut StdRng::seed_from_u64(5)).unwrap();
        let before = net.clone();
        net.train_step(&[1.0, 0.0], &[1.0]).unwrap();

        for k in 0..3 {
            assert_ne!(net.weights()[k], before.weights()[k], "weights {k} unchanged");
            assert_ne!(net.biases()[k], before.biases()[k], "biases {k} unchanged");
        }
    }

    #[test]
    fn repeated_steps_move_output_towards_target() {
        let mut net = Network::with_rng(3, &[2, 3, 1], 0.5, &mut StdRng::seed_from_u64(9)).unwrap();
        let start = net.feed_forward(&[1.0, 1.0]).unwrap()[0];
        for _ in 0..200 {
            net.train_step(&[1.0, 1.0], &[1.0]).unwrap();
        }
        let end = net.feed_forward(&[1.0, 1.0]).unwrap()[0];
        assert!(end > start);
        assert!(end > 0.8);
    }

    #[test]
    fn wrong_widths_fail_without_touching_parameters() {
        let mut net = Network::new(3, &[2, 3, 1], 0.1).unwrap();
        let before = net.clone();

        assert!(matches!(net.train_step(&[1.0], &[1.0]), Err(Error::DimensionMismatch { .. })));
        assert!(matches!(
            net.train_step(&[1.0, 0.0], &[1.0, 0.0]),
            Err(Error::DimensionMismatch { .. })
        ));
        assert_eq!(net, before);
    }
}
