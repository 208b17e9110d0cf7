pub struct SquaredError;

impl SquaredError {
    /// Summed squared error: Σ (predicted - expected)²
    pub fn loss(predicted: &[f32], expected: &[f32]) -> f32 {
        predicted.iter().zip(expected.iter())
            .map(|(a, b)| (a - b).powi(2))
            .sum()
    }

    /// Per-output gradient of the summed squared error: 2 (predicted - expected)
    pub fn derivative(predicted: &[f32], expected: &[f32]) -> Vec<f32> {
        predicted.iter().zip(expected.iter())
            .map(|(a, b)| 2.0 * (a - b))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn loss_sums_squares() {
        assert_eq!(SquaredError::loss(&[0.5, 1.0], &[0.0, 0.0]), 1.25);
        assert_eq!(SquaredError::loss(&[0.3], &[0.3]), 0.0);
    }

    #[test]
    fn derivative_doubles_the_difference() {
        assert_eq!(SquaredError::derivative(&[0.75, 0.25], &[1.0, 0.0]), vec![-0.5, 0.5]);
    }
}
