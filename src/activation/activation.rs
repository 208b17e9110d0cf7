use crate::math::matrix::Matrix;

/// Logistic sigmoid `1 / (1 + e^-x)`.
pub fn sigmoid(x: f32) -> f32 {
    1.0 / (1.0 + (-x).exp())
}

/// Sigmoid derivative expressed through an already-computed output `a = σ(x)`.
pub fn sigmoid_derivative_from_output(a: f32) -> f32 {
    a * (1.0 - a)
}

/// Applies the sigmoid to every cell.
pub fn activate(pre: &Matrix) -> Matrix {
    pre.map(sigmoid)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sigmoid_is_centered_at_one_half() {
        assert_eq!(sigmoid(0.0), 0.5);
        assert!((sigmoid(2.0) + sigmoid(-2.0) - 1.0).abs() < 1e-6);
    }

    #[test]
    fn sigmoid_stays_in_open_unit_interval_for_moderate_inputs() {
        for x in [-10.0, -1.0, 0.3, 5.0, 10.0] {
            let y = sigmoid(x);
            assert!(y > 0.0 && y < 1.0, "sigmoid({x}) = {y}");
        }
    }

    #[test]
    fn derivative_from_output_matches_finite_difference() {
        let x = 0.7_f32;
        let h = 1e-3_f32;
        let numeric = (sigmoid(x + h) - sigmoid(x - h)) / (2.0 * h);
        let analytic = sigmoid_derivative_from_output(sigmoid(x));
        assert!((numeric - analytic).abs() < 1e-3);
    }
}
