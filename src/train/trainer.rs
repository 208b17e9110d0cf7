use crate::{
    error::{Error, Result},
    network::network::Network,
};

/// One online pass over `inputs` in order, one `train_step` per sample.
///
/// Returns the mean squared error of the outputs seen before each update.
pub fn train_epoch(
    network: &mut Network,
    inputs: &[Vec<f32>],
    targets: &[Vec<f32>],
) -> Result<f32> {
    check_samples(inputs, targets)?;

    let mut total_loss = 0.0;
    for (input, target) in inputs.iter().zip(targets) {
        total_loss += network.train_sample(input, target)?;
    }

    Ok(total_loss / inputs.len() as f32)
}

/// Mean squared error over a dataset without updating the network.
pub fn evaluate(network: &Network, inputs: &[Vec<f32>], targets: &[Vec<f32>]) -> Result<f32> {
    check_samples(inputs, targets)?;

    let mut total_loss = 0.0;
    for (input, target) in inputs.iter().zip(targets) {
        let output = network.feed_forward(input)?;
        if output.len() != target.len() {
            return Err(Error::vector_len("evaluate", output.len(), target.len()));
        }
        total_loss += crate::loss::SquaredError::loss(&output, target);
    }

    Ok(total_loss / inputs.len() as f32)
}

pub(crate) fn check_samples(inputs: &[Vec<f32>], targets: &[Vec<f32>]) -> Result<()> {
    if inputs.is_empty() {
        return Err(Error::Structure("no training samples given".to_string()));
    }
    if inputs.len() != targets.len() {
        return Err(Error::Structure(format!(
            "{} inputs given with {} targets",
            inputs.len(),
            targets.len()
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{rngs::StdRng, SeedableRng};

    fn or_gate() -> (Vec<Vec<f32>>, Vec<Vec<f32>>) {
        (
            vec![vec![0.0, 0.0], vec![0.0, 1.0], vec![1.0, 0.0], vec![1.0, 1.0]],
            vec![vec![0.0], vec![1.0], vec![1.0], vec![1.0]],
        )
    }

    #[test]
    fn epochs_reduce_loss() {
        let (inputs, targets) = or_gate();
        let mut net = Network::with_rng(3, &[2, 3, 1], 1.0, &mut StdRng::seed_from_u64(2)).unwrap();

        let before = evaluate(&net, &inputs, &targets).unwrap();
        for _ in 0..500 {
            train_epoch(&mut net, &inputs, &targets).unwrap();
        }
        let after = evaluate(&net, &inputs, &targets).unwrap();

        assert!(after < before * 0.5, "loss {before} -> {after}");
    }

    #[test]
    fn evaluate_does_not_mutate() {
        let (inputs, targets) = or_gate();
        let net = Network::new(3, &[2, 3, 1], 1.0).unwrap();
        let before = net.clone();
        evaluate(&net, &inputs, &targets).unwrap();
        assert_eq!(net, before);
    }

    #[test]
    fn rejects_empty_or_unpaired_samples() {
        let mut net = Network::new(3, &[2, 3, 1], 1.0).unwrap();
        assert!(matches!(train_epoch(&mut net, &[], &[]), Err(Error::Structure(_))));
        assert!(matches!(
            train_epoch(&mut net, &[vec![0.0, 1.0]], &[]),
            Err(Error::Structure(_))
        ));
    }
}
