use std::sync::atomic::Ordering;
use std::time::Instant;

use log::{debug, info};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;

use crate::error::Result;
use crate::network::network::Network;
use crate::train::epoch_stats::EpochStats;
use crate::train::train_config::TrainConfig;
use crate::train::trainer::check_samples;

// ---------------------------------------------------------------------------
// Public entry point
// ---------------------------------------------------------------------------

/// Trains `network` for `config.epochs` epochs of online updates and returns
/// the mean loss of the **last completed epoch**, or `None` when no epoch
/// completed (`epochs == 0`, or the stop flag was already set).
///
/// # Early termination
/// The loop breaks early if:
/// - the `progress_tx` receiver has been dropped, **or**
/// - `config.stop_flag` is set to `true`.
///
/// # Errors
/// Fails if `inputs` is empty, the sample counts differ, or a sample does not
/// fit the network's input/output widths. Updates already applied stay applied.
pub fn train_loop(
    network: &mut Network,
    inputs: &[Vec<f32>],
    targets: &[Vec<f32>],
    config: &TrainConfig,
) -> Result<Option<f32>> {
    check_samples(inputs, targets)?;

    let mut rng = match config.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };
    let mut order: Vec<usize> = (0..inputs.len()).collect();
    let mut last_loss = None;

    for epoch in 1..=config.epochs {
        if stop_requested(config) {
            info!("training stopped before epoch {epoch}");
            break;
        }

        let t_start = Instant::now();

        if config.shuffle {
            order.shuffle(&mut rng);
        }

        let mut total_loss = 0.0;
        for &idx in &order {
            total_loss += network.train_sample(&inputs[idx], &targets[idx])?;
        }
        let train_loss = total_loss / inputs.len() as f32;
        last_loss = Some(train_loss);

        let stats = EpochStats {
            epoch,
            total_epochs: config.epochs,
            train_loss,
            elapsed_ms: t_start.elapsed().as_millis() as u64,
        };
        debug!("epoch {}/{}: loss = {:.6}", stats.epoch, stats.total_epochs, stats.train_loss);

        if let Some(ref tx) = config.progress_tx {
            // If the receiver has been dropped, stop training.
            if tx.send(stats).is_err() {
                info!("progress receiver dropped after epoch {epoch}, stopping");
                break;
            }
        }
    }

    Ok(last_loss)
}

fn stop_requested(config: &TrainConfig) -> bool {
    config
        .stop_flag
        .as_ref()
        .is_some_and(|flag| flag.load(Ordering::Relaxed))
}
