use clap::Parser;
use log::info;

use sigmoid_mlp::persist::DEFAULT_PARAMS_PATH;
use sigmoid_mlp::{train_loop, FileStore, NetworkSpec, TrainConfig};

/// Trains a sigmoid network on the XOR truth table and stores its parameters.
#[derive(Parser, Debug)]
#[command(version, about)]
struct Args {
    /// JSON network spec (`layers`, `learning_rate`, optional `seed`).
    #[arg(long)]
    spec: Option<String>,

    /// Binary parameter file.
    #[arg(long, default_value = DEFAULT_PARAMS_PATH)]
    params: String,

    /// Start from the parameters already stored in `--params`.
    #[arg(long)]
    load: bool,

    #[arg(long, default_value_t = 5000)]
    epochs: usize,

    /// Seed for per-epoch shuffling.
    #[arg(long)]
    seed: Option<u64>,
}

fn main() -> sigmoid_mlp::Result<()> {
    env_logger::init();
    let args = Args::parse();

    let spec = match &args.spec {
        Some(path) => NetworkSpec::load_json(path)?,
        None => NetworkSpec::new(vec![2, 4, 1], 0.5),
    };
    let mut network = spec.build()?;
    info!("network ready:\n{network}");

    let mut store = FileStore::new(&args.params);
    if args.load {
        network.load_from(&mut store)?;
    }

    let inputs = vec![
        vec![0.0, 0.0],
        vec![0.0, 1.0],
        vec![1.0, 0.0],
        vec![1.0, 1.0],
    ];
    let targets = vec![vec![0.0], vec![1.0], vec![1.0], vec![0.0]];

    let config = TrainConfig::new(args.epochs).shuffled(args.seed);
    match train_loop(&mut network, &inputs, &targets, &config)? {
        Some(loss) => info!("trained {} epochs, final loss = {loss:.6}", args.epochs),
        None => info!("no training epoch completed"),
    }

    for input in &inputs {
        let output = network.feed_forward(input)?;
        info!("{input:?} -> {:.4}", output[0]);
    }

    network.save_to(&mut store)
}
