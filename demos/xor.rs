use rand::{rngs::StdRng, SeedableRng};
use sigmoid_mlp::{train_epoch, MemoryStore, Network};

fn main() -> sigmoid_mlp::Result<()> {
    let mut network = Network::with_rng(3, &[2, 4, 1], 0.5, &mut StdRng::seed_from_u64(1))?;
    println!("{network}\n");

    let inputs = vec![
        vec![1.0, 0.0],
        vec![1.0, 1.0],
        vec![0.0, 1.0],
        vec![0.0, 0.0],
    ];
    let expected_outputs = vec![
        vec![1.0],
        vec![0.0],
        vec![1.0],
        vec![0.0],
    ];

    let epochs = 10000;

    for epoch in 0..epochs {
        let loss = train_epoch(&mut network, &inputs, &expected_outputs)?;
        if epoch % 1000 == 0 {
            println!("Epoch {epoch}: loss = {loss:.6}");
        }
    }

    for input in &inputs {
        println!("Input: {:?} -> Output: {:.4}", input, network.feed_forward(input)?[0]);
    }

    let mut store = MemoryStore::new();
    network.save_to(&mut store)?;
    println!("\n{} bytes of parameters", store.bytes().len());
    Ok(())
}
