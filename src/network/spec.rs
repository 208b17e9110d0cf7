use rand::{rngs::StdRng, SeedableRng};
use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::network::network::Network;

/// Serializable description of a network: layer widths, learning rate and an
/// optional seed for reproducible initial weights.
///
/// A `NetworkSpec` can be stored as JSON independently of the trained
/// parameters, which live in the binary format of [`crate::persist`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NetworkSpec {
    /// Width of every layer, input first. At least three entries.
    pub layers: Vec<usize>,
    pub learning_rate: f32,
    /// When set, initial weights come from a `StdRng` seeded with this value.
    #[serde(default)]
    pub seed: Option<u64>,
}

impl NetworkSpec {
    pub fn new(layers: Vec<usize>, learning_rate: f32) -> Self {
        NetworkSpec { layers, learning_rate, seed: None }
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn build(&self) -> Result<Network> {
        let layer_count = self.layers.len();
        match self.seed {
            Some(seed) => Network::with_rng(
                layer_count,
                &self.layers,
                self.learning_rate,
                &mut StdRng::seed_from_u64(seed),
            ),
            None => Network::new(layer_count, &self.layers, self.learning_rate),
        }
    }

    /// Serializes the spec to a pretty-printed JSON file.
    pub fn save_json(&self, path: &str) -> Result<()> {
        let file = std::fs::File::create(path)?;
        let writer = std::io::BufWriter::new(file);
        serde_json::to_writer_pretty(writer, self)?;
        Ok(())
    }

    /// Deserializes a `NetworkSpec` from a JSON file.
    pub fn load_json(path: &str) -> Result<NetworkSpec> {
        let file = std::fs::File::open(path)?;
        let reader = std::io::BufReader::new(file);
        Ok(serde_json::from_reader(reader)?)
    }
}

impl From<&Network> for NetworkSpec {
    fn from(network: &Network) -> Self {
        NetworkSpec::new(network.widths().to_vec(), network.learning_rate())
    }
}
