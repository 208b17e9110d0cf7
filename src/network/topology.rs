use std::fmt;

use serde::{Deserialize, Serialize};

/// Human-readable description of a network's shape and parameter totals.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Topology {
    pub layer_count: usize,
    /// Width of every layer, input first.
    pub widths: Vec<usize>,
    pub weight_count: usize,
    pub bias_count: usize,
}

impl Topology {
    pub fn hidden_widths(&self) -> &[usize] {
        match self.widths.len() {
            0..=2 => &[],
            n => &self.widths[1..n - 1],
        }
    }
}

impl fmt::Display for Topology {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Total layers: {}", self.layer_count)?;
        writeln!(f, "Inputs: {}", self.widths.first().copied().unwrap_or(0))?;
        for (i, width) in self.hidden_widths().iter().enumerate() {
            writeln!(f, "Hidden Layer {}: {}", i + 1, width)?;
        }
        writeln!(f, "Total Weights: {}", self.weight_count)?;
        writeln!(f, "Total Biases: {}", self.bias_count)?;
        write!(f, "Outputs: {}", self.widths.last().copied().unwrap_or(0))
    }
}
