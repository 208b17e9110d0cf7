//! Flat binary parameter format.
//!
//! Every weight matrix in layer order, row by row, followed by every bias
//! vector in layer order. Each value is a 4-byte big-endian IEEE-754 single.

use crate::error::{Error, Result};
use crate::network::network::Network;

pub const BYTES_PER_PARAMETER: usize = 4;

/// Encodes a sequence of values as big-endian `f32` bytes.
pub fn encode<I>(values: I) -> Vec<u8>
where
    I: IntoIterator<Item = f32>,
{
    values.into_iter().flat_map(f32::to_be_bytes).collect()
}

/// Decodes big-endian `f32` bytes. Fails unless the length is a multiple of four.
pub fn decode(bytes: &[u8]) -> Result<Vec<f32>> {
    if bytes.len() % BYTES_PER_PARAMETER != 0 {
        return Err(Error::Structure(format!(
            "parameter data is {} bytes, not a multiple of {BYTES_PER_PARAMETER}",
            bytes.len()
        )));
    }
    Ok(bytes
        .chunks_exact(BYTES_PER_PARAMETER)
        .map(|chunk| f32::from_be_bytes([chunk[0], chunk[1], chunk[2], chunk[3]]))
        .collect())
}

impl Network {
    /// Serializes every weight and bias; `4 * parameter_count()` bytes.
    pub fn save(&self) -> Vec<u8> {
        encode(self.parameters())
    }

    /// Overwrites every weight and bias from bytes produced by [`Network::save`]
    /// on a network of the same topology.
    pub fn load(&mut self, bytes: &[u8]) -> Result<()> {
        let expected = BYTES_PER_PARAMETER * self.parameter_count();
        if bytes.len() != expected {
            return Err(Error::Structure(format!(
                "parameter data is {} bytes, network needs {expected}",
                bytes.len()
            )));
        }
        self.set_parameters(&decode(bytes)?)
    }
}
