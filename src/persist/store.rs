use std::fs;
use std::path::{Path, PathBuf};

use log::info;

use crate::error::Result;
use crate::network::network::Network;

/// Where the host application keeps its parameter file.
pub const DEFAULT_PARAMS_PATH: &str = "data/neuralNetworkData.bin";

/// Durable home for the raw parameter bytes of a network.
pub trait ParameterStore {
    fn read_bytes(&mut self) -> Result<Vec<u8>>;
    fn write_bytes(&mut self, bytes: &[u8]) -> Result<()>;
}

/// Parameters kept in a single file on disk.
#[derive(Debug, Clone)]
pub struct FileStore {
    path: PathBuf,
}

impl FileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        FileStore { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn exists(&self) -> bool {
        self.path.is_file()
    }
}

impl Default for FileStore {
    fn default() -> Self {
        FileStore::new(DEFAULT_PARAMS_PATH)
    }
}

impl ParameterStore for FileStore {
    fn read_bytes(&mut self) -> Result<Vec<u8>> {
        let bytes = fs::read(&self.path)?;
        info!("read {} bytes of parameters from {}", bytes.len(), self.path.display());
        Ok(bytes)
    }

    fn write_bytes(&mut self, bytes: &[u8]) -> Result<()> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)?;
        }
        fs::write(&self.path, bytes)?;
        info!("saved {} bytes of parameters to {}", bytes.len(), self.path.display());
        Ok(())
    }
}

/// Parameters kept in memory.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    bytes: Vec<u8>,
}

impl MemoryStore {
    pub fn new() -> Self {
        MemoryStore::default()
    }

    pub fn bytes(&self) -> &[u8] {
        &self.bytes
    }
}

impl ParameterStore for MemoryStore {
    fn read_bytes(&mut self) -> Result<Vec<u8>> {
        Ok(self.bytes.clone())
    }

    fn write_bytes(&mut self, bytes: &[u8]) -> Result<()> {
        self.bytes = bytes.to_vec();
        Ok(())
    }
}

impl Network {
    pub fn save_to<S: ParameterStore + ?Sized>(&self, store: &mut S) -> Result<()> {
        store.write_bytes(&self.save())
    }

    pub fn load_from<S: ParameterStore + ?Sized>(&mut self, store: &mut S) -> Result<()> {
        let bytes = store.read_bytes()?;
        self.load(&bytes)
    }
}
