//! Initialize journal use case

use crate::error::Result;
use crate::infrastructure::{Config, FileStorage};
use std::fs;
use std::path::Path;

/// Initialize a new journal at the specified path.
pub fn init(path: &Path) -> Result<()> {
    // Create the directory if it doesn't exist
    if !path.exists() {
        fs::create_dir_all(path)?;
    }

    let storage = FileStorage::new(path.to_path_buf());

    // Create .jotter directory
    storage.initialize()?;

    // Write default config
    let config = Config::new();
    config.save_to_dir(&storage.root)?;

    println!("Initialized jotter journal at {}", path.display());

    Ok(())
}
