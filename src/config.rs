use std::env;
use std::path::PathBuf;

use anyhow::Result;

use crate::taxonomy::wordnet;

/// Central configuration loaded from environment variables.
/// The .env file is loaded automatically at startup via dotenvy.
pub struct Config {
    /// Directory containing the WordNet database files (index.noun,
    /// data.noun, ... for all four categories).
    pub wordnet_dir: PathBuf,
}

impl Config {
    /// Load configuration from environment variables. The WordNet directory
    /// defaults to the platform data dir and can be overridden with
    /// SEMBLANCE_WORDNET_DIR.
    pub fn load() -> Result<Self> {
        let wordnet_dir = env::var("SEMBLANCE_WORDNET_DIR")
            .map(PathBuf::from)
            .unwrap_or_else(|_| wordnet::default_wordnet_dir());

        Ok(Self { wordnet_dir })
    }

    /// Check that the WordNet database files are where we expect them.
    /// Call this before any operation that needs the taxonomy.
    pub fn require_wordnet(&self) -> Result<()> {
        if !wordnet::wordnet_files_present(&self.wordnet_dir) {
            anyhow::bail!(
                "WordNet database files not found in {}\n\
                 Download the WordNet 3.x database (the dict/ directory) and\n\
                 point SEMBLANCE_WORDNET_DIR at it, or copy it to the path above.",
                self.wordnet_dir.display()
            );
        }
        Ok(())
    }
}
