use anyhow::{Context, Result};
use serde::Deserialize;

use crate::game::SearchPolicy;

/// Prefix shared by every environment variable the generator reads
const ENV_PREFIX: &str = "WORDSEARCH";

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    /// Fixed RNG seed for reproducible puzzles
    pub seed: Option<u64>,
    pub search_policy: SearchPolicy,
    pub max_grid_size: usize,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok();

        Self::load(config::Environment::with_prefix(ENV_PREFIX).try_parsing(true))
    }

    fn load<S>(source: S) -> Result<Self>
    where
        S: config::Source + Send + Sync + 'static,
    {
        let config: Config = config::Config::builder()
            .set_default("search_policy", "border")?
            .set_default("max_grid_size", 40)?
            .add_source(source)
            .build()
            .context("Failed to read configuration")?
            .try_deserialize()
            .context("Invalid WORDSEARCH_* configuration value")?;

        if config.max_grid_size == 0 {
            anyhow::bail!("WORDSEARCH_MAX_GRID_SIZE must be at least 1");
        }

        Ok(config)
    }
}
