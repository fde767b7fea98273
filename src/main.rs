mod config;
mod console;
mod game;
mod models;
mod utils;

use std::io;

use anyhow::Result;
use crate::config::Config;
use crate::console::Session;
use crate::game::WordPlacer;
use rand::{rngs::StdRng, SeedableRng};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn main() -> Result<()> {
    // Initialize tracing on stderr so it stays out of the puzzle output
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "word_search_generator=warn".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();

    let config = Config::from_env()?;
    tracing::info!(
        "Configuration loaded (policy {:?}, max size {})",
        config.search_policy,
        config.max_grid_size
    );

    let mut rng = match config.seed {
        Some(seed) => {
            tracing::info!("Using fixed seed {}", seed);
            StdRng::seed_from_u64(seed)
        }
        None => StdRng::from_os_rng(),
    };

    let stdin = io::stdin();
    let mut session = Session::new(
        stdin.lock(),
        io::stdout(),
        WordPlacer::new(config.search_policy),
        config.max_grid_size,
    );

    if session.run(&mut rng)?.is_some() {
        tracing::debug!("{} word(s) placed", session.placed_words().len());
    }

    Ok(())
}
