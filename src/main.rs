use clap::Parser;
use tracing_subscriber::EnvFilter;

use wall::batch;
use wall::config::{Cli, Config};
use wall::WallStore;

fn main() -> anyhow::Result<()> {
    // Parse CLI args and load config
    let cli = Cli::parse();
    let config = Config::load(&cli)?;

    // Initialize logging on stderr so stdout carries only the wall
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(&config.log.level)),
        )
        .with_writer(std::io::stderr)
        .init();

    let mut store = WallStore::new();

    if let Some(ref path) = config.input.posts {
        let drafts = batch::load_posts(path)?;
        let added = batch::add_all(&mut store, drafts);
        tracing::info!("Added {} posts", added.len());
    }

    if let Some(ref path) = config.input.updates {
        let updates = batch::load_posts(path)?;
        let report = batch::apply_updates(&mut store, updates);
        tracing::info!(
            "Applied {} updates, {} missed",
            report.applied,
            report.missed.len()
        );
    }

    let posts = store.posts();
    let output = if config.output.pretty {
        serde_json::to_string_pretty(&posts)?
    } else {
        serde_json::to_string(&posts)?
    };
    println!("{}", output);

    Ok(())
}
