use clap::Parser;
use serde::Deserialize;
use std::path::PathBuf;

use crate::error::AppResult;

#[derive(Parser, Debug, Default)]
#[command(name = "wall", about = "Build a wall from JSON posts and print it")]
pub struct Cli {
    /// Path to config file
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// JSON array of posts to add
    #[arg(long)]
    pub posts: Option<PathBuf>,

    /// JSON array of full posts to apply as updates
    #[arg(long)]
    pub updates: Option<PathBuf>,

    /// Log filter used when RUST_LOG is unset
    #[arg(long)]
    pub log_level: Option<String>,

    /// Pretty-print the resulting wall
    #[arg(long)]
    pub pretty: bool,
}

#[derive(Deserialize, Debug, Clone, Default)]
#[serde(default)]
pub struct Config {
    pub log: LogConfig,
    pub output: OutputConfig,
    pub input: InputConfig,
}

#[derive(Deserialize, Debug, Clone)]
#[serde(default)]
pub struct LogConfig {
    pub level: String,
}

#[derive(Deserialize, Debug, Clone, Default)]
#[serde(default)]
pub struct OutputConfig {
    pub pretty: bool,
}

#[derive(Deserialize, Debug, Clone, Default)]
#[serde(default)]
pub struct InputConfig {
    pub posts: Option<PathBuf>,
    pub updates: Option<PathBuf>,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
        }
    }
}

impl Config {
    pub fn load(cli: &Cli) -> AppResult<Self> {
        let config_path = cli.config.clone().or_else(Self::default_path);

        let mut config = match config_path {
            Some(path) if path.exists() => {
                let content = std::fs::read_to_string(&path)?;
                toml::from_str(&content)?
            }
            _ => Config::default(),
        };

        // CLI overrides
        if let Some(ref level) = cli.log_level {
            config.log.level = level.clone();
        }
        if cli.pretty {
            config.output.pretty = true;
        }
        if let Some(ref posts) = cli.posts {
            config.input.posts = Some(posts.clone());
        }
        if let Some(ref updates) = cli.updates {
            config.input.updates = Some(updates.clone());
        }

        Ok(config)
    }

    /// `~/.wall/config.toml`, when a home directory is known
    pub fn default_path() -> Option<PathBuf> {
        dirs::home_dir().map(|home| home.join(".wall").join("config.toml"))
    }
}
