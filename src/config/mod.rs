//! Configuration loading and merging
//!
//! Handles loading from config files, environment variables, and CLI arguments
//! with proper precedence (CLI > Env > File > Defaults).

pub mod env;
pub mod loader;
pub mod merge;

use anyhow::Result;
use std::path::Path;

use crate::domain::Config;

pub use env::apply_env_overrides;
pub use loader::load_config;
pub use merge::{merge_cli_with_config, CliOverrides};

/// Load the file config, then layer environment and CLI overrides.
pub fn resolve_config(
    search_dir: &Path,
    config_path: Option<&Path>,
    cli: &CliOverrides,
) -> Result<Config> {
    let mut config = load_config(search_dir, config_path)?;
    apply_env_overrides(&mut config);
    Ok(merge_cli_with_config(config, cli))
}
