use std::fmt;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

use super::types::ReduceConfig;

/// Project-local config file name, looked up in the current directory.
pub const LOCAL_CONFIG: &str = ".fixstr.toml";

/// Where a resolved config came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigSource {
    /// Passed explicitly (`--config`).
    Explicit(PathBuf),
    /// `.fixstr.toml` in the working directory.
    Local(PathBuf),
    /// `~/.config/fixstr/config.toml`.
    Global(PathBuf),
    /// No file found; built-in defaults.
    Default,
}

impl fmt::Display for ConfigSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigSource::Explicit(p) => write!(f, "explicit: {}", p.display()),
            ConfigSource::Local(p) => write!(f, "local: {}", p.display()),
            ConfigSource::Global(p) => write!(f, "global: {}", p.display()),
            ConfigSource::Default => f.write_str("built-in defaults"),
        }
    }
}

/// Resolve the active config.
///
/// Lookup order, first hit wins:
/// 1. `explicit` path (must exist)
/// 2. `.fixstr.toml` in the current directory
/// 3. `~/.config/fixstr/config.toml`
/// 4. `ReduceConfig::default()`
pub fn resolve_config(explicit: Option<&Path>) -> Result<(ReduceConfig, ConfigSource)> {
    let cwd = std::env::current_dir().context("failed to read current directory")?;
    resolve_config_in(explicit, &cwd, home_dir().as_deref())
}

fn resolve_config_in(
    explicit: Option<&Path>,
    local_dir: &Path,
    home: Option<&Path>,
) -> Result<(ReduceConfig, ConfigSource)> {
    if let Some(path) = explicit {
        let config = load_config(path)?;
        return Ok((config, ConfigSource::Explicit(path.to_path_buf())));
    }

    let local = local_dir.join(LOCAL_CONFIG);
    if local.is_file() {
        let config = load_config(&local)?;
        return Ok((config, ConfigSource::Local(local)));
    }

    if let Some(global) = home.map(global_config_in) {
        if global.is_file() {
            let config = load_config(&global)?;
            return Ok((config, ConfigSource::Global(global)));
        }
    }

    log::debug!("no config file found, using defaults");
    Ok((ReduceConfig::default(), ConfigSource::Default))
}

/// Read and parse a single config file.
pub fn load_config(path: &Path) -> Result<ReduceConfig> {
    let contents = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read config {}", path.display()))?;
    let config: ReduceConfig = toml::from_str(&contents)
        .with_context(|| format!("failed to parse config {}", path.display()))?;
    log::debug!("loaded config from {}", path.display());
    Ok(config)
}

/// Path of the global user config, if a home directory is known.
pub fn global_config_path() -> Option<PathBuf> {
    home_dir().map(|h| global_config_in(&h))
}

fn global_config_in(home: &Path) -> PathBuf {
    home.join(".config/fixstr/config.toml")
}

fn home_dir() -> Option<PathBuf> {
    #[cfg(target_os = "windows")]
    {
        std::env::var("USERPROFILE").ok().map(PathBuf::from)
    }
    #[cfg(not(target_os = "windows"))]
    {
        std::env::var("HOME").ok().map(PathBuf::from)
    }
}
