//! Configuration for vidplayer.
//!
//! Configuration sources (highest priority first):
//! 1. Environment variables (VIDPLAYER_HOME, VIDPLAYER_CATALOG)
//! 2. Config file (.vidplayer/config.yaml)
//! 3. Defaults (~/.vidplayer, bundled catalog)
//!
//! Config file discovery:
//! - Searches current directory and parents for .vidplayer/config.yaml
//! - Falls back to config.yaml directly inside the vidplayer home
//! - The catalog path in a project config file is relative to the project
//!   root (the directory containing .vidplayer/); in the home config file it
//!   is relative to the home directory
//!
//! The `--catalog` command-line flag is applied on top of this by the CLI.

use std::path::{Path, PathBuf};
use std::sync::OnceLock;

use anyhow::{Context, Result};
use serde::Deserialize;

use crate::domain::DEFAULT_FLAG_REASON;

/// Global cached configuration (stores Result to handle init errors)
static CONFIG: OnceLock<Result<ResolvedConfig, String>> = OnceLock::new();

/// Raw config file schema (matches YAML structure)
#[derive(Debug, Clone, Deserialize)]
pub struct ConfigFile {
    pub version: String,
    #[serde(default)]
    pub catalog: CatalogConfig,
    #[serde(default)]
    pub moderation: Option<ModerationConfig>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct CatalogConfig {
    /// Catalog file (relative to project root)
    pub path: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ModerationConfig {
    pub default_reason: Option<String>,
}

/// Resolved configuration with absolute paths
#[derive(Debug, Clone)]
pub struct ResolvedConfig {
    /// Absolute path to vidplayer home
    pub home: PathBuf,
    /// Catalog file to load (bundled catalog if None)
    pub catalog: Option<PathBuf>,
    /// Reason recorded when a video is flagged without one
    pub default_flag_reason: String,
    /// Path to config file (if found)
    pub config_file: Option<PathBuf>,
}

/// Values taken from the environment
#[derive(Debug, Clone, Default)]
pub struct EnvOverrides {
    pub home: Option<PathBuf>,
    pub catalog: Option<PathBuf>,
}

impl EnvOverrides {
    /// Read VIDPLAYER_HOME and VIDPLAYER_CATALOG
    pub fn from_env() -> Self {
        Self {
            home: std::env::var("VIDPLAYER_HOME").ok().map(PathBuf::from),
            catalog: std::env::var("VIDPLAYER_CATALOG").ok().map(PathBuf::from),
        }
    }
}

/// Find config file by searching current directory and parents
fn find_config_file() -> Option<PathBuf> {
    let mut current = std::env::current_dir().ok()?;

    loop {
        let config_path = current.join(".vidplayer").join("config.yaml");
        if config_path.exists() {
            return Some(config_path);
        }

        if !current.pop() {
            break;
        }
    }

    None
}

/// Load and parse config file
fn load_config_file(path: &Path) -> Result<ConfigFile> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read config file: {}", path.display()))?;

    serde_yaml::from_str(&content)
        .with_context(|| format!("Failed to parse config file: {}", path.display()))
}

/// Config file inside the vidplayer home, if present
fn find_home_config_file(home: &Path) -> Option<PathBuf> {
    let config_path = home.join("config.yaml");
    config_path.exists().then_some(config_path)
}

/// Directory that relative paths in a config file resolve against
fn config_base_dir<'a>(config_path: &'a Path, home: &'a Path) -> &'a Path {
    match config_path.parent() {
        Some(dir) if dir == home => home,
        // Parent of .vidplayer/ (i.e., grandparent of config.yaml)
        Some(dir) => dir.parent().unwrap_or(Path::new(".")),
        None => Path::new("."),
    }
}

/// Resolve a path that may be relative to the project root
fn resolve_path(base: &Path, path_str: &str) -> PathBuf {
    let path = PathBuf::from(path_str);
    if path.is_absolute() {
        path
    } else {
        base.join(path)
            .canonicalize()
            .unwrap_or_else(|_| base.join(path_str))
    }
}

/// Merge defaults, an optional config file and environment overrides
fn resolve(project_file: Option<PathBuf>, env: EnvOverrides) -> Result<ResolvedConfig> {
    let home = match env.home {
        Some(home) => home,
        None => dirs::home_dir()
            .context("Failed to determine home directory")?
            .join(".vidplayer"),
    };
    let config_file = project_file.or_else(|| find_home_config_file(&home));

    let mut catalog = None;
    let mut default_flag_reason = DEFAULT_FLAG_REASON.to_string();

    if let Some(ref config_path) = config_file {
        let config = load_config_file(config_path)?;
        let base_dir = config_base_dir(config_path, &home);

        catalog = config
            .catalog
            .path
            .as_deref()
            .map(|p| resolve_path(base_dir, p));

        if let Some(reason) = config
            .moderation
            .and_then(|m| m.default_reason)
            .filter(|r| !r.trim().is_empty())
        {
            default_flag_reason = reason;
        }
    }

    Ok(ResolvedConfig {
        home,
        catalog: env.catalog.or(catalog),
        default_flag_reason,
        config_file,
    })
}

/// Load configuration from all sources
fn load_config() -> Result<ResolvedConfig> {
    resolve(find_config_file(), EnvOverrides::from_env())
}

/// Get the global configuration (loads once, then cached)
pub fn config() -> Result<&'static ResolvedConfig> {
    let result = CONFIG.get_or_init(|| load_config().map_err(|e| e.to_string()));

    match result {
        Ok(config) => Ok(config),
        Err(e) => anyhow::bail!("{}", e),
    }
}
