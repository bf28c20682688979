use std::fs;
use std::path::{Path, PathBuf};

use super::core::RoiConfig;
use crate::errors::{Error, Result};

pub const CONFIG_FILE_NAME: &str = ".roi-engine.toml";
const MAX_TRAVERSAL_DEPTH: usize = 10;

/// Parse configuration from a TOML string.
pub fn parse_config(contents: &str) -> std::result::Result<RoiConfig, String> {
    toml::from_str::<RoiConfig>(contents).map_err(|e| e.to_string())
}

/// Load a configuration file the user pointed at explicitly.
///
/// Unlike discovery, any failure here is reported to the caller.
pub fn load_config_from(path: &Path) -> Result<RoiConfig> {
    let contents = fs::read_to_string(path).map_err(|e| Error::file_system(path, e))?;
    let config = parse_config(&contents).map_err(|message| Error::ConfigParse {
        path: path.to_path_buf(),
        message,
    })?;
    log::debug!("Loaded config from {}", path.display());
    Ok(config)
}

/// Try one candidate during discovery; missing files are silent, broken
/// ones are logged and skipped.
pub(crate) fn try_load_config_from_path(config_path: &Path) -> Option<RoiConfig> {
    match load_config_from(config_path) {
        Ok(config) => Some(config),
        Err(Error::FileSystem { source, .. }) if source.kind() == std::io::ErrorKind::NotFound => {
            None
        }
        Err(e) => {
            log::warn!("{}. Using defaults.", e);
            None
        }
    }
}

/// Directories from `start` upwards, at most `max_depth` of them.
pub fn directory_ancestors(start: PathBuf, max_depth: usize) -> impl Iterator<Item = PathBuf> {
    std::iter::successors(Some(start), |dir| {
        let mut parent = dir.clone();
        if parent.pop() {
            Some(parent)
        } else {
            None
        }
    })
    .take(max_depth)
}

/// Search `start` and its ancestors for `.roi-engine.toml`.
pub fn discover_config(start: PathBuf) -> RoiConfig {
    directory_ancestors(start, MAX_TRAVERSAL_DEPTH)
        .map(|dir| dir.join(CONFIG_FILE_NAME))
        .find_map(|path| try_load_config_from_path(&path))
        .unwrap_or_else(|| {
            log::debug!(
                "No config found after checking {} directories. Using default config.",
                MAX_TRAVERSAL_DEPTH
            );
            RoiConfig::default()
        })
}

/// Discover configuration from the current directory.
pub fn load_config() -> RoiConfig {
    match std::env::current_dir() {
        Ok(dir) => discover_config(dir),
        Err(e) => {
            log::warn!(
                "Failed to get current directory: {}. Using default config.",
                e
            );
            RoiConfig::default()
        }
    }
}

/// Explicit path wins; otherwise discover.
pub fn resolve_config(explicit: Option<&Path>) -> Result<RoiConfig> {
    match explicit {
        Some(path) => load_config_from(path),
        None => Ok(load_config()),
    }
}
