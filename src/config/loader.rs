use super::ShopConfig;
use crate::error::{common, ErrorCode, ErrorExt, Result, ShopError};
use directories::ProjectDirs;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Name of the config file looked up in the working and per-user directories
pub const CONFIG_FILE_NAME: &str = "cookiebox.toml";

/// Get the per-user directory holding cookiebox configuration
pub fn get_global_config_dir() -> Option<PathBuf> {
    ProjectDirs::from("se", "cookiecompany", "cookiebox").map(|dirs| dirs.config_dir().to_path_buf())
}

/// Pick the config file to read.
///
/// An explicit path must exist. Otherwise the first existing candidate among
/// the working directory and the per-user directory wins; `None` means the
/// built-in defaults apply.
pub fn resolve_config_path(explicit: Option<&Path>, cwd: &Path) -> Result<Option<PathBuf>> {
    if let Some(path) = explicit {
        if !path.exists() {
            return Err(common::config_not_found(path));
        }
        return Ok(Some(path.to_path_buf()));
    }

    let local = cwd.join(CONFIG_FILE_NAME);
    if local.exists() {
        return Ok(Some(local));
    }

    Ok(get_global_config_dir()
        .map(|dir| dir.join(CONFIG_FILE_NAME))
        .filter(|path| path.exists()))
}

/// Load configuration from the resolved file (if any) and the environment
pub fn load_config(explicit: Option<&Path>) -> Result<ShopConfig> {
    let cwd = std::env::current_dir().map_err(|e| {
        ShopError::config_with_code(
            ErrorCode::CONFIG_PATH_ERROR,
            "Cannot determine working directory",
            None,
        )
        .with_source(e)
    })?;
    let mut config = match resolve_config_path(explicit, &cwd)? {
        Some(path) => read_config_file(&path)?,
        None => {
            debug!("No config file found, using defaults");
            ShopConfig::default()
        }
    };
    config.merge_env_vars();
    Ok(config)
}

/// Parse one TOML config file. Relative catalog paths resolve against the
/// file's directory.
pub fn read_config_file(path: &Path) -> Result<ShopConfig> {
    let content = fs::read_to_string(path)
        .to_config_error(format!("Cannot read config {}", path.display()))?;
    let mut config: ShopConfig = toml::from_str(&content).map_err(|e| {
        ShopError::config_with_code(
            ErrorCode::CONFIG_PARSE_ERROR,
            "config is not valid TOML",
            Some(path.to_path_buf()),
        )
        .with_source(e)
    })?;

    if let (Some(catalog), Some(base)) = (&config.catalog, path.parent()) {
        if catalog.is_relative() {
            config.catalog = Some(base.join(catalog));
        }
    }

    debug!("Loaded config from {}", path.display());
    Ok(config)
}
