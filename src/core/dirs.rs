use crate::core::error::Result;
use std::path::PathBuf;

pub const APP_DIR_NAME: &str = "git-scout";

/// Directory holding `config.json`. `XDG_CONFIG_HOME` wins on every
/// platform, then the platform config directory, then `~/.config`.
pub fn get_config_directory() -> Result<PathBuf> {
    let base = std::env::var_os("XDG_CONFIG_HOME")
        .filter(|value| !value.is_empty())
        .map(PathBuf::from)
        .or_else(dirs::config_dir)
        .or_else(|| dirs::home_dir().map(|home| home.join(".config")))
        .unwrap_or_default();

    Ok(base.join(APP_DIR_NAME))
}
