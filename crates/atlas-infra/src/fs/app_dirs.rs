use anyhow::{Context, Result};
use std::path::PathBuf;

const APP_DIR_NAME: &str = "world-atlas";
const CONFIG_FILE_NAME: &str = "config.toml";

/// Get the World Atlas data root directory.
///
/// 获取 World Atlas 数据根目录。
///
/// # Platform-specific Paths / 平台特定路径
/// - macOS: ~/Library/Application Support/world-atlas
/// - Windows: %APPDATA%\world-atlas
/// - Linux: $XDG_DATA_HOME/world-atlas or ~/.local/share/world-atlas
///
/// Directories are not created here; the caller decides when to create them.
///
/// 此函数不自动创建目录。
pub fn app_data_dir() -> Result<PathBuf> {
    let base_dir = dirs::data_dir().context("Failed to get platform-specific data directory")?;
    Ok(base_dir.join(APP_DIR_NAME))
}

/// 获取日志目录
pub fn logs_dir() -> Result<PathBuf> {
    Ok(app_data_dir()?.join("logs"))
}

/// 获取配置目录
pub fn app_config_dir() -> Result<PathBuf> {
    let base_dir =
        dirs::config_dir().context("Failed to get platform-specific config directory")?;
    Ok(base_dir.join(APP_DIR_NAME))
}

/// Path of the config file used when none is given on the command line.
pub fn default_config_path() -> Result<PathBuf> {
    let path = app_config_dir()?.join(CONFIG_FILE_NAME);
    log::debug!("Default config path: {}", path.display());
    Ok(path)
}
