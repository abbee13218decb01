//! # Configuration Loader / 配置加载器
//!
//! ## Responsibilities / 职责
//!
//! - Read TOML configuration files / 读取 TOML 配置文件
//! - Pick the config source: explicit path, default path, or built-in defaults
//! - Apply the `WORLD_ATLAS_BASE_URL` environment override
//!
//! Values are not validated here. A bad base URL surfaces when the HTTP
//! client is wired.

use anyhow::Context;
use std::path::{Path, PathBuf};

use atlas_core::config::AppConfig;

/// Environment variable replacing `[provider] base_url`.
pub const BASE_URL_ENV: &str = "WORLD_ATLAS_BASE_URL";

/// Load configuration from a TOML file
/// 从 TOML 文件加载配置
///
/// Missing sections and keys fall back to the built-in defaults.
///
/// # Errors / 错误
///
/// Returns error if the file cannot be read or is not valid TOML.
pub fn load_config(config_path: PathBuf) -> anyhow::Result<AppConfig> {
    let content = std::fs::read_to_string(&config_path)
        .with_context(|| format!("Failed to read config file: {}", config_path.display()))?;
    let toml_value: toml::Value =
        toml::from_str(&content).context("Failed to parse config as TOML")?;
    Ok(AppConfig::from_toml(&toml_value))
}

/// Resolve the effective configuration
/// 解析最终生效的配置
///
/// 1. `explicit` path, which must exist
/// 2. `<config_dir>/world-atlas/config.toml` when present
/// 3. built-in defaults
///
/// The environment override is applied last in every case.
pub fn resolve_config(explicit: Option<PathBuf>) -> anyhow::Result<AppConfig> {
    let default_path = match &explicit {
        Some(_) => None,
        None => atlas_infra::fs::default_config_path()
            .inspect_err(|err| tracing::debug!(error = %err, "No platform config directory"))
            .ok(),
    };

    let config = resolve_from(explicit, default_path.as_deref())?;
    Ok(apply_env_overrides(config, |key| std::env::var(key).ok()))
}

fn resolve_from(explicit: Option<PathBuf>, default_path: Option<&Path>) -> anyhow::Result<AppConfig> {
    if let Some(path) = explicit {
        tracing::info!(path = %path.display(), "Loading config");
        return load_config(path);
    }

    match default_path {
        Some(path) if path.is_file() => {
            tracing::info!(path = %path.display(), "Loading config");
            load_config(path.to_path_buf())
        }
        _ => {
            tracing::info!("No config file found, using defaults");
            Ok(AppConfig::with_defaults())
        }
    }
}

fn apply_env_overrides<F>(mut config: AppConfig, lookup: F) -> AppConfig
where
    F: Fn(&str) -> Option<String>,
{
    if let Some(base_url) = lookup(BASE_URL_ENV).filter(|v| !v.trim().is_empty()) {
        tracing::info!(%base_url, "Provider base URL overridden from environment");
        config.provider.base_url = base_url;
    }
    config
}
