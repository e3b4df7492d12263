//! 配置文件读写（TOML）

use std::fs;
use std::path::{Path, PathBuf};

use crate::config::CodecConfig;
use crate::error::{Error, Result};

/// 默认配置文件路径.
///
/// # Errors
/// 当前平台没有配置目录时返回错误。
pub fn config_path() -> Result<PathBuf> {
    let mut path = dirs::config_dir()
        .ok_or_else(|| Error::InvalidInput("no config directory on this platform".to_string()))?;
    path.push("pincode32");
    path.push("config.toml");
    Ok(path)
}

/// 读取默认路径下的配置，文件不存在时返回默认配置.
///
/// # Errors
/// 配置路径解析、文件读取或 TOML 解析失败时返回错误。
pub fn load() -> Result<CodecConfig> {
    let path = config_path()?;
    load_from(&path)
}

/// 读取指定路径；文件不存在或为空时返回默认配置，缺省字段取默认值.
///
/// # Errors
/// 文件读取或 TOML 解析失败时返回错误。
pub fn load_from(path: &Path) -> Result<CodecConfig> {
    if !path.exists() {
        return Ok(CodecConfig::default());
    }
    let raw = fs::read_to_string(path)?;
    if raw.trim().is_empty() {
        return Ok(CodecConfig::default());
    }
    let config = toml::from_str(&raw)?;
    Ok(config)
}

/// # Errors
/// TOML 序列化失败时返回错误。
pub fn to_toml(config: &CodecConfig) -> Result<String> {
    Ok(toml::to_string_pretty(config)?)
}

/// # Errors
/// 目录创建、序列化或写文件失败时返回错误。
pub fn save_to(config: &CodecConfig, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::write(path, to_toml(config)?)?;
    Ok(())
}
