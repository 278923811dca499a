//! 注入器配置加载
//!
//! 依次叠加可选的配置文件（TOML/JSON/YAML，按扩展名识别）和
//! `LORN_DI_` 前缀的环境变量，例如 `LORN_DI_MAX_DEPTH=32`。

use ::config::{Config, Environment, File};
use di_abstractions::InjectorConfig;
use infrastructure_common::{ConfigError, ConfigResult};
use std::path::Path;
use tracing::debug;

/// 环境变量前缀
pub const ENV_PREFIX: &str = "LORN_DI";

/// 加载注入器配置
pub fn load_config(path: Option<&Path>) -> ConfigResult<InjectorConfig> {
    let mut builder = Config::builder();

    if let Some(path) = path {
        if !path.exists() {
            return Err(ConfigError::FileNotFound {
                path: path.display().to_string(),
            });
        }
        debug!("加载注入器配置文件: {}", path.display());
        builder = builder.add_source(File::from(path));
    }

    let settings = builder
        .add_source(Environment::with_prefix(ENV_PREFIX).try_parsing(true))
        .build()
        .map_err(|e| ConfigError::ParseError {
            source: Box::new(e),
        })?;

    let config: InjectorConfig = settings
        .try_deserialize()
        .map_err(|e| ConfigError::ParseError {
            source: Box::new(e),
        })?;

    config.validate()?;

    debug!(
        max_depth = config.max_depth,
        warn_on_overwrite = config.warn_on_overwrite,
        "注入器配置加载完成"
    );
    Ok(config)
}
