//! 注入器配置

use infrastructure_common::{ConfigError, ConfigResult};
use serde::Deserialize;

/// 注入器配置
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct InjectorConfig {
    /// 复合类型的最大递归深度
    pub max_depth: usize,
    /// 覆盖已有注册时是否输出警告
    pub warn_on_overwrite: bool,
}

impl InjectorConfig {
    /// 默认最大递归深度
    pub const DEFAULT_MAX_DEPTH: usize = 100;

    /// 设置最大递归深度
    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }

    /// 设置覆盖警告
    pub fn with_warn_on_overwrite(mut self, warn: bool) -> Self {
        self.warn_on_overwrite = warn;
        self
    }

    /// 验证配置
    pub fn validate(&self) -> ConfigResult<()> {
        if self.max_depth == 0 {
            return Err(ConfigError::ValidationError {
                message: "max_depth 必须大于 0".to_string(),
            });
        }
        Ok(())
    }
}

impl Default for InjectorConfig {
    fn default() -> Self {
        Self {
            max_depth: Self::DEFAULT_MAX_DEPTH,
            warn_on_overwrite: true,
        }
    }
}
