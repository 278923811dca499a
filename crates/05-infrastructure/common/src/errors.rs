//! 错误类型定义

use thiserror::Error;

/// 依赖注入错误类型
#[derive(Error, Debug)]
pub enum DependencyError {
    #[error("注入目标不可写: 目标类型 '{kind}', 值类型 '{type_name}'")]
    TargetNotWritable { kind: String, type_name: String },

    #[error("注入深度超出限制: {type_name}, 最大深度 {max_depth}")]
    DepthLimitExceeded { type_name: String, max_depth: usize },
}

impl DependencyError {
    /// 创建目标不可写错误
    pub fn target_not_writable(kind: impl Into<String>, type_name: impl Into<String>) -> Self {
        Self::TargetNotWritable {
            kind: kind.into(),
            type_name: type_name.into(),
        }
    }

    /// 创建深度超限错误
    pub fn depth_limit_exceeded(type_name: impl Into<String>, max_depth: usize) -> Self {
        Self::DepthLimitExceeded {
            type_name: type_name.into(),
            max_depth,
        }
    }
}

/// 配置错误类型
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("配置文件不存在: {path}")]
    FileNotFound { path: String },

    #[error("配置解析失败: {source}")]
    ParseError {
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    #[error("配置验证失败: {message}")]
    ValidationError { message: String },
}

/// 结果类型别名
pub type DependencyResult<T> = Result<T, DependencyError>;
pub type ConfigResult<T> = Result<T, ConfigError>;
