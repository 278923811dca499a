//! # Infrastructure Common
//!
//! 这个 crate 提供了依赖注入基础设施的公共类型。
//!
//! ## 核心类型
//!
//! - [`TypeInfo`] - 类型描述符，注册表的键
//! - [`DependencyError`] - 依赖注入错误
//! - [`ConfigError`] - 注入器配置错误

pub mod errors;
pub mod metadata;

pub use errors::*;
pub use metadata::*;
