//! # Dependency Injection Abstractions
//!
//! 依赖注入抽象层，定义构造函数注册和递归注入的核心接口。
//!
//! ## 核心接口
//!
//! - [`ConstructorRegistry`] - 构造函数注册表接口
//! - [`Injectable`] - 可注入类型，复合类型借此描述自己的可注入字段
//! - [`MemberInjector`] - 复合类型逐字段注入时使用的注入器
//! - [`InjectTarget`] - 注入目标（可写或不可写的位置）
//! - [`InjectorConfig`] - 注入器配置

pub mod container;
pub mod injectable;
pub mod registry;
pub mod target;

pub use container::*;
pub use injectable::*;
pub use registry::*;
pub use target::*;

pub use infrastructure_common::{DependencyError, DependencyResult, TypeInfo};
