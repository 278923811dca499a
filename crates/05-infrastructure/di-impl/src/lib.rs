//! # 依赖注入具体实现
//!
//! 提供构造函数注册表 [`Registry`] 和递归注入的具体实现。
//!
//! ```ignore
//! use component_macros::Injectable;
//! use di_abstractions::ConstructorRegistry;
//! use di_impl::Registry;
//!
//! #[derive(Debug, Default, Clone, PartialEq, Injectable)]
//! struct Db(String);
//!
//! #[derive(Debug, Default, Injectable)]
//! struct HomeController {
//!     db: Db,
//! }
//!
//! let registry = Registry::new();
//! registry.register(|| Db("Awesome".to_string()));
//!
//! let mut controller = HomeController::default();
//! assert!(registry.inject(&mut controller)?);
//! assert_eq!(controller.db, Db("Awesome".to_string()));
//! ```

pub mod config;
pub mod global;
mod injection;

use di_abstractions::{ConstructorRegistry, InjectTarget, InjectorConfig, MemberInjector};
use infrastructure_common::{DependencyError, DependencyResult, TypeInfo};
use injection::Injection;
use parking_lot::RwLock;
use std::any::{Any, TypeId};
use std::collections::HashMap;
use tracing::{info, warn};

/// 类型化的构造函数
pub(crate) type Constructor<T> = Box<dyn Fn() -> T + Send + Sync>;

/// 构造函数注册信息
pub(crate) struct Registration {
    /// 类型信息
    pub(crate) type_info: TypeInfo,
    /// 擦除类型后的 [`Constructor<T>`]
    pub(crate) constructor: Box<dyn Any + Send + Sync>,
}

impl std::fmt::Debug for Registration {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Registration")
            .field("type_info", &self.type_info)
            .field("constructor", &"<function>")
            .finish()
    }
}

/// 构造函数注册表
///
/// 注册使用写锁，注入在整个递归过程中持有同一把读锁，
/// 因此构造函数内部不能再回调同一个注册表。
#[derive(Debug, Default)]
pub struct Registry {
    /// 构造函数注册信息
    registrations: RwLock<HashMap<TypeId, Registration>>,
    /// 注入器配置
    config: InjectorConfig,
}

impl Registry {
    /// 创建新的注册表
    pub fn new() -> Self {
        Self::default()
    }

    /// 使用指定配置创建注册表
    pub fn with_config(config: InjectorConfig) -> Self {
        Self {
            registrations: RwLock::new(HashMap::new()),
            config,
        }
    }

    /// 获取注入器配置
    pub fn config(&self) -> &InjectorConfig {
        &self.config
    }

    /// 已注册的构造函数数量
    pub fn len(&self) -> usize {
        self.registrations.read().len()
    }

    /// 是否没有任何注册
    pub fn is_empty(&self) -> bool {
        self.registrations.read().is_empty()
    }

    /// 清理所有注册
    pub fn clear(&self) {
        let removed = {
            let mut registrations = self.registrations.write();
            let removed = registrations.len();
            registrations.clear();
            removed
        };
        info!("清理注册表，移除了 {} 个构造函数", removed);
    }
}

impl ConstructorRegistry for Registry {
    fn register<T, F>(&self, constructor: F)
    where
        T: 'static,
        F: Fn() -> T + Send + Sync + 'static,
    {
        let type_info = TypeInfo::of::<T>();
        let constructor: Constructor<T> = Box::new(constructor);
        let registration = Registration {
            type_info,
            constructor: Box::new(constructor),
        };

        let previous = self.registrations.write().insert(type_info.id, registration);

        if previous.is_some() && self.config.warn_on_overwrite {
            warn!("覆盖已注册的构造函数: {}", type_info);
        } else {
            info!("注册构造函数: {}", type_info);
        }
    }

    fn inject<X: InjectTarget>(&self, mut target: X) -> DependencyResult<bool> {
        let registrations = self.registrations.read();

        let kind = target.kind();
        let Some(slot) = target.writable() else {
            return Err(DependencyError::target_not_writable(
                kind,
                std::any::type_name::<X::Value>(),
            ));
        };

        Injection::new(&registrations, &self.config).inject_value(slot)
    }

    fn is_registered_by_type(&self, type_info: &TypeInfo) -> bool {
        self.registrations.read().contains_key(&type_info.id)
    }

    fn registered_types(&self) -> Vec<TypeInfo> {
        self.registrations
            .read()
            .values()
            .map(|registration| registration.type_info)
            .collect()
    }
}
