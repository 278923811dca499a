//! 全局注册表
//!
//! 为不方便传递 [`Registry`] 的调用方提供进程级的默认注册表。
//! 首次使用时从 `LORN_DI_*` 环境变量读取配置。

use crate::config::load_config;
use crate::Registry;
use di_abstractions::{ConstructorRegistry, InjectTarget, InjectorConfig};
use infrastructure_common::DependencyResult;
use once_cell::sync::Lazy;
use tracing::warn;

static GLOBAL_REGISTRY: Lazy<Registry> = Lazy::new(|| {
    let config = load_config(None).unwrap_or_else(|err| {
        warn!("全局注册表配置无效，使用默认配置: {}", err);
        InjectorConfig::default()
    });
    Registry::with_config(config)
});

/// 获取全局注册表
pub fn global() -> &'static Registry {
    &GLOBAL_REGISTRY
}

/// 在全局注册表中注册构造函数
pub fn register<T, F>(constructor: F)
where
    T: 'static,
    F: Fn() -> T + Send + Sync + 'static,
{
    global().register(constructor);
}

/// 使用全局注册表注入目标
pub fn inject<X: InjectTarget>(target: X) -> DependencyResult<bool> {
    global().inject(target)
}

/// 使用全局注册表注入目标，出错时 panic
pub fn must_inject<X: InjectTarget>(target: X) -> bool {
    global().must_inject(target)
}
