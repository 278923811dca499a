//! 递归注入
//!
//! 对一个位置的注入规则：
//! 1. 类型已注册构造函数时，调用构造函数并写入；
//! 2. 未注册且不是复合类型时，不做任何事；
//! 3. 未注册的复合类型按声明顺序逐字段注入，遇到错误立即中止。

use crate::{Constructor, Registration};
use di_abstractions::{Injectable, InjectorConfig, MemberInjector};
use infrastructure_common::{DependencyError, DependencyResult};
use std::any::{type_name, TypeId};
use std::collections::HashMap;
use tracing::debug;

/// 一次顶层注入调用的上下文，持有读锁下的注册表视图
pub(crate) struct Injection<'a> {
    registrations: &'a HashMap<TypeId, Registration>,
    config: &'a InjectorConfig,
    depth: usize,
}

impl<'a> Injection<'a> {
    pub(crate) fn new(
        registrations: &'a HashMap<TypeId, Registration>,
        config: &'a InjectorConfig,
    ) -> Self {
        Self {
            registrations,
            config,
            depth: 0,
        }
    }

    /// 查找类型 `T` 的构造函数
    fn constructor<T: 'static>(&self) -> Option<&'a Constructor<T>> {
        let registrations: &'a HashMap<TypeId, Registration> = self.registrations;
        registrations
            .get(&TypeId::of::<T>())
            .and_then(|registration| registration.constructor.downcast_ref::<Constructor<T>>())
    }
}

impl MemberInjector for Injection<'_> {
    fn inject_value<T: Injectable>(&mut self, slot: &mut T) -> DependencyResult<bool> {
        if let Some(constructor) = self.constructor::<T>() {
            *slot = constructor();
            debug!(depth = self.depth, "注入构造结果: {}", type_name::<T>());
            return Ok(true);
        }

        if !T::COMPOSITE {
            return Ok(false);
        }

        if self.depth >= self.config.max_depth {
            return Err(DependencyError::depth_limit_exceeded(
                type_name::<T>(),
                self.config.max_depth,
            ));
        }

        debug!(depth = self.depth, "注入复合类型字段: {}", type_name::<T>());

        self.depth += 1;
        let result = slot.inject_members(self);
        self.depth -= 1;

        result.map(|()| true)
    }
}
