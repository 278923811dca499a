//! 构造函数注册表抽象接口

use crate::target::InjectTarget;
use infrastructure_common::{DependencyResult, TypeInfo};
use tracing::{debug, error};

/// 构造函数注册表 trait
///
/// 提供构造函数注册和递归注入的核心接口
pub trait ConstructorRegistry: Send + Sync {
    /// 注册类型 `T` 的构造函数，已有的注册会被覆盖
    fn register<T, F>(&self, constructor: F)
    where
        T: 'static,
        F: Fn() -> T + Send + Sync + 'static;

    /// 以样例值的类型注册构造函数
    fn register_like<T, F>(&self, sample: &T, constructor: F)
    where
        T: 'static,
        F: Fn() -> T + Send + Sync + 'static,
    {
        debug!("按样例值注册构造函数: {}", TypeInfo::of_val(sample));
        self.register::<T, F>(constructor);
    }

    /// 注入目标
    ///
    /// 返回是否发生了注入。只有目标不可写或者超出注入深度时才会返回错误。
    fn inject<X: InjectTarget>(&self, target: X) -> DependencyResult<bool>;

    /// 注入目标，出错时直接 panic
    fn must_inject<X: InjectTarget>(&self, target: X) -> bool {
        match self.inject(target) {
            Ok(injected) => injected,
            Err(err) => {
                error!("依赖注入失败: {}", err);
                panic!("依赖注入失败: {err}");
            }
        }
    }

    /// 检查类型是否已注册
    fn is_registered<T: 'static>(&self) -> bool {
        self.is_registered_by_type(&TypeInfo::of::<T>())
    }

    /// 检查类型是否已注册（通过类型信息）
    fn is_registered_by_type(&self, type_info: &TypeInfo) -> bool;

    /// 获取所有已注册的类型
    fn registered_types(&self) -> Vec<TypeInfo>;
}
