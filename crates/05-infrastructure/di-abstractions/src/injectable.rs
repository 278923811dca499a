//! 可注入类型抽象
//!
//! Rust 没有运行时反射，复合类型通过实现 [`Injectable`] 描述自己的字段，
//! 通常由 `#[derive(Injectable)]` 生成。

use infrastructure_common::DependencyResult;
use std::collections::{BTreeMap, HashMap, HashSet, VecDeque};
use std::marker::PhantomData;
use std::path::PathBuf;
use std::rc::Rc;
use std::sync::Arc;
use std::time::Duration;

/// 可注入类型 trait
///
/// 叶子类型使用默认实现即可：没有注册构造函数时不会注入任何内容。
/// 复合类型需要将 [`Injectable::COMPOSITE`] 设为 `true`，并在
/// [`Injectable::inject_members`] 中按声明顺序逐个交给注入器。
pub trait Injectable: 'static {
    /// 是否为复合类型
    const COMPOSITE: bool = false;

    /// 按声明顺序注入各个字段
    ///
    /// 任一字段出错时立即返回，后续字段不再处理。
    fn inject_members<I: MemberInjector>(&mut self, injector: &mut I) -> DependencyResult<()> {
        let _ = injector;
        Ok(())
    }
}

/// 字段注入器 trait
///
/// 由注册表实现提供，复合类型在 [`Injectable::inject_members`] 中调用。
pub trait MemberInjector {
    /// 向一个位置注入值，返回是否发生了注入
    fn inject_value<T: Injectable>(&mut self, slot: &mut T) -> DependencyResult<bool>;

    /// 注入一个字段
    ///
    /// 先创建字段类型的零值并对其注入，只有注入成功时才写回字段，
    /// 否则字段保持原值。
    fn inject_member<T: Injectable + Default>(&mut self, member: &mut T) -> DependencyResult<bool> {
        let mut fresh = T::default();
        let injected = self.inject_value(&mut fresh)?;
        if injected {
            *member = fresh;
        }
        Ok(injected)
    }
}

macro_rules! leaf_injectable {
    ($($ty:ty),* $(,)?) => {
        $(impl Injectable for $ty {})*
    };
}

leaf_injectable!(
    (), bool, char, u8, u16, u32, u64, u128, usize, i8, i16, i32, i64, i128, isize, f32, f64,
    String, &'static str, PathBuf, Duration,
);

// 集合、可选值和智能指针只作为整体匹配注册表，不会深入其内部
impl<T: 'static> Injectable for Option<T> {}
impl<T: 'static> Injectable for Vec<T> {}
impl<T: 'static> Injectable for VecDeque<T> {}
impl<T: 'static, S: 'static> Injectable for HashSet<T, S> {}
impl<K: 'static, V: 'static, S: 'static> Injectable for HashMap<K, V, S> {}
impl<K: 'static, V: 'static> Injectable for BTreeMap<K, V> {}
impl<T: ?Sized + 'static> Injectable for Box<T> {}
impl<T: ?Sized + 'static> Injectable for Arc<T> {}
impl<T: ?Sized + 'static> Injectable for Rc<T> {}
impl<T: ?Sized + 'static> Injectable for PhantomData<T> {}
