//! 注入目标
//!
//! 注入只能写入独占的可变位置。共享借用、缺失的位置（例如
//! `Arc::get_mut` 在实例被共享时返回的 `None`）都会被拒绝。

use crate::injectable::Injectable;

/// 注入目标 trait
pub trait InjectTarget {
    /// 目标位置中值的类型
    type Value: Injectable;

    /// 目标的种类，用于错误信息
    fn kind(&self) -> &'static str;

    /// 获取可写位置，不可写时返回 `None`
    fn writable(&mut self) -> Option<&mut Self::Value>;
}

impl<T: Injectable> InjectTarget for &mut T {
    type Value = T;

    fn kind(&self) -> &'static str {
        "&mut"
    }

    fn writable(&mut self) -> Option<&mut T> {
        Some(&mut **self)
    }
}

impl<T: Injectable> InjectTarget for &T {
    type Value = T;

    fn kind(&self) -> &'static str {
        "&"
    }

    fn writable(&mut self) -> Option<&mut T> {
        None
    }
}

impl<T: Injectable> InjectTarget for Option<&mut T> {
    type Value = T;

    fn kind(&self) -> &'static str {
        match self {
            Some(_) => "&mut",
            None => "None",
        }
    }

    fn writable(&mut self) -> Option<&mut T> {
        self.as_mut().map(|value| &mut **value)
    }
}
