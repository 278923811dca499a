//! 元数据定义
//!
//! 提供类型描述符

use std::any::TypeId;
use std::fmt;
use std::hash::{Hash, Hasher};

/// 类型信息
///
/// 注册表以它作为键。两个 `TypeInfo` 相等当且仅当它们描述同一个类型，
/// 名称只用于日志和错误信息。
#[derive(Debug, Clone, Copy)]
pub struct TypeInfo {
    /// 类型ID
    pub id: TypeId,
    /// 完整类型名称（包含模块路径）
    pub name: &'static str,
}

impl TypeInfo {
    /// 从类型获取类型信息
    pub fn of<T: ?Sized + 'static>() -> Self {
        Self {
            id: TypeId::of::<T>(),
            name: std::any::type_name::<T>(),
        }
    }

    /// 从样例值获取类型信息
    pub fn of_val<T: ?Sized + 'static>(_sample: &T) -> Self {
        Self::of::<T>()
    }

    /// 获取简短的类型名称
    ///
    /// 去掉每个路径上的模块前缀，保留泛型结构，
    /// 例如 `core::option::Option<alloc::sync::Arc<app::Db>>` 变为 `Option<Arc<Db>>`。
    pub fn short_name(&self) -> String {
        let mut short = String::with_capacity(self.name.len());
        let mut start = 0;

        for (index, ch) in self.name.char_indices() {
            if !is_path_char(ch) {
                short.push_str(last_segment(&self.name[start..index]));
                short.push(ch);
                start = index + ch.len_utf8();
            }
        }
        short.push_str(last_segment(&self.name[start..]));

        short
    }
}

fn is_path_char(ch: char) -> bool {
    ch.is_alphanumeric() || ch == '_' || ch == ':'
}

fn last_segment(path: &str) -> &str {
    path.rsplit("::").next().unwrap_or(path)
}

impl PartialEq for TypeInfo {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for TypeInfo {}

impl Hash for TypeInfo {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

impl fmt::Display for TypeInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name)
    }
}
