//! # Component Macros
//!
//! 这个 crate 提供了可注入类型的派生宏。
//!
//! ## 核心宏
//!
//! - [`Injectable`] - 为结构体或枚举实现 `di_abstractions::Injectable`
//!
//! ## 使用示例
//!
//! ```rust,ignore
//! use component_macros::Injectable;
//!
//! #[derive(Debug, Default, Injectable)]
//! pub struct Db(String);
//!
//! #[derive(Debug, Default, Injectable)]
//! pub struct HomeController {
//!     db: Db,
//!     #[inject(skip)]
//!     request_count: u64,
//! }
//! ```

use proc_macro::TokenStream;
use syn::{parse_macro_input, DeriveInput};

mod injectable;
mod utils;

/// 可注入类型派生宏
///
/// - 具名字段结构体生成复合类型实现，按声明顺序逐字段注入；
///   被注入的字段类型需要实现 `Injectable + Default`
/// - 元组结构体、单元结构体和枚举生成叶子类型实现
///
/// # 属性
///
/// - `#[inject(skip)]`（字段）- 注入时跳过该字段，字段保持原值
/// - `#[inject(leaf)]`（类型）- 即使是具名字段结构体也按叶子类型处理
///
/// # 示例
///
/// ```rust,ignore
/// #[derive(Default, Injectable)]
/// #[inject(leaf)]
/// pub struct Settings {
///     pub url: String,
/// }
/// ```
#[proc_macro_derive(Injectable, attributes(inject))]
pub fn derive_injectable(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    injectable::derive_injectable_impl(&input)
        .unwrap_or_else(syn::Error::into_compile_error)
        .into()
}
