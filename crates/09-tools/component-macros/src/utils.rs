//! 宏工具函数

use proc_macro2::{TokenStream, TokenTree};
use quote::ToTokens;
use syn::{Attribute, Field, FieldsNamed, Generics, Ident, Result, Type};

/// 类型级别的 `#[inject(...)]` 参数
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContainerOptions {
    /// 强制按叶子类型处理
    pub leaf: bool,
}

/// 解析类型上的 `#[inject(...)]` 属性
pub fn parse_container_options(attrs: &[Attribute]) -> Result<ContainerOptions> {
    let mut options = ContainerOptions::default();

    for attr in attrs.iter().filter(|attr| attr.path().is_ident("inject")) {
        attr.parse_nested_meta(|meta| {
            if meta.path.is_ident("leaf") {
                options.leaf = true;
                Ok(())
            } else {
                Err(meta.error("不支持的 inject 参数，类型上只支持 `leaf`"))
            }
        })?;
    }

    Ok(options)
}

/// 字段是否标记了 `#[inject(skip)]`
pub fn is_skipped(field: &Field) -> Result<bool> {
    let mut skipped = false;

    for attr in field.attrs.iter().filter(|attr| attr.path().is_ident("inject")) {
        attr.parse_nested_meta(|meta| {
            if meta.path.is_ident("skip") {
                skipped = true;
                Ok(())
            } else {
                Err(meta.error("不支持的 inject 参数，字段上只支持 `skip`"))
            }
        })?;
    }

    Ok(skipped)
}

/// 按声明顺序收集需要注入的字段
pub fn injectable_fields(fields: &FieldsNamed) -> Result<Vec<&Field>> {
    let mut injectable = Vec::new();

    for field in &fields.named {
        if !is_skipped(field)? {
            injectable.push(field);
        }
    }

    Ok(injectable)
}

/// 字段类型是否引用了结构体的类型参数
pub fn mentions_type_param(ty: &Type, generics: &Generics) -> bool {
    let params: Vec<&Ident> = generics.type_params().map(|param| &param.ident).collect();
    !params.is_empty() && contains_ident(ty.to_token_stream(), &params)
}

fn contains_ident(tokens: TokenStream, idents: &[&Ident]) -> bool {
    tokens.into_iter().any(|token| match token {
        TokenTree::Ident(ident) => idents.iter().any(|param| **param == ident),
        TokenTree::Group(group) => contains_ident(group.stream(), idents),
        _ => false,
    })
}
