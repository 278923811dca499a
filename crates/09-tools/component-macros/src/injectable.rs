//! #[derive(Injectable)] 实现

use crate::utils::{injectable_fields, mentions_type_param, parse_container_options};
use proc_macro2::TokenStream;
use quote::quote;
use syn::{parse_quote, Data, DeriveInput, Fields, Result};

/// 生成 `Injectable` 实现
pub fn derive_injectable_impl(input: &DeriveInput) -> Result<TokenStream> {
    let name = &input.ident;
    let options = parse_container_options(&input.attrs)?;

    let mut generics = input.generics.clone();
    for param in generics.type_params_mut() {
        param.bounds.push(parse_quote!('static));
    }

    let members = match &input.data {
        Data::Struct(data) => match &data.fields {
            Fields::Named(named) if !options.leaf => Some(injectable_fields(named)?),
            _ => None,
        },
        Data::Enum(_) => None,
        Data::Union(_) => {
            return Err(syn::Error::new_spanned(
                input,
                "Injectable 只能用于结构体或枚举",
            ));
        }
    };

    let Some(fields) = members else {
        let (impl_generics, ty_generics, where_clause) = generics.split_for_impl();
        return Ok(quote! {
            impl #impl_generics ::di_abstractions::Injectable for #name #ty_generics #where_clause {}
        });
    };

    // 引用类型参数的字段类型需要额外的约束
    let where_clause = generics.make_where_clause();
    for field in &fields {
        if mentions_type_param(&field.ty, &input.generics) {
            let ty = &field.ty;
            where_clause.predicates.push(parse_quote! {
                #ty: ::di_abstractions::Injectable + ::core::default::Default
            });
        }
    }
    let (impl_generics, ty_generics, where_clause) = generics.split_for_impl();

    let idents = fields.iter().filter_map(|field| field.ident.as_ref());
    let body = if fields.is_empty() {
        quote! { let _ = injector; }
    } else {
        quote! {
            #(::di_abstractions::MemberInjector::inject_member(injector, &mut self.#idents)?;)*
        }
    };

    Ok(quote! {
        impl #impl_generics ::di_abstractions::Injectable for #name #ty_generics #where_clause {
            const COMPOSITE: bool = true;

            fn inject_members<__I: ::di_abstractions::MemberInjector>(
                &mut self,
                injector: &mut __I,
            ) -> ::di_abstractions::DependencyResult<()> {
                #body
                ::core::result::Result::Ok(())
            }
        }
    })
}
