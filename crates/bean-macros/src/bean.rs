//! Bean 声明宏实现

use proc_macro::TokenStream;
use proc_macro2::Span;
use quote::quote;
use syn::{
    parse::Parse, parse::ParseStream, parse_macro_input, punctuated::Punctuated, Expr, Fields,
    GenericArgument, Ident, ItemStruct, Lit, Meta, Path, PathArguments, Result, Token, Type,
};

/// Bean 声明参数
#[derive(Clone, Default)]
pub struct BeanArgs {
    /// 自定义 Bean 名称
    pub name: Option<String>,
    /// 强制使用 Default 构造
    pub use_default: bool,
    /// 直接实现的接口列表
    pub implements: Vec<Path>,
}

impl Parse for BeanArgs {
    fn parse(input: ParseStream) -> Result<Self> {
        let mut args = BeanArgs::default();

        let parsed = Punctuated::<Meta, Token![,]>::parse_terminated(input)?;

        for meta in parsed {
            match meta {
                Meta::Path(path) => {
                    if path.is_ident("default") {
                        args.use_default = true;
                    } else {
                        return Err(syn::Error::new_spanned(path, "未知的 #[bean] 参数"));
                    }
                }
                Meta::NameValue(nv) => {
                    if nv.path.is_ident("name") {
                        if let Expr::Lit(expr_lit) = nv.value {
                            if let Lit::Str(lit_str) = expr_lit.lit {
                                args.name = Some(lit_str.value());
                            }
                        }
                    } else {
                        return Err(syn::Error::new_spanned(nv.path, "未知的 #[bean] 参数"));
                    }
                }
                Meta::List(list) => {
                    if list.path.is_ident("implements") {
                        let interfaces =
                            list.parse_args_with(Punctuated::<Path, Token![,]>::parse_terminated)?;
                        args.implements.extend(interfaces);
                    } else {
                        return Err(syn::Error::new_spanned(list.path, "未知的 #[bean] 参数"));
                    }
                }
            }
        }

        Ok(args)
    }
}

/// 依赖字段的注入形态
enum FieldKind<'a> {
    /// `Arc<T>`，按具体类型注入
    Concrete(&'a Type),
    /// `Arc<dyn Trait>`，按接口注入
    Interface(&'a Type),
}

/// 实现 #[bean] 宏
pub fn bean_impl(args: TokenStream, input: TokenStream) -> TokenStream {
    let bean_args = if args.is_empty() {
        BeanArgs::default()
    } else {
        match syn::parse::<BeanArgs>(args) {
            Ok(args) => args,
            Err(e) => return e.to_compile_error().into(),
        }
    };

    let input_struct = parse_macro_input!(input as ItemStruct);

    if !input_struct.generics.params.is_empty() {
        return syn::Error::new_spanned(
            &input_struct.generics,
            "#[bean] 不支持泛型结构体",
        )
        .to_compile_error()
        .into();
    }

    let struct_name = &input_struct.ident;
    let bean_name = bean_args
        .name
        .clone()
        .unwrap_or_else(|| to_snake_case(&struct_name.to_string()));

    let constructor_setup = match generate_constructor_setup(&input_struct, &bean_args) {
        Ok(tokens) => tokens,
        Err(e) => return e.to_compile_error().into(),
    };

    let interface_bindings = bean_args.implements.iter().map(|iface| {
        quote! {
            .with_interface(bean_common::interface_binding!(#struct_name => dyn #iface))
        }
    });

    let lowercase = struct_name.to_string().to_lowercase();
    let provider_fn_name = Ident::new(&format!("__bean_definition_{lowercase}"), Span::call_site());
    let register_fn_name = Ident::new(&format!("__register_bean_{lowercase}"), Span::call_site());

    let expanded = quote! {
        #input_struct

        impl bean_common::Bean for #struct_name {
            fn bean_name(&self) -> &'static str {
                #bean_name
            }
        }

        #[doc(hidden)]
        fn #provider_fn_name() -> bean_common::BeanDefinition {
            bean_common::BeanDefinition::new::<#struct_name>(#bean_name)
                #constructor_setup
                #(#interface_bindings)*
        }

        // 使用 ctor 在程序启动时向全局注册表提交 Bean 定义
        #[ctor::ctor]
        fn #register_fn_name() {
            bean_common::register_bean_definition(bean_common::BeanRegistration {
                module_path: module_path!(),
                provider: #provider_fn_name,
            });
        }
    };

    TokenStream::from(expanded)
}

/// 依据结构体字段生成构造函数声明
///
/// 有字段时生成注入构造函数，字段顺序即参数顺序；无字段或显式
/// 指定 `default` 时生成默认构造。
fn generate_constructor_setup(
    input_struct: &ItemStruct,
    args: &BeanArgs,
) -> Result<proc_macro2::TokenStream> {
    let struct_name = &input_struct.ident;

    if args.use_default {
        return Ok(quote! {
            .with_default_constructor(|| {
                Ok(::std::sync::Arc::new(<#struct_name as ::core::default::Default>::default())
                    as bean_common::SharedBean)
            })
        });
    }

    let fields = match &input_struct.fields {
        Fields::Named(named) => &named.named,
        Fields::Unit => {
            return Ok(quote! {
                .with_default_constructor(|| {
                    Ok(::std::sync::Arc::new(#struct_name {}) as bean_common::SharedBean)
                })
            });
        }
        Fields::Unnamed(unnamed) => {
            return Err(syn::Error::new_spanned(
                unnamed,
                "#[bean] 不支持元组结构体，请使用命名字段",
            ));
        }
    };

    if fields.is_empty() {
        return Ok(quote! {
            .with_default_constructor(|| {
                Ok(::std::sync::Arc::new(#struct_name {}) as bean_common::SharedBean)
            })
        });
    }

    let mut parameter_infos = Vec::with_capacity(fields.len());
    let mut extractions = Vec::with_capacity(fields.len());
    let mut field_idents = Vec::with_capacity(fields.len());

    for field in fields {
        let ident = field
            .ident
            .as_ref()
            .ok_or_else(|| syn::Error::new_spanned(field, "字段缺少名称"))?;

        match classify_field_type(&field.ty)? {
            FieldKind::Concrete(inner) => {
                parameter_infos.push(quote! { bean_common::TypeInfo::of::<#inner>() });
                extractions.push(quote! {
                    let #ident = bean_common::downcast_bean::<#inner>(
                        args.next().ok_or("构造参数数量与声明不符")?,
                    )?;
                });
            }
            FieldKind::Interface(inner) => {
                parameter_infos.push(quote! { bean_common::TypeInfo::of_trait::<#inner>() });
                extractions.push(quote! {
                    let #ident = bean_common::downcast_trait_bean::<#inner>(
                        args.next().ok_or("构造参数数量与声明不符")?,
                    )?;
                });
            }
        }

        field_idents.push(ident);
    }

    Ok(quote! {
        .with_injection_constructor(bean_common::InjectionConstructor::new(
            vec![#(#parameter_infos),*],
            |args| {
                let mut args = args.into_iter();
                #(#extractions)*
                Ok(::std::sync::Arc::new(#struct_name { #(#field_idents),* })
                    as bean_common::SharedBean)
            },
        ))
    })
}

/// 解析依赖字段类型
///
/// 只接受 `Arc<T>` 与 `Arc<dyn Trait>` 两种形态。
fn classify_field_type(ty: &Type) -> Result<FieldKind<'_>> {
    let error = || {
        syn::Error::new_spanned(
            ty,
            "#[bean] 字段必须是 Arc<T> 或 Arc<dyn Trait>",
        )
    };

    let Type::Path(type_path) = ty else {
        return Err(error());
    };
    let segment = type_path.path.segments.last().ok_or_else(error)?;
    if segment.ident != "Arc" {
        return Err(error());
    }
    let PathArguments::AngleBracketed(arguments) = &segment.arguments else {
        return Err(error());
    };
    let mut types = arguments.args.iter().filter_map(|argument| match argument {
        GenericArgument::Type(inner) => Some(inner),
        _ => None,
    });
    let inner = types.next().ok_or_else(error)?;
    if types.next().is_some() {
        return Err(error());
    }

    match inner {
        Type::TraitObject(_) => Ok(FieldKind::Interface(inner)),
        _ => Ok(FieldKind::Concrete(inner)),
    }
}

/// 结构体名转蛇形命名
fn to_snake_case(name: &str) -> String {
    let mut result = String::with_capacity(name.len() + 4);
    for (index, ch) in name.chars().enumerate() {
        if ch.is_uppercase() {
            if index > 0 {
                result.push('_');
            }
            result.extend(ch.to_lowercase());
        } else {
            result.push(ch);
        }
    }
    result
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bean_args_defaults() {
        let args = BeanArgs::default();

        assert_eq!(args.name, None);
        assert!(!args.use_default);
        assert!(args.implements.is_empty());
    }

    #[test]
    fn test_bean_args_parsing() {
        let args: BeanArgs =
            syn::parse_str("name = \"primary_repository\", default, implements(UserRepository)")
                .unwrap();

        assert_eq!(args.name.as_deref(), Some("primary_repository"));
        assert!(args.use_default);
        assert_eq!(args.implements.len(), 1);
        assert!(args.implements[0].is_ident("UserRepository"));
    }

    #[test]
    fn test_unknown_argument_is_rejected() {
        assert!(syn::parse_str::<BeanArgs>("transient").is_err());
    }

    #[test]
    fn test_snake_case_conversion() {
        assert_eq!(to_snake_case("UserController"), "user_controller");
        assert_eq!(to_snake_case("JdbcUserRepository"), "jdbc_user_repository");
        assert_eq!(to_snake_case("Service"), "service");
    }
}
